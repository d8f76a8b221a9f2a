//! Embedded templates.
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars { canonical_url: "/guides/quickstart" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};
    use crate::utils::html::escape;

    /// Variables for redirect.html template.
    pub struct RedirectVars<'a> {
        pub canonical_url: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn apply(&self, content: &str) -> String {
            // JSON string literal for the script; `</` is split so it can't close the tag
            let json = serde_json::to_string(self.canonical_url)
                .unwrap_or_else(|_| "\"/\"".into())
                .replace("</", "<\\/");
            content
                .replace("__CANONICAL_URL_JSON__", &json)
                .replace("__CANONICAL_URL__", &escape(self.canonical_url))
        }
    }

    /// Redirect page written for every old path.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_template() {
        let vars = build::RedirectVars {
            canonical_url: "/guides/quickstart#more-complexity",
        };
        let html = build::REDIRECT_HTML.render(&vars);

        assert!(html.contains(r#"<link rel="canonical" href="/guides/quickstart#more-complexity">"#));
        assert!(html.contains(r#"content="0; url=/guides/quickstart#more-complexity""#));
        assert!(html.contains(r#"location.replace("/guides/quickstart#more-complexity");"#));
        assert!(!html.contains("__CANONICAL_URL"));
    }

    #[test]
    fn test_redirect_template_escapes() {
        let vars = build::RedirectVars {
            canonical_url: "/a\"</script>",
        };
        let html = build::REDIRECT_HTML.render(&vars);

        assert!(html.contains("href=\"/a&quot;&lt;/script&gt;\""));
        assert!(html.contains(r#"location.replace("/a\"<\/script>");"#));
    }
}
