//! Redirect targets and request path normalization.
//!
//! - Table keys: decoded, leading `/`, no trailing `/`, no query or fragment
//! - Browser boundary: decode on input, encode on output

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped when a target is written into a `Location` header.
const PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A redirect destination split into path and optional in-page fragment.
///
/// `Display` reproduces the authored string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RedirectTarget {
    pub path: String,
    pub fragment: Option<String>,
}

impl RedirectTarget {
    /// Split at the first `#`. An empty fragment (`/a#`) is kept as `Some("")`.
    pub fn parse(target: &str) -> Self {
        match target.split_once('#') {
            Some((path, fragment)) => Self {
                path: path.to_string(),
                fragment: Some(fragment.to_string()),
            },
            None => Self {
                path: target.to_string(),
                fragment: None,
            },
        }
    }

    #[inline]
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Value for a `Location` header or `<meta refresh>`.
    ///
    /// Relative (`/guides/x#y`) unless `base` is given, in which case the
    /// target is resolved against it (`https://docs.example.com/guides/x#y`).
    pub fn to_location(&self, base: Option<&url::Url>) -> String {
        let encoded = self.to_encoded();
        match base {
            Some(base) => base
                .join(&encoded)
                .map(String::from)
                .unwrap_or(encoded),
            None => encoded,
        }
    }

    /// Percent-encode characters that are unsafe in a header value.
    pub fn to_encoded(&self) -> String {
        let path = utf8_percent_encode(&self.path, PATH_ESCAPE).to_string();
        match &self.fragment {
            Some(fragment) => {
                format!("{}#{}", path, utf8_percent_encode(fragment, PATH_ESCAPE))
            }
            None => path,
        }
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Normalize a raw request URL into table-key form.
///
/// Strips query string and fragment, percent-decodes, ensures a leading `/`
/// and trims trailing slashes (the root stays `/`). Case is never changed.
///
/// ```ignore
/// normalize_request_path("/quickstart/?ref=nav")  -> "/quickstart"
/// normalize_request_path("/custom%5FCSS")         -> "/custom_CSS"
/// normalize_request_path("")                      -> "/"
/// ```
pub fn normalize_request_path(raw: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or(raw).trim();
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string());

    let trimmed = decoded.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_fragment() {
        let target = RedirectTarget::parse("/guides/quickstart");
        assert_eq!(target.path, "/guides/quickstart");
        assert_eq!(target.fragment, None);
        assert!(!target.has_fragment());
    }

    #[test]
    fn test_parse_with_fragment() {
        let target = RedirectTarget::parse("/guides/sharing-your-app#embedding-hosted-spaces");
        assert_eq!(target.path, "/guides/sharing-your-app");
        assert_eq!(target.fragment.as_deref(), Some("embedding-hosted-spaces"));
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["/playground", "/guides/quickstart#more-complexity", "/a#"] {
            assert_eq!(RedirectTarget::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_to_location_relative() {
        let target = RedirectTarget::parse("/guides/key-features#example-inputs");
        assert_eq!(target.to_location(None), "/guides/key-features#example-inputs");
    }

    #[test]
    fn test_to_location_with_base() {
        let base = url::Url::parse("https://docs.example.com/").unwrap();
        let target = RedirectTarget::parse("/guides/quickstart#more-complexity");
        assert_eq!(
            target.to_location(Some(&base)),
            "https://docs.example.com/guides/quickstart#more-complexity"
        );
    }

    #[test]
    fn test_to_encoded_escapes_spaces() {
        let target = RedirectTarget::parse("/guides/a b#c d");
        assert_eq!(target.to_encoded(), "/guides/a%20b#c%20d");
    }

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        assert_eq!(normalize_request_path("/quickstart?ref=nav"), "/quickstart");
        assert_eq!(normalize_request_path("/quickstart#top"), "/quickstart");
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize_request_path("/quickstart/"), "/quickstart");
        assert_eq!(normalize_request_path("/quickstart//"), "/quickstart");
        assert_eq!(normalize_request_path("/"), "/");
        assert_eq!(normalize_request_path(""), "/");
    }

    #[test]
    fn test_normalize_decodes_and_keeps_case() {
        assert_eq!(normalize_request_path("/Gradio%5Fand%5FComet"), "/Gradio_and_Comet");
        assert_eq!(normalize_request_path("/Quickstart"), "/Quickstart");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_request_path("demos"), "/demos");
    }

    #[test]
    fn test_normalize_invalid_utf8_falls_back() {
        assert_eq!(normalize_request_path("/bad%FF"), "/bad%FF");
    }
}
