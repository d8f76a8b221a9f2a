//! `_redirects` rules file (Netlify / Cloudflare Pages format).
//!
//! ```text
//! /quickstart /guides/quickstart 301
//! /introduction_to_blocks /guides/quickstart#more-complexity 301
//! ```

use crate::config::RedirectStatus;
use crate::table::RedirectTable;

/// File name hosts look for in the output root.
pub const REDIRECTS_FILE: &str = "_redirects";

/// One `from to status` line per entry, in authored order.
pub fn render_redirects_file(
    table: &RedirectTable,
    status: RedirectStatus,
    base_url: Option<&url::Url>,
) -> String {
    let mut out = String::with_capacity(table.len() * 64);
    for entry in table {
        out.push_str(&entry.from);
        out.push(' ');
        out.push_str(&entry.target().to_location(base_url));
        out.push(' ');
        out.push_str(&status.code().to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_redirects_file() {
        let table = RedirectTable::from_entries([
            ("/quickstart", "/guides/quickstart"),
            ("/introduction_to_blocks", "/guides/quickstart#more-complexity"),
        ])
        .unwrap();

        let out = render_redirects_file(&table, RedirectStatus::PermanentRedirect, None);
        assert_eq!(
            out,
            "/quickstart /guides/quickstart 308\n\
             /introduction_to_blocks /guides/quickstart#more-complexity 308\n"
        );
    }

    #[test]
    fn test_render_redirects_file_empty() {
        let out = render_redirects_file(&RedirectTable::default(), RedirectStatus::default(), None);
        assert!(out.is_empty());
    }
}
