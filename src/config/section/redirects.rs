//! `[redirects]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [redirects]
//! status = 301                          # 301 | 302 | 307 | 308
//! output = "public"                     # `build` output directory
//! base_url = "https://docs.example.com" # Absolute targets in stubs and Location headers
//! redirects_file = true                 # Also write `_redirects` (Netlify / Cloudflare Pages)
//!
//! [redirects.extra]                     # Merged into the built-in table
//! "/old-page" = "/guides/new-page"
//! ```
//!
//! Extra entries may not override built-in ones: a shared key is an error.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::config::ConfigDiagnostics;

/// HTTP status used when answering with a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u16")]
pub enum RedirectStatus {
    #[default]
    MovedPermanently,
    Found,
    TemporaryRedirect,
    PermanentRedirect,
}

impl RedirectStatus {
    pub const fn code(self) -> u16 {
        match self {
            Self::MovedPermanently => 301,
            Self::Found => 302,
            Self::TemporaryRedirect => 307,
            Self::PermanentRedirect => 308,
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::MovedPermanently => "Moved Permanently",
            Self::Found => "Found",
            Self::TemporaryRedirect => "Temporary Redirect",
            Self::PermanentRedirect => "Permanent Redirect",
        }
    }
}

impl TryFrom<u16> for RedirectStatus {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            301 => Ok(Self::MovedPermanently),
            302 => Ok(Self::Found),
            307 => Ok(Self::TemporaryRedirect),
            308 => Ok(Self::PermanentRedirect),
            other => Err(format!(
                "unsupported redirect status {other}, expected 301, 302, 307 or 308"
            )),
        }
    }
}

impl fmt::Display for RedirectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// Redirect table settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedirectsConfig {
    /// Status code for `serve` and the `_redirects` file.
    pub status: RedirectStatus,

    /// Output directory for `build` (relative to the config file).
    pub output: PathBuf,

    /// Origin used to make targets absolute (e.g. `https://docs.example.com`).
    pub base_url: Option<String>,

    /// Write `_redirects` next to the HTML stubs.
    pub redirects_file: bool,

    /// Additional entries, old path -> new path.
    pub extra: BTreeMap<String, String>,
}

impl Default for RedirectsConfig {
    fn default() -> Self {
        Self {
            status: RedirectStatus::default(),
            output: PathBuf::from("public"),
            base_url: None,
            redirects_file: true,
            extra: BTreeMap::new(),
        }
    }
}

impl RedirectsConfig {
    /// Parsed `base_url`. Invalid values are rejected by [`Self::validate`].
    pub fn base_url(&self) -> Option<url::Url> {
        self.base_url
            .as_deref()
            .and_then(|raw| url::Url::parse(raw).ok())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error("redirects.output", "output directory must not be empty");
        }

        if let Some(raw) = &self.base_url {
            match url::Url::parse(raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
                Ok(_) => diag.error_with_hint(
                    "redirects.base_url",
                    format!("`{raw}` is not an http(s) origin"),
                    "base_url = \"https://docs.example.com\"",
                ),
                Err(e) => diag.error_with_hint(
                    "redirects.base_url",
                    format!("`{raw}` is not a valid URL: {e}"),
                    "base_url = \"https://docs.example.com\"",
                ),
            }
        }
    }
}
