//! Static output for hosts without server-side redirects.
//!
//! - **Pages**: one `index.html` per old path (meta refresh + canonical link)
//! - **Rules**: a `_redirects` file for Netlify / Cloudflare Pages
//!
//! The table is audited first; a table with errors produces no output.

mod pages;
mod rules;

pub use pages::{compute_redirect_output_path, write_redirect_pages};
pub use rules::{REDIRECTS_FILE, render_redirects_file};

use std::fs;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::table::{RedirectTable, audit};
use crate::utils::plural_count;
use crate::{debug, log};

/// What a build wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub rules_file: bool,
}

/// Write all redirect output for `table` into `config.redirects.output`.
pub fn build_redirects(table: &RedirectTable, config: &SiteConfig, clean: bool) -> Result<BuildSummary> {
    let report = audit(table).into_result()?;
    report.print();

    let output_dir = &config.redirects.output;
    if clean && output_dir.exists() {
        debug!("build"; "cleaning {}", output_dir.display());
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("failed to clean {}", output_dir.display()))?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let base_url = config.redirects.base_url();
    let pages = write_redirect_pages(table, output_dir, base_url.as_ref())?;

    let rules_file = config.redirects.redirects_file;
    if rules_file {
        let content = render_redirects_file(table, config.redirects.status, base_url.as_ref());
        let path = output_dir.join(REDIRECTS_FILE);
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    }

    log!("build"; "wrote {} to {}", plural_count(pages, "redirect page"), output_dir.display());

    Ok(BuildSummary { pages, rules_file })
}
