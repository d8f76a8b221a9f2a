//! `build` command.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::generator::build_redirects;

pub fn run_build(config: &SiteConfig, clean: bool) -> Result<()> {
    let table = config.table()?;
    build_redirects(&table, config, clean)?;
    Ok(())
}
