//! `check` command: audit built-in and configured entries.

use anyhow::{Result, bail};

use crate::config::SiteConfig;
use crate::log;
use crate::table::{AuditReport, check_source};
use crate::utils::plural_count;

pub fn run_check(config: &SiteConfig, deny_warnings: bool) -> Result<()> {
    let entries = config.source_entries();
    let report = check_entries(&entries, deny_warnings)?;
    log!("check"; "{} ok ({})",
        plural_count(entries.len(), "redirect"),
        plural_count(report.warnings().count(), "warning"));
    Ok(())
}

/// Audit raw entries and print findings. Fails on errors, or on warnings
/// when `deny_warnings` is set.
pub fn check_entries(entries: &[(&str, &str)], deny_warnings: bool) -> Result<AuditReport> {
    let report = check_source(entries.iter().copied());
    report.print();

    let errors = report.errors().count();
    if errors > 0 {
        bail!("redirect table has {}", plural_count(errors, "error"));
    }

    let warnings = report.warnings().count();
    if deny_warnings && warnings > 0 {
        bail!("redirect table has {} (denied)", plural_count(warnings, "warning"));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ENTRIES;

    #[test]
    fn test_check_builtin_passes() {
        let report = check_entries(ENTRIES, false).unwrap();
        assert_eq!(report.warnings().count(), 2);
    }

    #[test]
    fn test_check_builtin_denied_warnings() {
        let err = check_entries(ENTRIES, true).unwrap_err();
        assert!(err.to_string().contains("2 warnings"));
    }

    #[test]
    fn test_check_duplicates_fail() {
        let err = check_entries(&[("/a", "/b"), ("/a", "/c")], false).unwrap_err();
        assert!(err.to_string().contains("1 error"));
    }
}
