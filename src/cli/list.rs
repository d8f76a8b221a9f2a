//! `list` command: print the table.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::table::{Entry, RedirectTable};

pub fn run_list(config: &SiteConfig, json: bool, pretty: bool) -> Result<()> {
    let (table, _) = config.checked_table()?;
    println!("{}", render_list(&table, json, pretty)?);
    Ok(())
}

/// Text (`old -> new`, arrows aligned) or a JSON array of `{from, to}`.
pub fn render_list(table: &RedirectTable, json: bool, pretty: bool) -> Result<String> {
    if json {
        let entries: Vec<&Entry> = table.iter().collect();
        let formatted = if pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        return Ok(formatted);
    }

    let width = table.iter().map(|e| e.from.len()).max().unwrap_or(0);
    let lines: Vec<String> = table
        .iter()
        .map(|e| format!("{:width$} -> {}", e.from, e.to))
        .collect();
    Ok(lines.join("\n"))
}
