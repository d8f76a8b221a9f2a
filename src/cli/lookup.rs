//! `lookup` command: old path -> new path.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use crate::config::SiteConfig;
use crate::table::RedirectTable;
use crate::utils::plural_count;

pub fn run_lookup(config: &SiteConfig, paths: &[String], request: bool, strict: bool) -> Result<()> {
    let (table, _) = config.checked_table()?;

    // Handle stdin case: read paths from stdin when `-` is passed
    let paths = if paths.len() == 1 && paths[0] == "-" {
        read_paths(io::stdin().lock())?
    } else {
        paths.to_vec()
    };

    write_lookups(&mut io::stdout().lock(), &table, &paths, request, strict)
}

/// Write `old -> new` for every path, `old -> (none)` on a miss.
///
/// With `strict`, any miss is an error after all lines are written.
pub fn write_lookups<W: Write>(
    out: &mut W,
    table: &RedirectTable,
    paths: &[String],
    request: bool,
    strict: bool,
) -> Result<()> {
    let results = lookup_all(table, paths, request);
    for (path, target) in &results {
        writeln!(out, "{} -> {}", path, target.unwrap_or("(none)"))?;
    }

    let misses = results.iter().filter(|(_, target)| target.is_none()).count();
    if strict && misses > 0 {
        bail!("{} without a redirect", plural_count(misses, "path"));
    }
    Ok(())
}

/// Look up every path, keeping input order.
pub fn lookup_all<'a>(
    table: &'a RedirectTable,
    paths: &'a [String],
    request: bool,
) -> Vec<(&'a str, Option<&'a str>)> {
    paths
        .iter()
        .map(|path| {
            let target = if request {
                table.lookup_request(path)
            } else {
                table.lookup(path)
            };
            (path.as_str(), target)
        })
        .collect()
}

/// Read paths one per line, skipping blank lines
fn read_paths<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::REDIRECTS;

    fn strings(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_lookup_all_exact() {
        let paths = strings(&["/quickstart", "/Quickstart", "/demos/"]);
        let results = lookup_all(&REDIRECTS, &paths, false);
        assert_eq!(
            results,
            [
                ("/quickstart", Some("/guides/quickstart")),
                ("/Quickstart", None),
                ("/demos/", None),
            ]
        );
    }

    #[test]
    fn test_lookup_all_request_mode() {
        let paths = strings(&["/demos/", "/getting_started?from=home", "/Quickstart"]);
        let results = lookup_all(&REDIRECTS, &paths, true);
        assert_eq!(
            results,
            [
                ("/demos/", Some("/playground")),
                ("/getting_started?from=home", Some("/guides/quickstart")),
                ("/Quickstart", None),
            ]
        );
    }

    #[test]
    fn test_read_paths_skips_blank_lines() {
        let input = "/quickstart\n\n  /demos  \r\n\t\n/not-a-real-path";
        let paths = read_paths(io::Cursor::new(input)).unwrap();
        assert_eq!(paths, ["/quickstart", "/demos", "/not-a-real-path"]);
    }

    #[test]
    fn test_write_lookups_output() {
        let paths = strings(&["/quickstart", "/not-a-real-path"]);
        let mut out = Vec::new();
        write_lookups(&mut out, &REDIRECTS, &paths, false, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/quickstart -> /guides/quickstart\n/not-a-real-path -> (none)\n"
        );
    }

    #[test]
    fn test_write_lookups_strict_fails_on_miss() {
        let paths = strings(&["/demos", "/nope", "/Quickstart"]);
        let mut out = Vec::new();
        let err = write_lookups(&mut out, &REDIRECTS, &paths, false, true).unwrap_err();
        assert_eq!(err.to_string(), "2 paths without a redirect");
        // Every line is still printed before failing
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);

        let paths = strings(&["/demos"]);
        assert!(write_lookups(&mut Vec::<u8>::new(), &REDIRECTS, &paths, false, true).is_ok());
    }
}
