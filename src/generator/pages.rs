//! Redirect HTML pages, one per old path.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::debug;
use crate::embed::build::{REDIRECT_HTML, RedirectVars};
use crate::table::{Entry, RedirectTable};

/// Write `{output_dir}/{old}/index.html` for every entry. Returns the page count.
pub fn write_redirect_pages(
    table: &RedirectTable,
    output_dir: &Path,
    base_url: Option<&url::Url>,
) -> Result<usize> {
    let entries: Vec<&Entry> = table.iter().collect();
    entries
        .par_iter()
        .try_for_each(|entry| write_redirect_file(entry, output_dir, base_url))?;
    Ok(entries.len())
}

fn write_redirect_file(entry: &Entry, output_dir: &Path, base_url: Option<&url::Url>) -> Result<()> {
    let output_file = compute_redirect_output_path(&entry.from, output_dir)?;

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let location = entry.target().to_location(base_url);
    let html = REDIRECT_HTML.render(&RedirectVars {
        canonical_url: &location,
    });
    fs::write(&output_file, html)
        .with_context(|| format!("failed to write {}", output_file.display()))?;

    debug!("redirect"; "{} -> {}", entry.from, location);
    Ok(())
}

/// `/old-url` -> `{output_dir}/old-url/index.html`
///
/// Rejects paths that would escape `output_dir`.
pub fn compute_redirect_output_path(old_path: &str, output_dir: &Path) -> Result<PathBuf> {
    let relative = old_path.trim_matches('/');
    if relative.split('/').any(|segment| segment == ".." || segment == ".") {
        bail!("refusing to write redirect for `{old_path}` outside the output directory");
    }
    Ok(output_dir.join(relative).join("index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_redirect_output_path() {
        let out = Path::new("/out");
        assert_eq!(
            compute_redirect_output_path("/quickstart", out).unwrap(),
            PathBuf::from("/out/quickstart/index.html")
        );
        assert_eq!(
            compute_redirect_output_path("/guides/creating-a-new-component", out).unwrap(),
            PathBuf::from("/out/guides/creating-a-new-component/index.html")
        );
        assert_eq!(
            compute_redirect_output_path("/", out).unwrap(),
            PathBuf::from("/out/index.html")
        );
    }

    #[test]
    fn test_compute_redirect_output_path_rejects_traversal() {
        assert!(compute_redirect_output_path("/../etc", Path::new("/out")).is_err());
        assert!(compute_redirect_output_path("/a/./b", Path::new("/out")).is_err());
    }

    #[test]
    fn test_write_redirect_pages_with_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let table = RedirectTable::from_entries([("/demos", "/playground")]).unwrap();
        let base = url::Url::parse("https://docs.example.com").unwrap();

        let count = write_redirect_pages(&table, dir.path(), Some(&base)).unwrap();
        assert_eq!(count, 1);

        let html = fs::read_to_string(dir.path().join("demos/index.html")).unwrap();
        assert!(html.contains(r#"href="https://docs.example.com/playground""#));
    }
}
