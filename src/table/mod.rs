//! Redirect table: legacy path -> current path.
//!
//! # Module Structure
//!
//! ```text
//! table/
//! ├── entries.rs   # Built-in entries (authored data)
//! ├── audit.rs     # Data-quality checks (duplicates, cycles, chains)
//! └── mod.rs       # RedirectTable + global REDIRECTS (this file)
//! ```
//!
//! Lookup is a single exact, case-sensitive match. Chains are never followed.
//!
//! # Example
//!
//! ```ignore
//! assert_eq!(lookup("/quickstart"), Some("/guides/quickstart"));
//! assert_eq!(lookup("/Quickstart"), None);
//! ```

mod audit;
mod entries;

pub use audit::{AuditIssue, AuditReport, IssueKind, Severity, audit, check_source};
pub use entries::ENTRIES;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

use crate::core::{RedirectTarget, normalize_request_path};

/// Process-wide built-in table, built on first access.
///
/// Construction refuses duplicate keys; `tests::test_builtin_table_builds`
/// keeps that failure at test time instead of first request.
pub static REDIRECTS: LazyLock<RedirectTable> = LazyLock::new(|| {
    RedirectTable::builtin().expect("built-in redirect entries contain a duplicate key")
});

/// Look up `path` in the built-in table.
#[inline]
pub fn lookup(path: &str) -> Option<&'static str> {
    REDIRECTS.lookup(path)
}

// ============================================================================
// TableError
// ============================================================================

/// Errors raised while building or validating a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate redirect key `{key}` (maps to `{first}` and `{second}`)")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    // No #[source]: the report already renders every issue
    #[error("{0}")]
    Audit(AuditReport),
}

// ============================================================================
// Entry
// ============================================================================

/// A single redirect: `from` is the old path, `to` the new path (fragment allowed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub from: String,
    pub to: String,
}

impl Entry {
    /// Parsed view of `to`.
    pub fn target(&self) -> RedirectTarget {
        RedirectTarget::parse(&self.to)
    }
}

// ============================================================================
// RedirectTable
// ============================================================================

/// Immutable old-path -> new-path mapping with unique keys.
///
/// Entries keep their authored order for listing and output generation;
/// lookups go through a hash index.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    entries: Vec<Entry>,
    index: FxHashMap<String, usize>,
}

impl RedirectTable {
    /// Build a table, failing on the first duplicate key.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::default();
        for (from, to) in entries {
            table.insert(from.into(), to.into())?;
        }
        Ok(table)
    }

    /// The table built from [`ENTRIES`].
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_entries(ENTRIES.iter().copied())
    }

    /// A copy of this table with `extra` entries appended.
    ///
    /// An extra key already present is a [`TableError::DuplicateKey`],
    /// never an override.
    pub fn with_extra<I, K, V>(&self, extra: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = self.clone();
        for (from, to) in extra {
            table.insert(from.into(), to.into())?;
        }
        Ok(table)
    }

    fn insert(&mut self, from: String, to: String) -> Result<(), TableError> {
        if let Some(&existing) = self.index.get(&from) {
            return Err(TableError::DuplicateKey {
                first: self.entries[existing].to.clone(),
                second: to,
                key: from,
            });
        }
        self.index.insert(from.clone(), self.entries.len());
        self.entries.push(Entry { from, to });
        Ok(())
    }

    /// Exact, case-sensitive match against the keys.
    #[inline]
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.index
            .get(path)
            .map(|&i| self.entries[i].to.as_str())
    }

    /// [`Self::lookup`] with the value split into path and fragment.
    pub fn get_target(&self, path: &str) -> Option<RedirectTarget> {
        self.lookup(path).map(RedirectTarget::parse)
    }

    /// Look up a raw request URL (query, fragment, percent-encoding and
    /// trailing slash are normalized away; case is kept).
    pub fn lookup_request(&self, raw_url: &str) -> Option<&str> {
        self.lookup(&normalize_request_path(raw_url))
    }

    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Entries in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RedirectTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_builtin_table_builds() {
        let table = RedirectTable::builtin().unwrap();
        assert_eq!(table.len(), ENTRIES.len());
        assert_eq!(REDIRECTS.len(), ENTRIES.len());
    }

    #[test]
    fn test_every_key_maps_to_recorded_value() {
        for (from, to) in ENTRIES {
            assert_eq!(lookup(from), Some(*to), "wrong target for {from}");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut seen = FxHashSet::default();
        for (from, _) in ENTRIES {
            assert!(seen.insert(*from), "duplicate key {from}");
        }
    }

    #[test]
    fn test_no_key_maps_to_itself() {
        for (from, to) in ENTRIES {
            assert_ne!(from, to);
            assert_ne!(*from, RedirectTarget::parse(to).path);
        }
    }

    #[test]
    fn test_known_scenarios() {
        assert_eq!(lookup("/quickstart"), Some("/guides/quickstart"));
        assert_eq!(lookup("/demos"), Some("/playground"));
        assert_eq!(
            lookup("/introduction_to_blocks"),
            Some("/guides/quickstart#more-complexity")
        );
        assert_eq!(lookup("/not-a-real-path"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("/Quickstart"), None);
        assert_eq!(lookup("/QUICKSTART"), None);
        // Mixed-case keys only match as authored
        assert_eq!(
            lookup("/Gradio-and-Comet"),
            Some("/guides/Gradio-and-Comet")
        );
        assert_eq!(lookup("/gradio-and-comet"), None);
    }

    #[test]
    fn test_lookup_does_not_follow_chains() {
        // `/creating-a-new-component` -> `/guides/creating-a-new-component` -> five-minute-guide
        assert_eq!(
            lookup("/creating-a-new-component"),
            Some("/guides/creating-a-new-component")
        );
    }

    #[test]
    fn test_lookup_requires_exact_key() {
        assert_eq!(lookup("/quickstart/"), None);
        assert_eq!(lookup("quickstart"), None);
        assert_eq!(lookup("/quickstart?x=1"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_duplicate_key_fails() {
        let err = RedirectTable::from_entries([("/a", "/b"), ("/c", "/d"), ("/a", "/e")])
            .unwrap_err();
        match err {
            TableError::DuplicateKey { key, first, second } => {
                assert_eq!(key, "/a");
                assert_eq!(first, "/b");
                assert_eq!(second, "/e");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_extra() {
        let base = RedirectTable::from_entries([("/a", "/b")]).unwrap();
        let merged = base.with_extra([("/old", "/new#part")]).unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.lookup("/old"), Some("/new#part"));
        // Original untouched
        assert_eq!(base.lookup("/old"), None);

        assert!(matches!(
            base.with_extra([("/a", "/z")]),
            Err(TableError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_iter_keeps_authored_order() {
        let table = RedirectTable::from_entries([("/z", "/1"), ("/a", "/2"), ("/m", "/3")]).unwrap();
        let keys: Vec<_> = table.iter().map(|e| e.from.as_str()).collect();
        assert_eq!(keys, ["/z", "/a", "/m"]);
    }

    #[test]
    fn test_get_target_preserves_fragment() {
        let target = REDIRECTS.get_target("/adding_examples_to_your_app").unwrap();
        assert_eq!(target.path, "/guides/key-features");
        assert_eq!(target.fragment.as_deref(), Some("example-inputs"));
        assert_eq!(target.to_string(), "/guides/key-features#example-inputs");
    }

    #[test]
    fn test_lookup_request_normalizes_but_keeps_case() {
        assert_eq!(
            REDIRECTS.lookup_request("/quickstart/?utm_source=x"),
            Some("/guides/quickstart")
        );
        assert_eq!(
            REDIRECTS.lookup_request("/custom%5FCSS%5Fand%5FJS"),
            Some("/guides/custom-CSS-and-JS")
        );
        assert_eq!(REDIRECTS.lookup_request("/Quickstart/"), None);
        assert_eq!(REDIRECTS.lookup_request("/"), None);
    }

    #[test]
    fn test_empty_table() {
        let table = RedirectTable::default();
        assert!(table.is_empty());
        assert_eq!(table.lookup("/quickstart"), None);
    }
}
