//! Data-quality checks for redirect entries.
//!
//! Errors (the table must not ship with them):
//! - duplicate keys (only visible from raw entries, see [`check_source`])
//! - self-redirects
//! - cycles (`/a -> /b -> /a`)
//! - malformed keys or targets
//!
//! Warnings:
//! - chains: the target is itself an old path, so clients take two hops

use std::fmt;

use owo_colors::OwoColorize;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{RedirectTable, TableError};
use crate::log;
use crate::utils::plural_s;

// ============================================================================
// types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// What is wrong with an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Key appears more than once (0-based positions in the source list).
    DuplicateKey { positions: Vec<usize> },
    /// Key redirects to itself.
    SelfRedirect,
    /// Following targets from the key returns to it. `path` starts and ends with the key.
    Cycle { path: Vec<String> },
    MalformedKey { reason: &'static str },
    MalformedTarget { reason: &'static str },
    /// Target path is itself a key.
    Chain { next: String },
}

/// One finding, attached to the old path it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditIssue {
    pub key: String,
    pub kind: IssueKind,
}

impl AuditIssue {
    fn new(key: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    pub const fn severity(&self) -> Severity {
        match self.kind {
            IssueKind::Chain { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::DuplicateKey { positions } => {
                let positions: Vec<_> = positions.iter().map(|p| format!("#{}", p + 1)).collect();
                write!(f, "{} is defined {} times ({})", self.key, positions.len(), positions.join(", "))
            }
            IssueKind::SelfRedirect => write!(f, "{} redirects to itself", self.key),
            IssueKind::Cycle { path } => write!(f, "redirect cycle: {}", path.join(" -> ")),
            IssueKind::MalformedKey { reason } => write!(f, "{}: old path {reason}", self.key),
            IssueKind::MalformedTarget { reason } => write!(f, "{}: target {reason}", self.key),
            IssueKind::Chain { next } => {
                write!(f, "{} -> {} is itself redirected (two hops)", self.key, next)
            }
        }
    }
}

/// Collected audit findings in discovery order.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn issues(&self) -> &[AuditIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &AuditIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &AuditIssue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// `Err` if any error was found; warnings alone pass.
    pub fn into_result(self) -> Result<Self, TableError> {
        if self.has_errors() {
            Err(TableError::Audit(self))
        } else {
            Ok(self)
        }
    }

    /// Print findings using the standard log format.
    ///
    /// ```text
    /// [error] redirect table (1 error)
    ///   - /a -> /b -> /a
    /// [warning] redirect table (2 warnings)
    ///   - /x -> /y is itself redirected (two hops)
    /// ```
    pub fn print(&self) {
        let errors: Vec<_> = self.errors().collect();
        if !errors.is_empty() {
            log!("error"; "redirect table ({} error{})", errors.len(), plural_s(errors.len()));
            for issue in errors {
                eprintln!("  - {issue}");
            }
        }

        let warnings: Vec<_> = self.warnings().collect();
        if !warnings.is_empty() {
            log!("warning"; "redirect table ({} warning{})", warnings.len(), plural_s(warnings.len()));
            for issue in warnings {
                eprintln!("  - {issue}");
            }
        }
    }

    fn push(&mut self, issue: AuditIssue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors().count();
        write!(f, "{} ({} error{})", "redirect table is invalid".red().bold(), count, plural_s(count))?;
        for issue in self.errors() {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AuditReport {}

// ============================================================================
// audit
// ============================================================================

/// Audit a constructed table. Keys are already unique here.
pub fn audit(table: &RedirectTable) -> AuditReport {
    let mut report = AuditReport::default();

    for entry in table {
        if let Some(reason) = malformed_key(&entry.from) {
            report.push(AuditIssue::new(&entry.from, IssueKind::MalformedKey { reason }));
        }
        if let Some(reason) = malformed_target(&entry.to) {
            report.push(AuditIssue::new(&entry.from, IssueKind::MalformedTarget { reason }));
        }
        if entry.from == entry.target().path {
            report.push(AuditIssue::new(&entry.from, IssueKind::SelfRedirect));
        }
    }

    let in_cycle = find_cycles(table, &mut report);
    find_chains(table, &in_cycle, &mut report);

    report
}

/// Audit raw `(old, new)` pairs, reporting every duplicate key instead of
/// failing on the first one. The first definition of a key is kept for the
/// remaining checks.
pub fn check_source<'a, I>(entries: I) -> AuditReport
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let entries: Vec<_> = entries.into_iter().collect();

    let mut positions: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
    let mut order = Vec::new();
    for (i, (from, _)) in entries.iter().enumerate() {
        let slot = positions.entry(*from).or_default();
        if slot.is_empty() {
            order.push(*from);
        }
        slot.push(i);
    }

    let mut report = AuditReport::default();
    for key in order {
        let found = &positions[key];
        if found.len() > 1 {
            report.push(AuditIssue::new(
                key,
                IssueKind::DuplicateKey {
                    positions: found.clone(),
                },
            ));
        }
    }

    let mut seen = FxHashSet::default();
    let unique = entries.iter().filter(|(from, _)| seen.insert(*from)).copied();
    // Keys were deduplicated above, so construction cannot fail
    if let Ok(table) = RedirectTable::from_entries(unique) {
        report.issues.extend(audit(&table).issues);
    }

    report
}

// ============================================================================
// checks
// ============================================================================

fn malformed_key(key: &str) -> Option<&'static str> {
    if !key.starts_with('/') {
        Some("must start with `/`")
    } else if key.contains("://") {
        Some("must not include a scheme or domain")
    } else if key.contains('?') {
        Some("must not include a query string")
    } else if key.contains('#') {
        Some("must not include a fragment")
    } else if key.len() > 1 && key.ends_with('/') {
        Some("must not end with `/`")
    } else if key.contains(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if key.len() > 1 && key[1..].split('/').any(str::is_empty) {
        Some("must not contain empty segments")
    } else if key.split('/').any(|segment| segment == "." || segment == "..") {
        Some("must not contain `.` or `..` segments")
    } else {
        None
    }
}

fn malformed_target(target: &str) -> Option<&'static str> {
    if !target.starts_with('/') {
        Some("must start with `/`")
    } else if target.starts_with("//") {
        Some("must not be protocol-relative (`//host`)")
    } else if target.contains(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    }
}

/// Report each cycle once. Returns every key that sits on a cycle.
fn find_cycles<'a>(table: &'a RedirectTable, report: &mut AuditReport) -> FxHashSet<&'a str> {
    let mut in_cycle = FxHashSet::default();

    for entry in table {
        let start = entry.from.as_str();
        if in_cycle.contains(start) {
            continue;
        }

        let mut path = vec![start];
        let mut current = target_path(&entry.to);
        if current == start {
            continue; // self-redirect, reported separately
        }

        while let Some(next) = table.lookup(current) {
            if current == start {
                in_cycle.extend(path.iter().copied());
                let mut cycle: Vec<String> = path.iter().map(|s| (*s).to_string()).collect();
                cycle.push(start.to_string());
                report.push(AuditIssue::new(start, IssueKind::Cycle { path: cycle }));
                break;
            }
            // A loop that doesn't pass through `start` is reported from one of its members
            if path.contains(&current) {
                break;
            }
            path.push(current);
            current = target_path(next);
        }
    }

    in_cycle
}

fn find_chains(table: &RedirectTable, in_cycle: &FxHashSet<&str>, report: &mut AuditReport) {
    for entry in table {
        if in_cycle.contains(entry.from.as_str()) {
            continue;
        }
        let next = target_path(&entry.to);
        if next != entry.from && table.contains(next) {
            report.push(AuditIssue::new(
                &entry.from,
                IssueKind::Chain {
                    next: next.to_string(),
                },
            ));
        }
    }
}

#[inline]
fn target_path(target: &str) -> &str {
    target.split_once('#').map_or(target, |(path, _)| path)
}

// ============================================================================
// tests
// ============================================================================
