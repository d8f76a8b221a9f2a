//! Logging utilities with colored output.
//!
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`, always on stderr
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "wrote {} redirect pages", count);
//! debug!("redirect"; "{} -> {}", from, to);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message to stderr (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log_to($crate::logger::Stream::Stderr, $module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Output stream for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// `error`, `warning` and `hint` go to stderr so that `list --json` and
    /// `lookup` output on stdout stays machine-readable.
    fn for_module(module_lower: &str) -> Self {
        match module_lower {
            "error" | "warning" | "hint" => Self::Stderr,
            _ => Self::Stdout,
        }
    }
}

/// Log a message with a colored module prefix.
#[inline]
pub fn log(module: &str, message: &str) {
    log_to(Stream::for_module(&module.to_ascii_lowercase()), module, message);
}

/// Log a message with a colored module prefix to `stream`.
pub fn log_to(stream: Stream, module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    match stream {
        Stream::Stdout => {
            let mut out = stdout().lock();
            writeln!(out, "{prefix} {message}").ok();
            out.flush().ok();
        }
        Stream::Stderr => {
            let mut out = stderr().lock();
            writeln!(out, "{prefix} {message}").ok();
            out.flush().ok();
        }
    }
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "serve" => prefix.bright_blue().bold().to_string(),
        "build" | "check" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "redirect" => prefix.bright_cyan().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}
