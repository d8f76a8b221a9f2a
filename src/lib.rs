//! Static redirect table for renamed documentation pages.
//!
//! ```ignore
//! assert_eq!(site_redirects::lookup("/quickstart"), Some("/guides/quickstart"));
//! assert_eq!(site_redirects::lookup("/not-a-real-path"), None);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod embed;
pub mod generator;
pub mod logger;
pub mod table;
pub mod utils;

pub use crate::core::RedirectTarget;
pub use table::{Entry, REDIRECTS, RedirectTable, TableError, lookup};
