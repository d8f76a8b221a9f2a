//! Utility types for configuration.

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
