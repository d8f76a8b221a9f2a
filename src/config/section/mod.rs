//! Configuration section definitions.

mod redirects;
mod serve;

pub use redirects::{RedirectStatus, RedirectsConfig};
pub use serve::ServeConfig;
