//! Small shared helpers.

pub mod html;
pub mod mime;
mod plural;

pub use plural::{plural_count, plural_s};
