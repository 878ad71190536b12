//! Domain Value Objects
//!
//! Immutable value types describing how a menu is numbered and laid out.

mod format_spec;
mod index_format;
mod menu_options;

pub use index_format::{IndexFormat, DEFAULT_INDEX_FORMAT};
pub use menu_options::{MenuOptions, DEFAULT_SEPARATOR};
