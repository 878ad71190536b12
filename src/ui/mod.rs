//! User-facing output outside the menu itself.

pub mod output;
