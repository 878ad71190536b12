//! Presentation Layer
//!
//! CLI argument parsing (via clap). Stderr diagnostics live in `ui::output`.

pub mod cli;

pub use cli::Cli;
