//! Application Layer
//!
//! Use cases that orchestrate the menu flow.
//!
//! ## Use Cases
//!
//! - `import_menu_from_config` - Build a `Menu` from a parsed configuration
//! - `SelectionUseCase` - Resolve the selected line and launch it, or print the menu
//! - `write_sample_config` - Write a starter configuration file

pub mod import;
pub mod init;
pub mod selection;

pub use import::import_menu_from_config;
pub use init::{render_config, sample_config, write_sample_config};
pub use selection::{resolve_selection, selection_key, RunOutcome, Selection, SelectionUseCase};
