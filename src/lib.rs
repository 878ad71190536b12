//! srm - simple rofi menu
//!
//! Renders grouped, optionally numbered command menus as plain text for rofi,
//! dmenu and similar launchers, and runs the command behind the line the user
//! picked when the launcher calls back with it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{import_menu_from_config, RunOutcome, Selection, SelectionUseCase};
pub use config::{ConfigFormat, MenuConfig, Verbosity};
pub use domain::entities::{Menu, MenuGroup, MenuItem};
pub use domain::ports::{CommandLauncher, ConfigRepository};
pub use domain::value_objects::{IndexFormat, MenuOptions};
pub use error::{MenuError, SrmResult};
