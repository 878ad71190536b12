//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod command_launcher;
pub mod config_repository;

pub use command_launcher::CommandLauncher;
pub use config_repository::{ConfigRepository, LoadedConfig};
