//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All file and process I/O lives here.
//!
//! ## Structure
//!
//! - `config/` - Configuration repository reading `srm_config.*` files
//! - `process/` - Command launchers (detached spawn, dry run)

pub mod config;
pub mod process;

pub use config::FileConfigRepository;
pub use process::{DetachedLauncher, DryRunLauncher};
