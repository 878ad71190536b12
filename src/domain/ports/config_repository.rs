//! Config repository port - abstracts where the menu configuration comes from.

use std::path::PathBuf;

use crate::config::{ConfigWarning, MenuConfig};
use crate::error::SrmResult;

/// A parsed configuration together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub source: PathBuf,
    pub config: MenuConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Repository trait for menu configuration.
///
/// Loading failures are fatal for the caller; there is no fallback menu.
pub trait ConfigRepository {
    /// Locate and parse the configuration.
    fn load(&self) -> SrmResult<LoadedConfig>;
}
