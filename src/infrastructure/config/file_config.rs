//! File-based configuration repository implementation.

use std::path::PathBuf;

use crate::config::{find_config_file, load_with_warnings, search_dirs};
use crate::domain::ports::{ConfigRepository, LoadedConfig};
use crate::error::SrmResult;

/// Loads `srm_config.*` from disk.
///
/// An explicit file is used as-is; otherwise the search directories are
/// scanned in order and the first candidate file wins.
#[derive(Debug, Clone, Default)]
pub struct FileConfigRepository {
    file: Option<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl FileConfigRepository {
    /// Repository reading exactly one file
    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            dirs: Vec::new(),
        }
    }

    /// Repository searching the given directories
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { file: None, dirs }
    }

    /// Repository using the standard search path (see [`search_dirs`])
    pub fn discover(config_dir: Option<PathBuf>) -> Self {
        Self::with_dirs(search_dirs(config_dir.as_deref()))
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> SrmResult<LoadedConfig> {
        let source = match &self.file {
            Some(file) => file.clone(),
            None => find_config_file(&self.dirs)?,
        };
        let (config, warnings) = load_with_warnings(&source)?;
        Ok(LoadedConfig {
            source,
            config,
            warnings,
        })
    }
}
