//! Error types for srm
//!
//! Library code returns [`MenuError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for srm operations
pub type SrmResult<T> = Result<T, MenuError>;

/// Main error type for srm operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// No group holds a non-empty command under this key
    #[error("no menu entry matches '{key}'")]
    KeyNotFound { key: String },

    /// The entry exists but its command has no words to run
    #[error("menu entry '{key}' has a blank command")]
    EmptyCommand { key: String },

    /// `index_format` uses a placeholder other than `item_index`/`item_name`
    #[error("invalid index format '{format}': {message}")]
    InvalidIndexFormat { format: String, message: String },

    /// None of the candidate config files exist
    #[error("no menu configuration found (searched: {})", display_paths(.searched))]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// Config file exists but could not be deserialized
    #[error("invalid menu configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config file extension is not one of yaml/yml/json/toml
    #[error("unsupported config format for {file} (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat { file: PathBuf },

    /// Refusing to overwrite an existing config file
    #[error("config file already exists: {file}")]
    ConfigExists { file: PathBuf },

    /// The resolved command could not be started
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Whether this error means "the selection did not resolve to a command".
    ///
    /// The runner answers these by printing the menu instead of failing.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            MenuError::KeyNotFound { .. } | MenuError::EmptyCommand { .. }
        )
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
