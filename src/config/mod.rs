//! Configuration module for srm
//!
//! The menu is described by `srm_config.{yaml,yml,json,toml}`, looked up in:
//! 1. `--config-dir` (or an explicit `--config` file)
//! 2. `SRM_CONFIG_DIR`
//! 3. `$XDG_CONFIG_HOME/srm`, the platform config dir, the executable's dir

mod loader;
mod types;

pub use loader::{
    candidate_files, find_config_file, format_for_path, load_with_warnings, parse_with_warnings,
    resolve_verbosity, search_dirs, ConfigWarning, CANDIDATE_EXTENSIONS, CONFIG_DIR_ENV,
    CONFIG_FILE_STEM, VERBOSITY_ENV,
};
pub use types::{ConfigFormat, GroupConfig, ItemConfig, MenuConfig, Verbosity};
