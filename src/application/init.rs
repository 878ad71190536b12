//! Sample configuration writer (`srm --init`)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{
    candidate_files, ConfigFormat, GroupConfig, ItemConfig, MenuConfig, CONFIG_FILE_STEM,
};
use crate::domain::value_objects::IndexFormat;
use crate::error::{MenuError, SrmResult};

/// Numbering template of the sample menu
pub const SAMPLE_INDEX_FORMAT: &str = "{item_index}: {item_name}";

/// A numbered session/power menu for i3.
pub fn sample_config() -> SrmResult<MenuConfig> {
    Ok(MenuConfig {
        numbered: true,
        index_start: 1,
        index_format: IndexFormat::new(SAMPLE_INDEX_FORMAT)?,
        separator: "----".to_string(),
        groups: vec![
            GroupConfig {
                items: vec![
                    ItemConfig::new("Lock screen", "i3lock"),
                    ItemConfig::new("Logout", "i3-msg exit"),
                ],
            },
            GroupConfig {
                items: vec![
                    ItemConfig::new("Switch user", "gdmflexiserver"),
                    ItemConfig::new("Reboot", "systemctl reboot"),
                    ItemConfig::new("Shutdown", "systemctl poweroff"),
                ],
            },
        ],
    })
}

/// Serialize a config in the requested format.
pub fn render_config(config: &MenuConfig, format: ConfigFormat) -> SrmResult<String> {
    let encode_error = |message: String| MenuError::ConfigParse {
        file: PathBuf::from(format!("{CONFIG_FILE_STEM}.{}", format.extension())),
        message,
    };

    match format {
        ConfigFormat::Yaml => serde_yaml_ng::to_string(config).map_err(|e| encode_error(e.to_string())),
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| encode_error(e.to_string())),
        ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| encode_error(e.to_string())),
    }
}

/// Write [`sample_config`] into `dir`, creating the directory if needed.
///
/// Fails with [`MenuError::ConfigExists`] if any config file is already
/// present in `dir`, since it would take precedence or be overwritten.
pub fn write_sample_config(dir: &Path, format: ConfigFormat) -> SrmResult<PathBuf> {
    if let Some(existing) = candidate_files(dir).into_iter().find(|p| p.exists()) {
        return Err(MenuError::ConfigExists { file: existing });
    }

    let content = render_config(&sample_config()?, format)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{CONFIG_FILE_STEM}.{}", format.extension()));
    fs::write(&path, content)?;
    Ok(path)
}
