//! Configuration discovery and loading

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserializer;

use crate::error::{MenuError, SrmResult};

use super::types::{ConfigFormat, MenuConfig, Verbosity};

/// File name (without extension) looked up in every search directory
pub const CONFIG_FILE_STEM: &str = "srm_config";

/// Extensions tried in each directory, first match wins
pub const CANDIDATE_EXTENSIONS: &[&str] = &["yaml", "yml", "json", "toml"];

/// Overrides the search directories
pub const CONFIG_DIR_ENV: &str = "SRM_CONFIG_DIR";

/// Default stderr verbosity when no flag is given
pub const VERBOSITY_ENV: &str = "SRM_VERBOSITY";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a config file, picking the parser from its extension.
pub fn load_with_warnings(path: &Path) -> SrmResult<(MenuConfig, Vec<ConfigWarning>)> {
    let format = format_for_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, format, path)
}

/// Parse config text and collect unknown keys as warnings.
///
/// `file` is only used for error messages and warning locations.
pub fn parse_with_warnings(
    content: &str,
    format: ConfigFormat,
    file: &Path,
) -> SrmResult<(MenuConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let parse_error = |message: String| MenuError::ConfigParse {
        file: file.to_path_buf(),
        message,
    };

    let config = match format {
        ConfigFormat::Yaml => {
            let deserializer = serde_yaml_ng::Deserializer::from_str(content);
            deserialize_tracking(deserializer, &mut unknown_paths)
                .map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            let config = deserialize_tracking(&mut deserializer, &mut unknown_paths)
                .map_err(|e| parse_error(e.to_string()))?;
            deserializer.end().map_err(|e| parse_error(e.to_string()))?;
            config
        }
        ConfigFormat::Toml => {
            let deserializer = toml::de::Deserializer::new(content);
            deserialize_tracking(deserializer, &mut unknown_paths)
                .map_err(|e| parse_error(e.to_string()))?
        }
    };

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn deserialize_tracking<'de, D>(deserializer: D, unknown: &mut Vec<String>) -> Result<MenuConfig, D::Error>
where
    D: Deserializer<'de>,
{
    serde_ignored::deserialize(deserializer, |path| unknown.push(path.to_string()))
}

/// Format implied by a file's extension
pub fn format_for_path(path: &Path) -> SrmResult<ConfigFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ConfigFormat::from_extension)
        .ok_or_else(|| MenuError::UnsupportedFormat {
            file: path.to_path_buf(),
        })
}

/// Directories searched for `srm_config.*`, in priority order.
///
/// An explicit directory, or `SRM_CONFIG_DIR`, replaces the defaults:
/// `$XDG_CONFIG_HOME/srm`, the platform config dir, then the directory
/// holding the executable.
pub fn search_dirs(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(dir) = explicit {
        return vec![dir.to_path_buf()];
    }

    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return vec![PathBuf::from(dir)];
    }

    let mut candidates = Vec::new();
    let mut push_unique = |dir: PathBuf| {
        if !candidates.contains(&dir) {
            candidates.push(dir);
        }
    };

    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        push_unique(PathBuf::from(xdg).join("srm"));
    }
    if let Some(config_dir) = dirs::config_dir() {
        push_unique(config_dir.join("srm"));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        push_unique(exe_dir);
    }

    candidates
}

/// Candidate config files inside one directory, in lookup order.
pub fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    CANDIDATE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
        .collect()
}

/// First existing config file across `dirs`.
pub fn find_config_file(dirs: &[PathBuf]) -> SrmResult<PathBuf> {
    let mut searched = Vec::new();
    for dir in dirs {
        for candidate in candidate_files(dir) {
            if candidate.is_file() {
                return Ok(candidate);
            }
            searched.push(candidate);
        }
    }
    Err(MenuError::ConfigNotFound { searched })
}

/// Stderr verbosity: CLI flags first, then `SRM_VERBOSITY`, then `Normal`.
pub fn resolve_verbosity(quiet: bool, verbose: u8) -> Verbosity {
    if quiet || verbose > 0 {
        return Verbosity::from_flags(quiet, verbose);
    }
    env::var(VERBOSITY_ENV)
        .map(|value| Verbosity::parse_lenient(&value))
        .unwrap_or_default()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "numbered",
        "index_start",
        "index_format",
        "separator",
        "groups",
        "items",
        "name",
        "command",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
