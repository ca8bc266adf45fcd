//! Configuration file loading and discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".imagedash.yaml",
    ".imagedash.yml",
    "imagedash.yaml",
    "imagedash.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order: explicit path, current directory, git repository root,
/// user config directory (`~/.config/imagedash/`), home directory.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(git_root) = find_git_root() {
        if let Some(path) = find_config_in_dir(&git_root) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("imagedash")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an [`AppConfig`] from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load a discovered config file, or fall back to defaults.
///
/// Returns the configuration and the path it was loaded from, if any. A
/// discovered-but-invalid file is an error; absence is not.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    match discover_config_file(explicit_path) {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}
