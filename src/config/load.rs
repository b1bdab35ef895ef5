use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::CONFIG_FILE_NAME;
use super::errors::ConfigError;
use super::map_app_dir_error;
use super::save::save_to_path;
use super::types::AppConfig;

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk.
///
/// On first launch the defaults are written out so users have a file to edit.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from(&path);
    }
    let config = AppConfig::default();
    save_to_path(&config, &path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(config)
}

/// Parse a config file, filling missing keys with defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&text)
        .map(AppConfig::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}
