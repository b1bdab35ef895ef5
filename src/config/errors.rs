use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but is not valid TOML for [`super::AppConfig`].
    #[error("Config {path} is malformed: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Cannot encode config for {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// Neither `FRAUDLENS_CONFIG_HOME` nor an OS config directory is available.
    #[error("No config directory available")]
    NoConfigDir,
}
