use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::inference_log::{DEFAULT_LOG_PATH, RECENT_ROWS};

/// Default model artifact, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model.json";
/// Upper bound for the log viewer row count.
pub const MAX_RECENT_ROWS: usize = 500;

/// Settings loaded from `config.toml`.
///
/// Config keys: `model_path`, `log_path`, `recent_rows`. Relative paths are
/// resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    /// Rows shown when the inference log is opened.
    #[serde(default = "default_recent_rows")]
    pub recent_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            log_path: default_log_path(),
            recent_rows: default_recent_rows(),
        }
    }
}

impl AppConfig {
    pub(crate) fn normalized(mut self) -> Self {
        self.recent_rows = self.recent_rows.clamp(1, MAX_RECENT_ROWS);
        self
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

fn default_recent_rows() -> usize {
    RECENT_ROWS
}
