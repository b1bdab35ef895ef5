use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::errors::ConfigError;
use super::types::AppConfig;

/// Write the TOML config atomically, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    atomic_write(dir, path, data.as_bytes())
}

fn atomic_write(dir: &Path, path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(data).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
