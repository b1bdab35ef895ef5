//! Tracing setup for the dashboard and developer tools.
//!
//! The dashboard writes to stdout and to a per-launch file in
//! `.fraudlens/logs`, keeping only the newest files. Command-line tools log to
//! stderr only so their stdout stays machine-readable. This is the diagnostic
//! log; scored claims go to the inference log instead.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Maximum number of diagnostic log files to retain.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "fraudlens";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static CLI_INSTALLED: OnceLock<()> = OnceLock::new();

/// Reasons diagnostic logging could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Log directory unavailable: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    #[error("Cannot list {path} while pruning logs: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot delete stale log {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot format log file timestamp: {0}")]
    FormatTime(#[from] time::error::Format),
    /// Another subscriber was installed first.
    #[error("Tracing subscriber already set: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("Cannot open log file {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Initialize tracing for the dashboard: stdout plus a per-launch file.
///
/// Subsequent calls are no-ops. Failures are returned so the caller can keep
/// running without diagnostics.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = app_dirs::logs_dir()?;
    let log_file_name = format_log_file_name(now_local_or_utc())?;
    let log_path = log_dir.join(&log_file_name);
    touch(&log_path)?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::never(&log_dir, log_file_name));
    prune_old_logs(&log_dir, MAX_LOG_FILES)?;

    let timer = build_timer();
    let subscriber = Registry::default()
        .with(build_env_filter("info"))
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

/// Initialize stderr-only tracing for command-line tools.
///
/// Defaults to `warn` so normal output is not interleaved with diagnostics.
pub fn init_for_cli() -> Result<(), LoggingError> {
    if CLI_INSTALLED.get().is_some() {
        return Ok(());
    }
    let subscriber = Registry::default().with(build_env_filter("warn")).with(
        fmt::layer()
            .with_timer(build_timer())
            .with_writer(std::io::stderr),
    );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = CLI_INSTALLED.set(());
    Ok(())
}

/// Current wall-clock time in the local offset, falling back to UTC when the
/// offset cannot be determined.
pub fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn touch(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Delete the oldest `.log` files in `dir` until at most `keep` remain.
fn prune_old_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let listing = fs::read_dir(dir).map_err(|source| LoggingError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut logs: Vec<(SystemTime, PathBuf)> = listing
        .flatten()
        .filter(|entry| is_log_file(&entry.path()))
        .map(|entry| {
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, entry.path())
        })
        .collect();
    if logs.len() <= keep {
        return Ok(());
    }
    logs.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    for (_, path) in logs.drain(keep..) {
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(())
}

fn is_log_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "log")
}

fn format_log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let name = now.format(NAME_FORMAT)?;
    Ok(format!("{LOG_FILE_PREFIX}_{name}.log"))
}

fn build_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

fn build_env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};
    use tempfile::tempdir;

    fn count_logs(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .flatten()
            .filter(|entry| is_log_file(&entry.path()))
            .count()
    }

    #[test]
    fn log_filename_has_timestamp_and_prefix() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let name = format_log_file_name(fixed).unwrap();
        assert_eq!(name, "fraudlens_2023-11-14_22-13-20.log");
    }

    #[test]
    fn prune_keeps_newest_files() {
        let dir = tempdir().unwrap();
        for idx in 0..12 {
            touch(&dir.path().join(format!("fraudlens_{idx}.log"))).unwrap();
            thread::sleep(Duration::from_millis(10));
        }

        prune_old_logs(dir.path(), 10).unwrap();
        assert_eq!(count_logs(dir.path()), 10);
        assert!(!dir.path().join("fraudlens_0.log").exists());
        assert!(dir.path().join("fraudlens_11.log").exists());
    }

    #[test]
    fn prune_ignores_other_files() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("inference_logs.csv")).unwrap();
        touch(&dir.path().join("fraudlens_a.log")).unwrap();
        prune_old_logs(dir.path(), 0).unwrap();
        assert_eq!(count_logs(dir.path()), 0);
        assert!(dir.path().join("inference_logs.csv").exists());
    }
}
