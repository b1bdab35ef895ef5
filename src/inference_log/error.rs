use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or appending the inference log.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log location could not be created, opened or written.
    #[error("Cannot write inference log {path}: {source}")]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The existing log could not be read from disk.
    #[error("Cannot read inference log {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The existing log does not have the expected shape.
    #[error("Inference log {path} is corrupt at line {line}: {reason}")]
    Corrupt {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    /// The row carries a value that could not be read back, so it was not written.
    #[error("Refusing to log to {path}: {reason}")]
    Rejected { path: PathBuf, reason: String },
}

impl LogError {
    pub(crate) fn from_csv_read(path: &std::path::Path, err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(source) => LogError::Read {
                path: path.to_path_buf(),
                source,
            },
            kind => LogError::Corrupt {
                path: path.to_path_buf(),
                line,
                reason: describe_kind(&kind),
            },
        }
    }

    pub(crate) fn from_csv_write(path: &std::path::Path, err: csv::Error) -> Self {
        let source = match err.into_kind() {
            csv::ErrorKind::Io(source) => source,
            other => std::io::Error::other(describe_kind(&other)),
        };
        LogError::Storage {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, LogError::Corrupt { .. })
    }
}

fn describe_kind(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields but found {len}"),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
        other => format!("{other:?}"),
    }
}
