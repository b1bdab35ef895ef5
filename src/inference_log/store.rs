use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::decision::{LogOutcome, LogState, decide};
use super::error::LogError;
use super::row::{LOG_COLUMN_COUNT, LogRow, log_header};

/// Default location of the inference log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "data/inference_logs.csv";
/// Rows shown by the log viewer.
pub const RECENT_ROWS: usize = 20;

/// Tail of the log as returned by [`InferenceLog::tail`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogTail {
    /// Nothing has been logged yet.
    Missing,
    /// Up to the requested number of rows, oldest first.
    Rows(Vec<LogRow>),
}

impl LogTail {
    pub fn rows(&self) -> &[LogRow] {
        match self {
            LogTail::Missing => &[],
            LogTail::Rows(rows) => rows,
        }
    }
}

/// Append-only CSV log of scored claims.
///
/// Appends go through `&mut self`, so one `InferenceLog` is the only writer
/// within a process. Other processes writing the same file are not
/// coordinated with.
#[derive(Debug, Clone)]
pub struct InferenceLog {
    path: PathBuf,
}

impl InferenceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the log far enough to know whether and what it last recorded.
    ///
    /// The header and the field count of every row are checked on the way;
    /// only the last row is fully parsed. Either problem is reported instead
    /// of appended to.
    pub fn observe(&self) -> Result<LogState, LogError> {
        let Some(mut reader) = self.open_reader()? else {
            return Ok(LogState::Missing);
        };
        let mut last: Option<StringRecord> = None;
        let mut record = StringRecord::new();
        loop {
            match reader.read_record(&mut record) {
                Ok(true) => last = Some(record.clone()),
                Ok(false) => break,
                Err(err) => return Err(LogError::from_csv_read(&self.path, err)),
            }
        }
        match last {
            None => Ok(LogState::Empty),
            Some(raw) => self.parse_row(&raw).map(LogState::Last),
        }
    }

    /// Offer a row to the log, appending it unless it repeats the last row.
    pub fn record(&mut self, row: &LogRow) -> Result<LogOutcome, LogError> {
        if let Some(reason) = row.unwritable_reason() {
            return Err(LogError::Rejected {
                path: self.path.clone(),
                reason,
            });
        }
        let state = self.observe()?;
        let outcome = decide(&state, row);
        match outcome {
            LogOutcome::FirstLogged => self.write(row, true)?,
            LogOutcome::Appended => self.write(row, false)?,
            LogOutcome::SkippedDuplicate => {}
        }
        tracing::debug!(path = %self.path.display(), ?outcome, "Inference log decision");
        Ok(outcome)
    }

    /// The last `limit` rows in on-disk order.
    pub fn tail(&self, limit: usize) -> Result<LogTail, LogError> {
        let Some(mut reader) = self.open_reader()? else {
            return Ok(LogTail::Missing);
        };
        let mut window: VecDeque<LogRow> = VecDeque::with_capacity(limit);
        let mut record = StringRecord::new();
        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {
                    let row = self.parse_row(&record)?;
                    if limit == 0 {
                        continue;
                    }
                    if window.len() == limit {
                        window.pop_front();
                    }
                    window.push_back(row);
                }
                Ok(false) => break,
                Err(err) => return Err(LogError::from_csv_read(&self.path, err)),
            }
        }
        Ok(LogTail::Rows(window.into()))
    }

    /// Open the log for reading and check its header.
    ///
    /// A missing or zero-length file counts as no log.
    fn open_reader(&self) -> Result<Option<csv::Reader<File>>, LogError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
                ) =>
            {
                return Ok(None);
            }
            Err(source) => {
                return Err(LogError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let len = file
            .metadata()
            .map_err(|source| LogError::Read {
                path: self.path.clone(),
                source,
            })?
            .len();
        if len == 0 {
            return Ok(None);
        }

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|err| LogError::from_csv_read(&self.path, err))?;
        let expected = log_header();
        if headers.len() != LOG_COLUMN_COUNT || headers.iter().ne(expected.iter().copied()) {
            return Err(LogError::Corrupt {
                path: self.path.clone(),
                line: 1,
                reason: "header does not match the inference log columns".to_string(),
            });
        }
        Ok(Some(reader))
    }

    fn parse_row(&self, raw: &StringRecord) -> Result<LogRow, LogError> {
        LogRow::from_record(raw).map_err(|reason| LogError::Corrupt {
            path: self.path.clone(),
            line: raw.position().map(|pos| pos.line()).unwrap_or(0),
            reason,
        })
    }

    fn write(&self, row: &LogRow, with_header: bool) -> Result<(), LogError> {
        let storage = |source: std::io::Error| LogError::Storage {
            path: self.path.clone(),
            source,
        };
        if with_header
            && let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(storage)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(storage)?;
        if !with_header && !ends_with_newline(&mut file).map_err(storage)? {
            file.write_all(b"\n").map_err(storage)?;
        }
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if with_header {
            writer
                .write_record(log_header())
                .map_err(|err| LogError::from_csv_write(&self.path, err))?;
        }
        writer
            .write_record(row.to_cells())
            .map_err(|err| LogError::from_csv_write(&self.path, err))?;
        writer.flush().map_err(storage)?;
        Ok(())
    }
}

/// Whether the file is empty or its last byte ends a line.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(matches!(last[0], b'\n' | b'\r'))
}
