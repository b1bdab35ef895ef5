//! Append-only CSV log of scored claims.
//!
//! Each scored claim becomes one row: the claim attributes, the predicted
//! label, the fraud probability and a timestamp. A row that repeats the most
//! recent row (timestamp aside) is skipped. The decision lives in
//! [`decide`] and is independent of file access; [`InferenceLog`] reads the
//! current state, applies it and performs the write.

mod decision;
mod error;
mod row;
mod store;

pub use decision::{LogOutcome, LogState, decide};
pub use error::LogError;
pub use row::{
    LOG_COLUMN_COUNT, LogRow, PREDICTION_COLUMN, PROBABILITY_COLUMN, TIMESTAMP_COLUMN,
    format_timestamp, log_header,
};
pub use store::{DEFAULT_LOG_PATH, InferenceLog, LogTail, RECENT_ROWS};
