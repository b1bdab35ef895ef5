use super::row::LogRow;

/// What the log looked like just before an append.
#[derive(Debug, Clone, PartialEq)]
pub enum LogState {
    /// No log file yet.
    Missing,
    /// Header but no data rows.
    Empty,
    /// The most recently appended row.
    Last(LogRow),
}

/// Result of offering a row to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    /// The log was created with a header and this row.
    FirstLogged,
    /// The row was appended below existing rows.
    Appended,
    /// The row matched the last row and was not written.
    SkippedDuplicate,
}

impl LogOutcome {
    pub fn message(self) -> &'static str {
        match self {
            LogOutcome::FirstLogged => "First prediction logged.",
            LogOutcome::Appended => "New prediction logged.",
            LogOutcome::SkippedDuplicate => "Same prediction already exists, skipped.",
        }
    }

    pub fn wrote_row(self) -> bool {
        !matches!(self, LogOutcome::SkippedDuplicate)
    }
}

/// Decide how to log `candidate` given the current log state.
///
/// Only the last row is compared; an older identical row does not block the
/// append.
pub fn decide(state: &LogState, candidate: &LogRow) -> LogOutcome {
    match state {
        LogState::Missing => LogOutcome::FirstLogged,
        LogState::Empty => LogOutcome::Appended,
        LogState::Last(last) if last.same_inference(candidate) => LogOutcome::SkippedDuplicate,
        LogState::Last(_) => LogOutcome::Appended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::sample_record;
    use crate::ml::{FraudLabel, PredictionResult};
    use time::OffsetDateTime;

    fn row_at(total_claim_amount: f64, unix: i64) -> LogRow {
        let mut record = sample_record();
        record.total_claim_amount = total_claim_amount;
        LogRow::new(
            record,
            PredictionResult {
                label: FraudLabel::Fraudulent,
                probability: 0.83,
            },
            OffsetDateTime::from_unix_timestamp(unix).unwrap(),
        )
    }

    #[test]
    fn missing_log_is_first() {
        assert_eq!(
            decide(&LogState::Missing, &row_at(12_000.0, 0)),
            LogOutcome::FirstLogged
        );
    }

    #[test]
    fn header_only_log_appends() {
        assert_eq!(
            decide(&LogState::Empty, &row_at(12_000.0, 0)),
            LogOutcome::Appended
        );
    }

    #[test]
    fn repeat_of_last_row_is_skipped_despite_new_timestamp() {
        let state = LogState::Last(row_at(12_000.0, 0));
        assert_eq!(
            decide(&state, &row_at(12_000.0, 60)),
            LogOutcome::SkippedDuplicate
        );
    }

    #[test]
    fn any_field_difference_appends() {
        let state = LogState::Last(row_at(12_000.0, 0));
        assert_eq!(decide(&state, &row_at(12_000.5, 0)), LogOutcome::Appended);

        let mut other_label = row_at(12_000.0, 0);
        other_label.prediction.label = FraudLabel::Legitimate;
        assert_eq!(decide(&state, &other_label), LogOutcome::Appended);
    }

    #[test]
    fn float_comparison_has_no_tolerance() {
        let state = LogState::Last(row_at(12_000.0, 0));
        let mut nudged = row_at(12_000.0, 0);
        nudged.prediction.probability = 0.83 + f64::EPSILON;
        assert_eq!(decide(&state, &nudged), LogOutcome::Appended);
    }

    #[test]
    fn messages_match_outcomes() {
        assert_eq!(LogOutcome::FirstLogged.message(), "First prediction logged.");
        assert_eq!(
            LogOutcome::SkippedDuplicate.message(),
            "Same prediction already exists, skipped."
        );
        assert!(!LogOutcome::SkippedDuplicate.wrote_row());
        assert!(LogOutcome::Appended.wrote_row());
    }
}
