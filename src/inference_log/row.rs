use csv::StringRecord;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

use crate::claim::{CLAIM_COLUMNS, CLAIM_FIELD_COUNT, ClaimRecord, FieldValue};
use crate::ml::{FraudLabel, PredictionResult};

pub const PREDICTION_COLUMN: &str = "prediction";
pub const PROBABILITY_COLUMN: &str = "fraud_proba";
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Total number of columns in a log row.
pub const LOG_COLUMN_COUNT: usize = CLAIM_FIELD_COUNT + 3;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]");

/// Header row of the inference log.
pub fn log_header() -> [&'static str; LOG_COLUMN_COUNT] {
    std::array::from_fn(|index| match index {
        i if i < CLAIM_FIELD_COUNT => CLAIM_COLUMNS[i],
        i if i == CLAIM_FIELD_COUNT => PREDICTION_COLUMN,
        i if i == CLAIM_FIELD_COUNT + 1 => PROBABILITY_COLUMN,
        _ => TIMESTAMP_COLUMN,
    })
}

/// One persisted inference: the claim, its prediction and when it was logged.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub record: ClaimRecord,
    pub prediction: PredictionResult,
    /// Wall-clock time of logging, as written to the file.
    pub timestamp: String,
}

impl LogRow {
    pub fn new(record: ClaimRecord, prediction: PredictionResult, at: OffsetDateTime) -> Self {
        Self {
            record,
            prediction,
            timestamp: format_timestamp(at),
        }
    }

    /// True when every column except the timestamp is exactly equal.
    pub fn same_inference(&self, other: &LogRow) -> bool {
        self.record == other.record && self.prediction == other.prediction
    }

    /// Reason this row would not read back as the row that wrote it, if any.
    pub fn unwritable_reason(&self) -> Option<String> {
        let probability = self.prediction.probability;
        if !(0.0..=1.0).contains(&probability) {
            return Some(format!("{PROBABILITY_COLUMN} {probability} is not a probability"));
        }
        self.record.fields().iter().find_map(|(column, value)| match value {
            FieldValue::Number(number) if !number.is_finite() => {
                Some(format!("{column} {number} is not finite"))
            }
            _ => None,
        })
    }

    /// Cells in header order.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells: Vec<String> = self
            .record
            .fields()
            .iter()
            .map(|(_, value)| value.to_string())
            .collect();
        cells.push(self.prediction.label.as_u8().to_string());
        cells.push(self.prediction.probability.to_string());
        cells.push(self.timestamp.clone());
        cells
    }

    /// Parse a data row. The error names the offending column.
    pub fn from_record(row: &StringRecord) -> Result<Self, String> {
        if row.len() != LOG_COLUMN_COUNT {
            return Err(format!(
                "expected {LOG_COLUMN_COUNT} fields but found {}",
                row.len()
            ));
        }
        let claim_cells: [&str; CLAIM_FIELD_COUNT] =
            std::array::from_fn(|index| row.get(index).unwrap_or_default());
        let record = ClaimRecord::from_cells(&claim_cells).map_err(|err| err.to_string())?;

        let label_cell = row.get(CLAIM_FIELD_COUNT).unwrap_or_default().trim();
        let label = label_cell
            .parse::<u8>()
            .ok()
            .and_then(FraudLabel::from_u8)
            .ok_or_else(|| format!("column {PREDICTION_COLUMN}: cannot parse {label_cell:?}"))?;

        let proba_cell = row.get(CLAIM_FIELD_COUNT + 1).unwrap_or_default().trim();
        let probability = proba_cell
            .parse::<f64>()
            .ok()
            .filter(|p| (0.0..=1.0).contains(p))
            .ok_or_else(|| format!("column {PROBABILITY_COLUMN}: cannot parse {proba_cell:?}"))?;

        let timestamp = row.get(CLAIM_FIELD_COUNT + 2).unwrap_or_default().to_string();
        Ok(Self {
            record,
            prediction: PredictionResult { label, probability },
            timestamp,
        })
    }
}

/// Format a logging instant as `YYYY-MM-DD HH:MM:SS.ffffff`.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::sample_record;

    fn row(probability: f64) -> LogRow {
        LogRow::new(
            sample_record(),
            PredictionResult {
                label: FraudLabel::Fraudulent,
                probability,
            },
            OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
        )
    }

    #[test]
    fn header_lists_claim_columns_then_outputs() {
        let header = log_header();
        assert_eq!(header[0], "months_as_customer");
        assert_eq!(header[13], "capital-gains");
        assert_eq!(
            &header[CLAIM_FIELD_COUNT..],
            &["prediction", "fraud_proba", "timestamp"]
        );
    }

    #[test]
    fn timestamp_has_microseconds() {
        assert_eq!(row(0.83).timestamp, "2023-11-14 22:13:20.000000");
    }

    #[test]
    fn cells_parse_back() {
        let original = row(0.830_000_000_000_1);
        let parsed = LogRow::from_record(&StringRecord::from(original.to_cells())).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn timestamp_is_ignored_by_same_inference() {
        let mut later = row(0.83);
        later.timestamp = "2030-01-01 00:00:00.000000".into();
        assert!(row(0.83).same_inference(&later));
        assert!(!row(0.83).same_inference(&row(0.830_000_1)));
    }

    #[test]
    fn rejects_bad_prediction_cells() {
        let mut cells = row(0.83).to_cells();
        cells[CLAIM_FIELD_COUNT] = "2".into();
        let err = LogRow::from_record(&StringRecord::from(cells)).unwrap_err();
        assert!(err.contains(PREDICTION_COLUMN));

        let mut cells = row(0.83).to_cells();
        cells[CLAIM_FIELD_COUNT + 1] = "1.7".into();
        let err = LogRow::from_record(&StringRecord::from(cells)).unwrap_err();
        assert!(err.contains(PROBABILITY_COLUMN));
    }

    #[test]
    fn values_that_cannot_read_back_are_unwritable() {
        assert_eq!(row(0.0).unwritable_reason(), None);
        assert_eq!(row(1.0).unwritable_reason(), None);
        for probability in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
            let reason = row(probability).unwritable_reason().unwrap();
            assert!(reason.contains(PROBABILITY_COLUMN), "{reason}");
        }

        let mut overflowed = row(0.5);
        overflowed.record.total_claim_amount = f64::INFINITY;
        let reason = overflowed.unwritable_reason().unwrap();
        assert!(reason.contains("total_claim_amount"), "{reason}");
    }
}
