use fraudlens::claim::{ClaimForm, ClaimRecord};
use fraudlens::inference_log::{InferenceLog, LogOutcome, LogRow, LogTail};
use fraudlens::ml::{FraudLabel, PredictionResult};
use tempfile::TempDir;
use time::{Duration, OffsetDateTime};

fn base_record() -> ClaimRecord {
    ClaimForm::default().build().expect("default form is valid")
}

fn prediction(probability: f64) -> PredictionResult {
    PredictionResult {
        label: if probability >= 0.5 {
            FraudLabel::Fraudulent
        } else {
            FraudLabel::Legitimate
        },
        probability,
    }
}

fn row_with_amount(amount: f64, seconds: i64) -> LogRow {
    let mut record = base_record();
    record.total_claim_amount = amount;
    let at = OffsetDateTime::UNIX_EPOCH + Duration::seconds(seconds);
    LogRow::new(record, prediction(0.25), at)
}

fn log_in(temp: &TempDir) -> InferenceLog {
    InferenceLog::new(temp.path().join("data").join("inference_logs.csv"))
}

#[test]
fn viewing_before_any_prediction_reports_missing() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let log = log_in(&temp);
    assert_eq!(log.tail(20).expect("tail"), LogTail::Missing);
}

#[test]
fn tail_returns_last_rows_in_append_order() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let mut log = log_in(&temp);
    for idx in 0..25 {
        let outcome = log
            .record(&row_with_amount(1000.0 + idx as f64, idx))
            .expect("record row");
        let expected = if idx == 0 {
            LogOutcome::FirstLogged
        } else {
            LogOutcome::Appended
        };
        assert_eq!(outcome, expected);
    }

    let tail = log.tail(20).expect("tail");
    let amounts: Vec<f64> = tail
        .rows()
        .iter()
        .map(|row| row.record.total_claim_amount)
        .collect();
    let expected: Vec<f64> = (5..25).map(|idx| 1000.0 + idx as f64).collect();
    assert_eq!(amounts, expected);
}

#[test]
fn only_the_last_row_suppresses_duplicates() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let mut log = log_in(&temp);
    let a = row_with_amount(12000.0, 0);
    let b = row_with_amount(9000.0, 1);
    let a_again = row_with_amount(12000.0, 2);

    assert_eq!(log.record(&a).unwrap(), LogOutcome::FirstLogged);
    assert_eq!(log.record(&b).unwrap(), LogOutcome::Appended);
    assert_eq!(log.record(&a_again).unwrap(), LogOutcome::Appended);
    assert_eq!(log.tail(20).unwrap().rows().len(), 3);
}

#[test]
fn duplicate_detection_survives_reopening_the_file() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let first = row_with_amount(12000.0, 0);
    {
        let mut log = log_in(&temp);
        assert_eq!(log.record(&first).unwrap(), LogOutcome::FirstLogged);
    }

    let mut reopened = log_in(&temp);
    let later = row_with_amount(12000.0, 3600);
    assert_eq!(
        reopened.record(&later).unwrap(),
        LogOutcome::SkippedDuplicate
    );

    let rows = reopened.tail(20).unwrap();
    assert_eq!(rows.rows().len(), 1);
    assert_eq!(rows.rows()[0], first);
}

#[test]
fn probability_change_alone_is_a_new_row() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let mut log = log_in(&temp);
    let record = base_record();
    let at = OffsetDateTime::UNIX_EPOCH;
    log.record(&LogRow::new(record.clone(), prediction(0.61), at))
        .unwrap();
    let outcome = log
        .record(&LogRow::new(record, prediction(0.610_000_1), at))
        .unwrap();
    assert_eq!(outcome, LogOutcome::Appended);
}
