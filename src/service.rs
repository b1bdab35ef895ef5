//! Application context tying the model and the inference log together.
//!
//! One [`FraudService`] is built at startup and handed to the UI controller
//! (or the command-line scorer). It owns the only predictor and the only
//! log writer for the process.

use crate::claim::{ClaimForm, ClaimRecord, ValidationError};
use crate::config::AppConfig;
use crate::inference_log::{InferenceLog, LogError, LogOutcome, LogRow, LogTail};
use crate::logging::now_local_or_utc;
use crate::ml::{FraudModel, ModelError, PredictError, PredictionResult, Predictor};

/// Why a Predict action produced no prediction.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Model(#[from] PredictError),
}

/// Outcome of one Predict action.
///
/// Logging can fail without hiding the prediction, so the two are reported
/// side by side.
#[derive(Debug)]
pub struct ScoreReport {
    pub record: ClaimRecord,
    pub prediction: PredictionResult,
    /// `None` when logging was not requested.
    pub logging: Option<Result<LogOutcome, LogError>>,
}

impl ScoreReport {
    /// e.g. `Prediction: Fraudulent`.
    pub fn verdict_text(&self) -> String {
        format!("Prediction: {}", self.prediction.label.verdict())
    }

    /// e.g. `Fraud Probability: 83.12%`.
    pub fn probability_text(&self) -> String {
        format!("Fraud Probability: {}", self.prediction.probability_percent())
    }

    /// Log outcome message, or the logging failure as a warning.
    pub fn logging_text(&self) -> Option<String> {
        self.logging.as_ref().map(|result| match result {
            Ok(outcome) => outcome.message().to_string(),
            Err(err) => format!("Prediction not logged: {err}"),
        })
    }
}

pub struct FraudService {
    predictor: Box<dyn Predictor>,
    log: InferenceLog,
    recent_rows: usize,
}

impl FraudService {
    pub fn new(predictor: Box<dyn Predictor>, log: InferenceLog, recent_rows: usize) -> Self {
        Self {
            predictor,
            log,
            recent_rows,
        }
    }

    /// Load the configured model once and open the configured log.
    pub fn from_config(config: &AppConfig) -> Result<Self, ModelError> {
        let model = FraudModel::load_json(&config.model_path)?;
        Ok(Self::new(
            Box::new(model),
            InferenceLog::new(&config.log_path),
            config.recent_rows,
        ))
    }

    pub fn log(&self) -> &InferenceLog {
        &self.log
    }

    pub fn recent_rows(&self) -> usize {
        self.recent_rows
    }

    /// Validate the form, score it and log the result.
    ///
    /// Invalid input and unusable model output are errors; a logging failure
    /// is carried in the report.
    pub fn score_form(&mut self, form: &ClaimForm) -> Result<ScoreReport, ScoreError> {
        let record = form.build().inspect_err(|err| {
            tracing::info!(fields = ?err.columns(), "Rejected claim form");
        })?;
        Ok(self.score_and_log(record)?)
    }

    /// Score a record and offer it to the inference log.
    ///
    /// Nothing is logged when the model output is rejected.
    pub fn score_and_log(&mut self, record: ClaimRecord) -> Result<ScoreReport, PredictError> {
        let prediction = self.score(&record)?;
        let row = LogRow::new(record.clone(), prediction, now_local_or_utc());
        let logging = self.log.record(&row);
        match &logging {
            Ok(outcome) => tracing::info!(
                label = prediction.label.as_u8(),
                probability = prediction.probability,
                ?outcome,
                "Scored claim"
            ),
            Err(err) => tracing::warn!("Scored claim but logging failed: {err}"),
        }
        Ok(ScoreReport {
            record,
            prediction,
            logging: Some(logging),
        })
    }

    /// Score a record without touching the log.
    pub fn score_only(&self, record: ClaimRecord) -> Result<ScoreReport, PredictError> {
        let prediction = self.score(&record)?;
        Ok(ScoreReport {
            record,
            prediction,
            logging: None,
        })
    }

    fn score(&self, record: &ClaimRecord) -> Result<PredictionResult, PredictError> {
        self.predictor
            .score(record)
            .inspect_err(|err| tracing::warn!("Rejected model output: {err}"))
    }

    /// The most recent log rows for display.
    pub fn recent_logs(&self) -> Result<LogTail, LogError> {
        self.log.tail(self.recent_rows)
    }
}
