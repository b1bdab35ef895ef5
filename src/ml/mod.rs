//! Fraud classifier loading and inference.
//!
//! Models are trained elsewhere and exported as JSON. The dashboard loads one
//! model at startup and scores claims through the [`Predictor`] trait so the
//! service can be exercised with fixed predictors in tests.

mod encoding;
mod gbdt_stump;
mod logreg;
mod model;

pub use encoding::{CategoricalFeature, FeatureEncoder, NumericFeature};
pub use gbdt_stump::{GbdtStumpClassifier, Stump};
pub use logreg::LogRegClassifier;
pub use model::{Classifier, DEFAULT_THRESHOLD, FraudModel, ModelError};

use crate::claim::ClaimRecord;

/// Binary outcome of a fraud prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FraudLabel {
    Legitimate,
    Fraudulent,
}

impl FraudLabel {
    /// Encoded class, `1` for fraud.
    pub fn as_u8(self) -> u8 {
        match self {
            FraudLabel::Legitimate => 0,
            FraudLabel::Fraudulent => 1,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(FraudLabel::Legitimate),
            1 => Some(FraudLabel::Fraudulent),
            _ => None,
        }
    }

    /// Human-readable verdict.
    pub fn verdict(self) -> &'static str {
        match self {
            FraudLabel::Legitimate => "Not Fraudulent",
            FraudLabel::Fraudulent => "Fraudulent",
        }
    }
}

/// Label plus positive-class probability for one claim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub label: FraudLabel,
    /// Probability of fraud in `[0, 1]`.
    pub probability: f64,
}

impl PredictionResult {
    /// Probability as a percentage rounded to two decimals, e.g. `83.12%`.
    pub fn probability_percent(&self) -> String {
        let percent = (self.probability * 100.0 * 100.0).round() / 100.0;
        format!("{percent}%")
    }
}

/// Model output that cannot be shown or logged.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("Model produced an unusable fraud probability ({0})")]
    InvalidProbability(f64),
}

/// A trained binary classifier over claim records.
pub trait Predictor {
    /// Predicted class for the claim.
    fn predict(&self, record: &ClaimRecord) -> FraudLabel;

    /// Probability that the claim is fraudulent, in `[0, 1]`.
    fn predict_proba(&self, record: &ClaimRecord) -> f64;

    /// Both outputs for one claim, rejecting a probability outside `[0, 1]`.
    fn score(&self, record: &ClaimRecord) -> Result<PredictionResult, PredictError> {
        let probability = self.predict_proba(record);
        if !(0.0..=1.0).contains(&probability) {
            return Err(PredictError::InvalidProbability(probability));
        }
        Ok(PredictionResult {
            label: self.predict(record),
            probability,
        })
    }
}

/// Numerically stable logistic function.
pub(crate) fn sigmoid(raw: f64) -> f64 {
    if raw >= 0.0 {
        1.0 / (1.0 + (-raw).exp())
    } else {
        let e = raw.exp();
        e / (1.0 + e)
    }
}

/// Predictor that returns the same probability for every claim.
#[cfg(test)]
pub(crate) struct FixedPredictor(pub f64);

#[cfg(test)]
impl Predictor for FixedPredictor {
    fn predict(&self, _record: &ClaimRecord) -> FraudLabel {
        if self.0 >= DEFAULT_THRESHOLD {
            FraudLabel::Fraudulent
        } else {
            FraudLabel::Legitimate
        }
    }

    fn predict_proba(&self, _record: &ClaimRecord) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_two_decimals() {
        let result = PredictionResult {
            label: FraudLabel::Fraudulent,
            probability: 0.831_26,
        };
        assert_eq!(result.probability_percent(), "83.13%");
        let zero = PredictionResult {
            label: FraudLabel::Legitimate,
            probability: 0.0,
        };
        assert_eq!(zero.probability_percent(), "0%");
    }

    #[test]
    fn sigmoid_is_stable_at_extremes() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(800.0) <= 1.0);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(-800.0).is_finite());
    }

    #[test]
    fn score_rejects_probability_outside_unit_range() {
        let record = crate::claim::sample_record();
        let err = FixedPredictor(f64::NAN).score(&record).unwrap_err();
        assert!(matches!(err, PredictError::InvalidProbability(p) if p.is_nan()));
        assert_eq!(
            FixedPredictor(1.5).score(&record),
            Err(PredictError::InvalidProbability(1.5))
        );
        for edge in [0.0, 1.0] {
            assert_eq!(FixedPredictor(edge).score(&record).unwrap().probability, edge);
        }
    }

    #[test]
    fn label_round_trips_through_u8() {
        for label in [FraudLabel::Legitimate, FraudLabel::Fraudulent] {
            assert_eq!(FraudLabel::from_u8(label.as_u8()), Some(label));
        }
        assert_eq!(FraudLabel::from_u8(2), None);
    }
}
