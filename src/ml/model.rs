use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::encoding::FeatureEncoder;
use super::gbdt_stump::GbdtStumpClassifier;
use super::logreg::LogRegClassifier;
use super::{FraudLabel, Predictor};
use crate::claim::ClaimRecord;

/// Probability at or above which a claim is labelled fraudulent.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Errors raised while loading a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Model {path} failed validation: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Classifier head applied to the encoded features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    Logreg(LogRegClassifier),
    GbdtStump(GbdtStumpClassifier),
}

impl Classifier {
    fn validate(&self, feature_len: usize) -> Result<(), String> {
        match self {
            Classifier::Logreg(model) => model.validate(feature_len),
            Classifier::GbdtStump(model) => model.validate(feature_len),
        }
    }

    fn predict_proba(&self, features: &[f64]) -> f64 {
        match self {
            Classifier::Logreg(model) => model.predict_proba(features),
            Classifier::GbdtStump(model) => model.predict_proba(features),
        }
    }
}

/// Versioned fraud model: feature encoding plus a binary classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudModel {
    #[serde(default)]
    pub model_id: Option<String>,
    pub model_version: i64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(flatten)]
    pub encoder: FeatureEncoder,
    pub classifier: Classifier,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl FraudModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!("threshold {} is outside [0, 1]", self.threshold));
        }
        self.encoder.validate()?;
        self.classifier.validate(self.encoder.feature_len())
    }

    /// Load and validate a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate().map_err(|reason| ModelError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        tracing::info!(
            path = %path.display(),
            model_id = model.model_id.as_deref().unwrap_or("unnamed"),
            version = model.model_version,
            features = model.encoder.feature_len(),
            "Loaded fraud model"
        );
        Ok(model)
    }
}

impl Predictor for FraudModel {
    fn predict(&self, record: &ClaimRecord) -> FraudLabel {
        if self.predict_proba(record) >= self.threshold {
            FraudLabel::Fraudulent
        } else {
            FraudLabel::Legitimate
        }
    }

    fn predict_proba(&self, record: &ClaimRecord) -> f64 {
        let features = self.encoder.encode(record);
        self.classifier.predict_proba(&features).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::sample_record;
    use tempfile::tempdir;

    const LOGREG_JSON: &str = r#"{
        "model_id": "claims_logreg_v1",
        "model_version": 1,
        "threshold": 0.5,
        "numeric": [{"column": "total_claim_amount", "mean": 10000.0, "scale": 2000.0}],
        "categorical": [{"column": "incident_severity", "categories": ["Major Damage", "Minor Damage"]}],
        "classifier": {"kind": "logreg", "weights": [1.5, 2.0, -1.0], "bias": -0.5}
    }"#;

    #[test]
    fn loads_logreg_artifact_and_scores() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, LOGREG_JSON).unwrap();
        let model = FraudModel::load_json(&path).unwrap();

        // logit = -0.5 + 1.5 * 1.0 + (-1.0) * 1.0 = 0.0
        let record = sample_record();
        assert_eq!(model.predict_proba(&record), 0.5);
        assert_eq!(model.predict(&record), FraudLabel::Fraudulent);

        let mut major = record.clone();
        major.incident_severity = "Major Damage".into();
        let result = model.score(&major).unwrap();
        assert_eq!(result.label, FraudLabel::Fraudulent);
        assert!(result.probability > 0.9);

        let mut small = record;
        small.total_claim_amount = 2000.0;
        assert_eq!(model.predict(&small), FraudLabel::Legitimate);
    }

    #[test]
    fn loads_gbdt_artifact() {
        let json = r#"{
            "model_version": 2,
            "numeric": [{"column": "witnesses"}],
            "classifier": {
                "kind": "gbdt_stump",
                "learning_rate": 1.0,
                "init_raw": -2.0,
                "stumps": [{"feature_index": 0, "threshold": 0.5, "left_value": 0.0, "right_value": 4.0}]
            }
        }"#;
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, json).unwrap();
        let model = FraudModel::load_json(&path).unwrap();
        assert_eq!(model.threshold, DEFAULT_THRESHOLD);

        let mut record = sample_record();
        assert_eq!(model.predict(&record), FraudLabel::Legitimate);
        record.witnesses = 2;
        assert_eq!(model.predict(&record), FraudLabel::Fraudulent);
    }

    #[test]
    fn overflowing_input_still_scores_in_range() {
        let json = r#"{
            "model_version": 1,
            "numeric": [{"column": "total_claim_amount", "mean": 0.0, "scale": 0.5}],
            "classifier": {"kind": "logreg", "weights": [0.0], "bias": 0.0}
        }"#;
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, json).unwrap();
        let model = FraudModel::load_json(&path).unwrap();

        let mut record = sample_record();
        record.total_claim_amount = 1e308;
        let result = model.score(&record).unwrap();
        assert_eq!(result.probability, 0.5);
        assert_eq!(result.label, FraudLabel::Fraudulent);
    }

    #[test]
    fn missing_artifact_is_read_error() {
        let dir = tempdir().unwrap();
        let err = FraudModel::load_json(&dir.path().join("model.json")).unwrap_err();
        assert!(matches!(err, ModelError::Read { .. }));
    }

    #[test]
    fn malformed_artifact_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = FraudModel::load_json(&path).unwrap_err();
        assert!(matches!(err, ModelError::Parse { .. }));
    }

    #[test]
    fn inconsistent_artifact_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, LOGREG_JSON.replace("[1.5, 2.0, -1.0]", "[1.5]")).unwrap();
        let err = FraudModel::load_json(&path).unwrap_err();
        assert!(matches!(err, ModelError::Invalid { .. }));
        assert!(err.to_string().contains("weights length"));
    }
}
