//! Binary logistic regression over encoded claim features.

use serde::{Deserialize, Serialize};

use super::sigmoid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRegClassifier {
    pub weights: Vec<f64>,
    pub bias: f64,
    /// Logit divisor used for calibration.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_temperature() -> f64 {
    1.0
}

impl LogRegClassifier {
    pub fn validate(&self, feature_len: usize) -> Result<(), String> {
        if self.weights.len() != feature_len {
            return Err(format!(
                "weights length {} does not match feature length {}",
                self.weights.len(),
                feature_len
            ));
        }
        if self.weights.iter().any(|w| !w.is_finite()) || !self.bias.is_finite() {
            return Err("weights and bias must be finite".to_string());
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err("temperature must be > 0".to_string());
        }
        Ok(())
    }

    /// Probability of the positive class for an encoded feature vector.
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        let logit = self
            .weights
            .iter()
            .zip(features)
            .fold(self.bias, |sum, (w, x)| sum + w * x);
        sigmoid(logit / self.temperature.max(1e-6))
    }
}
