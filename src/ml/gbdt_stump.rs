//! Gradient-boosted decision stumps for the binary fraud class.
//!
//! Each round adds one stump's output to a raw score; the probability is the
//! logistic of the final score.

use serde::{Deserialize, Serialize};

use super::sigmoid;

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stump {
    /// Index into the encoded feature vector.
    pub feature_index: u16,
    pub threshold: f64,
    /// Output for `feature <= threshold`.
    pub left_value: f64,
    /// Output for `feature > threshold`.
    pub right_value: f64,
}

impl Stump {
    pub fn predict(&self, features: &[f64]) -> f64 {
        let value = features
            .get(self.feature_index as usize)
            .copied()
            .unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbdtStumpClassifier {
    pub learning_rate: f64,
    /// Raw score before any boosting round.
    #[serde(default)]
    pub init_raw: f64,
    pub stumps: Vec<Stump>,
}

impl GbdtStumpClassifier {
    pub fn validate(&self, feature_len: usize) -> Result<(), String> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be > 0".to_string());
        }
        if !self.init_raw.is_finite() {
            return Err("init_raw must be finite".to_string());
        }
        for (round, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= feature_len {
                return Err(format!(
                    "Round {round} splits on feature {} but only {feature_len} features exist",
                    stump.feature_index
                ));
            }
            if !stump.threshold.is_finite()
                || !stump.left_value.is_finite()
                || !stump.right_value.is_finite()
            {
                return Err(format!("Round {round} has non-finite values"));
            }
        }
        Ok(())
    }

    pub fn predict_raw(&self, features: &[f64]) -> f64 {
        self.stumps.iter().fold(self.init_raw, |raw, stump| {
            raw + self.learning_rate * stump.predict(features)
        })
    }

    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        sigmoid(self.predict_raw(features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature_index: u16, threshold: f64, left: f64, right: f64) -> Stump {
        Stump {
            feature_index,
            threshold,
            left_value: left,
            right_value: right,
        }
    }

    #[test]
    fn stump_predict_branches() {
        let s = stump(0, 0.5, -1.0, 2.0);
        assert_eq!(s.predict(&[0.0]), -1.0);
        assert_eq!(s.predict(&[0.5]), -1.0);
        assert_eq!(s.predict(&[0.6]), 2.0);
    }

    #[test]
    fn boosting_accumulates_rounds() {
        let model = GbdtStumpClassifier {
            learning_rate: 0.5,
            init_raw: -1.0,
            stumps: vec![stump(0, 0.0, -1.0, 2.0), stump(1, 0.0, 0.0, 2.0)],
        };
        model.validate(2).unwrap();
        assert_eq!(model.predict_raw(&[1.0, 1.0]), 1.0);
        assert_eq!(model.predict_raw(&[0.0, 0.0]), -1.5);
        assert!(model.predict_proba(&[1.0, 1.0]) > 0.5);
        assert!(model.predict_proba(&[0.0, 0.0]) < 0.5);
    }

    #[test]
    fn rejects_out_of_range_feature() {
        let model = GbdtStumpClassifier {
            learning_rate: 1.0,
            init_raw: 0.0,
            stumps: vec![stump(4, 0.0, 0.0, 0.0)],
        };
        assert!(model.validate(4).unwrap_err().contains("feature 4"));
    }
}
