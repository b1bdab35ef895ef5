use serde::{Deserialize, Serialize};

use crate::claim::ClaimRecord;
use crate::claim::choices::{CHOICE_FIELDS, COUNT_FIELDS, NUMERIC_FIELDS};

/// Standardized numeric input: `(value - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFeature {
    pub column: String,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "unit_scale")]
    pub scale: f64,
}

/// One-hot block over a fixed list of categories.
///
/// Values outside the list encode as all zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub column: String,
    pub categories: Vec<String>,
}

fn unit_scale() -> f64 {
    1.0
}

/// Maps a claim record onto the dense feature vector a classifier expects.
///
/// Layout: every numeric feature in order, then each categorical block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureEncoder {
    #[serde(default)]
    pub numeric: Vec<NumericFeature>,
    #[serde(default)]
    pub categorical: Vec<CategoricalFeature>,
}

impl FeatureEncoder {
    /// Length of the encoded vector.
    pub fn feature_len(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|feature| feature.categories.len())
                .sum::<usize>()
    }

    /// Check that every referenced column exists with a compatible kind.
    pub fn validate(&self) -> Result<(), String> {
        for feature in &self.numeric {
            match column_kind(&feature.column) {
                None => return Err(format!("Unknown numeric column {}", feature.column)),
                Some(ColumnKind::Text) => {
                    return Err(format!(
                        "Column {} is categorical and cannot be standardized",
                        feature.column
                    ));
                }
                Some(ColumnKind::Numeric) => {}
            }
            if !feature.mean.is_finite() {
                return Err(format!("Column {} has a non-finite mean", feature.column));
            }
            if !feature.scale.is_finite() || feature.scale == 0.0 {
                return Err(format!("Column {} needs a finite, non-zero scale", feature.column));
            }
        }
        for feature in &self.categorical {
            if column_kind(&feature.column).is_none() {
                return Err(format!("Unknown categorical column {}", feature.column));
            }
            if feature.categories.is_empty() {
                return Err(format!("Column {} has no categories", feature.column));
            }
        }
        Ok(())
    }

    /// Encode a claim record.
    pub fn encode(&self, record: &ClaimRecord) -> Vec<f64> {
        let mut features = Vec::with_capacity(self.feature_len());
        for feature in &self.numeric {
            let value = record
                .value(&feature.column)
                .and_then(|value| value.as_number())
                .unwrap_or(feature.mean);
            // Huge inputs saturate instead of overflowing to infinity.
            let standardized = (value - feature.mean) / feature.scale;
            features.push(standardized.clamp(f64::MIN, f64::MAX));
        }
        for feature in &self.categorical {
            let raw = record.value(&feature.column).map(|value| value.to_string());
            features.extend(feature.categories.iter().map(|category| {
                if raw.as_deref() == Some(category.as_str()) {
                    1.0
                } else {
                    0.0
                }
            }));
        }
        features
    }
}

enum ColumnKind {
    Numeric,
    Text,
}

fn column_kind(column: &str) -> Option<ColumnKind> {
    if CHOICE_FIELDS.iter().any(|field| field.column == column) {
        Some(ColumnKind::Text)
    } else if NUMERIC_FIELDS.iter().any(|field| field.column == column)
        || COUNT_FIELDS.iter().any(|field| field.column == column)
    {
        Some(ColumnKind::Numeric)
    } else {
        None
    }
}
