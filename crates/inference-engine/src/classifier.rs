//! Binary Churn Classifier

use crate::{InferenceError, ModelArtifact};
use feature_encoder::{FeatureVector, FEATURE_DIMENSION};

/// Pre-trained binary classifier over the fixed 8-feature contract.
///
/// `classify` yields the discrete label (1 = churn), `score_probability`
/// the churn-class probability in `[0, 1]`. Implementations are read-only
/// after construction.
pub trait ChurnClassifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> u8;
    fn score_probability(&self, features: &FeatureVector) -> f64;
}

/// Logistic regression evaluated from persisted artifact parameters
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    coefficients: [f64; FEATURE_DIMENSION],
    intercept: f64,
    decision_threshold: f64,
}

impl LogisticClassifier {
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, InferenceError> {
        let coefficients: [f64; FEATURE_DIMENSION] =
            artifact.coefficients.as_slice().try_into().map_err(|_| {
                InferenceError::ModelLoad(format!(
                    "expected {} coefficients, got {}",
                    FEATURE_DIMENSION,
                    artifact.coefficients.len()
                ))
            })?;

        Ok(Self {
            coefficients,
            intercept: artifact.intercept,
            decision_threshold: artifact.decision_threshold,
        })
    }

    fn logit(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl ChurnClassifier for LogisticClassifier {
    fn classify(&self, features: &FeatureVector) -> u8 {
        u8::from(self.score_probability(features) >= self.decision_threshold)
    }

    fn score_probability(&self, features: &FeatureVector) -> f64 {
        1.0 / (1.0 + (-self.logit(features)).exp())
    }
}
