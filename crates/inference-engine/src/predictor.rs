//! Prediction Service
//!
//! Wraps an injected classifier behind the decision-facing contract: encode,
//! classify, score, express the probability as a percentage.

use crate::classifier::{ChurnClassifier, LogisticClassifier};
use crate::{InferenceError, ModelArtifact};
use feature_encoder::{CustomerRecord, FeatureEncoder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of one prediction call. Ephemeral, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Discrete classifier decision
    pub will_churn: bool,
    /// Churn-class probability as a percentage in `[0, 100]`
    pub churn_probability: f64,
}

impl PredictionResult {
    /// Displayed stay probability. Defined as the exact complement of the
    /// churn probability; the complement rule is authoritative for display
    /// even if the underlying model's two raw class scores disagree.
    pub fn stay_probability(&self) -> f64 {
        100.0 - self.churn_probability
    }
}

/// Churn prediction service over an injected, immutable classifier
pub struct ChurnPredictor {
    classifier: Box<dyn ChurnClassifier>,
    encoder: FeatureEncoder,
}

impl ChurnPredictor {
    /// Build a predictor from an already-validated classifier and encoder
    pub fn new(classifier: Box<dyn ChurnClassifier>, encoder: FeatureEncoder) -> Self {
        Self {
            classifier,
            encoder,
        }
    }

    /// Wire a predictor from a loaded artifact: validate the artifact's
    /// declared schema against the current encoding table, then evaluate its
    /// logistic parameters. Either failure is fatal to startup.
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, InferenceError> {
        let encoder = FeatureEncoder::default();
        artifact.validate_schema(encoder.table())?;
        let classifier = LogisticClassifier::from_artifact(artifact)?;
        info!(
            encoding_version = artifact.encoding_version.as_str(),
            threshold = artifact.decision_threshold,
            "churn predictor ready"
        );
        Ok(Self::new(Box::new(classifier), encoder))
    }

    /// Predict churn for one customer record.
    ///
    /// An out-of-domain categorical label fails before the classifier is
    /// ever invoked; the error is the caller's to report and leaves the
    /// predictor untouched.
    pub fn predict(&self, record: &CustomerRecord) -> Result<PredictionResult, InferenceError> {
        let features = self.encoder.encode(record)?;
        let label = self.classifier.classify(&features);
        let churn_probability = self.classifier.score_probability(&features) * 100.0;

        debug!(label, churn_probability, "prediction complete");
        Ok(PredictionResult {
            will_churn: label == 1,
            churn_probability,
        })
    }
}
