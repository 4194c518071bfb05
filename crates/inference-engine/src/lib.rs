//! Churn Inference Engine
//!
//! Loads the persisted classifier artifact, validates it against the
//! encoder's label tables, and turns raw customer records into calibrated
//! churn predictions.

mod artifact;
mod classifier;
mod predictor;

pub use artifact::{ModelArtifact, ARTIFACT_FORMAT_VERSION};
pub use classifier::{ChurnClassifier, LogisticClassifier};
pub use predictor::{ChurnPredictor, PredictionResult};

use feature_encoder::EncodeError;
use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Artifact missing, unreadable, or malformed. Fatal at startup.
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Artifact was trained against a different feature schema or encoding
    /// table than this build encodes with. Fatal at startup.
    #[error("Model schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A single prediction call received an out-of-domain input. Reported to
    /// the caller; later calls are unaffected.
    #[error(transparent)]
    InvalidInput(#[from] EncodeError),
}
