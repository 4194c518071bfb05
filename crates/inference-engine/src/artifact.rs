//! Classifier Artifact
//!
//! The persisted model is a JSON document with a declared schema: the feature
//! column order, the label→code encodings it was trained with, and the
//! logistic regression parameters. Declaring the schema lets load time catch
//! an encoder/model mismatch that would otherwise corrupt every prediction
//! silently.

use crate::InferenceError;
use feature_encoder::{EncodingTable, FEATURE_COLUMNS, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Artifact format understood by this build
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Persisted, pre-trained binary classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Serialization format version
    pub format_version: u32,
    /// Version tag of the encoding table used at training time
    pub encoding_version: String,
    /// Feature column names, in trained order
    pub feature_columns: Vec<String>,
    /// Label→code mapping per categorical field, as trained
    pub encodings: BTreeMap<String, BTreeMap<String, i64>>,
    /// Logistic regression coefficients, one per feature column
    pub coefficients: Vec<f64>,
    /// Logistic regression intercept
    pub intercept: f64,
    /// Churn-probability threshold for the positive decision
    pub decision_threshold: f64,
}

impl ModelArtifact {
    /// Load and structurally validate an artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| InferenceError::ModelLoad(format!("{}: {e}", path.display())))?;
        let artifact = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            features = artifact.coefficients.len(),
            "loaded classifier artifact"
        );
        Ok(artifact)
    }

    /// Parse an artifact from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InferenceError> {
        let artifact: ModelArtifact = serde_json::from_reader(reader)
            .map_err(|e| InferenceError::ModelLoad(format!("malformed artifact: {e}")))?;

        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(InferenceError::ModelLoad(format!(
                "unsupported artifact format version {} (expected {})",
                artifact.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }

        if artifact.coefficients.len() != FEATURE_DIMENSION {
            return Err(InferenceError::ModelLoad(format!(
                "expected {} coefficients, got {}",
                FEATURE_DIMENSION,
                artifact.coefficients.len()
            )));
        }

        Ok(artifact)
    }

    /// Check the artifact's declared schema against the encoder's table.
    ///
    /// Feature order and every label→code pair must match exactly; any
    /// divergence means the encoder would feed the model vectors from a
    /// different training run.
    pub fn validate_schema(&self, table: &EncodingTable) -> Result<(), InferenceError> {
        if self.encoding_version != table.version() {
            return Err(InferenceError::SchemaMismatch(format!(
                "artifact trained with encoding table {:?}, encoder provides {:?}",
                self.encoding_version,
                table.version()
            )));
        }

        if self.feature_columns != FEATURE_COLUMNS {
            return Err(InferenceError::SchemaMismatch(format!(
                "artifact feature order {:?} does not match encoder order {:?}",
                self.feature_columns, FEATURE_COLUMNS
            )));
        }

        let table_codes = table.code_map();
        if self.encodings != table_codes {
            return Err(InferenceError::SchemaMismatch(
                "artifact label encodings differ from the encoder's table".to_string(),
            ));
        }

        Ok(())
    }
}
