//! Feature Encoding Engine
//!
//! Maps raw, human-entered customer attributes to the fixed-order numeric
//! feature vector the churn classifier was trained on.

mod domain;
mod encoder;
mod record;

pub use domain::{fields, Contract, Gender, InternetService, PhoneService};
pub use encoder::{
    EncodingTable, FeatureEncoder, FeatureVector, FieldEncoding, ENCODING_TABLE_VERSION,
    FEATURE_COLUMNS, FEATURE_DIMENSION,
};
pub use record::{
    CustomerRecord, MONTHLY_CHARGES_RANGE, TENURE_RANGE, TOTAL_CHARGES_RANGE,
};

use thiserror::Error;

/// Errors during feature encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Categorical input outside the trained label set
    #[error("{field} value {value:?} is outside the trained category set")]
    InvalidCategory { field: &'static str, value: String },
}
