//! Churn Analytics
//!
//! Loads the historical churn dataset and computes conditional churn-rate
//! distributions over its categorical columns for dashboard display.

mod breakdown;
mod dataset;

pub use breakdown::{CategoryRates, ChurnBreakdown};
pub use dataset::{ChurnDataset, CHURN_COLUMN, CONTRACT_COLUMN, INTERNET_SERVICE_COLUMN};

use thiserror::Error;

/// Errors during analytics
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Dataset missing, unreadable, or malformed. Fatal at startup.
    #[error("Dataset load failed: {0}")]
    DatasetLoad(String),

    /// Breakdown requested over a column the dataset does not have
    #[error("Unknown categorical column: {0:?}")]
    UnknownColumn(String),
}
