//! Dashboard Session
//!
//! Composition root a UI process embeds: loads configuration, installs
//! logging, and owns the bootstrap-once lifecycle of the classifier artifact
//! and the historical dataset.

mod session;
mod settings;

pub use session::DashboardSession;
pub use settings::DashboardConfig;

// Boundary types the embedding UI works with.
pub use churn_analytics::{CategoryRates, ChurnBreakdown};
pub use feature_encoder::CustomerRecord;
pub use inference_engine::PredictionResult;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Fatal startup errors. There is no recovery path for any of these; the
/// embedding process reports the failure and exits.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Classifier artifact missing, malformed, or schema-incompatible
    #[error("Model load failed: {0}")]
    ModelLoad(#[source] inference_engine::InferenceError),

    /// Historical dataset missing or malformed. Prediction does not depend
    /// on the dataset, but the dashboard is unusable without its charts.
    #[error("Dataset load failed: {0}")]
    DatasetLoad(#[from] churn_analytics::AnalyticsError),
}

/// Initialize logging for the embedding process
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
