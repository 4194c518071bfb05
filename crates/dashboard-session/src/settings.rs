//! Dashboard Configuration

use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_MODEL_PATH: &str = "churn_model.json";
const DEFAULT_DATASET_PATH: &str = "customer_churn.csv";

/// Paths to the two startup artifacts
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Classifier artifact (JSON)
    pub model_path: String,
    /// Historical churn dataset (CSV)
    pub dataset_path: String,
}

impl DashboardConfig {
    /// Load configuration from an optional `dashboard.toml` next to the
    /// process, overridable via `CHURN_DASHBOARD_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Config::builder()
            .set_default("model_path", DEFAULT_MODEL_PATH)?
            .set_default("dataset_path", DEFAULT_DATASET_PATH)?
            .add_source(File::with_name("dashboard").required(false))
            .add_source(Environment::with_prefix("CHURN_DASHBOARD"))
            .build()?
            .try_deserialize()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
        }
    }
}
