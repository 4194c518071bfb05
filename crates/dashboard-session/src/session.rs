//! Session Lifecycle
//!
//! The artifact and the dataset load exactly once, at bootstrap. Both are
//! immutable shared-read state afterwards; reloading means restarting the
//! embedding process.

use crate::settings::DashboardConfig;
use crate::StartupError;
use churn_analytics::{ChurnBreakdown, ChurnDataset, CONTRACT_COLUMN, INTERNET_SERVICE_COLUMN};
use feature_encoder::CustomerRecord;
use inference_engine::{ChurnPredictor, InferenceError, ModelArtifact, PredictionResult};
use tracing::info;

/// One dashboard process's worth of immutable prediction and analytics state
pub struct DashboardSession {
    predictor: ChurnPredictor,
    dataset: ChurnDataset,
}

impl DashboardSession {
    /// Load the classifier artifact and the historical dataset. Either
    /// failure is fatal; the two error variants distinguish which startup
    /// dependency was at fault.
    pub fn bootstrap(config: &DashboardConfig) -> Result<Self, StartupError> {
        let artifact =
            ModelArtifact::from_path(&config.model_path).map_err(StartupError::ModelLoad)?;
        let predictor = ChurnPredictor::from_artifact(&artifact).map_err(StartupError::ModelLoad)?;
        let dataset = ChurnDataset::from_path(&config.dataset_path)?;

        info!(
            model = config.model_path.as_str(),
            dataset = config.dataset_path.as_str(),
            rows = dataset.len(),
            "dashboard session ready"
        );
        Ok(Self { predictor, dataset })
    }

    /// Predict churn for one customer. Per-call failures are the caller's to
    /// report; the session stays usable.
    pub fn predict(&self, record: &CustomerRecord) -> Result<PredictionResult, InferenceError> {
        self.predictor.predict(record)
    }

    /// Churn breakdown over any categorical column in the dataset
    pub fn breakdown_by(&self, column: &str) -> Result<ChurnBreakdown, churn_analytics::AnalyticsError> {
        self.dataset.breakdown_by(column)
    }

    /// Standard dashboard chart: churn by contract term
    pub fn contract_breakdown(&self) -> Result<ChurnBreakdown, churn_analytics::AnalyticsError> {
        self.dataset.breakdown_by(CONTRACT_COLUMN)
    }

    /// Standard dashboard chart: churn by internet service
    pub fn internet_service_breakdown(
        &self,
    ) -> Result<ChurnBreakdown, churn_analytics::AnalyticsError> {
        self.dataset.breakdown_by(INTERNET_SERVICE_COLUMN)
    }

    /// Read-only view of the loaded dataset
    pub fn dataset(&self) -> &ChurnDataset {
        &self.dataset
    }
}
