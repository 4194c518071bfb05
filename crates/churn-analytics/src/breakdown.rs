//! Per-Category Churn Breakdown
//!
//! Groups the dataset by one categorical column and normalizes each group's
//! churn/stay counts independently, since group sizes differ and the
//! dashboard shows within-category churn rate rather than population share.

use crate::dataset::ChurnDataset;
use crate::AnalyticsError;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Normalized churn distribution for one category value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRates {
    /// Raw category value as it appears in the dataset
    pub value: String,
    /// Number of rows observed with this value (always ≥ 1)
    pub observations: usize,
    /// Percentage of observations that stayed, in `[0, 100]`
    pub stay_rate: f64,
    /// Percentage of observations that churned, in `[0, 100]`
    pub churn_rate: f64,
}

/// Churn-rate distribution over one categorical column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnBreakdown {
    /// Column the rows were grouped by
    pub column: String,
    /// One entry per distinct value, in first-appearance order
    pub categories: Vec<CategoryRates>,
}

impl ChurnBreakdown {
    /// Rates for one category value, if it was observed
    pub fn category(&self, value: &str) -> Option<&CategoryRates> {
        self.categories.iter().find(|c| c.value == value)
    }
}

impl ChurnDataset {
    /// Compute the churn breakdown over any retained categorical column.
    ///
    /// Category order is the order of first appearance in the dataset, never
    /// map iteration order, so chart rendering stays stable across calls.
    /// Values with zero observations cannot appear: a group only exists once
    /// a row is seen.
    pub fn breakdown_by(&self, column: &str) -> Result<ChurnBreakdown, AnalyticsError> {
        let idx = self.column_index(column)?;

        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for row in self.rows() {
            let value = row.values[idx].as_str();
            let entry = counts.entry(value).or_insert_with(|| {
                order.push(value);
                (0, 0)
            });
            if row.churned {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }

        let categories = order
            .into_iter()
            .map(|value| {
                let (churned, stayed) = counts[value];
                let total = (churned + stayed) as f64;
                CategoryRates {
                    value: value.to_string(),
                    observations: churned + stayed,
                    stay_rate: stayed as f64 / total * 100.0,
                    churn_rate: churned as f64 / total * 100.0,
                }
            })
            .collect::<Vec<_>>();

        debug!(column, groups = categories.len(), "computed churn breakdown");
        Ok(ChurnBreakdown {
            column: column.to_string(),
            categories,
        })
    }
}
