//! Historical Churn Dataset
//!
//! Loaded once per session from a headered CSV file and treated as an
//! immutable snapshot from then on. Every column other than the churn
//! outcome is retained in raw string form, so any categorical column can be
//! broken down without reloading.

use crate::AnalyticsError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Outcome column name in the source CSV
pub const CHURN_COLUMN: &str = "Churn";
/// Contract-term column, one of the two standard dashboard breakdowns
pub const CONTRACT_COLUMN: &str = "Contract";
/// Internet-service column, the other standard dashboard breakdown
pub const INTERNET_SERVICE_COLUMN: &str = "InternetService";

/// One historical row: raw categorical values plus the observed outcome
#[derive(Debug, Clone)]
pub(crate) struct DatasetRow {
    pub values: Vec<String>,
    pub churned: bool,
}

/// Read-only, ordered collection of historical customer rows
#[derive(Debug, Clone)]
pub struct ChurnDataset {
    /// Retained column names, in header order (outcome column excluded)
    columns: Vec<String>,
    rows: Vec<DatasetRow>,
}

impl ChurnDataset {
    /// Load a dataset from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyticsError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AnalyticsError::DatasetLoad(format!("{}: {e}", path.display())))?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.columns.len(),
            "loaded churn dataset"
        );
        Ok(dataset)
    }

    /// Parse a dataset from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AnalyticsError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| AnalyticsError::DatasetLoad(format!("unreadable header: {e}")))?
            .clone();
        let churn_idx = headers
            .iter()
            .position(|h| h == CHURN_COLUMN)
            .ok_or_else(|| {
                AnalyticsError::DatasetLoad(format!("missing required column {CHURN_COLUMN:?}"))
            })?;

        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != churn_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            // Header is line 1, first data row is line 2.
            let row_number = line + 2;
            let record = record.map_err(|e| {
                AnalyticsError::DatasetLoad(format!("row {row_number}: {e}"))
            })?;

            let raw_outcome = record.get(churn_idx).ok_or_else(|| {
                AnalyticsError::DatasetLoad(format!("row {row_number}: missing churn value"))
            })?;
            let churned = parse_churn_label(raw_outcome, row_number)?;

            let values: Vec<String> = record
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != churn_idx)
                .map(|(_, v)| v.to_string())
                .collect();

            rows.push(DatasetRow { values, churned });
        }

        Ok(Self { columns, rows })
    }

    /// Retained categorical column names, in dataset order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn column_index(&self, column: &str) -> Result<usize, AnalyticsError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| AnalyticsError::UnknownColumn(column.to_string()))
    }

    pub(crate) fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }
}

fn parse_churn_label(raw: &str, row_number: usize) -> Result<bool, AnalyticsError> {
    match raw.trim() {
        "Yes" | "yes" | "True" | "true" | "1" => Ok(true),
        "No" | "no" | "False" | "false" | "0" => Ok(false),
        other => Err(AnalyticsError::DatasetLoad(format!(
            "row {row_number}: unrecognized churn label {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_CSV: &str = "\
Contract,InternetService,Churn
Month-to-month,DSL,Yes
Month-to-month,Fiber optic,No
One year,DSL,No
Two year,No,No
";

    #[test]
    fn loads_columns_and_rows_from_csv() {
        let dataset = ChurnDataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.columns(), ["Contract", "InternetService"]);
        assert!(dataset.rows()[0].churned);
        assert!(!dataset.rows()[3].churned);
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let dataset = ChurnDataset::from_path(file.path()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let err = ChurnDataset::from_path("/nonexistent/customers.csv").unwrap_err();
        assert!(matches!(err, AnalyticsError::DatasetLoad(_)));
    }

    #[test]
    fn missing_churn_column_is_rejected() {
        let csv = "Contract,InternetService\nOne year,DSL\n";
        let err = ChurnDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyticsError::DatasetLoad(_)));
    }

    #[test]
    fn unrecognized_churn_label_reports_the_row() {
        let csv = "Contract,Churn\nOne year,Maybe\n";
        let err = ChurnDataset::from_reader(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("row 2"), "unexpected message: {message}");
    }

    #[test]
    fn accepts_boolean_style_churn_labels() {
        let csv = "Contract,Churn\nOne year,true\nTwo year,0\n";
        let dataset = ChurnDataset::from_reader(csv.as_bytes()).unwrap();
        assert!(dataset.rows()[0].churned);
        assert!(!dataset.rows()[1].churned);
    }
}
