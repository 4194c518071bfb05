//! Feature Vector Assembly
//!
//! The encoding table is explicit and versioned so the mapping can be
//! checked against whatever table the classifier artifact was trained with,
//! instead of living as implicit constants the model silently disagrees on.

use crate::domain::{fields, Contract, Gender, InternetService, PhoneService};
use crate::record::CustomerRecord;
use crate::EncodeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 8;

/// Feature column names, in the fixed order the classifier was trained on.
/// Reordering silently corrupts predictions; the artifact schema check
/// verifies this exact sequence at load time.
pub const FEATURE_COLUMNS: [&str; FEATURE_DIMENSION] = [
    fields::GENDER,
    fields::SENIOR_CITIZEN,
    fields::TENURE,
    fields::PHONE_SERVICE,
    fields::INTERNET_SERVICE,
    fields::CONTRACT,
    fields::MONTHLY_CHARGES,
    fields::TOTAL_CHARGES,
];

/// Version tag of the current label→code table
pub const ENCODING_TABLE_VERSION: &str = "v1";

/// Encoded classifier input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values in `FEATURE_COLUMNS` order
    pub values: [f64; FEATURE_DIMENSION],
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Label→code mapping for one categorical field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEncoding {
    pub field: String,
    pub codes: BTreeMap<String, i64>,
}

/// Versioned lookup table from categorical labels to trained integer codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingTable {
    version: String,
    fields: Vec<FieldEncoding>,
}

impl EncodingTable {
    /// The table the current model generation was trained with, built from
    /// the typed domain enums.
    pub fn v1() -> Self {
        Self {
            version: ENCODING_TABLE_VERSION.to_string(),
            fields: vec![
                FieldEncoding {
                    field: fields::GENDER.to_string(),
                    codes: Gender::ALL
                        .iter()
                        .map(|v| (v.label().to_string(), v.code()))
                        .collect(),
                },
                FieldEncoding {
                    field: fields::PHONE_SERVICE.to_string(),
                    codes: PhoneService::ALL
                        .iter()
                        .map(|v| (v.label().to_string(), v.code()))
                        .collect(),
                },
                FieldEncoding {
                    field: fields::INTERNET_SERVICE.to_string(),
                    codes: InternetService::ALL
                        .iter()
                        .map(|v| (v.label().to_string(), v.code()))
                        .collect(),
                },
                FieldEncoding {
                    field: fields::CONTRACT.to_string(),
                    codes: Contract::ALL
                        .iter()
                        .map(|v| (v.label().to_string(), v.code()))
                        .collect(),
                },
            ],
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn fields(&self) -> &[FieldEncoding] {
        &self.fields
    }

    /// Look up the trained code for a raw label
    pub fn code(&self, field: &'static str, label: &str) -> Result<i64, EncodeError> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .and_then(|f| f.codes.get(label).copied())
            .ok_or_else(|| EncodeError::InvalidCategory {
                field,
                value: label.to_string(),
            })
    }

    /// Field→(label→code) view, for comparison against an artifact's
    /// declared encodings
    pub fn code_map(&self) -> BTreeMap<String, BTreeMap<String, i64>> {
        self.fields
            .iter()
            .map(|f| (f.field.clone(), f.codes.clone()))
            .collect()
    }
}

impl Default for EncodingTable {
    fn default() -> Self {
        Self::v1()
    }
}

/// Deterministic, side-effect-free encoder from raw records to the
/// fixed-order vector
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    table: EncodingTable,
}

impl FeatureEncoder {
    pub fn new(table: EncodingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &EncodingTable {
        &self.table
    }

    /// Encode a record into classifier input.
    ///
    /// Total over the valid domain; the only failure mode is a categorical
    /// label outside the trained set. Numeric fields pass through unchanged.
    pub fn encode(&self, record: &CustomerRecord) -> Result<FeatureVector, EncodeError> {
        let gender = self.table.code(fields::GENDER, &record.gender)?;
        let phone = self.table.code(fields::PHONE_SERVICE, &record.phone_service)?;
        let internet = self
            .table
            .code(fields::INTERNET_SERVICE, &record.internet_service)?;
        let contract = self.table.code(fields::CONTRACT, &record.contract)?;

        let values = [
            gender as f64,
            record.senior_citizen as u8 as f64,
            f64::from(record.tenure_months),
            phone as f64,
            internet as f64,
            contract as f64,
            record.monthly_charges,
            record.total_charges,
        ];

        debug!(?values, "encoded customer record");
        Ok(FeatureVector { values })
    }
}

impl Default for FeatureEncoder {
    fn default() -> Self {
        Self::new(EncodingTable::v1())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_record() -> CustomerRecord {
        CustomerRecord::new(
            Gender::Male,
            false,
            12,
            PhoneService::Yes,
            InternetService::Dsl,
            Contract::MonthToMonth,
            70.0,
            2000.0,
        )
    }

    #[test]
    fn encodes_in_fixed_trained_order() {
        let encoder = FeatureEncoder::default();
        let vector = encoder.encode(&sample_record()).unwrap();
        assert_eq!(vector.values, [1.0, 0.0, 12.0, 1.0, 1.0, 0.0, 70.0, 2000.0]);
    }

    #[test]
    fn rejects_out_of_domain_internet_service() {
        let encoder = FeatureEncoder::default();
        let mut record = sample_record();
        record.internet_service = "Cable".to_string();

        let err = encoder.encode(&record).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidCategory {
                field: fields::INTERNET_SERVICE,
                value: "Cable".to_string(),
            }
        );
    }

    #[test]
    fn rejects_out_of_domain_labels_per_field() {
        let encoder = FeatureEncoder::default();

        let mut record = sample_record();
        record.gender = "Other".to_string();
        assert!(encoder.encode(&record).is_err());

        let mut record = sample_record();
        record.phone_service = "Maybe".to_string();
        assert!(encoder.encode(&record).is_err());

        let mut record = sample_record();
        record.contract = "Weekly".to_string();
        assert!(encoder.encode(&record).is_err());
    }

    #[test]
    fn table_lookup_matches_every_trained_code() {
        let table = EncodingTable::v1();
        assert_eq!(table.code(fields::GENDER, "Male").unwrap(), 1);
        assert_eq!(table.code(fields::GENDER, "Female").unwrap(), 0);
        assert_eq!(table.code(fields::PHONE_SERVICE, "Yes").unwrap(), 1);
        assert_eq!(table.code(fields::PHONE_SERVICE, "No").unwrap(), 0);
        assert_eq!(table.code(fields::INTERNET_SERVICE, "No").unwrap(), 0);
        assert_eq!(table.code(fields::INTERNET_SERVICE, "DSL").unwrap(), 1);
        assert_eq!(
            table.code(fields::INTERNET_SERVICE, "Fiber optic").unwrap(),
            2
        );
        assert_eq!(table.code(fields::CONTRACT, "Month-to-month").unwrap(), 0);
        assert_eq!(table.code(fields::CONTRACT, "One year").unwrap(), 1);
        assert_eq!(table.code(fields::CONTRACT, "Two year").unwrap(), 2);
    }

    #[test]
    fn code_map_covers_the_four_categorical_fields() {
        let map = EncodingTable::v1().code_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map[fields::INTERNET_SERVICE].len(), 3);
        assert_eq!(map[fields::CONTRACT].len(), 3);
    }

    proptest! {
        #[test]
        fn encoding_is_pure_and_fixed_width(
            gender_idx in 0usize..2,
            phone_idx in 0usize..2,
            internet_idx in 0usize..3,
            contract_idx in 0usize..3,
            senior in any::<bool>(),
            tenure in 0u32..=120,
            monthly in 0.0f64..10_000.0,
            total in 0.0f64..1_000_000.0,
        ) {
            let record = CustomerRecord::new(
                Gender::ALL[gender_idx],
                senior,
                tenure,
                PhoneService::ALL[phone_idx],
                InternetService::ALL[internet_idx],
                Contract::ALL[contract_idx],
                monthly,
                total,
            );

            let encoder = FeatureEncoder::default();
            let first = encoder.encode(&record).unwrap();
            let second = encoder.encode(&record).unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.values.len(), FEATURE_DIMENSION);
            prop_assert_eq!(first.values[2], f64::from(tenure));
            prop_assert_eq!(first.values[6], monthly);
            prop_assert_eq!(first.values[7], total);
        }
    }
}
