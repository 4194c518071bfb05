//! Raw Customer Record

use crate::domain::{Contract, Gender, InternetService, PhoneService};
use serde::{Deserialize, Serialize};

/// Declared UI input range for tenure, in months
pub const TENURE_RANGE: (u32, u32) = (0, 120);
/// Declared UI input range for monthly charges
pub const MONTHLY_CHARGES_RANGE: (f64, f64) = (0.0, 10_000_000.0);
/// Declared UI input range for total charges
pub const TOTAL_CHARGES_RANGE: (f64, f64) = (0.0, 9_000_000_000.0);

/// One customer's attributes, as collected by the UI.
///
/// Categorical fields carry the raw label strings; validation against the
/// trained label set happens in the encoder, so a typo or an out-of-domain
/// selection surfaces as `InvalidCategory` instead of a corrupted vector.
/// Numeric range enforcement is the UI's job (see the `*_RANGE` constants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub gender: String,
    pub senior_citizen: bool,
    pub tenure_months: u32,
    pub phone_service: String,
    pub internet_service: String,
    pub contract: String,
    pub monthly_charges: f64,
    pub total_charges: f64,
}

impl CustomerRecord {
    /// Build a record from typed domain values; cannot produce an invalid
    /// categorical label.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gender: Gender,
        senior_citizen: bool,
        tenure_months: u32,
        phone_service: PhoneService,
        internet_service: InternetService,
        contract: Contract,
        monthly_charges: f64,
        total_charges: f64,
    ) -> Self {
        Self {
            gender: gender.label().to_string(),
            senior_citizen,
            tenure_months,
            phone_service: phone_service.label().to_string(),
            internet_service: internet_service.label().to_string(),
            contract: contract.label().to_string(),
            monthly_charges,
            total_charges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_constructor_stores_dataset_labels() {
        let record = CustomerRecord::new(
            Gender::Female,
            true,
            24,
            PhoneService::No,
            InternetService::FiberOptic,
            Contract::TwoYear,
            99.5,
            2400.0,
        );

        assert_eq!(record.gender, "Female");
        assert_eq!(record.phone_service, "No");
        assert_eq!(record.internet_service, "Fiber optic");
        assert_eq!(record.contract, "Two year");
        assert!(record.senior_citizen);
    }

    #[test]
    fn deserializes_from_ui_json() {
        let json = r#"{
            "gender": "Male",
            "seniorCitizen": false,
            "tenureMonths": 12,
            "phoneService": "Yes",
            "internetService": "DSL",
            "contract": "Month-to-month",
            "monthlyCharges": 70.0,
            "totalCharges": 2000.0
        }"#;

        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tenure_months, 12);
        assert_eq!(record.contract, "Month-to-month");
    }
}
