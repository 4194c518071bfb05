//! Categorical Input Domains
//!
//! Each enum is the single source of truth for one categorical field: the
//! labels accepted from the UI/dataset and the integer codes the classifier
//! was trained on. The codes are arbitrary but fixed by the trained model.

use crate::EncodeError;
use serde::{Deserialize, Serialize};

/// Feature column names in the trained dataset's casing
pub mod fields {
    pub const GENDER: &str = "gender";
    pub const SENIOR_CITIZEN: &str = "SeniorCitizen";
    pub const TENURE: &str = "tenure";
    pub const PHONE_SERVICE: &str = "PhoneService";
    pub const INTERNET_SERVICE: &str = "InternetService";
    pub const CONTRACT: &str = "Contract";
    pub const MONTHLY_CHARGES: &str = "MonthlyCharges";
    pub const TOTAL_CHARGES: &str = "TotalCharges";
}

/// Customer gender as recorded in the source dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All valid values, in trained-table order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Raw label as it appears in the dataset
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Trained integer code
    pub fn code(&self) -> i64 {
        match self {
            Gender::Male => 1,
            Gender::Female => 0,
        }
    }

    /// Parse a raw label, rejecting anything outside the domain
    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == label)
            .ok_or_else(|| EncodeError::InvalidCategory {
                field: fields::GENDER,
                value: label.to_string(),
            })
    }
}

/// Whether the customer has phone service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneService {
    Yes,
    No,
}

impl PhoneService {
    pub const ALL: [PhoneService; 2] = [PhoneService::Yes, PhoneService::No];

    pub fn label(&self) -> &'static str {
        match self {
            PhoneService::Yes => "Yes",
            PhoneService::No => "No",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            PhoneService::Yes => 1,
            PhoneService::No => 0,
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == label)
            .ok_or_else(|| EncodeError::InvalidCategory {
                field: fields::PHONE_SERVICE,
                value: label.to_string(),
            })
    }
}

/// Internet service tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternetService {
    #[serde(rename = "No")]
    None,
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    FiberOptic,
}

impl InternetService {
    pub const ALL: [InternetService; 3] = [
        InternetService::None,
        InternetService::Dsl,
        InternetService::FiberOptic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InternetService::None => "No",
            InternetService::Dsl => "DSL",
            InternetService::FiberOptic => "Fiber optic",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            InternetService::None => 0,
            InternetService::Dsl => 1,
            InternetService::FiberOptic => 2,
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == label)
            .ok_or_else(|| EncodeError::InvalidCategory {
                field: fields::INTERNET_SERVICE,
                value: label.to_string(),
            })
    }
}

/// Contract term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl Contract {
    pub const ALL: [Contract; 3] = [
        Contract::MonthToMonth,
        Contract::OneYear,
        Contract::TwoYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Contract::MonthToMonth => "Month-to-month",
            Contract::OneYear => "One year",
            Contract::TwoYear => "Two year",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Contract::MonthToMonth => 0,
            Contract::OneYear => 1,
            Contract::TwoYear => 2,
        }
    }

    pub fn from_label(label: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == label)
            .ok_or_else(|| EncodeError::InvalidCategory {
                field: fields::CONTRACT,
                value: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trained_codes_match_the_model_table() {
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Female.code(), 0);
        assert_eq!(PhoneService::Yes.code(), 1);
        assert_eq!(PhoneService::No.code(), 0);
        assert_eq!(InternetService::None.code(), 0);
        assert_eq!(InternetService::Dsl.code(), 1);
        assert_eq!(InternetService::FiberOptic.code(), 2);
        assert_eq!(Contract::MonthToMonth.code(), 0);
        assert_eq!(Contract::OneYear.code(), 1);
        assert_eq!(Contract::TwoYear.code(), 2);
    }

    #[test]
    fn labels_round_trip_through_from_label() {
        for value in Gender::ALL {
            assert_eq!(Gender::from_label(value.label()).unwrap(), value);
        }
        for value in PhoneService::ALL {
            assert_eq!(PhoneService::from_label(value.label()).unwrap(), value);
        }
        for value in InternetService::ALL {
            assert_eq!(InternetService::from_label(value.label()).unwrap(), value);
        }
        for value in Contract::ALL {
            assert_eq!(Contract::from_label(value.label()).unwrap(), value);
        }
    }

    #[test]
    fn unknown_labels_are_rejected_with_field_context() {
        let err = InternetService::from_label("Cable").unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidCategory {
                field: fields::INTERNET_SERVICE,
                value: "Cable".to_string(),
            }
        );

        assert!(Gender::from_label("Other").is_err());
        assert!(Contract::from_label("Three year").is_err());
        // Labels are case-sensitive, matching the trained dataset exactly.
        assert!(PhoneService::from_label("yes").is_err());
    }
}
