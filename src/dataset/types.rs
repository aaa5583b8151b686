//! Core data types for the heart-disease dataset
//!
//! This module defines the row type and its categorical attributes:
//! - `Record`: one patient observation
//! - `Sex`, `ChestPainType`, `RestingEcg`, `ExerciseAngina`, `StSlope`:
//!   categorical columns with a fixed category order

use serde::{Deserialize, Serialize};

/// One patient observation (one CSV row)
///
/// Numeric attributes are kept as `f64` because imputed medians can be
/// fractional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "ChestPainType")]
    pub chest_pain_type: ChestPainType,
    /// Resting blood pressure (mm Hg), 0 is not a valid reading
    #[serde(rename = "RestingBP")]
    pub resting_bp: f64,
    /// Serum cholesterol (mg/dl), 0 is not a valid reading
    #[serde(rename = "Cholesterol")]
    pub cholesterol: f64,
    /// Fasting blood sugar indicator, absent in some exports
    #[serde(rename = "FastingBS", default)]
    pub fasting_bs: Option<u8>,
    #[serde(rename = "RestingECG")]
    pub resting_ecg: RestingEcg,
    #[serde(rename = "MaxHR")]
    pub max_hr: f64,
    #[serde(rename = "ExerciseAngina")]
    pub exercise_angina: ExerciseAngina,
    #[serde(rename = "Oldpeak")]
    pub oldpeak: f64,
    #[serde(rename = "ST_Slope")]
    pub st_slope: StSlope,
    /// 1 when the patient has heart disease, 0 otherwise
    #[serde(rename = "HeartDisease")]
    pub heart_disease: u8,
}

impl Record {
    /// Whether this record is a heart-disease case
    pub fn has_heart_disease(&self) -> bool {
        self.heart_disease == 1
    }
}

/// Patient sex
///
/// Variant order is the category order (F before M) used for chart series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    /// Get all categories in category order
    pub fn all() -> &'static [Sex] {
        &[Sex::Female, Sex::Male]
    }

    /// Dataset code ("F" or "M")
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Chest pain type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChestPainType {
    /// Asymptomatic
    Asy,
    /// Atypical angina
    Ata,
    /// Non-anginal pain
    Nap,
    /// Typical angina
    Ta,
}

/// Resting electrocardiogram result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RestingEcg {
    #[serde(rename = "LVH")]
    Lvh,
    Normal,
    #[serde(rename = "ST")]
    St,
}

/// Exercise-induced angina
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExerciseAngina {
    #[serde(rename = "N")]
    No,
    #[serde(rename = "Y")]
    Yes,
}

/// Slope of the peak exercise ST segment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StSlope {
    Down,
    Flat,
    Up,
}
