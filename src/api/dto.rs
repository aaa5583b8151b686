//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::charts::Figures;

// ============================================
// SUMMARY DTOs
// ============================================

/// Summary card values
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Number of records in the dataset
    pub total_records: usize,
    /// Mean age rendered with one decimal place
    pub average_age: String,
    /// Raw mean age, null for an empty dataset
    pub average_age_value: Option<f64>,
    /// Number of records with HeartDisease == 1
    pub heart_disease_cases: usize,
}

// ============================================
// FEATURE DTOs
// ============================================

/// Dropdown/radio option
#[derive(Debug, Serialize)]
pub struct OptionDto {
    pub label: String,
    pub value: String,
}

/// Selectable features and gender filters
#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub features: Vec<OptionDto>,
    pub genders: Vec<OptionDto>,
    pub default_feature: String,
    pub default_gender: String,
}

// ============================================
// CHART DTOs
// ============================================

/// Chart query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Feature column name (default: Age)
    #[serde(default)]
    pub feature: Option<String>,
    /// Gender filter: all, M, F (default: all)
    #[serde(default)]
    pub gender: Option<String>,
}

/// All four figures for one selection
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub feature: String,
    pub gender: String,
    /// Number of records in the filtered view
    pub row_count: usize,
    pub figures: Figures,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of records loaded
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
