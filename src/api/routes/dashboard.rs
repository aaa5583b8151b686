//! Dashboard Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/summary - Summary card values
//! - GET /api/v1/features - Dropdown and radio options

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::dto::{FeaturesResponse, OptionDto, SummaryResponse};
use crate::api::state::AppState;
use crate::charts::{Feature, GenderFilter};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/summary
///
/// Values computed once at startup; every call returns the same numbers.
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let summary = &state.summary;

    Json(SummaryResponse {
        total_records: summary.total_records,
        average_age: summary.mean_age_display(),
        average_age_value: summary.mean_age,
        heart_disease_cases: summary.heart_disease_cases,
    })
}

/// GET /api/v1/features
pub async fn features() -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        features: Feature::all()
            .iter()
            .map(|f| OptionDto {
                label: f.column().to_string(),
                value: f.column().to_string(),
            })
            .collect(),
        genders: GenderFilter::all()
            .iter()
            .map(|g| OptionDto {
                label: g.label().to_string(),
                value: g.value().to_string(),
            })
            .collect(),
        default_feature: Feature::default().column().to_string(),
        default_gender: GenderFilter::default().value().to_string(),
    })
}
