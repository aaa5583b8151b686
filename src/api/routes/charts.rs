//! Chart Routes
//!
//! - GET /api/v1/charts?feature=Age&gender=all - All four figures

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ChartParams, ChartsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{self, Feature, GenderFilter};

/// GET /api/v1/charts
///
/// Recompute the line, bar, pie and box charts for a selection.
/// Missing parameters fall back to `Age` and `all`.
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<ChartsResponse>> {
    let feature: Feature = match params.feature.as_deref() {
        Some(name) => name.parse()?,
        None => Feature::default(),
    };
    let gender: GenderFilter = match params.gender.as_deref() {
        Some(value) => value.parse()?,
        None => GenderFilter::default(),
    };

    let chart_set = charts::update(&state.dataset, feature, gender);

    Ok(Json(ChartsResponse {
        feature: feature.column().to_string(),
        gender: gender.value().to_string(),
        row_count: chart_set.row_count,
        figures: chart_set.to_figures(),
    }))
}
