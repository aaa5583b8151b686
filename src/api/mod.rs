//! Heartview HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page
//! - `GET /api/v1/summary` - Summary card values
//! - `GET /api/v1/features` - Selectable features and gender filters
//! - `GET /api/v1/charts` - Line, bar, pie and box figures for a selection
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health/ready` - Readiness check
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use heartview::api::{serve, ApiConfig, AppState};
//! use heartview::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load("heart.csv")?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/summary", get(routes::dashboard::summary))
        .route("/features", get(routes::dashboard::features))
        .route("/charts", get(routes::charts::get_charts));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Unknown routes get the same JSON error body as handler failures
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Heartview dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Heartview shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::sample_dataset;
    use crate::dataset::Dataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(sample_dataset()), ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_index_page_drops_stale_chart_replies() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(page.contains("const seq = ++requestSeq;"));
        assert_eq!(page.matches("if (seq !== requestSeq) return;").count(), 2);
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get_json(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["records"], 6);
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, body) = get_json(create_test_app(), "/api/v1/summary").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_records"], 6);
        assert_eq!(body["average_age"], "44.5");
        assert_eq!(body["heart_disease_cases"], 3);
    }

    #[tokio::test]
    async fn test_charts_defaults() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feature"], "Age");
        assert_eq!(body["gender"], "all");
        assert_eq!(body["row_count"], 6);
        for chart in ["line", "bar", "pie", "box"] {
            assert!(body["figures"][chart]["data"].is_array(), "missing {}", chart);
        }
    }

    #[tokio::test]
    async fn test_charts_filtered() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/charts?feature=Cholesterol&gender=F").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["row_count"], 2);
        assert_eq!(
            body["figures"]["line"]["layout"]["yaxis"]["title"]["text"],
            "Cholesterol"
        );
    }

    #[tokio::test]
    async fn test_charts_empty_view() {
        let dataset = Dataset::from_records(
            sample_dataset()
                .records()
                .iter()
                .filter(|r| r.sex == crate::dataset::Sex::Female)
                .cloned()
                .collect(),
        );
        let app = build_router(AppState::new(Arc::new(dataset), ApiConfig::default()));

        let (status, body) = get_json(app, "/api/v1/charts?feature=MaxHR&gender=M").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["row_count"], 0);
        assert_eq!(body["figures"]["pie"]["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_charts_invalid_feature() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts?feature=Sex").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let (status, body) = get_json(create_test_app(), "/api/v1/metrics").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/api/v1/metrics"));
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_charts_invalid_gender() {
        let (status, _) = get_json(create_test_app(), "/api/v1/charts?gender=X").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
