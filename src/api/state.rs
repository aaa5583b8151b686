//! Application State
//!
//! Shared state accessible by all API handlers.
//! Built once at startup and wrapped in Arc; nothing in it is mutated afterwards.

use crate::dataset::{Dataset, Summary};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Cleaned dataset, read-only after startup
    pub dataset: Arc<Dataset>,
    /// Summary card values computed from the full dataset
    pub summary: Arc<Summary>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState, computing the summary cards once
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        let summary = Summary::compute(&dataset);
        tracing::info!("Summary: {}", summary);

        Self {
            dataset,
            summary: Arc::new(summary),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
