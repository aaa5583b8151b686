//! Logging setup
//!
//! Installs the global tracing subscriber. `RUST_LOG` takes precedence over
//! the configured level.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter directive for a configured level
pub fn filter_directive(level: &str) -> String {
    format!("heartview={level},tower_http={level}")
}

/// Initialize tracing from the logging config
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
