//! # Heartview
//!
//! Heart Disease Data Analysis - an interactive dashboard over a static
//! clinical dataset.
//!
//! ## Features
//!
//! - **Data preparation**: CSV loading with categorical columns and median
//!   imputation of invalid zero readings
//! - **Summary cards**: record count, mean age, heart-disease cases
//! - **Reactive charts**: line, bar, pie and box plot recomputed per
//!   feature/gender selection
//! - **Dashboard**: single-page UI served over HTTP, rendered with Plotly.js
//!
//! ## Modules
//!
//! - [`dataset`]: Loading, cleaning and summary statistics
//! - [`charts`]: Chart updater and Plotly figure rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heartview::charts::{update, Feature, GenderFilter};
//! use heartview::dataset::{Dataset, Summary};
//!
//! let dataset = Dataset::load("heart.csv")?;
//! let summary = Summary::compute(&dataset);
//! println!("Average age: {}", summary.mean_age_display());
//!
//! let charts = update(&dataset, Feature::MaxHr, GenderFilter::Female);
//! println!("{} female records charted", charts.row_count);
//! # Ok::<(), heartview::dataset::LoadError>(())
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod logging;

// Re-export top-level types for convenience
pub use dataset::{Dataset, LoadError, LoadResult, Record, Sex, Summary};

pub use charts::{update, ChartSet, Feature, Figures, GenderFilter, SelectionError};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig};
