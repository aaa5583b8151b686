//! Descriptive statistics
//!
//! Median/quantile helpers shared by imputation and box plots, and the
//! summary card values shown at the top of the dashboard.

use super::Dataset;
use serde::Serialize;

/// Median of a slice (mean of the two middle values for an even count)
///
/// Returns `None` for an empty slice. NaN values are ignored.
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Quantile with linear interpolation between closest ranks
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    Some(quantile_sorted(&sorted, q))
}

/// Quantile of an already sorted, non-empty slice
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Arithmetic mean ignoring NaN, `None` when nothing is left
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Summary card values computed once from the full dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of records
    pub total_records: usize,
    /// Mean patient age, `None` when the dataset is empty
    pub mean_age: Option<f64>,
    /// Number of records with HeartDisease == 1
    pub heart_disease_cases: usize,
}

impl Summary {
    /// Compute all card values
    pub fn compute(dataset: &Dataset) -> Self {
        let records = dataset.records();
        Self {
            total_records: records.len(),
            mean_age: mean(records.iter().map(|r| r.age)),
            heart_disease_cases: records.iter().filter(|r| r.has_heart_disease()).count(),
        }
    }

    /// Mean age rendered with one decimal place
    pub fn mean_age_display(&self) -> String {
        match self.mean_age {
            Some(age) => format!("{:.1}", age),
            None => "n/a".to_string(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "records={}, mean_age={}, heart_disease_cases={}",
            self.total_records,
            self.mean_age_display(),
            self.heart_disease_cases
        )
    }
}
