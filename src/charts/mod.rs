//! Chart Updater
//!
//! Turns a (feature, gender filter) selection into the four dashboard
//! charts. [`update`] is a pure function over the immutable [`Dataset`]:
//! it keeps no state between calls and always returns all four specs.
//!
//! ```rust
//! use heartview::charts::{update, Feature, GenderFilter};
//! use heartview::dataset::Dataset;
//!
//! let dataset = Dataset::from_records(Vec::new());
//! let charts = update(&dataset, Feature::Cholesterol, GenderFilter::Female);
//! assert_eq!(charts.row_count, 0);
//! ```

pub mod plotly;
pub mod spec;

pub use plotly::Figures;
pub use spec::{BarSpec, BoxSpec, BoxStats, LineSpec, PieSpec};

use crate::dataset::{Dataset, Record, Sex};
use serde::{Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Numeric column selectable as the y-axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feature {
    #[default]
    Age,
    RestingBp,
    Cholesterol,
    MaxHr,
    Oldpeak,
}

impl Feature {
    /// Get all features in dropdown order
    pub fn all() -> &'static [Feature] {
        &[
            Feature::Age,
            Feature::RestingBp,
            Feature::Cholesterol,
            Feature::MaxHr,
            Feature::Oldpeak,
        ]
    }

    /// Dataset column name
    pub fn column(&self) -> &'static str {
        match self {
            Feature::Age => "Age",
            Feature::RestingBp => "RestingBP",
            Feature::Cholesterol => "Cholesterol",
            Feature::MaxHr => "MaxHR",
            Feature::Oldpeak => "Oldpeak",
        }
    }

    /// Read this feature from a record
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Feature::Age => record.age,
            Feature::RestingBp => record.resting_bp,
            Feature::Cholesterol => record.cholesterol,
            Feature::MaxHr => record.max_hr,
            Feature::Oldpeak => record.oldpeak,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl FromStr for Feature {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::all()
            .iter()
            .copied()
            .find(|f| f.column() == s)
            .ok_or_else(|| SelectionError::UnknownFeature(s.to_string()))
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

/// Gender radio selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    /// Get all options in radio order
    pub fn all() -> &'static [GenderFilter] {
        &[GenderFilter::All, GenderFilter::Male, GenderFilter::Female]
    }

    /// Wire value ("all", "M" or "F")
    pub fn value(&self) -> &'static str {
        match self {
            GenderFilter::All => "all",
            GenderFilter::Male => "M",
            GenderFilter::Female => "F",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            GenderFilter::All => "All",
            GenderFilter::Male => "Male",
            GenderFilter::Female => "Female",
        }
    }

    /// Check whether a record's sex passes the filter
    pub fn matches(&self, sex: Sex) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => sex == Sex::Male,
            GenderFilter::Female => sex == Sex::Female,
        }
    }
}

impl std::fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for GenderFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenderFilter::all()
            .iter()
            .copied()
            .find(|g| g.value() == s)
            .ok_or_else(|| SelectionError::UnknownGender(s.to_string()))
    }
}

impl Serialize for GenderFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// Invalid user selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown feature '{0}' (expected one of Age, RestingBP, Cholesterol, MaxHR, Oldpeak)")]
    UnknownFeature(String),

    #[error("Unknown gender filter '{0}' (expected one of all, M, F)")]
    UnknownGender(String),
}

/// The four charts for one selection, always produced together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub feature: Feature,
    pub gender: GenderFilter,
    /// Number of records in the filtered view
    pub row_count: usize,
    pub line: LineSpec,
    pub bar: BarSpec,
    pub pie: PieSpec,
    #[serde(rename = "box")]
    pub boxplot: BoxSpec,
}

/// Filter the dataset and build all four charts
pub fn update(dataset: &Dataset, feature: Feature, gender: GenderFilter) -> ChartSet {
    let view: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|r| gender.matches(r.sex))
        .collect();

    tracing::debug!(
        feature = %feature,
        gender = %gender,
        rows = view.len(),
        "Updating charts"
    );

    ChartSet {
        feature,
        gender,
        row_count: view.len(),
        line: LineSpec::build(&view, feature),
        bar: BarSpec::build(&view, feature),
        pie: PieSpec::build(&view),
        boxplot: BoxSpec::build(&view, feature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::sample_dataset;

    fn assert_row_counts(charts: &ChartSet, expected: usize) {
        assert_eq!(charts.row_count, expected);
        assert_eq!(charts.line.row_count(), expected);
        assert_eq!(charts.bar.row_count(), expected);
        assert_eq!(charts.pie.row_count(), expected);
        assert_eq!(charts.boxplot.row_count(), expected);
    }

    #[test]
    fn test_update_all() {
        let dataset = sample_dataset();
        let charts = update(&dataset, Feature::Age, GenderFilter::All);

        assert_row_counts(&charts, dataset.len());
        assert!(!charts.line.series.is_empty());
        assert!(!charts.bar.series.is_empty());
        assert!(!charts.pie.slices.is_empty());
        assert!(!charts.boxplot.boxes.is_empty());
    }

    #[test]
    fn test_update_female_only() {
        let dataset = sample_dataset();
        let charts = update(&dataset, Feature::Age, GenderFilter::Female);

        let females = dataset.records().iter().filter(|r| r.sex == Sex::Female).count();
        assert_row_counts(&charts, females);
        assert_eq!(charts.bar.series.len(), 1);
        assert_eq!(charts.bar.series[0].sex, Sex::Female);
    }

    #[test]
    fn test_update_uses_selected_feature() {
        let dataset = sample_dataset();
        let charts = update(&dataset, Feature::Cholesterol, GenderFilter::Male);

        // Imputed value shows up for the 54-year-old male
        let point = charts.line.series[0]
            .points
            .iter()
            .find(|p| p.age == 54.0)
            .unwrap();
        assert_eq!(point.value, 248.5);
    }

    #[test]
    fn test_update_with_no_matching_records() {
        let dataset = Dataset::from_records(
            sample_dataset()
                .records()
                .iter()
                .filter(|r| r.sex == Sex::Female)
                .cloned()
                .collect(),
        );

        for feature in Feature::all() {
            let charts = update(&dataset, *feature, GenderFilter::Male);
            assert_row_counts(&charts, 0);
            assert!(charts.line.series.is_empty());
            assert!(charts.bar.series.is_empty());
            assert!(charts.pie.slices.is_empty());
            assert!(charts.boxplot.boxes.is_empty());
        }
    }

    #[test]
    fn test_update_is_repeatable() {
        let dataset = sample_dataset();
        let first = update(&dataset, Feature::MaxHr, GenderFilter::All);
        let second = update(&dataset, Feature::MaxHr, GenderFilter::All);
        assert_eq!(first, second);
    }

    #[test]
    fn test_feature_parsing() {
        assert_eq!("RestingBP".parse::<Feature>(), Ok(Feature::RestingBp));
        assert_eq!("Oldpeak".parse::<Feature>(), Ok(Feature::Oldpeak));
        assert_eq!(
            "Sex".parse::<Feature>(),
            Err(SelectionError::UnknownFeature("Sex".to_string()))
        );
        assert_eq!(Feature::MaxHr.to_string(), "MaxHR");
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("all".parse::<GenderFilter>(), Ok(GenderFilter::All));
        assert_eq!("M".parse::<GenderFilter>(), Ok(GenderFilter::Male));
        assert_eq!("F".parse::<GenderFilter>(), Ok(GenderFilter::Female));
        assert!("female".parse::<GenderFilter>().is_err());
    }

    #[test]
    fn test_chart_set_serialization() {
        let dataset = sample_dataset();
        let charts = update(&dataset, Feature::RestingBp, GenderFilter::All);
        let json = serde_json::to_value(&charts).unwrap();

        assert_eq!(json["feature"], "RestingBP");
        assert_eq!(json["gender"], "all");
        assert!(json["box"]["boxes"].is_array());
    }
}
