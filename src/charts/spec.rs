//! Chart specifications
//!
//! Typed, UI-independent descriptions of the four dashboard charts. Each spec
//! is built from a filtered view of the dataset and knows how many records it
//! represents.

use super::Feature;
use crate::dataset::stats::quantile_sorted;
use crate::dataset::{Record, Sex};
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================
// LINE
// ============================================

/// One point of the line chart, annotated with its hover fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub age: f64,
    pub value: f64,
    pub heart_disease: u8,
}

/// Points sharing one HeartDisease value, ordered by age
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub heart_disease: u8,
    pub points: Vec<LinePoint>,
}

/// Age on x, selected feature on y, one series per HeartDisease value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSpec {
    pub feature: Feature,
    pub series: Vec<LineSeries>,
}

impl LineSpec {
    pub fn build(view: &[&Record], feature: Feature) -> Self {
        let series = group_by_heart_disease(view)
            .into_iter()
            .map(|(heart_disease, records)| {
                let mut points: Vec<LinePoint> = records
                    .iter()
                    .map(|r| LinePoint {
                        age: r.age,
                        value: feature.value(r),
                        heart_disease,
                    })
                    .collect();
                points.sort_by(|a, b| a.age.total_cmp(&b.age));
                LineSeries {
                    heart_disease,
                    points,
                }
            })
            .collect();

        Self { feature, series }
    }

    pub fn row_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ============================================
// BAR
// ============================================

/// One stacked bar segment (one record)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarSegment {
    pub heart_disease: u8,
    pub value: f64,
}

/// Stacked height of one series at one x position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarTotal {
    pub heart_disease: u8,
    pub total: f64,
}

/// Segments for one sex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub sex: Sex,
    pub segments: Vec<BarSegment>,
    pub totals: Vec<BarTotal>,
}

/// HeartDisease on x, selected feature on y, one series per sex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub feature: Feature,
    pub series: Vec<BarSeries>,
}

impl BarSpec {
    pub fn build(view: &[&Record], feature: Feature) -> Self {
        let mut by_sex: BTreeMap<Sex, Vec<&Record>> = BTreeMap::new();
        for &record in view {
            by_sex.entry(record.sex).or_default().push(record);
        }

        let series = by_sex
            .into_iter()
            .map(|(sex, records)| {
                let segments: Vec<BarSegment> = records
                    .iter()
                    .map(|r| BarSegment {
                        heart_disease: r.heart_disease,
                        value: feature.value(r),
                    })
                    .collect();

                let mut totals: BTreeMap<u8, f64> = BTreeMap::new();
                for segment in &segments {
                    *totals.entry(segment.heart_disease).or_insert(0.0) += segment.value;
                }

                BarSeries {
                    sex,
                    segments,
                    totals: totals
                        .into_iter()
                        .map(|(heart_disease, total)| BarTotal {
                            heart_disease,
                            total,
                        })
                        .collect(),
                }
            })
            .collect();

        Self { feature, series }
    }

    pub fn row_count(&self) -> usize {
        self.series.iter().map(|s| s.segments.len()).sum()
    }
}

// ============================================
// PIE
// ============================================

/// One pie slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSlice {
    pub heart_disease: u8,
    pub count: usize,
    /// Fraction of the view, 0.0 to 1.0
    pub share: f64,
}

/// Distribution of HeartDisease values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSpec {
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    pub fn build(view: &[&Record]) -> Self {
        let total = view.len();
        let slices = group_by_heart_disease(view)
            .into_iter()
            .map(|(heart_disease, records)| PieSlice {
                heart_disease,
                count: records.len(),
                share: records.len() as f64 / total as f64,
            })
            .collect();

        Self { slices }
    }

    pub fn row_count(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

// ============================================
// BOX
// ============================================

/// Five-number summary with 1.5 IQR whiskers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within q1 - 1.5 IQR
    pub lower_whisker: f64,
    /// Largest value within q3 + 1.5 IQR
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Compute from a non-empty slice
    fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);

        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= lower_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= upper_fence)
            .unwrap_or(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < lower_fence || v > upper_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// Feature distribution for one HeartDisease value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub heart_disease: u8,
    pub values: Vec<f64>,
    pub stats: BoxStats,
}

/// One box per HeartDisease value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSpec {
    pub feature: Feature,
    pub boxes: Vec<BoxGroup>,
}

impl BoxSpec {
    pub fn build(view: &[&Record], feature: Feature) -> Self {
        let boxes = group_by_heart_disease(view)
            .into_iter()
            .filter_map(|(heart_disease, records)| {
                let values: Vec<f64> = records.iter().map(|r| feature.value(r)).collect();
                let stats = BoxStats::compute(&values)?;
                Some(BoxGroup {
                    heart_disease,
                    values,
                    stats,
                })
            })
            .collect();

        Self { feature, boxes }
    }

    pub fn row_count(&self) -> usize {
        self.boxes.iter().map(|b| b.values.len()).sum()
    }
}

/// Group records by HeartDisease value, ascending, keeping source order
fn group_by_heart_disease<'a>(view: &[&'a Record]) -> BTreeMap<u8, Vec<&'a Record>> {
    let mut groups: BTreeMap<u8, Vec<&'a Record>> = BTreeMap::new();
    for &record in view {
        groups.entry(record.heart_disease).or_default().push(record);
    }
    groups
}
