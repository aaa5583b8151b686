//! Heart-disease dataset
//!
//! Loads the CSV source once, parses categorical columns and replaces the
//! invalid zero readings in `Cholesterol` and `RestingBP` with the column
//! median. The resulting [`Dataset`] is immutable and meant to be shared
//! behind an `Arc` for the lifetime of the process.
//!
//! ## Example
//!
//! ```rust,no_run
//! use heartview::dataset::{Dataset, Summary};
//!
//! let dataset = Dataset::load("heart.csv")?;
//! let summary = Summary::compute(&dataset);
//! println!("{} records, mean age {}", summary.total_records, summary.mean_age_display());
//! # Ok::<(), heartview::dataset::LoadError>(())
//! ```

pub mod error;
pub mod loader;
pub mod stats;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use loader::REQUIRED_COLUMNS;
pub use stats::Summary;
pub use types::{ChestPainType, ExerciseAngina, Record, RestingEcg, Sex, StSlope};

use serde::Serialize;

/// Outcome of zero-value imputation for one column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnImputation {
    /// Median of the original column, zeros included
    pub median: Option<f64>,
    /// Number of zero values that were replaced
    pub replaced: usize,
}

/// Imputation performed while preparing the dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImputationReport {
    pub cholesterol: ColumnImputation,
    pub resting_bp: ColumnImputation,
}

/// The cleaned, immutable dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    imputation: ImputationReport,
}

impl Dataset {
    /// Build a dataset from raw records, imputing invalid zeros
    ///
    /// Both medians are taken over the original values before any
    /// replacement happens.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        let cholesterol: Vec<f64> = records.iter().map(|r| r.cholesterol).collect();
        let resting_bp: Vec<f64> = records.iter().map(|r| r.resting_bp).collect();
        let cholesterol_median = stats::median(&cholesterol);
        let resting_bp_median = stats::median(&resting_bp);

        let mut report = ImputationReport {
            cholesterol: ColumnImputation {
                median: cholesterol_median,
                replaced: 0,
            },
            resting_bp: ColumnImputation {
                median: resting_bp_median,
                replaced: 0,
            },
        };

        for record in &mut records {
            if let Some(median) = cholesterol_median {
                if record.cholesterol == 0.0 {
                    record.cholesterol = median;
                    report.cholesterol.replaced += 1;
                }
            }
            if let Some(median) = resting_bp_median {
                if record.resting_bp == 0.0 {
                    record.resting_bp = median;
                    report.resting_bp.replaced += 1;
                }
            }
        }

        Self {
            records,
            imputation: report,
        }
    }

    /// All records, in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// What the zero-value imputation did
    pub fn imputation(&self) -> &ImputationReport {
        &self.imputation
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Dataset;

    /// Six rows; row 5 has Cholesterol 0 and row 6 has RestingBP 0
    pub const SAMPLE_CSV: &str = "\
Age,Sex,ChestPainType,RestingBP,Cholesterol,FastingBS,RestingECG,MaxHR,ExerciseAngina,Oldpeak,ST_Slope,HeartDisease
40,M,ATA,140,289,0,Normal,172,N,0,Up,0
49,F,NAP,160,180,0,Normal,156,N,1,Flat,1
37,M,ATA,130,283,0,ST,98,N,0,Up,0
48,F,ASY,138,214,0,Normal,108,Y,1.5,Flat,1
54,M,NAP,150,0,0,Normal,122,N,0,Up,0
39,M,NAP,0,339,0,Normal,170,N,0,Up,1
";

    pub fn sample_dataset() -> Dataset {
        Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("sample CSV is valid")
    }
}
