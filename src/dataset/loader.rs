//! CSV loading
//!
//! Parses the heart-disease CSV export into [`Record`]s. The header row must
//! contain every column in [`REQUIRED_COLUMNS`]; extra columns are ignored.

use super::{Dataset, LoadError, LoadResult, Record};
use std::io::Read;
use std::path::Path;

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Age",
    "Sex",
    "ChestPainType",
    "RestingBP",
    "Cholesterol",
    "RestingECG",
    "MaxHR",
    "ExerciseAngina",
    "Oldpeak",
    "ST_Slope",
    "HeartDisease",
];

impl Dataset {
    /// Load and prepare the dataset from a CSV file
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Load and prepare the dataset from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let records = read_records(reader)?;
        let dataset = Self::from_records(records);

        let report = dataset.imputation();
        tracing::debug!(
            cholesterol_median = ?report.cholesterol.median,
            cholesterol_replaced = report.cholesterol.replaced,
            resting_bp_median = ?report.resting_bp.median,
            resting_bp_replaced = report.resting_bp.replaced,
            "Imputed zero values"
        );

        Ok(dataset)
    }
}

/// Parse raw records without any cleaning
pub fn read_records<R: Read>(reader: R) -> LoadResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    check_required_columns(&headers)?;

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result.map_err(|e| {
            let line = match e.kind() {
                csv::ErrorKind::UnequalLengths { pos, .. } => pos.as_ref().map(|p| p.line()),
                _ => None,
            };
            match line {
                Some(line) => LoadError::Malformed {
                    line,
                    message: e.to_string(),
                },
                None => LoadError::Csv(e),
            }
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record: Record = row
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::Malformed {
                line,
                message: deserialize_message(&e),
            })?;

        if record.heart_disease > 1 {
            return Err(LoadError::Malformed {
                line,
                message: format!("HeartDisease must be 0 or 1, got {}", record.heart_disease),
            });
        }

        if let Some(column) = first_non_finite(&record) {
            return Err(LoadError::Malformed {
                line,
                message: format!("{} must be a finite number", column),
            });
        }

        records.push(record);
    }

    Ok(records)
}

/// Name of the first numeric column holding NaN or an infinity
fn first_non_finite(record: &Record) -> Option<&'static str> {
    [
        ("Age", record.age),
        ("RestingBP", record.resting_bp),
        ("Cholesterol", record.cholesterol),
        ("MaxHR", record.max_hr),
        ("Oldpeak", record.oldpeak),
    ]
    .into_iter()
    .find(|(_, value)| !value.is_finite())
    .map(|(column, _)| column)
}

/// Verify the header row carries every required column
fn check_required_columns(headers: &csv::StringRecord) -> LoadResult<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns(missing))
    }
}

fn deserialize_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}
