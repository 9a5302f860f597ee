//! Reference dataset reader.
//!
//! Expects a CSV with a header row containing at least `Country`, `Year`,
//! `Life expectancy`, `Alcohol` and `Schooling`. Header names are matched
//! after trimming, so the source file's `"Life expectancy "` works as-is.

use std::io::Read;
use std::path::Path;

use liferisk_core::errors::BaselineError;
use serde::Serialize;

pub const COUNTRY_COLUMN: &str = "Country";
pub const YEAR_COLUMN: &str = "Year";
pub const LIFE_EXPECTANCY_COLUMN: &str = "Life expectancy";
pub const ALCOHOL_COLUMN: &str = "Alcohol";
pub const SCHOOLING_COLUMN: &str = "Schooling";

const REQUIRED_COLUMNS: [&str; 5] = [
    COUNTRY_COLUMN,
    YEAR_COLUMN,
    LIFE_EXPECTANCY_COLUMN,
    ALCOHOL_COLUMN,
    SCHOOLING_COLUMN,
];

/// One complete dataset row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    pub country: String,
    pub year: i32,
    pub life_expectancy: f64,
    pub alcohol: f64,
    pub schooling: f64,
}

/// Rows kept after dropping incomplete ones.
#[derive(Debug, Clone, Default)]
pub struct DatasetLoad {
    pub rows: Vec<DatasetRow>,
    /// Rows read, including dropped ones.
    pub rows_read: usize,
    /// Rows with an empty or unparsable required field.
    pub rows_dropped: usize,
}

/// Read the dataset at `path`.
pub fn load_path(path: &Path) -> Result<DatasetLoad, BaselineError> {
    let file = std::fs::File::open(path).map_err(|e| BaselineError::DatasetUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_reader(file)
}

/// Read the dataset from any reader.
pub fn load_reader<R: Read>(reader: R) -> Result<DatasetLoad, BaselineError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| BaselineError::DatasetUnreadable {
            path: "<reader>".to_string(),
            reason: e.to_string(),
        })?
        .clone();

    let mut indices = [0usize; 5];
    for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| BaselineError::MissingColumn {
                column: column.to_string(),
            })?;
    }
    let [country_idx, year_idx, life_idx, alcohol_idx, schooling_idx] = indices;

    let mut load = DatasetLoad::default();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| BaselineError::MalformedRecord {
            line: e.position().map(|p| p.line()).unwrap_or(i as u64 + 2),
            reason: e.to_string(),
        })?;
        load.rows_read += 1;

        let field = |idx: usize| record.get(idx).map(str::trim).filter(|s| !s.is_empty());
        let row = (|| {
            Some(DatasetRow {
                country: field(country_idx)?.to_string(),
                year: parse_year(field(year_idx)?)?,
                life_expectancy: parse_number(field(life_idx)?)?,
                alcohol: parse_number(field(alcohol_idx)?)?,
                schooling: parse_number(field(schooling_idx)?)?,
            })
        })();

        match row {
            Some(row) => load.rows.push(row),
            None => load.rows_dropped += 1,
        }
    }

    Ok(load)
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

// Some exports write years as floats ("2015.0").
fn parse_year(raw: &str) -> Option<i32> {
    raw.parse::<i32>()
        .ok()
        .or_else(|| parse_number(raw).filter(|y| y.fract() == 0.0).map(|y| y as i32))
}
