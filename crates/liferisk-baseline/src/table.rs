use std::collections::BTreeMap;
use std::path::Path;

use liferisk_core::constants;
use liferisk_core::errors::BaselineError;
use liferisk_core::tracing::events;
use serde::Serialize;

use crate::dataset::{self, DatasetRow};

/// Latest reported figures for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineRecord {
    pub country: String,
    pub year: i32,
    pub life_expectancy: f64,
    pub alcohol: f64,
    pub schooling: f64,
}

impl From<DatasetRow> for BaselineRecord {
    fn from(row: DatasetRow) -> Self {
        Self {
            country: row.country,
            year: row.year,
            life_expectancy: row.life_expectancy,
            alcohol: row.alcohol,
            schooling: row.schooling,
        }
    }
}

/// Country → baseline life expectancy, one record per country.
///
/// Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineTable {
    records: BTreeMap<String, BaselineRecord>,
    fallback: f64,
}

impl BaselineTable {
    /// An empty table: every lookup yields the fallback.
    pub fn empty() -> Self {
        Self {
            records: BTreeMap::new(),
            fallback: constants::FALLBACK_LIFE_EXPECTANCY,
        }
    }

    /// Reduce raw rows to the latest year per country.
    ///
    /// Rows are stably sorted by descending year and the first row per
    /// country wins, so equal years resolve to the earliest input row.
    pub fn from_rows(rows: Vec<DatasetRow>) -> Self {
        let mut rows = rows;
        rows.sort_by(|a, b| b.year.cmp(&a.year));

        let mut records = BTreeMap::new();
        for row in rows {
            records
                .entry(row.country.clone())
                .or_insert_with(|| BaselineRecord::from(row));
        }

        Self {
            records,
            fallback: constants::FALLBACK_LIFE_EXPECTANCY,
        }
    }

    /// Build directly from `(country, life_expectancy)` pairs.
    /// Later pairs for the same country are ignored.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut records = BTreeMap::new();
        for (country, life_expectancy) in pairs {
            let country = country.into();
            records
                .entry(country.clone())
                .or_insert_with(|| BaselineRecord {
                    country,
                    year: 0,
                    life_expectancy,
                    alcohol: 0.0,
                    schooling: 0.0,
                });
        }
        Self {
            records,
            fallback: constants::FALLBACK_LIFE_EXPECTANCY,
        }
    }

    /// Load and reduce the CSV dataset at `path`.
    pub fn load(path: &Path) -> Result<Self, BaselineError> {
        let load = dataset::load_path(path)?;
        let rows_read = load.rows_read;
        if load.rows_dropped > 0 {
            tracing::debug!(
                dropped = load.rows_dropped,
                "dropped dataset rows with missing fields"
            );
        }
        let table = Self::from_rows(load.rows);
        events::baseline_loaded(&path.display().to_string(), rows_read, table.len());
        Ok(table)
    }

    /// Replace the fallback used for absent countries.
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn get(&self, country: &str) -> Option<&BaselineRecord> {
        self.records.get(country)
    }

    /// Baseline for `country`, or the fallback. Never fails.
    pub fn lookup(&self, country: &str) -> f64 {
        match self.records.get(country) {
            Some(record) => record.life_expectancy,
            None => {
                events::baseline_fallback(country, self.fallback);
                self.fallback
            }
        }
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for BaselineTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Baseline life expectancy for `country`; the table's fallback when absent.
pub fn lookup_baseline(country: &str, table: &BaselineTable) -> f64 {
    table.lookup(country)
}
