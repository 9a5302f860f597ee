//! # liferisk-baseline
//!
//! Baseline life expectancy per country, derived from a reference dataset
//! reduced to the most recent year per country.
//! Lookups are total: an absent country yields the fallback constant.

pub mod dataset;
pub mod resolver;
pub mod table;

pub use dataset::{DatasetLoad, DatasetRow};
pub use resolver::CountryResolver;
pub use table::{lookup_baseline, BaselineRecord, BaselineTable};
