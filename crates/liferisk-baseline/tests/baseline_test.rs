use std::path::PathBuf;

use liferisk_baseline::dataset;
use liferisk_baseline::{lookup_baseline, BaselineTable, CountryResolver};
use liferisk_core::errors::BaselineError;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/life_expectancy_sample.csv")
}

#[test]
fn drops_rows_with_missing_required_fields() {
    let load = dataset::load_path(&fixture()).unwrap();
    assert_eq!(load.rows_read, 9);
    // India 2015 has no Alcohol, Ghana has no Year.
    assert_eq!(load.rows_dropped, 2);
    assert_eq!(load.rows.len(), 7);
}

#[test]
fn dataset_reduces_to_latest_complete_year() {
    let table = BaselineTable::load(&fixture()).unwrap();

    // India 2015 was dropped for missing Alcohol, so 2014 is the latest complete row.
    assert_eq!(lookup_baseline("India", &table), 67.9);
    assert_eq!(lookup_baseline("Japan", &table), 83.7);
    assert_eq!(table.get("Japan").map(|r| r.schooling), Some(15.3));
    assert_eq!(table.len(), 4);
}

#[test]
fn tie_on_year_keeps_first_row() {
    let table = BaselineTable::load(&fixture()).unwrap();
    assert_eq!(lookup_baseline("Chad", &table), 53.1);
}

#[test]
fn quoted_country_names_are_supported() {
    let table = BaselineTable::load(&fixture()).unwrap();
    assert_eq!(lookup_baseline("Korea, Republic of", &table), 82.3);
}

#[test]
fn absent_country_yields_fallback() {
    let table = BaselineTable::load(&fixture()).unwrap();
    assert_eq!(lookup_baseline("Ghana", &table), 72.0);
    assert_eq!(lookup_baseline("", &table), 72.0);
}

#[test]
fn missing_column_is_an_error() {
    let csv = "Country,Year,Life expectancy ,Alcohol\nIndia,2015,68.3,3.0\n";
    let err = dataset::load_reader(csv.as_bytes()).unwrap_err();
    match err {
        BaselineError::MissingColumn { column } => assert_eq!(column, "Schooling"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn unreadable_path_is_an_error() {
    let err = BaselineTable::load(std::path::Path::new("/nonexistent/le.csv")).unwrap_err();
    assert!(matches!(err, BaselineError::DatasetUnreadable { .. }));
}

#[test]
fn header_only_dataset_gives_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "Country,Year,Life expectancy ,Alcohol,Schooling\n").unwrap();

    let table = BaselineTable::load(&path).unwrap();
    assert!(table.is_empty());
    assert_eq!(lookup_baseline("India", &table), 72.0);
}

#[test]
fn resolved_country_feeds_the_lookup() {
    let table = BaselineTable::load(&fixture()).unwrap();
    let resolver = CountryResolver::default();
    // Any city resolves to India.
    assert_eq!(lookup_baseline(resolver.resolve("Tokyo"), &table), 67.9);
}
