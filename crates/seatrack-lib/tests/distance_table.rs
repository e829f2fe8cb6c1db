mod common;

use std::fs;
use std::sync::Arc;

use seatrack_lib::{DistanceTable, Error, EtaEngine, Route, DEFAULT_DISTANCE_NM};
use tempfile::tempdir;

use common::fixtures_dir;

#[test]
fn missing_pairs_fall_back_to_exactly_one_thousand() {
    let table = DistanceTable::builtin();
    assert_eq!(DEFAULT_DISTANCE_NM, 1000.0);
    assert_eq!(table.lookup("Mumbai", "Dubai"), 1000.0);
    assert_eq!(table.lookup("Kolkata", "Chennai"), 1000.0);
}

#[test]
fn reverse_direction_is_independent() {
    let table = DistanceTable::builtin();
    // Both directions are populated for this pair.
    assert_eq!(table.lookup("Singapore", "Colombo"), 1200.0);
    assert_eq!(table.lookup("Colombo", "Singapore"), 1200.0);
    // Only one direction is populated here.
    assert_eq!(table.lookup("Dubai", "Rotterdam"), 4200.0);
    assert_eq!(table.lookup("Rotterdam", "Dubai"), 1000.0);
}

#[test]
fn json_and_csv_fixtures_describe_the_same_table() {
    let json = DistanceTable::from_path(&fixtures_dir().join("distances.json")).expect("json loads");
    let csv = DistanceTable::from_path(&fixtures_dir().join("distances.csv")).expect("csv loads");

    assert_eq!(json.entries(), csv.entries());
    assert_eq!(json.default_distance(), 750.0);
    assert_eq!(csv.default_distance(), 750.0);
    assert_eq!(json.lookup("Kochi", "Colombo"), 310.5);
    assert!(json.source().is_some());
}

#[test]
fn injected_table_drives_engine_totals() {
    let table = DistanceTable::from_path(&fixtures_dir().join("distances.json")).expect("loads");
    let engine = EtaEngine::new(Arc::new(table));

    let route = Route::new(["Kochi", "Colombo", "Dubai"]).unwrap();
    assert_eq!(engine.total_distance(&route), 1910.5);

    let unknown = Route::new(["Mumbai", "Dubai"]).unwrap();
    assert_eq!(engine.total_distance(&unknown), 750.0);
}

#[test]
fn rejects_negative_distances_on_load() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"A-B": -5}"#).expect("write table");

    let err = DistanceTable::from_path(&path).expect_err("negative distance");
    assert!(matches!(err, Error::InvalidDistance { ref key, .. } if key == "A-B"));
}

#[test]
fn rejects_non_numeric_csv_distance() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bad.csv");
    fs::write(&path, "from,to,distance_nm\nA,B,far\n").expect("write table");

    let err = DistanceTable::from_path(&path).expect_err("non-numeric distance");
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = DistanceTable::from_path(&fixtures_dir().join("nope.json")).expect_err("missing");
    assert!(matches!(err, Error::Io(_)));
}
