//! Shared fixtures for the fxstore integration tests.
//!
//! Provides `setup_store()` which opens a store on a fresh temporary
//! database file, plus the sample record the store tests revolve around.

use chrono::NaiveDate;
use fxstore::{FxStore, RateRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Open a store backed by a database file inside a fresh temp directory.
///
/// Returns `(FxStore, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test so the database file is not
/// deleted prematurely.
pub fn setup_store() -> (FxStore, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = FxStore::builder()
        .db_path(tmp_dir.path().join("rates.duckdb"))
        .build()
        .unwrap();
    (store, tmp_dir)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// `{EUR/USD: 1.2, JPY/USD: 0.009}` — the rates used across the store and
/// conversion tests.
pub fn sample_rates() -> BTreeMap<String, Decimal> {
    BTreeMap::from([
        ("EUR/USD".to_string(), dec!(1.2)),
        ("JPY/USD".to_string(), dec!(0.009)),
    ])
}

pub fn sample_record() -> RateRecord {
    RateRecord::new(date("2021-09-01"), "USD", sample_rates())
}
