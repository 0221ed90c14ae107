//! RateRecord model tests: construction defaults, pair lookups, and the
//! persisted-form round trip.

use chrono::{Local, NaiveDate};
use fxstore::{FxStoreError, RateItem, RateRecord};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample_rates() -> BTreeMap<String, rust_decimal::Decimal> {
    BTreeMap::from([
        ("COP/USD".to_string(), dec!(3890.5)),
        ("EUR/USD".to_string(), dec!(0.94)),
        ("MXN/USD".to_string(), dec!(18.7)),
    ])
}

// ---------------------------------------------------------------------------
// construction
// ---------------------------------------------------------------------------

#[test]
fn today_defaults_to_local_date_and_usd() {
    let record = RateRecord::today(sample_rates());

    assert_eq!(record.date(), Local::now().date_naive());
    assert_eq!(record.base_currency(), "USD");
    assert_eq!(record.rates(), &sample_rates());
}

#[test]
fn new_takes_custom_date_and_base_currency() {
    let record = RateRecord::new(date("2024-11-10"), "EUR", sample_rates());

    assert_eq!(record.date_key(), "2024-11-10");
    assert_eq!(record.base_currency(), "EUR");
}

// ---------------------------------------------------------------------------
// rate_for
// ---------------------------------------------------------------------------

#[test]
fn rate_for_builds_pair_key_against_own_base() {
    let rates = BTreeMap::from([("GBP/EUR".to_string(), dec!(0.85))]);
    let record = RateRecord::new(date("2024-11-10"), "EUR", rates);

    assert_eq!(record.rate_for("GBP"), Some(dec!(0.85)));
    assert_eq!(record.rate_for("USD"), None);
}

#[test]
fn rate_for_is_case_insensitive() {
    let record = RateRecord::new(date("2024-11-10"), "USD", sample_rates());

    assert_eq!(record.rate_for("eur"), Some(dec!(0.94)));
    assert_eq!(record.rate_for("Mxn"), Some(dec!(18.7)));
}

#[test]
fn rate_for_on_empty_rates_returns_none() {
    let record = RateRecord::new(date("2024-11-10"), "USD", BTreeMap::new());

    assert_eq!(record.rate_for("EUR"), None);
}

// ---------------------------------------------------------------------------
// to_item / from_item
// ---------------------------------------------------------------------------

#[test]
fn to_item_produces_wire_shape() {
    let record = RateRecord::new(date("2024-11-10"), "USD", sample_rates());
    let value = serde_json::to_value(record.to_item()).unwrap();

    assert_eq!(value["Date"], "2024-11-10");
    assert_eq!(value["BaseCurrency"], "USD");
    // Decimals serialize as strings, so no binary floating point on the wire
    assert_eq!(value["Rates"]["COP/USD"], "3890.5");
    assert_eq!(value["Rates"]["EUR/USD"], "0.94");
}

#[test]
fn from_item_round_trips() {
    let record = RateRecord::new(date("2024-11-10"), "USD", sample_rates());

    let rebuilt = RateRecord::from_item(record.to_item()).unwrap();
    assert_eq!(rebuilt, record);
}

#[test]
fn from_item_without_date_is_malformed() {
    let item = RateItem {
        date: None,
        base_currency: "USD".to_string(),
        rates: sample_rates(),
    };

    let err = RateRecord::from_item(item).unwrap_err();
    assert!(matches!(err, FxStoreError::MalformedRecord(_)));
}

#[test]
fn from_item_with_unparseable_date_is_malformed() {
    let item = RateItem {
        date: Some("november 10th".to_string()),
        base_currency: "USD".to_string(),
        rates: BTreeMap::new(),
    };

    let err = RateRecord::from_item(item).unwrap_err();
    assert!(matches!(err, FxStoreError::MalformedRecord(_)));
}

#[test]
fn item_missing_base_currency_defaults_to_usd() {
    let item: RateItem = serde_json::from_value(serde_json::json!({
        "Date": "2024-11-10",
        "Rates": {}
    }))
    .unwrap();

    let record = RateRecord::from_item(item).unwrap();
    assert_eq!(record.base_currency(), "USD");
}
