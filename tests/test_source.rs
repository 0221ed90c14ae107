//! Upstream response mapping tests. No network: `map_rates_response` is the
//! pure selection/re-keying step between the API payload and a rate record.

use fxstore::map_rates_response;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

fn upstream_rates() -> BTreeMap<String, Decimal> {
    BTreeMap::from([
        ("COP".to_string(), dec!(3890.5)),
        ("EUR".to_string(), dec!(0.94)),
        ("MXN".to_string(), dec!(18.7)),
        ("GBP".to_string(), dec!(0.73)),
    ])
}

#[test]
fn selects_configured_currencies_and_rekeys_as_pairs() {
    let selected = vec!["COP".to_string(), "EUR".to_string(), "MXN".to_string()];

    let pairs = map_rates_response(&upstream_rates(), "USD", &selected);

    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs["COP/USD"], dec!(3890.5));
    assert_eq!(pairs["EUR/USD"], dec!(0.94));
    assert_eq!(pairs["MXN/USD"], dec!(18.7));
    assert!(!pairs.contains_key("GBP/USD"));
}

#[test]
fn skips_codes_absent_from_the_upstream_payload() {
    let selected = vec!["EUR".to_string(), "XXX".to_string()];

    let pairs = map_rates_response(&upstream_rates(), "USD", &selected);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs["EUR/USD"], dec!(0.94));
}

#[test]
fn normalizes_code_and_base_case() {
    let selected = vec!["eur".to_string()];

    let pairs = map_rates_response(&upstream_rates(), "usd", &selected);

    assert_eq!(pairs["EUR/USD"], dec!(0.94));
}

#[test]
fn empty_selection_yields_empty_map() {
    let pairs = map_rates_response(&upstream_rates(), "USD", &[]);
    assert!(pairs.is_empty());
}
