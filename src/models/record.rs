//! Rate record model: one calendar date's snapshot of exchange rates.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config;
use crate::error::{FxStoreError, Result};

/// Build the map key for one rate, e.g. `"EUR/USD"`. Currency codes are
/// normalized to uppercase so lookups are case-insensitive.
pub fn pair_key(currency: &str, base_currency: &str) -> String {
    format!(
        "{}/{}",
        currency.to_ascii_uppercase(),
        base_currency.to_ascii_uppercase()
    )
}

// ---------------------------------------------------------------------------
// RateRecord — one date's rates (domain type)
// ---------------------------------------------------------------------------

/// Snapshot of exchange rates for a single calendar date.
///
/// The date is the partition key: the store holds at most one record per
/// date. Rates are keyed by currency pair (`"<CODE>/<BASE>"`) and expressed
/// as units of the foreign currency per one unit of the base currency.
///
/// Records are immutable once constructed; the store's delete operation
/// rewrites the persisted rates map, not an in-memory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRecord {
    date: NaiveDate,
    base_currency: String,
    rates: BTreeMap<String, Decimal>,
}

impl RateRecord {
    pub fn new(
        date: NaiveDate,
        base_currency: impl Into<String>,
        rates: BTreeMap<String, Decimal>,
    ) -> Self {
        Self {
            date,
            base_currency: base_currency.into(),
            rates,
        }
    }

    /// Record dated with the local calendar date, based in USD.
    pub fn today(rates: BTreeMap<String, Decimal>) -> Self {
        Self::new(
            Local::now().date_naive(),
            config::DEFAULT_BASE_CURRENCY,
            rates,
        )
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date formatted as the store's partition key (`YYYY-MM-DD`).
    pub fn date_key(&self) -> String {
        self.date.format(config::DATE_FORMAT).to_string()
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn rates(&self) -> &BTreeMap<String, Decimal> {
        &self.rates
    }

    /// Look up the rate for a currency code against this record's base.
    ///
    /// An empty rates map simply yields `None`; a record with no rates is
    /// valid and means "no rates known for this date".
    pub fn rate_for(&self, currency: &str) -> Option<Decimal> {
        self.rates
            .get(&pair_key(currency, &self.base_currency))
            .copied()
    }

    // -- Persisted form ----------------------------------------------------

    pub fn to_item(&self) -> RateItem {
        RateItem {
            date: Some(self.date_key()),
            base_currency: self.base_currency.clone(),
            rates: self.rates.clone(),
        }
    }

    /// Reconstruct a record from its persisted form.
    ///
    /// Fails with [`FxStoreError::MalformedRecord`] when the `Date` attribute
    /// is absent or not a `YYYY-MM-DD` date.
    pub fn from_item(item: RateItem) -> Result<Self> {
        let date_str = item
            .date
            .ok_or_else(|| FxStoreError::MalformedRecord("missing Date attribute".to_string()))?;
        let date = NaiveDate::parse_from_str(&date_str, config::DATE_FORMAT).map_err(|_| {
            FxStoreError::MalformedRecord(format!("unparseable Date attribute: {date_str:?}"))
        })?;

        Ok(Self {
            date,
            base_currency: item.base_currency,
            rates: item.rates,
        })
    }
}

// ---------------------------------------------------------------------------
// RateItem — persisted form
// ---------------------------------------------------------------------------

/// The wire/storage shape of a rate record: `Date`, `BaseCurrency`, `Rates`.
///
/// Rate values serialize through `rust_decimal`'s string representation, so
/// stored rates round-trip without binary floating-point loss. A missing
/// `BaseCurrency` defaults to USD on read; only a missing `Date` makes a
/// stored row malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateItem {
    #[serde(rename = "Date")]
    pub date: Option<String>,

    #[serde(rename = "BaseCurrency", default = "default_base_currency")]
    pub base_currency: String,

    #[serde(rename = "Rates", default)]
    pub rates: BTreeMap<String, Decimal>,
}

fn default_base_currency() -> String {
    config::DEFAULT_BASE_CURRENCY.to_string()
}
