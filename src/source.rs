//! Upstream exchange-rate API client.
//!
//! Fetches the latest rates for a fixed base currency and re-keys the
//! configured subset as `"<CODE>/<BASE>"` pairs ready for a
//! [`RateRecord`](crate::models::RateRecord). The HTTP client is built
//! lazily on first fetch.

use reqwest::blocking::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::Result;

/// Shape of the upstream `latest` endpoint; only `rates` is used.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: BTreeMap<String, Decimal>,
}

/// Select the configured currencies out of an upstream rate map and re-key
/// them as `"<CODE>/<BASE>"` pairs. Codes absent from the upstream map are
/// skipped.
pub fn map_rates_response(
    rates: &BTreeMap<String, Decimal>,
    base_currency: &str,
    currencies: &[String],
) -> BTreeMap<String, Decimal> {
    currencies
        .iter()
        .filter_map(|currency| {
            let code = currency.to_ascii_uppercase();
            rates
                .get(&code)
                .map(|rate| (format!("{}/{}", code, base_currency.to_ascii_uppercase()), *rate))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// RateSource
// ---------------------------------------------------------------------------

/// Blocking client for the upstream exchange-rate API.
pub struct RateSource {
    base_url: String,
    base_currency: String,
    currencies: Vec<String>,
    timeout: Duration,
    client: Option<Client>,
}

impl RateSource {
    pub fn new(
        base_url: impl Into<String>,
        base_currency: impl Into<String>,
        currencies: Vec<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            base_currency: base_currency.into(),
            currencies,
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> &Client {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        self.client.as_ref().unwrap()
    }

    /// Fetch the latest rates for the configured base currency.
    ///
    /// Returns the configured currencies re-keyed as `"<CODE>/<BASE>"`
    /// pairs. Transport and non-2xx failures propagate to the caller; no
    /// retries are attempted here.
    pub fn fetch_latest(&mut self) -> Result<BTreeMap<String, Decimal>> {
        let url = format!("{}/{}", self.base_url, self.base_currency);
        eprintln!("Fetching exchange rates from {}", url);

        let client = self.client().clone();
        let resp = client.get(&url).send()?.error_for_status()?;
        let body: LatestRatesResponse = resp.json()?;

        Ok(map_rates_response(
            &body.rates,
            &self.base_currency,
            &self.currencies,
        ))
    }
}
