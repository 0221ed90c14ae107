//! Rate store operations: point reads, multi-currency reads, upsert, and
//! single-currency deletion, all keyed by calendar date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::config;
use crate::error::Result;
use crate::models::{pair_key, RateRecord};

// ---------------------------------------------------------------------------
// RateQuery
// ---------------------------------------------------------------------------

/// Query interface for stored rate records.
///
/// A missing date or currency is a normal outcome and comes back as `None`
/// (or `false` for deletes); `Err` always means a storage-layer failure or a
/// malformed stored row.
pub struct RateQuery<'a> {
    conn: &'a crate::connection::Connection,
}

impl<'a> RateQuery<'a> {
    /// Create a new `RateQuery` bound to the given connection.
    pub fn new(conn: &'a crate::connection::Connection) -> Self {
        Self { conn }
    }

    /// Get the full rate record for a date.
    pub fn get_by_date(&self, date: NaiveDate) -> Result<Option<RateRecord>> {
        match self.conn.get_item(&date_key(date))? {
            Some(item) => Ok(Some(RateRecord::from_item(item)?)),
            None => Ok(None),
        }
    }

    /// Get the rate for one currency on a date.
    ///
    /// The code is matched case-insensitively against the record's
    /// `"<CODE>/<BASE>"` pair keys.
    pub fn get_by_currency(&self, date: NaiveDate, currency: &str) -> Result<Option<Decimal>> {
        Ok(self
            .get_by_date(date)?
            .and_then(|record| record.rate_for(currency)))
    }

    /// Get rates for several currencies on a date.
    ///
    /// The result maps each requested code (uppercased) to its rate, or to
    /// `None` when that pair is not in the record. When no record exists for
    /// the date at all, the result is an empty map — a whole-date miss means
    /// "nothing known", not "every currency missing".
    pub fn get_by_currencies(
        &self,
        date: NaiveDate,
        currencies: &[&str],
    ) -> Result<BTreeMap<String, Option<Decimal>>> {
        let Some(record) = self.get_by_date(date)? else {
            return Ok(BTreeMap::new());
        };

        Ok(currencies
            .iter()
            .map(|currency| {
                (
                    currency.to_ascii_uppercase(),
                    record.rate_for(currency),
                )
            })
            .collect())
    }

    /// Upsert a record at its date key, overwriting any existing record.
    ///
    /// The store does not validate rate values; callers are responsible for
    /// only writing positive, finite rates.
    pub fn put(&self, record: &RateRecord) -> Result<()> {
        self.conn.put_item(&record.to_item())
    }

    /// Remove one currency pair from a date's record.
    ///
    /// Returns `Ok(false)`, leaving the record untouched, when the date or
    /// the pair does not exist. This is a non-atomic read-modify-write of the
    /// whole rates map: a concurrent writer on the same date can be lost, so
    /// callers must ensure a single writer per date.
    pub fn delete_currency(&self, date: NaiveDate, currency: &str) -> Result<bool> {
        let key = date_key(date);
        let Some(item) = self.conn.get_item(&key)? else {
            return Ok(false);
        };

        let pair = pair_key(currency, &item.base_currency);
        let mut rates = item.rates;
        if rates.remove(&pair).is_none() {
            return Ok(false);
        }

        self.conn.update_rates(&key, &rates)
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format(config::DATE_FORMAT).to_string()
}
