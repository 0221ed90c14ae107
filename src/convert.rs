//! Base-currency conversion backed by stored rates.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{FxStoreError, Result};
use crate::models::pair_key;
use crate::queries::RateQuery;

/// Converts amounts recorded in foreign currencies into the base currency.
///
/// Rates are stored as `"<CODE>/<BASE>"` — units of the foreign currency per
/// one base unit — so conversion divides the foreign amount by the rate.
pub struct Converter<'a> {
    rates: RateQuery<'a>,
    base_currency: &'a str,
}

impl<'a> Converter<'a> {
    pub fn new(conn: &'a crate::connection::Connection, base_currency: &'a str) -> Self {
        Self {
            rates: RateQuery::new(conn),
            base_currency,
        }
    }

    /// Convert `amount` of `currency` into the base currency using the rate
    /// stored for `date`.
    ///
    /// An amount already in the base currency is returned unchanged without
    /// touching the store. A missing rate fails with
    /// [`FxStoreError::RateNotFound`]; a stored rate that is zero or negative
    /// fails with [`FxStoreError::DataIntegrity`] rather than producing a
    /// meaningless result.
    pub fn convert(&self, amount: Decimal, currency: &str, date: NaiveDate) -> Result<Decimal> {
        if currency.eq_ignore_ascii_case(self.base_currency) {
            return Ok(amount);
        }

        let rate = self
            .rates
            .get_by_currency(date, currency)?
            .ok_or_else(|| FxStoreError::RateNotFound {
                date,
                currency: currency.to_ascii_uppercase(),
            })?;

        if rate <= Decimal::ZERO {
            return Err(FxStoreError::DataIntegrity {
                date,
                pair: pair_key(currency, self.base_currency),
                rate,
            });
        }

        Ok(amount / rate)
    }
}
