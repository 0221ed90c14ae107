//! fxstore — a date-indexed store of foreign-exchange rates.
//!
//! Persists one rate record per calendar date in a DuckDB database and uses
//! it to convert amounts recorded in foreign currencies into a configured
//! base currency (USD by default). Rates come from an upstream exchange-rate
//! API and are re-keyed as `"<CODE>/<BASE>"` currency pairs.
//!
//! # Quick start
//!
//! ```no_run
//! use fxstore::FxStore;
//! use rust_decimal::Decimal;
//!
//! let store = FxStore::builder().build().unwrap();
//!
//! // Fetch today's rates from the upstream API and persist them
//! let record = store.capture_today().unwrap();
//!
//! // Convert 100 EUR into USD using the stored rate
//! let usd = store
//!     .converter()
//!     .convert(Decimal::from(100), "EUR", record.date())
//!     .unwrap();
//! ```

pub mod config;
pub mod connection;
pub mod convert;
pub mod error;
pub mod models;
pub mod queries;
pub mod source;

pub use connection::Connection;
pub use convert::Converter;
pub use error::{FxStoreError, Result};
pub use models::{pair_key, RateItem, RateRecord};
pub use queries::RateQuery;
pub use source::{map_rates_response, RateSource};

use chrono::Local;
use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// FxStoreBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`FxStore`] instance.
///
/// Use [`FxStore::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FxStoreBuilder::build) to open the store.
pub struct FxStoreBuilder {
    db_path: Option<PathBuf>,
    in_memory: bool,
    table: String,
    base_currency: String,
    currencies: Vec<String>,
    source_url: String,
    timeout: Duration,
}

impl Default for FxStoreBuilder {
    fn default() -> Self {
        Self {
            db_path: None,
            in_memory: false,
            table: config::DEFAULT_TABLE.to_string(),
            base_currency: config::DEFAULT_BASE_CURRENCY.to_string(),
            currencies: config::default_currencies(),
            source_url: config::DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl FxStoreBuilder {
    /// Set the database file path.
    ///
    /// If not set, a platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/fxstore/rates.duckdb` on Linux).
    pub fn db_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.db_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory database instead of a file. Nothing is persisted
    /// beyond the store's lifetime. Defaults to `false`.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Set the table holding the rate records. Defaults to `exchange_rates`.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the base currency all rates are expressed against.
    /// Defaults to `USD`.
    pub fn base_currency(mut self, code: impl Into<String>) -> Self {
        self.base_currency = code.into();
        self
    }

    /// Set the currency codes captured from the upstream API.
    /// Defaults to `COP`, `EUR`, `MXN`.
    pub fn currencies<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.currencies = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the upstream exchange-rate API base URL.
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Set the HTTP request timeout for upstream fetches.
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Open the database (creating the table if needed) and build the store.
    ///
    /// No network access happens here; the upstream API is only contacted by
    /// [`FxStore::capture_today`].
    pub fn build(self) -> Result<FxStore> {
        let conn = if self.in_memory {
            Connection::open_in_memory(&self.table)?
        } else {
            let path = self.db_path.unwrap_or_else(config::default_db_path);
            Connection::open(path, &self.table)?
        };

        let source = RateSource::new(
            self.source_url,
            self.base_currency.clone(),
            self.currencies,
            self.timeout,
        );

        Ok(FxStore {
            conn,
            source: RefCell::new(source),
            base_currency: self.base_currency,
        })
    }
}

// ---------------------------------------------------------------------------
// FxStore
// ---------------------------------------------------------------------------

/// The main entry point: a rate store plus its upstream rate source.
///
/// Wraps a [`Connection`] and exposes the store operations and conversion as
/// lightweight borrowing wrappers. Created via [`FxStore::builder()`].
pub struct FxStore {
    conn: Connection,
    source: RefCell<RateSource>,
    base_currency: String,
}

impl FxStore {
    /// Create a new builder for configuring the store.
    pub fn builder() -> FxStoreBuilder {
        FxStoreBuilder::default()
    }

    /// Access the rate store operations.
    pub fn rates(&self) -> RateQuery<'_> {
        RateQuery::new(&self.conn)
    }

    /// Access the conversion interface.
    pub fn converter(&self) -> Converter<'_> {
        Converter::new(&self.conn, &self.base_currency)
    }

    /// The configured base currency code.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Fetch the latest rates from the upstream API, wrap them in a record
    /// dated with the local calendar date, and upsert it.
    ///
    /// Overwrites any record already stored for today. Returns the record
    /// that was written.
    pub fn capture_today(&self) -> Result<RateRecord> {
        let rates = self.source.borrow_mut().fetch_latest()?;
        let record = RateRecord::new(
            Local::now().date_naive(),
            self.base_currency.clone(),
            rates,
        );
        self.rates().put(&record)?;
        eprintln!(
            "Captured {} rates for {}",
            record.rates().len(),
            record.date_key()
        );
        Ok(record)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FxStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FxStore(table={}, base_currency={})",
            self.conn.table(),
            self.base_currency
        )
    }
}
