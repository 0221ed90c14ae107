use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum FxStoreError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored row is missing or has an unparseable `Date` attribute.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// No rate is stored for the given date/currency. Raised by conversion,
    /// which needs a rate to exist; plain store lookups report a missing
    /// rate as `None` instead.
    #[error("No {currency} rate stored for {date}")]
    RateNotFound { date: NaiveDate, currency: String },

    /// A stored rate is zero or negative. Conversion refuses to divide by it.
    #[error("Stored rate {pair} on {date} is not positive: {rate}")]
    DataIntegrity {
        date: NaiveDate,
        pair: String,
        rate: Decimal,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FxStoreError>;
