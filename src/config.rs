use std::path::PathBuf;

/// Table holding one row per calendar date.
pub const DEFAULT_TABLE: &str = "exchange_rates";

/// Currency all stored rates are expressed against.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Upstream exchange-rate API. The base currency code is appended as the
/// final path segment, e.g. `https://open.er-api.com/v6/latest/USD`.
pub const DEFAULT_SOURCE_URL: &str = "https://open.er-api.com/v6/latest";

/// Format of the `Date` partition key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Currencies captured from the upstream API when none are configured.
pub fn default_currencies() -> Vec<String> {
    ["COP", "EUR", "MXN"].iter().map(|s| s.to_string()).collect()
}

pub fn default_db_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("fxstore").join("rates.duckdb")
    } else {
        PathBuf::from(".fxstore").join("rates.duckdb")
    }
}
