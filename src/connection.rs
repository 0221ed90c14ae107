//! DuckDB-backed record store keyed by date.
//!
//! One table, one row per calendar date. The row shape mirrors the item
//! shape of a key-value backend: `Date` (primary key), `BaseCurrency`, and
//! `Rates` as one JSON text attribute. All access is point get, point upsert,
//! or a single-row rewrite of the `Rates` attribute.

use duckdb::{params, Connection as DuckDbConnection};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{FxStoreError, Result};
use crate::models::RateItem;

/// Wraps a DuckDB connection and owns the rate table.
///
/// Every call may block on storage I/O; the connection defines no timeout or
/// retry policy of its own.
pub struct Connection {
    conn: DuckDbConnection,
    table: String,
}

impl Connection {
    /// Open (or create) a database file and ensure the rate table exists.
    ///
    /// Parent directories are created as needed.
    pub fn open<P: AsRef<Path>>(path: P, table: &str) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = DuckDbConnection::open(path.as_ref())?;
        Self::with_connection(conn, table)
    }

    /// Open an in-memory database. Contents do not survive the connection.
    pub fn open_in_memory(table: &str) -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Self::with_connection(conn, table)
    }

    fn with_connection(conn: DuckDbConnection, table: &str) -> Result<Self> {
        validate_table_name(table)?;
        let this = Self {
            conn,
            table: table.to_string(),
        };
        this.ensure_table()?;
        Ok(this)
    }

    /// The table name this connection reads and writes.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Point lookup of one date's row.
    pub fn get_item(&self, date_key: &str) -> Result<Option<RateItem>> {
        let sql = format!(
            r#"SELECT "Date", "BaseCurrency", "Rates" FROM "{}" WHERE "Date" = ?"#,
            self.table
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![date_key])?;

        if let Some(row) = rows.next()? {
            let date: String = row.get(0)?;
            let base_currency: String = row.get(1)?;
            let rates_json: String = row.get(2)?;
            let rates: BTreeMap<String, Decimal> = serde_json::from_str(&rates_json)?;
            Ok(Some(RateItem {
                date: Some(date),
                base_currency,
                rates,
            }))
        } else {
            Ok(None)
        }
    }

    /// Upsert one date's row, overwriting any existing row for that date.
    pub fn put_item(&self, item: &RateItem) -> Result<()> {
        let date = item
            .date
            .as_deref()
            .ok_or_else(|| FxStoreError::MalformedRecord("missing Date attribute".to_string()))?;
        let rates_json = serde_json::to_string(&item.rates)?;

        let sql = format!(
            r#"INSERT OR REPLACE INTO "{}" ("Date", "BaseCurrency", "Rates") VALUES (?, ?, ?)"#,
            self.table
        );
        self.conn
            .execute(&sql, params![date, item.base_currency, rates_json])?;
        Ok(())
    }

    /// Rewrite the `Rates` attribute of one existing row.
    ///
    /// Returns `false` when no row exists for the date.
    pub fn update_rates(
        &self,
        date_key: &str,
        rates: &BTreeMap<String, Decimal>,
    ) -> Result<bool> {
        let rates_json = serde_json::to_string(rates)?;
        let sql = format!(
            r#"UPDATE "{}" SET "Rates" = ? WHERE "Date" = ?"#,
            self.table
        );
        let changed = self.conn.execute(&sql, params![rates_json, date_key])?;
        Ok(changed > 0)
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }

    fn ensure_table(&self) -> Result<()> {
        self.conn.execute_batch(&format!(
            r#"CREATE TABLE IF NOT EXISTS "{}" (
                "Date" VARCHAR PRIMARY KEY,
                "BaseCurrency" VARCHAR NOT NULL,
                "Rates" VARCHAR NOT NULL
            )"#,
            self.table
        ))?;
        Ok(())
    }
}

/// Table names are interpolated into DDL/DML, so restrict them to plain
/// identifiers rather than relying on quoting.
fn validate_table_name(table: &str) -> Result<()> {
    let ok = !table.is_empty()
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if ok {
        Ok(())
    } else {
        Err(FxStoreError::InvalidArgument(format!(
            "table name must be a plain identifier: {table:?}"
        )))
    }
}
