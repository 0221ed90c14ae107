//! Query interfaces over the rate store.
//!
//! Each module provides a query struct that borrows a
//! [`Connection`](crate::connection::Connection) and exposes the store
//! operations for one concern.

pub mod rates;

pub use rates::RateQuery;
