//! Result-row adapter for CQL queries.
//!
//! A driver hands over a row as parallel column names and values. [`Row`]
//! turns that into an indifferent-access map of ordinary columns, and keeps
//! the `ttl(col)` / `writetime(col)` pseudo-columns aside as per-column
//! metadata.

pub mod config;
pub mod error;
pub mod key;
pub mod pseudo;
pub mod raw;
pub mod row;
pub mod value;

pub use config::RowConfig;
pub use error::RowError;
pub use key::ColumnKey;
pub use raw::{RawRow, ResultRow};
pub use row::Row;
pub use value::Value;
