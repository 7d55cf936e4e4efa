//! Database access layer.
//!
//! This module provides:
//! - A per-call connection factory (no pooling)
//! - MySQL column decoding into transport-safe values

pub mod connection;
pub mod types;

pub use connection::{Connector, MySqlConnector, MySqlSource, RecordSource};
pub use types::{RowToRecord, TypeCategory, categorize_type};
