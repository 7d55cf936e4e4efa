//! Data models for the customer MCP server.
//!
//! This module contains the types shared between the database layer
//! and the tool handlers:
//! - Connection parameters for the MySQL server
//! - Normalized field values and customer records

pub mod connection;
pub mod value;

pub use connection::ConnectionParams;
pub use value::{FieldValue, Record};
