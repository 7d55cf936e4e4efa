//! Customer MCP Server Library
//!
//! This library exposes a small set of MCP (Model Context Protocol) tools:
//! a MySQL customer lookup, arithmetic helpers, and a greeting resource.

pub mod config;
pub mod db;
pub mod error;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod transport;

pub use config::Config;
pub use error::ServerError;
pub use mcp::CustomerService;
