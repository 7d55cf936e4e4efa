//! MCP server integration module.
//!
//! This module wires the tool and resource handlers into the MCP protocol
//! using the rmcp framework.

pub mod service;

pub use service::CustomerService;
