//! Customer lookup tool.
//!
//! This module implements the `get_customer_by_name` MCP tool. The lookup
//! never fails at the protocol level: any connection, query or decode error
//! is reported as a single `{"error": ...}` record.

use crate::db::{Connector, RecordSource};
use crate::error::ServerResult;
use crate::models::Record;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

/// Exact-match lookup; `name` is always bound as a parameter.
pub const CUSTOMER_BY_NAME_SQL: &str = "SELECT * FROM customer WHERE name = ?";

/// Prefix for messages in the error payload.
pub const LOOKUP_ERROR_PREFIX: &str = "Failed to fetch customer data";

/// Input for the get_customer_by_name tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CustomerLookupInput {
    /// The name of the customer to search for (exact match)
    pub name: String,
}

/// Handler for customer lookups.
pub struct CustomerToolHandler<C> {
    connector: C,
}

impl<C: Connector> CustomerToolHandler<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Handle the get_customer_by_name tool call.
    ///
    /// Returns every matching customer row, an empty list when nothing
    /// matches, or a one-element list holding an `error` field on failure.
    pub async fn get_customer_by_name(&self, input: CustomerLookupInput) -> Vec<Record> {
        match self.lookup(&input.name).await {
            Ok(records) => {
                info!(row_count = records.len(), "Customer lookup completed");
                records
            }
            Err(e) => {
                warn!(error = %e, "Customer lookup failed");
                vec![Record::error(format!("{}: {}", LOOKUP_ERROR_PREFIX, e))]
            }
        }
    }

    async fn lookup(&self, name: &str) -> ServerResult<Vec<Record>> {
        let mut source = self.connector.connect().await?;
        let result = source.fetch_records(CUSTOMER_BY_NAME_SQL, &[name]).await;

        // Closed on both the success and the failure path; a failed close
        // does not change what the caller sees.
        if let Err(e) = source.close().await {
            warn!(error = %e, "Failed to close database connection");
        }

        result
    }
}
