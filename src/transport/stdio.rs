//! Stdio transport for the MCP server.
//!
//! This transport uses standard input/output for communication,
//! which is the standard mode for CLI-based MCP integrations.

use crate::db::MySqlConnector;
use crate::error::{ServerError, ServerResult};
use crate::mcp::CustomerService;
use crate::transport::{Transport, wait_for_signal};
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, warn};

/// Stdio transport implementation.
///
/// This transport reads JSON-RPC messages from stdin and writes
/// responses to stdout, following the MCP protocol specification.
pub struct StdioTransport {
    connector: MySqlConnector,
}

impl StdioTransport {
    pub fn new(connector: MySqlConnector) -> Self {
        Self { connector }
    }
}

impl Transport for StdioTransport {
    async fn run(&self) -> ServerResult<()> {
        info!("Starting MCP server with stdio transport");

        let service = CustomerService::new(self.connector.clone());

        let running_service = service.serve(stdio()).await.map_err(|e| {
            ServerError::internal(format!("Failed to start stdio transport: {}", e))
        })?;

        tokio::select! {
            result = running_service.waiting() => {
                match result {
                    Ok(_quit_reason) => info!("Stdio transport completed normally"),
                    Err(e) => {
                        warn!(error = %e, "Stdio transport error");
                        return Err(ServerError::internal(format!(
                            "Stdio transport error: {}",
                            e
                        )));
                    }
                }
            }
            _ = wait_for_signal() => {
                // tokio::select! cannot interrupt a blocking stdin read
                info!("Shutdown signal received, exiting process");
                std::process::exit(0);
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConnectionParams;
    use std::sync::Arc;

    #[test]
    fn test_stdio_transport_creation() {
        let params = ConnectionParams::new("127.0.0.1", 3306, "app", "secret", "shop");
        let transport = StdioTransport::new(MySqlConnector::new(Arc::new(params)));
        assert_eq!(transport.name(), "stdio");
    }
}
