//! MCP service implementation using rmcp.
//!
//! This module defines the CustomerService struct. Tools are registered via
//! the rmcp `#[tool_router]` macro, which builds the name-to-handler table
//! (with JSON input schemas) once per service instance. The greeting resource
//! is served from a static template table.

use crate::db::MySqlConnector;
use crate::tools::arithmetic::{self, AddInput, MagicAmountInput};
use crate::tools::customer::{CustomerLookupInput, CustomerToolHandler};
use crate::tools::greeting::{self, GREETING_URI_TEMPLATE};
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{
        Annotated, CallToolResult, Content, Implementation, ListResourceTemplatesResult,
        PaginatedRequestParam, ProtocolVersion, RawResourceTemplate, ReadResourceRequestParam,
        ReadResourceResult, ResourceContents, ResourceTemplate, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Clone)]
pub struct CustomerService {
    /// Connection factory shared by all customer lookups
    connector: MySqlConnector,
    /// Tool router for MCP tool dispatch (auto-generated)
    tool_router: ToolRouter<Self>,
}

impl CustomerService {
    /// Create a new CustomerService instance.
    pub fn new(connector: MySqlConnector) -> Self {
        Self {
            connector,
            tool_router: Self::tool_router(),
        }
    }

    /// Resource templates exposed by this server.
    pub fn resource_templates() -> Vec<ResourceTemplate> {
        vec![Annotated::new(
            RawResourceTemplate {
                uri_template: GREETING_URI_TEMPLATE.to_string(),
                name: "greeting".to_string(),
                title: Some("Greeting".to_string()),
                description: Some("Get a personalized greeting".to_string()),
                mime_type: Some("text/plain".to_string()),
            },
            None,
        )]
    }

    /// Resolve a resource URI against the template table.
    fn read_resource_uri(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        match greeting::parse_greeting_uri(uri) {
            Some(name) => {
                debug!(uri = %uri, "Serving greeting resource");
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(greeting::get_greeting(name), uri)],
                })
            }
            None => Err(McpError::resource_not_found(
                format!("Unknown resource: {}", uri),
                Some(serde_json::json!({ "uri": uri })),
            )),
        }
    }
}

/// Wrap a serializable value as a single JSON text content item.
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    Content::json(value).map(|content| CallToolResult::success(vec![content]))
}

#[tool_router]
impl CustomerService {
    #[tool(
        description = "Retrieve customer information by name from the database.\nReturns the list of customer records whose name matches exactly (empty if none).\nOn failure, returns a single record with an `error` field instead of raising."
    )]
    async fn get_customer_by_name(
        &self,
        Parameters(input): Parameters<CustomerLookupInput>,
    ) -> Result<CallToolResult, McpError> {
        let handler = CustomerToolHandler::new(self.connector.clone());
        let records = handler.get_customer_by_name(input).await;
        json_result(&records)
    }

    #[tool(description = "Add two numbers")]
    async fn add(
        &self,
        Parameters(AddInput { a, b }): Parameters<AddInput>,
    ) -> Result<CallToolResult, McpError> {
        let sum = arithmetic::add(a, b)?;
        json_result(&sum)
    }

    #[tool(
        description = "Multiply a list of integers together, left to right.\nThe list must contain at least one value."
    )]
    async fn calculate_magic_amount(
        &self,
        Parameters(input): Parameters<MagicAmountInput>,
    ) -> Result<CallToolResult, McpError> {
        let product = arithmetic::calculate_magic_amount(&input.amounts)?;
        info!(count = input.amounts.len(), "Magic amount calculated");
        json_result(&product)
    }
}

#[tool_handler]
impl ServerHandler for CustomerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "customer-mcp-server".to_owned(),
                title: Some("Customer MCP Server".to_owned()),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Customer lookup and helper tools.\n\
                \n\
                ## Tools\n\
                - `get_customer_by_name`: exact-name lookup in the customer table. \
                Failures come back as `[{\"error\": \"...\"}]`, so check for an `error` key.\n\
                - `add`: sum of two integers.\n\
                - `calculate_magic_amount`: product of a non-empty list of integers.\n\
                \n\
                ## Resources\n\
                - `greeting://{name}`: personalized greeting text."
                    .to_string(),
            ),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            Self::resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_resource_uri(&request.uri)
    }
}
