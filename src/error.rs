//! Error types for the customer MCP server.
//!
//! All failures are expressed as [`ServerError`] variants built with `thiserror`.
//! The customer lookup tool folds these into an error payload, while the
//! arithmetic tools surface them as MCP protocol errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Query failed: {message}")]
    Query {
        message: String,
        /// e.g., "42S02" for a missing table
        sql_state: Option<String>,
    },

    #[error("Failed to decode column '{column}': {message}")]
    Decode { column: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ServerError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with optional SQL state.
    pub fn query(message: impl Into<String>, sql_state: Option<String>) -> Self {
        Self::Query {
            message: message.into(),
            sql_state,
        }
    }

    /// Create a column decode error.
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Convert sqlx errors to ServerError.
impl From<sqlx::Error> for ServerError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(msg) => ServerError::connection(msg.to_string()),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                ServerError::query(db_err.message(), code)
            }
            sqlx::Error::Io(io_err) => ServerError::connection(format!("I/O error: {}", io_err)),
            sqlx::Error::Tls(tls_err) => ServerError::connection(format!("TLS error: {}", tls_err)),
            sqlx::Error::Protocol(msg) => {
                ServerError::connection(format!("Protocol error: {}", msg))
            }
            sqlx::Error::ColumnNotFound(col) => {
                ServerError::query(format!("Column not found: {}", col), None)
            }
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => ServerError::internal(format!(
                "Column index {} out of bounds (len: {})",
                index, len
            )),
            sqlx::Error::ColumnDecode { index, source } => {
                ServerError::decode(index.to_string(), source.to_string())
            }
            sqlx::Error::Decode(source) => ServerError::decode("?", source.to_string()),
            sqlx::Error::WorkerCrashed => ServerError::internal("Database worker crashed"),
            _ => ServerError::internal(format!("Unknown database error: {}", err)),
        }
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Convert ServerError to MCP ErrorData for semantic error categorization.
impl From<ServerError> for rmcp::ErrorData {
    fn from(err: ServerError) -> Self {
        match &err {
            ServerError::InvalidInput { .. } => rmcp::ErrorData::invalid_params(err.to_string(), None),

            // Database errors -> invalid_params with sql_state in message
            ServerError::Query { message, sql_state } => {
                let msg = match sql_state {
                    Some(code) => format!("{} (SQLSTATE: {})", message, code),
                    None => message.clone(),
                };
                rmcp::ErrorData::invalid_params(msg, None)
            }

            ServerError::Connection { .. }
            | ServerError::Decode { .. }
            | ServerError::Internal { .. } => {
                rmcp::ErrorData::internal_error(err.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServerError::connection("Access denied for user 'app'");
        assert_eq!(
            err.to_string(),
            "Connection failed: Access denied for user 'app'"
        );
    }

    #[test]
    fn test_decode_error_names_column() {
        let err = ServerError::decode("created_at", "unexpected type");
        assert!(err.to_string().contains("'created_at'"));
    }

    #[test]
    fn test_invalid_input_maps_to_invalid_params() {
        let mcp_err: rmcp::ErrorData = ServerError::invalid_input("bad input").into();
        // invalid_params uses -32602
        assert_eq!(mcp_err.code.0, -32602);
    }

    #[test]
    fn test_query_error_includes_sql_state() {
        let err = ServerError::query("Table 'shop.customer' doesn't exist", Some("42S02".into()));
        let mcp_err: rmcp::ErrorData = err.into();
        assert_eq!(mcp_err.code.0, -32602);
        assert!(mcp_err.message.contains("42S02"));
    }

    #[test]
    fn test_connection_maps_to_internal_error() {
        let mcp_err: rmcp::ErrorData = ServerError::connection("refused").into();
        // internal_error uses -32603
        assert_eq!(mcp_err.code.0, -32603);
    }

    #[test]
    fn test_internal_maps_to_internal_error() {
        let mcp_err: rmcp::ErrorData = ServerError::internal("boom").into();
        assert_eq!(mcp_err.code.0, -32603);
    }

    #[test]
    fn test_sqlx_io_error_is_connection_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: ServerError = sqlx::Error::Io(io).into();
        assert!(matches!(err, ServerError::Connection { .. }));
    }

    #[test]
    fn test_sqlx_column_not_found_is_query_error() {
        let err: ServerError = sqlx::Error::ColumnNotFound("email".into()).into();
        assert!(matches!(err, ServerError::Query { .. }));
    }
}
