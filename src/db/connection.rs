//! Per-call connection factory.
//!
//! Every database-backed tool call opens its own connection through a
//! [`Connector`] and closes it before returning. There is no pooling: a
//! connection never outlives the call that opened it.

use crate::db::types::RowToRecord;
use crate::error::{ServerError, ServerResult};
use crate::models::{ConnectionParams, Record};
use sqlx::mysql::MySqlConnection;
use sqlx::{ConnectOptions, Connection};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error};

/// An open connection that can run a parameterized query.
pub trait RecordSource: Send {
    /// Run `sql` with `params` bound positionally and normalize every row.
    fn fetch_records(
        &mut self,
        sql: &str,
        params: &[&str],
    ) -> impl Future<Output = ServerResult<Vec<Record>>> + Send;

    /// Close the connection. Consumes the source so it cannot be closed twice.
    fn close(self) -> impl Future<Output = ServerResult<()>> + Send;
}

/// Opens a fresh connection for a single call.
pub trait Connector: Send + Sync {
    type Source: RecordSource;

    fn connect(&self) -> impl Future<Output = ServerResult<Self::Source>> + Send;
}

/// Connector for the configured MySQL server.
#[derive(Debug, Clone)]
pub struct MySqlConnector {
    params: Arc<ConnectionParams>,
}

impl MySqlConnector {
    pub fn new(params: Arc<ConnectionParams>) -> Self {
        Self { params }
    }
}

impl Connector for MySqlConnector {
    type Source = MySqlSource;

    async fn connect(&self) -> ServerResult<MySqlSource> {
        debug!(target_db = %self.params.display_target(), "Opening MySQL connection");

        let conn = self
            .params
            .connect_options()
            .connect()
            .await
            .map_err(|e| {
                error!(error = %e, "Error connecting to MySQL");
                ServerError::connection(e.to_string())
            })?;

        Ok(MySqlSource { conn })
    }
}

/// A single MySQL connection owned by one tool call.
#[derive(Debug)]
pub struct MySqlSource {
    conn: MySqlConnection,
}

impl RecordSource for MySqlSource {
    async fn fetch_records(&mut self, sql: &str, params: &[&str]) -> ServerResult<Vec<Record>> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = query.bind(*param);
        }

        let rows = query.fetch_all(&mut self.conn).await?;
        rows.iter().map(RowToRecord::to_record).collect()
    }

    async fn close(self) -> ServerResult<()> {
        self.conn.close().await.map_err(Into::into)
    }
}
