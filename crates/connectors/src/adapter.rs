use crate::{
    error::AdapterError,
    sql::{
        base::adapter::{DatabaseKind, SqlAdapter},
        mysql::adapter::MySqlAdapter,
        postgres::adapter::PgAdapter,
    },
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub enum Adapter {
    MySql(MySqlAdapter),
    Postgres(PgAdapter),
}

impl Adapter {
    pub async fn sql(kind: DatabaseKind, conn_str: &str) -> Result<Self, AdapterError> {
        let adapter = match kind {
            DatabaseKind::MySql => Adapter::MySql(MySqlAdapter::connect(conn_str).await?),
            DatabaseKind::Postgres => Adapter::Postgres(PgAdapter::connect(conn_str).await?),
            DatabaseKind::Other(name) => return Err(AdapterError::UnsupportedDatabase(name)),
        };
        info!(kind = ?adapter.get_sql().kind(), "Connected to database");
        Ok(adapter)
    }

    pub fn get_sql(&self) -> &(dyn SqlAdapter + Send + Sync) {
        match self {
            Adapter::MySql(adapter) => adapter,
            Adapter::Postgres(adapter) => adapter,
        }
    }

    /// Shared handle for callers that hold the adapter across tasks.
    pub fn into_shared(self) -> Arc<dyn SqlAdapter> {
        match self {
            Adapter::MySql(adapter) => Arc::new(adapter),
            Adapter::Postgres(adapter) => Arc::new(adapter),
        }
    }
}
