use crate::sql::{
    base::{
        adapter::{DatabaseKind, SqlAdapter},
        error::{ConnectorError, DbError},
        row::DbRow,
    },
    postgres::{params::PgParams, utils::connect_client},
};
use async_trait::async_trait;
use model::{core::value::Value, records::row::RowData};
use planner::query::dialect::{self, Dialect};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::Client;
use tracing::trace;

/// One pipelined Postgres client. Queries take a shared read guard, so the
/// count and label statements of a pane are in flight together.
#[derive(Clone)]
pub struct PgAdapter {
    client: Arc<RwLock<Client>>,
    dialect: dialect::Postgres,
}

#[async_trait]
impl SqlAdapter for PgAdapter {
    async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let client = connect_client(url).await?;
        Ok(PgAdapter {
            client: Arc::new(RwLock::new(client)),
            dialect: dialect::Postgres,
        })
    }

    async fn query_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RowData>, DbError> {
        let params = PgParams::new(params);
        let rows = {
            let client = self.client.read().await;
            client.query(sql, &params.as_refs()).await?
        };
        trace!(rows = rows.len(), params = params.len(), "Fetched Postgres rows");

        Ok(rows
            .iter()
            .map(|row| DbRow::PostgresRow(row).to_row_data(""))
            .collect())
    }

    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Postgres
    }
}
