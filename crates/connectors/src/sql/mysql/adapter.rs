use crate::sql::{
    base::{
        adapter::{DatabaseKind, SqlAdapter},
        error::{ConnectorError, DbError},
        row::DbRow,
    },
    mysql::params::bind_params,
};
use async_trait::async_trait;
use model::{core::value::Value, records::row::RowData};
use mysql_async::{Opts, Pool, Row as MySqlRow, prelude::Queryable};
use planner::query::dialect::{self, Dialect};
use tracing::trace;

/// Pooled MySQL access. Each query checks out a connection of its own, so
/// concurrent pane queries do not queue behind each other.
#[derive(Clone)]
pub struct MySqlAdapter {
    pool: Pool,
    dialect: dialect::MySql,
}

impl MySqlAdapter {
    pub async fn disconnect(self) -> Result<(), DbError> {
        self.pool.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl SqlAdapter for MySqlAdapter {
    async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let opts = Opts::from_url(url).map_err(|e| ConnectorError::InvalidUrl(e.to_string()))?;
        let pool = Pool::new(opts);

        // Surface bad credentials at connect time.
        drop(pool.get_conn().await?);

        Ok(MySqlAdapter {
            pool,
            dialect: dialect::MySql,
        })
    }

    async fn query_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RowData>, DbError> {
        let mut conn = self.pool.get_conn().await?;
        let rows: Vec<MySqlRow> = conn.exec(sql, bind_params(&params)).await?;
        trace!(rows = rows.len(), "Fetched MySQL rows");

        let result = rows
            .iter()
            .map(|row| DbRow::MySqlRow(row).to_row_data(""))
            .collect();
        Ok(result)
    }

    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::MySql
    }
}
