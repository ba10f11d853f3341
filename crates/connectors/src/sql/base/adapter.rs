use crate::sql::base::{
    error::{ConnectorError, DbError},
    query::generator::QueryGenerator,
};
use async_trait::async_trait;
use model::{core::value::Value, records::row::RowData};
use planner::query::{ast::select::Select, dialect::Dialect};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseKind {
    MySql,
    Postgres,
    Other(String),
}

/// Execution seam between query construction and a concrete database.
///
/// Implementations must tolerate concurrent `query_rows` calls on a shared
/// reference.
#[async_trait]
pub trait SqlAdapter: Send + Sync {
    async fn connect(url: &str) -> Result<Self, ConnectorError>
    where
        Self: Sized;

    /// Runs a parameterized statement and fetches every row.
    async fn query_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RowData>, DbError>;

    /// Renders a `Select` AST with this adapter's dialect and fetches all rows.
    async fn fetch_select(&self, select: &Select) -> Result<Vec<RowData>, DbError> {
        let (sql, params) = QueryGenerator::new(self.dialect()).select(select);
        debug!(%sql, params = params.len(), "Executing select");
        self.query_rows(&sql, params).await
    }

    /// Placeholder and quoting rules for rendered statements.
    fn dialect(&self) -> &dyn Dialect;
    fn kind(&self) -> DatabaseKind;
}
