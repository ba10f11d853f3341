use crate::sql::base::error::{ConnectorError, DbError};
use thiserror::Error;

/// Failures while choosing or opening a backend.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("No adapter for database kind `{0}`")]
    UnsupportedDatabase(String),

    #[error(transparent)]
    Connector(#[from] ConnectorError),

    #[error(transparent)]
    Database(#[from] DbError),
}
