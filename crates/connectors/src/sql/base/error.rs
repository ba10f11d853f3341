use thiserror::Error;

/// Failures while building or running a query.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Postgres query failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("MySQL query failed: {0}")]
    MySql(#[from] mysql_async::Error),

    /// The statement could not be assembled from its configuration.
    #[error("Cannot build query: {0}")]
    QueryBuildError(String),

    #[error("{0}")]
    Unknown(String),
}

/// Failures while opening a connection.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Malformed connection string: {0}")]
    InvalidUrl(String),

    #[error("Could not connect to Postgres: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("Could not set up TLS: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("Could not connect to MySQL: {0}")]
    MySql(#[from] mysql_async::Error),
}
