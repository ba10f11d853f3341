use connectors::sql::base::error::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaneError {
    /// A label or count query failed to build or execute.
    #[error("Data access error: {0}")]
    DataAccess(#[from] DbError),

    #[error("Invalid search pane configuration: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
