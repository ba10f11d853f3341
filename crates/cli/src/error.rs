use connectors::{error::AdapterError, sql::base::error::DbError};
use search_panes::PaneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pane(#[from] PaneError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Cannot encode options as JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("No pane is configured for field `{0}`")]
    UnknownField(String),

    #[error("Ping check failed: {0}")]
    Ping(String),
}
