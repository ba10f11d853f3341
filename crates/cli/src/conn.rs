use crate::error::CliError;
use connectors::sql::base::adapter::{DatabaseKind, SqlAdapter};
use std::str::FromStr;
use tracing::{error, info};

/// Database behind a `--format` argument
#[derive(Debug, Clone, Copy)]
pub enum ConnectionKind {
    MySql,
    Postgres,
}

impl FromStr for ConnectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(ConnectionKind::MySql),
            "pg" | "postgres" | "postgresql" => Ok(ConnectionKind::Postgres),
            other => Err(format!("Unknown connection kind: {other}")),
        }
    }
}

impl ConnectionKind {
    pub fn database_kind(&self) -> DatabaseKind {
        match self {
            ConnectionKind::MySql => DatabaseKind::MySql,
            ConnectionKind::Postgres => DatabaseKind::Postgres,
        }
    }
}

/// Runs `SELECT 1` through the adapter and checks the answer.
pub async fn ping(adapter: &dyn SqlAdapter) -> Result<(), CliError> {
    let kind = adapter.kind();
    info!(?kind, "Pinging database");

    let rows = adapter.query_rows("SELECT 1 AS ok", Vec::new()).await?;
    let val = rows.first().and_then(|row| row.get_value("ok").as_i64());

    if val != Some(1) {
        error!(?kind, ?val, "Unexpected ping result");
        return Err(CliError::Ping(format!("{kind:?} answered {val:?}")));
    }

    info!(?kind, "Ping succeeded");
    Ok(())
}
