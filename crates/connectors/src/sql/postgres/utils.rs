use crate::sql::base::error::ConnectorError;
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use std::future::Future;
use tokio_postgres::{Client, Config, NoTls, config::SslMode};
use tracing::{debug, error, warn};

/// Connects honouring the `sslmode` of the URL; `prefer` falls back to a
/// plain connection when the TLS handshake fails.
pub(crate) async fn connect_client(url: &str) -> Result<Client, ConnectorError> {
    let config = url
        .parse::<Config>()
        .map_err(|e| ConnectorError::InvalidUrl(e.to_string()))?;

    debug!(hosts = ?config.get_hosts(), dbname = ?config.get_dbname(), "Connecting to Postgres");

    match config.get_ssl_mode() {
        SslMode::Disable => connect_plain(&config).await,
        SslMode::Prefer => match connect_tls(&config).await {
            Ok(client) => Ok(client),
            Err(error) => {
                warn!(%error, "Postgres TLS handshake failed, retrying without TLS");
                connect_plain(&config).await
            }
        },
        _ => connect_tls(&config).await,
    }
}

async fn connect_tls(config: &Config) -> Result<Client, ConnectorError> {
    let tls = MakeTlsConnector::new(TlsConnector::builder().build()?);
    let (client, connection) = config.connect(tls).await?;
    drive(connection);
    Ok(client)
}

async fn connect_plain(config: &Config) -> Result<Client, ConnectorError> {
    let (client, connection) = config.connect(NoTls).await?;
    drive(connection);
    Ok(client)
}

/// The connection half must be polled for the client to make progress.
fn drive<F>(connection: F)
where
    F: Future<Output = Result<(), tokio_postgres::Error>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "Postgres connection error");
        }
    });
}
