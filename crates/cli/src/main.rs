use crate::{
    commands::{Commands, ConnectionArgs},
    conn::ping,
    error::CliError,
    output::PaneOptions,
};
use clap::Parser;
use connectors::adapter::Adapter;
use search_panes::{
    Editor, PaneField, SearchPaneOptions, SearchPanesRequest, config::PanesConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod conn;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "panes", version = "0.1.0", about = "Search pane option lists")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Options {
            conn,
            config,
            request,
            field,
            output,
        } => {
            let config = PanesConfig::from_path(&config)?;
            let request = match request {
                Some(path) => SearchPanesRequest::from_path(path)?,
                None => SearchPanesRequest::default(),
            };

            let adapter = connect(&conn).await?;
            let editor = Editor::new(&config.table, adapter.into_shared());
            let options = compute_options(&config, &editor, &request, field.as_deref()).await?;

            match output {
                Some(path) => output::write_options(&options, &path).await?,
                None => output::print_options(&options)?,
            }
        }
        Commands::TestConn { conn } => {
            let adapter = connect(&conn).await?;
            ping(adapter.get_sql()).await?;
        }
    }

    Ok(())
}

async fn connect(conn: &ConnectionArgs) -> Result<Adapter, CliError> {
    let adapter = Adapter::sql(conn.format.database_kind(), &conn.conn_str).await?;
    Ok(adapter)
}

/// Runs every configured pane, or only `only` when given.
async fn compute_options(
    config: &PanesConfig,
    editor: &Editor,
    request: &SearchPanesRequest,
    only: Option<&str>,
) -> Result<PaneOptions, CliError> {
    if let Some(name) = only {
        if config.field(name).is_none() {
            return Err(CliError::UnknownField(name.to_string()));
        }
    }

    let fields = config.pane_fields();
    let mut result = PaneOptions::new();

    for (field, field_config) in fields.iter().zip(&config.fields) {
        if only.is_some_and(|name| name != field.name()) {
            continue;
        }

        let options = SearchPaneOptions::try_from(field_config.options.clone())?;
        let list = options
            .exec(
                field,
                editor,
                request,
                &fields,
                config.cross_filter_join.as_ref(),
            )
            .await?;

        info!(field = field.name(), options = list.len(), "Computed pane options");
        result.insert(field.name().to_string(), list);
    }

    Ok(result)
}
