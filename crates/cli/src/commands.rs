use crate::conn::ConnectionKind;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Database behind the connection string: mysql, pg
    #[arg(long)]
    pub format: ConnectionKind,

    #[arg(long)]
    pub conn_str: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the option list of every configured pane
    Options {
        #[command(flatten)]
        conn: ConnectionArgs,

        /// JSON file describing the table and its pane fields
        #[arg(long)]
        config: PathBuf,

        /// JSON request carrying the current `searchPanes` selections
        #[arg(long)]
        request: Option<PathBuf>,

        /// Restrict output to a single pane
        #[arg(long)]
        field: Option<String>,

        /// Write JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Open a connection and run a trivial query
    TestConn {
        #[command(flatten)]
        conn: ConnectionArgs,
    },
}
