use crate::error::CliError;
use search_panes::PaneOption;
use std::{collections::BTreeMap, path::Path};

/// Option lists keyed by field name, in a stable order.
pub type PaneOptions = BTreeMap<String, Vec<PaneOption>>;

fn options_json(options: &PaneOptions) -> Result<String, CliError> {
    let json = serde_json::to_string_pretty(options)?;
    Ok(json)
}

pub async fn write_options(options: &PaneOptions, path: &Path) -> Result<(), CliError> {
    let json = options_json(options)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

pub fn print_options(options: &PaneOptions) -> Result<(), CliError> {
    let json = options_json(options)?;
    println!("{json}");
    Ok(())
}
