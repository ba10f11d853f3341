use crate::error::PaneError;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

/// Active pane selections of a request: field name to the search terms
/// currently selected in that field's pane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPanesRequest {
    #[serde(rename = "searchPanes", default)]
    pub search_panes: HashMap<String, Vec<String>>,
}

impl SearchPanesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<I, S>(mut self, field: &str, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_panes
            .insert(field.to_string(), terms.into_iter().map(Into::into).collect());
        self
    }

    /// Terms selected for `field`; empty when the pane is inactive.
    pub fn terms(&self, field: &str) -> &[String] {
        self.search_panes
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PaneError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
