//! JSON configuration of pane fields and their option lists.

use crate::{
    error::PaneError,
    field::Field,
    options::{LeftJoin, SearchPaneOptions},
};
use model::core::value::Value;
use planner::query::ast::expr::BinaryOperator;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct PanesConfig {
    /// Editor base table.
    pub table: String,
    /// Join applied to every count query.
    #[serde(default)]
    pub cross_filter_join: Option<LeftJoin>,
    #[serde(default)]
    pub fields: Vec<PaneFieldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaneFieldConfig {
    pub name: String,
    #[serde(default)]
    pub db_field: Option<String>,
    /// Fixed server-side value; pins the field.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub options: PaneOptionsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaneOptionsConfig {
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub label: LabelConfig,
    #[serde(default)]
    pub left_join: Vec<LeftJoin>,
    #[serde(default, rename = "where")]
    pub where_clauses: Vec<WhereConfig>,
    #[serde(default)]
    pub add: Vec<ManualConfig>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// A single label column or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelConfig {
    One(String),
    Many(Vec<String>),
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig::Many(Vec::new())
    }
}

impl LabelConfig {
    fn into_columns(self) -> Vec<String> {
        match self {
            LabelConfig::One(column) => vec![column],
            LabelConfig::Many(columns) => columns,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhereConfig {
    pub key: String,
    pub value: serde_json::Value,
    #[serde(default = "default_op")]
    pub op: String,
}

fn default_op() -> String {
    "=".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManualConfig {
    pub label: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl PanesConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PaneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, PaneError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn field(&self, name: &str) -> Option<&PaneFieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Every configured field, in declaration order.
    pub fn pane_fields(&self) -> Vec<Field> {
        self.fields.iter().map(PaneFieldConfig::to_field).collect()
    }
}

impl PaneFieldConfig {
    pub fn to_field(&self) -> Field {
        let mut field = Field::new(&self.name);
        if let Some(db_field) = &self.db_field {
            field = field.with_db_field(db_field);
        }
        if let Some(value) = &self.value {
            field = field.with_value(Value::from(value.clone()));
        }
        field
    }
}

impl TryFrom<PaneOptionsConfig> for SearchPaneOptions {
    type Error = PaneError;

    fn try_from(config: PaneOptionsConfig) -> Result<Self, Self::Error> {
        let mut options = SearchPaneOptions::new().label(config.label.into_columns());

        if let Some(table) = &config.table {
            options = options.table(table);
        }
        if let Some(value) = &config.value {
            options = options.value(value);
        }
        for join in &config.left_join {
            options = options.left_join(&join.table, &join.field1, &join.operator, &join.field2);
        }
        for clause in config.where_clauses {
            let op = clause
                .op
                .parse::<BinaryOperator>()
                .map_err(|e| PaneError::Config(format!("where `{}`: {e}", clause.key)))?;
            options = options.where_clause(&clause.key, Value::from(clause.value), op);
        }
        for manual in config.add {
            options = options.add(&manual.label, manual.value.map(Value::from));
        }
        if let Some(order) = &config.order {
            options = options.order(order);
        }
        if let Some(limit) = config.limit {
            options = options.limit(limit);
        }

        Ok(options)
    }
}
