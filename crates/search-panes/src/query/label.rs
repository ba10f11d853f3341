//! Label, value and total for every distinct value of the pane's column.

use crate::{
    assemble::{apply_join, apply_predicates, table_with_alias},
    options::SearchPaneOptions,
    query::{TOTAL_ALIAS, VALUE_ALIAS, label_alias},
    resolve::ResolvedPane,
};
use connectors::sql::base::{adapter::SqlAdapter, error::DbError};
use model::{core::value::Value, records::row::RowData};
use planner::query::{
    alias, ast::select::Select, builder::select::SelectBuilder, column, count_all, value,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    pub label: String,
    pub value: Value,
    pub total: i64,
}

pub struct LabelQuery<'a> {
    pane: &'a ResolvedPane,
    options: &'a SearchPaneOptions,
}

impl<'a> LabelQuery<'a> {
    pub fn new(pane: &'a ResolvedPane, options: &'a SearchPaneOptions) -> Self {
        Self { pane, options }
    }

    pub fn build(&self) -> Result<Select, DbError> {
        let pane = self.pane;
        let mut labels = pane
            .label_columns()
            .enumerate()
            .map(|(i, label)| alias(column(label), &label_alias(i)));
        let mut select_list = Vec::with_capacity(pane.extra_labels.len() + 3);
        select_list.extend(labels.next());
        select_list.push(alias(column(&pane.value), VALUE_ALIAS));
        select_list.push(alias(count_all(), TOTAL_ALIAS));
        select_list.extend(labels);

        let (table, table_alias) = table_with_alias(&pane.table);
        let query = SelectBuilder::new()
            .select(select_list)
            .from(table, table_alias);
        let query = apply_join(query, self.options.primary_join())?;
        let mut query =
            apply_predicates(query, self.options.predicates()).group_by(column(&pane.value));

        if let Some(order) = self.order() {
            for term in missing_order_columns(order, pane) {
                query = query.column(column(term));
            }
            query = query.order_raw(order);
        }

        if let Some(limit) = self.options.row_limit() {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            query = query.limit(value(Value::Int(limit)));
        }

        Ok(query.build())
    }

    pub async fn fetch(&self, db: &dyn SqlAdapter) -> Result<Vec<LabelRow>, DbError> {
        let select = self.build()?;
        let rows = db.fetch_select(&select).await?;
        debug!(table = %self.pane.table, rows = rows.len(), "Fetched pane labels");
        Ok(rows.iter().map(|row| self.label_row(row)).collect())
    }

    fn order(&self) -> Option<&'a str> {
        self.options
            .order_clause()
            .filter(|order| !order.trim().is_empty())
    }

    fn label_row(&self, row: &RowData) -> LabelRow {
        let labels = RowData::from_pairs(
            &self.pane.table,
            self.pane
                .label_columns()
                .enumerate()
                .map(|(i, label)| (label, row.get_value(&label_alias(i)))),
        );

        let label = match self.options.renderer() {
            Some(render) => render(&labels),
            None => join_labels(&labels),
        };

        LabelRow {
            label,
            value: row.get_value(VALUE_ALIAS),
            total: row.get_value(TOTAL_ALIAS).as_i64().unwrap_or(0),
        }
    }
}

/// Default label text: every label column value, space separated.
fn join_labels(labels: &RowData) -> String {
    labels
        .field_values
        .iter()
        .map(|fv| fv.value.as_ref().map(Value::as_string).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Columns named in `order` minus the `ASC`/`DESC` suffix.
fn order_columns(order: &str) -> impl Iterator<Item = &str> {
    order.split(',').map(strip_direction).filter(|t| !t.is_empty())
}

fn strip_direction(term: &str) -> &str {
    let term = term.trim();
    match term.rsplit_once(char::is_whitespace) {
        Some((head, dir)) if dir.eq_ignore_ascii_case("asc") || dir.eq_ignore_ascii_case("desc") => {
            head.trim_end()
        }
        _ => term,
    }
}

/// Ordering columns not yet selected. Grouped queries reject ORDER BY terms
/// outside the select list on most servers.
fn missing_order_columns<'o>(order: &'o str, pane: &ResolvedPane) -> Vec<&'o str> {
    let mut selected: Vec<String> = pane
        .label_columns()
        .enumerate()
        .flat_map(|(i, label)| [label.to_string(), label_alias(i)])
        .chain([pane.value.clone(), VALUE_ALIAS.to_string(), TOTAL_ALIAS.to_string()])
        .collect();

    let mut missing = Vec::new();
    for term in order_columns(order) {
        if !selected.iter().any(|s| s.eq_ignore_ascii_case(term)) {
            selected.push(term.to_string());
            missing.push(term);
        }
    }
    missing
}
