//! Per-value row counts under the other panes' active selections.

use crate::{
    assemble::{apply_join, apply_predicates, table_with_alias},
    field::{FieldAction, PaneField},
    options::{LeftJoin, Predicate},
    query::{COUNT_ALIAS, VALUE_ALIAS},
    request::SearchPanesRequest,
    resolve::ResolvedPane,
};
use connectors::sql::base::{adapter::SqlAdapter, error::DbError};
use model::{core::value::Value, records::row::RowData};
use planner::query::{
    alias,
    ast::{expr::BinaryOperator, select::Select},
    builder::{condition::ConditionBuilder, select::SelectBuilder},
    column, count_all,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    pub value: Value,
    pub count: i64,
}

impl CountRow {
    fn from_row(row: &RowData) -> Self {
        Self {
            value: row.get_value(VALUE_ALIAS),
            count: row.get_value(COUNT_ALIAS).as_i64().unwrap_or(0),
        }
    }
}

/// Counts are only meaningful for readable fields whose value is not pinned
/// by the server.
pub fn counts_apply(field: &dyn PaneField) -> bool {
    field.apply(FieldAction::Get) && field.value().is_none()
}

pub struct CountQuery<'a, F> {
    pane: &'a ResolvedPane,
    field_name: &'a str,
    predicates: &'a [Predicate],
    request: &'a SearchPanesRequest,
    fields: &'a [F],
    join: Option<&'a LeftJoin>,
}

impl<'a, F: PaneField> CountQuery<'a, F> {
    pub fn new(
        pane: &'a ResolvedPane,
        field_name: &'a str,
        request: &'a SearchPanesRequest,
        fields: &'a [F],
    ) -> Self {
        Self {
            pane,
            field_name,
            predicates: &[],
            request,
            fields,
            join: None,
        }
    }

    pub fn predicates(mut self, predicates: &'a [Predicate]) -> Self {
        self.predicates = predicates;
        self
    }

    pub fn join(mut self, join: Option<&'a LeftJoin>) -> Self {
        self.join = join;
        self
    }

    /// `SELECT value, COUNT(*) ... GROUP BY value`, restricted by every other
    /// field's selected terms as a `LIKE '%term%'` disjunction.
    pub fn build(&self) -> Result<Select, DbError> {
        let (table, table_alias) = table_with_alias(&self.pane.table);
        let query = SelectBuilder::new()
            .select(vec![
                alias(column(&self.pane.value), VALUE_ALIAS),
                alias(count_all(), COUNT_ALIAS),
            ])
            .from(table, table_alias);
        let query = apply_join(query, self.join)?;
        let mut query = apply_predicates(query, self.predicates);

        for other in self.fields.iter().filter(|f| f.name() != self.field_name) {
            let mut group = ConditionBuilder::new();
            for term in self.request.terms(other.name()) {
                group.or_where(
                    other.db_field(),
                    BinaryOperator::Like,
                    Value::String(format!("%{term}%")),
                );
            }
            if let Some(expr) = group.build() {
                query = query.where_clause(expr);
            }
        }

        Ok(query.group_by(column(&self.pane.value)).build())
    }

    pub async fn fetch(&self, db: &dyn SqlAdapter) -> Result<Vec<CountRow>, DbError> {
        let select = self.build()?;
        let rows = db.fetch_select(&select).await?;
        debug!(field = self.field_name, rows = rows.len(), "Fetched pane counts");
        Ok(rows.iter().map(CountRow::from_row).collect())
    }
}
