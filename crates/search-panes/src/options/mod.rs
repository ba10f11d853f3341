use model::{core::value::Value, records::row::RowData};
use planner::query::{ast::expr::BinaryOperator, builder::condition::ConditionBuilder};
use std::{fmt, sync::Arc};

pub mod join;
pub mod predicate;

pub use join::LeftJoin;
pub use predicate::{Predicate, PredicateFn};

/// Turns the label columns of one result row into display text.
pub type LabelRenderer = Arc<dyn Fn(&RowData) -> String + Send + Sync>;

/// A statically configured option appended after the database entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualOption {
    pub label: String,
    pub value: Value,
}

/// Configuration of one pane's option list.
///
/// Built once per field, then shared read-only by every request. Unset
/// table, value and label fall back to the editor table, the field's
/// column and the value column respectively.
#[derive(Clone, Default)]
pub struct SearchPaneOptions {
    table: Option<String>,
    value: Option<String>,
    label: Vec<String>,
    left_joins: Vec<LeftJoin>,
    predicates: Vec<Predicate>,
    manual: Vec<ManualOption>,
    order: Option<String>,
    limit: Option<u64>,
    renderer: Option<LabelRenderer>,
}

impl SearchPaneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn value(mut self, column: &str) -> Self {
        self.value = Some(column.to_string());
        self
    }

    /// Replaces the label columns. The first one is the grouped label.
    pub fn label<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn left_join(mut self, table: &str, field1: &str, operator: &str, field2: &str) -> Self {
        self.left_joins
            .push(LeftJoin::new(table, field1, operator, field2));
        self
    }

    pub fn where_clause(mut self, key: &str, value: impl Into<Value>, op: BinaryOperator) -> Self {
        self.predicates.push(Predicate::Clause {
            key: key.to_string(),
            value: value.into(),
            op,
        });
        self
    }

    pub fn where_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ConditionBuilder) + Send + Sync + 'static,
    {
        self.predicates.push(Predicate::Builder(Arc::new(f)));
        self
    }

    /// Appends a manual option; without a value the label doubles as value.
    /// Duplicates are kept.
    pub fn add(mut self, label: &str, value: Option<Value>) -> Self {
        let value = value.unwrap_or_else(|| Value::String(label.to_string()));
        self.manual.push(ManualOption {
            label: label.to_string(),
            value,
        });
        self
    }

    pub fn order(mut self, clause: &str) -> Self {
        self.order = Some(clause.to_string());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&RowData) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(f));
        self
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn value_column(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn label_columns(&self) -> &[String] {
        &self.label
    }

    pub fn left_joins(&self) -> &[LeftJoin] {
        &self.left_joins
    }

    /// The join applied to the label query. Later joins are kept but unused.
    pub fn primary_join(&self) -> Option<&LeftJoin> {
        self.left_joins.first()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn manual_additions(&self) -> &[ManualOption] {
        &self.manual
    }

    pub fn order_clause(&self) -> Option<&str> {
        self.order.as_deref()
    }

    pub fn row_limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn renderer(&self) -> Option<&LabelRenderer> {
        self.renderer.as_ref()
    }
}

impl fmt::Debug for SearchPaneOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchPaneOptions")
            .field("table", &self.table)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("left_joins", &self.left_joins)
            .field("predicates", &self.predicates)
            .field("manual", &self.manual)
            .field("order", &self.order)
            .field("limit", &self.limit)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
