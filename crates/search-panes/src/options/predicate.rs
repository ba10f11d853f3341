use model::core::value::Value;
use planner::query::{ast::expr::BinaryOperator, builder::condition::ConditionBuilder};
use std::{fmt, sync::Arc};

pub type PredicateFn = Arc<dyn Fn(&mut ConditionBuilder) + Send + Sync>;

/// A static restriction on the label and count queries.
#[derive(Clone)]
pub enum Predicate {
    /// `key <op> value`
    Clause {
        key: String,
        value: Value,
        op: BinaryOperator,
    },
    /// Free-form condition, typically an `or_where` chain. An empty builder
    /// adds nothing.
    Builder(PredicateFn),
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Clause { key, value, op } => f
                .debug_struct("Clause")
                .field("key", key)
                .field("value", value)
                .field("op", op)
                .finish(),
            Predicate::Builder(_) => f.write_str("Builder(<fn>)"),
        }
    }
}
