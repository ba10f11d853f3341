//! Applies configured predicates and joins to a query under construction.

use crate::options::{LeftJoin, Predicate};
use connectors::sql::base::error::DbError;
use planner::query::{
    ast::{
        common::{JoinKind, TableRef},
        expr::BinaryOperator,
    },
    binary,
    builder::{
        condition::ConditionBuilder,
        select::{FromState, SelectBuilder},
    },
    column, comparison,
};
use planner::table_ref;

/// ANDs every predicate onto the query in declaration order.
pub fn apply_predicates(
    mut query: SelectBuilder<FromState>,
    predicates: &[Predicate],
) -> SelectBuilder<FromState> {
    for predicate in predicates {
        let condition = match predicate {
            Predicate::Clause { key, value, op } => Some(comparison(key, op.clone(), value.clone())),
            Predicate::Builder(f) => {
                let mut cond = ConditionBuilder::new();
                f(&mut cond);
                cond.build()
            }
        };

        if let Some(expr) = condition {
            query = query.where_clause(expr);
        }
    }
    query
}

/// Adds `LEFT JOIN` for `join`, if any.
pub fn apply_join(
    query: SelectBuilder<FromState>,
    join: Option<&LeftJoin>,
) -> Result<SelectBuilder<FromState>, DbError> {
    let Some(join) = join else {
        return Ok(query);
    };

    let op = join
        .operator
        .parse::<BinaryOperator>()
        .map_err(DbError::QueryBuildError)?;
    let (table, alias) = table_with_alias(&join.table);
    let on = binary(column(&join.field1), op, column(&join.field2));

    Ok(query.join(JoinKind::Left, table, alias, on))
}

/// Splits `users u` / `users AS u` into the table and its alias.
pub fn table_with_alias(raw: &str) -> (TableRef, Option<&str>) {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    match parts.as_slice() {
        [table, kw, alias] if kw.eq_ignore_ascii_case("as") => {
            (table_ref!(table), Some(*alias))
        }
        [table, alias] => (table_ref!(table), Some(*alias)),
        _ => (table_ref!(raw), None),
    }
}
