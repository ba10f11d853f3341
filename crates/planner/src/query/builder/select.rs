//! Typestate builder for [`Select`]. Clauses that need a table only become
//! available once `from` has been called.

use crate::query::{
    ast::{
        common::{JoinKind, OrderDir, TableRef},
        expr::{BinaryOperator, Expr},
        select::{FromClause, JoinClause, OrderByExpr, Select},
    },
    binary,
};

#[derive(Debug, Default, Clone)]
pub struct InitialState;

#[derive(Debug, Default, Clone)]
pub struct SelectState;

#[derive(Debug, Default, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    pub ast: Select,
    _state: State,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> SelectBuilder<State> {
    fn advance<Next>(self, state: Next) -> SelectBuilder<Next> {
        SelectBuilder {
            ast: self.ast,
            _state: state,
        }
    }
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            _state: InitialState,
        }
    }

    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        self.advance(SelectState)
    }
}

impl SelectBuilder<SelectState> {
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(str::to_string),
        });
        self.advance(FromState)
    }
}

impl SelectBuilder<FromState> {
    /// Appends to the select list.
    pub fn column(mut self, expr: Expr) -> Self {
        self.ast.columns.push(expr);
        self
    }

    pub fn join(mut self, kind: JoinKind, table: TableRef, alias: Option<&str>, on: Expr) -> Self {
        self.ast.joins.push(JoinClause {
            kind,
            table,
            alias: alias.map(str::to_string),
            on,
        });
        self
    }

    /// ANDs `condition` onto the existing restriction.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(match self.ast.where_clause.take() {
            Some(existing) => binary(existing, BinaryOperator::And, condition),
            None => condition,
        });
        self
    }

    pub fn group_by(mut self, expr: Expr) -> Self {
        self.ast.group_by.push(expr);
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    /// Appends a caller-written ORDER BY fragment, emitted verbatim.
    pub fn order_raw(self, clause: &str) -> Self {
        self.order_by(Expr::Literal(clause.trim().to_string()), None)
    }

    pub fn limit(mut self, limit: Expr) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{column, comparison, count_all, value};
    use model::core::value::Value;

    #[test]
    fn test_where_clauses_fold_with_and() {
        let active = comparison("active", BinaryOperator::Eq, Value::Boolean(true));
        let adult = comparison("age", BinaryOperator::GtEq, Value::Int(18));

        let select = SelectBuilder::new()
            .select(vec![column("office")])
            .from(TableRef::parse("users"), None)
            .where_clause(active.clone())
            .where_clause(adult.clone())
            .build();

        assert_eq!(
            select.where_clause,
            Some(binary(active, BinaryOperator::And, adult))
        );
    }

    #[test]
    fn test_columns_appended_after_from() {
        let select = SelectBuilder::new()
            .select(vec![column("office"), count_all()])
            .from(TableRef::parse("users"), Some("u"))
            .column(column("hired_at"))
            .group_by(column("office"))
            .order_raw("  hired_at desc ")
            .limit(value(Value::Int(5)))
            .build();

        assert_eq!(select.columns.len(), 3);
        assert_eq!(select.columns[2], column("hired_at"));
        assert_eq!(select.from.map(|f| f.alias), Some(Some("u".to_string())));
        assert_eq!(
            select.order_by,
            vec![OrderByExpr {
                expr: Expr::Literal("hired_at desc".to_string()),
                direction: None,
            }]
        );
        assert_eq!(select.limit, Some(value(Value::Int(5))));
    }

    #[test]
    fn test_join_is_recorded() {
        let on = crate::query::binary(column("s.id"), BinaryOperator::Eq, column("u.site"));
        let select = SelectBuilder::new()
            .select(vec![column("s.name")])
            .from(TableRef::parse("users"), Some("u"))
            .join(JoinKind::Left, TableRef::parse("sites"), Some("s"), on.clone())
            .build();

        assert_eq!(
            select.joins,
            vec![JoinClause {
                kind: JoinKind::Left,
                table: TableRef::parse("sites"),
                alias: Some("s".to_string()),
                on,
            }]
        );
    }
}
