//! Builder for grouped boolean conditions.
//!
//! Each call folds a new term into the accumulated expression, so
//! `and_where(a).or_where(b).or_where(c)` yields `((a OR b) OR c)`. Nested
//! groups are built with a fresh builder and folded in as one term, which is
//! how disjunctive blocks end up parenthesized inside an `AND` chain.

use crate::query::{
    ast::expr::{BinaryOperator, Expr},
    binary, comparison,
};
use model::core::value::Value;

#[derive(Debug, Default, Clone)]
pub struct ConditionBuilder {
    expr: Option<Expr>,
}

impl ConditionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_none()
    }

    /// `AND column <op> value`
    pub fn and_where(&mut self, column: &str, op: BinaryOperator, value: Value) -> &mut Self {
        self.and_expr(comparison(column, op, value))
    }

    /// `OR column <op> value`
    pub fn or_where(&mut self, column: &str, op: BinaryOperator, value: Value) -> &mut Self {
        self.or_expr(comparison(column, op, value))
    }

    /// `AND ( ... )`, empty groups are ignored.
    pub fn and_group(&mut self, f: impl FnOnce(&mut ConditionBuilder)) -> &mut Self {
        let mut group = ConditionBuilder::new();
        f(&mut group);
        match group.build() {
            Some(expr) => self.and_expr(expr),
            None => self,
        }
    }

    /// `OR ( ... )`, empty groups are ignored.
    pub fn or_group(&mut self, f: impl FnOnce(&mut ConditionBuilder)) -> &mut Self {
        let mut group = ConditionBuilder::new();
        f(&mut group);
        match group.build() {
            Some(expr) => self.or_expr(expr),
            None => self,
        }
    }

    pub fn and_expr(&mut self, expr: Expr) -> &mut Self {
        self.fold(BinaryOperator::And, expr)
    }

    pub fn or_expr(&mut self, expr: Expr) -> &mut Self {
        self.fold(BinaryOperator::Or, expr)
    }

    pub fn build(self) -> Option<Expr> {
        self.expr
    }

    fn fold(&mut self, op: BinaryOperator, expr: Expr) -> &mut Self {
        self.expr = Some(match self.expr.take() {
            Some(existing) => binary(existing, op, expr),
            None => expr,
        });
        self
    }
}
