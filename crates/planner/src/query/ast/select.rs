use crate::query::ast::{
    common::{JoinKind, OrderDir, TableRef},
    expr::Expr,
};

/// A single-table `SELECT` with optional joins, filtering, grouping,
/// ordering and a row cap.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    pub columns: Vec<Expr>,
    pub from: Option<FromClause>,
    pub joins: Vec<JoinClause>,
    /// All restrictions folded into one expression.
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table: TableRef,
    pub alias: Option<String>,
    pub on: Expr,
}

/// `expr [ASC|DESC]`; raw order fragments carry no direction of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<OrderDir>,
}
