use crate::query::ast::expr::{BinaryOp, BinaryOperator, Expr, FunctionCall, Ident};
use model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod macros;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}

/// Turns a configured column reference into an expression.
///
/// Plain `column` and `table.column` paths become quoted identifiers; anything
/// else (function calls, arithmetic, `schema.table.column`) is passed through
/// verbatim.
pub fn column(raw: &str) -> Expr {
    let raw = raw.trim();
    let parts: Vec<&str> = raw.split('.').collect();
    if !parts.iter().all(|p| is_plain_identifier(p)) {
        return Expr::Literal(raw.to_string());
    }

    match parts.as_slice() {
        [name] => ident(name),
        [qualifier, name] => Expr::Identifier(Ident {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        }),
        _ => Expr::Literal(raw.to_string()),
    }
}

pub fn alias(expr: Expr, alias: &str) -> Expr {
    Expr::Alias {
        expr: Box::new(expr),
        alias: alias.to_string(),
    }
}

pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
}

/// `COUNT(*)`
pub fn count_all() -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: "COUNT".to_string(),
        args: vec![],
        wildcard: true,
    })
}

/// Builds `column <op> value`, mapping comparisons against NULL to
/// `IS NULL` / `IS NOT NULL`.
pub fn comparison(column_ref: &str, op: BinaryOperator, val: Value) -> Expr {
    let left = column(column_ref);
    match (&op, val.is_null()) {
        (BinaryOperator::Eq, true) => Expr::IsNull {
            expr: Box::new(left),
            negated: false,
        },
        (BinaryOperator::NotEq, true) => Expr::IsNull {
            expr: Box::new(left),
            negated: true,
        },
        _ => binary(left, op, value(val)),
    }
}

fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_paths() {
        assert_eq!(column("office"), ident("office"));
        assert_eq!(
            column(" users.office "),
            Expr::Identifier(Ident {
                qualifier: Some("users".to_string()),
                name: "office".to_string(),
            })
        );
        assert_eq!(
            column("CONCAT(first, ' ', last)"),
            Expr::Literal("CONCAT(first, ' ', last)".to_string())
        );
        assert_eq!(column("a.b.c"), Expr::Literal("a.b.c".to_string()));
        assert_eq!(column("1col"), Expr::Literal("1col".to_string()));
    }

    #[test]
    fn test_comparison_with_null() {
        assert!(matches!(
            comparison("deleted_at", BinaryOperator::Eq, Value::Null),
            Expr::IsNull { negated: false, .. }
        ));
        assert!(matches!(
            comparison("deleted_at", BinaryOperator::NotEq, Value::Null),
            Expr::IsNull { negated: true, .. }
        ));
        assert!(matches!(
            comparison("age", BinaryOperator::Gt, Value::Int(3)),
            Expr::BinaryOp(_)
        ));
    }
}
