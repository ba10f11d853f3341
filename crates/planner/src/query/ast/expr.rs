use model::core::value::Value;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `column` or `table.column`, quoted on render.
    Identifier(Ident),
    /// Bound parameter.
    Value(Value),
    /// Raw SQL, emitted as is.
    Literal(String),
    BinaryOp(Box<BinaryOp>),
    FunctionCall(FunctionCall),
    Alias { expr: Box<Expr>, alias: String },
    IsNull { expr: Box<Expr>, negated: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

/// `name(args)`, or `name(*)` when `wildcard` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub wildcard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    And,
    Or,
}

impl BinaryOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Like => "LIKE",
            BinaryOperator::NotLike => "NOT LIKE",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = String;

    /// Comparison operators only; `AND`/`OR` are never accepted from
    /// configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_lowercase().as_str() {
            "=" | "==" => Ok(BinaryOperator::Eq),
            "!=" | "<>" => Ok(BinaryOperator::NotEq),
            "<" => Ok(BinaryOperator::Lt),
            "<=" => Ok(BinaryOperator::LtEq),
            ">" => Ok(BinaryOperator::Gt),
            ">=" => Ok(BinaryOperator::GtEq),
            "like" => Ok(BinaryOperator::Like),
            "not like" => Ok(BinaryOperator::NotLike),
            other => Err(format!("Unsupported comparison operator: {other}")),
        }
    }
}
