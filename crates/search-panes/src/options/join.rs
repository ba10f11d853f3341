use serde::{Deserialize, Serialize};

/// `LEFT JOIN table ON field1 <operator> field2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftJoin {
    pub table: String,
    pub field1: String,
    pub operator: String,
    pub field2: String,
}

impl LeftJoin {
    pub fn new(table: &str, field1: &str, operator: &str, field2: &str) -> Self {
        Self {
            table: table.to_string(),
            field1: field1.to_string(),
            operator: operator.to_string(),
            field2: field2.to_string(),
        }
    }
}
