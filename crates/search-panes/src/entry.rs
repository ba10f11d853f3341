use model::core::value::Value;
use serde::{Serialize, Serializer};

/// One selectable pane option.
///
/// Manual options carry no `total`/`count`; the keys are left out of the
/// serialized form rather than zeroed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaneOption {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(serialize_with = "serialize_value")]
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl PaneOption {
    pub fn counted(label: String, value: Value, total: i64, count: i64) -> Self {
        Self {
            label,
            total: Some(total),
            value,
            count: Some(count),
        }
    }

    pub fn manual(label: String, value: Value) -> Self {
        Self {
            label,
            total: None,
            value,
            count: None,
        }
    }
}

fn serialize_value<S: Serializer>(value: &Value, serializer: S) -> Result<S::Ok, S::Error> {
    value.to_json().serialize(serializer)
}
