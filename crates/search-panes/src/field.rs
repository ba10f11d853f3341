use model::core::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    Get,
    Create,
    Edit,
}

/// A form field that can take part in search panes.
pub trait PaneField: Send + Sync {
    /// Name used in the request payload.
    fn name(&self) -> &str;

    /// Database column backing the field.
    fn db_field(&self) -> &str;

    /// Whether the field participates in the given action.
    fn apply(&self, action: FieldAction) -> bool;

    /// Server-side fixed value, if any. A pinned field has no meaningful
    /// per-value counts.
    fn value(&self) -> Option<&Value>;
}

#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    db_field: String,
    get: bool,
    set: bool,
    value: Option<Value>,
}

impl Field {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            db_field: name.to_string(),
            get: true,
            set: true,
            value: None,
        }
    }

    pub fn with_db_field(mut self, db_field: &str) -> Self {
        self.db_field = db_field.to_string();
        self
    }

    pub fn readable(mut self, get: bool) -> Self {
        self.get = get;
        self
    }

    pub fn writable(mut self, set: bool) -> Self {
        self.set = set;
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

impl PaneField for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn db_field(&self) -> &str {
        &self.db_field
    }

    fn apply(&self, action: FieldAction) -> bool {
        match action {
            FieldAction::Get => self.get,
            FieldAction::Create | FieldAction::Edit => self.set,
        }
    }

    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_defaults_to_own_name_as_column() {
        let field = Field::new("office");
        assert_eq!(field.db_field(), "office");
        assert!(field.apply(FieldAction::Get));
        assert!(field.value().is_none());

        let field = Field::new("site").with_db_field("users.site").writable(false);
        assert_eq!(field.db_field(), "users.site");
        assert!(!field.apply(FieldAction::Edit));
        assert!(field.apply(FieldAction::Get));
    }
}
