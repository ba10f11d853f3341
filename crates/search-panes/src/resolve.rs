use crate::{editor::EditorContext, field::PaneField, options::SearchPaneOptions};

/// Table and columns of a pane after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPane {
    pub table: String,
    pub value: String,
    /// Grouped label column.
    pub label: String,
    /// Further label columns, selected alongside for rendering.
    pub extra_labels: Vec<String>,
}

impl ResolvedPane {
    pub fn label_columns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.extra_labels.iter().map(String::as_str))
    }
}

/// Fills unset table, value and label from the editor and field.
pub fn resolve(
    options: &SearchPaneOptions,
    field: &dyn PaneField,
    editor: &dyn EditorContext,
) -> ResolvedPane {
    let table = non_empty(options.table_name()).unwrap_or(editor.table());
    let value = non_empty(options.value_column()).unwrap_or(field.db_field());

    let mut labels = options
        .label_columns()
        .iter()
        .filter(|column| !column.trim().is_empty())
        .cloned();
    let label = labels.next().unwrap_or_else(|| value.to_string());

    ResolvedPane {
        table: table.to_string(),
        value: value.to_string(),
        label,
        extra_labels: labels.collect(),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use async_trait::async_trait;
    use connectors::sql::base::{
        adapter::{DatabaseKind, SqlAdapter},
        error::{ConnectorError, DbError},
    };
    use model::{core::value::Value, records::row::RowData};
    use planner::query::dialect::{Dialect, Postgres};

    struct NoDb;

    #[async_trait]
    impl SqlAdapter for NoDb {
        async fn connect(_url: &str) -> Result<Self, ConnectorError> {
            Ok(NoDb)
        }

        async fn query_rows(&self, _sql: &str, _params: Vec<Value>) -> Result<Vec<RowData>, DbError> {
            Ok(vec![])
        }

        fn dialect(&self) -> &dyn Dialect {
            &Postgres
        }

        fn kind(&self) -> DatabaseKind {
            DatabaseKind::Other("none".to_string())
        }
    }

    struct Users;

    impl EditorContext for Users {
        fn table(&self) -> &str {
            "users"
        }

        fn db(&self) -> &dyn SqlAdapter {
            &NoDb
        }
    }

    #[test]
    fn test_defaults_come_from_field_and_editor() {
        let field = Field::new("office").with_db_field("users.office");
        let pane = resolve(&SearchPaneOptions::new(), &field, &Users);

        assert_eq!(
            pane,
            ResolvedPane {
                table: "users".to_string(),
                value: "users.office".to_string(),
                label: "users.office".to_string(),
                extra_labels: vec![],
            }
        );
    }

    #[test]
    fn test_explicit_settings_win() {
        let field = Field::new("site");
        let options = SearchPaneOptions::new()
            .table("staff")
            .value("site_id")
            .label(["sites.name", "sites.code"]);
        let pane = resolve(&options, &field, &Users);

        assert_eq!(pane.table, "staff");
        assert_eq!(pane.value, "site_id");
        assert_eq!(
            pane.label_columns().collect::<Vec<_>>(),
            vec!["sites.name", "sites.code"]
        );
    }

    #[test]
    fn test_blank_label_falls_back_to_value() {
        let field = Field::new("office");
        let options = SearchPaneOptions::new().value("office_code").label([""]);
        let pane = resolve(&options, &field, &Users);

        assert_eq!(pane.label, "office_code");
        assert!(pane.extra_labels.is_empty());
    }
}
