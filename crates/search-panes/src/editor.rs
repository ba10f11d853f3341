use connectors::sql::base::adapter::SqlAdapter;
use std::sync::Arc;

/// Table and database defaults supplied by the hosting editor.
pub trait EditorContext: Send + Sync {
    fn table(&self) -> &str;
    fn db(&self) -> &dyn SqlAdapter;
}

#[derive(Clone)]
pub struct Editor {
    table: String,
    db: Arc<dyn SqlAdapter>,
}

impl Editor {
    pub fn new(table: &str, db: Arc<dyn SqlAdapter>) -> Self {
        Self {
            table: table.to_string(),
            db,
        }
    }
}

impl EditorContext for Editor {
    fn table(&self) -> &str {
        &self.table
    }

    fn db(&self) -> &dyn SqlAdapter {
        self.db.as_ref()
    }
}
