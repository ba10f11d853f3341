//! SQL text generation. Values are never inlined; each one becomes a
//! dialect placeholder and is collected in `params` in order.

use crate::query::{ast::common::TableRef, dialect::Dialect};
use model::core::value::Value;

pub mod expr;
pub mod select;

pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn push(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    pub fn push_ident(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    /// ` AS "alias"` when an alias is present.
    pub fn push_alias(&mut self, alias: Option<&str>) {
        if let Some(alias) = alias {
            self.push(" AS ");
            self.push_ident(alias);
        }
    }

    /// Binds `value` and writes its placeholder.
    pub fn add_param(&mut self, value: Value) {
        let placeholder = self.dialect.placeholder(self.params.len());
        self.params.push(value);
        self.sql.push_str(&placeholder);
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(schema) = &table.schema {
            self.push_ident(schema);
            self.push(".");
        }
        self.push_ident(&table.name);
    }

    pub fn comma_separated<T: Render>(&mut self, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            item.render(self);
        }
    }
}
