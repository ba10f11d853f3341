use model::core::value::Value;
use planner::query::{
    ast::select::Select,
    dialect::Dialect,
    renderer::{Render, Renderer},
};

pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Generates a SQL SELECT statement and its parameters.
    pub fn select(&self, select: &Select) -> (String, Vec<Value>) {
        self.render_ast(select)
    }

    fn render_ast(&self, ast: &impl Render) -> (String, Vec<Value>) {
        let mut renderer = Renderer::new(self.dialect);
        ast.render(&mut renderer);
        renderer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner::query::{
        alias, builder::select::SelectBuilder, column, count_all, dialect::Postgres,
    };
    use planner::table_ref;

    #[test]
    fn test_select_renders_with_dialect() {
        let select = SelectBuilder::new()
            .select(vec![alias(column("office"), "value"), alias(count_all(), "count")])
            .from(table_ref!("public.users"), None)
            .group_by(column("office"))
            .build();

        let (sql, params) = QueryGenerator::new(&Postgres).select(&select);
        assert_eq!(
            sql,
            r#"SELECT "office" AS "value", COUNT(*) AS "count" FROM "public"."users" GROUP BY "office""#
        );
        assert!(params.is_empty());
    }
}
