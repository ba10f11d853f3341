use crate::query::{
    ast::select::{JoinClause, OrderByExpr, Select},
    renderer::{Render, Renderer},
};

/// Clauses are emitted in SQL order: SELECT, FROM, JOIN, WHERE, GROUP BY,
/// ORDER BY, LIMIT.
impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.push("SELECT ");
        r.comma_separated(&self.columns);

        if let Some(from) = &self.from {
            r.push(" FROM ");
            r.render_table_ref(&from.table);
            r.push_alias(from.alias.as_deref());
        }

        for join in &self.joins {
            r.push(" ");
            join.render(r);
        }

        if let Some(condition) = &self.where_clause {
            r.push(" WHERE ");
            condition.render(r);
        }

        if !self.group_by.is_empty() {
            r.push(" GROUP BY ");
            r.comma_separated(&self.group_by);
        }

        if !self.order_by.is_empty() {
            r.push(" ORDER BY ");
            r.comma_separated(&self.order_by);
        }

        if let Some(limit) = &self.limit {
            r.push(" LIMIT ");
            limit.render(r);
        }
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        r.push(self.kind.as_sql());
        r.push(" ");
        r.render_table_ref(&self.table);
        r.push_alias(self.alias.as_deref());
        r.push(" ON ");
        self.on.render(r);
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(direction) = &self.direction {
            r.push(" ");
            r.push(direction.as_sql());
        }
    }
}
