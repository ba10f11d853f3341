use crate::query::{
    ast::expr::{BinaryOp, Expr, FunctionCall, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::Literal(raw) => r.push(raw),
            Expr::BinaryOp(op) => op.render(r),
            Expr::FunctionCall(call) => call.render(r),
            Expr::Alias { expr, alias } => {
                expr.render(r);
                r.push_alias(Some(alias));
            }
            Expr::IsNull { expr, negated } => {
                expr.render(r);
                r.push(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.push_ident(qualifier);
            r.push(".");
        }
        r.push_ident(&self.name);
    }
}

/// Always parenthesized, so nested AND/OR groups keep their meaning.
impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        r.push("(");
        self.left.render(r);
        r.push(" ");
        r.push(self.op.as_sql());
        r.push(" ");
        self.right.render(r);
        r.push(")");
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        r.push(&self.name);
        r.push("(");
        if self.wildcard {
            r.push("*");
        } else {
            r.comma_separated(&self.args);
        }
        r.push(")");
    }
}
