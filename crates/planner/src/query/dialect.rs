//! Identifier quoting and placeholder syntax per database.

pub trait Dialect: Send + Sync {
    /// Quotes `ident`, doubling any embedded quote character.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Placeholder for the zero-based `index`th bound parameter.
    fn placeholder(&self, index: usize) -> String;

    fn name(&self) -> &'static str;
}

/// `"ident"`, `$1`
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_with(ident, '"')
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn name(&self) -> &'static str {
        "PostgreSQL"
    }
}

/// `` `ident` ``, `?`
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        quote_with(ident, '`')
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn name(&self) -> &'static str {
        "MySQL"
    }
}

fn quote_with(ident: &str, quote: char) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    out.push(quote);
    for c in ident.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out.push(quote);
    out
}
