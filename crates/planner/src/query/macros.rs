/// `table_ref!("schema.table")`
#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::query::ast::common::TableRef::parse($name)
    };
}
