pub mod count;
pub mod label;

pub const LABEL_ALIAS: &str = "label";
pub const VALUE_ALIAS: &str = "value";
pub const TOTAL_ALIAS: &str = "total";
pub const COUNT_ALIAS: &str = "count";

/// Output alias of the `index`th label column: `label`, `label_1`, ...
pub fn label_alias(index: usize) -> String {
    match index {
        0 => LABEL_ALIAS.to_string(),
        n => format!("{LABEL_ALIAS}_{n}"),
    }
}
