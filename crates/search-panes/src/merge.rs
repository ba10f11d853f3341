//! Correlates label and count rows and produces the final option list.

use crate::{
    entry::PaneOption,
    options::ManualOption,
    query::{count::CountRow, label::LabelRow},
};
use model::core::utils::parse_number;
use std::{cmp::Ordering, collections::HashMap};

/// Merges the two result sets.
///
/// Each label row gets the count of the loosely equal count row (first one
/// wins) or 0. Manual options follow the database rows. Without `ordered`
/// the whole list is then sorted with [`sort_by_label`].
pub fn finalize(
    labels: Vec<LabelRow>,
    counts: &[CountRow],
    manual: &[ManualOption],
    ordered: bool,
) -> Vec<PaneOption> {
    let mut by_value: HashMap<String, i64> = HashMap::with_capacity(counts.len());
    for row in counts {
        by_value.entry(row.value.loose_key()).or_insert(row.count);
    }

    let mut out: Vec<PaneOption> = labels
        .into_iter()
        .map(|row| {
            let count = by_value.get(&row.value.loose_key()).copied().unwrap_or(0);
            PaneOption::counted(row.label, row.value, row.total, count)
        })
        .collect();

    out.extend(
        manual
            .iter()
            .map(|m| PaneOption::manual(m.label.clone(), m.value.clone())),
    );

    if !ordered {
        sort_by_label(&mut out);
    }
    out
}

/// Stable sort by label. Labels compare numerically when every label in the
/// list parses as a number, as plain strings otherwise.
pub fn sort_by_label(options: &mut [PaneOption]) {
    let numeric = options.iter().all(|o| parse_number(&o.label).is_some());
    options.sort_by(|a, b| compare_labels(&a.label, &b.label, numeric));
}

pub fn compare_labels(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        if let (Some(x), Some(y)) = (parse_number(a), parse_number(b)) {
            return x.total_cmp(&y);
        }
    }
    a.cmp(b)
}
