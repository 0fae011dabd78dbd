//! Distinct-value extraction
//!
//! Scans one text column across all data records, accumulates the distinct
//! values in order of first appearance, then sorts them with digit-leading
//! values ahead of letter-leading ones. A parallel quote-stripped list is
//! produced after sorting so stripping cannot perturb the order.

use std::cmp::Ordering;

use tracing::debug;

use crate::record::AqsRecord;
use crate::store::RecordStore;

/// Duplicate detection for the accumulating distinct list.
///
/// Pluggable so callers with large candidate sets can swap in a hashed
/// implementation without changing the extraction contract.
pub trait DuplicateCheck {
    /// Record `value` and report whether it was already present.
    fn seen(&mut self, value: &str) -> bool;
}

/// Full-list linear scan. Quadratic over the distinct count, which stays in
/// the low hundreds for real AQS extracts even when record counts are large.
#[derive(Debug, Default)]
pub struct LinearScan {
    accepted: Vec<String>,
}

impl DuplicateCheck for LinearScan {
    fn seen(&mut self, value: &str) -> bool {
        if self.accepted.iter().any(|v| v == value) {
            return true;
        }
        self.accepted.push(value.to_string());
        false
    }
}

/// Distinct values of the parameter-name column, sorted.
pub fn distinct_parameter_names(store: &RecordStore) -> Vec<String> {
    distinct_values(store, &mut LinearScan::default(), |r| &r.parameter_name)
}

/// Distinct values of one text column across all data records (the header
/// record is excluded), sorted with [`compare_values`].
pub fn distinct_values<F>(
    store: &RecordStore,
    dedup: &mut dyn DuplicateCheck,
    select: F,
) -> Vec<String>
where
    F: Fn(&AqsRecord) -> &str,
{
    let mut values = Vec::new();
    for record in store.data_records() {
        let value = select(record);
        if !dedup.seen(value) {
            values.push(value.to_string());
        }
    }

    values.sort_by(|a, b| compare_values(a, b));
    debug!("extracted {} distinct values", values.len());
    values
}

/// Digit-leading values sort ahead of letter-leading values; within each
/// class, plain lexicographic order.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    let a_digit = a.chars().next().is_some_and(|c| c.is_ascii_digit());
    let b_digit = b.chars().next().is_some_and(|c| c.is_ascii_digit());

    match (a_digit, b_digit) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

/// Parallel list with every embedded `"` removed from each value.
pub fn strip_quotes(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.replace('"', "")).collect()
}
