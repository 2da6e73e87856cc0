#![forbid(unsafe_code)]

//! Case-insensitive substring matching over records.
//!
//! # Invariants
//!
//! - A record matches iff its lowercased `value` contains the lowercased query.
//! - No trimming, ranking or fuzzy matching; output keeps the input order.
//! - The empty query matches every record.

use crate::contains_ignore_case;
use crate::record::Record;

/// Indices of the records whose `value` contains `query`, in list order.
#[must_use]
pub fn match_indices(records: &[Record], query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            contains_ignore_case(&record.value, &query_lower).then_some(idx)
        })
        .collect()
}
