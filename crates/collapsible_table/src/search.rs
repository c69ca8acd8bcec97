//! Search engine.
//!
//! Case-insensitive substring filter across every column of the registry,
//! visible or hidden. Filtering always starts from the original row set, so
//! editing the query never compounds earlier filters.

use crate::column::Column;
use crate::row::Row;

/// Returns the rows of `original` matching `query`, in original order.
///
/// A row matches when the stringified value of any column contains `query`,
/// ignoring case. An empty query matches every row.
#[must_use]
pub fn search(query: &str, original: &[Row], columns: &[Column]) -> Vec<Row> {
    if query.is_empty() {
        return original.to_vec();
    }

    let needle = query.to_lowercase();
    let filtered: Vec<Row> = original
        .iter()
        .filter(|row| row_matches(row, &needle, columns))
        .cloned()
        .collect();

    tracing::debug!(query, matched = filtered.len(), total = original.len(), "searched rows");
    filtered
}

fn row_matches(row: &Row, needle: &str, columns: &[Column]) -> bool {
    columns.iter().any(|column| {
        row.get(&column.accessor)
            .to_string()
            .to_lowercase()
            .contains(needle)
    })
}

/// Clears the query: the original rows come back untouched.
#[must_use]
pub fn clear_search(original: &[Row]) -> Vec<Row> {
    original.to_vec()
}
