//! Row records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// A row record: column accessor to cell value.
pub type Record = BTreeMap<String, CellValue>;

static EMPTY: CellValue = CellValue::Empty;

/// Stable identity of a row: its position in the set it was ingested with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub usize);

/// A row in the table.
///
/// The record is opaque to the engine. `expanded` tracks whether the detail
/// panel for the row's hidden columns is open; it travels with the row when
/// the row set is sorted or filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    id: RowId,
    record: Record,
    #[serde(default)]
    expanded: bool,
}

impl Row {
    /// Creates a collapsed row.
    pub fn new(id: RowId, record: Record) -> Self {
        Self {
            id,
            record,
            expanded: false,
        }
    }

    /// Returns the row identity.
    #[must_use]
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Returns the value stored under `accessor`, or [`CellValue::Empty`].
    #[must_use]
    pub fn get(&self, accessor: &str) -> &CellValue {
        self.record.get(accessor).unwrap_or(&EMPTY)
    }

    /// Returns the underlying record.
    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Returns whether the detail panel is open.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

/// Wraps plain records into rows, numbering them in input order.
pub fn rows_from_records(records: Vec<Record>) -> Vec<Row> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| Row::new(RowId(i), record))
        .collect()
}

/// Builds a record from `(accessor, value)` pairs.
///
/// # Example
///
/// ```rust
/// use collapsible_table::row::record;
/// use collapsible_table::value::CellValue;
///
/// let r = record([("name", CellValue::from("Bea")), ("age", CellValue::from(31))]);
/// assert_eq!(r["name"].to_string(), "Bea");
/// ```
pub fn record<K, I>(pairs: I) -> Record
where
    K: Into<String>,
    I: IntoIterator<Item = (K, CellValue)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
