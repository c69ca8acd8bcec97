//! Sort engine.
//!
//! Single-column sort. Clicking the sorted column flips its direction between
//! ascending and descending; clicking another column sorts by it ascending.
//! Once a column has been clicked the direction never settles back on
//! [`Direction::None`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::{self, Column};
use crate::row::Row;
use crate::search;
use crate::state::TableState;
use crate::value::compare_values;

/// Sort direction for the sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
    /// Not sorted.
    None,
}

impl Direction {
    /// Direction after another click on the same column.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending | Self::None => Self::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
            Self::None => write!(f, "none"),
        }
    }
}

/// The current sort: which column and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sort {
    /// Accessor of the sorted column, if any.
    pub column: Option<String>,
    /// Direction applied to `column`.
    pub direction: Direction,
}

impl Sort {
    /// Creates a sort on `column`.
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: Some(column.into()),
            direction,
        }
    }

    /// Direction shown for `accessor`: the sort direction when it is the sorted
    /// column, [`Direction::None`] otherwise.
    #[must_use]
    pub fn direction_for(&self, accessor: &str) -> Direction {
        if self.column.as_deref() == Some(accessor) {
            self.direction
        } else {
            Direction::None
        }
    }
}

/// Computes the sort produced by clicking `clicked`.
#[must_use]
pub fn next_sort(clicked: &str, current: &Sort) -> Sort {
    if current.column.as_deref() == Some(clicked) {
        Sort::new(clicked, current.direction.cycled())
    } else {
        Sort::new(clicked, Direction::Ascending)
    }
}

/// Client-mode sort: reorders the current row set.
///
/// The rows are rebuilt from the ingested rows under the current search, so
/// ties keep their original order whatever was sorted before.
///
/// Returns `None` when `clicked` is unknown or not sortable; callers treat
/// that as a no-op.
#[must_use]
pub fn sort_rows(clicked: &str, state: &TableState) -> Option<(Vec<Row>, Sort)> {
    let sort = request_sort(clicked, state)?;
    let rows = arrange(&state.search_string, &state.source_rows, &state.columns, &sort);
    tracing::debug!(column = clicked, direction = %sort.direction, rows = rows.len(), "sorted rows");
    Some((rows, sort))
}

/// Server-mode sort: computes the sort to request without touching rows.
#[must_use]
pub fn request_sort(clicked: &str, state: &TableState) -> Option<Sort> {
    match column::find(&state.columns, clicked) {
        Some(c) if c.sortable => Some(next_sort(clicked, &state.sort)),
        Some(_) => {
            tracing::debug!(column = clicked, "ignoring click on non-sortable column");
            None
        }
        None => {
            tracing::warn!(column = clicked, "ignoring click on unknown column");
            None
        }
    }
}

/// Returns `rows` stably ordered by `sort`.
#[must_use]
pub fn apply_sort(rows: &[Row], sort: &Sort) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    match sort.column.as_deref() {
        Some(accessor) if sort.direction != Direction::None => {
            sorted.sort_by(|a, b| compare_rows(a, b, accessor, sort.direction));
        }
        _ => {}
    }
    sorted
}

/// Client row set: the rows of `source` matching `query`, ordered by `sort`.
#[must_use]
pub fn arrange(query: &str, source: &[Row], columns: &[Column], sort: &Sort) -> Vec<Row> {
    apply_sort(&search::search(query, source, columns), sort)
}

fn compare_rows(a: &Row, b: &Row, accessor: &str, direction: Direction) -> Ordering {
    let ordering = compare_values(a.get(accessor), b.get(accessor));
    match direction {
        Direction::Descending => ordering.reverse(),
        Direction::Ascending | Direction::None => ordering,
    }
}
