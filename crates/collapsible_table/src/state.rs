//! Table display state.
//!
//! [`TableState`] is the single snapshot every engine reads from. Engines never
//! mutate it; they return replacement values that the controller assembles into
//! the next state.

use crate::column::{self, Column};
use crate::error::{Result, TableError};
use crate::paginator::Pagination;
use crate::resize::ViewportSize;
use crate::row::Row;
use crate::sort::{Direction, Sort};

/// Aggregate display state owned by the table controller.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// Column registry, with visibility from the last layout pass.
    pub(crate) columns: Vec<Column>,
    /// Rows as ingested: the base every search starts from.
    pub(crate) source_rows: Vec<Row>,
    /// Current row set: sorted and filtered in client mode, the current page in
    /// server mode.
    pub(crate) rows: Vec<Row>,
    pub(crate) pagination: Pagination,
    pub(crate) sort: Sort,
    pub(crate) search_string: String,
    /// Whether narrow viewports fold low-priority columns away.
    pub(crate) collapsible: bool,
    /// Last viewport size seen, replayed when columns or the collapsible mode
    /// change.
    pub(crate) viewport: Option<ViewportSize>,
}

impl TableState {
    /// Builds a client-mode state with default sort and the first page.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidRowSize`] when `row_size` is zero.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, row_size: usize) -> Result<Self> {
        if row_size == 0 {
            return Err(TableError::InvalidRowSize(row_size));
        }
        let sort = Sort {
            column: column::default_sort_column(&columns).map(str::to_string),
            direction: Direction::Ascending,
        };
        Ok(Self {
            pagination: Pagination::client(rows.len(), row_size, 1),
            columns,
            source_rows: rows.clone(),
            rows,
            sort,
            search_string: String::new(),
            collapsible: true,
            viewport: None,
        })
    }

    /// Column registry in registry order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Current row set (sorted and filtered, not paged).
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows as originally supplied.
    #[must_use]
    pub fn source_rows(&self) -> &[Row] {
        &self.source_rows
    }

    /// Pagination descriptor.
    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Current sort.
    #[must_use]
    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Current search query.
    #[must_use]
    pub fn search_string(&self) -> &str {
        &self.search_string
    }

    /// Whether collapsible layout is on.
    #[must_use]
    pub fn collapsible(&self) -> bool {
        self.collapsible
    }

    /// Last viewport size applied to the layout.
    #[must_use]
    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    /// Indices into [`rows`](Self::rows) whose detail panel is open.
    #[must_use]
    pub fn expanded_row_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_expanded())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnDef, ingest_columns};

    #[test]
    fn rejects_zero_row_size() {
        let err = TableState::new(Vec::new(), Vec::new(), 0).unwrap_err();
        assert_eq!(err, TableError::InvalidRowSize(0));
    }

    #[test]
    fn defaults_sort_to_highest_priority_column() {
        let columns = ingest_columns(vec![
            ColumnDef::new("age", "Age", 2),
            ColumnDef::new("firstName", "First Name", 1),
        ])
        .unwrap();
        let state = TableState::new(columns, Vec::new(), 10).unwrap();
        assert_eq!(state.sort(), &Sort::new("firstName", Direction::Ascending));
        assert_eq!(state.pagination().current_page, 1);
        assert_eq!(state.pagination().total_pages, 1);
        assert!(state.expanded_row_indices().is_empty());
    }
}
