//! Render projection.
//!
//! [`TableView`] is a flat, owned description of what to draw for the current
//! state. A renderer only needs this value; it never looks at the state or the
//! engines directly.

use serde::Serialize;

use crate::column::Column;
use crate::config::TableOptions;
use crate::controller::ModeKind;
use crate::header::HeaderCell;
use crate::layout;
use crate::paginator::{self, Pagination};
use crate::row::{Row, RowId};
use crate::sort::Sort;
use crate::state::TableState;
use crate::value::CellValue;

/// A hidden column's value shown in a row's detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    /// Accessor of the hidden column.
    pub accessor: String,
    /// Label of the hidden column.
    pub label: String,
    /// The row's value for it.
    pub value: CellValue,
}

/// One row of the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    /// Index into the current row set; pass it to
    /// [`TableEvent::ExpandRow`](crate::controller::TableEvent::ExpandRow).
    pub index: usize,
    /// Row identity.
    pub id: RowId,
    /// Values of the visible columns, in registry order.
    pub cells: Vec<CellValue>,
    /// Whether the detail panel is open.
    pub expanded: bool,
    /// Values of the hidden columns, in registry order.
    pub details: Vec<Detail>,
}

impl RowView {
    fn new(index: usize, row: &Row, columns: &[Column]) -> Self {
        Self {
            index,
            id: row.id(),
            cells: layout::visible_columns(columns)
                .map(|c| row.get(&c.accessor).clone())
                .collect(),
            expanded: row.is_expanded(),
            details: layout::hidden_columns(columns)
                .map(|c| Detail {
                    accessor: c.accessor.clone(),
                    label: c.label.clone(),
                    value: row.get(&c.accessor).clone(),
                })
                .collect(),
        }
    }

    /// Returns whether the row has anything to expand.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        !self.details.is_empty()
    }
}

/// Pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    /// Pagination descriptor.
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Whether the previous-page control is enabled.
    pub can_previous: bool,
    /// Whether the next-page control is enabled.
    pub can_next: bool,
}

impl From<&Pagination> for PaginationView {
    fn from(pagination: &Pagination) -> Self {
        Self {
            can_previous: !pagination.on_first_page(),
            can_next: !pagination.on_last_page(),
            pagination: pagination.clone(),
        }
    }
}

/// Everything needed to draw a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    /// Element id.
    pub id: Option<String>,
    /// Theme identifier.
    pub theme: String,
    /// Headers of the visible columns.
    pub headers: Vec<HeaderCell>,
    /// Columns folded into detail panels.
    pub hidden_columns: Vec<Column>,
    /// Rows of the current page.
    pub rows: Vec<RowView>,
    /// Current sort.
    pub sort: Sort,
    /// Pagination controls.
    pub pagination: PaginationView,
    /// Current search query.
    pub search_string: String,
    /// Whether the table currently folds columns.
    pub collapsible: bool,
    /// Whether to draw the search box.
    pub show_search: bool,
    /// Whether to draw the pagination controls.
    pub show_pagination: bool,
}

impl TableView {
    /// Projects `state`.
    #[must_use]
    pub fn new(
        state: &TableState,
        mode: ModeKind,
        options: &TableOptions,
        headers: Vec<HeaderCell>,
    ) -> Self {
        let (offset, page) = match mode {
            ModeKind::Client => {
                let (start, _) = paginator::page_bounds(&state.pagination, state.rows.len());
                (start, paginator::calculate_rows(state))
            }
            ModeKind::Server => (0, state.rows.as_slice()),
        };

        Self {
            id: options.id.clone(),
            theme: options.theme.clone(),
            headers,
            hidden_columns: layout::hidden_columns(&state.columns).cloned().collect(),
            rows: page
                .iter()
                .enumerate()
                .map(|(i, row)| RowView::new(offset + i, row, &state.columns))
                .collect(),
            sort: state.sort.clone(),
            pagination: PaginationView::from(&state.pagination),
            search_string: state.search_string.clone(),
            collapsible: state.collapsible,
            show_search: options.show_search,
            show_pagination: options.show_pagination,
        }
    }

    /// Number of visible columns, e.g. for a detail row's column span.
    #[must_use]
    pub fn column_span(&self) -> usize {
        self.headers.len()
    }
}
