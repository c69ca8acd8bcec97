//! Pagination engine.
//!
//! Pages are 1-indexed. `current_page` always lies in `[1, total_pages]` and
//! `total_pages` is never zero. `inputted_page` mirrors the raw text of a page
//! number input box and may hold anything, including values out of range,
//! until the user confirms it.
//!
//! # Example
//!
//! ```rust
//! use collapsible_table::paginator::{Pagination, next_page, page_bounds};
//!
//! let pagination = Pagination::client(25, 10, 1);
//! assert_eq!(pagination.total_pages, 3);
//!
//! let last = next_page(&next_page(&pagination));
//! assert_eq!(last.current_page, 3);
//! assert_eq!(page_bounds(&last, 25), (20, 25));
//!
//! // Already on the last page
//! assert_eq!(next_page(&last).current_page, 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::key::{KeyMap, matches};
use crate::row::Row;
use crate::state::TableState;

/// Default number of rows per page.
pub const DEFAULT_ROW_SIZE: usize = 10;

/// Pagination descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Rows per page, at least 1.
    pub row_size: usize,
    /// Current page (1-indexed).
    pub current_page: usize,
    /// Raw value of the page input box.
    pub inputted_page: String,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Whether `total_pages` comes from an external data source.
    pub is_server_pagination: bool,
}

impl Pagination {
    /// Pagination over `row_count` locally held rows.
    #[must_use]
    pub fn client(row_count: usize, row_size: usize, current_page: usize) -> Self {
        let row_size = row_size.max(1);
        let total_pages = total_pages_for(row_count, row_size);
        let current_page = clamp_page(saturating_i64(current_page), total_pages);
        Self {
            row_size,
            current_page,
            inputted_page: current_page.to_string(),
            total_pages,
            is_server_pagination: false,
        }
    }

    /// Pagination whose page count is owned by an external data source.
    #[must_use]
    pub fn server(row_size: usize, current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = clamp_page(saturating_i64(current_page), total_pages);
        Self {
            row_size: row_size.max(1),
            current_page,
            inputted_page: current_page.to_string(),
            total_pages,
            is_server_pagination: true,
        }
    }

    /// Returns whether the current page is the first one.
    #[must_use]
    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Returns whether the current page is the last one.
    #[must_use]
    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Returns a copy moved to `page` (already clamped by the caller).
    fn at(&self, page: usize) -> Self {
        Self {
            current_page: page,
            inputted_page: page.to_string(),
            ..self.clone()
        }
    }
}

/// A page navigation request coming from the pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// An explicit page selection, e.g. a page button. Always navigates.
    Select(usize),
    /// An edit of the page input box. Navigates only when `key` is the
    /// activation key; otherwise just records the typed text.
    Typed {
        /// Current text of the input box.
        value: String,
        /// Key that produced this event, if any.
        key: Option<String>,
    },
}

impl PageRequest {
    /// Typed input without a confirming key.
    pub fn typed(value: impl Into<String>) -> Self {
        Self::Typed {
            value: value.into(),
            key: None,
        }
    }

    /// Typed input confirmed with `key`.
    pub fn confirmed(value: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Typed {
            value: value.into(),
            key: Some(key.into()),
        }
    }
}

/// Result of [`go_to_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// The updated pagination.
    pub pagination: Pagination,
    /// The page navigated to, when the request was committed.
    pub committed: Option<usize>,
}

/// Number of pages needed for `row_count` rows; never zero.
#[must_use]
pub fn total_pages_for(row_count: usize, row_size: usize) -> usize {
    row_count.div_ceil(row_size.max(1)).max(1)
}

fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Clamps a requested page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let total = saturating_i64(total_pages.max(1));
    // clamped into [1, total], which always fits in usize
    usize::try_from(requested.clamp(1, total)).unwrap_or(1)
}

/// Advances one page unless already on the last page.
#[must_use]
pub fn next_page(pagination: &Pagination) -> Pagination {
    if pagination.on_last_page() {
        return pagination.clone();
    }
    pagination.at(pagination.current_page + 1)
}

/// Goes back one page unless already on the first page.
#[must_use]
pub fn previous_page(pagination: &Pagination) -> Pagination {
    if pagination.on_first_page() {
        return pagination.clone();
    }
    pagination.at(pagination.current_page - 1)
}

/// Handles a page request.
///
/// Committed pages are clamped into `[1, total_pages]` at both ends. A typed
/// value that is not a number is never committed, even when confirmed.
#[must_use]
pub fn go_to_page(request: PageRequest, pagination: &Pagination, keys: &KeyMap) -> PageOutcome {
    match request {
        PageRequest::Select(page) => {
            let page = clamp_page(saturating_i64(page), pagination.total_pages);
            PageOutcome {
                pagination: pagination.at(page),
                committed: Some(page),
            }
        }
        PageRequest::Typed { value, key } => {
            let confirmed = key.as_deref().is_some_and(|k| matches(k, &[&keys.activate]));
            let parsed = value.trim().parse::<i64>().ok();
            match parsed {
                Some(requested) if confirmed => {
                    let page = clamp_page(requested, pagination.total_pages);
                    PageOutcome {
                        pagination: pagination.at(page),
                        committed: Some(page),
                    }
                }
                _ => {
                    if confirmed {
                        tracing::debug!(value = %value, "ignoring non-numeric page input");
                    }
                    PageOutcome {
                        pagination: Pagination {
                            inputted_page: value,
                            ..pagination.clone()
                        },
                        committed: None,
                    }
                }
            }
        }
    }
}

/// Recomputes client pagination after the row count changed.
///
/// The current page is reset to 1 when it no longer exists.
#[must_use]
pub fn recompute(pagination: &Pagination, row_count: usize) -> Pagination {
    let total_pages = total_pages_for(row_count, pagination.row_size);
    let next = Pagination {
        total_pages,
        ..pagination.clone()
    };
    if next.current_page > total_pages {
        next.at(1)
    } else {
        next
    }
}

/// Start and end indices of the current page within `length` rows.
#[must_use]
pub fn page_bounds(pagination: &Pagination, length: usize) -> (usize, usize) {
    let start = (pagination.current_page.saturating_sub(1) * pagination.row_size).min(length);
    let end = (start + pagination.row_size).min(length);
    (start, end)
}

/// Rows on the current page of the sorted and filtered row set.
///
/// Only meaningful in client mode; server rows arrive pre-sliced.
#[must_use]
pub fn calculate_rows(state: &TableState) -> &[Row] {
    let (start, end) = page_bounds(&state.pagination, state.rows.len());
    &state.rows[start..end]
}
