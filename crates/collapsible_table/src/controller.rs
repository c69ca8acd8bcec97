//! Table controller.
//!
//! [`Table`] owns the display state and is the only place it changes. Every
//! signal (a resize, a header click, a page button, a search keystroke, new
//! data from the application) arrives as a [`TableEvent`] and goes through
//! [`Table::update`]. The actual state transition is computed by the pure
//! [`reduce`] function, which composes the engines and never touches the
//! previous snapshot.
//!
//! A table runs in one of two modes, fixed at construction:
//!
//! - **Client**: the table holds every row and sorts, filters and pages them
//!   itself.
//! - **Server**: the table holds one page of rows. Navigation, sort and search
//!   produce a [`DataRequest`] that is handed to the [`DataSource`]; the
//!   application answers later with [`TableEvent::Sync`].
//!
//! # Example
//!
//! ```rust
//! use collapsible_table::prelude::*;
//!
//! let columns = vec![
//!     ColumnDef::new("firstName", "First Name", 1),
//!     ColumnDef::new("age", "Age", 2),
//! ];
//! let rows = (1..=25)
//!     .map(|i| record([("firstName", CellValue::from(format!("P{i:02}"))), ("age", CellValue::from(i))]))
//!     .collect();
//!
//! let mut table = Table::new(columns, rows, TableOptions::default()).unwrap();
//! table.update(TableEvent::GoToPage(PageRequest::Select(3)));
//! assert_eq!(table.view().rows.len(), 5);
//!
//! table.update(TableEvent::Resize(ViewportSize::window(150)));
//! assert_eq!(table.view().hidden_columns.len(), 1);
//! ```

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::column::{self, Column, ColumnDef, ingest_columns};
use crate::config::TableOptions;
use crate::error::Result;
use crate::header::HeaderCell;
use crate::key::KeyMap;
use crate::layout;
use crate::paginator::{self, PageRequest, Pagination};
use crate::resize::{ResizeBus, ResizeSubscription, ViewportSize};
use crate::row::{Record, Row, rows_from_records};
use crate::sort::{self, Direction, Sort};
use crate::state::TableState;
use crate::throttle::Throttle;
use crate::view::TableView;

/// Data supplied by the owning application to replace the table contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalData {
    /// New rows: every row in client mode, the current page in server mode.
    pub rows: Vec<Record>,
    /// Replacement columns, already ingested.
    pub columns: Option<Vec<Column>>,
    /// Page the rows belong to.
    pub current_page: Option<usize>,
    /// Page count reported by the data source.
    pub total_pages: Option<usize>,
}

impl ExternalData {
    /// New rows, keeping columns and paging as they are.
    #[must_use]
    pub fn rows(rows: Vec<Record>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// One page of server rows.
    #[must_use]
    pub fn page(rows: Vec<Record>, current_page: usize, total_pages: usize) -> Self {
        Self {
            rows,
            columns: None,
            current_page: Some(current_page),
            total_pages: Some(total_pages),
        }
    }

    /// Replaces the columns as well, validating the definitions.
    ///
    /// # Errors
    ///
    /// Returns the ingestion error for malformed or duplicate definitions.
    pub fn with_columns(mut self, defs: Vec<ColumnDef>) -> Result<Self> {
        self.columns = Some(ingest_columns(defs)?);
        Ok(self)
    }
}

/// Everything that can happen to a table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// The viewport changed size.
    Resize(ViewportSize),
    /// A header was clicked or activated.
    Sort(String),
    /// The next-page control was used.
    NextPage,
    /// The previous-page control was used.
    PreviousPage,
    /// A page button was pressed or the page input edited.
    GoToPage(PageRequest),
    /// The search query changed.
    Search(String),
    /// The search box was cleared.
    ClearSearch,
    /// The detail panel of a row on the current row set was toggled.
    ExpandRow(usize),
    /// Collapsible layout was switched on or off.
    SetCollapsible(bool),
    /// The application supplied new data.
    Sync(ExternalData),
}

/// A fetch request for an external data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRequest {
    /// Page to fetch (1-indexed).
    pub page: usize,
    /// Sort to apply.
    pub sort: Sort,
    /// Search query to apply.
    pub search: String,
}

/// Receiver of server-mode fetch requests.
///
/// Requests are fire-and-forget: the source answers, if at all, by feeding
/// [`TableEvent::Sync`] back into the table.
pub trait DataSource {
    /// Called with every request the table emits.
    fn request(&mut self, request: &DataRequest);
}

impl<F> DataSource for F
where
    F: FnMut(&DataRequest),
{
    fn request(&mut self, request: &DataRequest) {
        self(request);
    }
}

/// Which mode a table runs in, without the data source itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// Rows are held and transformed locally.
    Client,
    /// Rows come from a data source one page at a time.
    Server,
}

/// Operating mode of a table.
pub enum Mode {
    /// Rows are held and transformed locally.
    Client,
    /// Rows come from the given data source.
    Server(Box<dyn DataSource>),
}

impl Mode {
    /// The mode without its data source.
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Client => ModeKind::Client,
            Self::Server(_) => ModeKind::Server,
        }
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "Client"),
            Self::Server(_) => write!(f, "Server(..)"),
        }
    }
}

/// Result of reducing one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The next state.
    pub state: TableState,
    /// Request for the data source, server mode only.
    pub request: Option<DataRequest>,
}

impl Transition {
    fn local(state: TableState) -> Self {
        Self {
            state,
            request: None,
        }
    }

    fn fetch(state: TableState) -> Self {
        let request = DataRequest {
            page: state.pagination.current_page,
            sort: state.sort.clone(),
            search: state.search_string.clone(),
        };
        Self {
            state,
            request: Some(request),
        }
    }
}

/// Computes the state following `event`.
///
/// Pure: `state` is left untouched and the same inputs always produce the same
/// transition.
#[must_use]
pub fn reduce(
    state: &TableState,
    event: TableEvent,
    mode: ModeKind,
    options: &TableOptions,
    keys: &KeyMap,
) -> Transition {
    match event {
        TableEvent::Resize(size) => {
            let mut next = state.clone();
            next.viewport = Some(size);
            next.columns = relayout(&next, options);
            Transition::local(next)
        }
        TableEvent::Sort(accessor) => reduce_sort(state, &accessor, mode),
        TableEvent::NextPage => navigate(state, paginator::next_page(&state.pagination), mode),
        TableEvent::PreviousPage => {
            navigate(state, paginator::previous_page(&state.pagination), mode)
        }
        TableEvent::GoToPage(request) => {
            let outcome = paginator::go_to_page(request, &state.pagination, keys);
            let next = TableState {
                pagination: outcome.pagination,
                ..state.clone()
            };
            match (outcome.committed, mode) {
                (Some(page), ModeKind::Server) => {
                    tracing::debug!(page, "requesting page");
                    Transition::fetch(next)
                }
                _ => Transition::local(next),
            }
        }
        TableEvent::Search(query) => reduce_search(state, query, mode),
        TableEvent::ClearSearch => reduce_search(state, String::new(), mode),
        TableEvent::ExpandRow(index) => Transition::local(toggle_row(state, index)),
        TableEvent::SetCollapsible(collapsible) => {
            let mut next = state.clone();
            next.collapsible = collapsible;
            next.columns = relayout(&next, options);
            Transition::local(next)
        }
        TableEvent::Sync(data) => Transition::local(sync(state, data, mode, options)),
    }
}

/// Column visibility for the state's viewport and collapsible mode.
///
/// Without a known viewport every column is assumed to fit.
fn relayout(state: &TableState, options: &TableOptions) -> Vec<Column> {
    let width = state
        .viewport
        .map_or(u32::MAX, |size| size.effective_width(options.use_container_width));
    layout::layout(width, &state.columns, state.collapsible, &options.layout_budget())
}

fn reduce_sort(state: &TableState, accessor: &str, mode: ModeKind) -> Transition {
    match mode {
        ModeKind::Client => match sort::sort_rows(accessor, state) {
            Some((rows, sort)) => Transition::local(TableState {
                rows,
                sort,
                ..state.clone()
            }),
            None => Transition::local(state.clone()),
        },
        ModeKind::Server => match sort::request_sort(accessor, state) {
            Some(sort) => {
                tracing::debug!(column = accessor, direction = %sort.direction, "requesting sort");
                Transition::fetch(TableState {
                    sort,
                    ..state.clone()
                })
            }
            None => Transition::local(state.clone()),
        },
    }
}

fn navigate(state: &TableState, pagination: Pagination, mode: ModeKind) -> Transition {
    let moved = pagination.current_page != state.pagination.current_page;
    let next = TableState {
        pagination,
        ..state.clone()
    };
    if moved && mode == ModeKind::Server {
        tracing::debug!(page = next.pagination.current_page, "requesting page");
        Transition::fetch(next)
    } else {
        Transition::local(next)
    }
}

fn reduce_search(state: &TableState, query: String, mode: ModeKind) -> Transition {
    match mode {
        ModeKind::Client => {
            let rows = sort::arrange(&query, &state.source_rows, &state.columns, &state.sort);
            let pagination = paginator::recompute(&state.pagination, rows.len());
            Transition::local(TableState {
                rows,
                pagination,
                search_string: query,
                ..state.clone()
            })
        }
        ModeKind::Server => {
            // The filtered result set starts over at the first page.
            let first = paginator::go_to_page(
                PageRequest::Select(1),
                &state.pagination,
                &KeyMap::default(),
            );
            tracing::debug!(query = %query, "requesting search");
            Transition::fetch(TableState {
                pagination: first.pagination,
                search_string: query,
                ..state.clone()
            })
        }
    }
}

fn toggle_row(state: &TableState, index: usize) -> TableState {
    let mut next = state.clone();
    let Some(row) = next.rows.get_mut(index) else {
        tracing::warn!(index, rows = state.rows.len(), "ignoring expand of missing row");
        return next;
    };
    let expanded = !row.is_expanded();
    row.set_expanded(expanded);
    let id = row.id();

    if let Some(source) = next.source_rows.iter_mut().find(|r| r.id() == id) {
        source.set_expanded(expanded);
    }
    tracing::debug!(index, expanded, "toggled row details");
    next
}

fn sync(state: &TableState, data: ExternalData, mode: ModeKind, options: &TableOptions) -> TableState {
    let mut next = state.clone();

    if let Some(columns) = data.columns {
        next.columns = columns;
        let sorted_column_gone = next
            .sort
            .column
            .as_deref()
            .is_some_and(|accessor| column::find(&next.columns, accessor).is_none());
        if sorted_column_gone {
            next.sort = Sort {
                column: column::default_sort_column(&next.columns).map(str::to_string),
                direction: Direction::Ascending,
            };
        }
        next.columns = relayout(&next, options);
    }

    let mut rows = rows_from_records(data.rows);

    match mode {
        ModeKind::Client => {
            if data.total_pages.is_some() {
                tracing::debug!("ignoring external page count in client mode");
            }
            next.rows = sort::arrange(&next.search_string, &rows, &next.columns, &next.sort);
            carry_expansion(&state.rows, &mut next.rows);
            for row in &mut rows {
                let shown = next.rows.iter().find(|r| r.id() == row.id());
                row.set_expanded(shown.is_some_and(Row::is_expanded));
            }
            next.source_rows = rows;
            let page = data.current_page.unwrap_or(state.pagination.current_page);
            next.pagination =
                Pagination::client(next.rows.len(), state.pagination.row_size, page);
        }
        ModeKind::Server => {
            carry_expansion(&state.rows, &mut rows);
            next.source_rows.clone_from(&rows);
            next.rows = rows;
            next.pagination = Pagination::server(
                state.pagination.row_size,
                data.current_page.unwrap_or(state.pagination.current_page),
                data.total_pages.unwrap_or(state.pagination.total_pages),
            );
        }
    }

    tracing::debug!(
        rows = next.rows.len(),
        page = next.pagination.current_page,
        total_pages = next.pagination.total_pages,
        "synced external data"
    );
    next
}

/// Keeps expansion by position: rows past the new length lose theirs.
fn carry_expansion(previous: &[Row], next: &mut [Row]) {
    for (old, new) in previous.iter().zip(next.iter_mut()) {
        new.set_expanded(old.is_expanded());
    }
}

/// A responsive, sortable, paginated, searchable table.
#[derive(Debug)]
pub struct Table {
    state: TableState,
    mode: Mode,
    options: TableOptions,
    keys: KeyMap,
    throttle: Throttle<ViewportSize>,
    subscription: Option<ResizeSubscription>,
}

impl Table {
    /// Creates a client-mode table holding every row.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed column definitions or invalid options.
    pub fn new(columns: Vec<ColumnDef>, rows: Vec<Record>, options: TableOptions) -> Result<Self> {
        Self::build(columns, rows, options, Mode::Client)
    }

    /// Creates a server-mode table. `rows` is the first page and requests go
    /// to `source`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed column definitions or invalid options.
    pub fn server(
        columns: Vec<ColumnDef>,
        rows: Vec<Record>,
        options: TableOptions,
        source: impl DataSource + 'static,
    ) -> Result<Self> {
        Self::build(columns, rows, options, Mode::Server(Box::new(source)))
    }

    fn build(
        defs: Vec<ColumnDef>,
        records: Vec<Record>,
        options: TableOptions,
        mode: Mode,
    ) -> Result<Self> {
        options.validate()?;
        let columns = ingest_columns(defs)?;
        let rows = rows_from_records(records);

        let mut state = TableState::new(columns, rows, options.row_size)?;
        state.collapsible = options.collapsible;
        if let Some(sort) = &options.sort {
            state.sort = sort.clone();
        }
        state.search_string.clone_from(&options.search);

        match mode.kind() {
            ModeKind::Client => {
                state.rows = sort::arrange(
                    &state.search_string,
                    &state.source_rows,
                    &state.columns,
                    &state.sort,
                );
                state.pagination =
                    Pagination::client(state.rows.len(), options.row_size, options.current_page);
            }
            ModeKind::Server => {
                state.pagination = Pagination::server(
                    options.row_size,
                    options.current_page,
                    options.total_pages.unwrap_or(1),
                );
            }
        }

        tracing::debug!(
            mode = ?mode.kind(),
            columns = state.columns.len(),
            rows = state.rows.len(),
            "table created"
        );

        Ok(Self {
            throttle: Throttle::new(options.throttle_interval()),
            state,
            mode,
            options,
            keys: KeyMap::default(),
            subscription: None,
        })
    }

    /// Sets the key bindings (builder pattern).
    #[must_use]
    pub fn with_key_map(mut self, keys: KeyMap) -> Self {
        self.keys = keys;
        self
    }

    /// Applies `event` and returns the request sent to the data source, if any.
    pub fn update(&mut self, event: TableEvent) -> Option<DataRequest> {
        let transition = reduce(&self.state, event, self.mode.kind(), &self.options, &self.keys);
        self.state = transition.state;

        if let (Some(request), Mode::Server(source)) = (&transition.request, &mut self.mode) {
            source.request(request);
        }
        transition.request
    }

    /// Replaces the table contents with data from the application.
    pub fn sync(&mut self, data: ExternalData) {
        self.update(TableEvent::Sync(data));
    }

    /// Starts listening to `bus` and lays out for its current size.
    pub fn mount(&mut self, bus: &ResizeBus) {
        self.subscription = Some(bus.subscribe());
        if let Some(size) = bus.current() {
            self.update(TableEvent::Resize(size));
        }
    }

    /// Stops listening for resizes.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    /// Returns whether the table is listening for resizes.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Offers a resize to the throttle. Returns whether the layout was updated.
    pub fn on_resize(&mut self, size: ViewportSize, now: Instant) -> bool {
        match self.throttle.offer(size, now) {
            Some(size) => {
                self.update(TableEvent::Resize(size));
                true
            }
            None => false,
        }
    }

    /// Drains resize events from the mounted bus and releases a throttled one
    /// when due. Returns whether the layout was updated.
    pub fn tick(&mut self, now: Instant) -> bool {
        let latest = self.subscription.as_ref().and_then(ResizeSubscription::latest);
        let mut applied = latest.is_some_and(|size| self.on_resize(size, now));

        if let Some(size) = self.throttle.poll(now) {
            self.update(TableEvent::Resize(size));
            applied = true;
        }
        applied
    }

    /// When a throttled resize is due, if one is waiting.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    /// Current display state.
    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Mode the table runs in.
    #[must_use]
    pub fn mode(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Options the table was built with.
    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Key bindings in use.
    #[must_use]
    pub fn key_map(&self) -> &KeyMap {
        &self.keys
    }

    /// Header cells for the visible columns.
    #[must_use]
    pub fn headers(&self) -> Vec<HeaderCell> {
        layout::visible_columns(&self.state.columns)
            .map(|c| HeaderCell::new(c, &self.state.sort, &self.options.icons))
            .collect()
    }

    /// Render projection of the current state.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::new(&self.state, self.mode.kind(), &self.options, self.headers())
    }
}
