#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Collapsible Table
//!
//! State engine for a responsive, sortable, paginated, searchable table.
//!
//! As the viewport shrinks, low-priority columns are hidden and their values
//! move into an expandable detail panel under each row. Every transformation
//! is a pure function of the current [`TableState`](state::TableState); the
//! [`Table`](controller::Table) controller owns the state and routes events
//! through them.
//!
//! - **column** - Column definitions and ingestion
//! - **layout** - Priority-driven column visibility
//! - **sort** - Single-column sort with direction cycling
//! - **search** - Case-insensitive row filtering
//! - **paginator** - Page navigation and slicing
//! - **throttle** / **resize** - Rate-limited viewport events
//! - **controller** - The table itself, in client or server mode
//! - **view** / **header** - Render projections
//!
//! ## Example
//!
//! ```rust
//! use collapsible_table::prelude::*;
//!
//! let mut table = Table::new(
//!     vec![
//!         ColumnDef::new("name", "Name", 1),
//!         ColumnDef::new("email", "Email", 2),
//!     ],
//!     vec![
//!         record([("name", CellValue::from("Bea")), ("email", CellValue::from("bea@example.com"))]),
//!         record([("name", CellValue::from("Al")), ("email", CellValue::from("al@example.com"))]),
//!     ],
//!     TableOptions::default(),
//! )
//! .unwrap();
//!
//! // Already sorted by `name` ascending, so a click flips it
//! table.update(TableEvent::Sort("name".into()));
//! table.update(TableEvent::Resize(ViewportSize::window(200)));
//!
//! let view = table.view();
//! assert_eq!(view.headers.len(), 1);
//! assert_eq!(view.rows[0].cells[0].to_string(), "Bea");
//! assert_eq!(view.rows[0].details[0].value.to_string(), "bea@example.com");
//! ```

pub mod column;
pub mod config;
pub mod controller;
pub mod error;
pub mod header;
pub mod key;
pub mod layout;
pub mod paginator;
pub mod resize;
pub mod row;
pub mod search;
pub mod sort;
pub mod state;
pub mod throttle;
pub mod value;
pub mod view;

pub use error::{Result, TableError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::column::{Column, ColumnDef, ingest_columns};
    pub use crate::config::TableOptions;
    pub use crate::controller::{
        DataRequest, DataSource, ExternalData, Mode, ModeKind, Table, TableEvent,
    };
    pub use crate::error::TableError;
    pub use crate::header::{HeaderCell, IconSet};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::{PageRequest, Pagination};
    pub use crate::resize::{ResizeBus, ViewportSize};
    pub use crate::row::{Record, Row, RowId, record};
    pub use crate::sort::{Direction, Sort};
    pub use crate::state::TableState;
    pub use crate::value::CellValue;
    pub use crate::view::{RowView, TableView};
}
