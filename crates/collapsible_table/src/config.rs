//! Table options.
//!
//! [`TableOptions`] gathers every setting the owning application can pass to a
//! table: paging, initial sort and search, layout behaviour and the pieces of
//! presentation the engine hands through to the renderer. Options can be
//! built in code or loaded from TOML; missing keys fall back to defaults.
//!
//! # Examples
//!
//! ```rust
//! use collapsible_table::config::TableOptions;
//!
//! let options = TableOptions::from_toml_str(
//!     r#"
//!     row_size = 25
//!     collapsible = false
//!     theme = "compact"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(options.row_size, 25);
//! assert!(!options.collapsible);
//! assert_eq!(options.current_page, 1);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::header::IconSet;
use crate::layout::{DEFAULT_COLUMN_WIDTH, LayoutBudget};
use crate::paginator::DEFAULT_ROW_SIZE;
use crate::sort::Sort;
use crate::throttle::DEFAULT_RESIZE_INTERVAL;

/// Theme identifier used when none is configured.
pub const DEFAULT_THEME: &str = "collapsible-theme";

/// Settings for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "options naturally carry boolean toggles"
)]
pub struct TableOptions {
    // ========================================================================
    // Paging
    // ========================================================================
    /// Rows per page.
    pub row_size: usize,

    /// Page shown first.
    pub current_page: usize,

    /// Page count supplied by an external data source.
    ///
    /// Only honoured in server mode; client mode derives it from the rows.
    pub total_pages: Option<usize>,

    // ========================================================================
    // Sort and search
    // ========================================================================
    /// Initial sort. `None` sorts by the highest-priority column, ascending.
    pub sort: Option<Sort>,

    /// Initial search query, forwarded with server requests.
    pub search: String,

    // ========================================================================
    // Layout
    // ========================================================================
    /// Whether narrow viewports fold low-priority columns into detail rows.
    pub collapsible: bool,

    /// Fit the layout to the containing element instead of the window.
    pub use_container_width: bool,

    /// Width budget for columns without their own `min_width`.
    pub default_column_width: u32,

    /// Minimum spacing between layout recomputations, in milliseconds.
    /// Never below 150.
    pub resize_throttle_ms: u64,

    // ========================================================================
    // Presentation (passed through to the renderer)
    // ========================================================================
    /// Theme identifier.
    pub theme: String,

    /// Element id for the rendered table.
    pub id: Option<String>,

    /// Sort indicator glyphs.
    pub icons: IconSet,

    /// Whether the search box is shown.
    pub show_search: bool,

    /// Whether pagination controls are shown.
    pub show_pagination: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            row_size: DEFAULT_ROW_SIZE,
            current_page: 1,
            total_pages: None,
            sort: None,
            search: String::new(),
            collapsible: true,
            use_container_width: false,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            resize_throttle_ms: u64::try_from(DEFAULT_RESIZE_INTERVAL.as_millis())
                .unwrap_or(150),
            theme: DEFAULT_THEME.to_string(),
            id: None,
            icons: IconSet::default(),
            show_search: false,
            show_pagination: false,
        }
    }
}

impl TableOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a TOML document and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidOptions`] when the document does not parse
    /// or the resize throttle is too short, and [`TableError::InvalidRowSize`]
    /// when `row_size` is zero.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(source).map_err(|e| TableError::options(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks option values that cannot be clamped into shape.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidRowSize`] when `row_size` is zero and
    /// [`TableError::InvalidOptions`] when `resize_throttle_ms` is below
    /// [`DEFAULT_RESIZE_INTERVAL`].
    pub fn validate(&self) -> Result<()> {
        if self.row_size == 0 {
            return Err(TableError::InvalidRowSize(self.row_size));
        }
        if Duration::from_millis(self.resize_throttle_ms) < DEFAULT_RESIZE_INTERVAL {
            return Err(TableError::options(format!(
                "resize_throttle_ms must be at least {}, got {}",
                DEFAULT_RESIZE_INTERVAL.as_millis(),
                self.resize_throttle_ms
            )));
        }
        Ok(())
    }

    /// Sets the rows per page.
    #[must_use]
    pub fn row_size(mut self, row_size: usize) -> Self {
        self.row_size = row_size;
        self
    }

    /// Sets the first page shown.
    #[must_use]
    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Sets the externally known page count.
    #[must_use]
    pub fn total_pages(mut self, total_pages: usize) -> Self {
        self.total_pages = Some(total_pages);
        self
    }

    /// Sets the initial sort.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the initial search query.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Enables or disables collapsible layout.
    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Fits the layout to the container instead of the window.
    #[must_use]
    pub fn use_container_width(mut self, enabled: bool) -> Self {
        self.use_container_width = enabled;
        self
    }

    /// Sets the default column width budget.
    #[must_use]
    pub fn default_column_width(mut self, width: u32) -> Self {
        self.default_column_width = width;
        self
    }

    /// Sets the resize throttle interval.
    #[must_use]
    pub fn resize_throttle(mut self, interval: Duration) -> Self {
        self.resize_throttle_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the theme identifier.
    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Width budget derived from these options.
    #[must_use]
    pub fn layout_budget(&self) -> LayoutBudget {
        LayoutBudget::new(self.default_column_width)
    }

    /// Resize throttle interval, raised to [`DEFAULT_RESIZE_INTERVAL`] when
    /// set shorter.
    #[must_use]
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.resize_throttle_ms).max(DEFAULT_RESIZE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Direction;

    #[test]
    fn defaults() {
        let options = TableOptions::default();
        assert_eq!(options.row_size, 10);
        assert_eq!(options.current_page, 1);
        assert!(options.collapsible);
        assert!(!options.use_container_width);
        assert_eq!(options.theme, DEFAULT_THEME);
        assert_eq!(options.throttle_interval(), Duration::from_millis(150));
        assert_eq!(options.layout_budget(), LayoutBudget::new(150));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn parses_nested_sort() {
        let options = TableOptions::from_toml_str(
            r#"
            [sort]
            column = "age"
            direction = "descending"
            "#,
        )
        .unwrap();
        assert_eq!(options.sort, Some(Sort::new("age", Direction::Descending)));
    }

    #[test]
    fn rejects_zero_row_size() {
        let err = TableOptions::from_toml_str("row_size = 0").unwrap_err();
        assert_eq!(err, TableError::InvalidRowSize(0));
    }

    #[test]
    fn rejects_malformed_document() {
        let err = TableOptions::from_toml_str("row_size = \"ten\"").unwrap_err();
        assert!(matches!(err, TableError::InvalidOptions(_)));
    }

    #[test]
    fn builder_methods() {
        let options = TableOptions::new()
            .row_size(5)
            .current_page(2)
            .collapsible(false)
            .resize_throttle(Duration::from_millis(300))
            .theme("dark");
        assert_eq!(options.row_size, 5);
        assert_eq!(options.current_page, 2);
        assert!(!options.collapsible);
        assert_eq!(options.resize_throttle_ms, 300);
        assert_eq!(options.throttle_interval(), Duration::from_millis(300));
        assert_eq!(options.theme, "dark");
    }

    #[test]
    fn rejects_short_resize_throttle() {
        let err = TableOptions::from_toml_str("resize_throttle_ms = 0").unwrap_err();
        assert!(matches!(err, TableError::InvalidOptions(ref m) if m.contains("at least 150")));
        assert!(TableOptions::from_toml_str("resize_throttle_ms = 149").is_err());
        assert!(TableOptions::from_toml_str("resize_throttle_ms = 150").is_ok());

        let options = TableOptions::new().resize_throttle(Duration::ZERO);
        assert!(matches!(options.validate(), Err(TableError::InvalidOptions(_))));
    }

    #[test]
    fn short_throttle_interval_is_raised() {
        let options = TableOptions::new().resize_throttle(Duration::from_millis(10));
        assert_eq!(options.throttle_interval(), DEFAULT_RESIZE_INTERVAL);
    }
}
