//! Column header projection.
//!
//! A [`HeaderCell`] is everything a renderer needs to draw one header: label,
//! class name, sort indicator and whether it takes keyboard focus. It also
//! turns clicks and key presses back into table events, so sorting only ever
//! fires for sortable columns.
//!
//! # Example
//!
//! ```rust
//! use collapsible_table::column::{ColumnDef, ingest_columns};
//! use collapsible_table::header::{HeaderCell, IconSet};
//! use collapsible_table::sort::{Direction, Sort};
//!
//! let columns = ingest_columns(vec![ColumnDef::new("firstName", "First Name", 1)]).unwrap();
//! let sort = Sort::new("firstName", Direction::Ascending);
//! let cell = HeaderCell::new(&columns[0], &sort, &IconSet::default());
//!
//! assert_eq!(cell.css_class, "column-firstName clickable");
//! assert_eq!(cell.text(), "First Name▲");
//! ```

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::controller::TableEvent;
use crate::key::{KeyMap, matches};
use crate::sort::{Direction, Sort};

/// Glyphs used for sort indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    /// Shown on the column sorted ascending.
    pub ascending: String,
    /// Shown on the column sorted descending.
    pub descending: String,
    /// Shown on sortable columns that are not sorted.
    pub unsorted: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            ascending: "▲".to_string(),
            descending: "▼".to_string(),
            unsorted: "⇅".to_string(),
        }
    }
}

impl IconSet {
    /// Glyph for `direction`.
    #[must_use]
    pub fn glyph(&self, direction: Direction) -> &str {
        match direction {
            Direction::Ascending => &self.ascending,
            Direction::Descending => &self.descending,
            Direction::None => &self.unsorted,
        }
    }
}

/// Render description of a single column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Accessor of the column.
    pub accessor: String,
    /// Label text.
    pub label: String,
    /// Class list: `column-<accessor>`, plus `clickable` when sortable.
    pub css_class: String,
    /// Sort direction shown on this header.
    pub direction: Direction,
    /// Sort indicator glyph; empty for non-sortable columns.
    pub icon: String,
    /// Focus order; only sortable headers are focusable.
    pub tab_index: Option<i32>,
    sortable: bool,
}

impl HeaderCell {
    /// Projects `column` under the current `sort`.
    #[must_use]
    pub fn new(column: &Column, sort: &Sort, icons: &IconSet) -> Self {
        let direction = sort.direction_for(&column.accessor);
        let (icon, clickable, tab_index) = if column.sortable {
            (icons.glyph(direction).to_string(), "clickable", Some(0))
        } else {
            (String::new(), "", None)
        };

        Self {
            accessor: column.accessor.clone(),
            label: column.label.clone(),
            css_class: format!("column-{} {clickable}", column.accessor),
            direction,
            icon,
            tab_index,
            sortable: column.sortable,
        }
    }

    /// Returns whether activating the header sorts.
    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Displayed text: label followed by the sort indicator.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{}", self.label, self.icon)
    }

    /// Event produced by clicking the header.
    #[must_use]
    pub fn click(&self) -> Option<TableEvent> {
        self.sortable
            .then(|| TableEvent::Sort(self.accessor.clone()))
    }

    /// Event produced by pressing `key` while the header has focus.
    #[must_use]
    pub fn key(&self, key: &str, keys: &KeyMap) -> Option<TableEvent> {
        if matches(key, &[&keys.activate]) {
            self.click()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ColumnDef, ingest_columns};

    fn columns() -> Vec<Column> {
        ingest_columns(vec![
            ColumnDef::new("firstName", "First Name", 1),
            ColumnDef::new("notes", "Notes", 2).sortable(false),
        ])
        .unwrap()
    }

    #[test]
    fn css_class_names_the_column() {
        let columns = columns();
        let sort = Sort::new("firstName", Direction::Ascending);
        let cell = HeaderCell::new(&columns[0], &sort, &IconSet::default());
        assert!(cell.css_class.split(' ').any(|c| c == "column-firstName"));
        assert!(cell.css_class.contains("clickable"));
        assert_eq!(cell.label, "First Name");
    }

    #[test]
    fn non_sortable_header_is_inert() {
        let columns = columns();
        let sort = Sort::new("firstName", Direction::Ascending);
        let cell = HeaderCell::new(&columns[1], &sort, &IconSet::default());
        assert_eq!(cell.css_class, "column-notes ");
        assert_eq!(cell.icon, "");
        assert_eq!(cell.tab_index, None);
        assert_eq!(cell.text(), "Notes");
        assert!(cell.click().is_none());
        assert!(cell.key("enter", &KeyMap::default()).is_none());
    }

    #[test]
    fn unsorted_sortable_header_shows_neutral_icon() {
        let columns = columns();
        let sort = Sort::new("notes", Direction::Descending);
        let cell = HeaderCell::new(&columns[0], &sort, &IconSet::default());
        assert_eq!(cell.direction, Direction::None);
        assert_eq!(cell.icon, "⇅");
        assert_eq!(cell.tab_index, Some(0));
    }

    #[test]
    fn enter_and_click_request_a_sort() {
        let columns = columns();
        let cell = HeaderCell::new(&columns[0], &Sort::default(), &IconSet::default());
        let expected = Some(TableEvent::Sort("firstName".into()));
        assert_eq!(cell.click(), expected);
        assert_eq!(cell.key("Enter", &KeyMap::default()), expected);
        assert_eq!(cell.key("a", &KeyMap::default()), None);
    }

    #[test]
    fn custom_icons() {
        let icons = IconSet {
            ascending: "^".into(),
            descending: "v".into(),
            unsorted: String::new(),
        };
        let columns = columns();
        let sort = Sort::new("firstName", Direction::Descending);
        assert_eq!(HeaderCell::new(&columns[0], &sort, &icons).text(), "First Namev");
    }
}
