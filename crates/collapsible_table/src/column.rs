//! Column registry.
//!
//! Columns arrive as loosely specified [`ColumnDef`]s (typically deserialized
//! from the owning application's configuration) and are ingested into
//! validated [`Column`]s. Ingestion runs on initial setup and again every time
//! the application hands over a new column list.
//!
//! # Example
//!
//! ```rust
//! use collapsible_table::column::{ColumnDef, ingest_columns};
//!
//! let columns = ingest_columns(vec![
//!     ColumnDef::new("firstName", "First Name", 1),
//!     ColumnDef::new("age", "Age", 2).sortable(false),
//! ])
//! .unwrap();
//!
//! assert!(columns[0].sortable);
//! assert!(!columns[1].sortable);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A column definition as supplied by the owning application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDef {
    /// Key into each row record.
    pub accessor: String,
    /// Header label.
    pub label: Option<String>,
    /// Lower values stay visible longest.
    #[serde(alias = "priorityLevel")]
    pub priority_level: Option<u32>,
    /// Whether clicking the header sorts. Unspecified means sortable.
    pub sortable: Option<bool>,
    /// Width budget for this column, overriding the table default.
    #[serde(alias = "minWidth")]
    pub min_width: Option<u32>,
}

impl ColumnDef {
    /// Creates a definition with every required field set.
    pub fn new(accessor: impl Into<String>, label: impl Into<String>, priority_level: u32) -> Self {
        Self {
            accessor: accessor.into(),
            label: Some(label.into()),
            priority_level: Some(priority_level),
            sortable: None,
            min_width: None,
        }
    }

    /// Sets sortability explicitly.
    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    /// Sets the width budget.
    #[must_use]
    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }
}

/// An ingested column.
///
/// `is_visible` is owned by the layout engine and recomputed on every layout
/// pass; it is not settable from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Key into each row record. Unique within the registry.
    pub accessor: String,
    /// Header label.
    pub label: String,
    /// Lower values stay visible longest.
    pub priority_level: u32,
    /// Whether the column reacts to sort clicks.
    pub sortable: bool,
    /// Width budget for this column, if it overrides the table default.
    pub min_width: Option<u32>,
    pub(crate) is_visible: bool,
}

impl Column {
    /// Returns whether the column is currently rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

/// Resolves sortability: columns are sortable unless told otherwise.
#[must_use]
pub fn derive_sortability(def: &ColumnDef) -> bool {
    def.sortable.unwrap_or(true)
}

/// Validates definitions and turns them into visible columns.
///
/// # Errors
///
/// Returns [`TableError::MissingField`] when an accessor, label or priority
/// level is absent, and [`TableError::DuplicateAccessor`] when two
/// definitions share an accessor.
pub fn ingest_columns(defs: Vec<ColumnDef>) -> Result<Vec<Column>> {
    let mut seen = HashSet::with_capacity(defs.len());
    let mut columns = Vec::with_capacity(defs.len());

    for (index, def) in defs.into_iter().enumerate() {
        if def.accessor.is_empty() {
            return Err(TableError::missing(index, "accessor"));
        }
        let sortable = derive_sortability(&def);
        let label = def.label.ok_or_else(|| TableError::missing(index, "label"))?;
        let priority_level = def
            .priority_level
            .ok_or_else(|| TableError::missing(index, "priority_level"))?;
        if !seen.insert(def.accessor.clone()) {
            return Err(TableError::DuplicateAccessor(def.accessor));
        }

        columns.push(Column {
            accessor: def.accessor,
            label,
            priority_level,
            sortable,
            min_width: def.min_width,
            is_visible: true,
        });
    }

    tracing::debug!(count = columns.len(), "ingested columns");
    Ok(columns)
}

/// Returns the accessor of the highest-priority column.
///
/// Ties go to the column registered first.
#[must_use]
pub fn default_sort_column(columns: &[Column]) -> Option<&str> {
    columns
        .iter()
        .enumerate()
        .min_by_key(|(i, c)| (c.priority_level, *i))
        .map(|(_, c)| c.accessor.as_str())
}

/// Looks up a column by accessor.
#[must_use]
pub fn find<'a>(columns: &'a [Column], accessor: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.accessor == accessor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortable_defaults_to_true() {
        assert!(derive_sortability(&ColumnDef::new("a", "A", 1)));
        assert!(!derive_sortability(&ColumnDef::new("a", "A", 1).sortable(false)));
    }

    #[test]
    fn ingested_columns_start_visible() {
        let columns = ingest_columns(vec![ColumnDef::new("a", "A", 1)]).unwrap();
        assert!(columns[0].is_visible());
    }

    #[test]
    fn rejects_duplicate_accessor() {
        let err = ingest_columns(vec![
            ColumnDef::new("name", "Name", 1),
            ColumnDef::new("name", "Other", 2),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateAccessor("name".into()));
    }

    #[test]
    fn rejects_missing_fields() {
        let no_accessor = ColumnDef {
            label: Some("A".into()),
            priority_level: Some(1),
            ..ColumnDef::default()
        };
        assert_eq!(
            ingest_columns(vec![no_accessor]).unwrap_err(),
            TableError::missing(0, "accessor")
        );

        let no_label = ColumnDef {
            accessor: "a".into(),
            priority_level: Some(1),
            ..ColumnDef::default()
        };
        assert_eq!(
            ingest_columns(vec![ColumnDef::new("x", "X", 1), no_label]).unwrap_err(),
            TableError::missing(1, "label")
        );

        let no_priority = ColumnDef {
            accessor: "a".into(),
            label: Some("A".into()),
            ..ColumnDef::default()
        };
        assert_eq!(
            ingest_columns(vec![no_priority]).unwrap_err(),
            TableError::missing(0, "priority_level")
        );
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let def: ColumnDef =
            serde_json::from_str(r#"{"accessor":"age","label":"Age","priorityLevel":2}"#).unwrap();
        assert_eq!(def.priority_level, Some(2));
        assert_eq!(def.sortable, None);
    }

    #[test]
    fn default_sort_column_picks_lowest_priority() {
        let columns = ingest_columns(vec![
            ColumnDef::new("b", "B", 3),
            ColumnDef::new("a", "A", 1),
            ColumnDef::new("c", "C", 1),
        ])
        .unwrap();
        assert_eq!(default_sort_column(&columns), Some("a"));
        assert_eq!(default_sort_column(&[]), None);
    }
}
