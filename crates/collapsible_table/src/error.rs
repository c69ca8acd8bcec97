//! Error types for table ingestion.
//!
//! The engine itself never fails once a table is built: out-of-range pages are
//! clamped and sorting a non-sortable column is a no-op. Errors only surface
//! when malformed input is handed over at ingestion time.
//!
//! # Error Handling Strategy
//!
//! | Error Variant | Recommended Action |
//! |--------------|-------------------|
//! | [`MissingField`](TableError::MissingField) | Fix the column definition |
//! | [`DuplicateAccessor`](TableError::DuplicateAccessor) | Rename one of the columns |
//! | [`InvalidRowSize`](TableError::InvalidRowSize) | Use a row size of at least 1 |
//! | [`InvalidOptions`](TableError::InvalidOptions) | Fix the options document |

use thiserror::Error;

/// Errors raised while ingesting columns, rows or options.
///
/// Like the other error types in this workspace it implements `Clone` and
/// `PartialEq`, so parse errors from `toml` are stored as their message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A column definition is missing a required field.
    #[error("column {index} is missing required field `{field}`")]
    MissingField {
        /// Position of the offending definition in the input list.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Two column definitions share the same accessor.
    #[error("duplicate column accessor: {0:?}")]
    DuplicateAccessor(String),

    /// Row size must be strictly positive.
    #[error("invalid row size: {0} (must be at least 1)")]
    InvalidRowSize(usize),

    /// The options document could not be parsed.
    #[error("invalid table options: {0}")]
    InvalidOptions(String),
}

impl TableError {
    /// Creates a missing-field error for the column at `index`.
    pub fn missing(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }

    /// Creates an options error with the given message.
    pub fn options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }

    /// Returns true if the error came from validating column definitions.
    pub fn is_column_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::DuplicateAccessor(_))
    }
}

/// A specialized `Result` type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let err = TableError::missing(2, "label");
        assert_eq!(err.to_string(), "column 2 is missing required field `label`");
    }

    #[test]
    fn column_error_classification() {
        assert!(TableError::DuplicateAccessor("age".into()).is_column_error());
        assert!(TableError::missing(0, "accessor").is_column_error());
        assert!(!TableError::InvalidRowSize(0).is_column_error());
        assert!(!TableError::options("bad").is_column_error());
    }
}
