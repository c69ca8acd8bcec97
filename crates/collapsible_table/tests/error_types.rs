//! Tests for collapsible_table error types.
//!
//! Tests verify:
//! - Which inputs fail at ingestion
//! - Display formatting
//! - Clone and PartialEq derives
//! - Result type alias

use collapsible_table::column::{ColumnDef, ingest_columns};
use collapsible_table::config::TableOptions;
use collapsible_table::controller::Table;
use collapsible_table::{Result, TableError};
use std::error::Error as StdError;

mod creation_tests {
    use super::*;

    #[test]
    fn test_empty_accessor() {
        let def = ColumnDef {
            label: Some("Name".into()),
            priority_level: Some(1),
            ..ColumnDef::default()
        };
        let err = ingest_columns(vec![def]).unwrap_err();
        assert_eq!(err, TableError::missing(0, "accessor"));
    }

    #[test]
    fn test_missing_label_reports_index() {
        let defs = vec![
            ColumnDef::new("a", "A", 1),
            ColumnDef {
                accessor: "b".into(),
                priority_level: Some(2),
                ..ColumnDef::default()
            },
        ];
        let err = ingest_columns(defs).unwrap_err();
        assert_eq!(
            err,
            TableError::MissingField {
                index: 1,
                field: "label"
            }
        );
    }

    #[test]
    fn test_missing_priority() {
        let def = ColumnDef {
            accessor: "a".into(),
            label: Some("A".into()),
            ..ColumnDef::default()
        };
        let err = ingest_columns(vec![def]).unwrap_err();
        assert_eq!(err, TableError::missing(0, "priority_level"));
    }

    #[test]
    fn test_duplicate_accessor() {
        let err = ingest_columns(vec![ColumnDef::new("a", "A", 1), ColumnDef::new("a", "Again", 2)])
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateAccessor("a".into()));
    }

    #[test]
    fn test_zero_row_size_rejected_by_table() {
        let err = Table::new(
            vec![ColumnDef::new("a", "A", 1)],
            Vec::new(),
            TableOptions::default().row_size(0),
        )
        .unwrap_err();
        assert_eq!(err, TableError::InvalidRowSize(0));
    }

    #[test]
    fn test_unparsable_options() {
        let err = TableOptions::from_toml_str("collapsible = [").unwrap_err();
        assert!(matches!(err, TableError::InvalidOptions(_)));
    }
}

mod display_tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let msg = TableError::missing(3, "label").to_string();
        assert!(msg.contains("column 3"));
        assert!(msg.contains("`label`"));
    }

    #[test]
    fn test_duplicate_message_quotes_accessor() {
        let msg = TableError::DuplicateAccessor("age".into()).to_string();
        assert!(msg.contains("\"age\""));
    }

    #[test]
    fn test_row_size_message() {
        let msg = TableError::InvalidRowSize(0).to_string();
        assert!(msg.contains("at least 1"));
    }

    #[test]
    fn test_debug_impl() {
        let debug = format!("{:?}", TableError::options("bad"));
        assert!(debug.contains("InvalidOptions"));
    }
}

mod derive_tests {
    use super::*;

    #[test]
    fn test_clone_and_eq() {
        let e1 = TableError::DuplicateAccessor("x".into());
        let e2 = e1.clone();
        assert_eq!(e1, e2);
        assert_ne!(e1, TableError::InvalidRowSize(1));
    }

    #[test]
    fn test_is_std_error_without_source() {
        let e = TableError::InvalidRowSize(0);
        let as_std: &dyn StdError = &e;
        assert!(as_std.source().is_none());
    }

    #[test]
    fn test_column_error_classification() {
        assert!(TableError::missing(0, "accessor").is_column_error());
        assert!(TableError::DuplicateAccessor("a".into()).is_column_error());
        assert!(!TableError::InvalidRowSize(0).is_column_error());
        assert!(!TableError::options("x").is_column_error());
    }
}

mod result_alias_tests {
    use super::*;

    fn ingest(valid: bool) -> Result<usize> {
        let defs = if valid {
            vec![ColumnDef::new("a", "A", 1)]
        } else {
            vec![ColumnDef::default()]
        };
        Ok(ingest_columns(defs)?.len())
    }

    #[test]
    fn test_question_mark_propagation() {
        assert_eq!(ingest(true), Ok(1));
        assert!(ingest(false).is_err());
    }
}
