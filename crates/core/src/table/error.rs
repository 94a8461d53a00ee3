//! Table error types

use super::types::{DataType, RowId};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableError {
    /// Column name not declared for this table
    #[error("Unknown column: {column}")]
    InvalidColumn { column: String },

    /// Cell text that cannot be read as the column's declared type.
    /// Never aborts a pass; reported alongside the result.
    #[error("Row {row}: cannot read {text:?} in column {column} as {expected}")]
    UnparseableValue {
        column: String,
        row: RowId,
        text: String,
        expected: DataType,
    },

    #[error("Column declared twice: {column}")]
    DuplicateColumn { column: String },

    #[error("Unsupported collation locale {locale:?}: {reason}")]
    Locale { locale: String, reason: String },
}
