//! Admin table sorting
//!
//! Sorts an owned table by typed columns (number, date, string), toggles the
//! direction on repeated activation of a column, tracks the header indicator
//! and marks rows whose expiry date has passed.

mod config;
mod error;
mod helpers;
mod sorter;
mod types;

pub use config::SorterConfig;
pub use error::TableError;
pub use helpers::{compare_keys, parse_date, parse_number, Collation, SortKey};
pub use sorter::{ExpiryReport, SortOutcome, Table, TableSorter};
pub use types::{Cell, ColumnDescriptor, DataType, Row, RowId, SortIndicator, SortOrder};
