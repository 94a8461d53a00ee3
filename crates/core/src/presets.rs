//! Column layout of the admin tests table

use crate::table::{ColumnDescriptor, DataType, SortOrder};

/// Columns of the tests table, in display order
pub const TESTS_TABLE_COLUMNS: &[&str] = &[
    "test_name",
    "groups_with_access",
    "creation_date",
    "expiry_date",
    "question_count",
    "scores_need_to_pass",
    "duration",
    "number_of_attempts",
];

pub const EXPIRY_COLUMN: &str = "expiry_date";

/// Optional column carrying the test's database id
pub const ID_COLUMN: &str = "id";

/// Newest tests first when the page loads
pub const DEFAULT_SORT: (&str, SortOrder) = ("creation_date", SortOrder::Descending);

/// Declared type of a tests-table column; unknown names are text
pub fn column_type(name: &str) -> DataType {
    match name {
        "question_count" | "scores_need_to_pass" | "duration" | "number_of_attempts" => DataType::Number,
        "creation_date" | "expiry_date" => DataType::Date,
        ID_COLUMN => DataType::Number,
        _ => DataType::Text,
    }
}

pub fn tests_table_columns() -> Vec<ColumnDescriptor> {
    TESTS_TABLE_COLUMNS
        .iter()
        .map(|name| ColumnDescriptor::new(*name, column_type(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_types() {
        assert_eq!(column_type("duration"), DataType::Number);
        assert_eq!(column_type("expiry_date"), DataType::Date);
        assert_eq!(column_type("id"), DataType::Number);
        assert_eq!(column_type("test_name"), DataType::Text);
        assert_eq!(column_type("anything_else"), DataType::Text);
    }

    #[test]
    fn test_default_sort_column_is_declared() {
        let columns = tests_table_columns();
        assert!(columns.iter().any(|c| c.name == DEFAULT_SORT.0 && c.data_type == DataType::Date));
        assert!(columns.iter().any(|c| c.name == EXPIRY_COLUMN));
    }
}
