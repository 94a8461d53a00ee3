//! Type definitions for the admin table

use serde::{Deserialize, Serialize};

/// Declared type of a column; selects the comparator used by `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "date")]
    Date,
    #[default]
    #[serde(rename = "string")]
    Text,
}

impl DataType {
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Number => "number",
            DataType::Date => "date",
            DataType::Text => "string",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn toggle(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Apply this order to an ascending comparison result
    pub fn apply(&self, cmp: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            SortOrder::Ascending => crate::constants::ASCENDING_GLYPH,
            SortOrder::Descending => crate::constants::DESCENDING_GLYPH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: DataType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self { name: name.into(), data_type }
    }
}

/// One table cell: what is displayed, plus an optional raw value used for sorting
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CellRepr")]
pub struct Cell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Plain(String),
    Full {
        text: String,
        #[serde(default)]
        sort_value: Option<String>,
    },
}

impl From<CellRepr> for Cell {
    fn from(repr: CellRepr) -> Self {
        match repr {
            CellRepr::Plain(text) => Cell { text, sort_value: None },
            CellRepr::Full { text, sort_value } => Cell { text, sort_value },
        }
    }
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), sort_value: None }
    }

    pub fn with_sort_value(text: impl Into<String>, sort_value: impl Into<String>) -> Self {
        Self { text: text.into(), sort_value: Some(sort_value.into()) }
    }

    /// Value used for comparison: a non-empty sort value wins over the trimmed text
    pub fn sort_key(&self) -> &str {
        match self.sort_value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => self.text.trim(),
        }
    }
}

/// Stable row identity: the row's position in the initial sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub usize);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: RowId,
    pub cells: Vec<Cell>,
    /// Set by `highlight_expired`; the presentation layer styles expired rows
    pub expired: bool,
}

impl Row {
    pub fn new(id: RowId, cells: Vec<Cell>) -> Self {
        Self { id, cells, expired: false }
    }

    /// Cell at a column index; rows shorter than the column list read as empty
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// Column currently marked in the header and the order it was sorted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortIndicator {
    pub column: String,
    pub order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_key_prefers_non_empty_sort_value() {
        assert_eq!(Cell::new("  12 min ").sort_key(), "12 min");
        assert_eq!(Cell::with_sort_value("12 min", "720").sort_key(), "720");
        assert_eq!(Cell::with_sort_value("12 min", "").sort_key(), "12 min");
    }

    #[test]
    fn test_cell_deserializes_from_string_or_object() {
        let cells: Vec<Cell> =
            serde_json::from_str(r#"["Alpha", {"text": "3 h", "sort_value": "180"}]"#).unwrap();
        assert_eq!(cells[0], Cell::new("Alpha"));
        assert_eq!(cells[1], Cell::with_sort_value("3 h", "180"));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&SortOrder::Descending).unwrap(), "\"desc\"");
        let dt: DataType = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(dt, DataType::Text);
    }
}
