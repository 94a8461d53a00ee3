//! Table dump reader
//!
//! Columns may omit `data_type`; those take the tests-table preset type.

use crate::error::CliError;
use quiz_admin_core::presets;
use quiz_admin_core::{Cell, ColumnDescriptor, DataType, Table};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TableFile {
    columns: Vec<ColumnEntry>,
    #[serde(default)]
    rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Deserialize)]
struct ColumnEntry {
    name: String,
    #[serde(default)]
    data_type: Option<DataType>,
}

pub fn load_table(path: &Path) -> Result<Table, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_table(&content).map_err(|source| CliError::Json {
        path: path.display().to_string(),
        source,
    })
}

pub fn parse_table(content: &str) -> Result<Table, serde_json::Error> {
    let file: TableFile = serde_json::from_str(content)?;
    let columns = file
        .columns
        .into_iter()
        .map(|column| {
            let data_type = column.data_type.unwrap_or_else(|| presets::column_type(&column.name));
            ColumnDescriptor::new(column.name, data_type)
        })
        .collect();
    Ok(Table::new(columns, file.rows))
}
