//! Text and JSON rendering of a sorted table

use crate::error::CliError;
use quiz_admin_core::messages::download_results_path;
use quiz_admin_core::presets::ID_COLUMN;
use quiz_admin_core::{DataType, RowId, SortIndicator, SortOrder, TableError, TableSorter};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Serialize)]
struct Report<'a> {
    columns: Vec<ReportColumn<'a>>,
    indicator: Option<&'a SortIndicator>,
    rows: Vec<ReportRow<'a>>,
    warnings: &'a [TableError],
}

#[derive(Serialize)]
struct ReportColumn<'a> {
    name: &'a str,
    data_type: DataType,
    /// Order the next activation of this column will use
    next_order: SortOrder,
    glyph: &'static str,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    id: RowId,
    cells: Vec<&'a str>,
    expired: bool,
    /// Results download link, when the table carries test ids
    #[serde(skip_serializing_if = "Option::is_none")]
    results_path: Option<String>,
}

pub fn json(sorter: &TableSorter, warnings: &[TableError]) -> Result<String, CliError> {
    let columns = sorter
        .columns()
        .iter()
        .map(|c| ReportColumn {
            name: &c.name,
            data_type: c.data_type,
            next_order: sorter.order_of(&c.name).unwrap_or_default(),
            glyph: sorter.indicator_glyph(&c.name),
        })
        .collect();
    let id_index = sorter.table().column_index(ID_COLUMN);
    let rows = sorter
        .rows()
        .iter()
        .map(|row| ReportRow {
            id: row.id,
            cells: row.cells.iter().map(|c| c.text.as_str()).collect(),
            expired: row.expired,
            results_path: id_index
                .and_then(|i| row.cell(i))
                .and_then(|c| c.text.trim().parse::<i64>().ok())
                .map(download_results_path),
        })
        .collect();
    let report = Report {
        columns,
        indicator: sorter.indicator(),
        rows,
        warnings,
    };
    serde_json::to_string_pretty(&report).map_err(CliError::Render)
}

/// Plain text table; expired rows carry the marker after the last column
pub fn text(sorter: &TableSorter, expired_marker: &str) -> String {
    let headers: Vec<String> = sorter
        .columns()
        .iter()
        .map(|c| match sorter.indicator_glyph(&c.name) {
            "" => c.name.clone(),
            glyph => format!("{} {}", c.name, glyph),
        })
        .collect();

    let body: Vec<Vec<&str>> = sorter
        .rows()
        .iter()
        .map(|row| {
            (0..headers.len())
                .map(|i| row.cell(i).map(|c| c.text.trim()).unwrap_or(""))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(join_padded(headers.iter().map(String::as_str), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for (row, cells) in sorter.rows().iter().zip(&body) {
        let mut line = join_padded(cells.iter().copied(), &widths);
        if row.expired {
            line.push_str(&format!("  [{}]", expired_marker));
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width()))))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_admin_core::{Cell, ColumnDescriptor, Table};

    fn sorter() -> TableSorter {
        let table = Table::new(
            vec![
                ColumnDescriptor::new("test_name", DataType::Text),
                ColumnDescriptor::new("duration", DataType::Number),
            ],
            vec![
                vec![Cell::new("Физика"), Cell::new("45")],
                vec![Cell::new("Алгебра"), Cell::new("30")],
            ],
        );
        TableSorter::with_defaults(table).unwrap()
    }

    #[test]
    fn test_text_marks_indicator_and_expired_rows() {
        let mut sorter = sorter();
        sorter.sort_by("duration").unwrap();
        let output = text(&sorter, "expired-test");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "test_name | duration ▲");
        assert!(lines[2].starts_with("Алгебра"));
        assert!(!output.contains("[expired-test]"));
    }

    #[test]
    fn test_json_report_shape() {
        let mut sorter = sorter();
        sorter.sort_by("test_name").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json(&sorter, &[]).unwrap()).unwrap();
        assert_eq!(value["indicator"]["column"], "test_name");
        assert_eq!(value["indicator"]["order"], "asc");
        assert_eq!(value["columns"][0]["next_order"], "desc");
        assert_eq!(value["columns"][0]["glyph"], "▲");
        assert_eq!(value["rows"][0]["cells"][0], "Алгебра");
        assert_eq!(value["rows"][0]["id"], 1);
        assert!(value["rows"][0].get("results_path").is_none());
    }

    #[test]
    fn test_json_links_results_by_test_id() {
        let table = Table::new(
            vec![
                ColumnDescriptor::new("id", DataType::Number),
                ColumnDescriptor::new("test_name", DataType::Text),
            ],
            vec![
                vec![Cell::new("12"), Cell::new("Физика")],
                vec![Cell::new(""), Cell::new("Черновик")],
            ],
        );
        let sorter = TableSorter::with_defaults(table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json(&sorter, &[]).unwrap()).unwrap();
        assert_eq!(value["rows"][0]["results_path"], "/download_results/12");
        assert!(value["rows"][1].get("results_path").is_none());
    }
}
