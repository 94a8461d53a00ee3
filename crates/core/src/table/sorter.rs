//! Table sorting and expiry highlighting

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::config::SorterConfig;
use super::error::TableError;
use super::helpers::{compare_keys, parse_date, Collation, SortKey};
use super::types::{Cell, ColumnDescriptor, DataType, Row, RowId, SortIndicator, SortOrder};

/// Column descriptors plus rows in their current display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableRepr")]
pub struct Table {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Row>,
}

#[derive(Deserialize)]
struct TableRepr {
    columns: Vec<ColumnDescriptor>,
    #[serde(default)]
    rows: Vec<RowRepr>,
}

/// A row is either a bare list of cells or a serialized `Row`
#[derive(Deserialize)]
#[serde(untagged)]
enum RowRepr {
    Cells(Vec<Cell>),
    Full {
        #[serde(default)]
        id: Option<RowId>,
        cells: Vec<Cell>,
        #[serde(default)]
        expired: bool,
    },
}

impl From<TableRepr> for Table {
    fn from(repr: TableRepr) -> Self {
        let rows = repr
            .rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| match row {
                RowRepr::Cells(cells) => Row::new(RowId(i), cells),
                RowRepr::Full { id, cells, expired } => Row {
                    id: id.unwrap_or(RowId(i)),
                    cells,
                    expired,
                },
            })
            .collect();
        Table {
            columns: repr.columns,
            rows,
        }
    }
}

impl Table {
    /// Build a table, numbering rows by their initial position
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Vec<Cell>>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, cells)| Row::new(RowId(i), cells))
            .collect();
        Self { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// Result of one `sort_by` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOutcome {
    pub column: String,
    /// Order the rows were just sorted in (the stored order is now the opposite)
    pub order: SortOrder,
    pub row_order: Vec<RowId>,
    /// Cells that failed to parse and were placed by the fallback rule
    pub warnings: Vec<TableError>,
}

/// Result of one `highlight_expired` pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryReport {
    /// Expired flag per row, in current display order
    pub flags: Vec<(RowId, bool)>,
    /// Expiry texts that could not be parsed; those rows count as not expired
    pub warnings: Vec<TableError>,
}

impl ExpiryReport {
    pub fn expired_count(&self) -> usize {
        self.flags.iter().filter(|(_, expired)| *expired).count()
    }
}

/// Sorts an owned table by typed columns and tracks per-column direction.
///
/// Each column starts ascending; every `sort_by` on a column uses its stored
/// order and then flips it, so repeated activation alternates the order.
pub struct TableSorter {
    table: Table,
    config: SorterConfig,
    collation: Collation,
    /// Parallel to `table.columns`; never shrinks
    orders: Vec<SortOrder>,
    indicator: Option<SortIndicator>,
}

impl TableSorter {
    pub fn new(table: Table, config: SorterConfig) -> Result<Self, TableError> {
        for (i, column) in table.columns.iter().enumerate() {
            if table.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(TableError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        let collation = Collation::new(&config.locale)?;
        let orders = vec![SortOrder::Ascending; table.columns.len()];
        tracing::debug!(
            "Table sorter ready: {} columns, {} rows, locale {}",
            table.columns.len(),
            table.rows.len(),
            collation.locale()
        );
        Ok(Self {
            table,
            config,
            collation,
            orders,
            indicator: None,
        })
    }

    pub fn with_defaults(table: Table) -> Result<Self, TableError> {
        Self::new(table, SorterConfig::default())
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.table.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.table.rows
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    pub fn row_order(&self) -> Vec<RowId> {
        self.table.rows.iter().map(|r| r.id).collect()
    }

    /// Order the next `sort_by` on this column will use
    pub fn order_of(&self, column: &str) -> Option<SortOrder> {
        self.table.column_index(column).map(|i| self.orders[i])
    }

    pub fn indicator(&self) -> Option<&SortIndicator> {
        self.indicator.as_ref()
    }

    /// Header glyph for a column: ▲/▼ on the indicated column, empty elsewhere
    pub fn indicator_glyph(&self, column: &str) -> &'static str {
        match &self.indicator {
            Some(indicator) if indicator.column == column => indicator.order.glyph(),
            _ => "",
        }
    }

    pub fn is_expired(&self, id: RowId) -> bool {
        self.table.rows.iter().any(|r| r.id == id && r.expired)
    }

    fn resolve(&self, column: &str) -> Result<usize, TableError> {
        self.table.column_index(column).ok_or_else(|| {
            tracing::warn!("Ignoring request for unknown column {:?}", column);
            TableError::InvalidColumn {
                column: column.to_string(),
            }
        })
    }

    /// Re-sort every row by `column`, then flip that column's stored order
    pub fn sort_by(&mut self, column: &str) -> Result<SortOutcome, TableError> {
        let index = self.resolve(column)?;
        let descriptor = &self.table.columns[index];
        let data_type = descriptor.data_type;
        let order = self.orders[index];

        let mut warnings = Vec::new();
        let rows = std::mem::take(&mut self.table.rows);
        let mut keyed: Vec<(SortKey, Row)> = rows
            .into_iter()
            .map(|row| {
                let text = row.cell(index).map(Cell::sort_key).unwrap_or("");
                let key = SortKey::for_cell(data_type, text, &self.config);
                // Empty cells, and "no end date" markers in date columns, are expected
                let expected_gap = text.is_empty()
                    || (data_type == DataType::Date && self.config.is_no_expiry(text));
                if key.is_unparsed() && !expected_gap {
                    tracing::debug!("Row {} in column {}: unparseable {:?}", row.id, column, text);
                    warnings.push(TableError::UnparseableValue {
                        column: column.to_string(),
                        row: row.id,
                        text: text.to_string(),
                        expected: data_type,
                    });
                }
                (key, row)
            })
            .collect();

        // slice::sort_by is stable: equal keys keep their relative order
        let collation = &self.collation;
        keyed.sort_by(|(a, _), (b, _)| order.apply(compare_keys(a, b, collation)));
        self.table.rows = keyed.into_iter().map(|(_, row)| row).collect();

        self.orders[index] = order.toggle();
        self.indicator = Some(SortIndicator {
            column: column.to_string(),
            order,
        });

        tracing::debug!(
            "Sorted {} rows by {} ({:?}), {} unparseable",
            self.table.rows.len(),
            column,
            order,
            warnings.len()
        );

        Ok(SortOutcome {
            column: column.to_string(),
            order,
            row_order: self.row_order(),
            warnings,
        })
    }

    /// Establish a default order on load, e.g. newest first by creation date.
    /// The next `sort_by` on the same column uses the opposite order.
    pub fn initial_sort(&mut self, column: &str, order: SortOrder) -> Result<SortOutcome, TableError> {
        let index = self.resolve(column)?;
        self.orders[index] = order;
        self.sort_by(column)
    }

    /// Mark rows whose expiry date is before `now`.
    ///
    /// Empty or "no expiry" cells are never expired. Unparseable text also
    /// counts as not expired and is reported in the warnings.
    pub fn highlight_expired(
        &mut self,
        expiry_column: &str,
        now: NaiveDateTime,
    ) -> Result<ExpiryReport, TableError> {
        let index = self.resolve(expiry_column)?;
        if self.table.columns[index].data_type != DataType::Date {
            tracing::debug!("Expiry column {} is not declared as a date column", expiry_column);
        }

        let mut flags = Vec::with_capacity(self.table.rows.len());
        let mut warnings = Vec::new();
        for row in &mut self.table.rows {
            let text = row.cells.get(index).map(|c| c.text.trim()).unwrap_or("");
            row.expired = if self.config.is_no_expiry(text) {
                false
            } else {
                match parse_date(text, &self.config) {
                    Some(expiry) => expiry < now,
                    None => {
                        tracing::debug!("Row {}: unparseable expiry {:?}, not marking", row.id, text);
                        warnings.push(TableError::UnparseableValue {
                            column: expiry_column.to_string(),
                            row: row.id,
                            text: text.to_string(),
                            expected: DataType::Date,
                        });
                        false
                    }
                }
            };
            flags.push((row.id, row.expired));
        }

        let report = ExpiryReport { flags, warnings };
        tracing::debug!(
            "Expiry pass on {}: {} of {} rows expired",
            expiry_column,
            report.expired_count(),
            report.flags.len()
        );
        Ok(report)
    }
}
