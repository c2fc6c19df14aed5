//! Load an estimator workbook into named tables

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, open_workbook_auto};

use super::{Cell, Table, Workbook};

/// Options controlling how sheets are turned into tables
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Treat the first sheet row as column labels and drop it
    pub header_row: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { header_row: true }
    }
}

/// Read every worksheet of the workbook at `path`
///
/// A missing file and a file that is not a readable workbook are both errors.
/// Individual sheets that fail to read are logged and left out.
pub fn load_workbook<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Workbook> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("Workbook not found: {}", path.display());
    }

    let mut sheets = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let mut workbook = Workbook::new();
    for sheet_name in sheets.sheet_names() {
        let range = match sheets.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("Skipping sheet '{}': {}", sheet_name, e);
                continue;
            }
        };

        let mut table = range_to_table(&range);
        if options.header_row {
            table = table.without_first_row();
        }

        log::debug!(
            "Loaded sheet '{}' ({} rows x {} columns)",
            sheet_name,
            table.row_count(),
            table.width()
        );
        workbook.add_sheet(sheet_name, table);
    }

    log::info!("Loaded {} sheets from {}", workbook.len(), path.display());
    Ok(workbook)
}

/// Convert a calamine range into a table keyed by absolute sheet coordinates
///
/// Ranges that do not start at A1 are padded with empty cells so column
/// indices keep their sheet meaning (column I is always index 8).
fn range_to_table(range: &Range<Data>) -> Table {
    let Some((start_row, start_col)) = range.start() else {
        return Table::default();
    };

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col as usize];
        cells.extend(row.iter().map(data_to_cell));
        rows.push(cells);
    }

    Table::new(rows)
}

/// Convert a calamine cell to a [`Cell`]
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Text(format!("{}", dt)),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        // #N/A, #DIV/0! and friends carry no price information
        Data::Error(_) => Cell::Empty,
    }
}
