//! Item/price sheets: inserts, hinges, weatherstrip, locksets, exit devices,
//! closers and hardware

use crate::report::RunReport;
use crate::workbook::{Cell, Table};

use super::{PricingRecord, RowOutcome, Sign, extract_rows, read_priced_item, stock_status};

/// Every row is a candidate; header rows fail the price check and are skipped
pub fn extract(table: &Table, category: &str, report: &mut RunReport) -> Vec<PricingRecord> {
    let width = table.width();
    extract_rows(table, 0, report, |row| extract_row(row, category, width))
}

fn extract_row(row: &[Cell], category: &str, table_width: usize) -> RowOutcome {
    read_priced_item(row, Sign::Signed)
        .map(|item| {
            PricingRecord::new(
                category,
                item.item_name,
                item.price,
                stock_status(row, table_width),
            )
        })
        .into()
}
