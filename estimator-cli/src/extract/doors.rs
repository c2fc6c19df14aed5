//! Doors sheet: item/price/stock rows below a fixed 4-row header

use crate::report::RunReport;
use crate::workbook::{Cell, Table};

use super::{PricingRecord, RowOutcome, Sign, extract_rows, read_priced_item, stock_status};

pub const CATEGORY: &str = "doors";

/// Rows above the first door entry
pub const HEADER_ROWS: usize = 4;

pub fn extract(table: &Table, report: &mut RunReport) -> Vec<PricingRecord> {
    let width = table.width();
    extract_rows(table, HEADER_ROWS, report, |row| extract_row(row, width))
}

/// Door prices are never negative, so `-` is not ignored by the shape test
fn extract_row(row: &[Cell], table_width: usize) -> RowOutcome {
    read_priced_item(row, Sign::Unsigned)
        .map(|item| {
            PricingRecord::new(
                CATEGORY,
                item.item_name,
                item.price,
                stock_status(row, table_width),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::StockStatus;
    use crate::workbook::table;

    fn header_rows() -> Vec<Vec<Cell>> {
        vec![vec![Cell::from("Header"); 3]; HEADER_ROWS]
    }

    #[test]
    fn test_extract_doors_basic() {
        let mut rows = header_rows();
        rows.push(vec!["Door A".into(), 100.into(), "Stock".into()]);
        rows.push(vec!["Door B".into(), 200.into(), "Special".into()]);
        rows.push(vec![Cell::Empty, Cell::Empty, Cell::Empty]);
        let table = Table::new(rows);

        let mut report = RunReport::new();
        let records = extract(&table, &mut report);

        assert_eq!(
            records,
            vec![
                PricingRecord::new("doors", "Door A", 100.0, StockStatus::Stock),
                PricingRecord::new("doors", "Door B", 200.0, StockStatus::SpecialOrder),
            ]
        );
        assert_eq!(report.sheets()[0].rows_seen, 3);
    }

    #[test]
    fn test_header_rows_are_never_read() {
        let table = table![
            ["Door X", 1, "Stock"],
            ["Door X", 2, "Stock"],
            ["Door X", 3, "Stock"],
            ["Door X", 4, "Stock"],
            ["Door Y", 5, "Stock"],
        ];
        let records = extract(&table, &mut RunReport::new());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item_name, "Door Y");
    }

    #[test]
    fn test_negative_door_price_rejected() {
        let mut rows = header_rows();
        rows.push(vec!["Credit".into(), (-5).into(), Cell::Empty]);
        rows.push(vec!["Credit".into(), "-5".into(), Cell::Empty]);
        let records = extract(&Table::new(rows), &mut RunReport::new());
        assert!(records.is_empty());
    }

    #[test]
    fn test_trims_name_and_reads_text_prices() {
        let mut rows = header_rows();
        rows.push(vec!["  3070 HM Door  ".into(), "412.50".into(), "Stock item".into()]);
        let records = extract(&Table::new(rows), &mut RunReport::new());
        assert_eq!(records[0].item_name, "3070 HM Door");
        assert_eq!(records[0].price, 412.5);
        assert_eq!(records[0].stock_status, StockStatus::Stock);
        assert_eq!(records[0].subcategory, None);
    }

    #[test]
    fn test_blank_name_or_price_skipped() {
        let mut rows = header_rows();
        rows.push(vec![Cell::Empty, 100.into(), "Stock".into()]);
        rows.push(vec!["Door C".into(), Cell::Empty, "Stock".into()]);
        let mut report = RunReport::new();
        let records = extract(&Table::new(rows), &mut report);
        assert!(records.is_empty());
        assert_eq!(report.sheets()[0].blank, 2);
    }
}
