//! Frames sheet: item/price rows classified by name into frame subcategories

use crate::report::RunReport;
use crate::rules::ClassificationRules;
use crate::workbook::{Cell, Table};

use super::{PricingRecord, RowOutcome, Sign, StockStatus, extract_rows, read_priced_item};

pub const CATEGORY: &str = "frames";

/// Frames carry no stock column; every frame is a stock item
pub fn extract(
    table: &Table,
    rules: &ClassificationRules,
    report: &mut RunReport,
) -> Vec<PricingRecord> {
    extract_rows(table, 0, report, |row| extract_row(row, rules))
}

fn extract_row(row: &[Cell], rules: &ClassificationRules) -> RowOutcome {
    read_priced_item(row, Sign::Signed)
        .map(|item| {
            let subcategory = rules.classify_frame(&item.item_name).to_string();
            PricingRecord::new(CATEGORY, item.item_name, item.price, StockStatus::Stock)
                .with_subcategory(subcategory)
        })
        .into()
}
