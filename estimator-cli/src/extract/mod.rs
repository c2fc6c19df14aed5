//! Sheet extraction strategies
//!
//! Each sheet shape has its own strategy turning a [`Table`] into pricing
//! records. Rows are handled independently: every row produces a
//! [`RowOutcome`], and skipped rows are reported to the [`RunReport`] without
//! stopping the sheet.

mod doors;
mod frames;
mod price;
mod record;
mod simple;
mod wood_doors;

use std::fmt;

use crate::report::RunReport;
use crate::rules::ClassificationRules;
use crate::workbook::{Cell, Table, cell_at};

pub use price::{Sign, parse_label, parse_price};
pub use record::{PricingRecord, StockStatus};

/// Column holding the item name on item/price sheets
pub const NAME_COLUMN: usize = 0;
/// Column holding the price on item/price sheets
pub const PRICE_COLUMN: usize = 1;
/// Column holding the stock marker on item/price sheets
pub const STOCK_COLUMN: usize = 2;

/// Why a row (or a row/species cell) produced no record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Required cell is empty
    BlankCell { column: usize },
    /// Required text is only whitespace
    EmptyLabel { column: usize },
    /// Cell text does not have the shape of a price
    NotNumeric { column: usize, value: String },
    /// Cell text looks like a price but is not a number
    NotCoercible { column: usize, value: String },
}

impl SkipReason {
    pub fn is_blank(&self) -> bool {
        matches!(self, SkipReason::BlankCell { .. })
    }

    /// Values that passed the shape test and still could not be read
    pub fn is_malformed(&self) -> bool {
        matches!(self, SkipReason::NotCoercible { .. })
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::BlankCell { column } => write!(f, "column {} is blank", column),
            SkipReason::EmptyLabel { column } => {
                write!(f, "column {} is empty after trimming", column)
            }
            SkipReason::NotNumeric { column, value } => {
                write!(f, "column {} value '{}' is not a price", column, value)
            }
            SkipReason::NotCoercible { column, value } => write!(
                f,
                "column {} value '{}' could not be converted to a number",
                column, value
            ),
        }
    }
}

/// Result of extracting one row (or one row/species pair)
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Emit(PricingRecord),
    Skip(SkipReason),
}

impl From<Result<PricingRecord, SkipReason>> for RowOutcome {
    fn from(result: Result<PricingRecord, SkipReason>) -> Self {
        match result {
            Ok(record) => RowOutcome::Emit(record),
            Err(reason) => RowOutcome::Skip(reason),
        }
    }
}

/// Sheet shape, selecting the strategy used to read it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLayout {
    /// Item/price/stock rows below a 4-row header
    Doors,
    /// Item/price/stock rows, signed prices, no header skip
    SimplePricing,
    /// Item/price rows classified into subcategories by name
    Frames,
    /// Door-size rows with one price column per species
    WoodDoors,
}

impl SheetLayout {
    /// Run the strategy for this layout
    pub fn extract(
        self,
        table: &Table,
        category: &str,
        rules: &ClassificationRules,
        report: &mut RunReport,
    ) -> Vec<PricingRecord> {
        match self {
            SheetLayout::Doors => doors::extract(table, report),
            SheetLayout::SimplePricing => simple::extract(table, category, report),
            SheetLayout::Frames => frames::extract(table, rules, report),
            SheetLayout::WoodDoors => wood_doors::extract(table, category, rules, report),
        }
    }
}

impl fmt::Display for SheetLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SheetLayout::Doors => "doors",
            SheetLayout::SimplePricing => "simple pricing",
            SheetLayout::Frames => "frames",
            SheetLayout::WoodDoors => "wood doors",
        };
        f.write_str(name)
    }
}

/// Item name and price read from the name and price columns
pub(crate) struct PricedItem {
    pub item_name: String,
    pub price: f64,
}

/// Read columns 0 and 1 of an item/price row
pub(crate) fn read_priced_item(row: &[Cell], sign: Sign) -> Result<PricedItem, SkipReason> {
    for column in [NAME_COLUMN, PRICE_COLUMN] {
        if cell_at(row, column).is_blank() {
            return Err(SkipReason::BlankCell { column });
        }
    }

    let item_name = parse_label(row, NAME_COLUMN)?;
    let price = parse_price(row, PRICE_COLUMN, sign)?;
    Ok(PricedItem { item_name, price })
}

/// `stock` when the stock column exists and mentions "Stock"
pub(crate) fn stock_status(row: &[Cell], table_width: usize) -> StockStatus {
    if table_width > STOCK_COLUMN && cell_at(row, STOCK_COLUMN).to_text().contains("Stock") {
        StockStatus::Stock
    } else {
        StockStatus::SpecialOrder
    }
}

/// Drive a single-record-per-row strategy over `table` from `skip` on
pub(crate) fn extract_rows<F>(
    table: &Table,
    skip: usize,
    report: &mut RunReport,
    mut extract_row: F,
) -> Vec<PricingRecord>
where
    F: FnMut(&[Cell]) -> RowOutcome,
{
    let mut records = Vec::new();
    for (row_idx, row) in table.rows_from(skip) {
        report.row_seen();
        settle(extract_row(row), row_idx, &mut records, report);
    }
    records
}

/// Keep an emitted record or report the skip
pub(crate) fn settle(
    outcome: RowOutcome,
    row_idx: usize,
    records: &mut Vec<PricingRecord>,
    report: &mut RunReport,
) {
    match outcome {
        RowOutcome::Emit(record) => {
            report.record_emitted();
            records.push(record);
        }
        RowOutcome::Skip(reason) => report.skip(row_idx, &reason),
    }
}
