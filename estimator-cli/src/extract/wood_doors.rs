//! Solid-core wood door sheets (SCwood, SCfire)
//!
//! Below a 6-row header each row carries a door size in column I and a price
//! per wood species in the species columns. A row yields one record per
//! priced species.

use crate::report::RunReport;
use crate::rules::{ClassificationRules, SpeciesColumn};
use crate::workbook::{Cell, Table, cell_at};

use super::{PricingRecord, RowOutcome, Sign, SkipReason, StockStatus, parse_price, settle};

/// Category whose item names get the fire-rating suffix
pub const FIRE_RATED_CATEGORY: &str = "scfire";

pub const HEADER_ROWS: usize = 6;

/// Column I
pub const DOOR_SIZE_COLUMN: usize = 8;

const FIRE_RATED_SUFFIX: &str = " Fire Rated";

pub fn extract(
    table: &Table,
    category: &str,
    rules: &ClassificationRules,
    report: &mut RunReport,
) -> Vec<PricingRecord> {
    let width = table.width();
    let mut records = Vec::new();

    for (row_idx, row) in table.rows_from(HEADER_ROWS) {
        report.row_seen();
        for outcome in extract_row(row, width, category, rules) {
            settle(outcome, row_idx, &mut records, report);
        }
    }

    records
}

/// One outcome per species column inside the table, or a single skip when
/// the row has no door size
fn extract_row(
    row: &[Cell],
    table_width: usize,
    category: &str,
    rules: &ClassificationRules,
) -> Vec<RowOutcome> {
    let size_cell = cell_at(row, DOOR_SIZE_COLUMN);
    if size_cell.is_blank() {
        return vec![RowOutcome::Skip(SkipReason::BlankCell {
            column: DOOR_SIZE_COLUMN,
        })];
    }
    let door_size = size_cell.to_text().trim().to_string();

    rules
        .species_columns()
        .iter()
        .filter(|species| species.column < table_width)
        .map(|species| RowOutcome::from(species_record(row, &door_size, species, category)))
        .collect()
}

fn species_record(
    row: &[Cell],
    door_size: &str,
    species: &SpeciesColumn,
    category: &str,
) -> Result<PricingRecord, SkipReason> {
    let price = parse_price(row, species.column, Sign::Signed)?;

    let mut item_name = format!("{} Solid Core Wood Door - {}", door_size, species.species);
    if category == FIRE_RATED_CATEGORY {
        item_name.push_str(FIRE_RATED_SUFFIX);
    }

    Ok(
        PricingRecord::new(category, item_name, price, StockStatus::SpecialOrder)
            .with_subcategory(species.species.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wood_table(data_rows: Vec<Vec<Cell>>) -> Table {
        let mut rows = vec![vec![Cell::Empty; 14]; HEADER_ROWS];
        rows.extend(data_rows);
        Table::new(rows)
    }

    fn data_row(size: &str, prices: [Cell; 5]) -> Vec<Cell> {
        let mut row: Vec<Cell> = vec![
            "Size".into(),
            "x".into(),
            "x".into(),
            "x".into(),
            "x".into(),
            "x".into(),
            "x".into(),
            "x".into(),
            size.into(),
        ];
        row.extend(prices);
        row
    }

    fn priced(values: [f64; 5]) -> [Cell; 5] {
        values.map(Cell::Number)
    }

    #[test]
    fn test_extract_wood_door_basic() {
        let table = wood_table(vec![
            data_row("36x80", priced([200.0, 210.0, 220.0, 230.0, 240.0])),
            data_row("32x80", priced([300.0, 310.0, 320.0, 330.0, 340.0])),
        ]);
        let records = extract(&table, "scwood", &ClassificationRules::default(), &mut RunReport::new());

        assert_eq!(records.len(), 10);
        assert!(records[0].item_name.starts_with("36x80 Solid Core Wood Door - Lauan"));
        assert!(records[5].item_name.starts_with("32x80 Solid Core Wood Door - Lauan"));
        assert_eq!(records[0].price, 200.0);
        assert_eq!(records[9].price, 340.0);
        assert_eq!(records[9].subcategory.as_deref(), Some("Legacy"));
        assert!(records.iter().all(|r| !r.item_name.ends_with("Fire Rated")));
        assert!(records
            .iter()
            .all(|r| r.stock_status == StockStatus::SpecialOrder && r.category == "scwood"));
    }

    #[test]
    fn test_fire_rated_suffix() {
        let table = wood_table(vec![data_row(
            "30x84",
            priced([410.0, 420.0, 430.0, 440.0, 450.0]),
        )]);
        let records = extract(&table, "scfire", &ClassificationRules::default(), &mut RunReport::new());

        assert_eq!(records.len(), 5);
        assert_eq!(
            records[1].item_name,
            "30x84 Solid Core Wood Door - Birch Fire Rated"
        );
        assert!(records.iter().all(|r| r.item_name.ends_with(" Fire Rated")));
    }

    #[test]
    fn test_k_priced_species_yield_k_records() {
        let prices = [
            Cell::Number(150.0),
            Cell::Empty,
            Cell::from("N/A"),
            Cell::from("175.5"),
            Cell::Empty,
        ];
        let table = wood_table(vec![data_row("28x80", prices)]);
        let records = extract(&table, "scwood", &ClassificationRules::default(), &mut RunReport::new());

        let species: Vec<_> = records
            .iter()
            .map(|r| (r.subcategory.as_deref().unwrap_or_default(), r.price))
            .collect();
        assert_eq!(species, vec![("Lauan", 150.0), ("Raw HB", 175.5)]);
    }

    #[test]
    fn test_blank_door_size_skips_row() {
        let mut row = data_row("36x80", priced([1.0, 2.0, 3.0, 4.0, 5.0]));
        row[DOOR_SIZE_COLUMN] = Cell::Empty;
        let table = wood_table(vec![row]);

        let mut report = RunReport::new();
        let records = extract(&table, "scwood", &ClassificationRules::default(), &mut report);
        assert!(records.is_empty());
        assert_eq!(report.sheets()[0].blank, 1);
    }

    #[test]
    fn test_header_rows_skipped() {
        let mut rows = vec![data_row("99x99", priced([1.0; 5])); HEADER_ROWS];
        rows.push(data_row("36x80", priced([5.0; 5])));
        let records = extract(
            &Table::new(rows),
            "scwood",
            &ClassificationRules::default(),
            &mut RunReport::new(),
        );
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.item_name.starts_with("36x80")));
    }

    #[test]
    fn test_species_columns_outside_table_ignored() {
        // Only columns 0..=10 exist, so Oak, Raw HB and Legacy are out of range
        let mut rows = vec![vec![Cell::Empty; 11]; HEADER_ROWS];
        let mut row = vec![Cell::Empty; 8];
        row.extend([Cell::Number(3680.0), Cell::Number(10.0), Cell::Number(11.0)]);
        rows.push(row);

        let records = extract(
            &Table::new(rows),
            "scwood",
            &ClassificationRules::default(),
            &mut RunReport::new(),
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item_name, "3680 Solid Core Wood Door - Lauan");
    }

    #[test]
    fn test_custom_species_columns() {
        let rules = ClassificationRules {
            species_columns: vec![SpeciesColumn::new("Maple", 13), SpeciesColumn::new("Ash", 9)],
            ..ClassificationRules::default()
        };
        let table = wood_table(vec![data_row(
            "36x84",
            priced([100.0, 0.0, 0.0, 0.0, 500.0]),
        )]);
        let records = extract(&table, "scwood", &rules, &mut RunReport::new());

        assert_eq!(records[0].subcategory.as_deref(), Some("Maple"));
        assert_eq!(records[0].price, 500.0);
        assert_eq!(records[1].subcategory.as_deref(), Some("Ash"));
        assert_eq!(records[1].price, 100.0);
    }
}
