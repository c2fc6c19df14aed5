//! Extract command handler

use anyhow::Result;
use colored::*;

use super::ExtractCommands;
use crate::catalog::{Catalog, CatalogAssembler};
use crate::export::{write_csv, write_json, write_sql};
use crate::report::RunReport;
use crate::rules::load_rules;
use crate::workbook::{LoadOptions, load_workbook};

/// Run one extraction: load, assemble, write, summarize
pub fn handle_extract_command(args: ExtractCommands) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let (catalog, report) = run_extraction(&args)?;
    print_summary(&catalog);
    if report.total_rejected() > 0 {
        log::info!(
            "{} rows skipped in total; run with -v for details",
            report.total_rejected()
        );
    }
    Ok(())
}

/// Everything except the terminal summary
pub fn run_extraction(args: &ExtractCommands) -> Result<(Catalog, RunReport)> {
    let rules = load_rules(args.rules.as_deref());

    log::info!("Extracting data from {}...", args.workbook.display());
    let options = LoadOptions {
        header_row: !args.no_header_row,
    };
    let workbook = load_workbook(&args.workbook, &options)?;

    let mut report = RunReport::new();
    let catalog = CatalogAssembler::new(&rules)
        .with_sheets(&args.sheets)
        .assemble(&workbook, &mut report);

    write_json(&catalog, &args.json)?;
    write_sql(&catalog, args.dialect, &args.sql)?;
    if let Some(csv_path) = &args.csv {
        write_csv(&catalog, csv_path)?;
    }

    Ok((catalog, report))
}

fn print_summary(catalog: &Catalog) {
    println!();
    println!("{}", "Extraction Summary:".bold());

    for (category, records) in catalog.categories() {
        println!("  {}: {} items", category.cyan(), records.len());
    }

    println!(
        "  {}",
        format!("Total: {} items", catalog.total_records())
            .bright_green()
            .bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::SqlDialect;
    use rust_xlsxwriter::Workbook as XlsxWorkbook;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;

    fn write_estimator(path: &Path) {
        let mut xlsx = XlsxWorkbook::new();

        // Row 0 is the label row dropped by the loader
        let doors = xlsx.add_worksheet();
        doors.set_name("Doors").unwrap();
        for row in 0..5 {
            doors.write_string(row, 0, "Header").unwrap();
        }
        doors.write_string(5, 0, "Door A").unwrap();
        doors.write_number(5, 1, 100.0).unwrap();
        doors.write_string(5, 2, "Stock").unwrap();
        doors.write_string(6, 0, "Door B").unwrap();
        doors.write_number(6, 1, 200.0).unwrap();
        doors.write_string(6, 2, "Special").unwrap();

        let frames = xlsx.add_worksheet();
        frames.set_name("Frames").unwrap();
        frames.write_string(0, 0, "Frame").unwrap();
        frames.write_string(0, 1, "Price").unwrap();
        for (row, (name, price)) in [("Frame A", 50.0), ("Frame EWA", 60.0), ("Frame USA", 70.0)]
            .into_iter()
            .enumerate()
        {
            frames.write_string(row as u32 + 1, 0, name).unwrap();
            frames.write_number(row as u32 + 1, 1, price).unwrap();
        }

        let scfire = xlsx.add_worksheet();
        scfire.set_name("SCfire").unwrap();
        scfire.write_string(0, 0, "Solid core fire rated").unwrap();
        scfire.write_string(7, 8, "36x84").unwrap();
        for (offset, price) in [400.0, 410.0, 420.0, 430.0, 440.0].into_iter().enumerate() {
            scfire.write_number(7, 9 + offset as u16, price).unwrap();
        }

        xlsx.save(path).unwrap();
    }

    fn args_in(dir: &Path) -> ExtractCommands {
        ExtractCommands {
            workbook: dir.join("Estimator.xlsx"),
            rules: Some(dir.join("no_rules_here.json")),
            json: dir.join("scripts").join("extracted_pricing_data.json"),
            sql: dir.join("scripts").join("pricing_data_import.sql"),
            csv: None,
            dialect: SqlDialect::Mysql,
            sheets: Vec::new(),
            no_header_row: false,
            no_color: true,
        }
    }

    #[test]
    fn test_run_extraction_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        write_estimator(&args.workbook);

        let (catalog, report) = run_extraction(&args).unwrap();
        assert_eq!(catalog.get("doors").unwrap().len(), 2);
        assert_eq!(catalog.get("frames").unwrap().len(), 3);
        assert_eq!(catalog.get("scfire").unwrap().len(), 5);
        assert_eq!(report.total_records(), 10);

        let json: Value = serde_json::from_str(&fs::read_to_string(&args.json).unwrap()).unwrap();
        assert_eq!(json["doors"][0]["item_name"], "Door A");
        assert_eq!(json["frames"][1]["subcategory"], "HM EWA");
        assert_eq!(
            json["scfire"][0]["item_name"],
            "36x84 Solid Core Wood Door - Lauan Fire Rated"
        );

        let sql = fs::read_to_string(&args.sql).unwrap();
        assert_eq!(sql.matches("INSERT INTO door_estimator_pricing").count(), 10);
    }

    #[test]
    fn test_json_output_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());
        write_estimator(&args.workbook);

        run_extraction(&args).unwrap();
        let first = fs::read(&args.json).unwrap();
        run_extraction(&args).unwrap();
        let second = fs::read(&args.json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_workbook_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_in(dir.path());

        let err = run_extraction(&args).unwrap_err();
        assert!(err.to_string().contains("Workbook not found"));
        assert!(!args.json.exists());
    }

    #[test]
    fn test_sheet_filter_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args_in(dir.path());
        args.sheets = vec!["Frames".to_string()];
        args.csv = Some(dir.path().join("pricing.csv"));
        write_estimator(&args.workbook);

        let (catalog, _) = run_extraction(&args).unwrap();
        assert_eq!(catalog.len(), 1);

        let csv = fs::read_to_string(dir.path().join("pricing.csv")).unwrap();
        assert_eq!(csv.lines().count(), 4);
    }
}
