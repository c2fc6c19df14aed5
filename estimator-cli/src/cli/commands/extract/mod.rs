//! `extract` command: workbook -> catalog -> JSON/SQL (and optional CSV)

mod handler;

pub use handler::handle_extract_command;

use std::path::PathBuf;

use clap::Args;

use crate::export::SqlDialect;

pub const DEFAULT_WORKBOOK: &str = "Estimator 050825.xlsx";
pub const DEFAULT_JSON_OUTPUT: &str = "scripts/extracted_pricing_data.json";
pub const DEFAULT_SQL_OUTPUT: &str = "scripts/pricing_data_import.sql";

#[derive(Args, Debug, Clone)]
pub struct ExtractCommands {
    /// Estimator workbook to read
    #[arg(default_value = DEFAULT_WORKBOOK)]
    pub workbook: PathBuf,

    /// Classification rules file (JSON, or TOML by extension)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// JSON catalog output path
    #[arg(long, default_value = DEFAULT_JSON_OUTPUT)]
    pub json: PathBuf,

    /// SQL import script output path
    #[arg(long, default_value = DEFAULT_SQL_OUTPUT)]
    pub sql: PathBuf,

    /// Also write a flat CSV of all records
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// SQL dialect used for the timestamp columns
    #[arg(long, value_enum, default_value_t = SqlDialect::Mysql)]
    pub dialect: SqlDialect,

    /// Only extract these sheets (repeatable)
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheets: Vec<String>,

    /// The first sheet row holds data, not column labels
    #[arg(long)]
    pub no_header_row: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
