//! SQL import script: one INSERT per pricing record

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::ValueEnum;

use crate::catalog::Catalog;
use crate::extract::PricingRecord;

/// Table the pricing store loads records into
pub const PRICING_TABLE: &str = "door_estimator_pricing";

const COLUMNS: &str =
    "category, subcategory, item_name, price, stock_status, description, created_at, updated_at";

/// Target database, selecting the current-timestamp function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SqlDialect {
    #[default]
    Mysql,
    Postgres,
    Sqlite,
}

impl SqlDialect {
    pub fn current_timestamp(&self) -> &'static str {
        match self {
            SqlDialect::Mysql | SqlDialect::Postgres => "NOW()",
            SqlDialect::Sqlite => "CURRENT_TIMESTAMP",
        }
    }
}

/// Render the full script; `generated_at` only appears in the header comment
pub fn render_sql(catalog: &Catalog, dialect: SqlDialect, generated_at: &str) -> String {
    let mut sql = String::new();
    let _ = writeln!(sql, "-- Door Estimator Pricing Data Import");
    let _ = writeln!(sql, "-- Generated on {}", generated_at);
    sql.push('\n');

    for (category, records) in catalog.categories() {
        let _ = writeln!(sql, "-- {} items", category);
        for record in records {
            sql.push_str(&insert_statement(record, dialect));
            sql.push('\n');
        }
        sql.push('\n');
    }

    sql
}

pub fn write_sql(catalog: &Catalog, dialect: SqlDialect, path: &Path) -> Result<()> {
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let sql = render_sql(catalog, dialect, &generated_at);

    super::ensure_parent_dir(path)?;
    fs::write(path, sql)
        .with_context(|| format!("Failed to write SQL script: {}", path.display()))?;

    log::info!("SQL script saved to {}", path.display());
    Ok(())
}

fn insert_statement(record: &PricingRecord, dialect: SqlDialect) -> String {
    let now = dialect.current_timestamp();
    format!(
        "INSERT INTO {} ({}) VALUES ({}, {}, {}, {:?}, {}, {}, {}, {});",
        PRICING_TABLE,
        COLUMNS,
        quote(&record.category),
        quote_optional(record.subcategory.as_deref()),
        quote(&record.item_name),
        record.price,
        quote(record.stock_status.as_str()),
        quote_optional(Some(record.description.as_str())),
        now,
        now
    )
}

/// Single-quoted literal with embedded quotes doubled
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Absent and empty values become NULL
fn quote_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => quote(v),
        _ => "NULL".to_string(),
    }
}
