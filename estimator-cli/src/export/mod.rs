//! Catalog writers: JSON document, SQL import script and flat CSV

mod csv_exporter;
mod json;
mod sql;

pub use csv_exporter::write_csv;
pub use json::write_json;
pub use sql::{SqlDialect, write_sql};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Create the directory an output file goes into
fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display())),
        _ => Ok(()),
    }
}
