//! Flat CSV export of the catalog, one line per record

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::catalog::Catalog;

/// Write every record with a header row; a missing subcategory is an empty field
pub fn write_csv(catalog: &Catalog, path: &Path) -> Result<()> {
    super::ensure_parent_dir(path)?;

    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    for record in catalog.records() {
        wtr.serialize(record)
            .with_context(|| format!("Failed to write record: {}", record.item_name))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;

    log::info!("CSV file exported to: {}", path.display());
    Ok(())
}
