//! JSON catalog document

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Catalog;

/// Pretty-printed catalog: category -> list of records
pub fn render_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).context("Failed to serialize catalog to JSON")
}

pub fn write_json(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = render_json(catalog)?;
    super::ensure_parent_dir(path)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON catalog: {}", path.display()))?;

    log::info!("Data saved to {}", path.display());
    Ok(())
}
