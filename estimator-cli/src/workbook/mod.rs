//! Spreadsheet access: cell/table model and the workbook loader

mod grid;
mod loader;

pub use grid::{Cell, Table, Workbook, cell_at};
pub use loader::{LoadOptions, load_workbook};

#[cfg(test)]
pub(crate) use grid::table;
