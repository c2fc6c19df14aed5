//! Dispatch workbook sheets to their strategies and collect the catalog

use crate::extract::SheetLayout;
use crate::report::RunReport;
use crate::rules::ClassificationRules;
use crate::workbook::Workbook;

use super::Catalog;

/// Which category and strategy a sheet feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetBinding {
    pub sheet: &'static str,
    pub category: &'static str,
    pub layout: SheetLayout,
}

const fn bind(sheet: &'static str, category: &'static str, layout: SheetLayout) -> SheetBinding {
    SheetBinding {
        sheet,
        category,
        layout,
    }
}

/// Known sheets, in catalog order
pub const DISPATCH_TABLE: &[SheetBinding] = &[
    bind("Doors", "doors", SheetLayout::Doors),
    bind("Inserts", "inserts", SheetLayout::SimplePricing),
    bind("Frames", "frames", SheetLayout::Frames),
    bind("Hinges", "hinges", SheetLayout::SimplePricing),
    bind("WSTRP", "weatherstrip", SheetLayout::SimplePricing),
    bind("Locksets", "locksets", SheetLayout::SimplePricing),
    bind("Exit Devices", "exitDevices", SheetLayout::SimplePricing),
    bind("Closers", "closers", SheetLayout::SimplePricing),
    bind("Hardware", "hardware", SheetLayout::SimplePricing),
    bind("SCwood", "scwood", SheetLayout::WoodDoors),
    bind("SCfire", "scfire", SheetLayout::WoodDoors),
];

/// Builds a [`Catalog`] from a workbook using the dispatch table
pub struct CatalogAssembler<'a> {
    rules: &'a ClassificationRules,
    bindings: Vec<SheetBinding>,
}

impl<'a> CatalogAssembler<'a> {
    pub fn new(rules: &'a ClassificationRules) -> Self {
        Self {
            rules,
            bindings: DISPATCH_TABLE.to_vec(),
        }
    }

    /// Restrict extraction to the named sheets; an empty list keeps all of them
    pub fn with_sheets<S: AsRef<str>>(mut self, sheets: &[S]) -> Self {
        if sheets.is_empty() {
            return self;
        }

        for name in sheets {
            if !DISPATCH_TABLE.iter().any(|b| b.sheet == name.as_ref()) {
                log::warn!("Sheet '{}' has no extraction strategy, ignoring", name.as_ref());
            }
        }

        self.bindings
            .retain(|b| sheets.iter().any(|name| name.as_ref() == b.sheet));
        self
    }

    pub fn bindings(&self) -> &[SheetBinding] {
        &self.bindings
    }

    /// Run every bound strategy whose sheet is present in `workbook`
    pub fn assemble(&self, workbook: &Workbook, report: &mut RunReport) -> Catalog {
        for name in workbook.sheet_names() {
            if !DISPATCH_TABLE.iter().any(|b| b.sheet == name) {
                log::debug!("Ignoring sheet '{}': no extraction strategy", name);
            }
        }

        let mut catalog = Catalog::new();
        for binding in &self.bindings {
            let Some(table) = workbook.sheet(binding.sheet) else {
                log::debug!("Sheet '{}' not in workbook", binding.sheet);
                continue;
            };

            log::debug!(
                "Extracting sheet '{}' as {} into '{}'",
                binding.sheet,
                binding.layout,
                binding.category
            );
            report.begin_sheet(binding.sheet, binding.category);
            let records = binding
                .layout
                .extract(table, binding.category, self.rules, report);
            report.finish_sheet();

            catalog.insert(binding.category, records);
        }

        log::info!(
            "Assembled {} records in {} categories",
            catalog.total_records(),
            catalog.len()
        );
        catalog
    }
}
