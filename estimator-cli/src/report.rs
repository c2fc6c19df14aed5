//! Per-run extraction report
//!
//! Passed by `&mut` through the assembler into every strategy. It logs each
//! skipped row with its sheet and row index and keeps the counts shown in
//! the end-of-run summary.

use crate::extract::SkipReason;

/// Counters for one extracted sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetStats {
    pub sheet: String,
    pub category: String,
    /// Rows visited after the strategy's header skip
    pub rows_seen: usize,
    pub records: usize,
    /// Skips caused by blank cells
    pub blank: usize,
    /// Skips of cells that had content but no usable value
    pub rejected: usize,
}

#[derive(Debug, Default)]
pub struct RunReport {
    sheets: Vec<SheetStats>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting for a sheet; subsequent calls apply to it
    pub fn begin_sheet(&mut self, sheet: &str, category: &str) {
        self.sheets.push(SheetStats {
            sheet: sheet.to_string(),
            category: category.to_string(),
            ..SheetStats::default()
        });
    }

    fn current(&mut self) -> &mut SheetStats {
        if self.sheets.is_empty() {
            self.begin_sheet("<unnamed>", "<unnamed>");
        }
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }

    pub fn row_seen(&mut self) {
        self.current().rows_seen += 1;
    }

    pub fn record_emitted(&mut self) {
        self.current().records += 1;
    }

    /// Log a skipped row (or row/column pair) and count it
    pub fn skip(&mut self, row_idx: usize, reason: &SkipReason) {
        let stats = self.current();
        if reason.is_blank() {
            stats.blank += 1;
            log::trace!("{}: row {} skipped: {}", stats.sheet, row_idx, reason);
        } else if reason.is_malformed() {
            stats.rejected += 1;
            log::warn!("{}: row {} skipped: {}", stats.sheet, row_idx, reason);
        } else {
            stats.rejected += 1;
            log::debug!("{}: row {} skipped: {}", stats.sheet, row_idx, reason);
        }
    }

    /// Log the outcome of the current sheet
    pub fn finish_sheet(&mut self) {
        let stats = self.current();
        log::info!(
            "Extracted {} items from {} sheet ({} rows, {} skipped)",
            stats.records,
            stats.sheet,
            stats.rows_seen,
            stats.rejected
        );
    }

    pub fn sheets(&self) -> &[SheetStats] {
        &self.sheets
    }

    pub fn sheet(&self, sheet: &str) -> Option<&SheetStats> {
        self.sheets.iter().find(|s| s.sheet == sheet)
    }

    pub fn total_records(&self) -> usize {
        self.sheets.iter().map(|s| s.records).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.sheets.iter().map(|s| s.rejected).sum()
    }
}
