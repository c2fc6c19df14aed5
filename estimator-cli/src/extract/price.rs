//! Cell checks shared by the strategies: blank detection, the price shape
//! test and coercion to `f64`

use crate::workbook::{Cell, cell_at};

use super::SkipReason;

/// Whether a strategy accepts negative prices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Only `.` is ignored by the shape test
    Unsigned,
    /// Both `.` and `-` are ignored by the shape test
    Signed,
}

/// Price shape test
///
/// With every `.` (and for [`Sign::Signed`] every `-`) removed, the text must
/// be non-empty and all ASCII digits. This is a shape test only: `"1.2.3"`
/// and `"--5"` pass and are rejected later by [`parse_price`].
pub fn is_price_shaped(text: &str, sign: Sign) -> bool {
    let mut digits = 0usize;
    for c in text.chars() {
        match c {
            '.' => {}
            '-' if sign == Sign::Signed => {}
            c if c.is_ascii_digit() => digits += 1,
            _ => return false,
        }
    }
    digits > 0
}

/// Read the price in `column`, applying the blank, shape and coercion checks
pub fn parse_price(row: &[Cell], column: usize, sign: Sign) -> Result<f64, SkipReason> {
    let cell = cell_at(row, column);
    if cell.is_blank() {
        return Err(SkipReason::BlankCell { column });
    }

    let text = cell.to_text();
    if !is_price_shaped(&text, sign) {
        return Err(SkipReason::NotNumeric {
            column,
            value: text,
        });
    }

    match cell.as_number() {
        Some(n) => Ok(n),
        None => text
            .parse::<f64>()
            .map_err(|_| SkipReason::NotCoercible { column, value: text }),
    }
}

/// Read the trimmed text in `column`; blank or whitespace-only cells are rejected
pub fn parse_label(row: &[Cell], column: usize) -> Result<String, SkipReason> {
    let cell = cell_at(row, column);
    if cell.is_blank() {
        return Err(SkipReason::BlankCell { column });
    }

    let text = cell.to_text().trim().to_string();
    if text.is_empty() {
        return Err(SkipReason::EmptyLabel { column });
    }
    Ok(text)
}
