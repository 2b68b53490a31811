//! Rendered, format-independent sheet layout
//!
//! A [`SheetLayout`] is everything the workbook writer needs to emit one
//! worksheet: header labels, typed cells, row shading, column widths, the
//! freeze cell and the autofilter range. Layouts compare by value, so two
//! renders of the same table can be checked for equality directly.

use super::cast::column_name;
use std::fmt;

/// Content of one rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Text cell
    Text(String),
    /// Numeric frequency score
    Score(u8),
    /// Optional field left empty
    Blank,
}

impl CellContent {
    /// Cell text, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Background shade of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowShade {
    /// Odd sheet rows
    Base,
    /// Even sheet rows
    Alternate,
}

/// One data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    /// Cells in column order
    pub cells: Vec<CellContent>,
    /// Background shade
    pub shade: RowShade,
}

/// Rectangular cell range with 0-based, inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// First row
    pub first_row: u32,
    /// First column
    pub first_col: u16,
    /// Last row
    pub last_row: u32,
    /// Last column
    pub last_col: u16,
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            column_name(self.first_col),
            self.first_row + 1,
            column_name(self.last_col),
            self.last_row + 1
        )
    }
}

/// A fully rendered sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Worksheet name
    pub name: String,
    /// Header background as 0xRRGGBB
    pub header_color: u32,
    /// Header labels, row 1
    pub headers: Vec<String>,
    /// Data rows, starting at row 2
    pub rows: Vec<LayoutRow>,
    /// Width per column
    pub column_widths: Vec<f64>,
    /// Top-left unfrozen cell as (row, column)
    pub freeze_panes: Option<(u32, u16)>,
    /// Autofilter range
    pub autofilter: Option<CellRange>,
    /// Thin borders on written cells
    pub borders: bool,
}

impl SheetLayout {
    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text of the first column for every data row, in order.
    pub fn row_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(|row| row.cells.first().and_then(CellContent::as_text).unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_range_display() {
        let range = CellRange {
            first_row: 0,
            first_col: 0,
            last_row: 56,
            last_col: 16,
        };
        assert_eq!(range.to_string(), "A1:Q57");
    }
}
