use crate::error::FormatError;

const MAX_EXCEL_COLUMNS: usize = 16_384;
const MAX_EXCEL_ROWS: usize = 1_048_576;

/// Safely cast usize to u16 for Excel column indices.
/// Excel has a maximum of 16,384 columns (2^14).
pub(super) fn usize_to_u16_column(value: usize, sheet: &str) -> Result<u16, FormatError> {
    if value >= MAX_EXCEL_COLUMNS {
        return Err(FormatError::ExceedsSheetLimits {
            sheet: sheet.to_string(),
            what: "columns",
            value,
            max: MAX_EXCEL_COLUMNS,
        });
    }

    u16::try_from(value).map_err(|_| FormatError::ExceedsSheetLimits {
        sheet: sheet.to_string(),
        what: "columns",
        value,
        max: MAX_EXCEL_COLUMNS,
    })
}

/// Safely cast usize to u32 for Excel row indices.
pub(super) fn usize_to_u32_row(value: usize, sheet: &str) -> Result<u32, FormatError> {
    if value >= MAX_EXCEL_ROWS {
        return Err(FormatError::ExceedsSheetLimits {
            sheet: sheet.to_string(),
            what: "rows",
            value,
            max: MAX_EXCEL_ROWS,
        });
    }

    u32::try_from(value).map_err(|_| FormatError::ExceedsSheetLimits {
        sheet: sheet.to_string(),
        what: "rows",
        value,
        max: MAX_EXCEL_ROWS,
    })
}

/// Spreadsheet column name for a 0-based index (`0` -> `A`, `26` -> `AA`).
pub(crate) fn column_name(column: u16) -> String {
    let mut col = u32::from(column) + 1;
    let mut letters = Vec::new();

    while col > 0 {
        let remainder = (col - 1) % 26;
        // remainder < 26
        letters.push(char::from(b'A' + remainder as u8));
        col = (col - 1) / 26;
    }

    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(16), "Q");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_casts_reject_excel_overflow() {
        assert_eq!(usize_to_u16_column(17, "s"), Ok(17));
        assert!(usize_to_u16_column(MAX_EXCEL_COLUMNS, "s").is_err());
        assert_eq!(usize_to_u32_row(56, "s"), Ok(56));
        assert!(usize_to_u32_row(MAX_EXCEL_ROWS, "s").is_err());
    }
}
