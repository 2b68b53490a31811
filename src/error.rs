//! Error types for catalog generation
//!
//! Two failure families matter to callers: a record that cannot be rendered
//! ([`FormatError`]) and an output file that cannot be written
//! ([`CatalogError::Io`]). Configuration and workbook-construction failures
//! round out the set.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// A record that does not satisfy its sheet's column schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Record has an empty identifying name
    #[error("sheet '{sheet}', row {row}: entry has an empty name")]
    EmptyName {
        /// Sheet title
        sheet: String,
        /// 1-based data row
        row: usize,
    },

    /// A required column has no value
    #[error("sheet '{sheet}', entry '{entry}': required field '{field}' is empty")]
    MissingField {
        /// Sheet title
        sheet: String,
        /// Entry label
        entry: String,
        /// Column header
        field: &'static str,
    },

    /// Frequency score outside 1..=10
    #[error("sheet '{sheet}', entry '{entry}': {field} score {score} is outside 1..=10")]
    ScoreOutOfRange {
        /// Sheet title
        sheet: String,
        /// Entry label
        entry: String,
        /// Column header
        field: &'static str,
        /// Offending score
        score: u8,
    },

    /// Sheet schema declares no columns
    #[error("sheet '{sheet}' has no columns")]
    EmptySchema {
        /// Sheet title
        sheet: String,
    },

    /// Table does not fit in a worksheet
    #[error("sheet '{sheet}': {value} {what} exceeds the worksheet limit of {max}")]
    ExceedsSheetLimits {
        /// Sheet title
        sheet: String,
        /// `rows` or `columns`
        what: &'static str,
        /// Requested count
        value: usize,
        /// Worksheet limit
        max: usize,
    },
}

/// Errors that can occur while building or writing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed record
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Output path could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Workbook construction error
    #[error("Workbook generation failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl CatalogError {
    /// Build an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error (sysexits-style).
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Format(_) => 65,
            Self::Workbook(_) => 70,
            Self::Io { .. } => 74,
            Self::Config(_) => 78,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_sheet_and_entry() {
        let err = FormatError::ScoreOutOfRange {
            sheet: "STL Algorithms".to_string(),
            entry: "std::sort".to_string(),
            field: "Real-World Freq",
            score: 11,
        };
        let message = err.to_string();
        assert!(message.contains("STL Algorithms"));
        assert!(message.contains("std::sort"));
        assert!(message.contains("11"));
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let format = CatalogError::from(FormatError::EmptySchema {
            sheet: "x".to_string(),
        });
        let io = CatalogError::io(
            "out.xlsx",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let config = CatalogError::Config("bad".to_string());

        assert_eq!(format.exit_code(), 65);
        assert_eq!(io.exit_code(), 74);
        assert_eq!(config.exit_code(), 78);
        assert!(io.to_string().contains("out.xlsx"));
    }
}
