//! Record abstraction shared by every catalog sheet
//!
//! A sheet is a [`Table`]: an ordered slice of records plus a column schema.
//! Records expose their values column by column through [`Record::value`],
//! which lets one renderer handle entries, container summaries and the
//! all-text data-structure rows alike.

use crate::error::FormatError;
use crate::generator::{SheetLayout, SheetRenderer};
use std::fmt::Debug;

/// A single cell value as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    /// Free text
    Text(&'a str),
    /// Frequency score, expected in 1..=10
    Score(u8),
}

/// A row of reference material.
pub trait Record {
    /// Column identifier for this record type.
    type Field: Copy + Debug + Eq;

    /// Identifying name used in error messages.
    fn label(&self) -> &str;

    /// Value for `field`, or `None` when the record leaves it unset.
    fn value(&self, field: Self::Field) -> Option<CellValue<'_>>;
}

/// One column in a sheet schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<F> {
    /// Field emitted in this column
    pub field: F,
    /// Header label, also the key into the width hint table
    pub header: &'static str,
    /// Whether an empty value is an authoring bug
    pub required: bool,
}

impl<F> Column<F> {
    /// Column that must be populated.
    pub const fn required(field: F, header: &'static str) -> Self {
        Self {
            field,
            header,
            required: true,
        }
    }

    /// Column that may be left blank.
    pub const fn optional(field: F, header: &'static str) -> Self {
        Self {
            field,
            header,
            required: false,
        }
    }
}

/// An ordered sequence of records rendered as one sheet.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a, R: Record> {
    /// Short identifier used by the sheet filter
    pub slug: &'static str,
    /// Sheet tab name
    pub title: &'static str,
    /// Header background as 0xRRGGBB
    pub header_color: u32,
    /// Column schema, in display order
    pub columns: &'a [Column<R::Field>],
    /// Records, in display order
    pub records: &'a [R],
}

impl<'a, R: Record> Table<'a, R> {
    /// Create a table.
    pub const fn new(
        slug: &'static str,
        title: &'static str,
        header_color: u32,
        columns: &'a [Column<R::Field>],
        records: &'a [R],
    ) -> Self {
        Self {
            slug,
            title,
            header_color,
            columns,
            records,
        }
    }
}

/// Object-safe view of a [`Table`], so tables of different record types can
/// sit in one ordered list.
pub trait SheetSource: Sync {
    /// Short identifier used by the sheet filter
    fn slug(&self) -> &'static str;

    /// Sheet tab name
    fn title(&self) -> &'static str;

    /// Header background as 0xRRGGBB
    fn header_color(&self) -> u32;

    /// Number of records
    fn len(&self) -> usize;

    /// Whether the table has no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and lay out the sheet.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when a record violates the column schema.
    fn render(&self, renderer: &SheetRenderer) -> Result<SheetLayout, FormatError>;
}

impl<R> SheetSource for Table<'_, R>
where
    R: Record + Sync,
    R::Field: Sync,
{
    fn slug(&self) -> &'static str {
        self.slug
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn header_color(&self) -> u32 {
        self.header_color
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn render(&self, renderer: &SheetRenderer) -> Result<SheetLayout, FormatError> {
        renderer.render(self)
    }
}
