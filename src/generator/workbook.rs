use super::layout::{CellContent, RowShade, SheetLayout};
use super::output::write_atomically;
use super::renderer::{RenderOptions, SheetRenderer};
use crate::config::Palette;
use crate::error::{CatalogError, Result};
use crate::record::SheetSource;
use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Creation date written into every workbook, so equal input gives equal bytes.
const CREATION_DATE: (u16, u8, u8) = (2024, 1, 1);

/// Summary of a written workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookSummary {
    /// Destination path
    pub path: PathBuf,
    /// Sheet names with their entry counts, in workbook order
    pub sheets: Vec<(String, usize)>,
    /// File size in bytes
    pub bytes: usize,
}

impl WorkbookSummary {
    /// Entries across all sheets.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.sheets.iter().map(|(_, count)| count).sum()
    }
}

/// Formats for one sheet, built once and shared by every cell.
struct SheetFormats {
    header: Format,
    text: [Format; 2],
    score: [Format; 2],
}

impl SheetFormats {
    fn new(layout: &SheetLayout, palette: &Palette) -> Self {
        let bordered = |format: Format| {
            if layout.borders {
                format
                    .set_border(FormatBorder::Thin)
                    .set_border_color(Color::RGB(palette.border))
            } else {
                format
            }
        };
        let body = |background: u32| {
            bordered(Format::new().set_background_color(Color::RGB(background)))
        };

        let header = bordered(
            Format::new()
                .set_bold()
                .set_font_size(11)
                .set_font_color(Color::RGB(palette.header_text))
                .set_background_color(Color::RGB(layout.header_color))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap(),
        );

        Self {
            header,
            text: [body(palette.base_row), body(palette.alternate_row)],
            score: [
                body(palette.base_row).set_align(FormatAlign::Center),
                body(palette.alternate_row).set_align(FormatAlign::Center),
            ],
        }
    }

    fn index(shade: RowShade) -> usize {
        match shade {
            RowShade::Base => 0,
            RowShade::Alternate => 1,
        }
    }
}

/// Builds workbooks from sheet sources.
///
/// Every sheet is rendered and validated before the workbook is built, and
/// the workbook is serialized before anything touches the destination, so a
/// malformed record never produces a file.
#[derive(Debug, Clone, Default)]
pub struct WorkbookAssembler {
    renderer: SheetRenderer,
}

impl WorkbookAssembler {
    /// Create an assembler.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: SheetRenderer::new(options),
        }
    }

    /// Render `tables` in order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` for an empty list, or the first
    /// `CatalogError::Format` raised by a table.
    pub fn render_all(&self, tables: &[&dyn SheetSource]) -> Result<Vec<SheetLayout>> {
        self.render_all_with(tables, |_| {})
    }

    /// Render `tables` in order, calling `on_sheet` after each one.
    ///
    /// # Errors
    ///
    /// Same as [`Self::render_all`].
    pub fn render_all_with<F>(
        &self,
        tables: &[&dyn SheetSource],
        mut on_sheet: F,
    ) -> Result<Vec<SheetLayout>>
    where
        F: FnMut(&SheetLayout),
    {
        if tables.is_empty() {
            return Err(CatalogError::Config("no sheets selected".to_string()));
        }

        tables
            .iter()
            .map(|table| -> Result<SheetLayout> {
                let layout = table.render(&self.renderer)?;
                on_sheet(&layout);
                Ok(layout)
            })
            .collect()
    }

    /// Materialize `layouts` as a workbook, one worksheet each, in order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` for an empty list, or
    /// `CatalogError::Workbook` if a worksheet call is rejected.
    pub fn build(&self, layouts: &[SheetLayout]) -> Result<Workbook> {
        if layouts.is_empty() {
            return Err(CatalogError::Config("no sheets selected".to_string()));
        }

        let mut workbook = Workbook::new();
        let (year, month, day) = CREATION_DATE;
        let created = ExcelDateTime::from_ymd(year, month, day)?;
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

        let palette = self.renderer.options().palette;
        for layout in layouts {
            let formats = SheetFormats::new(layout, &palette);
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&layout.name)?;
            Self::write_sheet(worksheet, layout, &formats)?;
            debug!(sheet = %layout.name, rows = layout.row_count(), "Added worksheet");
        }

        Ok(workbook)
    }

    fn write_sheet(
        worksheet: &mut Worksheet,
        layout: &SheetLayout,
        formats: &SheetFormats,
    ) -> Result<()> {
        for (col, header) in (0u16..).zip(&layout.headers) {
            worksheet.write_string_with_format(0, col, header, &formats.header)?;
        }

        for (row, data) in (1u32..).zip(&layout.rows) {
            let shade = SheetFormats::index(data.shade);
            for (col, cell) in (0u16..).zip(&data.cells) {
                match cell {
                    CellContent::Text(text) => {
                        worksheet.write_string_with_format(row, col, text, &formats.text[shade])?;
                    }
                    CellContent::Score(score) => {
                        worksheet.write_number_with_format(
                            row,
                            col,
                            f64::from(*score),
                            &formats.score[shade],
                        )?;
                    }
                    CellContent::Blank => {
                        worksheet.write_blank(row, col, &formats.text[shade])?;
                    }
                }
            }
        }

        for (col, width) in (0u16..).zip(&layout.column_widths) {
            worksheet.set_column_width(col, *width)?;
        }

        if let Some((row, col)) = layout.freeze_panes {
            worksheet.set_freeze_panes(row, col)?;
        }

        if let Some(range) = layout.autofilter {
            worksheet.autofilter(
                range.first_row,
                range.first_col,
                range.last_row,
                range.last_col,
            )?;
        }

        Ok(())
    }

    /// Render `tables` and serialize the workbook to memory.
    ///
    /// # Errors
    ///
    /// Returns any rendering or workbook error.
    pub fn generate_buffer(&self, tables: &[&dyn SheetSource]) -> Result<Vec<u8>> {
        let layouts = self.render_all(tables)?;
        let mut workbook = self.build(&layouts)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Build `layouts` and atomically write the workbook to `path`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Workbook` if serialization fails and
    /// `CatalogError::Io` if the destination cannot be written.
    pub fn write(&self, layouts: &[SheetLayout], path: &Path) -> Result<WorkbookSummary> {
        let mut workbook = self.build(layouts)?;
        let bytes = workbook.save_to_buffer()?;
        write_atomically(path, &bytes)?;

        let summary = WorkbookSummary {
            path: path.to_path_buf(),
            sheets: layouts
                .iter()
                .map(|layout| (layout.name.clone(), layout.row_count()))
                .collect(),
            bytes: bytes.len(),
        };
        info!(
            path = %path.display(),
            sheets = summary.sheets.len(),
            entries = summary.total_entries(),
            "Workbook written"
        );
        Ok(summary)
    }

    /// Render `tables` and atomically write the workbook to `path`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Format` for a malformed record (nothing is
    /// written), `CatalogError::Io` if the destination cannot be written.
    pub fn generate_file(
        &self,
        tables: &[&dyn SheetSource],
        path: &Path,
    ) -> Result<WorkbookSummary> {
        let layouts = self.render_all(tables)?;
        self.write(&layouts, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKind;

    #[test]
    fn test_empty_selection_rejected() {
        let assembler = WorkbookAssembler::default();
        assert!(matches!(
            assembler.render_all(&[]),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(assembler.build(&[]), Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_progress_callback_sees_every_sheet() -> Result<()> {
        let assembler = WorkbookAssembler::default();
        let mut seen = Vec::new();
        assembler.render_all_with(CatalogKind::Functions.tables(), |layout| {
            seen.push(layout.name.clone());
        })?;
        assert_eq!(seen.len(), 5);
        assert_eq!(seen[0], "STL Algorithms");
        Ok(())
    }

    #[test]
    fn test_buffer_is_deterministic() -> Result<()> {
        let assembler = WorkbookAssembler::default();
        let tables = CatalogKind::Functions.tables();
        assert_eq!(
            assembler.generate_buffer(tables)?,
            assembler.generate_buffer(tables)?
        );
        Ok(())
    }
}
