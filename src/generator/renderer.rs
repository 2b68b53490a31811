//! Sheet renderer: validates one table and lays it out.

use super::cast;
use super::features::RenderFeatures;
use super::layout::{CellContent, CellRange, LayoutRow, RowShade, SheetLayout};
use crate::catalog::CatalogKind;
use crate::config::{CatalogConfig, ColumnWidthConfig, Palette};
use crate::error::{FormatError, Result};
use crate::record::{CellValue, Record, Table};
use indexmap::IndexMap;
use std::ops::RangeInclusive;
use tracing::debug;

/// Valid range of a frequency score.
pub const SCORE_RANGE: RangeInclusive<u8> = 1..=10;

/// Options shared by every sheet of a run.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Enabled formatting features
    pub features: RenderFeatures,
    /// Column width table
    pub widths: ColumnWidthConfig,
    /// Cell colors
    pub palette: Palette,
    /// Header background overrides keyed by sheet slug
    pub header_colors: IndexMap<String, u32>,
}

impl RenderOptions {
    /// Build options from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a malformed color.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            features: config.features.into(),
            widths: config.column_widths.clone(),
            palette: config.colors.palette()?,
            header_colors: config.colors.header_overrides()?,
        })
    }

    /// Keep only the header overrides for sheets of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an override slug no catalog defines.
    pub fn scoped_to(mut self, catalog: CatalogKind) -> Result<Self> {
        let own: Vec<String> = catalog
            .own_slugs(self.header_colors.keys().map(String::as_str), "colors.headers")?
            .into_iter()
            .map(str::to_string)
            .collect();
        self.header_colors.retain(|slug, _| own.contains(slug));
        Ok(self)
    }

    /// Replace the enabled features.
    #[must_use]
    pub fn with_features(mut self, features: RenderFeatures) -> Self {
        self.features = features;
        self
    }
}

/// Turns a [`Table`] into a [`SheetLayout`].
///
/// Rendering is pure: the same table and options always produce an equal
/// layout, rows stay in input order and nothing is filtered.
#[derive(Debug, Clone, Default)]
pub struct SheetRenderer {
    options: RenderOptions,
}

impl SheetRenderer {
    /// Create a renderer.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Width of the column headed `header`.
    #[must_use]
    pub fn column_width(&self, header: &str) -> f64 {
        self.options.widths.width_for(header)
    }

    /// Check every record against the table schema without keeping the layout.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormatError`] found, in row then column order.
    pub fn validate<R: Record>(
        &self,
        table: &Table<'_, R>,
    ) -> std::result::Result<(), FormatError> {
        self.render(table).map(|_| ())
    }

    /// Validate and lay out `table`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] for an empty schema, a record with an empty
    /// name, an empty required field, or a score outside 1..=10.
    pub fn render<R: Record>(
        &self,
        table: &Table<'_, R>,
    ) -> std::result::Result<SheetLayout, FormatError> {
        let sheet = table.title;
        if table.columns.is_empty() {
            return Err(FormatError::EmptySchema {
                sheet: sheet.to_string(),
            });
        }

        let last_col = cast::usize_to_u16_column(table.columns.len() - 1, sheet)?;
        let last_row = cast::usize_to_u32_row(table.records.len(), sheet)?;

        let rows = table
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| self.render_row(table, index, record))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let features = self.options.features;
        let layout = SheetLayout {
            name: sheet.to_string(),
            header_color: self
                .options
                .header_colors
                .get(table.slug)
                .copied()
                .unwrap_or(table.header_color),
            headers: table
                .columns
                .iter()
                .map(|column| column.header.to_string())
                .collect(),
            rows,
            column_widths: table
                .columns
                .iter()
                .map(|column| self.column_width(column.header))
                .collect(),
            freeze_panes: features
                .contains(RenderFeatures::FREEZE_PANES)
                .then_some((1, 1)),
            autofilter: features
                .contains(RenderFeatures::AUTOFILTER)
                .then_some(CellRange {
                    first_row: 0,
                    first_col: 0,
                    last_row,
                    last_col,
                }),
            borders: features.contains(RenderFeatures::BORDERS),
        };

        debug!(
            sheet,
            rows = layout.row_count(),
            columns = layout.headers.len(),
            "Rendered sheet"
        );
        Ok(layout)
    }

    fn render_row<R: Record>(
        &self,
        table: &Table<'_, R>,
        index: usize,
        record: &R,
    ) -> std::result::Result<LayoutRow, FormatError> {
        let sheet = table.title;
        let label = record.label();
        if label.trim().is_empty() {
            return Err(FormatError::EmptyName {
                sheet: sheet.to_string(),
                row: index + 1,
            });
        }

        let missing = |field| FormatError::MissingField {
            sheet: sheet.to_string(),
            entry: label.to_string(),
            field,
        };

        let mut cells = Vec::with_capacity(table.columns.len());
        for column in table.columns {
            let cell = match record.value(column.field) {
                Some(CellValue::Score(score)) if !SCORE_RANGE.contains(&score) => {
                    return Err(FormatError::ScoreOutOfRange {
                        sheet: sheet.to_string(),
                        entry: label.to_string(),
                        field: column.header,
                        score,
                    });
                }
                Some(CellValue::Score(score)) => CellContent::Score(score),
                Some(CellValue::Text(text)) if !text.trim().is_empty() => {
                    CellContent::Text(text.to_string())
                }
                _ if column.required => return Err(missing(column.header)),
                _ => CellContent::Blank,
            };
            cells.push(cell);
        }

        Ok(LayoutRow {
            cells,
            shade: self.shade_for(index),
        })
    }

    /// Data row `index` lands on sheet row `index + 2`; even sheet rows get
    /// the alternate shade.
    fn shade_for(&self, index: usize) -> RowShade {
        if self.options.features.contains(RenderFeatures::BANDED_ROWS) && (index + 2) % 2 == 0 {
            RowShade::Alternate
        } else {
            RowShade::Base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Column;

    #[derive(Debug)]
    struct Row {
        name: &'static str,
        note: Option<&'static str>,
        score: u8,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowField {
        Name,
        Note,
        Score,
    }

    impl Record for Row {
        type Field = RowField;

        fn label(&self) -> &str {
            self.name
        }

        fn value(&self, field: RowField) -> Option<CellValue<'_>> {
            match field {
                RowField::Name => Some(CellValue::Text(self.name)),
                RowField::Note => self.note.map(CellValue::Text),
                RowField::Score => Some(CellValue::Score(self.score)),
            }
        }
    }

    const COLUMNS: &[Column<RowField>] = &[
        Column::required(RowField::Name, "Name"),
        Column::optional(RowField::Note, "Notes"),
        Column::required(RowField::Score, "Real-World Freq"),
    ];

    fn row(name: &'static str, score: u8) -> Row {
        Row {
            name,
            note: None,
            score,
        }
    }

    #[test]
    fn test_optional_field_renders_blank() {
        let rows = [row("a", 3)];
        let table = Table::new("t", "Test", 0x4472C4, COLUMNS, &rows);
        let layout = SheetRenderer::default().render(&table).ok();
        let cells = layout.map(|l| l.rows[0].cells.clone());
        assert_eq!(
            cells,
            Some(vec![
                CellContent::Text("a".to_string()),
                CellContent::Blank,
                CellContent::Score(3)
            ])
        );
    }

    #[test]
    fn test_shades_alternate_from_first_data_row() {
        let rows = [row("a", 1), row("b", 2), row("c", 3)];
        let table = Table::new("t", "Test", 0x4472C4, COLUMNS, &rows);
        let shades: Option<Vec<RowShade>> = SheetRenderer::default()
            .render(&table)
            .ok()
            .map(|l| l.rows.iter().map(|r| r.shade).collect());
        assert_eq!(
            shades,
            Some(vec![RowShade::Alternate, RowShade::Base, RowShade::Alternate])
        );
    }

    #[test]
    fn test_features_off_leave_plain_grid() {
        let rows = [row("a", 1), row("b", 2)];
        let table = Table::new("t", "Test", 0x4472C4, COLUMNS, &rows);
        let renderer =
            SheetRenderer::new(RenderOptions::default().with_features(RenderFeatures::NONE));
        let layout = renderer.render(&table).ok();
        assert!(layout.as_ref().is_some_and(|l| l.freeze_panes.is_none()
            && l.autofilter.is_none()
            && !l.borders
            && l.rows.iter().all(|r| r.shade == RowShade::Base)));
    }

    #[test]
    fn test_empty_name_reports_row() {
        let rows = [row("a", 1), row(" ", 2)];
        let table = Table::new("t", "Test", 0x4472C4, COLUMNS, &rows);
        assert_eq!(
            SheetRenderer::default().validate(&table),
            Err(FormatError::EmptyName {
                sheet: "Test".to_string(),
                row: 2
            })
        );
    }

    #[test]
    fn test_score_zero_rejected() {
        let rows = [row("a", 0)];
        let table = Table::new("t", "Test", 0x4472C4, COLUMNS, &rows);
        assert!(matches!(
            SheetRenderer::default().validate(&table),
            Err(FormatError::ScoreOutOfRange { score: 0, .. })
        ));
    }

    #[test]
    fn test_empty_schema_rejected() {
        let rows = [row("a", 1)];
        let table: Table<'_, Row> = Table::new("t", "Test", 0x4472C4, &[], &rows);
        assert!(matches!(
            SheetRenderer::default().validate(&table),
            Err(FormatError::EmptySchema { .. })
        ));
    }

    #[test]
    fn test_header_color_override_by_slug() {
        let rows = [row("a", 1)];
        let table = Table::new("t", "Test", 0x4472C4, COLUMNS, &rows);
        let mut options = RenderOptions::default();
        options.header_colors.insert("t".to_string(), 0x1F4E79);
        let layout = SheetRenderer::new(options).render(&table).ok();
        assert_eq!(layout.map(|l| l.header_color), Some(0x1F4E79));
    }

    #[test]
    fn test_header_overrides_scoped_to_catalog() -> Result<()> {
        let mut options = RenderOptions::default();
        options.header_colors.insert("structures".to_string(), 0x70AD47);
        options.header_colors.insert("map".to_string(), 0x1F4E79);

        let scoped = options.clone().scoped_to(CatalogKind::Functions)?;
        assert_eq!(scoped.header_colors.keys().collect::<Vec<_>>(), ["map"]);

        options.header_colors.insert("vectors".to_string(), 0x000000);
        assert!(matches!(
            options.scoped_to(CatalogKind::Functions),
            Err(crate::error::CatalogError::Config(_))
        ));
        Ok(())
    }
}
