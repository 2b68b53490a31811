//! Sheet renderer laws: determinism, order stability, width table and
//! rejection of malformed records

use cpp_catalog::catalog::entry::{ALGORITHM_COLUMNS, Entry, METHOD_COLUMNS};
use cpp_catalog::catalog::functions::{ALGORITHMS, VECTOR_METHODS};
use cpp_catalog::config::ColumnWidthConfig;
use cpp_catalog::generator::{
    CellContent, CellRange, RenderFeatures, RenderOptions, RowShade, SheetRenderer,
    WorkbookAssembler,
};
use cpp_catalog::record::{SheetSource, Table};
use cpp_catalog::{CatalogError, FormatError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

fn algorithm(index: usize) -> Entry {
    ALGORITHMS.records[index]
}

fn with_widths(widths: ColumnWidthConfig) -> SheetRenderer {
    SheetRenderer::new(RenderOptions {
        widths,
        ..RenderOptions::default()
    })
}

/// Rendering the same table twice gives equal layouts
#[test]
fn test_rendering_is_deterministic() {
    let renderer = SheetRenderer::default();
    for table in [&ALGORITHMS, &VECTOR_METHODS] {
        assert_eq!(renderer.render(table).unwrap(), renderer.render(table).unwrap());
    }
}

#[test]
fn test_header_row_and_shape() {
    let layout = SheetRenderer::default().render(&ALGORITHMS).unwrap();
    assert_eq!(layout.name, "STL Algorithms");
    assert_eq!(layout.header_color, 0x4472C4);
    assert_eq!(layout.headers.len(), ALGORITHM_COLUMNS.len());
    assert_eq!(layout.headers[0], "Function");
    assert_eq!(layout.row_count(), ALGORITHMS.records.len());
    assert!(layout.rows.iter().all(|row| row.cells.len() == layout.headers.len()));
    assert_eq!(layout.freeze_panes, Some((1, 1)));
    assert_eq!(
        layout.autofilter,
        Some(CellRange {
            first_row: 0,
            first_col: 0,
            last_row: 56,
            last_col: 16,
        })
    );
    assert_eq!(layout.autofilter.map(|range| range.to_string()).as_deref(), Some("A1:Q57"));
    assert!(layout.borders);
}

#[test]
fn test_scores_render_as_numbers() {
    let layout = SheetRenderer::default().render(&VECTOR_METHODS).unwrap();
    let real_world = METHOD_COLUMNS
        .iter()
        .position(|column| column.header == "Real-World Freq")
        .unwrap();
    assert_eq!(layout.rows[0].cells[real_world], CellContent::Score(10));
}

#[test]
fn test_banding_starts_on_first_data_row() {
    let layout = SheetRenderer::default().render(&VECTOR_METHODS).unwrap();
    for (index, row) in layout.rows.iter().enumerate() {
        let expected = if index % 2 == 0 {
            RowShade::Alternate
        } else {
            RowShade::Base
        };
        assert_eq!(row.shade, expected, "data row {index}");
    }
}

#[test]
fn test_disabled_features() {
    let features = RenderFeatures::ALL - RenderFeatures::AUTOFILTER - RenderFeatures::FREEZE_PANES;
    let renderer = SheetRenderer::new(RenderOptions::default().with_features(features));
    let layout = renderer.render(&ALGORITHMS).unwrap();
    assert_eq!(layout.autofilter, None);
    assert_eq!(layout.freeze_panes, None);
    assert!(layout.borders);
}

#[test]
fn test_default_width_table() {
    let renderer = SheetRenderer::default();
    assert_eq!(renderer.column_width("Arguments"), 40.0);
    assert_eq!(renderer.column_width("Example"), 60.0);
    assert_eq!(renderer.column_width("Unlisted"), 18.0);

    let layout = renderer.render(&ALGORITHMS).unwrap();
    assert!(layout.column_widths.iter().all(|width| *width <= 60.0));
}

/// A score of 11 is rejected and names the sheet, entry and column
#[test]
fn test_out_of_range_score_is_format_error() {
    let entries = [Entry {
        real_world_freq: 11,
        ..algorithm(0)
    }];
    let table = Table::new("bad", "Bad Sheet", 0x4472C4, ALGORITHM_COLUMNS, &entries);
    assert_eq!(
        SheetRenderer::default().validate(&table),
        Err(FormatError::ScoreOutOfRange {
            sheet: "Bad Sheet".to_string(),
            entry: "std::all_of".to_string(),
            field: "Real-World Freq",
            score: 11,
        })
    );
}

#[test]
fn test_missing_required_field_is_format_error() {
    let entries = [algorithm(0), Entry {
        example: "  ",
        ..algorithm(1)
    }];
    let table = Table::new("bad", "Bad Sheet", 0x4472C4, ALGORITHM_COLUMNS, &entries);
    let err = SheetRenderer::default().validate(&table).unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingField {
            sheet: "Bad Sheet".to_string(),
            entry: "std::any_of".to_string(),
            field: "Example",
        }
    );
}

#[test]
fn test_missing_optional_field_renders_blank() {
    let entries = [Entry {
        notes: None,
        ..algorithm(0)
    }];
    let table = Table::new("ok", "Sheet", 0x4472C4, ALGORITHM_COLUMNS, &entries);
    let layout = SheetRenderer::default().render(&table).unwrap();
    let notes = ALGORITHM_COLUMNS
        .iter()
        .position(|column| column.header == "Notes")
        .unwrap();
    assert_eq!(layout.rows[0].cells[notes], CellContent::Blank);
}

#[test]
fn test_empty_name_is_format_error() {
    let entries = [Entry {
        name: "",
        ..algorithm(0)
    }];
    let table = Table::new("bad", "Bad Sheet", 0x4472C4, ALGORITHM_COLUMNS, &entries);
    assert!(matches!(
        SheetRenderer::default().validate(&table),
        Err(FormatError::EmptyName { row: 1, .. })
    ));
}

/// A malformed record aborts the run before any file is written
#[test]
fn test_format_error_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.xlsx");
    let entries = [Entry {
        competitive_freq: 0,
        ..algorithm(2)
    }];
    let bad = Table::new("bad", "Bad Sheet", 0x4472C4, ALGORITHM_COLUMNS, &entries);
    let tables: [&dyn SheetSource; 2] = [&ALGORITHMS, &bad];

    let result = WorkbookAssembler::default().generate_file(&tables, &path);

    assert!(matches!(result, Err(CatalogError::Format(_))));
    assert_eq!(result.map_err(|e| e.exit_code()).err(), Some(65));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

proptest! {
    /// Output row order equals input order for any permutation
    #[test]
    fn prop_row_order_follows_input(
        order in Just((0..ALGORITHMS.records.len()).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let entries: Vec<Entry> = order.iter().map(|&index| algorithm(index)).collect();
        let table = Table::new("shuffled", "Shuffled", 0x4472C4, ALGORITHM_COLUMNS, &entries);
        let layout = SheetRenderer::default().render(&table).unwrap();

        let expected: Vec<&str> = entries.iter().map(|entry| entry.name).collect();
        let actual: Vec<&str> = layout.row_labels().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Width is min(hint, max) for hinted columns and the default otherwise
    #[test]
    fn prop_width_law(
        hint in 1.0f64..255.0,
        max_width in 1.0f64..255.0,
        default_width in 1.0f64..100.0,
    ) {
        let mut widths = ColumnWidthConfig {
            default_width,
            max_width,
            ..ColumnWidthConfig::default()
        };
        widths.hints.insert("Example".to_string(), hint);
        let renderer = with_widths(widths);

        prop_assert_eq!(renderer.column_width("Example"), hint.min(max_width));
        prop_assert_eq!(renderer.column_width("Not A Column"), default_width.min(max_width));
    }
}
