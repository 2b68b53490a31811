//! Workbook assembly: sheet order, cell contents, frozen panes, autofilter
//! ranges and file handling, checked by reading the written xlsx back

use calamine::{Data, Reader, Xlsx, open_workbook};
use cpp_catalog::CatalogError;
use cpp_catalog::catalog::CatalogKind;
use cpp_catalog::catalog::functions::{ALGORITHMS, SET_METHODS};
use cpp_catalog::generator::{RenderOptions, WorkbookAssembler};
use cpp_catalog::record::SheetSource;
use pretty_assertions::assert_eq;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn archive_entry(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

fn sheet_xml(path: &Path, index: usize) -> String {
    archive_entry(path, &format!("xl/worksheets/sheet{index}.xml"))
}

/// Body of every `<tag ...>` element inside the `<list>` section of `xml`
fn elements<'a>(xml: &'a str, list: &str, tag: &str) -> Vec<&'a str> {
    let start = xml.find(&format!("<{list}")).unwrap();
    let end = start + xml[start..].find(&format!("</{list}>")).unwrap();
    let open = format!("<{tag}");
    xml[start..end]
        .split(open.as_str())
        .skip(1)
        .filter(|element| element.starts_with([' ', '>', '/']))
        .collect()
}

/// Value of `name="..."` in an element body
fn attribute<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = element.find(&key)? + key.len();
    element[start..].split('"').next()
}

/// Style index of the first cell in row `row` (1-based) of a sheet
fn row_style(sheet: &str, row: u32) -> usize {
    let start = sheet.find(&format!("<row r=\"{row}\"")).unwrap();
    let cell = &sheet[start..][sheet[start..].find("<c ").unwrap()..];
    attribute(cell, "s").unwrap().parse().unwrap()
}

/// Fill element used by the cell style at `style`
fn fill_for_style<'a>(styles: &'a str, style: usize) -> &'a str {
    let xfs = elements(styles, "cellXfs", "xf");
    let fill_id: usize = attribute(xfs[style], "fillId").unwrap().parse().unwrap();
    elements(styles, "fills", "fill")[fill_id]
}

fn generate(catalog: CatalogKind, dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join(catalog.default_output());
    WorkbookAssembler::default()
        .generate_file(catalog.tables(), &path)
        .unwrap();
    path
}

/// The functions workbook has exactly the five sheets, in order
#[test]
fn test_functions_workbook_sheets() {
    let dir = TempDir::new().unwrap();
    let path = generate(CatalogKind::Functions, &dir);

    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec![
            "STL Algorithms",
            "Vector Methods",
            "Map Methods",
            "Set Methods",
            "Other Containers",
        ]
    );
}

#[test]
fn test_cells_read_back() {
    let dir = TempDir::new().unwrap();
    let path = generate(CatalogKind::Functions, &dir);
    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();

    let range = workbook.worksheet_range("STL Algorithms").unwrap();
    assert_eq!(range.get_size(), (57, 17));
    assert_eq!(
        range.get_value((0, 0)),
        Some(&Data::String("Function".to_string()))
    );
    assert_eq!(
        range.get_value((1, 0)),
        Some(&Data::String("std::all_of".to_string()))
    );
    assert!(matches!(range.get_value((1, 11)), Some(Data::Float(_))));

    let vector = workbook.worksheet_range("Vector Methods").unwrap();
    assert_eq!(
        vector.get_value((1, 1)),
        Some(&Data::String("operator[]".to_string()))
    );
    assert_eq!(vector.get_value((1, 12)), Some(&Data::Float(10.0)));
}

/// Every sheet freezes the header row and first column and filters its
/// full range
#[test]
fn test_every_sheet_is_frozen_and_filtered() {
    let dir = TempDir::new().unwrap();
    let path = generate(CatalogKind::Functions, &dir);

    let expected_refs = ["A1:Q57", "A1:R18", "A1:R11", "A1:R8", "A1:K10"];
    for (index, expected) in expected_refs.iter().enumerate() {
        let xml = sheet_xml(&path, index + 1);
        assert!(xml.contains(r#"topLeftCell="B2""#), "sheet {}", index + 1);
        assert!(xml.contains(r#"state="frozen""#), "sheet {}", index + 1);
        assert!(
            xml.contains(&format!(r#"<autoFilter ref="{expected}""#)),
            "sheet {}: expected {expected}",
            index + 1
        );
    }
}

/// Headers are bold white on the sheet color, data rows alternate
/// F2F2F2/FFFFFF starting with the first data row, and cells have thin borders
#[test]
fn test_cell_formats_in_styles() {
    let dir = TempDir::new().unwrap();
    let path = generate(CatalogKind::Functions, &dir);
    let styles = archive_entry(&path, "xl/styles.xml");
    let sheet = sheet_xml(&path, 1);

    let header = fill_for_style(&styles, row_style(&sheet, 1));
    assert!(header.contains(r#"rgb="FF4472C4""#), "header fill: {header}");
    let header_xf = elements(&styles, "cellXfs", "xf")[row_style(&sheet, 1)];
    let font_id: usize = attribute(header_xf, "fontId").unwrap().parse().unwrap();
    let font = elements(&styles, "fonts", "font")[font_id];
    assert!(font.contains("<b/>"), "header font: {font}");
    assert!(font.contains(r#"rgb="FFFFFFFF""#), "header font: {font}");

    let first = fill_for_style(&styles, row_style(&sheet, 2));
    let second = fill_for_style(&styles, row_style(&sheet, 3));
    assert!(first.contains(r#"rgb="FFF2F2F2""#), "row 2 fill: {first}");
    assert!(!second.contains("FFF2F2F2"), "row 3 fill: {second}");
    assert!(second.contains(r#"rgb="FFFFFFFF""#), "row 3 fill: {second}");
    assert_ne!(row_style(&sheet, 2), row_style(&sheet, 3));

    let borders = elements(&styles, "borders", "border");
    for row in 1..=3 {
        let xf = elements(&styles, "cellXfs", "xf")[row_style(&sheet, row)];
        let border_id: usize = attribute(xf, "borderId").unwrap().parse().unwrap();
        let border = borders[border_id];
        for side in ["left", "right", "top", "bottom"] {
            assert!(
                border.contains(&format!(r#"<{side} style="thin""#)),
                "row {row} {side} border: {border}"
            );
        }
    }
}

#[test]
fn test_data_structures_workbook() {
    let dir = TempDir::new().unwrap();
    let path = generate(CatalogKind::DataStructures, &dir);

    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names().len(), 6);
    assert_eq!(workbook.sheet_names()[0], "Data Structures");
}

#[test]
fn test_sheet_filter_keeps_display_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("subset.xlsx");
    let tables = CatalogKind::Functions
        .select(&["set".to_string(), "algorithms".to_string()])
        .unwrap();

    let summary = WorkbookAssembler::default()
        .generate_file(&tables, &path)
        .unwrap();

    assert_eq!(
        summary.sheets,
        vec![
            ("STL Algorithms".to_string(), ALGORITHMS.records.len()),
            ("Set Methods".to_string(), SET_METHODS.records.len()),
        ]
    );
    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["STL Algorithms", "Set Methods"]);
}

/// Same input, same bytes
#[test]
fn test_output_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.xlsx");
    let second = dir.path().join("second.xlsx");
    let assembler = WorkbookAssembler::default();

    assembler
        .generate_file(CatalogKind::Functions.tables(), &first)
        .unwrap();
    assembler
        .generate_file(CatalogKind::Functions.tables(), &second)
        .unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.xlsx");
    std::fs::write(&path, b"stale").unwrap();

    let summary = WorkbookAssembler::default()
        .generate_file(CatalogKind::Functions.tables(), &path)
        .unwrap();

    assert_eq!(summary.total_entries(), 99);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), summary.bytes as u64);
    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names().len(), 5);
}

/// A directory as the destination is an I/O error and creates nothing
#[test]
fn test_directory_destination_is_io_error() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.xlsx");
    std::fs::create_dir(&target).unwrap();

    let result =
        WorkbookAssembler::default().generate_file(CatalogKind::Functions.tables(), &target);

    let err = result.unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert_eq!(err.exit_code(), 74);
    assert!(target.is_dir());
    assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_parent_is_io_error() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("no").join("such").join("out.xlsx");

    let result =
        WorkbookAssembler::default().generate_file(CatalogKind::Functions.tables(), &target);

    assert!(matches!(result, Err(CatalogError::Io { .. })));
    assert!(!target.exists());
}

#[test]
fn test_empty_selection_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.xlsx");
    let tables: [&dyn SheetSource; 0] = [];

    let result = WorkbookAssembler::new(RenderOptions::default()).generate_file(&tables, &path);

    assert!(matches!(result, Err(CatalogError::Config(_))));
    assert!(!path.exists());
}
