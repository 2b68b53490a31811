//! Invariants of the built-in record tables

use cpp_catalog::catalog::CatalogKind;
use cpp_catalog::catalog::entry::{ALGORITHM_COLUMNS, METHOD_COLUMNS, SUMMARY_COLUMNS};
use cpp_catalog::catalog::functions::{
    ALGORITHMS, MAP_METHODS, OTHER_CONTAINERS, SET_METHODS, VECTOR_METHODS,
};
use cpp_catalog::generator::{CellContent, SCORE_RANGE, SheetRenderer};
use cpp_catalog::record::{CellValue, Column, Record, Table};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

/// Every required cell is populated and every score is in range
fn assert_fully_populated<R: Record>(table: &Table<'_, R>) {
    for record in table.records {
        assert!(!record.label().trim().is_empty(), "{}: empty label", table.title);
        for column in table.columns {
            match record.value(column.field) {
                Some(CellValue::Score(score)) => assert!(
                    SCORE_RANGE.contains(&score),
                    "{} / {} / {}: score {score}",
                    table.title,
                    record.label(),
                    column.header
                ),
                Some(CellValue::Text(text)) => assert!(
                    !column.required || !text.trim().is_empty(),
                    "{} / {} / {}: empty text",
                    table.title,
                    record.label(),
                    column.header
                ),
                None => assert!(
                    !column.required,
                    "{} / {} / {}: missing",
                    table.title,
                    record.label(),
                    column.header
                ),
            }
        }
    }
}

fn headers<F>(columns: &[Column<F>]) -> Vec<&'static str> {
    columns.iter().map(|column| column.header).collect()
}

#[test]
fn test_function_tables_are_fully_populated() {
    assert_fully_populated(&ALGORITHMS);
    assert_fully_populated(&VECTOR_METHODS);
    assert_fully_populated(&MAP_METHODS);
    assert_fully_populated(&SET_METHODS);
    assert_fully_populated(&OTHER_CONTAINERS);
}

#[test]
fn test_every_catalog_renders_without_format_errors() {
    let renderer = SheetRenderer::default();
    for catalog in [CatalogKind::Functions, CatalogKind::DataStructures] {
        for table in catalog.tables() {
            let layout = table.render(&renderer);
            assert!(layout.is_ok(), "{}: {:?}", table.title(), layout.err());
        }
    }
}

#[test]
fn test_function_catalog_sizes() {
    let counts: Vec<(&str, usize)> = CatalogKind::Functions
        .tables()
        .iter()
        .map(|table| (table.title(), table.len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("STL Algorithms", 56),
            ("Vector Methods", 17),
            ("Map Methods", 10),
            ("Set Methods", 7),
            ("Other Containers", 9),
        ]
    );
}

#[test]
fn test_data_structures_catalog_sheets() {
    let counts: Vec<(&str, &str, usize)> = CatalogKind::DataStructures
        .tables()
        .iter()
        .map(|table| (table.slug(), table.title(), table.len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("structures", "Data Structures", 38),
            ("concepts", "Concepts", 17),
            ("operations", "Operations Legend", 13),
            ("libraries", "Libraries", 8),
            ("complexity", "Complexity Guide", 9),
            ("use-cases", "Use Case Scenarios", 31),
        ]
    );
}

#[test]
fn test_names_are_unique_within_a_sheet() {
    for table in [&ALGORITHMS, &VECTOR_METHODS, &MAP_METHODS, &SET_METHODS] {
        let mut seen = HashSet::new();
        for entry in table.records {
            assert!(seen.insert(entry.name), "{}: duplicate {}", table.title, entry.name);
        }
    }
}

#[test]
fn test_member_function_tables_name_their_container() {
    for (table, header) in [
        (&VECTOR_METHODS, "<vector>"),
        (&MAP_METHODS, "<map>"),
        (&SET_METHODS, "<set>"),
    ] {
        for entry in table.records {
            assert!(entry.container.is_some(), "{}: {}", table.title, entry.name);
            assert!(entry.header.contains(header), "{}: {}", table.title, entry.header);
        }
    }
    assert!(ALGORITHMS.records.iter().all(|entry| entry.container.is_none()));
}

#[test]
fn test_column_schemas() {
    assert_eq!(ALGORITHM_COLUMNS.len(), 17);
    assert_eq!(headers(ALGORITHM_COLUMNS)[0], "Function");
    assert_eq!(headers(METHOD_COLUMNS)[..2].to_vec(), vec!["Container", "Method"]);
    assert_eq!(
        headers(SUMMARY_COLUMNS),
        vec![
            "Container",
            "Header",
            "Category",
            "Key Methods",
            "Use Case",
            "Compared To",
            "Trade-offs",
            "Real-World Freq",
            "DSA/LeetCode Freq",
            "Notes",
            "Since",
        ]
    );
}

#[test]
fn test_first_rows_keep_authored_order() {
    let renderer = SheetRenderer::default();
    let layout = renderer.render(&ALGORITHMS).unwrap();
    let first: Vec<&str> = layout.row_labels().take(3).collect();
    assert_eq!(first, ["std::all_of", "std::any_of", "std::none_of"]);

    let vector = renderer.render(&VECTOR_METHODS).unwrap();
    assert_eq!(vector.rows[0].cells[0], CellContent::Text("vector".to_string()));
    assert_eq!(vector.rows[0].cells[1], CellContent::Text("operator[]".to_string()));
}
