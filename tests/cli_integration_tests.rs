//! End-to-end CLI tests
//!
//! These run the built `cpp-catalog` binary through `std::process::Command`
//! and check files, output and exit codes.

use calamine::{Reader, Xlsx, open_workbook};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpp-catalog"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute cpp-catalog")
}

fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    workbook.sheet_names()
}

/// No arguments writes the default workbook into the working directory
#[test]
fn test_bare_invocation_writes_default_file() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["-q"]);

    assert!(
        output.status.success(),
        "cpp-catalog failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let path = dir.path().join("cpp_dsa_functions_catalog.xlsx");
    assert!(path.exists(), "default workbook was not created");
    assert_eq!(sheet_names(&path).len(), 5);
}

#[test]
fn test_generate_with_output_and_sheet_filter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vector.xlsx");
    let output = run(
        dir.path(),
        &["generate", "-o", path.to_str().unwrap(), "--sheet", "vector"],
    );

    assert!(output.status.success());
    assert_eq!(sheet_names(&path), vec!["Vector Methods"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Vector Methods"), "summary missing: {stdout}");
    assert!(stdout.contains("17"), "entry count missing: {stdout}");
}

#[test]
fn test_data_structures_catalog() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--catalog", "data-structures", "-q"]);

    assert!(output.status.success());
    let path = dir.path().join("datastructures_comprehensive_catalog.xlsx");
    assert_eq!(sheet_names(&path).len(), 6);
}

#[test]
fn test_unknown_sheet_is_config_error() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--sheet", "nope"]);

    assert_eq!(output.status.code(), Some(78));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// A directory as the output path fails with the I/O exit code and leaves
/// the directory untouched
#[test]
fn test_directory_output_is_io_error() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("catalog.xlsx");
    fs::create_dir(&target).unwrap();

    let output = run(dir.path(), &["-o", target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(74));
    assert!(String::from_utf8_lossy(&output.stderr).contains("catalog.xlsx"));
    assert!(target.is_dir());
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#[test]
fn test_check_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["check", "--catalog", "data-structures"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("116 entries valid"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_list_prints_slugs() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for slug in ["algorithms", "vector", "map", "set", "containers"] {
        assert!(stdout.contains(slug), "{slug} missing from: {stdout}");
    }
}

/// Config file values apply, and environment placeholders are expanded
#[test]
fn test_config_file_sets_output_and_sheets() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("catalog.yaml");
    fs::write(
        &config,
        "output: ${CPP_CATALOG_TEST_OUTPUT:-from-config.xlsx}\nsheets: [map, set]\n",
    )
    .unwrap();

    let output = run(dir.path(), &["-q", "-c", config.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "cpp-catalog failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let path = dir.path().join("from-config.xlsx");
    assert_eq!(sheet_names(&path), vec!["Map Methods", "Set Methods"]);
}

#[test]
fn test_invalid_config_is_config_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("catalog.yaml");
    fs::write(&config, "colors:\n  alternate_row: not-a-color\n").unwrap();

    let output = run(dir.path(), &["-c", config.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(78));
    assert!(!dir.path().join("cpp_dsa_functions_catalog.xlsx").exists());
}

/// A config written for the functions catalog does not restrict the
/// data-structures catalog
#[test]
fn test_config_sheets_of_other_catalog_are_skipped() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("catalog.yaml");
    fs::write(&config, "sheets: [map, set]\n").unwrap();

    let output = run(
        dir.path(),
        &["-q", "-c", config.to_str().unwrap(), "--catalog", "data-structures"],
    );

    assert!(
        output.status.success(),
        "cpp-catalog failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let path = dir.path().join("datastructures_comprehensive_catalog.xlsx");
    assert_eq!(sheet_names(&path).len(), 6);
}

#[test]
fn test_unknown_header_color_slug_is_config_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("catalog.yaml");
    fs::write(&config, "colors:\n  headers:\n    algorithm: \"1F4E79\"\n").unwrap();

    let output = run(dir.path(), &["-c", config.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(78));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("colors.headers"), "stderr: {stderr}");
    assert!(!dir.path().join("cpp_dsa_functions_catalog.xlsx").exists());
}

/// A read-only existing output is left alone and reported as an I/O error
#[cfg(unix)]
#[test]
fn test_read_only_output_is_io_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locked.xlsx");
    fs::write(&path, b"old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

    let output = run(dir.path(), &["-q", "-o", "locked.xlsx"]);

    assert_eq!(output.status.code(), Some(74));
    assert_eq!(fs::read(&path).unwrap(), b"old");
}
