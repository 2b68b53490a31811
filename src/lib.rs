//! # cpp-catalog
//!
//! Generates reference workbooks for the C++ standard library: STL
//! algorithms, the member functions of the common containers, container
//! summaries, and a cross-language data-structures catalog.
//!
//! The pipeline has three stages:
//!
//! 1. [`catalog`] holds read-only record tables, one per sheet.
//! 2. [`generator::SheetRenderer`] validates a table against its column
//!    schema and lays it out as a [`generator::SheetLayout`].
//! 3. [`generator::WorkbookAssembler`] turns the layouts into an xlsx
//!    workbook and writes it atomically.
//!
//! ```no_run
//! use cpp_catalog::catalog::CatalogKind;
//! use cpp_catalog::generator::WorkbookAssembler;
//! use std::path::Path;
//!
//! # fn main() -> cpp_catalog::error::Result<()> {
//! let summary = WorkbookAssembler::default()
//!     .generate_file(CatalogKind::Functions.tables(), Path::new("catalog.xlsx"))?;
//! println!("{} entries", summary.total_entries());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod record;

pub use error::{CatalogError, FormatError, Result};
