//! Sheet rendering and workbook assembly.
//!
//! Rendering and writing are separate passes. [`SheetRenderer`] validates a
//! table and produces a [`SheetLayout`]; [`WorkbookAssembler`] turns layouts
//! into an xlsx workbook and writes it with [`write_atomically`].

mod cast;
mod features;
mod layout;
mod output;
mod renderer;
mod workbook;

pub use features::RenderFeatures;
pub use layout::{CellContent, CellRange, LayoutRow, RowShade, SheetLayout};
pub use output::write_atomically;
pub use renderer::{RenderOptions, SCORE_RANGE, SheetRenderer};
pub use workbook::{WorkbookAssembler, WorkbookSummary};
