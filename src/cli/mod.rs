//! Command-line interface for `cpp-catalog`.

mod app;
mod types;

pub use app::CatalogApp;
pub use types::{CatalogCli, CatalogCommand, GenerateArgs, SelectArgs};

/// Main entry point for the CLI
///
/// # Errors
/// Returns the error that stopped the run.
pub fn run() -> crate::error::Result<()> {
    CatalogApp::from_args().run()
}
