//! Catalog CLI application.
//!
//! A config file may serve both catalogs. Its `sheets` and `colors.headers`
//! entries apply only to the sheets of the catalog being generated; slugs of
//! the other catalog are skipped, and a slug no catalog defines is a
//! configuration error. When `sheets` names no sheet of the chosen catalog,
//! every sheet is generated.

use super::types::{CatalogCli, CatalogCommand, GenerateArgs, SelectArgs};
use crate::catalog::CatalogKind;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::generator::{RenderOptions, WorkbookAssembler, WorkbookSummary};
use crate::record::SheetSource;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Main catalog CLI application
pub struct CatalogApp {
    cli: CatalogCli,
}

impl CatalogApp {
    /// Create the application from process arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(CatalogCli::parse())
    }

    /// Create the application from parsed arguments
    #[must_use]
    pub fn new(cli: CatalogCli) -> Self {
        Self { cli }
    }

    /// Run the application
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the run; nothing is written on failure.
    pub fn run(self) -> Result<()> {
        self.init_logging();
        debug!("Starting cpp-catalog");

        match self.execute() {
            Ok(()) => Ok(()),
            Err(err) => {
                error!("Command failed: {}", err);
                if !self.cli.quiet {
                    eprintln!("{} {err}", "Error:".red().bold());
                }
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            tracing::Level::ERROR
        } else if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        // A subscriber may already be installed when embedded in tests
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn execute(&self) -> Result<()> {
        let config = match &self.cli.config {
            Some(path) => CatalogConfig::load(path)?,
            None => CatalogConfig::default(),
        };

        match &self.cli.command {
            None => self.generate(&self.cli.generate, &config),
            Some(CatalogCommand::Generate(args)) => self.generate(args, &config),
            Some(CatalogCommand::Check(args)) => self.check(args, &config),
            Some(CatalogCommand::List { catalog }) => {
                Self::list(*catalog);
                Ok(())
            }
        }
    }

    fn generate(&self, args: &GenerateArgs, config: &CatalogConfig) -> Result<()> {
        let catalog = args.select.catalog;
        let tables = Self::select(&args.select, config)?;
        let output = args
            .output
            .clone()
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(catalog.default_output()));
        info!(%catalog, sheets = tables.len(), output = %output.display(), "Generating catalog");

        let assembler =
            WorkbookAssembler::new(RenderOptions::from_config(config)?.scoped_to(catalog)?);
        let progress = self.progress_bar(tables.len());
        let layouts = assembler
            .render_all_with(&tables, |layout| {
                if let Some(pb) = &progress {
                    pb.set_message(layout.name.clone());
                    pb.inc(1);
                }
            })
            .inspect_err(|_| {
                if let Some(pb) = &progress {
                    pb.abandon();
                }
            })?;

        if let Some(pb) = &progress {
            pb.set_message("writing workbook");
        }
        let summary = assembler.write(&layouts, &output)?;
        if let Some(pb) = &progress {
            pb.finish_and_clear();
        }

        if !self.cli.quiet {
            Self::print_summary(catalog, &summary);
        }
        Ok(())
    }

    fn check(&self, args: &SelectArgs, config: &CatalogConfig) -> Result<()> {
        let tables = Self::select(args, config)?;
        let options = RenderOptions::from_config(config)?.scoped_to(args.catalog)?;
        let layouts = WorkbookAssembler::new(options).render_all(&tables)?;

        if !self.cli.quiet {
            let entries: usize = layouts.iter().map(|layout| layout.row_count()).sum();
            println!(
                "{} {} catalog: {} sheets, {entries} entries valid",
                "✓".green(),
                args.catalog,
                layouts.len()
            );
        }
        Ok(())
    }

    fn list(catalog: CatalogKind) {
        println!("{}", format!("{catalog} catalog").bold());
        for table in catalog.tables() {
            println!(
                "  {:<12} {:<22} {:>4} entries",
                table.slug().cyan(),
                table.title(),
                table.len()
            );
        }
    }

    /// Command-line sheet filter, else the configured slugs of this catalog.
    fn select(args: &SelectArgs, config: &CatalogConfig) -> Result<Vec<&'static dyn SheetSource>> {
        if !args.sheets.is_empty() {
            return args.catalog.select(&args.sheets);
        }

        let configured: Vec<String> = args
            .catalog
            .own_slugs(config.sheets.iter().map(String::as_str), "sheets")?
            .into_iter()
            .map(str::to_string)
            .collect();
        args.catalog.select(&configured)
    }

    fn progress_bar(&self, len: usize) -> Option<ProgressBar> {
        if self.cli.quiet {
            return None;
        }

        let pb = ProgressBar::new(u64::try_from(len).unwrap_or(u64::MAX));
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("#>-"));
        pb.set_style(style);
        Some(pb)
    }

    fn print_summary(catalog: CatalogKind, summary: &WorkbookSummary) {
        println!();
        println!(
            "{} {} catalog generated",
            "✓".green(),
            catalog.to_string().bold()
        );
        println!("  File: {}", summary.path.display());
        println!("  Sheets:");
        for (index, (name, count)) in summary.sheets.iter().enumerate() {
            println!("    {}. {name:<20} {count:>4} entries", index + 1);
        }
        println!(
            "  Total entries: {}",
            summary.total_entries().to_string().bold()
        );
    }
}
