//! CLI type definitions

use crate::catalog::CatalogKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Reference workbook generator for the C++ standard library
#[derive(Parser, Debug)]
#[command(
    name = "cpp-catalog",
    version,
    about = "Generate C++ STL reference workbooks",
    args_conflicts_with_subcommands = true
)]
pub struct CatalogCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Options for the default `generate` action
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

/// Catalog and sheet selection
#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
    /// Catalog to build
    #[arg(long, value_enum, default_value_t = CatalogKind::Functions)]
    pub catalog: CatalogKind,

    /// Only include this sheet (repeatable; sheet order stays fixed)
    #[arg(short = 's', long = "sheet", value_name = "SLUG")]
    pub sheets: Vec<String>,
}

/// Options for writing a workbook
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Sheet selection
    #[command(flatten)]
    pub select: SelectArgs,

    /// Output file path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Render every selected sheet and write the workbook
    Generate(GenerateArgs),

    /// Render and validate every selected sheet without writing anything
    Check(SelectArgs),

    /// List the sheets of a catalog
    List {
        /// Catalog to list
        #[arg(long, value_enum, default_value_t = CatalogKind::Functions)]
        catalog: CatalogKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        CatalogCli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_generates_defaults() -> Result<(), clap::Error> {
        let cli = CatalogCli::try_parse_from(["cpp-catalog"])?;
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.select.catalog, CatalogKind::Functions);
        assert!(cli.generate.output.is_none());
        Ok(())
    }

    #[test]
    fn test_repeatable_sheet_filter() -> Result<(), clap::Error> {
        let cli = CatalogCli::try_parse_from([
            "cpp-catalog",
            "generate",
            "-s",
            "vector",
            "--sheet",
            "map",
            "-o",
            "out.xlsx",
        ])?;
        let Some(CatalogCommand::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.select.sheets, ["vector", "map"]);
        assert_eq!(args.output, Some(PathBuf::from("out.xlsx")));
        Ok(())
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(CatalogCli::try_parse_from(["cpp-catalog", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_catalog_value_names() -> Result<(), clap::Error> {
        let cli =
            CatalogCli::try_parse_from(["cpp-catalog", "list", "--catalog", "data-structures"])?;
        assert!(matches!(
            cli.command,
            Some(CatalogCommand::List {
                catalog: CatalogKind::DataStructures
            })
        ));
        Ok(())
    }
}
