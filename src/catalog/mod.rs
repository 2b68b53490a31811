//! Record tables
//!
//! Hand-authored, read-only datasets. Each catalog is an ordered list of
//! tables; that order is the sheet order of the generated workbook.

pub mod entry;
pub mod functions;
pub mod structures;

use crate::error::{CatalogError, Result};
use crate::record::SheetSource;
use clap::ValueEnum;
use std::fmt;
use tracing::debug;

/// Which workbook to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum CatalogKind {
    /// STL algorithms and container member functions
    #[default]
    Functions,
    /// Data structures across languages
    DataStructures,
}

impl CatalogKind {
    /// Every table of this catalog, in display order.
    #[must_use]
    pub fn tables(self) -> &'static [&'static dyn SheetSource] {
        match self {
            Self::Functions => &functions::TABLES,
            Self::DataStructures => &structures::TABLES,
        }
    }

    /// Output file name used when none is configured.
    #[must_use]
    pub const fn default_output(self) -> &'static str {
        match self {
            Self::Functions => "cpp_dsa_functions_catalog.xlsx",
            Self::DataStructures => "datastructures_comprehensive_catalog.xlsx",
        }
    }

    /// Tables whose slug is in `slugs`, keeping display order.
    ///
    /// An empty filter selects every table. Duplicate slugs are ignored.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a slug this catalog does not define.
    pub fn select(self, slugs: &[String]) -> Result<Vec<&'static dyn SheetSource>> {
        let tables = self.tables();
        if slugs.is_empty() {
            return Ok(tables.to_vec());
        }

        if let Some(unknown) = slugs
            .iter()
            .find(|slug| !tables.iter().any(|table| table.slug() == slug.as_str()))
        {
            let known: Vec<&str> = tables.iter().map(|table| table.slug()).collect();
            return Err(CatalogError::Config(format!(
                "unknown sheet '{unknown}' for the {self} catalog (expected one of: {})",
                known.join(", ")
            )));
        }

        Ok(tables
            .iter()
            .copied()
            .filter(|table| slugs.iter().any(|slug| slug == table.slug()))
            .collect())
    }

    /// Catalog that defines the sheet `slug`, if any.
    #[must_use]
    pub fn defining(slug: &str) -> Option<Self> {
        Self::value_variants()
            .iter()
            .copied()
            .find(|kind| kind.tables().iter().any(|table| table.slug() == slug))
    }

    /// Slugs from the config-file list `setting` that belong to this catalog.
    ///
    /// A config file may serve both catalogs, so slugs of the other catalog
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a slug no catalog defines.
    pub fn own_slugs<'a, I>(self, slugs: I, setting: &str) -> Result<Vec<&'a str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut own = Vec::new();
        for slug in slugs {
            match Self::defining(slug) {
                Some(kind) if kind == self => own.push(slug),
                Some(kind) => {
                    debug!(slug, catalog = %kind, "Skipping {setting} entry of another catalog");
                }
                None => {
                    return Err(CatalogError::Config(format!(
                        "unknown sheet '{slug}' in {setting}"
                    )));
                }
            }
        }
        Ok(own)
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Functions => f.write_str("functions"),
            Self::DataStructures => f.write_str("data-structures"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugs(tables: &[&dyn SheetSource]) -> Vec<&'static str> {
        tables.iter().map(|table| table.slug()).collect()
    }

    #[test]
    fn test_functions_catalog_order() {
        let titles: Vec<&str> = CatalogKind::Functions
            .tables()
            .iter()
            .map(|table| table.title())
            .collect();
        assert_eq!(
            titles,
            [
                "STL Algorithms",
                "Vector Methods",
                "Map Methods",
                "Set Methods",
                "Other Containers"
            ]
        );
    }

    #[test]
    fn test_select_keeps_display_order() -> Result<()> {
        let selected =
            CatalogKind::Functions.select(&["set".to_string(), "algorithms".to_string()])?;
        assert_eq!(slugs(&selected), ["algorithms", "set"]);
        Ok(())
    }

    #[test]
    fn test_select_rejects_unknown_slug() {
        let err = CatalogKind::Functions
            .select(&["structures".to_string()])
            .err();
        assert!(matches!(err, Some(CatalogError::Config(msg)) if msg.contains("structures")));
    }

    #[test]
    fn test_empty_filter_selects_everything() -> Result<()> {
        assert_eq!(CatalogKind::DataStructures.select(&[])?.len(), 6);
        Ok(())
    }

    #[test]
    fn test_defining_catalog() {
        assert_eq!(CatalogKind::defining("map"), Some(CatalogKind::Functions));
        assert_eq!(
            CatalogKind::defining("use-cases"),
            Some(CatalogKind::DataStructures)
        );
        assert_eq!(CatalogKind::defining("maps"), None);
    }

    /// Slugs of the other catalog are skipped, typos are rejected
    #[test]
    fn test_own_slugs() -> Result<()> {
        let configured = ["map", "structures", "set"];
        assert_eq!(
            CatalogKind::Functions.own_slugs(configured, "sheets")?,
            ["map", "set"]
        );
        assert!(CatalogKind::DataStructures
            .own_slugs(["map", "set"], "sheets")?
            .is_empty());

        let err = CatalogKind::Functions
            .own_slugs(["algorithm"], "colors.headers")
            .err();
        assert!(matches!(
            err,
            Some(CatalogError::Config(msg)) if msg == "unknown sheet 'algorithm' in colors.headers"
        ));
        Ok(())
    }
}
