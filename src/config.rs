//! Configuration for catalog generation
//!
//! Configuration is optional. When a YAML file is given it is read with
//! environment variable substitution (`${VAR}` or `${VAR:-default}`) and
//! layered over the built-in defaults; command-line flags win over both.
//!
//! ```yaml
//! output: ${HOME}/reference/cpp.xlsx
//! sheets: [algorithms, vector]
//! column_widths:
//!   max_width: 80
//!   hints:
//!     Example: 75
//! colors:
//!   alternate_row: "#EDEDED"
//!   headers:
//!     algorithms: "1F4E79"
//! features:
//!   banded_rows: false
//! ```

use crate::error::{CatalogError, Result};
use crate::generator::RenderFeatures;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Excel's hard limit on column width, in character units.
const EXCEL_MAX_COLUMN_WIDTH: f64 = 255.0;

static ENV_VAR_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}").ok());

/// Complete catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Output path override
    pub output: Option<PathBuf>,

    /// Sheet-selection filter (slugs); empty selects every sheet
    pub sheets: Vec<String>,

    /// Column width configuration
    pub column_widths: ColumnWidthConfig,

    /// Color scheme configuration
    pub colors: ColorSchemeConfig,

    /// Formatting feature toggles
    pub features: FeatureConfig,
}

impl CatalogConfig {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` if the file cannot be read, is not
    /// valid YAML, or holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml(&contents)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` on invalid YAML or out-of-range values.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let substituted = substitute_env_vars(contents);
        let config: Self = serde_yaml::from_str(&substituted)
            .map_err(|e| CatalogError::Config(format!("Failed to parse YAML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.column_widths.validate()?;
        self.colors.validate()
    }
}

/// Substitute environment variables in the format ${VAR:-default}
fn substitute_env_vars(content: &str) -> String {
    let Some(re) = ENV_VAR_PATTERN.as_ref() else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        env::var(var_name).unwrap_or_else(|_| default_value.to_string())
    })
    .to_string()
}

/// Column width configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnWidthConfig {
    /// Width for columns without a hint
    pub default_width: f64,

    /// Upper bound applied to every column
    pub max_width: f64,

    /// Width hints keyed by header label; file entries are merged over the
    /// built-in table
    #[serde(deserialize_with = "merge_width_hints")]
    pub hints: IndexMap<String, f64>,
}

impl Default for ColumnWidthConfig {
    fn default() -> Self {
        Self {
            default_width: 18.0,
            max_width: 60.0,
            hints: builtin_width_hints(),
        }
    }
}

impl ColumnWidthConfig {
    /// Width for the column headed `header`: its hint (or the default),
    /// capped at `max_width`.
    #[must_use]
    pub fn width_for(&self, header: &str) -> f64 {
        self.hints
            .get(header)
            .copied()
            .unwrap_or(self.default_width)
            .min(self.max_width)
    }

    fn validate(&self) -> Result<()> {
        let check = |name: &str, width: f64| {
            if width.is_finite() && width > 0.0 && width <= EXCEL_MAX_COLUMN_WIDTH {
                Ok(())
            } else {
                Err(CatalogError::Config(format!(
                    "column width '{name}' must be in (0, {EXCEL_MAX_COLUMN_WIDTH}], got {width}"
                )))
            }
        };

        check("default_width", self.default_width)?;
        check("max_width", self.max_width)?;
        for (header, width) in &self.hints {
            check(header, *width)?;
        }
        Ok(())
    }
}

fn builtin_width_hints() -> IndexMap<String, f64> {
    [
        ("Function", 22.0),
        ("Container", 18.0),
        ("Method", 16.0),
        ("Header", 16.0),
        ("Category", 16.0),
        ("Time Complexity", 20.0),
        ("Space Complexity", 18.0),
        ("Arguments", 40.0),
        ("Argument Notes", 45.0),
        ("Return Type", 22.0),
        ("Description", 45.0),
        ("When To Use", 50.0),
        ("When Not To Use", 50.0),
        ("Real-World Freq", 16.0),
        ("DSA/LeetCode Freq", 18.0),
        ("Example", 70.0),
        ("Notes", 45.0),
        ("Since", 10.0),
        ("Related", 30.0),
        ("Key Methods", 45.0),
        ("Use Case", 45.0),
        ("Compared To", 14.0),
        ("Trade-offs", 50.0),
        ("Name", 28.0),
        ("Concept", 45.0),
        ("Explanation", 60.0),
        ("Use cases", 50.0),
        ("Industries", 45.0),
        ("When to use", 50.0),
        ("When NOT to use", 50.0),
        ("Scenario", 35.0),
        ("Best choice", 35.0),
        ("Why", 55.0),
        ("Libraries", 60.0),
    ]
    .into_iter()
    .map(|(header, width)| (header.to_string(), width))
    .collect()
}

fn merge_width_hints<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = IndexMap::<String, f64>::deserialize(deserializer)?;
    let mut hints = builtin_width_hints();
    hints.extend(overrides);
    Ok(hints)
}

/// Color scheme configuration, as RGB hex strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSchemeConfig {
    /// Header text color
    pub header_text: String,

    /// Border color
    pub border: String,

    /// Background of odd data rows
    pub base_row: String,

    /// Background of even data rows
    pub alternate_row: String,

    /// Header background overrides keyed by sheet slug
    pub headers: IndexMap<String, String>,
}

impl Default for ColorSchemeConfig {
    fn default() -> Self {
        Self {
            header_text: "FFFFFF".to_string(),
            border: "000000".to_string(),
            base_row: "FFFFFF".to_string(),
            alternate_row: "F2F2F2".to_string(),
            headers: IndexMap::new(),
        }
    }
}

impl ColorSchemeConfig {
    /// Resolve every color to 0xRRGGBB.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` for a malformed hex string.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            header_text: parse_hex_color(&self.header_text)?,
            border: parse_hex_color(&self.border)?,
            base_row: parse_hex_color(&self.base_row)?,
            alternate_row: parse_hex_color(&self.alternate_row)?,
        })
    }

    /// Header background overrides resolved to 0xRRGGBB.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` for a malformed hex string.
    pub fn header_overrides(&self) -> Result<IndexMap<String, u32>> {
        self.headers
            .iter()
            .map(|(slug, hex)| Ok((slug.clone(), parse_hex_color(hex)?)))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        self.palette()?;
        self.header_overrides()?;
        Ok(())
    }
}

/// Resolved colors used for every sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Header text color
    pub header_text: u32,
    /// Border color
    pub border: u32,
    /// Background of odd data rows
    pub base_row: u32,
    /// Background of even data rows
    pub alternate_row: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            header_text: 0x00FF_FFFF,
            border: 0x0000_0000,
            base_row: 0x00FF_FFFF,
            alternate_row: 0x00F2_F2F2,
        }
    }
}

/// Parse a `RRGGBB` or `#RRGGBB` string.
///
/// # Errors
///
/// Returns `CatalogError::Config` unless the input is exactly six hex digits.
pub fn parse_hex_color(hex: &str) -> Result<u32> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CatalogError::Config(format!(
            "invalid color '{hex}', expected RRGGBB"
        )));
    }
    u32::from_str_radix(digits, 16)
        .map_err(|e| CatalogError::Config(format!("invalid color '{hex}': {e}")))
}

/// Formatting feature toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Freeze the header row and first column
    pub freeze_panes: bool,
    /// Autofilter over the full range
    pub autofilter: bool,
    /// Alternating row backgrounds
    pub banded_rows: bool,
    /// Thin cell borders
    pub borders: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            freeze_panes: true,
            autofilter: true,
            banded_rows: true,
            borders: true,
        }
    }
}

impl From<FeatureConfig> for RenderFeatures {
    fn from(config: FeatureConfig) -> Self {
        let mut features = RenderFeatures::NONE;
        features.set(RenderFeatures::FREEZE_PANES, config.freeze_panes);
        features.set(RenderFeatures::AUTOFILTER, config.autofilter);
        features.set(RenderFeatures::BANDED_ROWS, config.banded_rows);
        features.set(RenderFeatures::BORDERS, config.borders);
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.column_widths.default_width, 18.0);
        assert_eq!(config.column_widths.max_width, 60.0);
        assert_eq!(config.colors.alternate_row, "F2F2F2");
        assert_eq!(RenderFeatures::from(config.features), RenderFeatures::ALL);
        assert!(config.sheets.is_empty());
    }

    #[test]
    fn test_width_law() {
        let widths = ColumnWidthConfig::default();
        assert_eq!(widths.width_for("Arguments"), 40.0);
        // Example is hinted above the cap
        assert_eq!(widths.width_for("Example"), 60.0);
        assert_eq!(widths.width_for("No Such Column"), 18.0);
    }

    #[test]
    fn test_color_parsing() -> Result<()> {
        assert_eq!(parse_hex_color("4472C4")?, 0x4472C4);
        assert_eq!(parse_hex_color("#70AD47")?, 0x70AD47);
        assert!(parse_hex_color("FFF").is_err());
        assert!(parse_hex_color("GGGGGG").is_err());
        Ok(())
    }

    #[test]
    fn test_yaml_hints_merge_over_builtins() -> Result<()> {
        let config = CatalogConfig::from_yaml(
            "column_widths:\n  hints:\n    Example: 30\n    Custom: 12\n",
        )?;
        assert_eq!(config.column_widths.width_for("Example"), 30.0);
        assert_eq!(config.column_widths.width_for("Custom"), 12.0);
        assert_eq!(config.column_widths.width_for("Arguments"), 40.0);
        Ok(())
    }

    #[test]
    fn test_yaml_rejects_bad_values() {
        assert!(CatalogConfig::from_yaml("column_widths:\n  max_width: 0\n").is_err());
        assert!(CatalogConfig::from_yaml("colors:\n  border: nope\n").is_err());
        assert!(CatalogConfig::from_yaml("sheets: 12: [").is_err());
    }

    #[test]
    fn test_env_substitution_default() -> Result<()> {
        let config = CatalogConfig::from_yaml(
            "output: ${CPP_CATALOG_TEST_UNSET_VARIABLE:-fallback.xlsx}\n",
        )?;
        assert_eq!(config.output, Some(PathBuf::from("fallback.xlsx")));
        Ok(())
    }

    #[test]
    fn test_feature_toggles() -> Result<()> {
        let config = CatalogConfig::from_yaml("features:\n  banded_rows: false\n")?;
        let features = RenderFeatures::from(config.features);
        assert!(!features.contains(RenderFeatures::BANDED_ROWS));
        assert!(features.contains(RenderFeatures::FREEZE_PANES));
        Ok(())
    }
}
