use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::Delimiting;
use crate::data::validate::{NumericParse, ValidationMode};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "CSV_SCATTER_CONFIG";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Which column-selection behaviour the viewer runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Every row has exactly `expected_fields` fields; always plots `fixed_column`.
    Fixed,
    /// The user picks the column from the header labels.
    Selectable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub variant: Variant,
    pub expected_fields: usize,
    pub fixed_column: usize,
    pub default_column: usize,
    /// `default_column` is preselected only when the header has more columns than this.
    pub default_column_min_columns: usize,
    pub delimiting: Delimiting,
    pub numeric_parse: NumericParse,
    pub fixed_caption: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Selectable,
            expected_fields: 24,
            fixed_column: 11,
            default_column: 7,
            default_column_min_columns: 8,
            delimiting: Delimiting::Naive,
            numeric_parse: NumericParse::Permissive,
            fixed_caption: "Column 12 values".to_string(),
            x_axis_title: "Time (s)".to_string(),
            y_axis_title: "Height (m)".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Config from `$CSV_SCATTER_CONFIG`, or defaults when unset or unreadable.
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => match Self::load(Path::new(&path)) {
                Ok(config) => {
                    log::info!("Loaded config from {}", Path::new(&path).display());
                    config
                }
                Err(e) => {
                    log::error!("Ignoring config: {e:#}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn validation_mode(&self) -> ValidationMode {
        match self.variant {
            Variant::Fixed => ValidationMode::FixedSchema {
                expected_fields: self.expected_fields,
            },
            Variant::Selectable => ValidationMode::Flexible,
        }
    }

    /// Column to plot right after a file is loaded, if any.
    pub fn initial_column(&self, column_count: usize) -> Option<usize> {
        match self.variant {
            Variant::Fixed => Some(self.fixed_column),
            Variant::Selectable => (column_count > self.default_column_min_columns
                && self.default_column < column_count)
                .then_some(self.default_column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_column_needs_more_than_eight_columns() {
        let config = ViewerConfig::default();
        assert_eq!(config.initial_column(9), Some(7));
        assert_eq!(config.initial_column(8), None);
        assert_eq!(config.initial_column(3), None);
    }

    #[test]
    fn fixed_variant_always_uses_fixed_column() {
        let config = ViewerConfig {
            variant: Variant::Fixed,
            ..Default::default()
        };
        assert_eq!(config.initial_column(2), Some(11));
        assert_eq!(
            config.validation_mode(),
            ValidationMode::FixedSchema {
                expected_fields: 24
            }
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "variant": "fixed", "delimiting": "quote_aware" }}"#).unwrap();

        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.variant, Variant::Fixed);
        assert_eq!(config.delimiting, Delimiting::QuoteAware);
        assert_eq!(config.expected_fields, 24);
        assert_eq!(config.numeric_parse, NumericParse::Permissive);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ViewerConfig::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
