//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BOXQUOTE_TABLES_DIR=/srv/boxquote/tables                           │
//! │     BOXQUOTE_PRINTING_TABLE=printing_raw                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else ./boxquote.toml, else                         │
//! │     ~/.config/boxquote/boxquote.toml (Linux)                           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ./tables, built-in catalog and discount table                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [tables]
//! dir = "./tables"
//! printing = "printing_raw"
//! add_ons = "primary_secondary_addon_raw"
//! double_side_printing = "third_addon_raw"
//!
//! [discounts]   # whole ringgit per size category
//! A2 = 250
//! A4 = 150
//!
//! [header]
//! quantity_note = "For quantity more than 2000pcs, please call 03-1234 5678."
//!
//! [catalog]
//! size_categories = ["A2", "A3", "A4"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use boxquote_core::QuoteSettings;
use boxquote_tables::TableNames;

const LOCAL_CONFIG_FILE: &str = "boxquote.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Tables
// =============================================================================

/// Where the price tables are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    /// Directory holding one `<range>.json` per table.
    pub dir: PathBuf,

    #[serde(flatten)]
    pub names: TableNames,
}

impl Default for TablesConfig {
    fn default() -> Self {
        TablesConfig {
            dir: PathBuf::from("./tables"),
            names: TableNames::default(),
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub tables: TablesConfig,

    /// `[catalog]`, `[discounts]` and `[header]`.
    #[serde(flatten)]
    pub settings: QuoteSettings,
}

impl QuoteConfig {
    /// Loads defaults, then the config file, then environment overrides.
    ///
    /// An explicit `config_path` must exist; the implicit locations are
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_paths().into_iter().find(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks the values the quote pipeline relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tables.dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("tables.dir must not be empty".into()));
        }

        let names = &self.tables.names;
        for (key, name) in [
            ("printing", &names.printing),
            ("add_ons", &names.add_ons),
            ("double_side_printing", &names.double_side_printing),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "tables.{key} must not be empty"
                )));
            }
        }

        let catalog = &self.settings.catalog;
        if catalog.size_categories.is_empty() || catalog.materials.is_empty() {
            return Err(ConfigError::Invalid(
                "catalog needs at least one size category and material".into(),
            ));
        }
        if catalog.quantities.is_empty() || catalog.quantities.contains(&0) {
            return Err(ConfigError::Invalid(
                "catalog.quantities must be non-empty and positive".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `BOXQUOTE_*` overrides from `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("BOXQUOTE_TABLES_DIR") {
            debug!(dir = %dir, "Overriding tables directory from environment");
            self.tables.dir = PathBuf::from(dir);
        }
        if let Some(name) = lookup("BOXQUOTE_PRINTING_TABLE") {
            self.tables.names.printing = name;
        }
        if let Some(name) = lookup("BOXQUOTE_ADDON_TABLE") {
            self.tables.names.add_ons = name;
        }
        if let Some(name) = lookup("BOXQUOTE_DOUBLE_SIDE_TABLE") {
            self.tables.names.double_side_printing = name;
        }
        if let Some(note) = lookup("BOXQUOTE_QUANTITY_NOTE") {
            self.settings.header.quantity_note = note;
        }
    }

    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dirs) = directories::ProjectDirs::from("com", "boxquote", "boxquote") {
            paths.push(dirs.config_dir().join(LOCAL_CONFIG_FILE));
        }
        paths
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use boxquote_core::{Money, TableId};
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = QuoteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tables.dir, PathBuf::from("./tables"));
        assert_eq!(config.tables.names.name(TableId::AddOns), "primary_secondary_addon_raw");
    }

    #[test]
    fn test_parse_toml() {
        let config: QuoteConfig = toml::from_str(
            r#"
            [tables]
            dir = "/srv/tables"
            printing = "printing_2024"

            [discounts]
            A4 = 180

            [header]
            quantity_note = "Call us for bigger runs."
            "#,
        )
        .unwrap();

        assert_eq!(config.tables.dir, PathBuf::from("/srv/tables"));
        assert_eq!(config.tables.names.printing, "printing_2024");
        assert_eq!(config.tables.names.add_ons, "primary_secondary_addon_raw");
        assert_eq!(
            config.settings.discounts.lookup("A4"),
            Some(Money::from_major(180))
        );
        assert_eq!(config.settings.discounts.lookup("A2"), None);
        assert_eq!(config.settings.header.quantity_note, "Call us for bigger runs.");
        assert_eq!(config.settings.header.product, "box");
        assert_eq!(config.settings.catalog.size_categories.len(), 7);
    }

    #[test]
    fn test_env_overrides_win() {
        let env: HashMap<&str, &str> = [
            ("BOXQUOTE_TABLES_DIR", "/tmp/tables"),
            ("BOXQUOTE_DOUBLE_SIDE_TABLE", "double_raw"),
        ]
        .into_iter()
        .collect();

        let mut config = QuoteConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.tables.dir, PathBuf::from("/tmp/tables"));
        assert_eq!(config.tables.names.double_side_printing, "double_raw");
        assert_eq!(config.tables.names.printing, "printing_raw");
    }

    #[test]
    fn test_validation_rejects_empty_names() {
        let mut config = QuoteConfig::default();
        config.tables.names.add_ons = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_zero_quantity() {
        let mut config = QuoteConfig::default();
        config.settings.catalog.quantities = vec![0, 100];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxquote.toml");
        std::fs::write(&path, "[tables]\ndir = \"./price-lists\"\n").unwrap();

        let config = QuoteConfig::from_file(&path).unwrap();
        assert_eq!(config.tables.dir, PathBuf::from("./price-lists"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = QuoteConfig::load(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
