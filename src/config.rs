//! Configuration management using config.toml

use quiz_admin_core::constants::EXPIRED_ROW_MARKER;
use quiz_admin_core::presets;
use quiz_admin_core::{SortOrder, SorterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Column checked by the expiry pass
    #[serde(default = "default_expiry_column")]
    pub expiry_column: String,

    /// Column sorted once on load (None = keep file order)
    #[serde(default = "default_sort_column")]
    pub default_sort_column: Option<String>,

    #[serde(default = "default_sort_order")]
    pub default_sort_order: SortOrder,

    /// Marker printed next to expired rows
    #[serde(default = "default_expired_marker")]
    pub expired_marker: String,

    /// Collation locale, "no expiry" markers and date formats
    #[serde(default)]
    pub table: SorterConfig,
}

fn default_expiry_column() -> String {
    presets::EXPIRY_COLUMN.to_string()
}

fn default_sort_column() -> Option<String> {
    Some(presets::DEFAULT_SORT.0.to_string())
}

fn default_sort_order() -> SortOrder {
    presets::DEFAULT_SORT.1
}

fn default_expired_marker() -> String {
    EXPIRED_ROW_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expiry_column: default_expiry_column(),
            default_sort_column: default_sort_column(),
            default_sort_order: default_sort_order(),
            expired_marker: default_expired_marker(),
            table: SorterConfig::default(),
        }
    }
}

impl Config {
    /// Load config.toml from the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    /// Load config from a file, falling back to defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Error parsing {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Error reading {}: {}", path.display(), e);
                }
            }
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
        }
        Config::default()
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
