// Chunk: docs/chunks/search_results_panel - Search results panel configuration
//!
//! Persistent settings for the search results panel.
//!
//! The config file is stored at `<config dir>/lite-edit/search_results.json`
//! (`~/Library/Application Support/lite-edit/` on macOS,
//! `~/.config/lite-edit/` on Linux).
//!
//! Loading degrades gracefully: a missing, unreadable or outdated file yields
//! the defaults so the panel always comes up.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::style::ResultPalette;

/// Current schema version for the config file.
///
/// Increment this when making breaking changes to the config format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the config directory.
const APP_NAME: &str = "lite-edit";

/// Config file name.
const CONFIG_FILENAME: &str = "search_results.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Colors for search, file and line-number cells.
    pub palette: ResultPalette,
    /// Collapse earlier searches when a new one starts.
    pub collapse_previous_on_new_search: bool,
    /// Show new search and file rows expanded.
    pub expand_new_nodes: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            palette: ResultPalette::default(),
            collapse_previous_on_new_search: true,
            expand_new_nodes: true,
        }
    }
}

/// Returns the path to the panel config file.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}

impl PanelConfig {
    /// Loads the config from its default location, falling back to defaults
    /// on any error.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            tracing::warn!("no config directory; using default search results config");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "using default search results config");
                Self::default()
            }
        }
    }

    /// Loads the config from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or was
    /// written with a different schema version.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: PanelConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.schema_version != SCHEMA_VERSION {
            return Err(ConfigError::SchemaMismatch {
                expected: SCHEMA_VERSION,
                found: config.schema_version,
            });
        }

        Ok(config)
    }

    /// Saves the config to its default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Saves the config to `path`, creating parent directories as needed.
    ///
    /// The write is atomic: the JSON goes to a temp file that is then renamed
    /// over the target.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)?;

        Ok(())
    }
}
