//! Application configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the data directory
//! (see [`DataStorage`]). A missing file means defaults; a file that exists
//! but does not parse is an error.
//!
//! ```rust,no_run
//! use biblia::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.search.limit = 20;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::history::DEFAULT_RECENT_ITEMS;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Overrides the database path from the configuration file.
pub const DB_PATH_ENV: &str = "BIBLIA_DB";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Shorter terms are not searched at all.
    pub min_chars: usize,
    /// Maximum number of verses returned.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { min_chars: 3, limit: 50 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Bible database file. Defaults to `biblia-rv-1960.db` in the data
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    pub search: SearchConfig,
    /// Entries shown by `history list` unless a limit is given.
    pub recent_history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            search: SearchConfig::default(),
            recent_history: DEFAULT_RECENT_ITEMS,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Database path: `BIBLIA_DB`, then the configured path, then the
    /// default file in the data directory.
    pub fn database_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(path) = &self.database {
            return Ok(path.clone());
        }
        Ok(storage.get_path(DB_FILE_NAME)?)
    }
}
