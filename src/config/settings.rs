// src/config/settings.rs
//
// Optional `votewatch.toml`. Every field has a default, so a missing file and
// a partial file are both valid.
//
//   [store]
//   path = "votes_data.csv"
//
//   [logging]
//   level = "debug"
//   file = ".store/debug.log"

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::{DEBUG_LOG_FILE, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Append-only observation log.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self { path: default_store_path() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// env_logger filter string, e.g. "info" or "votewatch=debug".
    #[serde(default = "default_level")]
    pub level: String,
    /// None or an empty path logs to stderr.
    #[serde(default = "default_log_file")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_level(), file: default_log_file() }
    }
}

impl LoggingSettings {
    pub fn stderr(level: &str) -> Self {
        Self { level: s!(level), file: None }
    }
}

fn default_store_path() -> PathBuf { PathBuf::from(DEFAULT_LOG_FILE) }
fn default_level() -> String { s!(DEFAULT_LOG_LEVEL) }
fn default_log_file() -> Option<PathBuf> { Some(PathBuf::from(DEBUG_LOG_FILE)) }

impl Settings {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Settings(e.to_string()))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
