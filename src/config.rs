use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::{ExportError, Result};

/// Settings for the `exportbo3` tool, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Folder the BO3 files and their tile entity folders are written to.
    pub structures_dir: PathBuf,
    /// Author used when none is given on the command line.
    pub default_author: String,
    pub description: String,
    /// Log filter, e.g. `info` or `bo3_tools=debug`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            structures_dir: PathBuf::from("GlobalObjects"),
            default_author: "Unknown".to_string(),
            description: "No description given".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config at `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| ExportError::io(path, e))
    }
}
