//! Stride configuration.
//!
//! Loaded from `~/.stride/config.toml`. Every key is optional; a missing file
//! means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::feed::OnError;
use crate::model::Labels;

/// Stride configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Label wording for text output: `verbatim` or `corrected`.
    pub labels: Labels,

    /// What a batch does when one package fails: `abort` or `skip`.
    pub on_error: OnError,
}

impl Config {
    /// Load config from `~/.stride/config.toml`.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, falling back to defaults if it does not exist.
    /// Returns an error if the file exists but is unreadable or invalid.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// The config file path: `~/.stride/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".stride").join("config.toml"))
    }
}
