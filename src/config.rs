//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` next to the state file and
//! covers:
//! - the board URL used as the base for shareable ticket links
//! - the default sort key for listings
//!
//! Unlike the machine-written state file, the config file is user-authored:
//! a missing file yields the defaults, a malformed one is an error.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths::config_file;
use crate::query::SortKey;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL for shareable ticket links
    #[serde(default = "default_board_url")]
    pub board_url: String,

    /// Sort key used when `ls` is invoked without `--sort`. An
    /// unrecognized value falls back to newest-updated first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
}

fn default_board_url() -> String {
    "https://tickets.local/board".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_url: default_board_url(),
            default_sort: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Config> {
        let path = config_file();
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_yaml_ng::from_str(&raw)?)
    }

    /// The configured default sort key; unrecognized or absent values
    /// resolve to `SortKey::UpdatedDesc`.
    pub fn default_sort_key(&self) -> SortKey {
        self.default_sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}
