//! Configuration file loading for the move-index tool.
//!
//! Settings come from `move-index.toml` in the working directory (or a path
//! given on the command line). Every field is optional; command-line flags
//! override whatever the file says.

use chess_core::Fen;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Tool settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Position every command starts from. Defaults to the standard setup.
    #[serde(default = "default_start_fen")]
    pub start_fen: String,
    /// Depth for `perft` when none is given. Defaults to 4.
    #[serde(default = "default_perft_depth")]
    pub perft_depth: u32,
    /// Print the ideal code length after encoding.
    #[serde(default)]
    pub show_bits: bool,
}

fn default_start_fen() -> String {
    Fen::STARTPOS.to_string()
}

fn default_perft_depth() -> u32 {
    4
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            start_fen: default_start_fen(),
            perft_depth: default_perft_depth(),
            show_bits: false,
        }
    }
}

impl IndexConfig {
    /// Loads the configuration from `path`, or defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Default configuration file location.
    pub fn config_path() -> PathBuf {
        PathBuf::from("move-index.toml")
    }
}
