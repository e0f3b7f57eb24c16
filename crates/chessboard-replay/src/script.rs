//! Move script loading for the replay driver.
//!
//! A script is a TOML file with optional `[settings]` and a list of
//! `[[moves]]`, each naming origin and destination as `[row, col]`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a move script.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Failed to read the script file from disk.
    #[error("Failed to read script file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the script as valid TOML.
    #[error("Failed to parse script: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Replay behaviour switches. Every field has a default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Abort the replay at the first rejected move. Defaults to true.
    #[serde(default = "default_true")]
    pub stop_on_error: bool,
    /// Print the board after each applied move. Defaults to true.
    #[serde(default = "default_true")]
    pub print_board: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            stop_on_error: true,
            print_board: true,
        }
    }
}

/// One scripted move as raw `(row, col)` coordinates.
///
/// Coordinates are not range-checked here; off-board values are rejected
/// by the engine like any other illegal move.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ScriptMove {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// A parsed move script.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct ReplayScript {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub moves: Vec<ScriptMove>,
}

impl ReplayScript {
    /// Reads and parses a script from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::ReadError`] if the file cannot be read,
    /// or [`ScriptError::ParseError`] if it is not a valid script.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a script from TOML text.
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }
}
