//! Scripted replay of moves through the chessboard engine.
//!
//! # Modules
//!
//! - [`script`] - TOML move scripts and their settings
//! - [`replay`] - runs a script against a new game

pub mod replay;
pub mod script;

pub use replay::{run, Rejection, ReplayOutcome};
pub use script::{ReplayScript, ScriptError, ScriptMove, Settings};
