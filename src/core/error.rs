//! Error types for core module
//!
//! Covers settings persistence and the command-line overrides applied on top of it.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Difficulty name that maps to no level
    #[error("Unknown difficulty '{level}' (expected easy, greedy, medium or hard)")]
    UnknownDifficulty { level: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
