//! Core error types for habitloop-core.
//!
//! One thiserror hierarchy for the whole library: store, config and
//! validation failures each get their own enum, folded into [`CoreError`]
//! at the crate boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A date string that is not a calendar date in `YYYY-MM-DD` form
    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    /// Password hashing or hash parsing failed
    #[error("Auth error: {0}")]
    Auth(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The tracker file exists but could not be read
    #[error("Failed to read store at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tracker file could not be written
    #[error("Failed to write store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tracker file exists but does not parse as a tracker document
    #[error("Store at {path} is not a valid tracker document: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the configuration file
    #[error("Failed to parse configuration at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key is not a known configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Address does not match the accepted account address form
    #[error("'{0}' is not a valid Gmail address")]
    EmailFormat(String),

    /// Password does not meet the strength rules
    #[error("Password must have at least 8 characters, one uppercase letter and one digit")]
    WeakPassword,

    /// An account with this address already exists
    #[error("'{0}' is already registered")]
    EmailTaken(String),

    /// No account with this address
    #[error("No account registered for '{0}'")]
    UnknownAccount(String),

    /// A habit with this name (case-insensitive) already exists
    #[error("Habit '{0}' already exists")]
    DuplicateHabit(String),

    /// No habit with this name
    #[error("No habit named '{0}'")]
    UnknownHabit(String),

    /// Habit names must be non-empty
    #[error("Habit name cannot be empty")]
    EmptyHabitName,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
