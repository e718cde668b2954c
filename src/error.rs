use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error during JSON serialization or deserialization
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when the profiles file could not be written
    #[error("failed to write profiles file '{}': {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Error when executing Git commands. Nothing was changed.
    #[error("git command failed: {0}")]
    GitCommand(String),
    /// user.name was written but user.email was not
    #[error("git user.name was updated but user.email was not, identity is only partially switched: {0}")]
    PartialSwitch(String),
    /// Error during input validation.
    #[error("validation error: {0}")]
    Validation(String),
    /// Error when a specific profile is not found.
    #[error("profile not found: '{0}'")]
    ProfileNotFound(String),
    /// Error when default locations cannot be resolved
    #[error("configuration error: {0}")]
    Config(String),
    /// Error during UTF-8 conversion.
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
