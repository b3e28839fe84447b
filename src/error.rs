//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or saved
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Native window or event loop failed
    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a logging error with message
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Create a GUI error with message
    pub fn gui(msg: impl Into<String>) -> Self {
        Self::Gui(msg.into())
    }
}
