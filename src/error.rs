//! Error handling module for tickbox
//!
//! Provides the crate-wide error type using thiserror. Startup paths wrap
//! these with `anyhow` context; the selection store itself never returns
//! them to callers.

use thiserror::Error;

/// Main error type for tickbox
#[derive(Error, Debug)]
pub enum TickboxError {
    /// IO errors (state files, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Durable storage errors (unusable state directory, bad key)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Catalog errors (duplicate names, empty sections)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors (flags, environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for tickbox operations
pub type Result<T> = std::result::Result<T, TickboxError>;

impl TickboxError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
