//! Error types for the calsync ecosystem.

use thiserror::Error;

/// Errors that can occur in calsync operations.
#[derive(Error, Debug)]
pub enum CalSyncError {
    #[error("Calendar access was not granted")]
    AccessDenied,

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("{0}")]
    ProviderNotInstalled(String),

    #[error("Provider request timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calsync operations.
pub type CalSyncResult<T> = Result<T, CalSyncError>;
