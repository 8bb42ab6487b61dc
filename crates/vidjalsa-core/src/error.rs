//! Error types for VidJalsa core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in VidJalsa core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A view was opened without the navigation state it needs.
    #[error("No navigation state for {path}")]
    MissingNavigationState {
        /// Path of the view that was opened.
        path: String,
    },

    /// The navigation state exists but does not have the expected shape.
    #[error("Invalid navigation state for {path}: {reason}")]
    InvalidNavigationState {
        /// Path of the view that was opened.
        path: String,
        /// Why the state could not be decoded.
        reason: String,
    },

    /// Path does not correspond to any view.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request could not be built or sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned status {status}")]
    BackendStatus {
        /// HTTP status code.
        status: u16,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
