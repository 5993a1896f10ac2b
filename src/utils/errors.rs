//! Error handling for eventbook
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for eventbook operations
#[derive(Error, Debug)]
pub enum EventBookError {
    #[error("User with this email already exists: {email}")]
    DuplicateUser { email: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for eventbook operations
pub type Result<T> = std::result::Result<T, EventBookError>;

impl EventBookError {
    /// Message suitable for surfacing directly to the person driving the UI.
    /// Internal storage failures are collapsed into a generic message.
    pub fn user_message(&self) -> String {
        match self {
            EventBookError::DuplicateUser { .. } => {
                "User with this email already exists".to_string()
            }
            EventBookError::InvalidCredentials => "Invalid email or password".to_string(),
            EventBookError::PermissionDenied(_) => "Please log in to continue".to_string(),
            EventBookError::InvalidInput(msg) => msg.clone(),
            EventBookError::Config(_)
            | EventBookError::Serialization(_)
            | EventBookError::Io(_) => "Something went wrong, please try again".to_string(),
        }
    }

    /// Check if the error is recoverable by retrying the operation
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventBookError::DuplicateUser { .. } => false,
            EventBookError::InvalidCredentials => true,
            EventBookError::PermissionDenied(_) => false,
            EventBookError::InvalidInput(_) => true,
            EventBookError::Config(_) => false,
            EventBookError::Serialization(_) => false,
            EventBookError::Io(_) => true,
        }
    }
}
