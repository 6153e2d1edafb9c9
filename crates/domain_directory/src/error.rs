//! Customer directory errors

use thiserror::Error;

/// Errors that can occur in the customer directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A required field is missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The targeted customer does not exist
    #[error("Customer not found: {0}")]
    NotFound(String),
}

impl DirectoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        DirectoryError::Validation(message.into())
    }

    pub fn not_found(message: impl std::fmt::Display) -> Self {
        DirectoryError::NotFound(message.to_string())
    }
}
