//! Application error handling
//!
//! [`AppError`] covers the recoverable failures of the ambient layers:
//! catalog loading and settings CRUD. Customer-form validation failures
//! are NOT `AppError`s - they travel as field-keyed
//! [`FieldErrors`](shared::order::FieldErrors) values so the form can mark
//! individual fields.

/// Application error enumeration
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected by a CRUD validation rule
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Requested resource does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Catalog data file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
