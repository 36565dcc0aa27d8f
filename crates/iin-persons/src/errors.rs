//! Person directory error types.

use thiserror::Error;

/// Person directory errors
#[derive(Debug, Error)]
pub enum PersonError {
    /// IIN failed validation
    #[error("Invalid IIN: {0}")]
    InvalidIin(#[from] iin_core::IinError),

    /// A person with this IIN is already stored
    #[error("Person already exists: {0}")]
    AlreadyExists(String),

    /// No person stored under this IIN
    #[error("Person not found: {0}")]
    NotFound(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] iin_storage::StorageError),
}

/// Result type for person directory operations
pub type Result<T> = std::result::Result<T, PersonError>;
