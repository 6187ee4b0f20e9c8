//! Error types for the travel journal core.
//!
//! This module defines the centralized error type [`JournalError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for journal operations.
///
/// Storage failures are split by direction because the repository recovers from
/// them differently: an unreadable payload is replaced by the sample dataset,
/// while a failed write is logged and the in-memory state stays authoritative.
///
/// # Examples
///
/// ```
/// use wanderlog::JournalError;
///
/// fn validate_rating(rating: u8) -> Result<(), JournalError> {
///     if rating > 5 {
///         return Err(JournalError::Validation(format!("rating {rating} is out of range")));
///     }
///     Ok(())
/// }
///
/// assert!(validate_rating(7).is_err());
/// ```
#[derive(Debug, Error)]
pub enum JournalError {
    /// Persisted payload could not be read or parsed.
    ///
    /// Recovered locally by seeding the sample dataset; never fatal.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Writing the persisted payload failed (quota exceeded, disabled storage, I/O).
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Image compression collaborator rejected the input.
    ///
    /// Surfaced to the caller, typically shown as a form validation message.
    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    /// Trip form input is incomplete or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration is invalid or cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;
