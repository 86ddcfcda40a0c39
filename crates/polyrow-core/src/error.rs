//! Error types for record file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when saving or loading a record file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No constructor is registered for the discriminator.
    #[error("unknown discriminator: '{discriminator}'")]
    UnknownDiscriminator { discriminator: String },

    /// A body line does not have one token per header column.
    #[error("field count mismatch: expected {expected}, got {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// The source has no header line.
    #[error("source is empty: missing header line")]
    EmptySource,

    /// Codec options that cannot produce a decodable file.
    #[error("invalid codec options: {reason}")]
    InvalidOptions { reason: String },

    /// File open, create, or rename failure.
    #[error("failed to {operation} file: {path}")]
    File {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read or write failure on the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for record file operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create an UnknownDiscriminator error.
    pub fn unknown_discriminator(discriminator: impl Into<String>) -> Self {
        Self::UnknownDiscriminator {
            discriminator: discriminator.into(),
        }
    }

    /// Create an InvalidOptions error.
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            reason: reason.into(),
        }
    }

    /// Build a closure that wraps an I/O error with the failing operation and path.
    pub(crate) fn file(
        operation: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::File {
            operation,
            path,
            source,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownDiscriminator { discriminator } => format!(
                "The file contains a record of type '{discriminator}', which this program does not know how to load."
            ),
            Self::FieldCountMismatch { expected, actual } => format!(
                "A record line has {actual} fields but the header declares {expected} columns. The file may be corrupted."
            ),
            Self::EmptySource => "The file is empty; a header line was expected.".to_string(),
            Self::InvalidOptions { reason } => format!("The codec settings are not usable: {reason}."),
            Self::File {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Io(_) => "An error occurred while reading or writing record data.".to_string(),
        }
    }
}
