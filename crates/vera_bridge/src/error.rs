//! Error types for scene conversion and host path handling

use thiserror::Error;

/// Errors raised while converting a host entity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The camera source is neither a viewport nor a scene object
    #[error("Invalid camera source: {0}")]
    InvalidCameraSource(String),

    /// A matrix that must be inverted has no inverse
    #[error("Singular {0} matrix cannot be inverted")]
    SingularMatrix(&'static str),
}

/// Errors raised while expanding a host path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `//` path was given but the host file has no directory yet
    #[error("Path '{0}' is relative to the host file, which has not been saved")]
    NoBaseDirectory(String),

    /// A `~` path was given but no home directory is known
    #[error("Path '{0}' refers to the home directory, which is not set")]
    NoHomeDirectory(String),

    /// The path is empty
    #[error("Empty path")]
    Empty,
}
