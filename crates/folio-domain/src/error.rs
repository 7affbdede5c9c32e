//! Error types for folio-domain

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;

/// Main error type for submission operations
#[derive(Error, Debug)]
pub enum DomainError {
    /// A raw status code outside the lifecycle enumeration
    #[error("Unknown submission status code: {0}")]
    UnknownStatus(i32),

    /// Persistence collaborator failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Author or user lookup failure
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by author and user directories
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// The backing directory could not be reached
    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}
