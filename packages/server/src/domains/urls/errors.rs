//! Typed errors for the URL domain.

use thiserror::Error;

use crate::common::UrlId;
use crate::kernel::FetchError;

/// Rejected user input. Nothing is persisted when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    EmptyInput,

    #[error("Invalid URL")]
    InvalidFormat,

    #[error("URL exceeds 255 characters")]
    TooLong,
}

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A URL with this normalized name is already registered
    #[error("url already exists: {name}")]
    UniqueViolation { name: String },

    /// The referenced URL row does not exist
    #[error("url {0} does not exist")]
    ForeignKeyViolation(UrlId),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors from the "add URL" flow.
#[derive(Debug, Error)]
pub enum AddUrlError {
    #[error(transparent)]
    Invalid(#[from] UrlValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the "run check" flow.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("url {0} not found")]
    NotFound(UrlId),

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
