//! Error types for the resource hub.
//!
//! This module defines the centralized error type [`ResourceHubError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The filtering core itself only knows one failure: a `(group, key)` pair that does
//! not exist. Every other variant belongs to the edges (catalog loading, configuration).

use super::filters::FilterGroup;
use thiserror::Error;

/// The main error type for resource hub operations.
///
/// # Examples
///
/// ```
/// use resource_hub::domain::{FilterGroup, ResourceHubError};
///
/// let err = ResourceHubError::InvalidFilterKey {
///     group: FilterGroup::DocumentType,
///     key: "spreadsheet".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid filter key `spreadsheet` for group `documentType`"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ResourceHubError {
    /// A filter key that is not part of the fixed key set of its group.
    ///
    /// Raised by `AppState::set_filter`. The state is left untouched when this
    /// error is returned.
    #[error("Invalid filter key `{key}` for group `{group}`")]
    InvalidFilterKey {
        /// Group the key was addressed to.
        group: FilterGroup,
        /// The rejected key, verbatim.
        key: String,
    },

    /// A filter group name that does not match any of the three groups.
    #[error("Unknown filter group `{0}`")]
    UnknownFilterGroup(String),

    /// Two resources in a catalog share the same identifier.
    #[error("Duplicate resource id `{0}`")]
    DuplicateResourceId(String),

    /// Catalog content is structurally valid JSON but semantically unusable.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for resource hub operations.
pub type Result<T> = std::result::Result<T, ResourceHubError>;
