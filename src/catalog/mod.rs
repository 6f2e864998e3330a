//! Static resource data sources.
//!
//! The page reads its resource list once, at startup, through a
//! [`ResourceSource`]. Two sources exist:
//!
//! - [`BuiltinCatalog`]: the sample resources compiled into the crate
//! - [`JsonCatalog`]: a JSON file on disk
//!
//! Whatever the source, the list is checked with [`validate`] before use.
//!
//! # Modules
//!
//! - `builtin`: compiled-in sample resources
//! - `json`: JSON file catalog

mod builtin;
mod json;

pub use builtin::BuiltinCatalog;
pub use json::JsonCatalog;

use crate::domain::error::{ResourceHubError, Result};
use crate::domain::Resource;
use std::collections::HashSet;

/// Abstraction over resource list providers.
///
/// # Examples
///
/// ```
/// use resource_hub::catalog::{BuiltinCatalog, ResourceSource};
///
/// let resources = BuiltinCatalog.load()?;
/// assert_eq!(resources.len(), 6);
/// # Ok::<(), resource_hub::ResourceHubError>(())
/// ```
pub trait ResourceSource {
    /// Produces the full resource list, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or its content is invalid.
    fn load(&self) -> Result<Vec<Resource>>;
}

/// Checks catalog-level invariants: ids are non-empty and unique.
///
/// # Errors
///
/// - [`ResourceHubError::Catalog`] for an empty id
/// - [`ResourceHubError::DuplicateResourceId`] for a repeated id
pub fn validate(resources: &[Resource]) -> Result<()> {
    let mut seen = HashSet::with_capacity(resources.len());

    for (index, resource) in resources.iter().enumerate() {
        if resource.id.is_empty() {
            return Err(ResourceHubError::Catalog(format!(
                "resource at position {index} has an empty id"
            )));
        }
        if !seen.insert(resource.id.as_str()) {
            return Err(ResourceHubError::DuplicateResourceId(resource.id.clone()));
        }
    }

    Ok(())
}
