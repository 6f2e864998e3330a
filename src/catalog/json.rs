//! JSON file catalog.
//!
//! Two document shapes are accepted:
//!
//! ```json
//! [ { "id": "1", "title": "...", "topic": "...", "type": "link", "color": "#E00027" } ]
//! ```
//!
//! ```json
//! { "version": 1, "resources": [ ... ] }
//! ```
//!
//! `version` may be left out of the object form.

use super::{validate, ResourceSource};
use crate::domain::error::{ResourceHubError, Result};
use crate::domain::Resource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Highest document version this crate understands.
const CATALOG_VERSION: u32 = 1;

/// Object form of a catalog document. A missing `version` means version 1.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionedCatalog {
    #[serde(default = "default_version")]
    version: u32,
    resources: Vec<Resource>,
}

const fn default_version() -> u32 {
    CATALOG_VERSION
}

/// Resource catalog read from a JSON file.
///
/// The file is read on every [`load`](ResourceSource::load); the page calls it
/// once at startup.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Parses and validates catalog JSON.
    ///
    /// The top-level shape is checked first and the matching document type is
    /// then deserialized directly, so a bad entry is reported with its field,
    /// line and column.
    ///
    /// # Errors
    ///
    /// - [`ResourceHubError::Catalog`] if the document is neither an array nor
    ///   an object, or its version is unsupported
    /// - [`ResourceHubError::Json`] if an entry is malformed
    /// - Anything [`validate`] reports
    pub fn parse(contents: &str) -> Result<Vec<Resource>> {
        let resources = match contents.trim_start().chars().next() {
            Some('[') => serde_json::from_str::<Vec<Resource>>(contents)?,
            Some('{') => {
                let document: VersionedCatalog = serde_json::from_str(contents)?;
                if document.version > CATALOG_VERSION {
                    return Err(ResourceHubError::Catalog(format!(
                        "unsupported catalog version {} (max {CATALOG_VERSION})",
                        document.version
                    )));
                }
                document.resources
            }
            _ => {
                return Err(ResourceHubError::Catalog(
                    "expected a JSON array or object at the top level".to_string(),
                ))
            }
        };

        validate(&resources)?;
        Ok(resources)
    }
}

impl ResourceSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Resource>> {
        tracing::debug!(path = ?self.file_path, "loading resource catalog");

        let contents = std::fs::read_to_string(&self.file_path)?;
        let resources = Self::parse(&contents)?;

        tracing::debug!(resources = resources.len(), "catalog loaded");
        Ok(resources)
    }
}
