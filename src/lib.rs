//! Resource hub: the filtering and search state engine behind a resource-listing page.
//!
//! The page shows a search banner, a filter panel (desktop sidebar or mobile
//! overlay) and a grid of resource cards. This crate owns everything on that
//! page that makes decisions:
//!
//! - The state container for search text, filter selections and overlay visibility
//! - The pure engine deriving the visible resources from that state
//! - The view model handed to whatever renders the page
//!
//! Rendering, breakpoint detection and the resource data itself live outside.
//! The crate receives a resource list and a "compact layout" flag, and hands
//! back state, mutation operations and derived views.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation (external)                            │  ← Renders PageViewModel
//! └─────────────────────────────────────────────────────┘
//!                │ Event                ↑ PageViewModel
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ResourcePage (root)                              │
//! │  - AppState + observers                             │
//! │  - Event handling                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Engine        │   │ Catalog       │   │ UI contract   │
//! │ (engine/)     │   │ (catalog/)    │   │ (ui/)         │
//! │ - Predicates  │   │ - Built-in    │   │ - View models │
//! │ - Derivation  │   │ - JSON file   │   │ - Highlights  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Resource, FilterState, SearchState, errors       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use resource_hub::{initialize, Config, Event};
//! use resource_hub::domain::FilterGroup;
//!
//! let mut page = initialize(&Config::default())?;
//!
//! page.handle(&Event::SearchInput("guide".into()))?;
//! page.handle(&Event::ToggleFilter {
//!     group: FilterGroup::KeyFoundationalPrinciples,
//!     key: "wellbeing".into(),
//!     value: false,
//! })?;
//!
//! let ids: Vec<&str> = page.visible_resources().iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, ["1", "2", "3", "5"]);
//! # Ok::<(), resource_hub::ResourceHubError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod observability;
pub mod ui;

pub use app::{handle_event, AppState, Event, ResourcePage, StateChange, StateObserver};
pub use domain::{FilterState, Resource, ResourceHubError, Result, SearchState};
pub use engine::filter_resources;

use catalog::{BuiltinCatalog, JsonCatalog, ResourceSource};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Page configuration.
///
/// Provided by the host either as a flat key/value map or as a TOML file.
///
/// # Example
///
/// ```toml
/// catalog_file = "/srv/resources.json"
/// trace_level = "debug"
/// trace_file = "/var/log/resource-hub/spans.jsonl"
///
/// [initial_filters.keyFoundationalPrinciples]
/// secureBase = true
/// senseOfAppreciation = false
/// learningOrganisation = false
/// missionAndVision = false
/// wellbeing = false
///
/// [initial_filters.documentType]
/// doc = false
/// link = true
/// pdf = false
/// video = false
///
/// [initial_filters.categories]
/// sample1 = false
/// sample2 = false
/// sample3 = false
/// sample4 = false
/// sample5 = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON catalog to load. The built-in sample catalog is used when unset.
    pub catalog_file: Option<PathBuf>,

    /// Tracing level directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// File receiving exported spans as JSON lines. Stderr logging when unset.
    pub trace_file: Option<PathBuf>,

    /// Filter selections at page mount. Must be complete when given.
    pub initial_filters: Option<FilterState>,
}

impl Config {
    /// Parses configuration from a host-provided key/value map.
    ///
    /// Recognized keys: `catalog_file`, `trace_level`, `trace_file`. Blank
    /// values count as unset; other keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use resource_hub::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    /// map.insert("catalog_file".to_string(), " ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.catalog_file.is_none());
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: get("catalog_file").map(PathBuf::from),
            trace_level: get("trace_level"),
            trace_file: get("trace_file").map(PathBuf::from),
            initial_filters: None,
        }
    }

    /// Parses a TOML configuration string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceHubError::Config`] on invalid TOML, unknown keys or an
    /// incomplete `initial_filters` table.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ResourceHubError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceHubError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml`](Self::from_toml).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

/// Builds the page for a session.
///
/// Loads and validates the catalog (JSON file if configured, built-in
/// otherwise) and seeds the state with `initial_filters` or the defaults. The
/// page starts in wide layout with an empty query and the overlay closed.
///
/// # Errors
///
/// Propagates catalog loading and validation errors.
pub fn initialize(config: &Config) -> Result<ResourcePage> {
    tracing::debug!("initializing resource page");

    let resources = match &config.catalog_file {
        Some(path) => JsonCatalog::new(path).load()?,
        None => {
            let resources = BuiltinCatalog.load()?;
            catalog::validate(&resources)?;
            resources
        }
    };

    let filters = config.initial_filters.unwrap_or_default();
    tracing::debug!(resources = resources.len(), "resource page ready");

    Ok(ResourcePage::new(resources, AppState::new(filters)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_with_complete_filters_parses() {
        let config = Config::from_toml(
            r#"
            trace_level = "warn"

            [initial_filters.keyFoundationalPrinciples]
            secureBase = false
            senseOfAppreciation = false
            learningOrganisation = false
            missionAndVision = false
            wellbeing = true

            [initial_filters.documentType]
            doc = false
            link = false
            pdf = true
            video = false

            [initial_filters.categories]
            sample1 = false
            sample2 = false
            sample3 = false
            sample4 = false
            sample5 = false
            "#,
        )
        .unwrap();

        let filters = config.initial_filters.unwrap();
        assert!(!filters.key_foundational_principles.secure_base);
        assert!(filters.document_type.pdf);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn toml_with_partial_filters_is_rejected() {
        let err = Config::from_toml(
            r#"
            [initial_filters.documentType]
            pdf = true
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ResourceHubError::Config(_)));
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        assert!(Config::from_toml("theme = \"dark\"").is_err());
    }

    #[test]
    fn initialize_with_initial_filters() {
        let config = Config {
            initial_filters: Some(FilterState::default().with(
                domain::FilterKey::DocumentType(domain::ResourceType::Video),
                true,
            )),
            ..Config::default()
        };

        let page = initialize(&config).unwrap();
        let ids: Vec<&str> = page.visible_resources().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "4"]);
    }
}
