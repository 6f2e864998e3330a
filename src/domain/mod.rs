//! Domain layer for the resource hub.
//!
//! This module contains the core data types, independent of any rendering
//! technology or data source.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`resource`]: The immutable `Resource` record and its enums
//! - [`filters`]: Filter groups, keys, `FilterState` and `SearchState`
//!
//! # Examples
//!
//! ```
//! use resource_hub::domain::{FilterKey, FilterState, Principle};
//!
//! let filters = FilterState::default().with(FilterKey::Principle(Principle::Wellbeing), false);
//! assert!(!filters.key_foundational_principles.wellbeing);
//! ```

pub mod error;
pub mod filters;
pub mod resource;

pub use error::{ResourceHubError, Result};
pub use filters::{
    Category, CategoryFilters, DocumentTypeFilters, FilterGroup, FilterKey, FilterState,
    Principle, PrincipleFilters, SearchState,
};
pub use resource::{Resource, ResourceType, Swatch};
