//! Derivation of the visible resource set.
//!
//! The engine is a pure function of `(resources, filters, search)`. It returns
//! an order-preserving subsequence of its input and never fails: when nothing
//! passes, the result is simply empty.
//!
//! A resource is visible iff it passes all three predicates:
//!
//! 1. **Search**: if the query is non-empty, a case-insensitive substring of
//!    the title, topic or category (any one suffices).
//! 2. **Document type**: if any type is selected, the resource's type must be
//!    one of them; with nothing selected every type passes.
//! 3. **Category gate**: resources labelled "Secure Base" or "Wellbeing" are
//!    hidden when the matching principle flag is off. Other labels always pass.
//!
//! # Example
//!
//! ```
//! use resource_hub::domain::{FilterState, Resource, ResourceType, SearchState, Swatch};
//! use resource_hub::engine::filter_resources;
//!
//! let resources = vec![
//!     Resource::new("1", "Guide A", "Topic", ResourceType::Link, Swatch::Red).with_category("Secure Base"),
//!     Resource::new("2", "Guide B", "Topic", ResourceType::Pdf, Swatch::Blue).with_category("Wellbeing"),
//! ];
//! let mut filters = FilterState::default();
//! filters.key_foundational_principles.wellbeing = false;
//!
//! let visible = filter_resources(&resources, &filters, &SearchState::new("guide"));
//! let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, ["1"]);
//! ```

mod predicates;

pub use predicates::{matches_category_gate, matches_document_type, matches_search};

use crate::domain::{DocumentTypeFilters, FilterState, PrincipleFilters, Resource, SearchState};

/// A prepared filter for one derivation.
///
/// Lowercases the query and resolves whether any document type is selected
/// once, so that evaluating each resource is a constant amount of work on top
/// of the substring scan.
#[derive(Debug, Clone)]
pub struct ResourceFilter {
    needle: Option<String>,
    /// `None` when no type is selected, i.e. every type passes.
    document_types: Option<DocumentTypeFilters>,
    principles: PrincipleFilters,
}

impl ResourceFilter {
    #[must_use]
    pub fn new(filters: &FilterState, search: &SearchState) -> Self {
        let needle = search.is_active().then(|| search.query.to_lowercase());

        Self {
            needle,
            document_types: filters
                .document_type
                .any_selected()
                .then_some(filters.document_type),
            principles: filters.key_foundational_principles,
        }
    }

    /// Whether `resource` passes all predicates.
    #[must_use]
    pub fn matches(&self, resource: &Resource) -> bool {
        self.needle
            .as_deref()
            .map_or(true, |needle| matches_search(resource, needle))
            && self
                .document_types
                .map_or(true, |types| types.get(resource.resource_type))
            && matches_category_gate(resource, &self.principles)
    }
}

/// Returns the resources that pass every predicate, in input order.
#[must_use]
pub fn filter_resources<'a>(
    resources: &'a [Resource],
    filters: &FilterState,
    search: &SearchState,
) -> Vec<&'a Resource> {
    let _span = tracing::debug_span!(
        "filter_resources",
        total_resources = resources.len(),
        query_len = search.query.len(),
        any_type_selected = filters.document_type.any_selected()
    )
    .entered();

    let filter = ResourceFilter::new(filters, search);
    let visible: Vec<&Resource> = resources.iter().filter(|r| filter.matches(r)).collect();

    tracing::debug!(visible_count = visible.len(), "resources filtered");

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterKey, ResourceType, Swatch};

    fn resource(id: &str, title: &str, resource_type: ResourceType, category: Option<&str>) -> Resource {
        let r = Resource::new(id, title, "Sample Topic", resource_type, Swatch::Red);
        match category {
            Some(c) => r.with_category(c),
            None => r,
        }
    }

    fn ids<'a>(visible: &[&'a Resource]) -> Vec<&'a str> {
        visible.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let resources = vec![resource("1", "Resource 1", ResourceType::Doc, None)];
        let visible = filter_resources(&resources, &FilterState::default(), &SearchState::new("resource"));
        assert_eq!(ids(&visible), ["1"]);
    }

    #[test]
    fn no_document_type_selected_shows_every_type() {
        let resources: Vec<Resource> = ResourceType::ALL
            .into_iter()
            .enumerate()
            .map(|(i, t)| resource(&i.to_string(), "t", t, None))
            .collect();

        let visible = filter_resources(&resources, &FilterState::default(), &SearchState::default());
        assert_eq!(visible.len(), 4);
    }

    #[test]
    fn type_selection_is_resolved_when_prepared() {
        let open = ResourceFilter::new(&FilterState::default(), &SearchState::default());
        assert!(open.document_types.is_none());

        let filters = FilterState::default().with(FilterKey::DocumentType(ResourceType::Pdf), true);
        let restricted = ResourceFilter::new(&filters, &SearchState::default());
        assert_eq!(restricted.document_types, Some(filters.document_type));

        for t in ResourceType::ALL {
            let r = resource("1", "t", t, None);
            assert_eq!(restricted.matches(&r), matches_document_type(&r, &filters.document_type));
            assert!(open.matches(&r));
        }
    }

    #[test]
    fn selected_document_types_restrict_results() {
        let resources = vec![
            resource("1", "a", ResourceType::Link, None),
            resource("2", "b", ResourceType::Pdf, None),
        ];
        let filters = FilterState::default().with(FilterKey::DocumentType(ResourceType::Link), true);

        let visible = filter_resources(&resources, &filters, &SearchState::default());
        assert_eq!(ids(&visible), ["1"]);
    }

    #[test]
    fn search_hit_failing_type_filter_is_hidden() {
        let resources = vec![resource("1", "Guide", ResourceType::Pdf, None)];
        let filters = FilterState::default().with(FilterKey::DocumentType(ResourceType::Video), true);

        let visible = filter_resources(&resources, &filters, &SearchState::new("guide"));
        assert!(visible.is_empty());
    }

    #[test]
    fn category_matches_search() {
        let resources = vec![
            resource("1", "Chat", ResourceType::Link, Some("Secure Base")),
            resource("2", "Chat", ResourceType::Link, None),
        ];

        let visible = filter_resources(&resources, &FilterState::default(), &SearchState::new("secure"));
        assert_eq!(ids(&visible), ["1"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let visible = filter_resources(&[], &FilterState::default(), &SearchState::new("x"));
        assert!(visible.is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let resources = vec![
            resource("c", "guide", ResourceType::Doc, None),
            resource("a", "guide", ResourceType::Doc, None),
            resource("b", "guide", ResourceType::Doc, None),
        ];
        let visible = filter_resources(&resources, &FilterState::default(), &SearchState::new("GUIDE"));
        assert_eq!(ids(&visible), ["c", "a", "b"]);
    }
}
