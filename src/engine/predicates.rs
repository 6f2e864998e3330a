//! The three visibility predicates.

use crate::domain::{DocumentTypeFilters, Principle, PrincipleFilters, Resource};

/// Substring match of an already-lowercased `needle` against title, topic and
/// category.
///
/// An absent category is treated as empty, so it can only match an empty
/// needle. Callers skip this predicate entirely when the query is empty.
#[must_use]
pub fn matches_search(resource: &Resource, needle: &str) -> bool {
    resource.title.to_lowercase().contains(needle)
        || resource.topic.to_lowercase().contains(needle)
        || resource
            .category
            .as_deref()
            .is_some_and(|category| category.to_lowercase().contains(needle))
}

/// Passes every resource when no type is selected, otherwise only selected types.
#[must_use]
pub const fn matches_document_type(resource: &Resource, filters: &DocumentTypeFilters) -> bool {
    !filters.any_selected() || filters.get(resource.resource_type)
}

/// Hides "Secure Base" and "Wellbeing" resources whose principle flag is off.
///
/// Only those two category labels are gated. `categories` flags and the other
/// principles are not consulted.
#[must_use]
pub fn matches_category_gate(resource: &Resource, principles: &PrincipleFilters) -> bool {
    resource
        .category
        .as_deref()
        .and_then(Principle::gating_category)
        .map_or(true, |principle| principles.get(principle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResourceType, Swatch};

    fn categorized(category: Option<&str>) -> Resource {
        let r = Resource::new("1", "Title", "Topic", ResourceType::Link, Swatch::Green);
        match category {
            Some(c) => r.with_category(c),
            None => r,
        }
    }

    #[test]
    fn wellbeing_flag_off_hides_wellbeing_resources() {
        let principles = PrincipleFilters {
            wellbeing: false,
            ..PrincipleFilters::default()
        };

        assert!(!matches_category_gate(&categorized(Some("Wellbeing")), &principles));
        assert!(matches_category_gate(&categorized(Some("Secure Base")), &principles));
        assert!(matches_category_gate(&categorized(Some("Other")), &principles));
        assert!(matches_category_gate(&categorized(None), &principles));
    }

    #[test]
    fn ungated_principles_never_hide_anything() {
        let principles = PrincipleFilters {
            secure_base: true,
            sense_of_appreciation: false,
            learning_organisation: false,
            mission_and_vision: false,
            wellbeing: true,
        };

        assert!(matches_category_gate(&categorized(Some("Mission and Vision")), &principles));
    }

    #[test]
    fn missing_category_never_matches_search() {
        let r = categorized(None);
        assert!(!matches_search(&r, "base"));
        assert!(matches_search(&r, "title"));
        assert!(matches_search(&r, "topic"));
    }

    #[test]
    fn document_type_with_nothing_selected_passes() {
        let r = categorized(None);
        assert!(matches_document_type(&r, &DocumentTypeFilters::default()));

        let only_pdf = DocumentTypeFilters {
            pdf: true,
            ..DocumentTypeFilters::default()
        };
        assert!(!matches_document_type(&r, &only_pdf));
    }
}
