//! Property tests for filter state updates and resource derivation.

use proptest::prelude::*;
use resource_hub::app::{AppState, StateChange, StateSnapshot};
use resource_hub::domain::{
    FilterGroup, FilterKey, FilterState, Resource, ResourceType, SearchState, Swatch,
};
use resource_hub::engine::filter_resources;
use std::cell::Cell;
use std::rc::Rc;

fn all_keys() -> Vec<FilterKey> {
    FilterGroup::ALL.into_iter().flat_map(FilterGroup::keys).collect()
}

fn arb_filter_state() -> impl Strategy<Value = FilterState> {
    proptest::collection::vec(any::<bool>(), all_keys().len()).prop_map(|flags| {
        all_keys()
            .into_iter()
            .zip(flags)
            .fold(FilterState::default(), |state, (key, value)| state.with(key, value))
    })
}

fn arb_key() -> impl Strategy<Value = FilterKey> {
    proptest::sample::select(all_keys())
}

fn arb_category() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Secure Base".to_string())),
        Just(Some("Wellbeing".to_string())),
        Just(Some("Mission and Vision".to_string())),
    ]
}

fn arb_resources() -> impl Strategy<Value = Vec<Resource>> {
    proptest::collection::vec(
        (
            "[a-zA-Z ]{0,12}",
            proptest::sample::select(ResourceType::ALL.to_vec()),
            arb_category(),
        ),
        0..=12,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (title, resource_type, category))| {
                let resource = Resource::new(i.to_string(), title, "Topic", resource_type, Swatch::Blue);
                match category {
                    Some(label) => resource.with_category(label),
                    None => resource,
                }
            })
            .collect()
    })
}

proptest! {
    /// Setting one entry leaves every other entry untouched.
    #[test]
    fn with_overrides_exactly_one_entry(
        state in arb_filter_state(),
        key in arb_key(),
        value in any::<bool>(),
    ) {
        let next = state.with(key, value);

        prop_assert_eq!(next.get(key), value);
        for ((k, before), (_, after)) in state.entries().zip(next.entries()) {
            if k != key {
                prop_assert_eq!(before, after, "{} changed", k);
            }
        }
    }

    /// Applying the same filter twice notifies observers at most once.
    #[test]
    fn repeated_filter_updates_are_idempotent(
        initial in arb_filter_state(),
        key in arb_key(),
        value in any::<bool>(),
    ) {
        let mut state = AppState::new(initial);
        let notified = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&notified);
        state.subscribe(move |_: &StateChange, _: &StateSnapshot| counter.set(counter.get() + 1));

        state.apply_filter(key, value);
        let after_first = *state.filters();
        state.apply_filter(key, value);

        prop_assert_eq!(*state.filters(), after_first);
        let expected = u32::from(initial.get(key) != value);
        prop_assert_eq!(notified.get(), expected);
    }

    /// The output is an order-preserving subsequence of the input.
    #[test]
    fn derivation_preserves_catalog_order(
        resources in arb_resources(),
        filters in arb_filter_state(),
        query in "[a-z]{0,3}",
    ) {
        let visible = filter_resources(&resources, &filters, &SearchState::new(query));

        let positions: Vec<usize> = visible
            .iter()
            .map(|r| resources.iter().position(|candidate| candidate.id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// No search, no type selected and both gating principles on: nothing is hidden.
    #[test]
    fn unrestricted_state_shows_everything(
        resources in arb_resources(),
        categories in arb_filter_state(),
    ) {
        let mut filters = categories;
        filters.document_type = Default::default();
        filters.key_foundational_principles.secure_base = true;
        filters.key_foundational_principles.wellbeing = true;

        let visible = filter_resources(&resources, &filters, &SearchState::default());
        prop_assert_eq!(visible.len(), resources.len());
    }

    /// Adding a search query can only narrow the result.
    #[test]
    fn search_narrows_results(
        resources in arb_resources(),
        filters in arb_filter_state(),
        query in "[a-z]{1,3}",
    ) {
        let without = filter_resources(&resources, &filters, &SearchState::default());
        let with = filter_resources(&resources, &filters, &SearchState::new(query));

        prop_assert!(with.iter().all(|r| without.iter().any(|w| w.id == r.id)));
    }

    /// Category filters never change the visible set.
    #[test]
    fn category_flags_do_not_filter(
        resources in arb_resources(),
        filters in arb_filter_state(),
        categories in arb_filter_state(),
    ) {
        let mut other = filters;
        other.categories = categories.categories;

        let a: Vec<&str> = filter_resources(&resources, &filters, &SearchState::default())
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        let b: Vec<&str> = filter_resources(&resources, &other, &SearchState::default())
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        prop_assert_eq!(a, b);
    }
}
