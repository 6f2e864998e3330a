//! Application state container.
//!
//! This module defines [`AppState`], the single source of truth for the search
//! text, the filter selections and the mobile filter overlay flag. It is built
//! once at the application root and handed by reference to whatever needs it;
//! there is no ambient lookup.
//!
//! # Mutation Model
//!
//! State values are replaced wholesale. Every operation computes a new
//! `FilterState` / `SearchState` / flag, compares it with the current one and,
//! if it differs, swaps it in and notifies observers. Repeating an operation
//! with the same arguments is therefore a silent no-op.
//!
//! # Example
//!
//! ```rust
//! use resource_hub::app::AppState;
//! use resource_hub::domain::FilterGroup;
//!
//! let mut state = AppState::default();
//! state.set_search_query("guide");
//! state.set_filter(FilterGroup::DocumentType, "pdf", true)?;
//!
//! assert_eq!(state.search().query, "guide");
//! assert!(state.filters().document_type.pdf);
//! # Ok::<(), resource_hub::ResourceHubError>(())
//! ```

use super::observer::{StateChange, StateObserver, StateSnapshot, SubscriptionId};
use crate::domain::error::Result;
use crate::domain::{FilterGroup, FilterKey, FilterState, SearchState};

/// Central state container for the resource page.
///
/// Consumers read through the accessor methods and change state only through
/// the mutation operations below.
pub struct AppState {
    filters: FilterState,
    search: SearchState,
    is_mobile_filters_open: bool,
    observers: Vec<(SubscriptionId, Box<dyn StateObserver>)>,
    next_subscription: u64,
}

impl AppState {
    /// Creates a state container seeded with `filters`, an empty query and a
    /// closed overlay.
    ///
    /// Called once at the application root. No observers are registered yet.
    ///
    /// # Parameters
    ///
    /// * `filters` - Initial selections, usually [`FilterState::default`] or a
    ///   configured set
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_hub::app::AppState;
    /// use resource_hub::domain::{FilterKey, FilterState, ResourceType};
    ///
    /// let filters = FilterState::default().with(FilterKey::DocumentType(ResourceType::Pdf), true);
    /// let state = AppState::new(filters);
    ///
    /// assert!(state.filters().document_type.pdf);
    /// assert!(state.search().query.is_empty());
    /// assert!(!state.is_mobile_filters_open());
    /// ```
    #[must_use]
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            search: SearchState::default(),
            is_mobile_filters_open: false,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current filter selections.
    ///
    /// The reference is read-only; change selections through
    /// [`set_filter`](Self::set_filter) or [`apply_filter`](Self::apply_filter).
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current search input. An empty query means no search restriction.
    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    /// Whether the mobile filter overlay is open.
    ///
    /// Tracked regardless of layout; the view model decides whether the
    /// overlay is shown.
    #[must_use]
    pub const fn is_mobile_filters_open(&self) -> bool {
        self.is_mobile_filters_open
    }

    /// Returns an owned copy of the current state.
    ///
    /// Observers receive the same value after each change. Two snapshots
    /// compare equal iff nothing changed in between, which is how
    /// [`handle_event`](super::handle_event) detects no-op events.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            filters: self.filters,
            search: self.search.clone(),
            is_mobile_filters_open: self.is_mobile_filters_open,
        }
    }

    /// Replaces the search query. Any string is accepted; empty means no search.
    ///
    /// The query is stored verbatim (no trimming or case folding); the engine
    /// lowercases it when deriving.
    ///
    /// # Parameters
    ///
    /// * `query` - The full text of the search box
    ///
    /// # Notifications
    ///
    /// [`StateChange::SearchQuery`] if the query differs from the current one,
    /// nothing otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_hub::app::AppState;
    ///
    /// let mut state = AppState::default();
    /// state.set_search_query("Guide");
    /// assert_eq!(state.search().query, "Guide");
    ///
    /// state.set_search_query("");
    /// assert!(!state.search().is_active());
    /// ```
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let next = SearchState::new(query);
        if next == self.search {
            return;
        }

        tracing::trace!(query = %next.query, "search query updated");
        self.search = next;
        self.notify(&StateChange::SearchQuery);
    }

    /// Sets one filter entry addressed by group and string key.
    ///
    /// This is the entry point for checkbox widgets, which carry the group and
    /// key as data. The key is validated first, then the update proceeds as
    /// [`apply_filter`](Self::apply_filter).
    ///
    /// # Parameters
    ///
    /// * `group` - The checkbox cluster
    /// * `key` - Key within `group`, e.g. `"wellbeing"` or `"pdf"`
    /// * `value` - The new "selected" flag
    ///
    /// # Errors
    ///
    /// Returns [`ResourceHubError::InvalidFilterKey`](crate::ResourceHubError::InvalidFilterKey)
    /// if `key` is not one of `group`'s keys. State is not modified and no
    /// observer is notified in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_hub::app::AppState;
    /// use resource_hub::domain::FilterGroup;
    ///
    /// let mut state = AppState::default();
    /// state.set_filter(FilterGroup::KeyFoundationalPrinciples, "wellbeing", false)?;
    /// assert!(!state.filters().key_foundational_principles.wellbeing);
    ///
    /// let before = *state.filters();
    /// assert!(state.set_filter(FilterGroup::Categories, "wellbeing", true).is_err());
    /// assert_eq!(*state.filters(), before);
    /// # Ok::<(), resource_hub::ResourceHubError>(())
    /// ```
    pub fn set_filter(&mut self, group: FilterGroup, key: &str, value: bool) -> Result<()> {
        let key = FilterKey::parse(group, key).map_err(|e| {
            tracing::warn!(error = %e, "rejected filter update");
            e
        })?;
        self.apply_filter(key, value);
        Ok(())
    }

    /// Sets one filter entry addressed by a typed key.
    ///
    /// Replaces the filter record with [`FilterState::with`]; no other entry
    /// can change. Cannot fail, since a [`FilterKey`] is always valid.
    ///
    /// # Notifications
    ///
    /// [`StateChange::Filter`] if the flag actually flipped. Setting a flag to
    /// its current value is a silent no-op, so repeating the call is
    /// idempotent.
    pub fn apply_filter(&mut self, key: FilterKey, value: bool) {
        let next = self.filters.with(key, value);
        if next == self.filters {
            return;
        }

        tracing::debug!(filter = %key, value, "filter updated");
        self.filters = next;
        self.notify(&StateChange::Filter { key, value });
    }

    /// Opens the mobile filter overlay.
    ///
    /// Idempotent: notifies [`StateChange::MobileFilters`] only when the
    /// overlay was closed.
    pub fn open_mobile_filters(&mut self) {
        self.set_mobile_filters_open(true);
    }

    /// Closes the mobile filter overlay. Idempotent, like
    /// [`open_mobile_filters`](Self::open_mobile_filters).
    pub fn close_mobile_filters(&mut self) {
        self.set_mobile_filters_open(false);
    }

    fn set_mobile_filters_open(&mut self, open: bool) {
        if self.is_mobile_filters_open == open {
            return;
        }

        tracing::debug!(open, "mobile filters toggled");
        self.is_mobile_filters_open = open;
        self.notify(&StateChange::MobileFilters { open });
    }

    /// Registers an observer; it sees every later change, not the current state.
    ///
    /// Observers run synchronously inside the mutating call, in subscription
    /// order. Any `FnMut(&StateChange, &StateSnapshot)` closure qualifies.
    ///
    /// # Returns
    ///
    /// An id for [`unsubscribe`](Self::unsubscribe). Ids are never reused
    /// within one `AppState`.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self, change: &StateChange) {
        if self.observers.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for (_, observer) in &mut self.observers {
            observer.on_change(change, &snapshot);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("filters", &self.filters)
            .field("search", &self.search)
            .field("is_mobile_filters_open", &self.is_mobile_filters_open)
            .field("observers", &self.observers.len())
            .finish()
    }
}
