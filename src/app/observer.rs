//! State change notification.
//!
//! Consumers that derive views from [`AppState`](super::AppState) register a
//! [`StateObserver`] instead of polling. After every mutation that actually
//! changes state, each observer receives the [`StateChange`] that happened and
//! a fresh [`StateSnapshot`], synchronously and in subscription order.
//!
//! Any `FnMut(&StateChange, &StateSnapshot)` closure is an observer:
//!
//! ```
//! use resource_hub::app::{AppState, StateChange};
//!
//! let mut state = AppState::default();
//! let id = state.subscribe(|change: &StateChange, snapshot: &resource_hub::app::StateSnapshot| {
//!     if change.affects_visible_resources() {
//!         println!("recompute for query {:?}", snapshot.search.query);
//!     }
//! });
//! state.set_search_query("guide");
//! assert!(state.unsubscribe(id));
//! ```

use crate::domain::{FilterKey, FilterState, SearchState};
use serde::Serialize;

/// What a mutation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// The search query was replaced.
    SearchQuery,
    /// A single filter entry was set.
    Filter {
        key: FilterKey,
        value: bool,
    },
    /// The mobile filter overlay was opened or closed.
    MobileFilters {
        open: bool,
    },
}

impl StateChange {
    /// Whether the derived resource list may differ after this change.
    ///
    /// Overlay visibility never affects filtering.
    #[must_use]
    pub const fn affects_visible_resources(&self) -> bool {
        !matches!(self, Self::MobileFilters { .. })
    }
}

/// Read-only copy of all state owned by `AppState`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub filters: FilterState,
    pub search: SearchState,
    pub is_mobile_filters_open: bool,
}

/// Receives state change notifications.
pub trait StateObserver {
    fn on_change(&mut self, change: &StateChange, snapshot: &StateSnapshot);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateChange, &StateSnapshot),
{
    fn on_change(&mut self, change: &StateChange, snapshot: &StateSnapshot) {
        self(change, snapshot);
    }
}

/// Handle returned by `AppState::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
