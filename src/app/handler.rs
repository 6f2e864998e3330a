//! Event handling for user input.
//!
//! Presentation code translates widget callbacks (keystrokes in the search box,
//! checkbox toggles, the show/close filter buttons) into [`Event`]s and feeds
//! them to [`handle_event`] in dispatch order. Each event maps to exactly one
//! state mutation.
//!
//! # Example
//!
//! ```rust
//! use resource_hub::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let refresh = handle_event(&mut state, &Event::SearchInput("guide".into()))?;
//! assert!(refresh);
//! # Ok::<(), resource_hub::ResourceHubError>(())
//! ```

use crate::app::AppState;
use crate::domain::error::Result;
use crate::domain::FilterGroup;

/// Input events raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search box now contains this text.
    SearchInput(String),

    /// A filter checkbox was toggled.
    ToggleFilter {
        group: FilterGroup,
        /// Key within `group`, as carried by the checkbox.
        key: String,
        value: bool,
    },

    /// The "Show Filters" button was pressed.
    ShowMobileFilters,

    /// The overlay's close button was pressed.
    CloseMobileFilters,
}

/// Applies an event to `state`.
///
/// # Returns
///
/// `true` if the state changed, i.e. the page should be re-derived and
/// re-rendered. Repeating an event returns `false`.
///
/// # Errors
///
/// Returns [`ResourceHubError::InvalidFilterKey`](crate::ResourceHubError::InvalidFilterKey)
/// for a `ToggleFilter` whose key is not in its group. State is unchanged.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let before = state.snapshot();

    match event {
        Event::SearchInput(query) => state.set_search_query(query.as_str()),
        Event::ToggleFilter { group, key, value } => state.set_filter(*group, key, *value)?,
        Event::ShowMobileFilters => state.open_mobile_filters(),
        Event::CloseMobileFilters => state.close_mobile_filters(),
    }

    let changed = state.snapshot() != before;
    if !changed {
        tracing::debug!("state unchanged, skipping render");
    }

    Ok(changed)
}
