//! View model types representing renderable page state.
//!
//! View models are immutable, display-ready snapshots computed by
//! `ResourcePage::compute_viewmodel()`. They carry no business logic: whatever
//! renders them (DOM, terminal, test harness) only maps fields to markup.
//!
//! # Layout Rules
//!
//! - Wide layout: the filter sidebar is present, no show-filters button, no
//!   overlay.
//! - Compact layout: the sidebar is absent, the show-filters button is
//!   present, and the overlay is present only while it is open.
//! - The empty state is present exactly when there are no cards.
//! - The top bar follows the same split: inline navigation when wide, a menu
//!   button and (while open) a drawer when compact.

use crate::domain::{FilterGroup, FilterKey, ResourceType};
use serde::Serialize;

/// Complete page view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewModel {
    pub top_bar: TopBarView,
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,

    /// Desktop filter sidebar (wide layout only).
    pub filter_sidebar: Option<FilterPanel>,

    /// Whether to show the "Show Filters" button (compact layout only).
    pub show_filters_button: bool,

    /// Mobile filter overlay (compact layout, while open).
    pub mobile_overlay: Option<FilterPanel>,

    /// One card per visible resource, in catalog order.
    pub cards: Vec<ResourceCardView>,

    pub empty_state: Option<EmptyState>,
}

/// Navigation bar above the banner.
///
/// Wide layout: inline nav items and a labelled mode switch. Compact layout:
/// no inline items, a bare switch, the menu button, and the drawer while open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopBarView {
    /// Inline navigation (wide layout only; empty otherwise).
    pub nav_items: Vec<NavItemView>,
    pub is_employee_mode: bool,
    /// Text next to the switch (wide layout only).
    pub mode_toggle_label: Option<String>,
    pub show_menu_button: bool,
    /// Navigation drawer (compact layout, while open).
    pub nav_drawer: Option<NavDrawerView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItemView {
    pub label: String,
    /// The entry for the current page.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavDrawerView {
    pub title: String,
    pub items: Vec<NavItemView>,
}

/// Page banner text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    pub title: String,
    pub description: String,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}

/// A filter panel: the sidebar or the overlay. Both list the same sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPanel {
    pub title: String,
    pub sections: Vec<FilterSectionView>,
}

/// One checkbox cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSectionView {
    pub group: FilterGroup,
    pub title: String,
    pub options: Vec<FilterOptionView>,
}

/// One checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionView {
    /// Key to send back in `Event::ToggleFilter`.
    pub key: String,
    pub label: String,
    pub checked: bool,
    #[serde(skip)]
    pub filter_key: FilterKey,
}

/// Display information for one resource card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCardView {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub category: Option<String>,
    pub resource_type: ResourceType,
    pub type_label: String,
    pub color: String,

    /// Character ranges of the title matching the search query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub title_highlights: Vec<(usize, usize)>,
}

/// Shown in place of the grid when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
