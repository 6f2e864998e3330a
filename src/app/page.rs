//! The resource page: application root.
//!
//! [`ResourcePage`] ties the static resource list, the [`AppState`] and the
//! compact-layout signal from the viewport detector together. It is the object
//! the presentation layer holds on to: events go in through
//! [`handle`](ResourcePage::handle), derived data comes out through
//! [`visible_resources`](ResourcePage::visible_resources) and
//! [`compute_viewmodel`](ResourcePage::compute_viewmodel).

use super::handler::{handle_event, Event};
use super::header::{HeaderState, ACTIVE_NAV_ITEM, NAV_ITEMS};
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::{FilterGroup, Resource};
use crate::engine::filter_resources;
use crate::ui::helpers::match_ranges;
use crate::ui::viewmodel::{
    EmptyState, FilterOptionView, FilterPanel, FilterSectionView, HeaderInfo, NavDrawerView,
    NavItemView, PageViewModel, ResourceCardView, SearchBarInfo, TopBarView,
};

const PAGE_TITLE: &str = "Resources";
const PAGE_DESCRIPTION: &str = "Consectetur adipiscing elit duis tristique sollicitudin nibh sit amet commodo nulla facilisi nullam vehicula ipsum a arcu cursus vitae congue";
const SEARCH_PLACEHOLDER: &str = "Search by title or keyword";
const FILTERS_TITLE: &str = "Filters";
const EMPTY_MESSAGE: &str = "No resources found matching your criteria.";
const EMPTY_SUBTITLE: &str = "Try adjusting your filters or search terms.";
const MODE_TOGGLE_LABEL: &str = "Switch to Employee";
const NAV_DRAWER_TITLE: &str = "Menu";

/// Application root for one page session.
#[derive(Debug)]
pub struct ResourcePage {
    resources: Vec<Resource>,
    state: AppState,
    header: HeaderState,
    compact_layout: bool,
}

impl ResourcePage {
    /// Creates a page in wide layout.
    #[must_use]
    pub const fn new(resources: Vec<Resource>, state: AppState) -> Self {
        Self {
            resources,
            state,
            header: HeaderState::new(),
            compact_layout: false,
        }
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access, e.g. for subscribing observers.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Top bar flags (mode switch, navigation drawer).
    #[must_use]
    pub const fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Mutable top bar flags, for the mode switch and the menu buttons.
    pub fn header_mut(&mut self) -> &mut HeaderState {
        &mut self.header
    }

    #[must_use]
    pub const fn is_compact_layout(&self) -> bool {
        self.compact_layout
    }

    /// Records the viewport detector's verdict.
    ///
    /// Only affects which filter and navigation surfaces the view model
    /// exposes; the overlay and drawer open flags are left as they are.
    pub fn set_compact_layout(&mut self, compact: bool) {
        if self.compact_layout != compact {
            tracing::debug!(compact, "layout changed");
            self.compact_layout = compact;
        }
    }

    /// Dispatches an input event. See [`handle_event`].
    ///
    /// # Errors
    ///
    /// Propagates `InvalidFilterKey` from filter toggles.
    pub fn handle(&mut self, event: &Event) -> Result<bool> {
        handle_event(&mut self.state, event)
    }

    /// Resources passing the current filters and search, in catalog order.
    #[must_use]
    pub fn visible_resources(&self) -> Vec<&Resource> {
        filter_resources(&self.resources, self.state.filters(), self.state.search())
    }

    /// Computes the display-ready page model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            compact = self.compact_layout,
            overlay_open = self.state.is_mobile_filters_open()
        )
        .entered();

        let query = &self.state.search().query;
        let cards: Vec<ResourceCardView> = self
            .visible_resources()
            .into_iter()
            .map(|resource| Self::compute_card(resource, query))
            .collect();

        let empty_state = cards.is_empty().then(|| EmptyState {
            message: EMPTY_MESSAGE.to_string(),
            subtitle: EMPTY_SUBTITLE.to_string(),
        });

        let (filter_sidebar, mobile_overlay) = if self.compact_layout {
            (None, self.state.is_mobile_filters_open().then(|| self.compute_filter_panel()))
        } else {
            (Some(self.compute_filter_panel()), None)
        };

        PageViewModel {
            top_bar: self.compute_top_bar(),
            header: HeaderInfo {
                title: PAGE_TITLE.to_string(),
                description: PAGE_DESCRIPTION.to_string(),
            },
            search_bar: SearchBarInfo {
                query: query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
            },
            filter_sidebar,
            show_filters_button: self.compact_layout,
            mobile_overlay,
            cards,
            empty_state,
        }
    }

    fn compute_top_bar(&self) -> TopBarView {
        let nav_items = || -> Vec<NavItemView> {
            NAV_ITEMS
                .iter()
                .map(|label| NavItemView {
                    label: (*label).to_string(),
                    active: *label == ACTIVE_NAV_ITEM,
                })
                .collect()
        };

        let compact = self.compact_layout;
        TopBarView {
            nav_items: if compact { Vec::new() } else { nav_items() },
            is_employee_mode: self.header.is_employee_mode(),
            mode_toggle_label: (!compact).then(|| MODE_TOGGLE_LABEL.to_string()),
            show_menu_button: compact,
            nav_drawer: (compact && self.header.is_nav_menu_open()).then(|| NavDrawerView {
                title: NAV_DRAWER_TITLE.to_string(),
                items: nav_items(),
            }),
        }
    }

    fn compute_card(resource: &Resource, query: &str) -> ResourceCardView {
        ResourceCardView {
            id: resource.id.clone(),
            title: resource.title.clone(),
            topic: resource.topic.clone(),
            category: resource.category.clone(),
            resource_type: resource.resource_type,
            type_label: resource.resource_type.label().to_string(),
            color: resource.color.hex().to_string(),
            title_highlights: match_ranges(&resource.title, query),
        }
    }

    fn compute_filter_panel(&self) -> FilterPanel {
        let filters = self.state.filters();

        let sections = FilterGroup::ALL
            .into_iter()
            .map(|group| FilterSectionView {
                group,
                title: group.title().to_string(),
                options: group
                    .keys()
                    .into_iter()
                    .map(|key| FilterOptionView {
                        key: key.as_str().to_string(),
                        label: key.label().to_string(),
                        checked: filters.get(key),
                        filter_key: key,
                    })
                    .collect(),
            })
            .collect();

        FilterPanel {
            title: FILTERS_TITLE.to_string(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinCatalog, ResourceSource};

    fn sample_page() -> ResourcePage {
        let resources = BuiltinCatalog.load().unwrap();
        ResourcePage::new(resources, AppState::default())
    }

    #[test]
    fn wide_layout_shows_sidebar_only() {
        let mut page = sample_page();
        page.handle(&Event::ShowMobileFilters).unwrap();

        let vm = page.compute_viewmodel();
        assert!(vm.filter_sidebar.is_some());
        assert!(vm.mobile_overlay.is_none());
        assert!(!vm.show_filters_button);
    }

    #[test]
    fn compact_layout_shows_overlay_only_when_open() {
        let mut page = sample_page();
        page.set_compact_layout(true);

        let closed = page.compute_viewmodel();
        assert!(closed.filter_sidebar.is_none());
        assert!(closed.show_filters_button);
        assert!(closed.mobile_overlay.is_none());

        page.handle(&Event::ShowMobileFilters).unwrap();
        let open = page.compute_viewmodel();
        assert!(open.mobile_overlay.is_some());
    }

    #[test]
    fn widening_keeps_overlay_flag() {
        let mut page = sample_page();
        page.set_compact_layout(true);
        page.handle(&Event::ShowMobileFilters).unwrap();
        page.set_compact_layout(false);

        assert!(page.state().is_mobile_filters_open());
        assert!(page.compute_viewmodel().mobile_overlay.is_none());
    }

    #[test]
    fn wide_top_bar_shows_inline_navigation() {
        let page = sample_page();
        let top_bar = page.compute_viewmodel().top_bar;

        let labels: Vec<&str> = top_bar.nav_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Dashboard", "Resources", "Toolkit"]);
        assert!(top_bar.nav_items[1].active);
        assert!(!top_bar.nav_items[0].active);
        assert_eq!(top_bar.mode_toggle_label.as_deref(), Some("Switch to Employee"));
        assert!(top_bar.is_employee_mode);
        assert!(!top_bar.show_menu_button);
        assert!(top_bar.nav_drawer.is_none());
    }

    #[test]
    fn compact_top_bar_uses_drawer() {
        let mut page = sample_page();
        page.set_compact_layout(true);

        let closed = page.compute_viewmodel().top_bar;
        assert!(closed.nav_items.is_empty());
        assert!(closed.mode_toggle_label.is_none());
        assert!(closed.show_menu_button);
        assert!(closed.nav_drawer.is_none());

        assert!(page.header_mut().open_nav_menu());
        let drawer = page.compute_viewmodel().top_bar.nav_drawer.unwrap();
        assert_eq!(drawer.title, "Menu");
        assert_eq!(drawer.items.len(), 3);

        page.set_compact_layout(false);
        assert!(page.header().is_nav_menu_open());
        assert!(page.compute_viewmodel().top_bar.nav_drawer.is_none());
    }

    #[test]
    fn mode_switch_leaves_filter_state_alone() {
        let mut page = sample_page();
        let before = page.state().snapshot();

        assert!(!page.header_mut().toggle_employee_mode());
        assert!(!page.compute_viewmodel().top_bar.is_employee_mode);
        assert_eq!(page.state().snapshot(), before);
    }

    #[test]
    fn panel_reflects_filter_state() {
        let page = sample_page();
        let vm = page.compute_viewmodel();
        let panel = vm.filter_sidebar.unwrap();

        assert_eq!(panel.title, "Filters");
        assert_eq!(panel.sections.len(), 3);
        let principles = &panel.sections[0];
        assert_eq!(principles.title, "Key Foundational Principles");
        assert_eq!(principles.options[0].label, "Secure Base");
        assert!(principles.options[0].checked);
        assert!(!principles.options[1].checked);
        let labels: Vec<&str> = panel.sections[1].options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["DOC", "Link", "PDF", "Video"]);
    }

    #[test]
    fn empty_state_appears_without_cards() {
        let mut page = sample_page();
        page.handle(&Event::SearchInput("no such resource".into())).unwrap();

        let vm = page.compute_viewmodel();
        assert!(vm.cards.is_empty());
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No resources found matching your criteria.");
    }

    #[test]
    fn cards_carry_highlights_and_swatch() {
        let mut page = sample_page();
        page.handle(&Event::SearchInput("mental".into())).unwrap();

        let vm = page.compute_viewmodel();
        assert_eq!(vm.cards.len(), 1);
        let card = &vm.cards[0];
        assert_eq!(card.id, "6");
        assert_eq!(card.color, "#56CCF2");
        assert_eq!(card.type_label, "PDF");
        assert_eq!(card.title_highlights, vec![(16, 22)]);
        assert!(vm.empty_state.is_none());
    }
}
