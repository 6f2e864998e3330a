//! Presentation contract.
//!
//! This module holds the view model handed to whatever renders the page. The
//! crate does not render anything itself; it stops at display-ready data.
//!
//! ```text
//! AppState + resources + compact flag → compute_viewmodel → PageViewModel → renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`helpers`]: Text helpers (search match highlighting)

pub mod helpers;
pub mod viewmodel;

pub use viewmodel::{
    EmptyState, FilterOptionView, FilterPanel, FilterSectionView, HeaderInfo, NavDrawerView,
    NavItemView, PageViewModel, ResourceCardView, SearchBarInfo, TopBarView,
};
