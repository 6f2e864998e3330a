//! Application layer coordinating state, events and derived views.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Event → handle_event → AppState mutation → observers notified
//!                                            ↓
//!                        ResourcePage::compute_viewmodel → renderer
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Input events and their dispatch
//! - [`header`]: Top bar flags (mode switch, navigation drawer)
//! - [`observer`]: Change notification types
//! - [`page`]: The application root owning resources, state and layout flag
//! - [`state`]: The filter/search state container
//!
//! # Example
//!
//! ```rust
//! use resource_hub::app::{AppState, Event, ResourcePage};
//! use resource_hub::catalog::{BuiltinCatalog, ResourceSource};
//!
//! let mut page = ResourcePage::new(BuiltinCatalog.load()?, AppState::default());
//! page.handle(&Event::SearchInput("mental".into()))?;
//! assert_eq!(page.visible_resources().len(), 1);
//! # Ok::<(), resource_hub::ResourceHubError>(())
//! ```

pub mod handler;
pub mod header;
pub mod observer;
pub mod page;
pub mod state;

pub use handler::{handle_event, Event};
pub use header::HeaderState;
pub use observer::{StateChange, StateObserver, StateSnapshot, SubscriptionId};
pub use page::ResourcePage;
pub use state::AppState;
