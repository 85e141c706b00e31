//! Session state and view models for the ShopHub storefront.
//!
//! A front end owns one [`ShopState`], feeds user actions to it as
//! [`ShopEvent`]s and draws whatever [`ShopState::render`] returns:
//!
//! - **State**: Filter, cart, overlays and the current [`View`]
//! - **Navigation**: Catalog, product detail and the account [`Section`]s
//! - **Views**: Serializable screens that carry the events their controls emit
//! - **Config**: Store name, currency, shipping fee, catalog file and logging
//!
//! # Example
//!
//! ```rust
//! use shophub_core::prelude::*;
//! use shophub_commerce::ids::ProductId;
//!
//! let mut state = ShopState::default();
//!
//! let note = state.dispatch(ShopEvent::add(ProductId::new(1))).unwrap();
//! assert_eq!(note.kind, NotificationKind::Success);
//!
//! state.dispatch(ShopEvent::navigate(Section::Orders));
//! match state.render() {
//!     Screen::Section(view) => assert_eq!(view.title, "My Orders"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod navigation;
pub mod notify;
pub mod render;
pub mod state;
pub mod views;

pub use config::ShopConfig;
pub use error::{ShopError, ShopResult};
pub use event::ShopEvent;
pub use navigation::{Section, View};
pub use notify::{Notification, NotificationKind};
pub use render::{render, Screen};
pub use state::ShopState;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{LoggingConfig, ShopConfig, SinkKind, StoreConfig};
    pub use crate::error::{ShopError, ShopResult};
    pub use crate::event::ShopEvent;
    pub use crate::navigation::{Section, View};
    pub use crate::notify::{Notification, NotificationKind};
    pub use crate::render::{render, CatalogScreen, Screen};
    pub use crate::state::ShopState;
    pub use crate::views::{Block, CartSheetView, MenuView, ProductCardView, ProductDetailView, SectionView};
}
