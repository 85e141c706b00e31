//! Serializable view models.
//!
//! Every view carries the [`ShopEvent`](crate::event::ShopEvent)s its
//! controls emit, so a front end renders them and feeds the events back to
//! [`ShopState::dispatch`](crate::state::ShopState::dispatch) without knowing
//! any shop rules.

mod cart_sheet;
mod menu;
mod product_card;
mod product_detail;
pub mod sections;

pub use cart_sheet::{CartEmptyView, CartLineView, CartSheetView};
pub use menu::{MenuEntryView, MenuGroupView, MenuView};
pub use product_card::ProductCardView;
pub use product_detail::ProductDetailView;
pub use sections::{section_view, ActionView, Block, CardView, Field, SectionView, TabView};
