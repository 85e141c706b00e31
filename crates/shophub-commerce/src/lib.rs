//! Catalog, cart and account domain types for ShopHub.
//!
//! This crate holds everything the storefront knows about products and the
//! shopper's in-memory session:
//!
//! - **Catalog**: Products, categories, the built-in product list
//! - **Search**: Category and text filtering over the catalog
//! - **Cart**: Cart lines and derived totals
//! - **Account**: Static profile, orders, wishlist, addresses, payment
//!   methods and notifications shown by the account sections
//!
//! # Example
//!
//! ```rust
//! use shophub_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let headphones = catalog.get(ProductId::new(1)).unwrap();
//!
//! let mut cart = Cart::new(ShippingPolicy::default());
//! cart.add_item(headphones, 2);
//!
//! let totals = cart.totals();
//! assert_eq!(totals.item_count, 2);
//! assert_eq!(totals.total, totals.subtotal + totals.shipping);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategorySelection, Product};

    // Search
    pub use crate::search::{filter_products, FilterState};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, ShippingPolicy};

    // Account
    pub use crate::account::{
        AccountData, Address, AddressKind, CardBrand, Order, OrderStatus, OrderTab,
        PaymentMethod, Profile, UserNotification, UserNotificationKind, Wishlist,
    };
}
