//! Navigation state machine.
//!
//! Exactly one view is active at a time. The catalog is the hub: product
//! details and account sections are entered from it and return to it, and
//! there is no direct path between a product detail and a section.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shophub_commerce::catalog::Product;

use crate::error::{ShopError, ShopResult};

/// Account and support sections reachable from the app menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Profile,
    Orders,
    Wishlist,
    Addresses,
    Payment,
    Notifications,
    Settings,
    Help,
    About,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Profile,
        Section::Orders,
        Section::Wishlist,
        Section::Addresses,
        Section::Payment,
        Section::Notifications,
        Section::Settings,
        Section::Help,
        Section::About,
    ];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Orders => "orders",
            Section::Wishlist => "wishlist",
            Section::Addresses => "addresses",
            Section::Payment => "payment",
            Section::Notifications => "notifications",
            Section::Settings => "settings",
            Section::Help => "help",
            Section::About => "about",
        }
    }

    /// Label of the menu entry.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Section::Profile => "My Profile",
            Section::Orders => "My Orders",
            Section::Wishlist => "Wishlist",
            Section::Addresses => "Addresses",
            Section::Payment => "Payment Methods",
            Section::Notifications => "Notifications",
            Section::Settings => "Settings",
            Section::Help => "Help Center",
            Section::About => "About",
        }
    }

    /// Heading of the section screen.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Profile => "My Profile",
            Section::Orders => "My Orders",
            Section::Wishlist => "My Wishlist",
            Section::Addresses => "My Addresses",
            Section::Payment => "Payment Methods",
            Section::Notifications => "Notifications",
            Section::Settings => "Settings",
            Section::Help => "Help Center",
            Section::About => "About ShopHub",
        }
    }
}

impl FromStr for Section {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ShopError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum View {
    /// Product grid. The initial view.
    #[default]
    Catalog,
    /// A single product with the quantity picked for adding to the cart.
    ProductDetail { product: Product, quantity: u32 },
    /// An account or support section.
    Section(Section),
}

impl View {
    /// Short name used in logs and transition errors.
    pub fn name(&self) -> String {
        match self {
            View::Catalog => "catalog".to_string(),
            View::ProductDetail { product, .. } => format!("product:{}", product.id),
            View::Section(section) => format!("section:{}", section),
        }
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self, View::Catalog)
    }

    /// Section being shown, if any.
    pub fn section(&self) -> Option<Section> {
        match self {
            View::Section(section) => Some(*section),
            _ => None,
        }
    }

    /// Product being shown, if any.
    pub fn product(&self) -> Option<&Product> {
        match self {
            View::ProductDetail { product, .. } => Some(product),
            _ => None,
        }
    }

    fn invalid(&self, to: impl Into<String>) -> ShopError {
        ShopError::InvalidTransition {
            from: self.name(),
            to: to.into(),
        }
    }

    /// Catalog -> ProductDetail. The picker starts at 1.
    pub fn open_product(&mut self, product: Product) -> ShopResult<()> {
        match self {
            View::Catalog => {
                *self = View::ProductDetail {
                    product,
                    quantity: 1,
                };
                Ok(())
            }
            _ => Err(self.invalid(format!("product:{}", product.id))),
        }
    }

    /// Catalog -> Section.
    pub fn open_section(&mut self, section: Section) -> ShopResult<()> {
        match self {
            View::Catalog => {
                *self = View::Section(section);
                Ok(())
            }
            _ => Err(self.invalid(format!("section:{}", section))),
        }
    }

    /// ProductDetail -> Catalog. Returns the product that was open.
    pub fn close_product(&mut self) -> ShopResult<Product> {
        match std::mem::take(self) {
            View::ProductDetail { product, .. } => Ok(product),
            other => {
                *self = other;
                Err(self.invalid("catalog"))
            }
        }
    }

    /// Section -> Catalog.
    pub fn back(&mut self) -> ShopResult<Section> {
        match self {
            View::Section(section) => {
                let section = *section;
                *self = View::Catalog;
                Ok(section)
            }
            _ => Err(self.invalid("catalog")),
        }
    }

    /// Current picker quantity, if a product is open.
    pub fn detail_quantity(&self) -> Option<u32> {
        match self {
            View::ProductDetail { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    /// Raise the picker quantity by one.
    pub fn increment_quantity(&mut self) -> ShopResult<u32> {
        match self {
            View::ProductDetail { quantity, .. } => {
                *quantity = quantity.saturating_add(1);
                Ok(*quantity)
            }
            _ => Err(self.invalid("quantity+1")),
        }
    }

    /// Lower the picker quantity by one, never below 1.
    pub fn decrement_quantity(&mut self) -> ShopResult<u32> {
        match self {
            View::ProductDetail { quantity, .. } => {
                *quantity = quantity.saturating_sub(1).max(1);
                Ok(*quantity)
            }
            _ => Err(self.invalid("quantity-1")),
        }
    }
}
