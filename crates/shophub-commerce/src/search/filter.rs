//! Category and text filtering over the catalog.

use crate::catalog::{CategorySelection, Product};
use serde::{Deserialize, Serialize};

/// What the shopper has narrowed the product grid to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected category chip.
    pub category: CategorySelection,
    /// Text typed into the search box.
    pub query: String,
}

impl FilterState {
    /// Create a filter state.
    pub fn new(category: CategorySelection, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Check whether any restriction is active.
    pub fn is_active(&self) -> bool {
        self.category != CategorySelection::All || !self.query.is_empty()
    }

    /// Check whether a single product passes both predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category) && name_contains(&product.name, &self.query)
    }

    /// Apply this filter to a product list.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, self.category, &self.query)
    }
}

/// Filter `products` by category and case-insensitive name substring.
///
/// The result keeps the input order. An empty query matches every name.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: CategorySelection,
    query: &str,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p.category))
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

fn name_contains(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}
