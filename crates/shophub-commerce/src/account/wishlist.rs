//! Saved-for-later products.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products the shopper saved. Items can be moved into the cart but the
/// list itself is not edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    /// Swap every entry whose id the catalog knows for the catalog's product.
    ///
    /// The cart merges lines by id, so within a session an id has to name
    /// a single product. Entries the catalog lacks stay as they are.
    pub fn resolve_against(self, catalog: &Catalog) -> Self {
        let items = self
            .items
            .into_iter()
            .map(|item| catalog.get(item.id).cloned().unwrap_or(item))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// "12 items".
    pub fn count_label(&self) -> String {
        if self.items.len() == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.items.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};

    #[test]
    fn test_lookup() {
        let mouse = Product::new(
            ProductId::new(9),
            "Gaming Mouse Pro",
            Money::new(8999, Currency::USD),
            Category::Accessories,
        );
        let wishlist = Wishlist::new(vec![mouse]);
        assert!(wishlist.contains(ProductId::new(9)));
        assert!(wishlist.get(ProductId::new(1)).is_none());
        assert_eq!(wishlist.count_label(), "1 item");
        assert!(Wishlist::default().is_empty());
    }

    #[test]
    fn test_resolve_against_catalog() {
        let local = |id: u32, name: &str| {
            Product::new(
                ProductId::new(id),
                name,
                Money::new(100, Currency::USD),
                Category::Audio,
            )
        };
        let catalog = Catalog::new(
            vec![Product::new(
                ProductId::new(1),
                "Desk Mic",
                Money::new(1000, Currency::USD),
                Category::Audio,
            )],
            Currency::USD,
        )
        .unwrap();

        let wishlist = Wishlist::new(vec![local(1, "Headphones"), local(9, "Mouse")])
            .resolve_against(&catalog);
        assert_eq!(wishlist.len(), 2);
        assert_eq!(wishlist.items()[0].name, "Desk Mic");
        assert_eq!(wishlist.items()[0].price.amount_cents, 1000);
        assert_eq!(wishlist.items()[1].name, "Mouse");
    }
}
