use serde::Serialize;
use shophub_commerce::catalog::Product;
use shophub_commerce::ids::ProductId;

use crate::event::ShopEvent;

/// A product tile in the catalog grid or the wishlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub category: String,
    /// "$199.99".
    pub price: String,
    /// Struck-through price when on sale.
    pub original_price: Option<String>,
    /// "-33%".
    pub discount_badge: Option<String>,
    pub rating: f32,
    /// Filled stars out of five.
    pub full_stars: u8,
    /// "(128)".
    pub reviews: String,
    /// Event for tapping the tile.
    pub on_select: Option<ShopEvent>,
    /// Event for the "Add to Cart" button.
    pub on_add: ShopEvent,
}

impl ProductCardView {
    /// A catalog tile: tapping opens the detail view.
    pub fn catalog(product: &Product) -> Self {
        let mut card = Self::build(product, ShopEvent::add(product.id));
        card.on_select = Some(ShopEvent::select_product(product.id));
        card
    }

    /// A wishlist tile: no detail view, add goes through the wishlist.
    pub fn wishlist(product: &Product) -> Self {
        Self::build(
            product,
            ShopEvent::AddWishlistItemToCart {
                product_id: product.id,
            },
        )
    }

    fn build(product: &Product, on_add: ShopEvent) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            category: product.category.label().to_string(),
            price: product.price.display(),
            original_price: product.original_price.map(|op| op.display()),
            discount_badge: product.effective_discount().map(|d| format!("-{}%", d)),
            rating: product.rating,
            full_stars: product.full_stars(),
            reviews: format!("({})", product.reviews),
            on_select: None,
            on_add,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::catalog::Catalog;

    #[test]
    fn test_catalog_card() {
        let catalog = Catalog::builtin();
        let card = ProductCardView::catalog(catalog.get(ProductId::new(1)).unwrap());
        assert_eq!(card.price, "$199.99");
        assert_eq!(card.original_price.as_deref(), Some("$299.99"));
        assert_eq!(card.discount_badge.as_deref(), Some("-33%"));
        assert_eq!(card.full_stars, 4);
        assert_eq!(card.reviews, "(128)");
        assert_eq!(card.on_select, Some(ShopEvent::select_product(ProductId::new(1))));
    }

    #[test]
    fn test_full_price_card_has_no_badge() {
        let catalog = Catalog::builtin();
        let card = ProductCardView::wishlist(catalog.get(ProductId::new(3)).unwrap());
        assert!(card.original_price.is_none());
        assert!(card.discount_badge.is_none());
        assert!(card.on_select.is_none());
    }
}
