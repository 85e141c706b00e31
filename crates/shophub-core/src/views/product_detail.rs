use serde::Serialize;
use shophub_commerce::catalog::Product;

use crate::event::ShopEvent;

const DESCRIPTION: &str = "Experience premium quality with this exceptional product. \
Designed with attention to detail and crafted from the finest materials, it delivers \
outstanding performance and reliability. Perfect for everyday use, this product combines \
style, functionality, and durability to exceed your expectations.";

const FEATURES: [&str; 3] = [
    "Premium quality materials",
    "Advanced technology integration",
    "Ergonomic and stylish design",
];

/// Full-screen product page with the quantity picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailView {
    pub name: String,
    pub image: String,
    pub category: String,
    pub price: String,
    pub original_price: Option<String>,
    /// "-33% OFF".
    pub discount_badge: Option<String>,
    pub rating: f32,
    pub full_stars: u8,
    /// "(128 reviews)".
    pub reviews: String,
    pub description: String,
    pub features: Vec<String>,
    pub quantity: u32,
    /// False at quantity 1.
    pub can_decrement: bool,
    /// "Add to Cart - $399.98".
    pub add_label: String,
}

impl ProductDetailView {
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            category: product.category.label().to_string(),
            price: product.price.display(),
            original_price: product.original_price.map(|op| op.display()),
            discount_badge: product
                .effective_discount()
                .map(|d| format!("-{}% OFF", d)),
            rating: product.rating,
            full_stars: product.full_stars(),
            reviews: format!("({} reviews)", product.reviews),
            description: DESCRIPTION.to_string(),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
            quantity,
            can_decrement: quantity > 1,
            add_label: format!("Add to Cart - {}", product.price_for(quantity).display()),
        }
    }

    pub fn on_close(&self) -> ShopEvent {
        ShopEvent::CloseProductDetail
    }

    pub fn on_increment(&self) -> ShopEvent {
        ShopEvent::IncrementDetailQuantity
    }

    pub fn on_decrement(&self) -> ShopEvent {
        ShopEvent::DecrementDetailQuantity
    }

    pub fn on_add(&self) -> ShopEvent {
        ShopEvent::AddDetailToCart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::catalog::Catalog;
    use shophub_commerce::ids::ProductId;

    #[test]
    fn test_button_label_tracks_quantity() {
        let catalog = Catalog::builtin();
        let watch = catalog.get(ProductId::new(3)).unwrap();

        let one = ProductDetailView::new(watch, 1);
        assert_eq!(one.add_label, "Add to Cart - $399.99");
        assert!(!one.can_decrement);

        let two = ProductDetailView::new(watch, 2);
        assert_eq!(two.add_label, "Add to Cart - $799.98");
        assert!(two.can_decrement);
        assert_eq!(two.reviews, "(342 reviews)");
    }
}
