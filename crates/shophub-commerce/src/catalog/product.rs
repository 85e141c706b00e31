//! Product type.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// A product in the catalog.
///
/// Products are immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Selling price.
    pub price: Money,
    /// Price before the current discount, shown struck through.
    pub original_price: Option<Money>,
    /// Image URI.
    pub image: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Category this product belongs to.
    pub category: Category,
    /// Advertised discount percentage, 0 to 100.
    pub discount: Option<u8>,
}

impl Product {
    /// Create a product with no rating, image or discount.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            rating: 0.0,
            reviews: 0,
            category,
            discount: None,
        }
    }

    /// Set the original (pre-discount) price.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Set the advertised discount percentage.
    pub fn with_discount(mut self, discount: u8) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Check if the product is on sale (original price above price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount to advertise: the explicit percentage if set, otherwise
    /// the one implied by the original price.
    pub fn effective_discount(&self) -> Option<u8> {
        self.discount
            .or_else(|| self.original_price.and_then(|op| self.price.percent_off(&op)))
    }

    /// Number of filled stars (rating rounded down).
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, MAX_RATING).floor() as u8
    }

    /// Price of `quantity` units.
    pub fn price_for(&self, quantity: u32) -> Money {
        self.price * quantity
    }

    /// Check the data-model invariants for a product.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let max = Money::max_for(self.price.currency).amount_cents;
        if self.price.is_negative() || self.price.amount_cents > max {
            return Err(CommerceError::InvalidPrice {
                product_id: self.id,
                cents: self.price.amount_cents,
            });
        }

        if let Some(original) = self.original_price {
            if original.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: original.currency.code().to_string(),
                });
            }
            if original.amount_cents < self.price.amount_cents {
                return Err(CommerceError::InvalidOriginalPrice {
                    product_id: self.id,
                    price: self.price.display(),
                    original: original.display(),
                });
            }
        }

        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::InvalidRating {
                product_id: self.id,
                rating: self.rating,
            });
        }

        if let Some(discount) = self.discount {
            if discount > 100 {
                return Err(CommerceError::InvalidDiscount {
                    product_id: self.id,
                    discount,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn headphones() -> Product {
        Product::new(
            ProductId::new(1),
            "Premium Wireless Headphones",
            Money::new(19999, Currency::USD),
            Category::Audio,
        )
        .with_original_price(Money::new(29999, Currency::USD))
        .with_rating(4.5, 128)
    }

    #[test]
    fn test_product_on_sale() {
        let product = headphones();
        assert!(product.is_on_sale());
        assert_eq!(product.effective_discount(), Some(33));
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_explicit_discount_wins() {
        let product = headphones().with_discount(30);
        assert_eq!(product.effective_discount(), Some(30));
    }

    #[test]
    fn test_full_stars() {
        assert_eq!(headphones().full_stars(), 4);
        assert_eq!(headphones().with_rating(5.0, 1).full_stars(), 5);
    }

    #[test]
    fn test_price_for_quantity() {
        assert_eq!(headphones().price_for(3).amount_cents, 59997);
    }

    #[test]
    fn test_validate_rejects_bad_data() {
        let cheap_original = headphones().with_original_price(Money::new(100, Currency::USD));
        assert!(matches!(
            cheap_original.validate(),
            Err(CommerceError::InvalidOriginalPrice { .. })
        ));

        let bad_rating = headphones().with_rating(5.5, 3);
        assert!(matches!(
            bad_rating.validate(),
            Err(CommerceError::InvalidRating { .. })
        ));

        let bad_discount = headphones().with_discount(120);
        assert!(matches!(
            bad_discount.validate(),
            Err(CommerceError::InvalidDiscount { .. })
        ));

        let mut negative = headphones();
        negative.price = Money::new(-1, Currency::USD);
        assert!(matches!(
            negative.validate(),
            Err(CommerceError::InvalidPrice { .. })
        ));

        let mut huge = headphones();
        huge.original_price = None;
        huge.price = Money::new(i64::MAX, Currency::USD);
        assert!(matches!(
            huge.validate(),
            Err(CommerceError::InvalidPrice { .. })
        ));
    }
}
