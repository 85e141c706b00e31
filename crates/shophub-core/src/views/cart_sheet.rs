use serde::Serialize;
use shophub_commerce::cart::{Cart, CartLine};
use shophub_commerce::ids::ProductId;

use crate::event::ShopEvent;

/// The slide-over cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSheetView {
    /// "Shopping Cart (2)".
    pub title: String,
    pub lines: Vec<CartLineView>,
    /// Present when the cart has no lines.
    pub empty: Option<CartEmptyView>,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub checkout_label: String,
}

/// Empty-cart placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartEmptyView {
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub on_action: ShopEvent,
}

/// One row of the cart sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    /// Unit price.
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
    pub can_decrement: bool,
    pub on_increment: ShopEvent,
    /// `None` at quantity 1; the control is disabled rather than removing.
    pub on_decrement: Option<ShopEvent>,
    pub on_remove: ShopEvent,
}

impl CartLineView {
    fn new(line: &CartLine) -> Self {
        let product_id = line.product.id;
        Self {
            product_id,
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            price: line.product.price.display(),
            quantity: line.quantity,
            line_total: line.line_total().display(),
            can_decrement: line.can_decrement(),
            on_increment: ShopEvent::UpdateCartQuantity {
                product_id,
                quantity: line.quantity.saturating_add(1),
            },
            on_decrement: line.can_decrement().then(|| ShopEvent::UpdateCartQuantity {
                product_id,
                quantity: line.quantity - 1,
            }),
            on_remove: ShopEvent::RemoveCartItem { product_id },
        }
    }
}

impl CartSheetView {
    pub fn new(cart: &Cart) -> Self {
        let totals = cart.totals();
        let empty = cart.is_empty().then(|| CartEmptyView {
            title: "Your cart is empty".to_string(),
            message: "Add some products to get started".to_string(),
            action_label: "Continue Shopping".to_string(),
            on_action: ShopEvent::CloseCart,
        });
        Self {
            title: format!("Shopping Cart ({})", totals.line_count),
            lines: cart.lines().iter().map(CartLineView::new).collect(),
            empty,
            subtotal: totals.subtotal.display(),
            shipping: totals.shipping.display(),
            total: totals.total.display(),
            checkout_label: "Proceed to Checkout".to_string(),
        }
    }

    pub fn on_close(&self) -> ShopEvent {
        ShopEvent::CloseCart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::catalog::Catalog;
    use shophub_commerce::cart::ShippingPolicy;

    #[test]
    fn test_empty_sheet() {
        let view = CartSheetView::new(&Cart::new(ShippingPolicy::default()));
        assert_eq!(view.title, "Shopping Cart (0)");
        assert!(view.empty.is_some());
        assert_eq!(view.shipping, "$0.00");
        assert_eq!(view.total, "$0.00");
    }

    #[test]
    fn test_lines_and_totals() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new(ShippingPolicy::default());
        cart.add_item(catalog.get(ProductId::new(1)).unwrap(), 1);
        cart.add_item(catalog.get(ProductId::new(2)).unwrap(), 2);

        let view = CartSheetView::new(&cart);
        assert_eq!(view.title, "Shopping Cart (2)");
        assert!(view.empty.is_none());
        assert_eq!(view.subtotal, "$499.97");
        assert_eq!(view.shipping, "$5.99");
        assert_eq!(view.total, "$505.96");

        let first = &view.lines[0];
        assert!(!first.can_decrement);
        assert!(first.on_decrement.is_none());
        let second = &view.lines[1];
        assert_eq!(second.line_total, "$299.98");
        assert_eq!(
            second.on_decrement,
            Some(ShopEvent::UpdateCartQuantity {
                product_id: ProductId::new(2),
                quantity: 1
            })
        );
    }
}
