//! Cart and cart line types.

use crate::cart::{CartTotals, ShippingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartChange {
    /// A new line was appended.
    Added { product_id: ProductId, quantity: u32 },
    /// An existing line's quantity grew to `quantity`.
    Incremented { product_id: ProductId, quantity: u32 },
    /// A line's quantity was set to `quantity`.
    Updated { product_id: ProductId, quantity: u32 },
    /// A line was removed.
    Removed { product_id: ProductId },
    /// Nothing changed.
    Unchanged,
}

impl CartChange {
    /// Check if the cart was modified.
    pub fn is_change(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

/// A shopping cart.
///
/// Lines keep first-added order and there is at most one line per product.
/// Totals are never stored; every read recomputes them from the lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    shipping: ShippingPolicy,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(shipping: ShippingPolicy) -> Self {
        Self {
            lines: Vec::new(),
            shipping,
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// If the product already has a line, its quantity grows by `quantity`;
    /// otherwise a line is appended. Adding zero units changes nothing.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> CartChange {
        if quantity == 0 {
            return CartChange::Unchanged;
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            tracing::debug!(
                product_id = %product.id,
                quantity = existing.quantity,
                "cart line incremented"
            );
            return CartChange::Incremented {
                product_id: product.id,
                quantity: existing.quantity,
            };
        }

        self.lines.push(CartLine::new(product.clone(), quantity));
        tracing::debug!(product_id = %product.id, quantity, "cart line added");
        CartChange::Added {
            product_id: product.id,
            quantity,
        }
    }

    /// Set a line's quantity.
    ///
    /// Zero removes the line. Unknown products are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> CartChange {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                tracing::debug!(product_id = %product_id, quantity, "cart line updated");
                CartChange::Updated {
                    product_id,
                    quantity,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Remove a product's line, if present.
    pub fn remove_item(&mut self, product_id: ProductId) -> CartChange {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        if self.lines.len() < len_before {
            tracing::debug!(product_id = %product_id, "cart line removed");
            CartChange::Removed { product_id }
        } else {
            CartChange::Unchanged
        }
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Quantity of a product in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map(|l| l.quantity).unwrap_or(0)
    }

    /// The shipping policy this cart prices with.
    pub fn shipping_policy(&self) -> &ShippingPolicy {
        &self.shipping
    }

    /// Currency totals are expressed in.
    pub fn currency(&self) -> Currency {
        self.shipping.flat_fee.currency
    }

    /// Get total item count (sum of quantities, saturating at `u32::MAX`).
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    /// Get number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.lines.iter().map(CartLine::line_total), self.currency())
    }

    /// Shipping for the current subtotal.
    pub fn shipping(&self) -> Money {
        self.shipping.fee_for(&self.subtotal())
    }

    /// Subtotal plus shipping.
    pub fn total(&self) -> Money {
        self.subtotal() + self.shipping()
    }

    /// Compute every derived total at once.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = self.shipping.fee_for(&subtotal);
        CartTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
            item_count: self.item_count(),
            line_count: self.line_count(),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(ShippingPolicy::default())
    }
}

/// One product plus its requested quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product (copied from the catalog).
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a new line.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }

    /// The decrement control is disabled at quantity 1.
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    fn product(id: u32, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::new(cents, Currency::USD),
            Category::Audio,
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        let change = cart.add_item(&product(1, 1000), 2);

        assert_eq!(
            change,
            CartChange::Added {
                product_id: ProductId::new(1),
                quantity: 2
            }
        );
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_same_item_accumulates() {
        let mut cart = Cart::default();
        let a = product(1, 1000);

        cart.add_item(&a, 2);
        let change = cart.add_item(&a, 3);

        assert_eq!(
            change,
            CartChange::Incremented {
                product_id: a.id,
                quantity: 5
            }
        );
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(a.id), 5);
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let mut cart = Cart::default();
        cart.add_item(&product(3, 100), 1);
        cart.add_item(&product(1, 100), 1);
        cart.add_item(&product(3, 100), 4);
        cart.add_item(&product(2, 100), 1);

        let order: Vec<u32> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::default();
        assert_eq!(cart.add_item(&product(1, 1000), 0), CartChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = Cart::default();
        let a = product(1, 1000);
        cart.add_item(&a, 4);

        cart.update_quantity(a.id, 2);
        assert_eq!(cart.quantity_of(a.id), 2);
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let mut base = Cart::default();
        base.add_item(&product(1, 1000), 1);
        base.add_item(&product(2, 500), 2);

        let mut updated = base.clone();
        let mut removed = base.clone();
        updated.update_quantity(ProductId::new(2), 0);
        removed.remove_item(ProductId::new(2));

        assert_eq!(updated, removed);
        assert_eq!(updated.lines().len(), 1);
        assert_eq!(updated.lines()[0].product.id, ProductId::new(1));
        assert_eq!(updated.lines()[0].quantity, 1);
    }

    #[test]
    fn test_unknown_product_is_noop() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 1);
        let before = cart.clone();

        assert_eq!(cart.update_quantity(ProductId::new(9), 3), CartChange::Unchanged);
        assert_eq!(cart.remove_item(ProductId::new(9)), CartChange::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 1);
        cart.add_item(&product(2, 1000), 1);

        cart.remove_item(ProductId::new(1));
        let once = cart.clone();
        assert_eq!(cart.remove_item(ProductId::new(1)), CartChange::Unchanged);
        assert_eq!(cart, once);
    }

    #[test]
    fn test_totals() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::default();
        cart.add_item(catalog.get(ProductId::new(1)).unwrap(), 2); // 2 x 199.99
        cart.add_item(catalog.get(ProductId::new(4)).unwrap(), 1); // 1 x 29.99

        let totals = cart.totals();
        assert_eq!(totals.subtotal.amount_cents, 42997);
        assert_eq!(totals.shipping.amount_cents, 599);
        assert_eq!(totals.total.amount_cents, 43596);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total, cart.total());
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 1);
        cart.remove_item(ProductId::new(1));

        let totals = cart.totals();
        assert!(totals.shipping.is_zero());
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), u32::MAX);
        cart.add_item(&product(2, 500), 1);
        cart.add_item(&product(1, 1000), 5);

        assert_eq!(cart.quantity_of(ProductId::new(1)), u32::MAX);
        let totals = cart.totals();
        assert_eq!(totals.item_count, u32::MAX);
        assert_eq!(totals.line_count, 2);
        assert_eq!(
            totals.subtotal.amount_cents,
            1000 * i64::from(u32::MAX) + 500
        );
    }

    #[test]
    fn test_line_total_saturates_at_max_price() {
        let max = Money::max_for(Currency::USD).amount_cents;
        let mut cart = Cart::default();
        cart.add_item(&product(1, max), u32::MAX);
        cart.add_item(&product(2, max), u32::MAX);

        let totals = cart.totals();
        assert_eq!(totals.subtotal.amount_cents, i64::MAX);
        assert_eq!(totals.total.amount_cents, i64::MAX);
    }

    #[test]
    fn test_can_decrement() {
        let line = CartLine::new(product(1, 100), 1);
        assert!(!line.can_decrement());
        let line = CartLine::new(product(1, 100), 2);
        assert!(line.can_decrement());
    }
}
