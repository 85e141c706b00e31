//! Cart pricing calculations.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat shipping fee charged on any non-empty cart, in cents.
pub const DEFAULT_SHIPPING_FEE_CENTS: i64 = 599;

/// How shipping is charged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Fee charged whenever the subtotal is positive.
    pub flat_fee: Money,
}

impl ShippingPolicy {
    /// Create a flat-fee policy.
    pub fn flat(flat_fee: Money) -> Self {
        Self { flat_fee }
    }

    /// Shipping owed for a subtotal: the flat fee if it is positive, else zero.
    pub fn fee_for(&self, subtotal: &Money) -> Money {
        if subtotal.is_positive() {
            self.flat_fee
        } else {
            Money::zero(self.flat_fee.currency)
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::flat(Money::new(DEFAULT_SHIPPING_FEE_CENTS, Currency::USD))
    }
}

/// Derived totals for a cart at one point in time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping fee.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
    /// Sum of quantities.
    pub item_count: u32,
    /// Number of distinct products.
    pub line_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_only_on_positive_subtotal() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(&Money::new(1, Currency::USD)).amount_cents, 599);
        assert!(policy.fee_for(&Money::zero(Currency::USD)).is_zero());
    }

    #[test]
    fn test_custom_fee() {
        let policy = ShippingPolicy::flat(Money::new(450, Currency::EUR));
        let fee = policy.fee_for(&Money::new(10_000, Currency::EUR));
        assert_eq!(fee, Money::new(450, Currency::EUR));
    }
}
