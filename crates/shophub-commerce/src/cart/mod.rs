//! Shopping cart module.
//!
//! Contains the cart, its lines, and the shipping/totals calculation.

mod cart;
mod pricing;

pub use cart::{Cart, CartChange, CartLine};
pub use pricing::{CartTotals, ShippingPolicy, DEFAULT_SHIPPING_FEE_CENTS};
