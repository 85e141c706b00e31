//! Search module.
//!
//! Contains the filter state and the stable catalog filter.

mod filter;

pub use filter::{filter_products, FilterState};
