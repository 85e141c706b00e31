//! Product catalog module.
//!
//! Contains types for products, categories, and the catalog itself.

mod catalog;
mod category;
mod product;
pub(crate) mod seed;

pub use catalog::{Catalog, ProductRecord};
pub use category::{Category, CategorySelection};
pub use product::{Product, MAX_RATING};
