//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur while building or loading commerce data.
///
/// Cart and filter operations never fail; these errors only come out of
/// catalog construction and name parsing at startup.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Unknown category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Product price is negative.
    #[error("Invalid price for {product_id}: {cents} cents")]
    InvalidPrice { product_id: ProductId, cents: i64 },

    /// A decimal price in a catalog file is not a finite, non-negative
    /// amount within range.
    #[error("Price {amount} out of range for {product_id}")]
    PriceOutOfRange { product_id: ProductId, amount: f64 },

    /// Original price is below the selling price.
    #[error("Original price {original} is below price {price} for {product_id}")]
    InvalidOriginalPrice {
        product_id: ProductId,
        price: String,
        original: String,
    },

    /// Rating outside 0..=5.
    #[error("Rating {rating} out of range for {product_id}")]
    InvalidRating { product_id: ProductId, rating: f32 },

    /// Discount percentage above 100.
    #[error("Discount {discount}% out of range for {product_id}")]
    InvalidDiscount { product_id: ProductId, discount: u8 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
