//! The product catalog and its file formats.

use crate::catalog::{seed, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A product as written in a catalog file, with decimal prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl ProductRecord {
    /// Convert to a product priced in `currency`.
    ///
    /// Fails if either price is not a finite amount in
    /// `0..=MAX_DECIMAL_AMOUNT`.
    pub fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        let id = ProductId::new(self.id);
        let convert = |amount: f64| {
            Money::try_from_decimal(amount, currency).ok_or(CommerceError::PriceOutOfRange {
                product_id: id,
                amount,
            })
        };
        let price = convert(self.price)?;
        let original_price = self.original_price.map(convert).transpose()?;

        Ok(Product {
            id,
            name: self.name,
            price,
            original_price,
            image: self.image,
            rating: self.rating,
            reviews: self.reviews,
            category: self.category,
            discount: self.discount,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

/// The fixed, read-only collection of purchasable products.
///
/// Order is significant: it is the order the product grid shows and the
/// order filtering preserves.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// Fails on duplicate ids, invalid product data, or products priced in
    /// a currency other than `currency`.
    pub fn new(products: Vec<Product>, currency: Currency) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
            product.validate()?;
        }
        Ok(Self { products, currency })
    }

    /// Build a catalog from file records.
    pub fn from_records(
        records: Vec<ProductRecord>,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let products = records
            .into_iter()
            .map(|r| r.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products, currency)
    }

    /// The built-in eight-product catalog, priced in US dollars.
    pub fn builtin() -> Self {
        Self::builtin_in(Currency::USD)
    }

    /// The built-in catalog with its decimal prices read in `currency`.
    pub fn builtin_in(currency: Currency) -> Self {
        // Seed prices are all in range.
        let products = seed::catalog_records()
            .into_iter()
            .filter_map(|r| r.into_product(currency).ok())
            .collect();
        Self { products, currency }
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::from_records(records, currency)
    }

    /// Parse a TOML document with a `[[products]]` table array.
    pub fn from_toml_str(content: &str, currency: Currency) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_records(file.products, currency)
    }

    /// Load a catalog file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>, currency: Currency) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CommerceError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&content, currency)
        } else {
            Self::from_toml_str(&content, currency)
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products in a category.
    pub fn count_in(&self, category: Category) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
