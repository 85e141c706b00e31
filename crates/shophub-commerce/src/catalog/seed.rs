//! Built-in product data.

use crate::catalog::{Category, ProductRecord};

const UNSPLASH: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{UNSPLASH}/{photo}?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&w=400")
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &str,
    price: f64,
    original_price: Option<f64>,
    photo: &str,
    rating: f32,
    reviews: u32,
    category: Category,
    discount: Option<u8>,
) -> ProductRecord {
    ProductRecord {
        id,
        name: name.to_string(),
        price,
        original_price,
        image: image(photo),
        rating,
        reviews,
        category,
        discount,
    }
}

/// The storefront's eight products.
pub(crate) fn catalog_records() -> Vec<ProductRecord> {
    vec![
        record(1, "Premium Wireless Headphones", 199.99, Some(299.99),
            "photo-1713618651165-a3cf7f85506c", 4.5, 128, Category::Audio, Some(33)),
        record(2, "True Wireless Earbuds Pro", 149.99, Some(199.99),
            "photo-1572569511254-d8f925fe2cbb", 4.8, 256, Category::Audio, Some(25)),
        record(3, "Smart Watch Series 8", 399.99, None,
            "photo-1579586337278-3befd40fd17a", 4.6, 342, Category::Wearables, None),
        record(4, "Premium Phone Case Collection", 29.99, Some(49.99),
            "photo-1535157412991-2ef801c1748b", 4.3, 89, Category::Accessories, Some(40)),
        record(5, "Ultra-Slim Laptop Pro", 1299.99, Some(1499.99),
            "photo-1554125970-e3f2399e937f", 4.9, 512, Category::Computers, Some(13)),
        record(6, "Professional Camera Kit", 899.99, None,
            "photo-1753351055855-b898a3aadb45", 4.7, 178, Category::Photography, None),
        record(7, "Portable Bluetooth Speaker", 79.99, Some(129.99),
            "photo-1589256469067-ea99122bbdc4", 4.4, 234, Category::Audio, Some(38)),
        record(8, "Premium Tablet 12.9\"", 799.99, None,
            "photo-1714071803623-9594e3b77862", 4.8, 445, Category::Computers, None),
    ]
}

/// Wishlist entries: the catalog plus four products sold elsewhere.
pub(crate) fn wishlist_records() -> Vec<ProductRecord> {
    let mut records = catalog_records();
    records.extend([
        ProductRecord {
            id: 9,
            name: "Gaming Mouse Pro".to_string(),
            price: 89.99,
            original_price: None,
            image: format!("{UNSPLASH}/photo-1527814050087-3793815479db?w=400&fit=crop"),
            rating: 4.6,
            reviews: 321,
            category: Category::Accessories,
            discount: None,
        },
        ProductRecord {
            id: 10,
            name: "Mechanical Keyboard RGB".to_string(),
            price: 159.99,
            original_price: Some(199.99),
            image: format!("{UNSPLASH}/photo-1595225476474-87563907a212?w=400&fit=crop"),
            rating: 4.7,
            reviews: 289,
            category: Category::Accessories,
            discount: Some(20),
        },
        ProductRecord {
            id: 11,
            name: "4K Webcam".to_string(),
            price: 129.99,
            original_price: None,
            image: format!("{UNSPLASH}/photo-1625314897518-bb4fe6e95229?w=400&fit=crop"),
            rating: 4.5,
            reviews: 156,
            category: Category::Photography,
            discount: None,
        },
        ProductRecord {
            id: 12,
            name: "USB-C Hub Pro".to_string(),
            price: 69.99,
            original_price: Some(99.99),
            image: format!("{UNSPLASH}/photo-1625948515291-69613efd103f?w=400&fit=crop"),
            rating: 4.4,
            reviews: 203,
            category: Category::Accessories,
            discount: Some(30),
        },
    ]);
    records
}
