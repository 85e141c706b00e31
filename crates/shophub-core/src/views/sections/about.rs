use super::{Block, CardView, Field};

const FEATURES: [(&str, &str); 6] = [
    ("Wide Selection", "Thousands of products across multiple categories"),
    ("Fast Delivery", "Quick and reliable shipping worldwide"),
    ("Secure Shopping", "Your data is protected with industry-leading security"),
    ("Customer First", "Dedicated support team ready to help"),
    ("Quality Guarantee", "100% authentic products with warranty"),
    ("Trusted by Millions", "Join our growing community of satisfied customers"),
];

const STORY: [&str; 3] = [
    "Founded in 2020, ShopHub started with a simple mission: to make quality products \
     accessible to everyone, everywhere.",
    "What began as a small online store has grown into a global marketplace serving millions \
     of customers across the world. We're proud to offer a curated selection of products from \
     trusted brands and emerging designers.",
    "Our commitment to customer satisfaction, fast delivery, and secure shopping has made us \
     one of the most trusted e-commerce platforms today.",
];

pub(super) fn blocks(store_name: &str) -> Vec<Block> {
    let mut blocks = vec![
        Block::heading(&format!("Welcome to {}", store_name)),
        Block::paragraph(
            "Your one-stop destination for quality products, exceptional service, \
             and unbeatable prices.",
        ),
        Block::Stats {
            items: vec![
                Field::new("Happy Customers", "10M+"),
                Field::new("Products", "50K+"),
                Field::new("Countries", "100+"),
                Field::new("Support", "24/7"),
            ],
        },
        Block::heading("Our Story"),
    ];
    blocks.extend(STORY.iter().map(|p| Block::paragraph(p)));

    blocks.push(Block::heading("Why Choose Us"));
    blocks.extend(FEATURES.iter().map(|(title, description)| {
        Block::Card(CardView {
            title: title.to_string(),
            lines: vec![description.to_string()],
            ..CardView::default()
        })
    }));

    blocks.push(Block::heading("Get in Touch"));
    blocks.push(Block::Fields {
        items: vec![
            Field::new("Email", "support@shophub.com"),
            Field::new("Phone", "+1 (555) 123-4567"),
            Field::new(
                "Address",
                "123 Commerce Street, San Francisco, CA 94102, United States",
            ),
        ],
    });
    blocks.push(Block::heading("Follow Us"));
    blocks.push(Block::links(&["Facebook", "Twitter", "Instagram", "LinkedIn"]));
    blocks.push(Block::paragraph(&format!(
        "\u{00a9} 2025 {}. All rights reserved.",
        store_name
    )));
    blocks.push(Block::paragraph("Version 1.0.0"));
    blocks
}
