//! Category types for product organization.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The set is fixed; every product belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Audio,
    Wearables,
    Accessories,
    Computers,
    Photography,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Audio,
        Category::Wearables,
        Category::Accessories,
        Category::Computers,
        Category::Photography,
    ];

    /// Display label (also the serialized name).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Audio => "Audio",
            Category::Wearables => "Wearables",
            Category::Accessories => "Accessories",
            Category::Computers => "Computers",
            Category::Photography => "Photography",
        }
    }

    /// Parse a category label, ignoring case.
    pub fn from_label(label: &str) -> Result<Self, CommerceError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| CommerceError::UnknownCategory(label.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The category chip selected above the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategorySelection {
    /// No category restriction.
    #[default]
    All,
    /// Only products in this category.
    One(Category),
}

impl CategorySelection {
    /// Chips in the order they are shown: "All" first, then each category.
    pub const OPTIONS: [CategorySelection; 6] = [
        CategorySelection::All,
        CategorySelection::One(Category::Audio),
        CategorySelection::One(Category::Wearables),
        CategorySelection::One(Category::Accessories),
        CategorySelection::One(Category::Computers),
        CategorySelection::One(Category::Photography),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategorySelection::All => "All",
            CategorySelection::One(category) => category.label(),
        }
    }

    /// Parse a chip label ("All" or a category label).
    pub fn from_label(label: &str) -> Result<Self, CommerceError> {
        if label.trim().eq_ignore_ascii_case("all") {
            return Ok(CategorySelection::All);
        }
        Category::from_label(label).map(CategorySelection::One)
    }

    /// Whether a product in `category` passes this selection.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::One(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::One(category)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()).unwrap(), category);
        }
        assert_eq!(Category::from_label("audio").unwrap(), Category::Audio);
        assert!(Category::from_label("Garden").is_err());
    }

    #[test]
    fn test_selection_options_start_with_all() {
        let labels: Vec<&str> = CategorySelection::OPTIONS.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Audio", "Wearables", "Accessories", "Computers", "Photography"]
        );
    }

    #[test]
    fn test_selection_matches() {
        assert!(CategorySelection::All.matches(Category::Computers));
        assert!(CategorySelection::One(Category::Audio).matches(Category::Audio));
        assert!(!CategorySelection::One(Category::Audio).matches(Category::Wearables));
    }

    #[test]
    fn test_selection_from_label() {
        assert_eq!(CategorySelection::from_label("All").unwrap(), CategorySelection::All);
        assert_eq!(
            CategorySelection::from_label("Photography").unwrap(),
            CategorySelection::One(Category::Photography)
        );
        assert!(CategorySelection::from_label("Toys").is_err());
    }
}
