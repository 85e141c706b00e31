//! Inbound events.

use serde::{Deserialize, Serialize};
use shophub_commerce::account::{NotificationTab, OrderTab};
use shophub_commerce::catalog::CategorySelection;
use shophub_commerce::ids::ProductId;

use crate::navigation::Section;

/// Everything the shopper can do. `ShopState::dispatch` applies one at a
/// time, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShopEvent {
    // Catalog
    SelectCategory { category: CategorySelection },
    SetSearchQuery { query: String },
    SelectProduct { product_id: ProductId },

    // Cart
    AddToCart { product_id: ProductId, quantity: Option<u32> },
    UpdateCartQuantity { product_id: ProductId, quantity: u32 },
    RemoveCartItem { product_id: ProductId },
    OpenCart,
    CloseCart,

    // Product detail
    IncrementDetailQuantity,
    DecrementDetailQuantity,
    AddDetailToCart,
    CloseProductDetail,

    // Menu and sections
    OpenMenu,
    CloseMenu,
    NavigateToSection { section: Section },
    NavigateBack,
    AddWishlistItemToCart { product_id: ProductId },
    SelectOrderTab { tab: OrderTab },
    SelectNotificationTab { tab: NotificationTab },
}

impl ShopEvent {
    /// Snake-case event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ShopEvent::SelectCategory { .. } => "select_category",
            ShopEvent::SetSearchQuery { .. } => "set_search_query",
            ShopEvent::SelectProduct { .. } => "select_product",
            ShopEvent::AddToCart { .. } => "add_to_cart",
            ShopEvent::UpdateCartQuantity { .. } => "update_cart_quantity",
            ShopEvent::RemoveCartItem { .. } => "remove_cart_item",
            ShopEvent::OpenCart => "open_cart",
            ShopEvent::CloseCart => "close_cart",
            ShopEvent::IncrementDetailQuantity => "increment_detail_quantity",
            ShopEvent::DecrementDetailQuantity => "decrement_detail_quantity",
            ShopEvent::AddDetailToCart => "add_detail_to_cart",
            ShopEvent::CloseProductDetail => "close_product_detail",
            ShopEvent::OpenMenu => "open_menu",
            ShopEvent::CloseMenu => "close_menu",
            ShopEvent::NavigateToSection { .. } => "navigate_to_section",
            ShopEvent::NavigateBack => "navigate_back",
            ShopEvent::AddWishlistItemToCart { .. } => "add_wishlist_item_to_cart",
            ShopEvent::SelectOrderTab { .. } => "select_order_tab",
            ShopEvent::SelectNotificationTab { .. } => "select_notification_tab",
        }
    }

    /// Add one unit of a product.
    pub fn add(product_id: ProductId) -> Self {
        ShopEvent::AddToCart {
            product_id,
            quantity: None,
        }
    }

    pub fn select_product(product_id: ProductId) -> Self {
        ShopEvent::SelectProduct { product_id }
    }

    pub fn navigate(section: Section) -> Self {
        ShopEvent::NavigateToSection { section }
    }

    pub fn search(query: impl Into<String>) -> Self {
        ShopEvent::SetSearchQuery {
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::catalog::Category;

    #[test]
    fn test_json_shape() {
        let event = ShopEvent::AddToCart {
            product_id: ProductId::new(3),
            quantity: Some(2),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "add_to_cart");
        assert_eq!(json["product_id"], 3);

        let parsed: ShopEvent =
            serde_json::from_str(r#"{"type":"navigate_to_section","section":"orders"}"#).unwrap();
        assert_eq!(parsed, ShopEvent::navigate(Section::Orders));
    }

    #[test]
    fn test_names_match_serde_tags() {
        let events = [
            ShopEvent::SelectCategory {
                category: CategorySelection::One(Category::Audio),
            },
            ShopEvent::search("pro"),
            ShopEvent::OpenCart,
            ShopEvent::NavigateBack,
            ShopEvent::SelectOrderTab {
                tab: OrderTab::Completed,
            },
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["type"], event.name());
        }
    }
}
