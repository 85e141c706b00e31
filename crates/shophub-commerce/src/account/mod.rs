//! Read-only account data shown by the account sections.
//!
//! Everything here is static sample data for a single signed-in shopper.
//! Nothing is persisted and nothing other than the wishlist's add-to-cart
//! action feeds back into the session.

mod address;
mod notification;
mod order;
mod payment;
mod profile;
mod wishlist;

pub use address::{Address, AddressKind};
pub use notification::{unread_count, NotificationTab, UserNotification, UserNotificationKind};
pub use order::{orders_in, Order, OrderStatus, OrderTab};
pub use payment::{CardBrand, PaymentMethod};
pub use profile::Profile;
pub use wishlist::Wishlist;

use crate::catalog::{seed, Catalog};
use crate::ids::{AddressId, NotificationId, OrderId, PaymentMethodId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Everything the account sections display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountData {
    pub profile: Profile,
    pub orders: Vec<Order>,
    pub wishlist: Wishlist,
    pub addresses: Vec<Address>,
    pub payment_methods: Vec<PaymentMethod>,
    pub notifications: Vec<UserNotification>,
}

impl AccountData {
    /// The sample shopper, with prices in `currency`.
    pub fn demo(currency: Currency) -> Self {
        Self {
            profile: demo_profile(),
            orders: demo_orders(currency),
            wishlist: Wishlist::new(
                seed::wishlist_records()
                    .into_iter()
                    .filter_map(|r| r.into_product(currency).ok())
                    .collect(),
            ),
            addresses: demo_addresses(),
            payment_methods: demo_payment_methods(),
            notifications: demo_notifications(),
        }
    }

    /// The sample shopper for a session over `catalog`. Wishlist entries
    /// sharing an id with a catalog product show that product.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let mut data = Self::demo(catalog.currency());
        data.wishlist = data.wishlist.resolve_against(catalog);
        data
    }

    /// Orders in the Active tab.
    pub fn active_order_count(&self) -> usize {
        orders_in(&self.orders, OrderTab::Active).len()
    }

    pub fn unread_notification_count(&self) -> usize {
        unread_count(&self.notifications)
    }

    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|p| p.is_default)
    }
}

impl Default for AccountData {
    fn default() -> Self {
        Self::demo(Currency::USD)
    }
}

fn demo_profile() -> Profile {
    Profile {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        date_of_birth: "January 15, 1990".to_string(),
        member_since: "Jan 2024".to_string(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&h=200&fit=crop"
            .to_string(),
    }
}

fn demo_orders(currency: Currency) -> Vec<Order> {
    let order = |id: &str,
                 number: &str,
                 date: &str,
                 status: OrderStatus,
                 total: f64,
                 photo: &str,
                 name: &str| Order {
        id: OrderId::new(id),
        order_number: number.to_string(),
        date: date.to_string(),
        status,
        total: Money::from_decimal(total, currency),
        items: 1,
        image: format!("https://images.unsplash.com/{photo}?w=100&h=100&fit=crop"),
        product_name: name.to_string(),
    };

    vec![
        order("1", "ORD-2024-1001", "Dec 20, 2024", OrderStatus::Shipped, 199.99,
            "photo-1713618651165-a3cf7f85506c", "Premium Wireless Headphones"),
        order("2", "ORD-2024-1002", "Dec 18, 2024", OrderStatus::Processing, 1299.99,
            "photo-1554125970-e3f2399e937f", "Ultra-Slim Laptop Pro"),
        order("3", "ORD-2024-1003", "Dec 15, 2024", OrderStatus::Processing, 79.99,
            "photo-1589256469067-ea99122bbdc4", "Portable Bluetooth Speaker"),
        order("4", "ORD-2024-0998", "Dec 5, 2024", OrderStatus::Delivered, 399.99,
            "photo-1579586337278-3befd40fd17a", "Smart Watch Series 8"),
    ]
}

fn demo_addresses() -> Vec<Address> {
    vec![
        Address {
            id: AddressId::new("1"),
            kind: AddressKind::Home,
            name: "John Doe".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address1: "123 Main Street".to_string(),
            address2: Some("Apartment 4B".to_string()),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip: "10001".to_string(),
            country: "United States".to_string(),
            is_default: true,
        },
        Address {
            id: AddressId::new("2"),
            kind: AddressKind::Work,
            name: "John Doe".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            address1: "456 Business Ave".to_string(),
            address2: Some("Suite 200".to_string()),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip: "10002".to_string(),
            country: "United States".to_string(),
            is_default: false,
        },
    ]
}

fn demo_payment_methods() -> Vec<PaymentMethod> {
    let card = |id: &str, brand, last_four: &str, month: &str, year: &str, is_default| {
        PaymentMethod {
            id: PaymentMethodId::new(id),
            brand,
            last_four: last_four.to_string(),
            expiry_month: month.to_string(),
            expiry_year: year.to_string(),
            cardholder_name: "John Doe".to_string(),
            is_default,
        }
    };
    vec![
        card("1", CardBrand::Visa, "4242", "12", "2026", true),
        card("2", CardBrand::Mastercard, "8888", "08", "2025", false),
    ]
}

fn demo_notifications() -> Vec<UserNotification> {
    let note = |id: &str, kind, title: &str, message: &str, time: &str, read| UserNotification {
        id: NotificationId::new(id),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
    };
    vec![
        note("1", UserNotificationKind::Order, "Order Shipped",
            "Your order #ORD-2024-1001 has been shipped and will arrive in 2-3 days.",
            "2 hours ago", false),
        note("2", UserNotificationKind::Promotion, "Flash Sale Alert!",
            "Up to 50% off on selected headphones. Sale ends tonight!",
            "5 hours ago", false),
        note("3", UserNotificationKind::Wishlist, "Price Drop Alert",
            "Ultra-Slim Laptop Pro is now $200 cheaper. Don't miss out!",
            "1 day ago", true),
        note("4", UserNotificationKind::Order, "Order Delivered",
            "Your order #ORD-2024-0998 has been delivered. Rate your experience!",
            "2 days ago", true),
        note("5", UserNotificationKind::Message, "New Message",
            "You have a new message from customer support regarding your recent inquiry.",
            "3 days ago", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_demo_counts() {
        let account = AccountData::demo(Currency::USD);
        assert_eq!(account.orders.len(), 4);
        assert_eq!(account.active_order_count(), 3);
        assert_eq!(account.unread_notification_count(), 2);
        assert_eq!(account.wishlist.len(), 12);
        assert_eq!(account.addresses.len(), 2);
        assert_eq!(account.payment_methods.len(), 2);
    }

    #[test]
    fn test_defaults() {
        let account = AccountData::default();
        assert_eq!(account.default_address().map(|a| a.kind), Some(AddressKind::Home));
        assert_eq!(
            account.default_payment_method().map(|p| p.last_four.as_str()),
            Some("4242")
        );
    }

    #[test]
    fn test_wishlist_prices_follow_currency() {
        let account = AccountData::demo(Currency::EUR);
        let keyboard = account.wishlist.get(ProductId::new(10)).unwrap();
        assert_eq!(keyboard.price, Money::new(15999, Currency::EUR));
        assert_eq!(account.orders[1].total, Money::new(129999, Currency::EUR));
    }
}
