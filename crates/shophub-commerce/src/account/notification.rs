//! Inbox notifications shown on the notifications screen.

use crate::ids::NotificationId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserNotificationKind {
    Order,
    Promotion,
    Wishlist,
    Message,
}

impl UserNotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserNotificationKind::Order => "order",
            UserNotificationKind::Promotion => "promotion",
            UserNotificationKind::Wishlist => "wishlist",
            UserNotificationKind::Message => "message",
        }
    }
}

/// An inbox message. Distinct from the transient toasts the shop state
/// emits while the shopper works the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserNotification {
    pub id: NotificationId,
    pub kind: UserNotificationKind,
    pub title: String,
    pub message: String,
    /// Relative time as shown ("2 hours ago").
    pub time: String,
    pub read: bool,
}

/// Tabs of the notifications screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NotificationTab {
    #[default]
    All,
    Unread,
}

impl NotificationTab {
    pub const ALL: [NotificationTab; 2] = [NotificationTab::All, NotificationTab::Unread];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationTab::All => "All",
            NotificationTab::Unread => "Unread",
        }
    }

    /// Whether a notification is listed under this tab.
    pub fn includes(&self, notification: &UserNotification) -> bool {
        match self {
            NotificationTab::All => true,
            NotificationTab::Unread => !notification.read,
        }
    }
}

/// Number of unread notifications.
pub fn unread_count(notifications: &[UserNotification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
