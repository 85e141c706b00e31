//! Transient notifications ("toasts") produced by cart events.

use serde::{Deserialize, Serialize};

/// Kind of toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Something was added to the cart.
    Success,
    /// Something was taken out of the cart.
    Removal,
}

/// A fire-and-forget message for the shopper. The shop keeps no record of
/// notifications once they are returned from `dispatch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// "<name> added to cart".
    pub fn added(product_name: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: format!("{} added to cart", product_name),
        }
    }

    /// "Item removed from cart".
    pub fn removed() -> Self {
        Self {
            kind: NotificationKind::Removal,
            message: "Item removed from cart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Notification::added("4K Webcam").message,
            "4K Webcam added to cart"
        );
        assert_eq!(Notification::removed().kind, NotificationKind::Removal);
    }
}
