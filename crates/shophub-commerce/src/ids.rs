//! Identifier newtypes.
//!
//! Products use small integers, as catalog files do. Account records use
//! strings such as "ORD-2024-1001".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer-backed ID structs.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A unique integer identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID from its integer value.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the integer value.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

/// Macro to generate string-backed ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_numeric_id!(ProductId);

define_id!(OrderId);
define_id!(AddressId);
define_id!(PaymentMethodId);
define_id!(NotificationId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
        assert_eq!(ProductId::from(7), id);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(format!("{}", ProductId::new(42)), "42");
    }

    #[test]
    fn test_product_id_serializes_as_integer() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(back, ProductId::new(3));
    }

    #[test]
    fn test_string_id_equality() {
        let id1 = OrderId::new("ORD-1");
        let id2: OrderId = "ORD-1".into();
        let id3 = OrderId::new("ORD-2");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1.as_str(), "ORD-1");
    }
}
