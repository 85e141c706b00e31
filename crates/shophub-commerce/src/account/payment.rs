//! Saved payment card types.

use crate::ids::PaymentMethodId;
use serde::{Deserialize, Serialize};

/// Card network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl CardBrand {
    pub fn display_name(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
            CardBrand::Discover => "Discover",
        }
    }
}

/// A saved card. Only the last four digits are ever held.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub brand: CardBrand,
    pub last_four: String,
    /// Two-digit month.
    pub expiry_month: String,
    /// Four-digit year.
    pub expiry_year: String,
    pub cardholder_name: String,
    pub is_default: bool,
}

impl PaymentMethod {
    /// "•••• •••• •••• 4242".
    pub fn masked_number(&self) -> String {
        format!("\u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} {}", self.last_four)
    }

    /// "12/2026".
    pub fn expiry(&self) -> String {
        format!("{}/{}", self.expiry_month, self.expiry_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display() {
        let card = PaymentMethod {
            id: PaymentMethodId::new("1"),
            brand: CardBrand::Visa,
            last_four: "4242".to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "2026".to_string(),
            cardholder_name: "John Doe".to_string(),
            is_default: true,
        };
        assert!(card.masked_number().ends_with(" 4242"));
        assert_eq!(card.expiry(), "12/2026");
        assert_eq!(CardBrand::Amex.display_name(), "American Express");
    }
}
