//! Saved address types.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// What an address is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    Home,
    Work,
    Other,
}

impl AddressKind {
    pub fn label(&self) -> &'static str {
        match self {
            AddressKind::Home => "Home",
            AddressKind::Work => "Work",
            AddressKind::Other => "Other",
        }
    }
}

/// A saved postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub id: AddressId,
    pub kind: AddressKind,
    /// Recipient name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Address line 1.
    pub address1: String,
    /// Address line 2 (apt, suite, etc.).
    pub address2: Option<String>,
    pub city: String,
    /// State/province code (e.g., "NY").
    pub state: String,
    /// Postal/ZIP code.
    pub zip: String,
    pub country: String,
    /// Default shipping address.
    pub is_default: bool,
}

impl Address {
    /// "New York, NY 10001".
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }

    /// Lines as printed on the address card.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.address1.clone()];
        if let Some(ref addr2) = self.address2 {
            lines.push(addr2.clone());
        }
        lines.push(self.city_line());
        lines.push(self.country.clone());
        lines
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        self.lines().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Address {
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
        }
    }

    #[test]
    fn test_lines_include_optional_second_line() {
        let address = home();
        assert_eq!(address.lines().len(), 4);
        assert_eq!(address.city_line(), "New York, NY 10001");

        let mut no_apt = home();
        no_apt.address2 = None;
        assert_eq!(
            no_apt.one_line(),
            "123 Main Street, New York, NY 10001, United States"
        );
    }
}
