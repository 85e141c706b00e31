use shophub_commerce::money::Currency;

use super::{Block, Field};

const LANGUAGES: [(&str, &str); 6] = [
    ("en", "English"),
    ("es", "Espa\u{f1}ol"),
    ("fr", "Fran\u{e7}ais"),
    ("de", "Deutsch"),
    ("ja", "\u{65e5}\u{672c}\u{8a9e}"),
    ("zh", "\u{4e2d}\u{6587}"),
];

/// Settings screen. The currency picker shows the store's currency.
pub(super) fn blocks(currency: Currency) -> Vec<Block> {
    let languages = LANGUAGES
        .iter()
        .map(|(code, name)| Field::new(*code, *name))
        .collect();
    let currencies = Currency::ALL
        .iter()
        .map(|c| {
            Field::new(
                c.code().to_lowercase(),
                format!("{} - {}", c.code(), c.display_name()),
            )
        })
        .collect();

    vec![
        Block::heading("Appearance"),
        Block::toggle("Dark Mode", "Enable dark theme", false),
        Block::heading("Language & Region"),
        Block::Select {
            label: "Language".to_string(),
            value: "en".to_string(),
            options: languages,
        },
        Block::Select {
            label: "Currency".to_string(),
            value: currency.code().to_lowercase(),
            options: currencies,
        },
        Block::heading("Privacy & Security"),
        Block::toggle("Biometric Authentication", "Use fingerprint or face ID", true),
        Block::toggle("Activity Tracking", "Personalize your experience", true),
        Block::links(&["Manage Privacy Settings"]),
        Block::heading("Push Notifications"),
        Block::toggle("Enable Push Notifications", "Receive updates on your device", true),
        Block::toggle("In-App Notifications", "Show notifications while using app", true),
        Block::heading("Data & Storage"),
        Block::Fields {
            items: vec![
                Field::new("Clear Cache", "Free up 124 MB of space"),
                Field::new("Download Settings", "Manage download preferences"),
            ],
        },
        Block::heading("About"),
        Block::Fields {
            items: vec![Field::new("Version", "1.0.0")],
        },
        Block::links(&["Terms of Service", "Privacy Policy"]),
        Block::heading("Danger Zone"),
        Block::button("Clear All Data"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_select_follows_store() {
        let blocks = blocks(Currency::GBP);
        let select = blocks
            .iter()
            .find_map(|b| match b {
                Block::Select {
                    label,
                    value,
                    options,
                } if label == "Currency" => Some((value, options)),
                _ => None,
            })
            .unwrap();
        assert_eq!(select.0, "gbp");
        assert_eq!(select.1.len(), 5);
        assert_eq!(select.1[0].value, "USD - US Dollar");
    }

    #[test]
    fn test_toggle_defaults() {
        let blocks = blocks(Currency::USD);
        let toggles: Vec<(&str, bool)> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Toggle { label, on, .. } => Some((label.as_str(), *on)),
                _ => None,
            })
            .collect();
        assert_eq!(toggles[0], ("Dark Mode", false));
        assert!(toggles[1..].iter().all(|(_, on)| *on));
    }
}
