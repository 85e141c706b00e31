use shophub_commerce::account::PaymentMethod;

use super::{ActionView, Block, CardView};

pub(super) fn blocks(methods: &[PaymentMethod]) -> Vec<Block> {
    let mut blocks = vec![Block::button("Add New Card")];
    blocks.extend(methods.iter().map(|method| Block::Card(card(method))));
    blocks.push(Block::Note {
        title: "Your payment information is secure".to_string(),
        text: "All card details are encrypted and stored securely. \
               We never share your payment information."
            .to_string(),
    });
    blocks
}

fn card(method: &PaymentMethod) -> CardView {
    let mut actions = Vec::new();
    if !method.is_default {
        actions.push(ActionView::inert("Set as Default"));
    }
    actions.push(ActionView::inert("Remove"));

    CardView {
        title: method.brand.display_name().to_string(),
        subtitle: Some(method.masked_number()),
        badges: if method.is_default {
            vec!["Default".to_string()]
        } else {
            Vec::new()
        },
        lines: vec![
            format!("Cardholder: {}", method.cardholder_name.to_uppercase()),
            format!("Expires: {}", method.expiry()),
        ],
        actions,
        ..CardView::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::account::AccountData;

    #[test]
    fn test_cards_and_note() {
        let account = AccountData::default();
        let blocks = blocks(&account.payment_methods);
        assert_eq!(blocks.len(), 4);

        let Block::Card(visa) = &blocks[1] else {
            panic!("expected card");
        };
        assert_eq!(visa.title, "Visa");
        assert_eq!(visa.badges, vec!["Default".to_string()]);
        assert_eq!(visa.lines[1], "Expires: 12/2026");
        assert_eq!(visa.actions.len(), 1);

        let Block::Card(mastercard) = &blocks[2] else {
            panic!("expected card");
        };
        assert!(mastercard.subtitle.as_deref().unwrap().ends_with("8888"));
        assert_eq!(mastercard.actions[0].label, "Set as Default");
        assert!(matches!(blocks[3], Block::Note { .. }));
    }
}
