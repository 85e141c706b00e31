use shophub_commerce::account::Address;

use super::{ActionView, Block, CardView};

pub(super) fn blocks(addresses: &[Address]) -> Vec<Block> {
    let mut blocks = vec![Block::button("Add New Address")];
    blocks.extend(addresses.iter().map(|address| Block::Card(card(address))));
    blocks
}

fn card(address: &Address) -> CardView {
    let mut badges = Vec::new();
    if address.is_default {
        badges.push("Default".to_string());
    }

    let mut lines = vec![address.name.clone(), address.phone.clone()];
    lines.extend(address.lines());

    let mut actions = vec![ActionView::inert("Edit"), ActionView::inert("Delete")];
    if !address.is_default {
        actions.push(ActionView::inert("Set as Default"));
    }

    CardView {
        title: address.kind.label().to_string(),
        badges,
        lines,
        actions,
        ..CardView::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::account::AccountData;

    #[test]
    fn test_default_address_card() {
        let account = AccountData::default();
        let blocks = blocks(&account.addresses);
        assert_eq!(blocks.len(), 3);
        let Block::Card(home) = &blocks[1] else {
            panic!("expected card");
        };
        assert_eq!(home.title, "Home");
        assert_eq!(home.badges, vec!["Default".to_string()]);
        assert!(home.lines.contains(&"New York, NY 10001".to_string()));
        assert_eq!(home.actions.len(), 2);

        let Block::Card(work) = &blocks[2] else {
            panic!("expected card");
        };
        assert!(work.badges.is_empty());
        assert_eq!(work.actions.last().unwrap().label, "Set as Default");
    }
}
