use shophub_commerce::account::{orders_in, Order, OrderTab};

use super::{ActionView, Block, CardView, TabView};
use crate::event::ShopEvent;

pub(super) fn blocks(orders: &[Order], selected: OrderTab) -> Vec<Block> {
    let tabs = OrderTab::ALL
        .into_iter()
        .map(|tab| TabView {
            label: tab.label().to_string(),
            count: (tab == OrderTab::Active).then(|| orders_in(orders, tab).len()),
            selected: tab == selected,
            on_select: ShopEvent::SelectOrderTab { tab },
        })
        .collect();

    let mut blocks = vec![Block::Tabs { tabs }];
    let listed = orders_in(orders, selected);
    if listed.is_empty() {
        let (title, message) = selected.empty_state();
        blocks.push(Block::empty(title, message));
    } else {
        blocks.extend(listed.into_iter().map(|order| Block::Card(card(order))));
    }
    blocks
}

fn card(order: &Order) -> CardView {
    CardView {
        title: order.order_number.clone(),
        subtitle: Some(order.date.clone()),
        image: Some(order.image.clone()),
        badges: vec![order.status.display_name().to_string()],
        lines: vec![order.product_name.clone(), order.items_label()],
        trailing: Some(order.total.display()),
        highlighted: false,
        actions: vec![
            ActionView::inert("Track Order"),
            ActionView::inert("View Details"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::account::AccountData;

    #[test]
    fn test_active_tab_lists_open_orders() {
        let account = AccountData::default();
        let blocks = blocks(&account.orders, OrderTab::Active);
        let Block::Tabs { tabs } = &blocks[0] else {
            panic!("expected tabs");
        };
        assert_eq!(tabs[0].count, Some(3));
        assert!(tabs[0].selected);
        assert_eq!(blocks.len(), 4);
        let Block::Card(first) = &blocks[1] else {
            panic!("expected card");
        };
        assert_eq!(first.title, "ORD-2024-1001");
        assert_eq!(first.badges, vec!["Shipped".to_string()]);
        assert_eq!(first.trailing.as_deref(), Some("$199.99"));
    }

    #[test]
    fn test_cancelled_tab_is_empty() {
        let account = AccountData::default();
        let blocks = blocks(&account.orders, OrderTab::Cancelled);
        assert_eq!(
            blocks[1],
            Block::empty("No cancelled orders", "You haven't cancelled any orders.")
        );
    }
}
