use shophub_commerce::account::{unread_count, NotificationTab, UserNotification};

use super::{Block, CardView, TabView};
use crate::event::ShopEvent;

const PREFERENCES: [(&str, &str); 4] = [
    ("Order Updates", "Get notified about order status changes"),
    ("Promotions & Offers", "Receive deals and special offers"),
    ("Wishlist Alerts", "Price drops on wishlist items"),
    ("Messages", "Chat and support messages"),
];

/// Subtitle ("2 new") and blocks for the notifications screen.
pub(super) fn view(
    notifications: &[UserNotification],
    selected: NotificationTab,
) -> (Option<String>, Vec<Block>) {
    let unread = unread_count(notifications);

    let tabs = NotificationTab::ALL
        .into_iter()
        .map(|tab| TabView {
            label: tab.label().to_string(),
            count: (tab == NotificationTab::Unread && unread > 0).then_some(unread),
            selected: tab == selected,
            on_select: ShopEvent::SelectNotificationTab { tab },
        })
        .collect();

    let mut blocks = vec![Block::Tabs { tabs }];
    let listed: Vec<&UserNotification> = notifications
        .iter()
        .filter(|n| selected.includes(n))
        .collect();
    if listed.is_empty() {
        blocks.push(match selected {
            NotificationTab::All => Block::empty("No notifications", "You're all caught up."),
            NotificationTab::Unread => {
                Block::empty("No unread notifications", "You're all caught up!")
            }
        });
    } else {
        blocks.extend(listed.into_iter().map(|n| Block::Card(card(n))));
    }

    blocks.push(Block::heading("Notification Preferences"));
    blocks.extend(
        PREFERENCES
            .iter()
            .map(|(label, description)| Block::toggle(label, description, true)),
    );

    let subtitle = (unread > 0).then(|| format!("{} new", unread));
    (subtitle, blocks)
}

fn card(notification: &UserNotification) -> CardView {
    CardView {
        title: notification.title.clone(),
        subtitle: Some(notification.time.clone()),
        badges: vec![notification.kind.as_str().to_string()],
        lines: vec![notification.message.clone()],
        highlighted: !notification.read,
        ..CardView::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::account::AccountData;

    fn cards(blocks: &[Block]) -> Vec<&CardView> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Card(card) => Some(card),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_all_tab() {
        let account = AccountData::default();
        let (subtitle, blocks) = view(&account.notifications, NotificationTab::All);
        assert_eq!(subtitle.as_deref(), Some("2 new"));
        let listed = cards(&blocks);
        assert_eq!(listed.len(), 5);
        assert!(listed[0].highlighted);
        assert!(!listed[4].highlighted);
    }

    #[test]
    fn test_unread_tab() {
        let account = AccountData::default();
        let (_, blocks) = view(&account.notifications, NotificationTab::Unread);
        let Block::Tabs { tabs } = &blocks[0] else {
            panic!("expected tabs");
        };
        assert_eq!(tabs[1].count, Some(2));
        assert!(tabs[1].selected);
        assert_eq!(cards(&blocks).len(), 2);
    }

    #[test]
    fn test_unread_tab_empty_when_all_read() {
        let mut account = AccountData::default();
        account.notifications.iter_mut().for_each(|n| n.read = true);
        let (subtitle, blocks) = view(&account.notifications, NotificationTab::Unread);
        assert!(subtitle.is_none());
        assert!(matches!(blocks[1], Block::Empty { .. }));
    }
}
