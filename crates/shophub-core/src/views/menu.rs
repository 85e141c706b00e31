use serde::Serialize;
use shophub_commerce::account::AccountData;

use crate::event::ShopEvent;
use crate::navigation::Section;

/// The side menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuView {
    pub user_name: String,
    pub user_email: String,
    pub avatar: String,
    pub initials: String,
    pub groups: Vec<MenuGroupView>,
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuGroupView {
    pub title: String,
    pub entries: Vec<MenuEntryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntryView {
    pub label: String,
    pub section: Section,
    pub badge: Option<String>,
    pub on_select: ShopEvent,
}

impl MenuEntryView {
    fn new(section: Section, badge: Option<String>) -> Self {
        Self {
            label: section.menu_label().to_string(),
            section,
            badge,
            on_select: ShopEvent::navigate(section),
        }
    }
}

fn count_badge(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

impl MenuView {
    pub fn new(account: &AccountData) -> Self {
        let groups = vec![
            MenuGroupView {
                title: "Account".to_string(),
                entries: vec![
                    MenuEntryView::new(Section::Profile, None),
                    MenuEntryView::new(Section::Orders, count_badge(account.active_order_count())),
                    MenuEntryView::new(Section::Wishlist, count_badge(account.wishlist.len())),
                    MenuEntryView::new(Section::Addresses, None),
                    MenuEntryView::new(Section::Payment, None),
                ],
            },
            MenuGroupView {
                title: "Preferences".to_string(),
                entries: vec![
                    MenuEntryView::new(
                        Section::Notifications,
                        (account.unread_notification_count() > 0).then(|| "New".to_string()),
                    ),
                    MenuEntryView::new(Section::Settings, None),
                ],
            },
            MenuGroupView {
                title: "Support".to_string(),
                entries: vec![
                    MenuEntryView::new(Section::Help, None),
                    MenuEntryView::new(Section::About, None),
                ],
            },
        ];

        Self {
            user_name: account.profile.full_name(),
            user_email: account.profile.email.clone(),
            avatar: account.profile.avatar.clone(),
            initials: account.profile.initials(),
            groups,
            footer: vec![
                "ShopHub v1.0.0".to_string(),
                "\u{00a9} 2025 All rights reserved".to_string(),
            ],
        }
    }

    pub fn on_close(&self) -> ShopEvent {
        ShopEvent::CloseMenu
    }

    /// Every entry, in display order.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntryView> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }
}
