//! Account and support section screens.
//!
//! Each section is rendered as a flat list of generic [`Block`]s so a front
//! end only needs one widget per block kind, not one page per section.

mod about;
mod addresses;
mod help;
mod notifications;
mod orders;
mod payment;
mod profile;
mod settings;
mod wishlist;

use serde::Serialize;

use crate::event::ShopEvent;
use crate::navigation::Section;
use crate::state::ShopState;
use crate::views::ProductCardView;

/// A section screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub section: Section,
    pub title: String,
    /// Line under the title, e.g. "12 items".
    pub subtitle: Option<String>,
    pub blocks: Vec<Block>,
    pub on_back: ShopEvent,
}

/// One piece of a section screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Paragraph { text: String },
    Avatar { image: String, name: String, caption: String },
    /// Label/value pairs.
    Fields { items: Vec<Field> },
    /// Big-number tiles.
    Stats { items: Vec<Field> },
    Tabs { tabs: Vec<TabView> },
    Card(CardView),
    Product(ProductCardView),
    Toggle { label: String, description: String, on: bool },
    Select { label: String, value: String, options: Vec<Field> },
    /// Rows that lead nowhere in this app.
    Links { items: Vec<String> },
    Button(ActionView),
    Empty { title: String, message: String },
    Note { title: String, text: String },
}

impl Block {
    pub(crate) fn heading(text: &str) -> Self {
        Block::Heading {
            text: text.to_string(),
        }
    }

    pub(crate) fn paragraph(text: &str) -> Self {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    pub(crate) fn links(items: &[&str]) -> Self {
        Block::Links {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub(crate) fn button(label: &str) -> Self {
        Block::Button(ActionView::inert(label))
    }

    pub(crate) fn toggle(label: &str, description: &str, on: bool) -> Self {
        Block::Toggle {
            label: label.to_string(),
            description: description.to_string(),
            on,
        }
    }

    pub(crate) fn empty(title: &str, message: &str) -> Self {
        Block::Empty {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// A label and a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A tab header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub label: String,
    /// Count badge next to the label.
    pub count: Option<usize>,
    pub selected: bool,
    pub on_select: ShopEvent,
}

/// A boxed group of lines with an optional image, badges and actions.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CardView {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub badges: Vec<String>,
    pub lines: Vec<String>,
    /// Right-aligned value, e.g. an order total.
    pub trailing: Option<String>,
    /// Unread or otherwise emphasized.
    pub highlighted: bool,
    pub actions: Vec<ActionView>,
}

/// A button. Buttons with no event are shown but do nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionView {
    pub label: String,
    pub on_select: Option<ShopEvent>,
}

impl ActionView {
    pub fn inert(label: &str) -> Self {
        Self {
            label: label.to_string(),
            on_select: None,
        }
    }
}

/// Build the screen for `section` from the current state.
pub fn section_view(section: Section, state: &ShopState) -> SectionView {
    let account = state.account();
    let (subtitle, blocks) = match section {
        Section::Profile => (None, profile::blocks(&account.profile)),
        Section::Orders => (None, orders::blocks(&account.orders, state.order_tab())),
        Section::Wishlist => (
            Some(account.wishlist.count_label()),
            wishlist::blocks(&account.wishlist),
        ),
        Section::Addresses => (None, addresses::blocks(&account.addresses)),
        Section::Payment => (None, payment::blocks(&account.payment_methods)),
        Section::Notifications => notifications::view(&account.notifications, state.notification_tab()),
        Section::Settings => (None, settings::blocks(state.config().currency())),
        Section::Help => (None, help::blocks()),
        Section::About => (None, about::blocks(&state.config().store.name)),
    };

    SectionView {
        section,
        title: section.title().to_string(),
        subtitle,
        blocks,
        on_back: ShopEvent::NavigateBack,
    }
}
