//! Turn a [`ShopState`] into the screen a front end should draw.

use serde::Serialize;
use shophub_commerce::catalog::CategorySelection;

use crate::event::ShopEvent;
use crate::navigation::View;
use crate::state::ShopState;
use crate::views::{section_view, CartSheetView, MenuView, ProductCardView, ProductDetailView, SectionView};

pub const SEARCH_PLACEHOLDER: &str = "Search products...";
pub const NO_PRODUCTS: &str = "No products found";

/// The top-level screen. Exactly one is shown at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Catalog(CatalogScreen),
    ProductDetail(ProductDetailView),
    Section(SectionView),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Catalog(_) => "catalog",
            Screen::ProductDetail(_) => "product_detail",
            Screen::Section(_) => "section",
        }
    }
}

/// The product grid with its header, filters and overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogScreen {
    pub header: HeaderView,
    pub search: SearchView,
    pub chips: Vec<ChipView>,
    pub products: Vec<ProductCardView>,
    /// Shown instead of the grid when nothing matches.
    pub empty: Option<String>,
    pub cart: Option<CartSheetView>,
    pub menu: Option<MenuView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub title: String,
    /// Cart badge, absent when the cart is empty.
    pub cart_badge: Option<u32>,
    pub on_menu: ShopEvent,
    pub on_cart: ShopEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub value: String,
    pub placeholder: String,
}

impl SearchView {
    /// Event for the field's new contents.
    pub fn on_input(&self, query: impl Into<String>) -> ShopEvent {
        ShopEvent::search(query)
    }
}

/// A category filter chip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipView {
    pub label: String,
    pub selected: bool,
    pub on_select: ShopEvent,
}

/// Build the screen for the current state.
pub fn render(state: &ShopState) -> Screen {
    match state.view() {
        View::Catalog => Screen::Catalog(catalog_screen(state)),
        View::ProductDetail { product, quantity } => {
            Screen::ProductDetail(ProductDetailView::new(product, *quantity))
        }
        View::Section(section) => Screen::Section(section_view(*section, state)),
    }
}

fn catalog_screen(state: &ShopState) -> CatalogScreen {
    let item_count = state.cart().item_count();
    let filter = state.filter();

    let chips = CategorySelection::OPTIONS
        .into_iter()
        .map(|category| ChipView {
            label: category.label().to_string(),
            selected: category == filter.category,
            on_select: ShopEvent::SelectCategory { category },
        })
        .collect();

    let products: Vec<ProductCardView> = state
        .visible_products()
        .into_iter()
        .map(ProductCardView::catalog)
        .collect();

    CatalogScreen {
        header: HeaderView {
            title: state.config().store.name.clone(),
            cart_badge: (item_count > 0).then_some(item_count),
            on_menu: ShopEvent::OpenMenu,
            on_cart: ShopEvent::OpenCart,
        },
        search: SearchView {
            value: filter.query.clone(),
            placeholder: SEARCH_PLACEHOLDER.to_string(),
        },
        chips,
        empty: products.is_empty().then(|| NO_PRODUCTS.to_string()),
        products,
        cart: state
            .is_cart_open()
            .then(|| CartSheetView::new(state.cart())),
        menu: state
            .is_menu_open()
            .then(|| MenuView::new(state.account())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Section;
    use shophub_commerce::catalog::Category;
    use shophub_commerce::ids::ProductId;

    fn catalog(state: &ShopState) -> CatalogScreen {
        match state.render() {
            Screen::Catalog(screen) => screen,
            other => panic!("expected catalog, got {}", other.name()),
        }
    }

    #[test]
    fn test_initial_catalog() {
        let screen = catalog(&ShopState::default());
        assert_eq!(screen.header.title, "ShopHub");
        assert_eq!(screen.header.cart_badge, None);
        assert_eq!(screen.products.len(), 8);
        assert_eq!(screen.chips.len(), 6);
        assert!(screen.chips[0].selected);
        assert_eq!(screen.search.placeholder, SEARCH_PLACEHOLDER);
        assert!(screen.empty.is_none());
        assert!(screen.cart.is_none());
        assert!(screen.menu.is_none());
    }

    #[test]
    fn test_badge_and_chip_follow_state() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::AddToCart {
            product_id: ProductId::new(1),
            quantity: Some(2),
        });
        state.dispatch(ShopEvent::SelectCategory {
            category: CategorySelection::One(Category::Audio),
        });
        state.dispatch(ShopEvent::OpenCart);

        let screen = catalog(&state);
        assert_eq!(screen.header.cart_badge, Some(2));
        let selected: Vec<&str> = screen
            .chips
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Audio"]);
        assert_eq!(screen.products.len(), 3);
        assert!(screen.cart.is_some());
    }

    #[test]
    fn test_no_matches_shows_empty_state() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::search("zzz"));
        let screen = catalog(&state);
        assert!(screen.products.is_empty());
        assert_eq!(screen.empty.as_deref(), Some(NO_PRODUCTS));
        assert_eq!(screen.search.value, "zzz");
    }

    #[test]
    fn test_detail_and_section_screens() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::select_product(ProductId::new(4)));
        let Screen::ProductDetail(detail) = state.render() else {
            panic!("expected detail");
        };
        assert_eq!(detail.quantity, 1);

        state.dispatch(ShopEvent::CloseProductDetail);
        state.dispatch(ShopEvent::navigate(Section::About));
        let Screen::Section(view) = state.render() else {
            panic!("expected section");
        };
        assert_eq!(view.section, Section::About);
    }

    #[test]
    fn test_screen_json_is_tagged() {
        let json = serde_json::to_value(ShopState::default().render()).unwrap();
        assert_eq!(json["screen"], "catalog");
        assert_eq!(json["header"]["title"], "ShopHub");
    }
}
