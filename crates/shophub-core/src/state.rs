//! The shop state and its event loop.

use shophub_commerce::account::{AccountData, NotificationTab, OrderTab};
use shophub_commerce::cart::{Cart, CartChange};
use shophub_commerce::catalog::{Catalog, CategorySelection, Product};
use shophub_commerce::ids::ProductId;
use shophub_commerce::search::FilterState;
use shophub_commerce::CommerceError;
use shophub_observability::{SessionId, StructuredLogger};

use crate::config::ShopConfig;
use crate::error::{ShopError, ShopResult};
use crate::event::ShopEvent;
use crate::navigation::{Section, View};
use crate::notify::Notification;
use crate::render::{render, Screen};

/// Everything one shopping session owns.
///
/// The owner mutates it only through [`ShopState::dispatch`]; everything
/// else reads it, usually through [`ShopState::render`].
#[derive(Debug, Clone)]
pub struct ShopState {
    config: ShopConfig,
    catalog: Catalog,
    account: AccountData,
    filter: FilterState,
    cart: Cart,
    view: View,
    cart_open: bool,
    menu_open: bool,
    order_tab: OrderTab,
    notification_tab: NotificationTab,
    logger: StructuredLogger,
}

impl ShopState {
    /// Create a session over an already-loaded catalog.
    ///
    /// Fails if the catalog is priced in a different currency than the
    /// config, since cart totals cannot mix currencies.
    pub fn new(config: ShopConfig, catalog: Catalog, logger: StructuredLogger) -> ShopResult<Self> {
        if catalog.currency() != config.currency() {
            return Err(ShopError::Commerce(CommerceError::CurrencyMismatch {
                expected: config.currency().code().to_string(),
                got: catalog.currency().code().to_string(),
            }));
        }

        let mut logger = logger;
        logger.set_view(View::Catalog.name());
        logger
            .info_builder("session started")
            .field("store", config.store.name.clone())
            .field_i64("products", catalog.len() as i64)
            .field("currency", config.currency().code())
            .emit();

        Ok(Self {
            account: AccountData::for_catalog(&catalog),
            cart: Cart::new(config.shipping_policy()),
            config,
            catalog,
            filter: FilterState::default(),
            view: View::Catalog,
            cart_open: false,
            menu_open: false,
            order_tab: OrderTab::default(),
            notification_tab: NotificationTab::default(),
            logger,
        })
    }

    /// Load the catalog named by `config` and start a session with a fresh id.
    pub fn from_config(config: ShopConfig) -> ShopResult<Self> {
        let catalog = config.load_catalog()?;
        let logger = config.logger(SessionId::generate());
        Self::new(config, catalog, logger)
    }

    /// Replace the session logger.
    pub fn with_logger(mut self, mut logger: StructuredLogger) -> Self {
        logger.set_view(self.view.name());
        self.logger = logger;
        self
    }

    /// Get the store configuration.
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Get the product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the shopper's account data.
    pub fn account(&self) -> &AccountData {
        &self.account
    }

    /// Get the current category and search filter.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Get the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get the current view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Check if the cart sheet is open.
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Check if the side menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Get the selected orders tab.
    pub fn order_tab(&self) -> OrderTab {
        self.order_tab
    }

    /// Get the selected notifications tab.
    pub fn notification_tab(&self) -> NotificationTab {
        self.notification_tab
    }

    /// Get the session logger.
    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Catalog products passing the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(self.catalog.products())
    }

    /// Build the view model for the current state.
    pub fn render(&self) -> Screen {
        render(self)
    }

    /// Apply one event.
    ///
    /// Never fails: unknown products and transitions the current view does
    /// not allow are logged at warn level and leave the state unchanged.
    pub fn dispatch(&mut self, event: ShopEvent) -> Option<Notification> {
        let name = event.name();
        self.logger
            .debug_builder("dispatch")
            .field("event", name)
            .emit();

        let from = self.view.name();
        match self.apply(event) {
            Ok(notification) => {
                let to = self.view.name();
                if to != from {
                    self.logger.set_view(to.clone());
                    self.logger
                        .info_builder("view changed")
                        .field("from", from)
                        .field("to", to)
                        .emit();
                }
                notification
            }
            Err(err) => {
                tracing::warn!(event = name, error = %err, "event ignored");
                self.logger
                    .warn_builder("event ignored")
                    .field("event", name)
                    .field("error", err.to_string())
                    .emit();
                None
            }
        }
    }

    fn apply(&mut self, event: ShopEvent) -> ShopResult<Option<Notification>> {
        match event {
            ShopEvent::SelectCategory { category } => {
                self.select_category(category);
                Ok(None)
            }
            ShopEvent::SetSearchQuery { query } => {
                self.filter.query = query;
                Ok(None)
            }
            ShopEvent::SelectProduct { product_id } => {
                let product = self.catalog.require(product_id)?.clone();
                self.view.open_product(product)?;
                self.close_overlays();
                Ok(None)
            }
            ShopEvent::AddToCart {
                product_id,
                quantity,
            } => {
                let product = self.catalog.require(product_id)?.clone();
                Ok(self.add_to_cart(&product, quantity.unwrap_or(1)))
            }
            ShopEvent::UpdateCartQuantity {
                product_id,
                quantity,
            } => {
                let change = self.cart.update_quantity(product_id, quantity);
                self.log_cart_change(change);
                Ok(None)
            }
            ShopEvent::RemoveCartItem { product_id } => {
                let change = self.cart.remove_item(product_id);
                self.log_cart_change(change);
                Ok(change.is_change().then(Notification::removed))
            }
            ShopEvent::OpenCart => {
                self.require_catalog("cart")?;
                self.menu_open = false;
                self.cart_open = true;
                Ok(None)
            }
            ShopEvent::CloseCart => {
                self.cart_open = false;
                Ok(None)
            }
            ShopEvent::OpenMenu => {
                self.require_catalog("menu")?;
                self.cart_open = false;
                self.menu_open = true;
                Ok(None)
            }
            ShopEvent::CloseMenu => {
                self.menu_open = false;
                Ok(None)
            }
            ShopEvent::IncrementDetailQuantity => {
                self.view.increment_quantity()?;
                Ok(None)
            }
            ShopEvent::DecrementDetailQuantity => {
                self.view.decrement_quantity()?;
                Ok(None)
            }
            ShopEvent::AddDetailToCart => {
                let quantity = self.view.detail_quantity().unwrap_or(1);
                let product = self.view.close_product()?;
                Ok(self.add_to_cart(&product, quantity))
            }
            ShopEvent::CloseProductDetail => {
                self.view.close_product()?;
                Ok(None)
            }
            ShopEvent::NavigateToSection { section } => {
                self.view.open_section(section)?;
                self.close_overlays();
                self.order_tab = OrderTab::default();
                self.notification_tab = NotificationTab::default();
                Ok(None)
            }
            ShopEvent::NavigateBack => {
                self.view.back()?;
                Ok(None)
            }
            ShopEvent::AddWishlistItemToCart { product_id } => {
                let product = self
                    .account
                    .wishlist
                    .get(product_id)
                    .cloned()
                    .ok_or(CommerceError::ProductNotFound(product_id))?;
                Ok(self.add_to_cart(&product, 1))
            }
            ShopEvent::SelectOrderTab { tab } => {
                self.order_tab = tab;
                Ok(None)
            }
            ShopEvent::SelectNotificationTab { tab } => {
                self.notification_tab = tab;
                Ok(None)
            }
        }
    }

    fn select_category(&mut self, category: CategorySelection) {
        self.filter.category = category;
        self.logger
            .info_builder("category selected")
            .field("category", category.label())
            .emit();
    }

    fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Option<Notification> {
        let change = self.cart.add_item(product, quantity);
        self.log_cart_change(change);
        change
            .is_change()
            .then(|| Notification::added(&product.name))
    }

    fn close_overlays(&mut self) {
        self.cart_open = false;
        self.menu_open = false;
    }

    fn require_catalog(&self, to: &str) -> ShopResult<()> {
        if self.view.is_catalog() {
            Ok(())
        } else {
            Err(ShopError::InvalidTransition {
                from: self.view.name(),
                to: to.to_string(),
            })
        }
    }

    fn log_cart_change(&self, change: CartChange) {
        let (action, product_id, quantity) = match change {
            CartChange::Added {
                product_id,
                quantity,
            } => ("added", product_id, quantity),
            CartChange::Incremented {
                product_id,
                quantity,
            } => ("incremented", product_id, quantity),
            CartChange::Updated {
                product_id,
                quantity,
            } => ("updated", product_id, quantity),
            CartChange::Removed { product_id } => ("removed", product_id, 0),
            CartChange::Unchanged => return,
        };
        let totals = self.cart.totals();
        self.logger
            .info_builder("cart changed")
            .field("action", action)
            .field_i64("product_id", i64::from(product_id.get()))
            .field_i64("quantity", i64::from(quantity))
            .field_i64("item_count", i64::from(totals.item_count))
            .cents("total", totals.total.amount_cents)
            .emit();
    }

    /// Quantity of a product in the cart, 0 when absent.
    pub fn quantity_in_cart(&self, product_id: ProductId) -> u32 {
        self.cart.quantity_of(product_id)
    }

    /// Section currently shown, if any.
    pub fn section(&self) -> Option<Section> {
        self.view.section()
    }
}

impl Default for ShopState {
    /// The stock store with logging switched off.
    fn default() -> Self {
        let config = ShopConfig::default();
        let catalog = Catalog::builtin_in(config.currency());
        Self {
            account: AccountData::for_catalog(&catalog),
            cart: Cart::new(config.shipping_policy()),
            catalog,
            config,
            filter: FilterState::default(),
            view: View::Catalog,
            cart_open: false,
            menu_open: false,
            order_tab: OrderTab::default(),
            notification_tab: NotificationTab::default(),
            logger: StructuredLogger::disabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_commerce::catalog::Category;
    use shophub_commerce::money::{Currency, Money};
    use shophub_observability::{LogLevel, LogSink};

    fn pid(n: u32) -> ProductId {
        ProductId::new(n)
    }

    fn logged_state() -> ShopState {
        let logger = StructuredLogger::new(SessionId::from_string("test"))
            .with_min_level(LogLevel::Debug)
            .with_sink(LogSink::memory());
        ShopState::default().with_logger(logger)
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShopState>();
    }

    #[test]
    fn test_initial_state() {
        let state = ShopState::default();
        assert!(state.view().is_catalog());
        assert!(state.cart().is_empty());
        assert!(!state.is_cart_open());
        assert!(!state.is_menu_open());
        assert_eq!(state.visible_products().len(), 8);
    }

    #[test]
    fn test_add_notifies_with_product_name() {
        let mut state = ShopState::default();
        let note = state.dispatch(ShopEvent::add(pid(1))).unwrap();
        assert_eq!(note.message, "Premium Wireless Headphones added to cart");
        assert_eq!(state.quantity_in_cart(pid(1)), 1);
    }

    #[test]
    fn test_add_accumulates() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::AddToCart {
            product_id: pid(2),
            quantity: Some(2),
        });
        state.dispatch(ShopEvent::AddToCart {
            product_id: pid(2),
            quantity: Some(3),
        });
        assert_eq!(state.quantity_in_cart(pid(2)), 5);
        assert_eq!(state.cart().line_count(), 1);
    }

    #[test]
    fn test_unknown_product_is_noop() {
        let mut state = logged_state();
        assert!(state.dispatch(ShopEvent::add(pid(99))).is_none());
        assert!(state.dispatch(ShopEvent::select_product(pid(99))).is_none());
        assert!(state.cart().is_empty());
        assert!(state.view().is_catalog());

        let warnings: Vec<_> = state
            .logger()
            .sink()
            .entries()
            .into_iter()
            .filter(|e| e.level == LogLevel::Warn)
            .collect();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_remove_notifies_once() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::add(pid(3)));
        let note = state
            .dispatch(ShopEvent::RemoveCartItem { product_id: pid(3) })
            .unwrap();
        assert_eq!(note, Notification::removed());
        assert!(state.cart().is_empty());

        assert!(state
            .dispatch(ShopEvent::RemoveCartItem { product_id: pid(3) })
            .is_none());
    }

    #[test]
    fn test_update_to_zero_removes_silently() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::add(pid(1)));
        let note = state.dispatch(ShopEvent::UpdateCartQuantity {
            product_id: pid(1),
            quantity: 0,
        });
        assert!(note.is_none());
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_overlays_only_on_catalog() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::OpenMenu);
        assert!(state.is_menu_open());
        state.dispatch(ShopEvent::OpenCart);
        assert!(state.is_cart_open());
        assert!(!state.is_menu_open());

        state.dispatch(ShopEvent::navigate(Section::Settings));
        assert!(!state.is_cart_open());
        state.dispatch(ShopEvent::OpenCart);
        assert!(!state.is_cart_open());
    }

    #[test]
    fn test_section_entry_resets_tabs() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::navigate(Section::Orders));
        state.dispatch(ShopEvent::SelectOrderTab {
            tab: OrderTab::Completed,
        });
        assert_eq!(state.order_tab(), OrderTab::Completed);
        state.dispatch(ShopEvent::NavigateBack);
        state.dispatch(ShopEvent::navigate(Section::Orders));
        assert_eq!(state.order_tab(), OrderTab::Active);
    }

    #[test]
    fn test_wishlist_add_uses_wishlist_products() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::navigate(Section::Wishlist));
        let note = state
            .dispatch(ShopEvent::AddWishlistItemToCart { product_id: pid(11) })
            .unwrap();
        assert_eq!(note.message, "4K Webcam added to cart");
        assert_eq!(state.cart().subtotal(), Money::new(12999, Currency::USD));
        assert_eq!(state.section(), Some(Section::Wishlist));
    }

    #[test]
    fn test_filter_events() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::SelectCategory {
            category: CategorySelection::One(Category::Audio),
        });
        state.dispatch(ShopEvent::search("speaker"));
        let names: Vec<&str> = state
            .visible_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Portable Bluetooth Speaker"]);
    }

    #[test]
    fn test_log_entries_follow_view() {
        let mut state = logged_state();
        state.dispatch(ShopEvent::navigate(Section::Help));
        state.dispatch(ShopEvent::NavigateBack);
        let entries = state.logger().sink().entries();
        let seqs: Vec<u64> = entries.iter().map(|e| e.seq).collect();
        assert!(seqs.windows(2).all(|w| w[0] < w[1]));

        let changes: Vec<_> = entries
            .iter()
            .filter(|e| e.message == "view changed")
            .collect();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].view.as_deref(), Some("section:help"));
        assert_eq!(changes[0].field("from"), Some(&serde_json::json!("catalog")));
        assert_eq!(changes[1].view.as_deref(), Some("catalog"));
        assert_eq!(changes[1].field("from"), Some(&serde_json::json!("section:help")));

        let back = &entries[entries.len() - 2];
        assert_eq!(back.field("event"), Some(&serde_json::json!("navigate_back")));
        assert_eq!(back.view.as_deref(), Some("section:help"));
    }

    #[test]
    fn test_filter_events_do_not_log_view_change() {
        let mut state = logged_state();
        state.dispatch(ShopEvent::search("pro"));
        state.dispatch(ShopEvent::OpenCart);
        assert!(state
            .logger()
            .sink()
            .entries()
            .iter()
            .all(|e| e.message != "view changed"));
    }

    #[test]
    fn test_wishlist_ids_follow_loaded_catalog() {
        let catalog = Catalog::new(
            vec![Product::new(
                pid(1),
                "Desk Mic",
                Money::new(1000, Currency::USD),
                Category::Audio,
            )],
            Currency::USD,
        )
        .unwrap();
        let mut state =
            ShopState::new(ShopConfig::default(), catalog, StructuredLogger::disabled()).unwrap();

        state.dispatch(ShopEvent::add(pid(1)));
        let note = state
            .dispatch(ShopEvent::AddWishlistItemToCart { product_id: pid(1) })
            .unwrap();
        assert_eq!(note.message, "Desk Mic added to cart");
        assert_eq!(state.cart().line_count(), 1);
        assert_eq!(state.quantity_in_cart(pid(1)), 2);
        assert_eq!(state.cart().subtotal(), Money::new(2000, Currency::USD));

        let note = state
            .dispatch(ShopEvent::AddWishlistItemToCart { product_id: pid(9) })
            .unwrap();
        assert_eq!(note.message, "Gaming Mouse Pro added to cart");
        assert_eq!(state.cart().line_count(), 2);
    }

    #[test]
    fn test_huge_quantities_do_not_panic() {
        let mut state = ShopState::default();
        state.dispatch(ShopEvent::AddToCart {
            product_id: pid(1),
            quantity: Some(u32::MAX),
        });
        state.dispatch(ShopEvent::AddToCart {
            product_id: pid(2),
            quantity: Some(1),
        });
        assert_eq!(state.cart().item_count(), u32::MAX);
        let Screen::Catalog(screen) = state.render() else {
            panic!("expected catalog");
        };
        assert_eq!(screen.header.cart_badge, Some(u32::MAX));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let config = ShopConfig::default();
        let catalog = Catalog::builtin_in(Currency::EUR);
        let err = ShopState::new(config, catalog, StructuredLogger::disabled()).unwrap_err();
        assert!(matches!(
            err,
            ShopError::Commerce(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
