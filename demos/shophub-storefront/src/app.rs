//! Application components.
//!
//! Components never decide anything about the shop. They draw the view
//! models `ShopState::render` returns and send back the events those view
//! models carry.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_meta::*;
use shophub_core::config::{LoggingConfig, SinkKind};
use shophub_core::prelude::*;
use shophub_core::render::{ChipView, HeaderView, SEARCH_PLACEHOLDER};
use shophub_core::views::{CardView, CartLineView, TabView};
use shophub_observability::LogLevel;

const TOAST_MS: u64 = 2500;
const LOG_LINES: usize = 12;

// ============================================================================
// Shop handle
// ============================================================================

/// Signals shared by every component.
#[derive(Clone, Copy)]
struct Shop {
    state: RwSignal<ShopState>,
    /// Current toast, tagged so a stale timer does not hide a newer one.
    toast: RwSignal<Option<(u32, Notification)>>,
}

impl Shop {
    fn new(state: ShopState) -> Self {
        Self {
            state: RwSignal::new(state),
            toast: RwSignal::new(None),
        }
    }

    fn dispatch(&self, event: ShopEvent) {
        let mut notification = None;
        self.state
            .update(|state| notification = state.dispatch(event));
        let Some(notification) = notification else {
            return;
        };

        let seq = self
            .toast
            .with_untracked(|t| t.as_ref().map_or(0, |(n, _)| n.wrapping_add(1)));
        self.toast.set(Some((seq, notification)));

        let toast = self.toast;
        set_timeout(
            move || {
                toast.update(|t| {
                    if t.as_ref().is_some_and(|(n, _)| *n == seq) {
                        *t = None;
                    }
                })
            },
            Duration::from_millis(TOAST_MS),
        );
    }

    fn on(self, event: ShopEvent) -> impl Fn(MouseEvent) + 'static {
        move |_| self.dispatch(event.clone())
    }

    /// Handler for a control that may have no event.
    fn on_maybe(self, event: Option<ShopEvent>) -> impl Fn(MouseEvent) + 'static {
        move |_| {
            if let Some(event) = event.clone() {
                self.dispatch(event);
            }
        }
    }
}

fn session_config() -> ShopConfig {
    ShopConfig {
        logging: LoggingConfig {
            level: LogLevel::Debug,
            sink: SinkKind::Memory,
            memory_capacity: 200,
            ..LoggingConfig::default()
        },
        ..ShopConfig::default()
    }
}

fn stars(full: u8) -> String {
    (0..5)
        .map(|i| if i < full { '\u{2605}' } else { '\u{2606}' })
        .collect()
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let body = match ShopState::from_config(session_config()) {
        Ok(state) => view! { <Storefront shop=Shop::new(state)/> }.into_any(),
        Err(err) => view! {
            <p class="error">"Could not start the shop: " {err.to_string()}</p>
        }
        .into_any(),
    };

    view! {
        <Meta name="description" content="ShopHub - gadgets, audio and more"/>
        <Title text="ShopHub"/>
        {body}
    }
}

#[component]
fn Storefront(shop: Shop) -> impl IntoView {
    let screen = Memo::new(move |_| shop.state.with(|state| state.render()));
    let page = Memo::new(move |_| screen.with(|s| s.name()));

    view! {
        <div class="app">
            {move || match page.get() {
                "catalog" => view! { <CatalogPage shop=shop screen=screen/> }.into_any(),
                _ => view! { <InnerPage shop=shop screen=screen/> }.into_any(),
            }}
            <Toast shop=shop/>
            <LogPanel shop=shop/>
        </div>
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The grid page. Its search box stays mounted while the catalog is shown
/// so typing does not lose focus.
#[component]
fn CatalogPage(shop: Shop, screen: Memo<Screen>) -> impl IntoView {
    let catalog = Memo::new(move |_| {
        screen.with(|s| match s {
            Screen::Catalog(c) => Some(c.clone()),
            _ => None,
        })
    });
    let query = move || {
        catalog.with(|c| {
            c.as_ref()
                .map(|c| c.search.value.clone())
                .unwrap_or_default()
        })
    };

    view! {
        {move || catalog.with(|c| {
            c.as_ref().map(|c| view! { <Header shop=shop header=c.header.clone()/> })
        })}
        <div class="search">
            <input
                type="search"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=query
                on:input=move |ev| shop.dispatch(ShopEvent::search(event_target_value(&ev)))
            />
        </div>
        <div class="chips">
            {move || catalog.with(|c| {
                c.iter()
                    .flat_map(|c| c.chips.iter())
                    .map(|chip| view! { <Chip shop=shop chip=chip.clone()/> })
                    .collect::<Vec<_>>()
            })}
        </div>
        {move || catalog.with(|c| {
            c.as_ref()
                .and_then(|c| c.empty.clone())
                .map(|message| view! { <p class="empty">{message}</p> })
        })}
        <div class="products">
            {move || catalog.with(|c| {
                c.iter()
                    .flat_map(|c| c.products.iter())
                    .map(|card| view! { <ProductCard shop=shop card=card.clone()/> })
                    .collect::<Vec<_>>()
            })}
        </div>
        {move || catalog.with(|c| {
            c.as_ref()
                .and_then(|c| c.cart.clone())
                .map(|sheet| view! { <CartSheet shop=shop sheet=sheet/> })
        })}
        {move || catalog.with(|c| {
            c.as_ref()
                .and_then(|c| c.menu.clone())
                .map(|menu| view! { <Menu shop=shop menu=menu/> })
        })}
    }
}

#[component]
fn Header(shop: Shop, header: HeaderView) -> impl IntoView {
    let HeaderView {
        title,
        cart_badge,
        on_menu,
        on_cart,
    } = header;

    view! {
        <header class="header">
            <button class="icon" on:click=shop.on(on_menu)>"Menu"</button>
            <h1>{title}</h1>
            <button class="icon cart" on:click=shop.on(on_cart)>
                "Cart"
                {cart_badge.map(|n| view! { <span class="badge">{n.to_string()}</span> })}
            </button>
        </header>
    }
}

#[component]
fn Chip(shop: Shop, chip: ChipView) -> impl IntoView {
    let ChipView {
        label,
        selected,
        on_select,
    } = chip;

    view! {
        <button class="chip" class:selected=selected on:click=shop.on(on_select)>
            {label}
        </button>
    }
}

#[component]
fn ProductCard(shop: Shop, card: ProductCardView) -> impl IntoView {
    let ProductCardView {
        name,
        image,
        category,
        price,
        original_price,
        discount_badge,
        full_stars,
        reviews,
        on_select,
        on_add,
        ..
    } = card;
    let alt = name.clone();

    view! {
        <div class="product-card">
            <div class="product-image" on:click=shop.on_maybe(on_select)>
                <img src=image alt=alt/>
                {discount_badge.map(|d| view! { <span class="discount">{d}</span> })}
            </div>
            <div class="product-info">
                <p class="category">{category}</p>
                <h3>{name}</h3>
                <p class="rating">{stars(full_stars)} " " {reviews}</p>
                <p class="price">
                    {price}
                    {original_price.map(|p| view! { <s>{p}</s> })}
                </p>
                <button class="btn" on:click=shop.on(on_add)>"Add to Cart"</button>
            </div>
        </div>
    }
}

// ============================================================================
// Overlays
// ============================================================================

#[component]
fn CartSheet(shop: Shop, sheet: CartSheetView) -> impl IntoView {
    let close = sheet.on_close();
    let CartSheetView {
        title,
        lines,
        empty,
        subtotal,
        shipping,
        total,
        checkout_label,
    } = sheet;

    let body = match empty {
        Some(empty) => view! {
            <div class="empty">
                <h3>{empty.title}</h3>
                <p>{empty.message}</p>
                <button class="btn" on:click=shop.on(empty.on_action)>{empty.action_label}</button>
            </div>
        }
        .into_any(),
        None => view! {
            <ul class="cart-lines">
                {lines
                    .into_iter()
                    .map(|line| view! { <CartLine shop=shop line=line/> })
                    .collect::<Vec<_>>()}
            </ul>
            <dl class="totals">
                <dt>"Subtotal"</dt>
                <dd>{subtotal}</dd>
                <dt>"Shipping"</dt>
                <dd>{shipping}</dd>
                <dt class="total">"Total"</dt>
                <dd class="total">{total}</dd>
            </dl>
            <button class="btn checkout">{checkout_label}</button>
        }
        .into_any(),
    };

    view! {
        <div class="overlay" on:click=shop.on(close.clone())></div>
        <aside class="sheet cart-sheet">
            <div class="sheet-header">
                <h2>{title}</h2>
                <button class="icon" on:click=shop.on(close)>"Close"</button>
            </div>
            {body}
        </aside>
    }
}

#[component]
fn CartLine(shop: Shop, line: CartLineView) -> impl IntoView {
    let CartLineView {
        name,
        image,
        price,
        quantity,
        line_total,
        can_decrement,
        on_increment,
        on_decrement,
        on_remove,
        ..
    } = line;
    let alt = name.clone();

    view! {
        <li class="cart-line">
            <img src=image alt=alt/>
            <div class="cart-line-info">
                <h4>{name}</h4>
                <p class="muted">{price}</p>
                <div class="stepper">
                    <button disabled=!can_decrement on:click=shop.on_maybe(on_decrement)>"-"</button>
                    <span>{quantity.to_string()}</span>
                    <button on:click=shop.on(on_increment)>"+"</button>
                </div>
            </div>
            <div class="cart-line-end">
                <strong>{line_total}</strong>
                <button class="link" on:click=shop.on(on_remove)>"Remove"</button>
            </div>
        </li>
    }
}

#[component]
fn Menu(shop: Shop, menu: MenuView) -> impl IntoView {
    let close = menu.on_close();
    let MenuView {
        user_name,
        user_email,
        avatar,
        initials,
        groups,
        footer,
    } = menu;

    view! {
        <div class="overlay" on:click=shop.on(close)></div>
        <aside class="sheet menu">
            <div class="menu-user">
                <img src=avatar alt=initials/>
                <div>
                    <p class="name">{user_name}</p>
                    <p class="muted">{user_email}</p>
                </div>
            </div>
            {groups
                .into_iter()
                .map(|group| view! {
                    <nav class="menu-group">
                        <h4>{group.title}</h4>
                        {group
                            .entries
                            .into_iter()
                            .map(|entry| view! {
                                <button class="menu-entry" on:click=shop.on(entry.on_select)>
                                    {entry.label}
                                    {entry.badge.map(|b| view! { <span class="badge">{b}</span> })}
                                </button>
                            })
                            .collect::<Vec<_>>()}
                    </nav>
                })
                .collect::<Vec<_>>()}
            <footer>
                {footer.into_iter().map(|line| view! { <p>{line}</p> }).collect::<Vec<_>>()}
            </footer>
        </aside>
    }
}

// ============================================================================
// Product detail and sections
// ============================================================================

#[component]
fn InnerPage(shop: Shop, screen: Memo<Screen>) -> impl IntoView {
    move || {
        screen.with(|screen| match screen {
            Screen::ProductDetail(detail) => {
                view! { <DetailPage shop=shop detail=detail.clone()/> }.into_any()
            }
            Screen::Section(section) => {
                view! { <SectionPage shop=shop section=section.clone()/> }.into_any()
            }
            Screen::Catalog(_) => "".into_any(),
        })
    }
}

#[component]
fn DetailPage(shop: Shop, detail: ProductDetailView) -> impl IntoView {
    let (close, increment, decrement, add) = (
        detail.on_close(),
        detail.on_increment(),
        detail.on_decrement(),
        detail.on_add(),
    );
    let ProductDetailView {
        name,
        image,
        category,
        price,
        original_price,
        discount_badge,
        full_stars,
        reviews,
        description,
        features,
        quantity,
        can_decrement,
        add_label,
        ..
    } = detail;
    let alt = name.clone();

    view! {
        <article class="detail">
            <button class="back" on:click=shop.on(close)>"Back"</button>
            <div class="detail-image">
                <img src=image alt=alt/>
                {discount_badge.map(|d| view! { <span class="discount">{d}</span> })}
            </div>
            <p class="category">{category}</p>
            <h1>{name}</h1>
            <p class="rating">{stars(full_stars)} " " {reviews}</p>
            <p class="price">
                {price}
                {original_price.map(|p| view! { <s>{p}</s> })}
            </p>
            <h3>"Description"</h3>
            <p>{description}</p>
            <h3>"Features"</h3>
            <ul>{features.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}</ul>
            <div class="stepper">
                <button disabled=!can_decrement on:click=shop.on(decrement)>"-"</button>
                <span>{quantity.to_string()}</span>
                <button on:click=shop.on(increment)>"+"</button>
            </div>
            <button class="btn add" on:click=shop.on(add)>{add_label}</button>
        </article>
    }
}

#[component]
fn SectionPage(shop: Shop, section: SectionView) -> impl IntoView {
    let SectionView {
        title,
        subtitle,
        blocks,
        on_back,
        ..
    } = section;

    view! {
        <article class="section">
            <header class="section-header">
                <button class="back" on:click=shop.on(on_back)>"Back"</button>
                <h1>{title}</h1>
                {subtitle.map(|s| view! { <span class="subtitle">{s}</span> })}
            </header>
            {blocks
                .into_iter()
                .map(|block| view! { <BlockView shop=shop block=block/> })
                .collect::<Vec<_>>()}
        </article>
    }
}

#[component]
fn BlockView(shop: Shop, block: Block) -> impl IntoView {
    match block {
        Block::Heading { text } => view! { <h3>{text}</h3> }.into_any(),
        Block::Paragraph { text } => view! { <p>{text}</p> }.into_any(),
        Block::Avatar {
            image,
            name,
            caption,
        } => {
            let alt = name.clone();
            view! {
                <div class="avatar">
                    <img src=image alt=alt/>
                    <h2>{name}</h2>
                    <p class="muted">{caption}</p>
                </div>
            }
            .into_any()
        }
        Block::Fields { items } => view! {
            <dl class="fields">
                {items
                    .into_iter()
                    .map(|f| view! { <dt>{f.label}</dt><dd>{f.value}</dd> })
                    .collect::<Vec<_>>()}
            </dl>
        }
        .into_any(),
        Block::Stats { items } => view! {
            <div class="stats">
                {items
                    .into_iter()
                    .map(|f| view! { <div class="stat"><strong>{f.value}</strong><span>{f.label}</span></div> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Block::Tabs { tabs } => view! {
            <div class="tabs">
                {tabs
                    .into_iter()
                    .map(|tab| view! { <Tab shop=shop tab=tab/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        Block::Card(card) => view! { <Card shop=shop card=card/> }.into_any(),
        Block::Product(card) => view! { <ProductCard shop=shop card=card/> }.into_any(),
        Block::Toggle {
            label,
            description,
            on,
        } => view! {
            <label class="toggle">
                <div>
                    <p>{label}</p>
                    <p class="muted">{description}</p>
                </div>
                <input type="checkbox" checked=on disabled=true/>
            </label>
        }
        .into_any(),
        Block::Select {
            label,
            value,
            options,
        } => view! {
            <label class="select">
                {label}
                <select>
                    {options
                        .into_iter()
                        .map(|option| {
                            let selected = option.label == value;
                            view! { <option value=option.label selected=selected>{option.value}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        }
        .into_any(),
        Block::Links { items } => view! {
            <ul class="links">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        Block::Button(action) => view! {
            <button class="btn" on:click=shop.on_maybe(action.on_select)>{action.label}</button>
        }
        .into_any(),
        Block::Empty { title, message } => view! {
            <div class="empty">
                <h3>{title}</h3>
                <p class="muted">{message}</p>
            </div>
        }
        .into_any(),
        Block::Note { title, text } => view! {
            <aside class="note">
                <strong>{title}</strong>
                <p>{text}</p>
            </aside>
        }
        .into_any(),
    }
}

#[component]
fn Tab(shop: Shop, tab: TabView) -> impl IntoView {
    let TabView {
        label,
        count,
        selected,
        on_select,
    } = tab;

    view! {
        <button class="tab" class:selected=selected on:click=shop.on(on_select)>
            {label}
            {count.map(|c| view! { <span class="badge">{c.to_string()}</span> })}
        </button>
    }
}

#[component]
fn Card(shop: Shop, card: CardView) -> impl IntoView {
    let CardView {
        title,
        subtitle,
        image,
        badges,
        lines,
        trailing,
        highlighted,
        actions,
    } = card;

    view! {
        <div class="card" class:highlighted=highlighted>
            {image.map(|src| view! { <img src=src alt=""/> })}
            <div class="card-body">
                <div class="card-title">
                    <h4>{title}</h4>
                    {badges
                        .into_iter()
                        .map(|b| view! { <span class="badge">{b}</span> })
                        .collect::<Vec<_>>()}
                    {trailing.map(|t| view! { <span class="trailing">{t}</span> })}
                </div>
                {subtitle.map(|s| view! { <p class="muted">{s}</p> })}
                {lines.into_iter().map(|l| view! { <p>{l}</p> }).collect::<Vec<_>>()}
                <div class="card-actions">
                    {actions
                        .into_iter()
                        .map(|a| view! {
                            <button class="link" on:click=shop.on_maybe(a.on_select)>{a.label}</button>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Toast and debug panel
// ============================================================================

#[component]
fn Toast(shop: Shop) -> impl IntoView {
    move || {
        shop.toast.get().map(|(_, notification)| {
            let class = match notification.kind {
                NotificationKind::Success => "toast success",
                NotificationKind::Removal => "toast removal",
            };
            view! { <div class=class>{notification.message}</div> }
        })
    }
}

/// The newest session log lines, read from the in-memory sink.
#[component]
fn LogPanel(shop: Shop) -> impl IntoView {
    let session = shop
        .state
        .with_untracked(|s| s.logger().session_id().to_string());
    let lines = move || {
        shop.state.with(|s| {
            s.logger()
                .sink()
                .recent(LOG_LINES)
                .iter()
                .map(|e| e.to_human())
                .collect::<Vec<_>>()
                .join("\n")
        })
    };

    view! {
        <details class="log-panel">
            <summary>"Session log " {session}</summary>
            <pre>{lines}</pre>
        </details>
    }
}
