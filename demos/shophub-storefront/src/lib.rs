//! ShopHub browser storefront
//!
//! A client-side Leptos app over `shophub-core`:
//! - One `ShopState` held in a signal
//! - Every click becomes a `ShopEvent` passed to `dispatch`
//! - The page is whatever `ShopState::render` returns
//! - Session log entries shown in a debug panel

mod app;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
