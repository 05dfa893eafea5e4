/// Storefront Cart - client-side cart, product modal and page widgets
/// Built with Rust + WASM + Yew
///
/// The page loader calls `startStorefront(config)` and exposes the exported
/// handlers on `window` so the server-rendered markup can reference them from
/// `onclick` attributes.

pub mod badge;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod modal;
pub mod money;
pub mod navigation;
pub mod storage;
pub mod store;
pub mod timer;
pub mod ui;

use config::StorefrontConfig;
use ui::storefront::{with_storefront, Storefront};
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Hydrate the cart and wire up the page once the DOM is ready.
#[wasm_bindgen(js_name = startStorefront)]
pub fn start_storefront(config: JsValue) {
    let config = StorefrontConfig::from_js(config).unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        StorefrontConfig::default()
    });

    let Some(document) = ui::dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        ui::dom::on(&document, "DOMContentLoaded", move |_| boot(config.clone()));
    } else {
        boot(config);
    }
}

fn boot(config: StorefrontConfig) {
    if let Some(storefront) = Storefront::install(config) {
        ui::init(&storefront);
        log::info!("Storefront ready with {} items in cart", storefront.cart_count());
    }
}

#[wasm_bindgen(js_name = openProductModal)]
pub fn open_product_modal(element: web_sys::Element) {
    with_storefront(|s| s.open_product(&element));
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    with_storefront(|s| s.close_modal());
}

#[wasm_bindgen(js_name = increaseQuantity)]
pub fn increase_quantity() {
    with_storefront(|s| s.increase_quantity());
}

#[wasm_bindgen(js_name = decreaseQuantity)]
pub fn decrease_quantity() {
    with_storefront(|s| s.decrease_quantity());
}

#[wasm_bindgen(js_name = addToCartFromModal)]
pub fn add_to_cart_from_modal() {
    with_storefront(|s| s.add_from_modal());
}

#[wasm_bindgen(js_name = buyNowFromModal)]
pub fn buy_now_from_modal() {
    with_storefront(|s| s.buy_now());
}

#[wasm_bindgen(js_name = toggleFavoriteModal)]
pub fn toggle_favorite_modal() {
    with_storefront(|s| s.toggle_favorite_modal());
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str) {
    with_storefront(|s| s.notify(message));
}

/// Total quantity in the cart, 0 before the storefront is started
#[wasm_bindgen(js_name = cartCount)]
pub fn cart_count() -> u32 {
    with_storefront(|s| s.cart_count())
        .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
        .unwrap_or(0)
}
