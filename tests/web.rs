//! Browser tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use storefront_cart::badge::{BadgeRenderer, BadgeView};
use storefront_cart::cart::{Cart, CartProduct};
use storefront_cart::config::StorefrontConfig;
use storefront_cart::modal::ProductDescriptor;
use storefront_cart::storage::{load_cart, save_cart, CartStorage, LocalStorage};
use storefront_cart::timer::sleep;
use storefront_cart::ui::badge::DomBadge;
use storefront_cart::ui::modal::ModalView;
use storefront_cart::ui::{dom, modal_tabs, search};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlImageElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> Element {
    let document = dom::document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

const MODAL_HTML: &str = r#"
    <div id="productModal">
        <img id="modalImage">
        <h2 id="modalTitle"></h2>
        <span id="modalCurrentPrice"></span>
        <span id="modalOriginalPrice"></span>
        <span id="modalStock"></span>
        <p id="modalDescription"></p>
        <input id="quantityInput" value="1">
    </div>
"#;

/// Poll until `done` holds, giving the browser a few seconds at most.
async fn wait_until(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..60 {
        if done() {
            return true;
        }
        sleep(50).await;
    }
    done()
}

fn display(el: &Element) -> String {
    el.dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

#[wasm_bindgen_test]
fn test_product_descriptor_from_data_attributes() {
    let root = mount(
        r#"<div id="card-kopi" data-product-id="7" data-name="Kopi" data-price="15000"
               data-image="kopi.jpg" data-description="Kopi tubruk"></div>"#,
    );
    let card = root.query_selector("#card-kopi").unwrap().unwrap();

    let product = ProductDescriptor::from_element(&card);

    assert_eq!(product.id, "7");
    assert_eq!(product.name, "Kopi");
    assert_eq!(product.price, "15000");
    assert_eq!(product.description, "Kopi tubruk");
    root.remove();
}

#[wasm_bindgen_test]
fn test_dom_badge_render() {
    let root = mount(r#"<span class="test-badge"></span><span class="test-badge"></span>"#);
    let badge = DomBadge::new(".test-badge");

    badge.render(BadgeView { total: 4 });
    for el in dom::query_all(&root, ".test-badge") {
        assert_eq!(el.text_content().unwrap(), "4");
        assert_eq!(display(&el), "flex");
    }

    badge.render(BadgeView { total: 0 });
    for el in dom::query_all(&root, ".test-badge") {
        assert_eq!(el.text_content().unwrap(), "0");
        assert_eq!(display(&el), "none");
    }
    root.remove();
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let storage = LocalStorage::open().unwrap();
    let mut cart = Cart::new();
    cart.add(
        CartProduct {
            product_id: "3".to_string(),
            name: "Teh".to_string(),
            price: 8000,
            image: "teh.jpg".to_string(),
        },
        2,
    );

    save_cart(&storage, "storefront_test_cart", &cart).unwrap();

    assert_eq!(load_cart(&storage, "storefront_test_cart"), cart);

    storage.write("storefront_test_cart", "not json").unwrap();
    assert!(load_cart(&storage, "storefront_test_cart").is_empty());
}

#[wasm_bindgen_test]
fn test_activate_exclusive() {
    let root = mount(r#"<button class="b active"></button><button class="b"></button>"#);
    let buttons = dom::query_all(&root, ".b");

    dom::activate_exclusive(&buttons, &buttons[1]);

    assert!(!buttons[0].class_list().contains("active"));
    assert!(buttons[1].class_list().contains("active"));
    root.remove();
}

#[wasm_bindgen_test]
fn test_storefront_modal_to_checkout() {
    let window = web_sys::window().unwrap();
    window.local_storage().unwrap().unwrap().remove_item("cart").unwrap();

    let root = mount(
        r#"
        <span class="cart-badge"></span>
        <div id="kopi" data-product-id="7" data-name="Kopi" data-price="15000"
             data-image="kopi.jpg" data-description="Kopi tubruk"></div>
        <div id="teh" data-product-id="9" data-name="Teh" data-price="8000"
             data-image="teh.jpg" data-description="Teh manis"></div>
        <div id="productModal">
            <img id="modalImage">
            <h2 id="modalTitle"></h2>
            <span id="modalCurrentPrice"></span>
            <span id="modalOriginalPrice"></span>
            <span id="modalStock"></span>
            <p id="modalDescription"></p>
            <input id="quantityInput" value="1">
        </div>
        <form id="checkout-form" action="javascript:void(0)"></form>
        "#,
    );
    let document = dom::document().unwrap();

    storefront_cart::start_storefront(wasm_bindgen::JsValue::UNDEFINED);
    assert_eq!(storefront_cart::cart_count(), 0);

    let kopi = root.query_selector("#kopi").unwrap().unwrap();
    storefront_cart::open_product_modal(kopi);

    let modal = document.get_element_by_id("productModal").unwrap();
    assert!(modal.class_list().contains("open"));
    assert_eq!(
        document.get_element_by_id("modalCurrentPrice").unwrap().text_content().unwrap(),
        "IDR 15.000"
    );

    storefront_cart::increase_quantity();
    storefront_cart::decrease_quantity();
    storefront_cart::decrease_quantity();
    storefront_cart::increase_quantity();
    let quantity: HtmlInputElement = dom::by_id(&document, "quantityInput").unwrap();
    assert_eq!(quantity.value(), "2");

    storefront_cart::add_to_cart_from_modal();
    assert!(!modal.class_list().contains("open"));
    assert_eq!(storefront_cart::cart_count(), 2);

    let teh = root.query_selector("#teh").unwrap().unwrap();
    storefront_cart::open_product_modal(teh);
    assert_eq!(quantity.value(), "1");
    storefront_cart::add_to_cart_from_modal();

    let badge = root.query_selector(".cart-badge").unwrap().unwrap();
    assert_eq!(badge.text_content().unwrap(), "3");
    assert_eq!(display(&badge), "flex");

    let form = document.get_element_by_id("checkout-form").unwrap();
    let init = EventInit::new();
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&submit).unwrap();

    let field: HtmlInputElement = form
        .query_selector("input[name=\"cart_data\"]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let payload: serde_json::Value = serde_json::from_str(&field.value()).unwrap();
    assert_eq!(payload.as_object().unwrap().len(), 2);
    assert_eq!(payload["7"]["quantity"], 2);
    assert_eq!(payload["9"]["name"], "Teh");

    root.remove();
}

#[wasm_bindgen_test]
async fn test_modal_image_falls_back_to_placeholder() {
    let root = mount(MODAL_HTML);
    let document = dom::document().unwrap();
    let placeholder = StorefrontConfig::default().placeholder_image;
    let view = ModalView::find(&document, &placeholder).unwrap();
    let image: HtmlImageElement = dom::by_id(&document, "modalImage").unwrap();

    image.set_src("data:image/png;base64,broken");

    assert!(wait_until(|| image.src() == placeholder).await);
    image.set_onerror(None);
    drop(view);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_modal_image_placeholder_is_not_retried() {
    let root = mount(MODAL_HTML);
    let document = dom::document().unwrap();
    let placeholder = "data:image/gif;base64,missing";
    let view = ModalView::find(&document, placeholder).unwrap();
    let image: HtmlImageElement = dom::by_id(&document, "modalImage").unwrap();

    let errors = Rc::new(Cell::new(0u32));
    let counter = errors.clone();
    dom::on(&image, "error", move |_| counter.set(counter.get() + 1));

    image.set_src("data:image/png;base64,broken");

    // the broken image and then the broken placeholder
    assert!(wait_until(|| errors.get() >= 2).await);
    sleep(300).await;
    assert_eq!(errors.get(), 2);
    assert_eq!(image.src(), placeholder);
    image.set_onerror(None);
    drop(view);
    root.remove();
}

#[wasm_bindgen_test]
fn test_modal_tabs_switch_panes() {
    let root = mount(
        r#"
        <button class="modal-tab-btn active" data-tab="description"></button>
        <button class="modal-tab-btn" data-tab="reviews"></button>
        <div class="modal-tab-content active" id="tab-description"></div>
        <section><div id="tab-reviews"></div></section>
        "#,
    );
    modal_tabs::init(&root);
    let buttons = dom::query_all(&root, ".modal-tab-btn");

    buttons[1].dyn_ref::<HtmlElement>().unwrap().click();

    assert!(!buttons[0].class_list().contains("active"));
    assert!(buttons[1].class_list().contains("active"));
    let description = root.query_selector("#tab-description").unwrap().unwrap();
    let reviews = root.query_selector("#tab-reviews").unwrap().unwrap();
    assert!(!description.class_list().contains("active"));
    assert!(reviews.class_list().contains("active"));

    buttons[0].dyn_ref::<HtmlElement>().unwrap().click();

    assert!(buttons[0].class_list().contains("active"));
    assert!(description.class_list().contains("active"));
    root.remove();
}

#[wasm_bindgen_test]
fn test_search_filters_product_cards() {
    let root = mount(
        r#"
        <input class="search-input">
        <div class="product-card" data-name="Kopi Susu"></div>
        <div class="product-card" data-name="Teh Tarik"></div>
        <div class="product-card" data-name="Es Kopi"></div>
        "#,
    );
    let document = dom::document().unwrap();
    search::init(&document);
    let input: HtmlInputElement = root
        .query_selector(".search-input")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let cards = dom::query_all(&root, ".product-card");

    input.set_value("KOPI");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();

    let shown: Vec<String> = cards.iter().map(display).collect();
    assert_eq!(shown, ["flex", "none", "flex"]);

    input.set_value("");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();

    assert!(cards.iter().all(|card| display(card) == "flex"));
    root.remove();
}
