/// Checkout form submit guard

use crate::checkout::{prepare_checkout, CheckoutOutcome, CART_FIELD};
use crate::navigation::navigate;
use crate::ui::dom;
use crate::ui::storefront::Storefront;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement};

const CHECKOUT_FORM_ID: &str = "checkout-form";

pub fn init(document: &Document, storefront: Rc<Storefront>) {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, CHECKOUT_FORM_ID) else {
        return;
    };

    let doc = document.clone();
    let target = form.clone();
    dom::on(&form, "submit", move |event| {
        let outcome = storefront.with_cart(prepare_checkout);

        match outcome {
            Ok(CheckoutOutcome::RejectEmpty) => {
                event.prevent_default();
                let config = storefront.config();
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&config.empty_cart_message);
                }
                navigate(&config.products_path);
            }
            Ok(CheckoutOutcome::Submit(json)) => match cart_input(&doc, &target) {
                Some(input) => input.set_value(&json),
                None => {
                    event.prevent_default();
                    log::error!("Checkout form has no usable {} field", CART_FIELD);
                }
            },
            Err(e) => {
                event.prevent_default();
                log::error!("Could not serialize cart for checkout: {}", e);
            }
        }
    });
}

/// The form's hidden cart field, created on first submit.
fn cart_input(document: &Document, form: &HtmlFormElement) -> Option<HtmlInputElement> {
    let selector = format!("input[name=\"{}\"]", CART_FIELD);
    if let Ok(Some(existing)) = form.query_selector(&selector) {
        return existing.dyn_into::<HtmlInputElement>().ok();
    }

    let input = document
        .create_element("input")
        .ok()?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    input.set_type("hidden");
    input.set_name(CART_FIELD);

    form.append_child(&input).ok()?;
    Some(input)
}
