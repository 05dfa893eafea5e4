/// Product search filter

use crate::ui::dom;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

const SEARCH_INPUT: &str = ".search-input";
const PRODUCT_CARD: &str = ".product-card";

/// Case-insensitive substring match of a product name against the query
pub fn matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

pub fn init(document: &Document) {
    let Some(input) = document
        .query_selector(SEARCH_INPUT)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let doc = document.clone();
    let target = input.clone();
    dom::on(&input, "input", move |_| {
        let query = target.value().to_lowercase();
        for card in dom::query_document(&doc, PRODUCT_CARD) {
            let name = dom::data(&card, "name").unwrap_or_default();
            dom::set_display(&card, matches(&name, &query), "flex");
        }
    });
}
