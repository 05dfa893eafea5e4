/// Small helpers over web-sys for the page widgets

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element under `root` matching `selector`, in document order.
/// An invalid selector yields nothing.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(elements).unwrap_or_default()
}

pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    document.query_selector_all(selector).map(elements).unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Could not listen for {}: {:?}", event, e);
        return;
    }
    closure.forget();
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_display(el: &Element, visible: bool, shown_as: &str) {
    set_style(el, "display", if visible { shown_as } else { "none" });
}

/// Make `active` the only element in `group` carrying the `active` class.
pub fn activate_exclusive(group: &[Element], active: &Element) {
    for el in group {
        let _ = el.class_list().remove_1("active");
    }
    let _ = active.class_list().add_1("active");
}

pub fn data(el: &Element, name: &str) -> Option<String> {
    el.dyn_ref::<HtmlElement>().and_then(|html| html.dataset().get(name))
}
