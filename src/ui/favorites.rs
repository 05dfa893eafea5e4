/// Favorite (wishlist) buttons. Visual only, nothing is stored.

use crate::ui::dom;
use web_sys::{Document, Element};

const FAVORITE_BUTTON: &str = ".favorite-btn";
pub const FAVORITE_MODAL_BUTTON: &str = ".favorite-modal-btn";
const FAVORITED: &str = "favorited";

pub fn icon_color(favorited: bool) -> &'static str {
    if favorited { "#ef4444" } else { "#64748b" }
}

pub fn wishlist_message(favorited: bool) -> &'static str {
    if favorited {
        "Ditambahkan ke Wishlist"
    } else {
        "Dihapus dari Wishlist"
    }
}

/// Flip the favorited class; returns the new state.
pub fn toggle(button: &Element) -> bool {
    button
        .class_list()
        .toggle(FAVORITED)
        .unwrap_or_else(|_| button.class_list().contains(FAVORITED))
}

pub fn init(document: &Document) {
    for button in dom::query_document(document, FAVORITE_BUTTON) {
        let clicked = button.clone();
        dom::on(&button, "click", move |event| {
            // the button sits on a product card that opens the modal
            event.stop_propagation();
            let favorited = toggle(&clicked);
            dom::set_style(&clicked, "color", icon_color(favorited));
        });
    }
}
