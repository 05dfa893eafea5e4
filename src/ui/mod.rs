/// Browser-facing side of the storefront: DOM bindings and page widgets
pub mod badge;
pub mod checkout;
pub mod dom;
pub mod favorites;
pub mod icons;
pub mod modal;
pub mod modal_tabs;
pub mod search;
pub mod storefront;
pub mod toast;
pub mod view_toggle;

use std::rc::Rc;
use storefront::Storefront;
use web_sys::Element;

/// Attach every page widget whose elements exist on this page.
pub fn init(storefront: &Rc<Storefront>) {
    let Some(document) = dom::document() else {
        return;
    };

    icons::replace();

    search::init(&document);
    view_toggle::init(&document);
    favorites::init(&document);
    checkout::init(&document, storefront.clone());
    if let Some(modal) = dom::by_id::<Element>(&document, modal::MODAL_ID) {
        modal_tabs::init(&modal);
    }

    storefront.refresh_badge();
}
