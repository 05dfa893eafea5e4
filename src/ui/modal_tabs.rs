/// Tabs inside the product modal

use crate::ui::dom;
use web_sys::Element;

const TAB_BUTTON: &str = ".modal-tab-btn";
const TAB_CONTENT: &str = ".modal-tab-content";

pub fn pane_id(tab: &str) -> String {
    format!("tab-{}", tab)
}

pub fn init(modal: &Element) {
    let buttons = dom::query_all(modal, TAB_BUTTON);
    let contents = dom::query_all(modal, TAB_CONTENT);

    for button in &buttons {
        let buttons = buttons.clone();
        let contents = contents.clone();
        let clicked = button.clone();
        let modal = modal.clone();

        dom::on(button, "click", move |_| {
            dom::activate_exclusive(&buttons, &clicked);
            for pane in &contents {
                let _ = pane.class_list().remove_1("active");
            }

            let tab = dom::data(&clicked, "tab").unwrap_or_default();
            let id = pane_id(&tab);
            match modal.query_selector(&format!("#{}", id)) {
                Ok(Some(pane)) => {
                    let _ = pane.class_list().add_1("active");
                }
                _ => log::warn!("No modal tab pane #{}", id),
            }
        });
    }
}
