/// Cart badges in the page header and nav

use crate::badge::{BadgeRenderer, BadgeView};
use crate::ui::dom;

pub struct DomBadge {
    selector: String,
}

impl DomBadge {
    pub fn new(selector: impl Into<String>) -> Self {
        DomBadge {
            selector: selector.into(),
        }
    }
}

impl BadgeRenderer for DomBadge {
    fn render(&self, view: BadgeView) {
        let Some(document) = dom::document() else {
            return;
        };

        let text = view.text();
        for badge in dom::query_document(&document, &self.selector) {
            badge.set_text_content(Some(&text));
            dom::set_style(&badge, "display", view.display());
        }
    }
}
