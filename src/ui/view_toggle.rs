/// Grid/list view buttons above the product grid

use crate::ui::dom;
use web_sys::{Document, Element};

const VIEW_BUTTON: &str = ".view-btn";
const PRODUCTS_GRID: &str = ".products-grid";
// feather.replace() swaps <i data-feather="grid"> for <svg class="feather feather-grid">
const GRID_ICON: &str = "[data-feather=\"grid\"], .feather-grid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn from_grid_icon(has_grid_icon: bool) -> Self {
        if has_grid_icon { ViewMode::Grid } else { ViewMode::List }
    }

    pub fn grid_template_columns(self) -> &'static str {
        match self {
            ViewMode::Grid => "repeat(auto-fill, minmax(280px, 1fr))",
            ViewMode::List => "1fr",
        }
    }
}

fn has_grid_icon(button: &Element) -> bool {
    matches!(button.query_selector(GRID_ICON), Ok(Some(_)))
}

pub fn init(document: &Document) {
    let buttons = dom::query_document(document, VIEW_BUTTON);
    if buttons.is_empty() {
        return;
    }

    for button in &buttons {
        let doc = document.clone();
        let clicked = button.clone();
        dom::on(button, "click", move |_| {
            dom::activate_exclusive(&dom::query_document(&doc, VIEW_BUTTON), &clicked);

            let mode = ViewMode::from_grid_icon(has_grid_icon(&clicked));
            if let Ok(Some(grid)) = doc.query_selector(PRODUCTS_GRID) {
                dom::set_style(&grid, "grid-template-columns", mode.grid_template_columns());
            }
        });
    }
}
