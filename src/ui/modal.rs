/// Product detail modal elements

use crate::modal::{ProductDescriptor, WorkingSet};
use crate::money::{format_currency, parse_price};
use crate::ui::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

pub const MODAL_ID: &str = "productModal";
const OPEN_CLASS: &str = "open";

impl ProductDescriptor {
    /// Read `data-product-id`, `data-name`, `data-price`, `data-image` and
    /// `data-description` off the element that triggered the modal.
    pub fn from_element(element: &Element) -> Self {
        let field = |name: &str| dom::data(element, name).unwrap_or_default();
        ProductDescriptor {
            id: field("productId"),
            name: field("name"),
            price: field("price"),
            image: field("image"),
            description: field("description"),
        }
    }
}

/// The modal and the sub-elements it renders into
pub struct ModalView {
    modal: HtmlElement,
    image: HtmlImageElement,
    title: Element,
    current_price: Element,
    original_price: Element,
    stock: Element,
    description: Element,
    quantity: HtmlInputElement,
    _on_image_error: Closure<dyn FnMut()>,
}

impl ModalView {
    /// `None` when the page has no product modal.
    pub fn find(document: &Document, placeholder_image: &str) -> Option<Self> {
        let modal: HtmlElement = dom::by_id(document, MODAL_ID)?;
        let image: HtmlImageElement = dom::by_id(document, "modalImage")?;
        let title: Element = dom::by_id(document, "modalTitle")?;
        let current_price: Element = dom::by_id(document, "modalCurrentPrice")?;
        let original_price: Element = dom::by_id(document, "modalOriginalPrice")?;
        let stock: Element = dom::by_id(document, "modalStock")?;
        let description: Element = dom::by_id(document, "modalDescription")?;
        let quantity: HtmlInputElement = dom::by_id(document, "quantityInput")?;

        let on_image_error = {
            let image = image.clone();
            let placeholder = placeholder_image.to_string();
            Closure::<dyn FnMut()>::new(move || {
                // never retry a failing placeholder
                if !image.src().ends_with(&placeholder) {
                    image.set_src(&placeholder);
                }
            })
        };
        image.set_onerror(Some(on_image_error.as_ref().unchecked_ref()));

        Some(ModalView {
            modal,
            image,
            title,
            current_price,
            original_price,
            stock,
            description,
            quantity,
            _on_image_error: on_image_error,
        })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.modal
    }

    pub fn render(&self, product: &ProductDescriptor, currency_prefix: &str) {
        self.image.set_src(&product.image);
        self.image.set_alt(&product.name);
        self.title.set_text_content(Some(&product.name));
        let price = format_currency(parse_price(&product.price).unwrap_or(0), currency_prefix);
        self.current_price.set_text_content(Some(&price));
        self.description.set_text_content(Some(&product.description));

        // original price and stock are not shown yet
        dom::set_style(&self.original_price, "display", "none");
        dom::set_style(&self.stock, "display", "none");
    }

    /// Mirror the working set onto `data-current-*` attributes of the modal.
    pub fn store_working_set(&self, working_set: &WorkingSet) {
        let dataset = self.modal.dataset();
        let fields = [
            ("currentId", &working_set.product_id),
            ("currentName", &working_set.name),
            ("currentPrice", &working_set.price),
            ("currentImage", &working_set.image),
        ];
        for (name, value) in fields {
            if let Err(e) = dataset.set(name, value) {
                log::warn!("Could not set modal data {}: {:?}", name, e);
            }
        }
    }

    pub fn quantity(&self) -> String {
        self.quantity.value()
    }

    pub fn set_quantity(&self, value: u32) {
        self.quantity.set_value(&value.to_string());
    }

    pub fn show(&self) {
        let _ = self.modal.class_list().add_1(OPEN_CLASS);
        set_body_overflow("hidden");
    }

    pub fn hide(&self) {
        let _ = self.modal.class_list().remove_1(OPEN_CLASS);
        set_body_overflow("auto");
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}
