/// Checkout form payload
///
/// The server's checkout view expects the cart as a JSON object keyed by
/// product id, posted in the `cart_data` form field.

use crate::cart::Cart;
use crate::error::CartError;
use serde::Serialize;
use std::collections::BTreeMap;

pub const CART_FIELD: &str = "cart_data";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutEntry {
    pub name: String,
    pub price: i64,
    pub quantity: u32,
    pub image: String,
}

pub type CheckoutPayload = BTreeMap<String, CheckoutEntry>;

/// What the submit guard should do with the form
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Cart is empty: cancel, alert and send the shopper back to the listing.
    RejectEmpty,
    /// Submit with this value in the hidden cart field.
    Submit(String),
}

pub fn checkout_payload(cart: &Cart) -> CheckoutPayload {
    cart.items()
        .iter()
        .map(|item| {
            (
                item.product_id.clone(),
                CheckoutEntry {
                    name: item.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                    image: item.image.clone(),
                },
            )
        })
        .collect()
}

pub fn prepare_checkout(cart: &Cart) -> Result<CheckoutOutcome, CartError> {
    if cart.is_empty() {
        return Ok(CheckoutOutcome::RejectEmpty);
    }

    let json = serde_json::to_string(&checkout_payload(cart))?;
    Ok(CheckoutOutcome::Submit(json))
}
