/// Storefront settings passed in from the page loader

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Toast animation stages, in milliseconds from creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastTiming {
    pub enter_delay_ms: u32,
    pub dwell_ms: u32,
    pub exit_ms: u32,
}

impl ToastTiming {
    /// When the toast starts sliding out
    pub fn leave_at(&self) -> u32 {
        self.dwell_ms
    }

    /// When the toast element is removed
    pub fn remove_at(&self) -> u32 {
        self.dwell_ms.saturating_add(self.exit_ms)
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        ToastTiming {
            enter_delay_ms: 100,
            dwell_ms: 3000,
            exit_ms: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub storage_key: String,
    pub badge_selector: String,
    pub cart_path: String,
    pub products_path: String,
    pub placeholder_image: String,
    pub currency_prefix: String,
    pub empty_cart_message: String,
    pub buy_now_delay_ms: u32,
    pub toast: ToastTiming,
}

impl StorefrontConfig {
    /// Read the config object handed to `startStorefront`. `undefined` and
    /// `null` mean "all defaults".
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| format!("Failed to parse storefront config: {:?}", e))
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            storage_key: "cart".to_string(),
            badge_selector: ".cart-badge, #cart-badge-header".to_string(),
            cart_path: "/cart/".to_string(),
            products_path: "/products/".to_string(),
            placeholder_image: "https://via.placeholder.com/300x300?text=No+Image".to_string(),
            currency_prefix: "IDR".to_string(),
            empty_cart_message: "Keranjang kosong!".to_string(),
            buy_now_delay_ms: 500,
            toast: ToastTiming::default(),
        }
    }
}
