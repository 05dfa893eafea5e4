/// Feather icon refresh

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Call `feather.replace()` if the page loaded the feather icon script.
pub fn replace() {
    let global = js_sys::global();
    let Ok(feather) = js_sys::Reflect::get(&global, &JsValue::from_str("feather")) else {
        return;
    };
    if feather.is_undefined() || feather.is_null() {
        return;
    }

    let replace = js_sys::Reflect::get(&feather, &JsValue::from_str("replace"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(replace) = replace {
        if let Err(e) = replace.call0(&feather) {
            log::warn!("feather.replace() failed: {:?}", e);
        }
    }
}
