/// Browser timers: a cancellable one-shot timeout and an awaitable sleep

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// `setTimeout` takes a signed delay; longer waits are capped.
fn clamp_millis(millis: u32) -> i32 {
    i32::try_from(millis).unwrap_or(i32::MAX)
}

/// One-shot `setTimeout`. Dropping the handle cancels the callback if it has
/// not fired yet.
pub struct Timeout {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let closure: Closure<dyn FnMut()> = Closure::once(callback);

        let id = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    clamp_millis(millis),
                )
                .map_err(|e| log::warn!("setTimeout failed: {:?}", e))
                .ok()
        });

        Timeout { id, _closure: closure }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.id.take(), web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
    }
}

/// Resolve after `millis` milliseconds.
pub async fn sleep(millis: u32) {
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        let scheduled = web_sys::window().is_some_and(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, clamp_millis(millis))
                .is_ok()
        });
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });

    let _ = JsFuture::from(promise).await;
}
