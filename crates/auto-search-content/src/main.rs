//! Content script entry point.
//!
//! This binary is compiled to WASM and loaded into pages by the
//! extension manifest. It mounts no UI. It registers one listener on
//! the runtime message channel and answers fill requests coming from
//! the popup.
//!
//! # Message format
//!
//! Incoming: `{ kind: "autoSearchFill", selector, value }`
//! Response: `true` when a value was written into the page, `false`
//! otherwise.

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
mod fill;

fn main() {
    // Content scripts don't mount DOM. On wasm32 we register the
    // message listener; on other targets this binary is a no-op.
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
        setup_message_listener();
    }
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn setup_message_listener() {
    use auto_search_core::FillRequest;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        // chrome.runtime.onMessage.addListener(callback)
        #[wasm_bindgen(js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
        fn add_message_listener(callback: &js_sys::Function);
    }

    // The callback receives (message, sender, sendResponse). The fill
    // runs synchronously, so the response goes out before the callback
    // returns and the return value stays FALSE (no async channel to
    // keep open).
    let callback = Closure::wrap(Box::new(
        move |message: JsValue, _sender: JsValue, send_response: js_sys::Function| -> JsValue {
            let request: FillRequest = match serde_wasm_bindgen::from_value(message) {
                Ok(request) => request,
                // Not ours; other extensions talk on this channel too.
                Err(_) => return JsValue::FALSE,
            };
            if !request.is_fill() {
                return JsValue::FALSE;
            }

            let filled = match web_sys::window().and_then(|w| w.document()) {
                Some(document) => {
                    fill::fill_first_match(&document, &request.selector, &request.value)
                }
                None => false,
            };
            log::debug!("fill request for '{}' -> {}", request.selector, filled);

            let _ = send_response.call1(&JsValue::UNDEFINED, &JsValue::from_bool(filled));
            JsValue::FALSE
        },
    )
        as Box<dyn FnMut(JsValue, JsValue, js_sys::Function) -> JsValue>);

    add_message_listener(callback.as_ref().unchecked_ref());

    // Leak the closure so it lives for the page lifetime.
    callback.forget();
}
