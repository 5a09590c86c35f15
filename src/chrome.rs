//! Chrome Extension Bindings
//!
//! Typed externs for the extension APIs the popup touches, plus the
//! [`StorageBackend`] implementation over `chrome.storage.local`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use auto_search_core::{FillRequest, StorageBackend};

#[wasm_bindgen]
extern "C" {
    // chrome.storage.local.set({ key: value })
    #[wasm_bindgen(js_namespace = ["chrome", "storage", "local"], js_name = set)]
    fn storage_local_set(entries: &JsValue);

    // chrome.storage.local.get(key) resolves to { key: value }
    #[wasm_bindgen(js_namespace = ["chrome", "storage", "local"], js_name = get)]
    async fn storage_local_get(key: &str) -> JsValue;

    // chrome.tabs.query(queryInfo) resolves to an array of tabs
    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = query)]
    async fn tabs_query(query: &JsValue) -> JsValue;

    // chrome.tabs.sendMessage(tabId, message) resolves to the handler's
    // reply, or rejects when the tab has no content script.
    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
    async fn tabs_send_message(tab_id: i32, message: &JsValue) -> Result<JsValue, JsValue>;
}

/// `chrome.storage.local` as a storage backend.
///
/// Writes go out fire-and-forget; the store applies them in arrival
/// order, so racing writers resolve by last-write-wins.
pub struct ChromeStorage;

#[async_trait(?Send)]
impl StorageBackend for ChromeStorage {
    fn set(&self, key: &str, value: String) {
        let entries = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &entries,
            &JsValue::from_str(key),
            &JsValue::from_str(&value),
        );
        storage_local_set(&entries);
    }

    async fn get(&self, key: &str) -> Option<String> {
        let result = storage_local_get(key).await;
        js_sys::Reflect::get(&result, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
    }
}

#[derive(Serialize)]
struct TabQuery {
    active: bool,
    #[serde(rename = "currentWindow")]
    current_window: bool,
}

#[derive(Deserialize)]
struct Tab {
    id: Option<i32>,
}

/// Numeric id of the tab the popup was opened over, if any.
pub async fn active_tab_id() -> Option<i32> {
    let query = TabQuery {
        active: true,
        current_window: true,
    };
    let query_js = serde_wasm_bindgen::to_value(&query).ok()?;
    let tabs = tabs_query(&query_js).await;
    let tabs: Vec<Tab> = serde_wasm_bindgen::from_value(tabs).ok()?;
    tabs.first().and_then(|tab| tab.id)
}

/// Send `request` to the content script in `tab_id`.
///
/// Answers whether the page reported a successful fill.
pub async fn send_fill_request(tab_id: i32, request: &FillRequest) -> Result<bool, String> {
    let message = serde_wasm_bindgen::to_value(request)
        .map_err(|e| format!("Failed to serialize fill request: {}", e))?;

    let reply = tabs_send_message(tab_id, &message)
        .await
        .map_err(|e| format!("{:?}", e))?;

    Ok(reply.as_bool().unwrap_or(false))
}
