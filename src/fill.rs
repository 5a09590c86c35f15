//! Fill Flow
//!
//! Pushes a saved value into the page behind the popup.

use auto_search_core::FillRequest;

use crate::chrome;

/// Ask the active tab's content script to set `value` on the element
/// matching `selector`.
///
/// The popup stays quiet on failure; outcomes only go to the log.
pub async fn fill_active_tab(selector: &str, value: &str) {
    let tab_id = match chrome::active_tab_id().await {
        Some(tab_id) => tab_id,
        None => {
            log::warn!("[Fill] no active tab to fill");
            return;
        }
    };

    let request = FillRequest::new(selector, value);
    match chrome::send_fill_request(tab_id, &request).await {
        Ok(filled) => log::debug!("[Fill] tab {} '{}' -> {}", tab_id, selector, filled),
        Err(e) => log::warn!("[Fill] tab {} unreachable: {}", tab_id, e),
    }
}
