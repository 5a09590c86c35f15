//! Page Fill Routine
//!
//! Finds the target element in the live page, replaces its value, and
//! fires a synthetic `input` event so framework listeners see the
//! change.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement, InputEvent, InputEventInit};

/// Set `value` on the first element matching `selector`.
///
/// Returns whether a value was written. An empty or invalid selector,
/// a selector matching nothing, and a non-input target all answer
/// `false` without touching the page.
pub fn fill_first_match(document: &Document, selector: &str, value: &str) -> bool {
    if selector.is_empty() {
        return false;
    }
    let element = match document.query_selector(selector) {
        Ok(Some(element)) => element,
        Ok(None) | Err(_) => return false,
    };
    let input: &HtmlInputElement = match element.dyn_ref() {
        Some(input) => input,
        None => return false,
    };

    let previous = input.value();
    input.set_value(value);

    let init = InputEventInit::new();
    init.set_bubbles(true);
    init.set_input_type("insertText");
    let event = match InputEvent::new_with_event_init_dict("input", &init) {
        Ok(event) => event,
        Err(_) => return false,
    };
    // Mark the event so page listeners can tell it from real typing.
    let _ = js_sys::Reflect::set(event.as_ref(), &"simulated".into(), &JsValue::TRUE);

    reset_value_tracker(input, &previous);
    let _ = input.dispatch_event(&event);
    true
}

/// React swallows programmatic value changes unless its internal value
/// tracker is rolled back to the previous value before the `input`
/// event fires.
fn reset_value_tracker(input: &HtmlInputElement, previous: &str) {
    let tracker = match js_sys::Reflect::get(input.as_ref(), &"_valueTracker".into()) {
        Ok(tracker) if !tracker.is_undefined() && !tracker.is_null() => tracker,
        _ => return,
    };
    let set_value = match js_sys::Reflect::get(&tracker, &"setValue".into()) {
        Ok(set_value) => set_value,
        Err(_) => return,
    };
    if let Some(set_value) = set_value.dyn_ref::<js_sys::Function>() {
        let _ = set_value.call1(&tracker, &JsValue::from_str(previous));
    }
}
