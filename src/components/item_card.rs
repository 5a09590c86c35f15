//! Item Card Component
//!
//! Shows the selected item with its fill action and per-line
//! instruction copy buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use auto_search_core::Item;

use crate::fill;

#[wasm_bindgen]
extern "C" {
    // navigator.clipboard.writeText(text) resolves once copied
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn clipboard_write_text(text: &str) -> js_sys::Promise;
}

/// Card for the currently selected item
#[component]
pub fn ItemCard(item: Item, textbox_id: ReadSignal<String>) -> impl IntoView {
    let value_for_fill = item.value.clone();
    let run_fill = move |_| {
        let selector = textbox_id.get();
        let value = value_for_fill.clone();
        spawn_local(async move {
            fill::fill_active_tab(&selector, &value).await;
        });
    };

    view! {
        <div class="item-card">
            <div class="item-card-header">
                <span class="item-name">{item.name.clone()}</span>
            </div>
            <div class="item-card-row">
                <span class="item-value">{item.value.clone()}</span>
                <button class="fill-btn" on:click=run_fill>"Fill"</button>
            </div>

            // One row per instruction, each with its own copy button
            {item.instruction.iter().map(|inst| {
                let text = inst.clone();
                let to_copy = inst.clone();
                view! {
                    <div class="instruction-row">
                        <span class="instruction-text">"- " {text}</span>
                        <button
                            class="copy-btn"
                            on:click=move |_| {
                                // Fire-and-forget copy
                                let _ = clipboard_write_text(&to_copy);
                            }
                        >
                            "⧉"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
