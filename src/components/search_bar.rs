//! Search Bar Component
//!
//! Item picker with substring matching and keyboard navigation.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use auto_search_core::Item;

/// Case-insensitive substring match on the item name
pub fn name_matches(query: &str, name: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Search input with a suggestion dropdown
///
/// Props:
/// - items: Signal containing all stored items
/// - on_select: Callback when the selection changes (None = cleared)
#[component]
pub fn SearchBar(
    items: ReadSignal<Vec<Item>>,
    #[prop(into)] on_select: Callback<Option<Item>>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);
    let (open, set_open) = signal(false);

    // Compute suggestions for the current query
    let suggestions = move || {
        let query = input_value.get();
        if query.is_empty() {
            return vec![];
        }

        items
            .get()
            .into_iter()
            .filter(|item| name_matches(&query, &item.name))
            .take(5)
            .collect::<Vec<_>>()
    };

    // Handle picking a suggestion - fills the input and notifies
    let pick = move |item: Item| {
        set_input_value.set(item.name.clone());
        set_selected_idx.set(0);
        set_open.set(false);
        on_select.run(Some(item));
    };

    // Handle keydown
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let sugg = suggestions();

        match key.as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel < sugg.len() {
                    pick(sugg[sel].clone());
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Please Select"
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    // Clearing the query also clears the selection
                    if value.is_empty() {
                        on_select.run(None);
                    }
                    set_input_value.set(value);
                    set_selected_idx.set(0);
                    set_open.set(true);
                }
                on:keydown=on_keydown
            />

            // Suggestion dropdown
            {move || {
                let sugg = suggestions();
                if !open.get() || sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="suggestion-list">
                            {sugg.into_iter().enumerate().map(|(i, item)| {
                                let label = item.name.clone();
                                let is_selected = i == selected;
                                view! {
                                    <button
                                        type="button"
                                        class=if is_selected { "suggestion-item selected" } else { "suggestion-item" }
                                        on:click=move |_| pick(item.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
