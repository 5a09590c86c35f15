//! Auto Search Popup App
//!
//! Main popup component: search-and-fill up top, management dialogs
//! behind the toolbar buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use auto_search_core::Item;

use crate::components::{ItemCard, ItemManager, SearchBar, SettingsForm};
use crate::context::AppContext;
use crate::storage;

/// Which management dialog is open
#[derive(Clone, Copy, PartialEq)]
enum Panel {
    Items,
    Settings,
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<Item>::new());
    let (selected, set_selected) = signal::<Option<Item>>(None);
    let (textbox_id, set_textbox_id) = signal(String::new());
    let (open_panel, set_open_panel) = signal::<Option<Panel>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load both records on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            let loaded = storage::item_list().await;
            log::debug!("[App] loaded {} items (trigger={})", loaded.len(), trigger);
            set_items.set(loaded);
            set_textbox_id.set(storage::setting().await.textbox_id);
        });
    });

    view! {
        <div class="popup-layout">
            <div class="toolbar">
                <button
                    class="toolbar-btn"
                    title="Manage items"
                    on:click=move |_| set_open_panel.set(Some(Panel::Items))
                >
                    "+"
                </button>
                <button
                    class="toolbar-btn"
                    title="Settings"
                    on:click=move |_| set_open_panel.set(Some(Panel::Settings))
                >
                    "⚙"
                </button>
            </div>

            <SearchBar items=items on_select=move |item| set_selected.set(item) />

            // Card for the picked item, if any
            {move || selected.get().map(|item| view! {
                <ItemCard item=item textbox_id=textbox_id />
            })}

            <ItemManager
                open=Signal::derive(move || open_panel.get() == Some(Panel::Items))
                on_close=move |_| set_open_panel.set(None)
            />
            <SettingsForm
                open=Signal::derive(move || open_panel.get() == Some(Panel::Settings))
                on_close=move |_| set_open_panel.set(None)
            />
        </div>
    }
}
