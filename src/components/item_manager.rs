//! Item Manager Component
//!
//! Dialog listing all stored items with add, edit, and delete actions.
//! Name uniqueness is enforced here before anything is written.

use leptos::prelude::*;
use leptos::task::spawn_local;

use auto_search_core::{name_taken, Item};

use crate::components::item_form::ItemForm;
use crate::context::AppContext;
use crate::storage;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Item management dialog
#[component]
pub fn ItemManager(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<Item>::new());
    let (editing, set_editing) = signal::<Option<(usize, Item)>>(None);
    let (form_open, set_form_open) = signal(false);

    // Refetch the list and reset the form each time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            set_form_open.set(false);
            set_editing.set(None);
            spawn_local(async move {
                set_items.set(storage::item_list().await);
            });
        }
    });

    let delete_item = move |index: usize| {
        spawn_local(async move {
            storage::remove_item(index).await;
            set_items.set(storage::item_list().await);
            ctx.reload();
        });
    };

    // Shared by add and edit; index is Some when editing
    let submit_item = move |(index, item): (Option<usize>, Item)| {
        if name_taken(&items.get(), &item.name, index) {
            alert("An item with this name already exists. Please choose a different name.");
            return;
        }
        spawn_local(async move {
            match index {
                Some(index) => {
                    if let Err(e) = storage::update_item(index, item).await {
                        log::warn!("[Items] update failed: {}", e);
                    }
                }
                None => storage::add_item(item).await,
            }
            set_items.set(storage::item_list().await);
            ctx.reload();
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog item-manager-dialog">
                    <div class="dialog-header">
                        <span class="dialog-title">"Items"</span>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>

                    <div class="manager-list">
                        <For
                            each={move || items.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(_, item)| item.name.clone()
                            children=move |(index, item)| {
                                let item_for_edit = item.clone();
                                view! {
                                    <div class="manager-row">
                                        <span class="manager-item-name">{item.name.clone()}</span>
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editing.set(Some((index, item_for_edit.clone())));
                                                set_form_open.set(true);
                                            }
                                        >
                                            "✎"
                                        </button>
                                        <button class="delete-btn" on:click=move |_| delete_item(index)>
                                            "×"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <button
                        class="add-item-btn"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_form_open.set(true);
                        }
                    >
                        "Add New Item"
                    </button>
                </div>
            </div>
        </Show>

        <ItemForm
            open=form_open
            editing=editing
            on_submit=submit_item
            on_cancel=move |_| {
                set_form_open.set(false);
                set_editing.set(None);
            }
        />
    }
}
