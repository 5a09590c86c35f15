//! Item Form Component
//!
//! Add/edit dialog for a single item with dynamic instruction rows.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use auto_search_core::Item;

/// Item add/edit form
///
/// Props:
/// - open: whether the dialog is shown
/// - editing: position and current value of the item being edited
///   (None = creating a new item)
/// - on_submit: Callback with the target position and the new item
/// - on_cancel: Callback when the dialog closes without saving
#[component]
pub fn ItemForm(
    #[prop(into)] open: Signal<bool>,
    editing: ReadSignal<Option<(usize, Item)>>,
    #[prop(into)] on_submit: Callback<(Option<usize>, Item)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (name_value, set_name_value) = signal(String::new());
    let (value_value, set_value_value) = signal(String::new());
    // Instruction rows carry a stable id so editing one row does not
    // re-render the others.
    let (rows, set_rows) = signal(Vec::<(u32, String)>::new());
    let (next_row_id, set_next_row_id) = signal(0u32);

    // Populate the fields each time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            match editing.get() {
                Some((_, item)) => {
                    set_name_value.set(item.name.clone());
                    set_value_value.set(item.value.clone());
                    let seeded: Vec<(u32, String)> = item
                        .instruction
                        .iter()
                        .enumerate()
                        .map(|(i, text)| (i as u32, text.clone()))
                        .collect();
                    set_next_row_id.set(seeded.len() as u32);
                    set_rows.set(seeded);
                }
                None => {
                    set_name_value.set(String::new());
                    set_value_value.set(String::new());
                    set_rows.set(Vec::new());
                    set_next_row_id.set(0);
                }
            }
        }
    });

    let update_row = move |id: u32, value: String| {
        set_rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|(row_id, _)| *row_id == id) {
                row.1 = value;
            }
        });
    };

    let remove_row = move |id: u32| {
        set_rows.update(|rows| rows.retain(|(row_id, _)| *row_id != id));
    };

    let add_row = move |_| {
        let id = next_row_id.get();
        set_next_row_id.set(id + 1);
        set_rows.update(|rows| rows.push((id, String::new())));
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name_value.get();
        let value = value_value.get();
        if name.is_empty() || value.is_empty() {
            return;
        }

        let item = Item {
            name,
            value,
            instruction: rows.get().into_iter().map(|(_, text)| text).collect(),
        };
        let index = editing.get().map(|(index, _)| index);
        on_submit.run((index, item));
        on_cancel.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog item-form-dialog">
                    <div class="dialog-header">
                        <span class="dialog-title">
                            {move || if editing.get().is_some() { "Edit Item" } else { "Add New Item" }}
                        </span>
                        <button class="close-btn" on:click=move |_| on_cancel.run(())>"×"</button>
                    </div>

                    <form class="item-form" on:submit=on_form_submit>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Name"
                            prop:value=move || name_value.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name_value.set(input.value());
                            }
                        />
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Value"
                            prop:value=move || value_value.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_value_value.set(input.value());
                            }
                        />

                        // Instruction rows
                        <For
                            each=move || rows.get()
                            key=|(id, _)| *id
                            children=move |(id, text)| {
                                view! {
                                    <div class="instruction-edit-row">
                                        <input
                                            type="text"
                                            class="form-input instruction-input"
                                            placeholder="Instruction"
                                            prop:value=text
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                update_row(id, input.value());
                                            }
                                        />
                                        <button
                                            type="button"
                                            class="remove-instruction-btn"
                                            on:click=move |_| remove_row(id)
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            }
                        />
                        <button type="button" class="add-instruction-btn" on:click=add_row>
                            "Add Instruction"
                        </button>

                        <button type="submit" class="submit-btn">
                            {move || if editing.get().is_some() { "Update Item" } else { "Add Item" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
