//! Settings Form Component
//!
//! Dialog for the fill target selector, plus export/import of the
//! whole store as a JSON file.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use auto_search_core::{Setting, EXPORT_FILENAME};

use crate::context::AppContext;
use crate::storage;

const IMPORT_INPUT_ID: &str = "import-input";

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Hand `json` to the browser as a file download.
fn download_json(json: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    // Download happens through a transient anchor click
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Settings dialog
#[component]
pub fn SettingsForm(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (textbox_value, set_textbox_value) = signal(String::new());

    // Show the stored selector each time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            spawn_local(async move {
                set_textbox_value.set(storage::setting().await.textbox_id);
            });
        }
    });

    let save = move |_| {
        storage::save_setting(&Setting::new(textbox_value.get()));
        ctx.reload();
        on_close.run(());
    };

    let export = move |_| {
        spawn_local(async move {
            let json = storage::export_json().await;
            if let Err(e) = download_json(&json, EXPORT_FILENAME) {
                log::warn!("[Settings] export failed: {:?}", e);
            }
        });
    };

    // The visible import button clicks a hidden file input
    let open_file_picker = move |_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(IMPORT_INPUT_ID));
        if let Some(input) = input {
            if let Some(input) = input.dyn_ref::<web_sys::HtmlElement>() {
                input.click();
            }
        }
    };

    let on_file_chosen = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };

        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => return,
        };
        let reader_for_load = reader.clone();
        let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let text = reader_for_load
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default();
            spawn_local(async move {
                match storage::import_json(&text) {
                    Ok(()) => {
                        set_textbox_value.set(storage::setting().await.textbox_id);
                        ctx.reload();
                        alert("Settings imported successfully!");
                    }
                    Err(e) => {
                        log::error!("[Settings] import failed: {}", e);
                        alert("Error importing settings. Please check the file format.");
                    }
                }
            });
        }) as Box<dyn FnMut(web_sys::Event)>);
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        let _ = reader.read_as_text(&file);

        // The reader outlives this handler; the callback leaks with it
        onload.forget();
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog settings-dialog">
                    <div class="dialog-header">
                        <span class="dialog-title">"Settings"</span>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>

                    <div class="settings-field">
                        <label class="settings-label">"Textbox ID"</label>
                        <input
                            type="text"
                            class="settings-input"
                            placeholder="#search-input"
                            prop:value=move || textbox_value.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_textbox_value.set(input.value());
                            }
                        />
                    </div>

                    <button class="settings-btn save-btn" on:click=save>"Save"</button>
                    <button class="settings-btn" on:click=export>"Export All Settings"</button>

                    <input
                        type="file"
                        accept=".json"
                        id=IMPORT_INPUT_ID
                        class="hidden-input"
                        on:change=on_file_chosen
                    />
                    <button class="settings-btn" on:click=open_file_picker>"Import Settings"</button>
                </div>
            </div>
        </Show>
    }
}
