//! Clear Button Component
//!
//! Empties the list and the storage slot after confirmation. Hidden
//! while the list is empty.

use leptos::prelude::*;

use crate::dialog;
use crate::registry::local_registry;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn ClearButton() -> impl IntoView {
    let app_store = use_app_store();

    let has_items = move || !app_store.items().read().is_empty();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if dialog::confirm("Are you sure?") {
            store::store_clear_items(&app_store);
            local_registry().clear_all();
            store::store_reset_ui(&app_store);
        }
    };

    view! {
        <button
            id="clear"
            class="btn-clear"
            style:display=move || if has_items() { "block" } else { "none" }
            on:click=on_click
        >
            "Clear All"
        </button>
    }
}
