//! Item Row Component
//!
//! A single list row: the item text plus its delete control. Clicking
//! the text toggles edit targeting; clicking the control deletes after
//! confirmation. Both stop propagation so the window-level cancel does
//! not fire for them.

use leptos::prelude::*;

use crate::dialog;
use crate::edit::{plan_row_click, EditMode};
use crate::filter::row_visible;
use crate::registry::local_registry;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemRow(text: String) -> impl IntoView {
    let app_store = use_app_store();

    let target_text = text.clone();
    let is_target = move || app_store.edit_mode().read().is_target(&target_text);

    let filter_text = text.clone();
    let visible = move || {
        let filter = app_store.filter().get();
        row_visible(&filter_text, &filter)
    };

    let click_text = text.clone();
    let on_row_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let mode = app_store.edit_mode().get();
        match plan_row_click(&mode, &click_text) {
            EditMode::Editing { original } => {
                // Pre-fill the form with the target's text
                app_store.input().set(original.clone());
                app_store.edit_mode().set(EditMode::Editing { original });
            }
            EditMode::Idle => store::store_reset_ui(&app_store),
        }
    };

    let delete_text = text.clone();
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if dialog::confirm("Are you sure?") {
            store::store_remove_item(&app_store, &delete_text);
            local_registry().remove_by_value(&delete_text);
            store::store_reset_ui(&app_store);
        }
    };

    view! {
        <li
            class=move || if is_target() { "edit-mode" } else { "" }
            style:display=move || if visible() { "flex" } else { "none" }
            on:click=on_row_click
        >
            {text.clone()}
            <button class="remove-item btn-link text-red" on:click=on_delete>
                <i class="fa-solid fa-xmark"></i>
            </button>
        </li>
    }
}
