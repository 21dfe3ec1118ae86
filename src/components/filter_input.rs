//! Filter Input Component
//!
//! Visual-only substring filter over the rendered rows. Hidden while
//! the list is empty.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterInput() -> impl IntoView {
    let app_store = use_app_store();

    let has_items = move || !app_store.items().read().is_empty();

    view! {
        <input
            type="text"
            class="form-input-filter"
            id="filter"
            placeholder="Filter Items"
            style:display=move || if has_items() { "block" } else { "none" }
            prop:value=move || app_store.filter().get()
            on:input=move |ev| {
                let target = ev.target().unwrap();
                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                app_store.filter().set(input.value());
            }
        />
    }
}
