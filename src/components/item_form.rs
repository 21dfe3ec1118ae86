//! Item Form Component
//!
//! Text input plus the submit control. The control reads as an "add"
//! affordance while Idle and an "update" affordance while a row is
//! marked for editing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::dialog;
use crate::edit::{plan_submit, SubmitPlan};
use crate::registry::local_registry;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemForm() -> impl IntoView {
    let app_store = use_app_store();

    let editing = move || app_store.edit_mode().read().is_editing();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = app_store.input().get();
        let items = app_store.items().get();
        let mode = app_store.edit_mode().get();
        let registry = local_registry();

        match plan_submit(&mode, &items, &input) {
            SubmitPlan::Reject(msg) => dialog::alert(msg),
            SubmitPlan::Add(item) => {
                store::store_add_item(&app_store, item.clone());
                registry.add(&item);
                store::store_reset_ui(&app_store);
            }
            SubmitPlan::Replace { old, new } => {
                store::store_remove_item(&app_store, &old);
                registry.remove_by_value(&old);
                store::store_add_item(&app_store, new.clone());
                registry.add(&new);
                store::store_reset_ui(&app_store);
            }
        }
    };

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    name="item"
                    placeholder="Enter Item"
                    prop:value=move || app_store.input().get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        app_store.input().set(input.value());
                    }
                />
            </div>
            <div class="form-control">
                <button
                    type="submit"
                    class="btn"
                    style:background-color=move || if editing() { "#228B22" } else { "#333" }
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <i class=move || {
                        if editing() { "fa-solid fa-pen" } else { "fa-solid fa-plus" }
                    }></i>
                    {move || if editing() { " Update Item" } else { " Add Item" }}
                </button>
            </div>
        </form>
    }
}
