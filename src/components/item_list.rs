//! Item List Component

use leptos::prelude::*;

use super::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Renders one row per store item, in insertion order. Keyed on the
/// item text, which is unique by the collection invariant.
#[component]
pub fn ItemList() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <ul id="item-list" class="items">
            <For
                each=move || app_store.items().get()
                key=|item| item.clone()
                let:item
            >
                <ItemRow text=item />
            </For>
        </ul>
    }
}
