//! Shoplist App
//!
//! Root component: header, item form, filter box, item list, clear
//! button. State lives in the app store; every mutation writes through
//! to the item registry so the persisted array always matches.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearButton, FilterInput, ItemForm, ItemList};
use crate::registry::local_registry;
use crate::store::{self, AppState};

#[component]
pub fn App() -> impl IntoView {
    // Display pass: seed the store from storage on startup
    let loaded = local_registry().load();
    web_sys::console::log_1(&format!("[APP] loaded {} items", loaded.len()).into());

    let app_store = Store::new(AppState {
        items: loaded,
        ..Default::default()
    });

    // Provide context to all children
    provide_context(app_store);

    // Clicks that bubble up to the window cancel any edit in progress
    // and reset the form. Rows and buttons stop propagation, so only
    // clicks outside the interactive surface land here.
    let handle = window_event_listener(ev::click, move |_| {
        store::store_reset_ui(&app_store);
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>
            <ItemForm />
            <FilterInput />
            <ItemList />
            <ClearButton />
        </div>
    }
}
