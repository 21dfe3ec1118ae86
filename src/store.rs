//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store
//! is the source of truth for rendering; the registry is written
//! through after every mutation so the persisted array always matches.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::edit::EditMode;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, insertion order
    pub items: Vec<String>,
    /// Current text of the form input
    pub input: String,
    /// Current filter text (visual only, never persisted)
    pub filter: String,
    /// Idle, or Editing with the edit target's pre-edit text
    pub edit_mode: EditMode,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append an item to the store
pub fn store_add_item(store: &AppStore, item: String) {
    store.items().write().push(item);
}

/// Remove every store entry equal to `item`
pub fn store_remove_item(store: &AppStore, item: &str) {
    store.items().write().retain(|i| i != item);
}

/// Empty the store's item list
pub fn store_clear_items(store: &AppStore) {
    store.items().write().clear();
}

/// Full UI reset after a completed change: clear the form input and
/// return to Idle. The add affordance and control visibility derive
/// from the store, so they follow automatically.
pub fn store_reset_ui(store: &AppStore) {
    store.input().set(String::new());
    store.edit_mode().set(EditMode::Idle);
}
