//! Item Registry
//!
//! Membership checks and mutations over the persisted item list. Every
//! mutation is a full load-modify-save cycle; the slot value is a JSON
//! array of strings. Safe only because the environment is
//! single-threaded with synchronous storage calls.

use crate::storage::{self, LocalSlot, Slot};

/// The one localStorage key the whole collection lives under.
pub const ITEMS_KEY: &str = "items";

pub struct ItemRegistry<S: Slot> {
    slot: S,
}

/// Registry over the browser's localStorage slot.
pub fn local_registry() -> ItemRegistry<LocalSlot> {
    ItemRegistry::new(LocalSlot::new(ITEMS_KEY))
}

impl<S: Slot> ItemRegistry<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// The persisted array, or empty when the key is absent or its
    /// value does not parse.
    pub fn load(&self) -> Vec<String> {
        storage::read_json(&self.slot).unwrap_or_default()
    }

    /// Serialize the full sequence and overwrite the slot. Whole-array
    /// replacement; no partial or append writes.
    pub fn save(&self, items: &[String]) {
        storage::write_json(&self.slot, &items);
    }

    /// Exact-match membership check. O(n) per call, acceptable at this
    /// scale.
    pub fn exists(&self, candidate: &str) -> bool {
        self.load().iter().any(|i| i == candidate)
    }

    pub fn add(&self, item: &str) {
        let mut items = self.load();
        items.push(item.to_string());
        self.save(&items);
    }

    /// Removes every entry equal to `item`. Only one is expected given
    /// the uniqueness invariant; duplicates are swept together.
    pub fn remove_by_value(&self, item: &str) {
        let mut items = self.load();
        items.retain(|i| i != item);
        self.save(&items);
    }

    /// Removes the slot key entirely.
    pub fn clear_all(&self) {
        self.slot.remove();
    }
}
