//! Local storage helpers
//!
//! One named slot in browser localStorage holds the whole collection as
//! a JSON string. The `Slot` trait separates "a place that stores one
//! string" from the JSON layer on top, so everything above it can be
//! exercised against an in-memory slot in tests.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named slot holding a single string value.
pub trait Slot {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn remove(&self);
}

/// Browser localStorage slot under a fixed key.
#[derive(Clone, Copy)]
pub struct LocalSlot {
    key: &'static str,
}

impl LocalSlot {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl Slot for LocalSlot {
    fn read(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(self.key).ok().flatten())
    }

    fn write(&self, value: &str) {
        match Self::storage() {
            Some(s) => {
                if s.set_item(self.key, value).is_err() {
                    warn(&format!("[STORAGE] write to '{}' failed", self.key));
                }
            }
            None => warn("[STORAGE] localStorage unavailable"),
        }
    }

    fn remove(&self) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(self.key);
        }
    }
}

/// Parse a slot's JSON value. A missing key and unparsable JSON both
/// come back as `None`; the parse failure additionally warns on the
/// console, since there is no corruption reporting beyond that.
pub fn read_json<T: DeserializeOwned>(slot: &impl Slot) -> Option<T> {
    let raw = slot.read()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn(&format!("[STORAGE] unparsable slot value: {}", e));
            None
        }
    }
}

/// Serialize and overwrite the slot with the full value.
pub fn write_json<T: Serialize>(slot: &impl Slot, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => slot.write(&json),
        Err(e) => warn(&format!("[STORAGE] serialize failed: {}", e)),
    }
}

#[cfg(target_arch = "wasm32")]
fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(msg: &str) {
    eprintln!("{}", msg);
}

/// In-memory slot for tests. Clones share the same cell so a test can
/// inspect the raw value behind a registry.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemorySlot(std::rc::Rc<std::cell::RefCell<Option<String>>>);

#[cfg(test)]
impl MemorySlot {
    pub fn raw(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl Slot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_string());
    }

    fn remove(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_absent_key() {
        let slot = MemorySlot::default();
        let items: Option<Vec<String>> = read_json(&slot);
        assert!(items.is_none());
    }

    #[test]
    fn test_read_json_unparsable_value() {
        let slot = MemorySlot::default();
        slot.write("not json at all");
        let items: Option<Vec<String>> = read_json(&slot);
        assert!(items.is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let slot = MemorySlot::default();
        let items = vec!["Milk".to_string(), "Eggs".to_string()];
        write_json(&slot, &items);
        assert_eq!(read_json::<Vec<String>>(&slot), Some(items));
        assert_eq!(slot.raw().as_deref(), Some(r#"["Milk","Eggs"]"#));
    }

    #[test]
    fn test_remove_clears_value() {
        let slot = MemorySlot::default();
        slot.write("[]");
        slot.remove();
        assert!(slot.read().is_none());
    }
}
