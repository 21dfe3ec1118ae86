//! Row filtering
//!
//! Visual-only substring filter, derived from the in-memory items
//! rather than the rendered rows. Never touches storage.

/// Case-insensitive substring match; the empty filter shows everything.
pub fn row_visible(item: &str, filter: &str) -> bool {
    item.to_lowercase().contains(&filter.to_lowercase())
}
