//! UI Components
//!
//! Reusable Leptos components.

mod clear_button;
mod filter_input;
mod item_form;
mod item_list;
mod item_row;

pub use clear_button::ClearButton;
pub use filter_input::FilterInput;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
