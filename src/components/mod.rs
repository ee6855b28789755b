//! UI Components
//!
//! Page-level Leptos components.

mod navbar;
mod item_directory;
mod add_item_form;
mod item_picker;
mod transaction_form;

pub use navbar::Navbar;
pub use item_directory::ItemDirectory;
pub use add_item_form::AddItemForm;
pub use transaction_form::{BuyForm, SellForm};
