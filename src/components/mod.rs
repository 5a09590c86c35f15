//! UI Components
//!
//! Reusable Leptos components.

mod item_card;
mod item_form;
mod item_manager;
mod search_bar;
mod settings_form;

pub use item_card::ItemCard;
pub use item_manager::ItemManager;
pub use search_bar::SearchBar;
pub use settings_form::SettingsForm;
