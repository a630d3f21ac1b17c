//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alerts;
pub mod contact_card;
pub mod contact_form;
pub mod contact_list;
pub mod import_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod selection_bar;
pub mod toolbar;

pub use alerts::draw_alerts;
pub use contact_card::ContactCard;
pub use contact_form::ContactForm;
pub use contact_list::ContactList;
pub use import_dialog::ImportDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use selection_bar::SelectionBar;
pub use toolbar::Toolbar;
