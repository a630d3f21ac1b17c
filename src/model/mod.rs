//! Model layer - centralized state types
//!
//! - `Contact` - contact records and drafts
//! - `Selection` - contacts picked for bulk actions
//! - `Overlay` - the dialog presented over the list
//! - `ContactsData` - fetched contacts and fetch status

pub mod contact;
pub mod data;
pub mod overlay;
pub mod selection;

pub use contact::{Contact, ContactId, ContactName, Email, NewContact, Phone};
pub use data::{ContactsData, FetchStatus};
pub use overlay::Overlay;
pub use selection::Selection;
