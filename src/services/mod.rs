//! Services used by the contact screen
//!
//! - Contact storage
//! - Background loading and bulk deletion
//! - CSV importation
//! - Notifications and translation

pub mod bulk_delete;
pub mod i18n;
pub mod importer;
pub mod loader;
pub mod notifier;
pub mod store;

pub use bulk_delete::{DeleteJob, DeleteOutcome};
pub use i18n::{Locale, Translator};
pub use importer::{ImportError, ImportReport, SkippedRow};
pub use loader::FetchJob;
pub use notifier::{Alert, AlertLevel, Notifier};
pub use store::{ContactStore, DirectoryStore, StoreError};
