//! Fetched contact data and its loading status

use super::contact::{Contact, ContactId};

/// Status of the most recent fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded,
    Error(String),
}

/// Contacts as last delivered by the store
///
/// `data` stays `None` until the first fetch settles. Later fetches keep the
/// previous contacts visible while loading.
#[derive(Debug, Clone, Default)]
pub struct ContactsData {
    pub data: Option<Vec<Contact>>,
    pub status: FetchStatus,
}

impl ContactsData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_loading(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn loaded(&mut self, contacts: Vec<Contact>) {
        self.data = Some(contacts);
        self.status = FetchStatus::Loaded;
    }

    /// Record a failed fetch; an initial failure yields an empty list
    pub fn failed(&mut self, message: String) {
        self.data.get_or_insert_with(Vec::new);
        self.status = FetchStatus::Error(message);
    }

    pub fn contacts(&self) -> &[Contact] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn ids(&self) -> Vec<ContactId> {
        self.contacts().iter().map(|c| c.id).collect()
    }

    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts().iter().find(|c| c.id == *id)
    }
}
