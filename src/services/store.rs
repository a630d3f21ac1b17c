//! Contact persistence service
//!
//! `ContactStore` is the seam between the screen controller and storage.
//! `DirectoryStore` keeps one JSON file per contact in a data directory.

use crate::model::{Contact, ContactId, NewContact};
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize contact {id}: {source}")]
    Serialize {
        id: ContactId,
        #[source]
        source: serde_json::Error,
    },
    #[error("contact {0} not found")]
    NotFound(ContactId),
}

/// Storage operations used by the contact screen
///
/// Implementations are shared with worker threads, so they must be
/// `Send + Sync`.
pub trait ContactStore: Send + Sync {
    /// Every stored contact, sorted for display
    fn list(&self) -> Result<Vec<Contact>, StoreError>;

    /// Persist a draft and return the stored contact
    fn create(&self, contact: NewContact) -> Result<Contact, StoreError>;

    /// Remove a stored contact
    fn delete(&self, contact: &Contact) -> Result<(), StoreError>;
}

/// Sort contacts the way the list displays them
pub fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| {
        a.sort_key()
            .cmp(&b.sort_key())
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

/// One `<id>.json` file per contact
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn contact_path(&self, id: &ContactId) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn read_contact(path: &Path) -> Option<Contact> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable contact file");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(contact) => Some(contact),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping malformed contact file");
                None
            }
        }
    }
}

impl ContactStore for DirectoryStore {
    fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut contacts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(contact) = Self::read_contact(&path) {
                contacts.push(contact);
            }
        }

        sort_contacts(&mut contacts);
        tracing::debug!(count = contacts.len(), root = %self.root.display(), "Listed contacts");
        Ok(contacts)
    }

    fn create(&self, contact: NewContact) -> Result<Contact, StoreError> {
        let contact = Contact::from_new(contact, Utc::now());
        let path = self.contact_path(&contact.id);

        let json = serde_json::to_string_pretty(&contact).map_err(|source| {
            StoreError::Serialize {
                id: contact.id,
                source,
            }
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(id = %contact.id, "Created contact");
        Ok(contact)
    }

    fn delete(&self, contact: &Contact) -> Result<(), StoreError> {
        let path = self.contact_path(&contact.id);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(id = %contact.id, "Deleted contact");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound(contact.id)),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

/// In-memory stores for tests
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::Mutex;

    /// Keeps contacts in memory and records every delete call
    #[derive(Default)]
    pub struct MemoryStore {
        contacts: Mutex<Vec<Contact>>,
        pub deleted: Mutex<Vec<ContactId>>,
        failing_deletes: Mutex<HashSet<ContactId>>,
        held_deletes: Mutex<HashMap<ContactId, Receiver<()>>>,
        fail_list: Mutex<bool>,
        fail_create: Mutex<bool>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_contacts(contacts: Vec<Contact>) -> Self {
            let store = Self::new();
            *store.contacts.lock().unwrap() = contacts;
            store
        }

        /// Make `delete` fail for this contact
        pub fn fail_delete_of(&self, id: ContactId) {
            self.failing_deletes.lock().unwrap().insert(id);
        }

        /// Block `delete` of this contact until the returned sender fires
        /// or is dropped
        pub fn hold_delete_of(&self, id: ContactId) -> Sender<()> {
            let (tx, rx) = mpsc::channel();
            self.held_deletes.lock().unwrap().insert(id, rx);
            tx
        }

        pub fn fail_list(&self, fail: bool) {
            *self.fail_list.lock().unwrap() = fail;
        }

        pub fn fail_create(&self, fail: bool) {
            *self.fail_create.lock().unwrap() = fail;
        }

        pub fn contains(&self, id: &ContactId) -> bool {
            self.contacts.lock().unwrap().iter().any(|c| c.id == *id)
        }

        pub fn delete_calls(&self) -> Vec<ContactId> {
            self.deleted.lock().unwrap().clone()
        }
    }

    impl ContactStore for MemoryStore {
        fn list(&self) -> Result<Vec<Contact>, StoreError> {
            if *self.fail_list.lock().unwrap() {
                return Err(StoreError::Io {
                    path: PathBuf::from("memory"),
                    source: io::Error::new(io::ErrorKind::Other, "list failed"),
                });
            }
            let mut contacts = self.contacts.lock().unwrap().clone();
            sort_contacts(&mut contacts);
            Ok(contacts)
        }

        fn create(&self, contact: NewContact) -> Result<Contact, StoreError> {
            let contact = Contact::from_new(contact, Utc::now());
            if *self.fail_create.lock().unwrap() {
                return Err(StoreError::Io {
                    path: PathBuf::from(format!("memory/{}.json", contact.id)),
                    source: io::Error::new(io::ErrorKind::Other, "disk full"),
                });
            }
            self.contacts.lock().unwrap().push(contact.clone());
            Ok(contact)
        }

        fn delete(&self, contact: &Contact) -> Result<(), StoreError> {
            self.deleted.lock().unwrap().push(contact.id);
            let held = self.held_deletes.lock().unwrap().remove(&contact.id);
            if let Some(gate) = held {
                let _ = gate.recv();
            }
            if self.failing_deletes.lock().unwrap().contains(&contact.id) {
                return Err(StoreError::NotFound(contact.id));
            }
            let mut contacts = self.contacts.lock().unwrap();
            let before = contacts.len();
            contacts.retain(|c| c.id != contact.id);
            if contacts.len() == before {
                return Err(StoreError::NotFound(contact.id));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactName;
    use tempfile::TempDir;

    fn draft(given: &str, family: &str) -> NewContact {
        NewContact {
            name: ContactName {
                given_name: given.to_string(),
                family_name: family.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_create_then_list_sorted() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).unwrap();

        store.create(draft("Grace", "Hopper")).unwrap();
        store.create(draft("Alan", "Turing")).unwrap();
        store.create(draft("Ada", "Lovelace")).unwrap();

        let names: Vec<String> = store
            .list()
            .unwrap()
            .iter()
            .map(|c| c.display_name())
            .collect();
        assert_eq!(names, vec!["Grace Hopper", "Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).unwrap();
        let contact = store.create(draft("Ada", "Lovelace")).unwrap();

        assert!(dir.path().join(format!("{}.json", contact.id)).exists());
        store.delete(&contact).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_contact_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).unwrap();
        let contact = store.create(draft("Ada", "Lovelace")).unwrap();
        store.delete(&contact).unwrap();

        match store.delete(&contact) {
            Err(StoreError::NotFound(id)) => assert_eq!(id, contact.id),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_list_skips_malformed_and_foreign_files() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::open(dir.path()).unwrap();
        store.create(draft("Ada", "Lovelace")).unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("README.txt"), "hello").unwrap();

        let contacts = store.list().unwrap();
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = DirectoryStore::open(&nested).unwrap();
        assert!(store.root().is_dir());
    }
}
