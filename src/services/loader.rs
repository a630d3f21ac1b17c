//! Background contact loading
//!
//! Runs `ContactStore::list` on a worker thread so the UI keeps drawing
//! while the store is read.

use super::store::{ContactStore, StoreError};
use crate::model::Contact;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// A fetch in flight
pub struct FetchJob {
    receiver: Receiver<Result<Vec<Contact>, StoreError>>,
}

impl FetchJob {
    /// Start listing contacts in the background
    pub fn spawn(store: Arc<dyn ContactStore>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(store.list());
        });
        Self { receiver: rx }
    }

    /// Returns the result once the worker has finished
    pub fn poll(&self) -> Option<Result<Vec<Contact>, String>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result.map_err(|e| e.to_string())),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("contact loader stopped unexpectedly".to_string()))
            }
        }
    }
}
