//! Bulk contact deletion
//!
//! Issues one delete per contact on its own worker thread and collects the
//! results on the UI thread. The first failure is reported as soon as it
//! arrives, but the job only settles once every worker has answered.
//! Workers are never cancelled.

use super::store::ContactStore;
use crate::model::{Contact, ContactId};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Message sent by a delete worker
struct DeleteMessage {
    id: ContactId,
    result: Result<(), String>,
}

/// Progress reported by `DeleteJob::poll`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The first failure observed; other workers may still be running
    Failed {
        /// `None` when a worker died without answering
        id: Option<ContactId>,
        error: String,
    },
    /// Every worker has answered
    Settled { deleted: usize, failed: usize },
}

/// A bulk delete in flight
pub struct DeleteJob {
    receiver: Receiver<DeleteMessage>,
    total: usize,
    received: usize,
    succeeded: usize,
    failure_reported: bool,
}

impl DeleteJob {
    /// Start deleting every contact concurrently
    pub fn spawn(store: Arc<dyn ContactStore>, contacts: Vec<Contact>) -> Self {
        let (tx, rx) = mpsc::channel();
        let total = contacts.len();

        for contact in contacts {
            let tx = tx.clone();
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let result = store.delete(&contact).map_err(|e| e.to_string());
                let _ = tx.send(DeleteMessage {
                    id: contact.id,
                    result,
                });
            });
        }

        Self {
            receiver: rx,
            total,
            received: 0,
            succeeded: 0,
            failure_reported: false,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// True once every worker has answered
    pub fn is_settled(&self) -> bool {
        self.received == self.total
    }

    fn settled(&self) -> DeleteOutcome {
        DeleteOutcome::Settled {
            deleted: self.succeeded,
            failed: self.total - self.succeeded,
        }
    }

    /// Drain finished deletes
    ///
    /// Returns `Failed` once, for the first failure, then `Settled` when
    /// the last worker has answered. Returns `None` while nothing new
    /// needs reporting.
    pub fn poll(&mut self) -> Option<DeleteOutcome> {
        while !self.is_settled() {
            match self.receiver.try_recv() {
                Ok(DeleteMessage { id, result }) => {
                    self.received += 1;
                    match result {
                        Ok(()) => {
                            tracing::debug!(%id, "Bulk delete item finished");
                            self.succeeded += 1;
                        }
                        Err(error) => {
                            tracing::warn!(%id, %error, "Bulk delete item failed");
                            if !self.failure_reported {
                                self.failure_reported = true;
                                return Some(DeleteOutcome::Failed {
                                    id: Some(id),
                                    error,
                                });
                            }
                        }
                    }
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    // Every sender is gone but not every result arrived
                    self.received = self.total;
                    if !self.failure_reported {
                        self.failure_reported = true;
                        return Some(DeleteOutcome::Failed {
                            id: None,
                            error: "delete worker stopped unexpectedly".to_string(),
                        });
                    }
                }
            }
        }
        Some(self.settled())
    }
}
