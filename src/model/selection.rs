//! Multi-selection of contacts for bulk actions

use super::contact::ContactId;

/// Ordered set of selected contact ids
///
/// Insertion order is preserved so bulk actions run in the order the user
/// picked contacts. An id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ContactId>,
}

impl Selection {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Add the id if absent, remove it otherwise
    pub fn toggle(&mut self, id: ContactId) {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Select every given id, keeping existing order for already selected ones
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ContactId>,
    {
        for id in ids {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Drop ids that are no longer displayed
    pub fn retain_existing(&mut self, displayed: &[ContactId]) {
        self.ids.retain(|id| displayed.contains(id));
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ContactId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
