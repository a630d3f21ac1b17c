//! Contact screen controller
//!
//! Owns the screen's interaction state (which overlay is presented, the
//! fetched contacts) and delegates storage, selection and notifications to
//! collaborators handed in at construction.

use crate::model::{Contact, ContactId, ContactsData, FetchStatus, NewContact, Overlay, Selection};
use crate::services::importer::{self, ImportError, ImportReport};
use crate::services::{
    ContactStore, DeleteJob, DeleteOutcome, FetchJob, Notifier, StoreError,
};
use chrono::Local;
use std::path::Path;
use std::sync::Arc;

/// What the screen should render, derived from state only
#[derive(Debug, PartialEq)]
pub enum ScreenView<'a> {
    /// Data has not arrived yet
    Nothing,
    /// The last fetch failed
    Error(&'a str),
    /// Toolbar and list, plus the selection bar and overlay when present
    Ready {
        contacts: &'a [Contact],
        selection_bar: bool,
        overlay: &'a Overlay,
    },
}

/// Controller for the contact screen
pub struct ContactScreen {
    store: Arc<dyn ContactStore>,
    selection: Selection,
    notifier: Notifier,
    data: ContactsData,
    overlay: Overlay,
    fetch_job: Option<FetchJob>,
    delete_job: Option<DeleteJob>,
}

impl ContactScreen {
    /// Create the controller and start the initial fetch
    pub fn new(store: Arc<dyn ContactStore>, selection: Selection, notifier: Notifier) -> Self {
        let mut screen = Self {
            store,
            selection,
            notifier,
            data: ContactsData::new(),
            overlay: Overlay::None,
            fetch_job: None,
            delete_job: None,
        };
        screen.refresh();
        screen
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn displayed_contact(&self) -> Option<&Contact> {
        self.overlay.displayed_contact()
    }

    pub fn is_importation_displayed(&self) -> bool {
        self.overlay.is_importation()
    }

    pub fn is_creation_form_displayed(&self) -> bool {
        self.overlay.is_creation_form()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn contacts(&self) -> &[Contact] {
        self.data.contacts()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.data.status
    }

    pub fn is_loaded(&self) -> bool {
        self.data.data.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.delete_job.is_some()
    }

    /// Number of contacts being deleted by the running bulk delete
    pub fn deleting_count(&self) -> usize {
        self.delete_job.as_ref().map(DeleteJob::total).unwrap_or(0)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering contract
    // ─────────────────────────────────────────────────────────────────────────

    /// Decide what to render; no state is touched
    pub fn view(&self) -> ScreenView<'_> {
        let Some(contacts) = self.data.data.as_deref() else {
            return ScreenView::Nothing;
        };
        if let FetchStatus::Error(message) = &self.data.status {
            return ScreenView::Error(message);
        }
        ScreenView::Ready {
            contacts,
            selection_bar: !self.selection.is_empty(),
            overlay: &self.overlay,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────

    pub fn display_importation(&mut self) {
        self.overlay.show(Overlay::Importation);
    }

    pub fn hide_importation(&mut self) {
        self.overlay.hide_if(Overlay::is_importation);
    }

    /// Show the card of `contact`, whether or not it is in the list
    pub fn display_contact_card(&mut self, contact: Contact) {
        self.overlay.show(Overlay::ContactCard(contact));
    }

    pub fn hide_contact_card(&mut self) {
        self.overlay
            .hide_if(|overlay| overlay.displayed_contact().is_some());
    }

    pub fn display_contact_form(&mut self) {
        self.overlay.show(Overlay::CreationForm);
    }

    pub fn hide_contact_form(&mut self) {
        self.overlay.hide_if(Overlay::is_creation_form);
    }

    pub fn display_quit_confirm(&mut self) {
        self.overlay.show(Overlay::QuitConfirm);
    }

    pub fn hide_quit_confirm(&mut self) {
        self.overlay
            .hide_if(|overlay| matches!(overlay, Overlay::QuitConfirm));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contact lifecycle callbacks
    // ─────────────────────────────────────────────────────────────────────────

    /// Called once a contact has been deleted from its card
    ///
    /// Closes the card and confirms the deletion to the user. Does not delete.
    pub fn on_delete_contact(&mut self, contact: &Contact) {
        self.hide_contact_card();
        let name = contact.name.full_name();
        self.notifier
            .info("delete-confirmation.deleted", &[("name", name.as_str())]);
        self.refresh();
    }

    /// Called once a contact has been created from the form
    pub fn on_create_contact(&mut self, contact: Contact) {
        self.hide_contact_form();
        self.display_contact_card(contact);
    }

    /// Delete a single contact, then run the deletion callback
    pub fn delete_contact(&mut self, contact: &Contact) -> Result<(), StoreError> {
        match self.store.delete(contact) {
            Ok(()) => {
                self.on_delete_contact(contact);
                Ok(())
            }
            Err(e) => {
                tracing::error!(id = %contact.id, error = %e, "Failed to delete contact");
                self.notifier
                    .error("delete.failed", &[("error", e.to_string().as_str())]);
                Err(e)
            }
        }
    }

    /// Delete the contact whose card is open
    pub fn delete_displayed_contact(&mut self) -> Result<(), StoreError> {
        match self.displayed_contact().cloned() {
            Some(contact) => self.delete_contact(&contact),
            None => Ok(()),
        }
    }

    /// Persist a draft and show its card
    pub fn create_contact(&mut self, draft: NewContact) -> Result<Contact, StoreError> {
        let created = self.store.create(draft).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to create contact");
        })?;
        tracing::info!(id = %created.id, "Contact created from form");
        self.on_create_contact(created.clone());
        self.refresh();
        Ok(created)
    }

    /// Import every valid row of a CSV file
    pub fn import_contacts(&mut self, path: &Path) -> Result<ImportReport, ImportError> {
        let parsed = match importer::read_csv_file(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.notifier
                    .error("importation.failed", &[("error", e.to_string().as_str())]);
                return Err(e);
            }
        };

        let mut report = ImportReport {
            imported: 0,
            skipped: parsed.skipped,
        };
        for row in parsed.contacts {
            match self.store.create(row.contact) {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    tracing::warn!(line = row.line, error = %e, "Failed to store imported contact");
                    report.skipped.push(importer::SkippedRow {
                        line: row.line,
                        reason: e.to_string(),
                    });
                }
            }
        }
        report.skipped.sort_by_key(|row| row.line);

        tracing::info!(
            path = %path.display(),
            imported = report.imported,
            skipped = report.skipped.len(),
            "Importation finished"
        );
        if report.imported == 0 && !report.skipped.is_empty() {
            let skipped = report.skipped.len().to_string();
            self.notifier
                .error("importation.none", &[("skipped", skipped.as_str())]);
        } else {
            let count = report.imported.to_string();
            self.notifier
                .info("importation.success", &[("count", count.as_str())]);
        }
        self.refresh();
        Ok(report)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_selection(&mut self, id: ContactId) {
        if self.data.find(&id).is_some() {
            self.selection.toggle(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        let ids = self.data.ids();
        self.selection.select_all(ids);
    }

    /// Start deleting every selected contact concurrently
    ///
    /// The selection is cleared by `poll` once every delete has succeeded.
    /// Does nothing while a previous bulk delete still has workers running.
    pub fn delete_selected_contacts(&mut self) {
        if self.delete_job.is_some() {
            tracing::warn!("Bulk delete already running");
            return;
        }

        let contacts: Vec<Contact> = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.data.find(id).cloned())
            .collect();
        if contacts.is_empty() {
            return;
        }

        tracing::info!(count = contacts.len(), "Starting bulk delete");
        self.delete_job = Some(DeleteJob::spawn(Arc::clone(&self.store), contacts));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Background work
    // ─────────────────────────────────────────────────────────────────────────

    /// Start reloading contacts from the store
    pub fn refresh(&mut self) {
        self.data.start_loading();
        self.fetch_job = Some(FetchJob::spawn(Arc::clone(&self.store)));
    }

    /// Collect finished background work and expire old alerts
    ///
    /// Returns true when state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Some(outcome) = self.delete_job.as_mut().and_then(DeleteJob::poll) {
            changed = true;
            self.handle_delete_outcome(outcome);
        }

        if let Some(result) = self.fetch_job.as_ref().and_then(FetchJob::poll) {
            self.fetch_job = None;
            changed = true;
            match result {
                Ok(contacts) => {
                    tracing::info!(count = contacts.len(), "Contacts loaded");
                    self.data.loaded(contacts);
                    self.selection.retain_existing(&self.data.ids());
                }
                Err(message) => {
                    tracing::error!(error = %message, "Failed to load contacts");
                    self.data.failed(message);
                }
            }
        }

        let before = self.notifier.len();
        self.notifier.expire(Local::now());
        changed || before != self.notifier.len()
    }

    /// The job stays alive until every worker has answered, so a reload
    /// never races with deletes still in flight
    fn handle_delete_outcome(&mut self, outcome: DeleteOutcome) {
        match outcome {
            DeleteOutcome::Failed { id, error } => {
                match id {
                    Some(id) => tracing::error!(%id, %error, "Bulk delete failed"),
                    None => tracing::error!(%error, "Bulk delete failed"),
                }
                self.notifier
                    .error("bulk-delete.failed", &[("error", error.as_str())]);
            }
            DeleteOutcome::Settled { deleted, failed } => {
                self.delete_job = None;
                tracing::info!(deleted, failed, "Bulk delete finished");
                if failed == 0 {
                    self.selection.clear();
                    let count = deleted.to_string();
                    self.notifier
                        .info("bulk-delete.done", &[("count", count.as_str())]);
                }
                self.refresh();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactName;
    use crate::services::notifier::AlertLevel;
    use crate::services::store::testing::MemoryStore;
    use crate::services::{Locale, Translator};
    use chrono::{Duration, Utc};
    use std::io::Write;
    use std::thread;
    use std::time::Instant;

    fn contact(given: &str, family: &str) -> Contact {
        Contact::from_new(
            NewContact {
                name: ContactName {
                    given_name: given.to_string(),
                    family_name: family.to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Utc::now(),
        )
    }

    fn notifier() -> Notifier {
        Notifier::new(Translator::new(Locale::En), Duration::seconds(60))
    }

    fn screen_with(store: Arc<MemoryStore>) -> ContactScreen {
        ContactScreen::new(store, Selection::new(), notifier())
    }

    /// Poll until no background job is left
    fn settle(screen: &mut ContactScreen) {
        let deadline = Instant::now() + std::time::Duration::from_secs(5);
        loop {
            screen.poll();
            if screen.fetch_job.is_none() && screen.delete_job.is_none() {
                return;
            }
            assert!(Instant::now() < deadline, "background work did not settle");
            thread::sleep(std::time::Duration::from_millis(5));
        }
    }

    fn loaded_screen(contacts: Vec<Contact>) -> (ContactScreen, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_contacts(contacts));
        let mut screen = screen_with(store.clone());
        settle(&mut screen);
        (screen, store)
    }

    #[test]
    fn test_initial_state_is_all_hidden() {
        let (screen, _) = loaded_screen(vec![]);
        assert!(screen.displayed_contact().is_none());
        assert!(!screen.is_importation_displayed());
        assert!(!screen.is_creation_form_displayed());
        assert!(screen.overlay().is_none());
    }

    #[test]
    fn test_view_is_nothing_before_data_arrives() {
        let store = Arc::new(MemoryStore::new());
        let mut screen = screen_with(store);
        screen.display_contact_form();
        screen.selection.toggle(ContactId::random());

        assert_eq!(screen.view(), ScreenView::Nothing);
    }

    #[test]
    fn test_view_reports_fetch_error() {
        let store = Arc::new(MemoryStore::new());
        store.fail_list(true);
        let mut screen = screen_with(store);
        settle(&mut screen);

        match screen.view() {
            ScreenView::Error(message) => assert!(message.contains("list failed")),
            other => panic!("expected error view, got {:?}", other),
        }
    }

    #[test]
    fn test_view_renders_exactly_the_current_overlay() {
        let ada = contact("Ada", "Lovelace");
        let (mut screen, _) = loaded_screen(vec![ada.clone()]);

        let overlay_of = |s: &ContactScreen| match s.view() {
            ScreenView::Ready { overlay, .. } => overlay.clone(),
            other => panic!("expected ready view, got {:?}", other),
        };

        assert_eq!(overlay_of(&screen), Overlay::None);
        screen.display_importation();
        assert_eq!(overlay_of(&screen), Overlay::Importation);
        screen.display_contact_card(ada.clone());
        assert_eq!(overlay_of(&screen), Overlay::ContactCard(ada));
        screen.display_contact_form();
        assert_eq!(overlay_of(&screen), Overlay::CreationForm);
        screen.hide_contact_form();
        assert_eq!(overlay_of(&screen), Overlay::None);
    }

    #[test]
    fn test_selection_bar_iff_selection_non_empty() {
        let ada = contact("Ada", "Lovelace");
        let (mut screen, _) = loaded_screen(vec![ada.clone()]);

        let bar = |s: &ContactScreen| match s.view() {
            ScreenView::Ready { selection_bar, .. } => selection_bar,
            other => panic!("expected ready view, got {:?}", other),
        };

        assert!(!bar(&screen));
        screen.toggle_selection(ada.id);
        assert!(bar(&screen));
        screen.clear_selection();
        assert!(!bar(&screen));
    }

    #[test]
    fn test_form_display_then_hide_restores_state() {
        let ada = contact("Ada", "Lovelace");
        let (mut screen, _) = loaded_screen(vec![ada.clone()]);
        screen.toggle_selection(ada.id);
        let selection_before = screen.selection().clone();

        screen.display_contact_form();
        assert!(screen.is_creation_form_displayed());
        screen.hide_contact_form();

        assert!(!screen.is_creation_form_displayed());
        assert!(screen.overlay().is_none());
        assert_eq!(screen.selection(), &selection_before);
        assert!(screen.notifier().is_empty());
    }

    #[test]
    fn test_hide_only_closes_its_own_overlay() {
        let (mut screen, _) = loaded_screen(vec![]);
        screen.display_importation();
        screen.hide_contact_form();
        screen.hide_contact_card();
        assert!(screen.is_importation_displayed());

        screen.hide_importation();
        assert!(screen.overlay().is_none());
    }

    #[test]
    fn test_on_create_contact_shows_card() {
        let (mut screen, _) = loaded_screen(vec![]);
        let grace = contact("Grace", "Hopper");

        screen.display_contact_form();
        screen.on_create_contact(grace.clone());

        assert!(!screen.is_creation_form_displayed());
        assert_eq!(screen.displayed_contact(), Some(&grace));
    }

    #[test]
    fn test_display_card_does_not_require_listed_contact() {
        let (mut screen, _) = loaded_screen(vec![]);
        let stranger = contact("Alan", "Turing");
        screen.display_contact_card(stranger.clone());
        assert_eq!(screen.displayed_contact(), Some(&stranger));
    }

    #[test]
    fn test_on_delete_contact_hides_card_and_notifies_once() {
        let ada = contact("Ada", "Lovelace");
        let (mut screen, store) = loaded_screen(vec![ada.clone()]);

        screen.display_contact_card(ada.clone());
        screen.on_delete_contact(&ada);

        assert!(screen.displayed_contact().is_none());
        let alerts: Vec<_> = screen.notifier().alerts().collect();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Info);
        assert!(alerts[0].message.contains("Ada Lovelace"));
        assert!(store.delete_calls().is_empty());
    }

    #[test]
    fn test_delete_displayed_contact_deletes_then_confirms() {
        let ada = contact("Ada", "Lovelace");
        let (mut screen, store) = loaded_screen(vec![ada.clone()]);

        screen.display_contact_card(ada.clone());
        screen.delete_displayed_contact().unwrap();
        settle(&mut screen);

        assert_eq!(store.delete_calls(), vec![ada.id]);
        assert!(screen.displayed_contact().is_none());
        assert!(screen.contacts().is_empty());
    }

    #[test]
    fn test_delete_contact_failure_keeps_card() {
        let ada = contact("Ada", "Lovelace");
        let (mut screen, store) = loaded_screen(vec![ada.clone()]);
        store.fail_delete_of(ada.id);

        screen.display_contact_card(ada.clone());
        assert!(screen.delete_displayed_contact().is_err());

        assert_eq!(screen.displayed_contact(), Some(&ada));
        assert_eq!(
            screen.notifier().alerts().next().map(|a| a.level),
            Some(AlertLevel::Error)
        );
    }

    #[test]
    fn test_delete_selected_contacts_clears_selection_after_all_succeed() {
        let (a, b, c) = (
            contact("Ada", "Lovelace"),
            contact("Alan", "Turing"),
            contact("Grace", "Hopper"),
        );
        let (mut screen, store) = loaded_screen(vec![a.clone(), b.clone(), c.clone()]);
        screen.toggle_selection(a.id);
        screen.toggle_selection(b.id);

        screen.delete_selected_contacts();
        assert!(screen.is_deleting());
        assert_eq!(screen.deleting_count(), 2);
        settle(&mut screen);

        let mut calls = store.delete_calls();
        calls.sort();
        let mut expected = vec![a.id, b.id];
        expected.sort();
        assert_eq!(calls, expected);
        assert!(screen.selection().is_empty());
        assert_eq!(screen.contacts(), &[c]);
    }

    #[test]
    fn test_delete_selected_contacts_failure_keeps_selection() {
        let (a, b) = (contact("Ada", "Lovelace"), contact("Alan", "Turing"));
        let (mut screen, store) = loaded_screen(vec![a.clone(), b.clone()]);
        store.fail_delete_of(b.id);
        screen.toggle_selection(a.id);
        screen.toggle_selection(b.id);

        screen.delete_selected_contacts();
        settle(&mut screen);

        // `a` is gone after the reload, so only `b` stays selected
        assert_eq!(screen.selection().ids(), &[b.id]);
        assert_eq!(screen.contacts(), &[b]);
        let errors = screen
            .notifier()
            .alerts()
            .filter(|alert| alert.level == AlertLevel::Error)
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_failed_bulk_delete_waits_for_slow_deletes_before_reloading() {
        let (a, b) = (contact("Ada", "Lovelace"), contact("Alan", "Turing"));
        let (mut screen, store) = loaded_screen(vec![a.clone(), b.clone()]);
        let gate = store.hold_delete_of(a.id);
        store.fail_delete_of(b.id);
        screen.toggle_selection(a.id);
        screen.toggle_selection(b.id);

        screen.delete_selected_contacts();
        let deadline = Instant::now() + std::time::Duration::from_secs(5);
        while !screen.notifier().alerts().any(|alert| alert.level == AlertLevel::Error) {
            assert!(Instant::now() < deadline, "failure was not reported");
            screen.poll();
            thread::sleep(std::time::Duration::from_millis(5));
        }

        // Failure is reported but the slow delete is still running
        assert!(screen.is_deleting());
        assert!(screen.fetch_job.is_none());
        assert_eq!(screen.selection().len(), 2);

        // A new trigger must not start a second job meanwhile
        screen.delete_selected_contacts();
        assert_eq!(store.delete_calls().len(), 2);

        gate.send(()).unwrap();
        settle(&mut screen);

        assert!(!store.contains(&a.id));
        assert!(screen.contacts().iter().all(|c| c.id != a.id));
        assert!(!screen.selection().contains(&a.id));
        assert_eq!(screen.selection().ids(), &[b.id]);
    }

    #[test]
    fn test_selection_cleared_only_after_every_delete_settles() {
        let (a, b) = (contact("Ada", "Lovelace"), contact("Alan", "Turing"));
        let (mut screen, store) = loaded_screen(vec![a.clone(), b.clone()]);
        let gate = store.hold_delete_of(b.id);
        screen.toggle_selection(a.id);
        screen.toggle_selection(b.id);

        screen.delete_selected_contacts();
        let deadline = Instant::now() + std::time::Duration::from_secs(5);
        while store.contains(&a.id) {
            assert!(Instant::now() < deadline, "first delete did not finish");
            thread::sleep(std::time::Duration::from_millis(5));
        }
        for _ in 0..5 {
            screen.poll();
            thread::sleep(std::time::Duration::from_millis(5));
        }

        assert!(screen.is_deleting());
        assert_eq!(screen.selection().len(), 2);

        gate.send(()).unwrap();
        settle(&mut screen);

        assert!(screen.selection().is_empty());
        assert!(screen.contacts().is_empty());
        assert!(screen
            .notifier()
            .alerts()
            .any(|alert| alert.level == AlertLevel::Info && alert.message == "2 contacts deleted"));
    }

    #[test]
    fn test_delete_selected_contacts_ignores_second_trigger() {
        let a = contact("Ada", "Lovelace");
        let (mut screen, store) = loaded_screen(vec![a.clone()]);
        screen.toggle_selection(a.id);

        screen.delete_selected_contacts();
        screen.delete_selected_contacts();
        settle(&mut screen);

        assert_eq!(store.delete_calls(), vec![a.id]);
    }

    #[test]
    fn test_toggle_selection_ignores_unknown_contact() {
        let (mut screen, _) = loaded_screen(vec![contact("Ada", "Lovelace")]);
        screen.toggle_selection(ContactId::random());
        assert!(screen.selection().is_empty());
    }

    #[test]
    fn test_select_all_then_reload_keeps_subset_invariant() {
        let (a, b) = (contact("Ada", "Lovelace"), contact("Alan", "Turing"));
        let (mut screen, store) = loaded_screen(vec![a.clone(), b.clone()]);
        screen.select_all();
        assert_eq!(screen.selection().len(), 2);

        store.delete(&a).unwrap();
        screen.refresh();
        settle(&mut screen);

        assert_eq!(screen.selection().ids(), &[b.id]);
    }

    #[test]
    fn test_create_contact_persists_and_opens_card() {
        let (mut screen, store) = loaded_screen(vec![]);
        screen.display_contact_form();

        let created = screen
            .create_contact(NewContact::default().with_email("new@example.com"))
            .unwrap();
        settle(&mut screen);

        assert_eq!(screen.displayed_contact(), Some(&created));
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(screen.contacts().len(), 1);
    }

    #[test]
    fn test_import_reports_store_failures_with_their_line() {
        let (mut screen, store) = loaded_screen(vec![]);
        store.fail_create(true);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "email").unwrap();
        writeln!(file, "ada@example.com").unwrap();
        writeln!(file, "alan@example.com").unwrap();

        let report = screen.import_contacts(file.path()).unwrap();
        settle(&mut screen);

        assert_eq!(report.imported, 0);
        let lines: Vec<u64> = report.skipped.iter().map(|row| row.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert!(report.skipped[0].reason.contains("disk full"));

        let alerts: Vec<_> = screen.notifier().alerts().collect();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Error);
        assert_eq!(alerts[0].message, "No contact imported, 2 rows skipped");
    }

    #[test]
    fn test_import_contacts_from_csv() {
        let (mut screen, store) = loaded_screen(vec![]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first name,last name,email").unwrap();
        writeln!(file, "Ada,Lovelace,ada@example.com").unwrap();
        writeln!(file, ",,").unwrap();
        writeln!(file, "Alan,Turing,").unwrap();

        screen.display_importation();
        let report = screen.import_contacts(file.path()).unwrap();
        settle(&mut screen);

        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(store.list().unwrap().len(), 2);
        assert_eq!(screen.contacts().len(), 2);
        assert!(screen.is_importation_displayed());
        assert!(screen
            .notifier()
            .alerts()
            .any(|alert| alert.message == "2 contacts imported"));
    }

    #[test]
    fn test_import_missing_file_notifies_error() {
        let (mut screen, _) = loaded_screen(vec![]);
        assert!(screen
            .import_contacts(Path::new("/no/such/file.csv"))
            .is_err());
        assert_eq!(
            screen.notifier().alerts().next().map(|a| a.level),
            Some(AlertLevel::Error)
        );
    }
}
