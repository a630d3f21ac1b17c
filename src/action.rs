//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling background work
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Reload contacts from the store
    Refresh,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next contact in list
    NextItem,
    /// Move to previous contact in list
    PrevItem,
    /// Jump to first contact
    FirstItem,
    /// Jump to last contact
    LastItem,
    /// Scroll the open card up
    ScrollUp,
    /// Scroll the open card down
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Close the quit confirmation dialog
    CloseQuitDialog,
    /// Open the card of the focused contact
    OpenContactCard,
    /// Close the contact card
    CloseContactCard,
    /// Delete the contact whose card is open (already confirmed)
    DeleteDisplayedContact,
    /// Open the creation form
    OpenContactForm,
    /// Close the creation form without saving
    CloseContactForm,
    /// Validate and save the creation form
    SubmitContactForm,
    /// Open the importation dialog
    OpenImportation,
    /// Close the importation dialog
    CloseImportation,
    /// Import contacts from the CSV file at the given path
    RunImport(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle selection of the focused contact
    ToggleSelection,
    /// Clear all selections
    ClearSelection,
    /// Select every contact
    SelectAll,
    /// Delete every selected contact
    DeleteSelectedContacts,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Refresh => write!(f, "Refresh"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseQuitDialog => write!(f, "CloseQuitDialog"),
            Action::OpenContactCard => write!(f, "OpenContactCard"),
            Action::CloseContactCard => write!(f, "CloseContactCard"),
            Action::DeleteDisplayedContact => write!(f, "DeleteDisplayedContact"),
            Action::OpenContactForm => write!(f, "OpenContactForm"),
            Action::CloseContactForm => write!(f, "CloseContactForm"),
            Action::SubmitContactForm => write!(f, "SubmitContactForm"),
            Action::OpenImportation => write!(f, "OpenImportation"),
            Action::CloseImportation => write!(f, "CloseImportation"),
            Action::RunImport(path) => write!(f, "RunImport({})", path),
            Action::ToggleSelection => write!(f, "ToggleSelection"),
            Action::ClearSelection => write!(f, "ClearSelection"),
            Action::SelectAll => write!(f, "SelectAll"),
            Action::DeleteSelectedContacts => write!(f, "DeleteSelectedContacts"),
        }
    }
}
