//! Screen overlay state
//!
//! A single tagged value instead of one boolean per dialog: at most one
//! overlay is presented above the contact list at any time.

use super::contact::Contact;

/// The dialog currently presented over the contact list
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// CSV importation dialog
    Importation,
    /// Detail card for one contact
    ContactCard(Contact),
    /// Contact creation form
    CreationForm,
    /// Quit confirmation dialog
    QuitConfirm,
}

impl Overlay {
    pub fn is_none(&self) -> bool {
        matches!(self, Overlay::None)
    }

    pub fn is_importation(&self) -> bool {
        matches!(self, Overlay::Importation)
    }

    pub fn is_creation_form(&self) -> bool {
        matches!(self, Overlay::CreationForm)
    }

    /// The contact whose card is displayed, if any
    pub fn displayed_contact(&self) -> Option<&Contact> {
        match self {
            Overlay::ContactCard(contact) => Some(contact),
            _ => None,
        }
    }

    /// Replace the current overlay with `next`
    pub fn show(&mut self, next: Overlay) {
        *self = next;
    }

    /// Close the overlay only when it matches `predicate`
    ///
    /// Returns true if something was closed.
    pub fn hide_if(&mut self, predicate: impl Fn(&Overlay) -> bool) -> bool {
        if predicate(self) {
            *self = Overlay::None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::NewContact;
    use chrono::Utc;

    #[test]
    fn test_default_is_none() {
        assert!(Overlay::default().is_none());
    }

    #[test]
    fn test_show_replaces_current_overlay() {
        let mut overlay = Overlay::None;
        overlay.show(Overlay::Importation);
        assert!(overlay.is_importation());

        overlay.show(Overlay::CreationForm);
        assert!(overlay.is_creation_form());
        assert!(!overlay.is_importation());
    }

    #[test]
    fn test_hide_if_only_closes_matching_overlay() {
        let mut overlay = Overlay::CreationForm;
        assert!(!overlay.hide_if(Overlay::is_importation));
        assert!(overlay.is_creation_form());

        assert!(overlay.hide_if(Overlay::is_creation_form));
        assert!(overlay.is_none());
    }

    #[test]
    fn test_displayed_contact() {
        let contact = Contact::from_new(NewContact::default().with_email("a@b.c"), Utc::now());
        let overlay = Overlay::ContactCard(contact.clone());
        assert_eq!(overlay.displayed_contact(), Some(&contact));
        assert_eq!(Overlay::Importation.displayed_contact(), None);
    }
}
