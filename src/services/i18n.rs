//! Translation service
//!
//! Static message tables keyed by dotted message keys. Placeholders use the
//! `%{name}` syntax.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Regex matching `%{param}` placeholders
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\{([A-Za-z0-9_]+)\}").unwrap());

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Fr => write!(f, "fr"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.title" => "Contacts",
        "app.error" => "Error",
        "toolbar.new" => "New contact",
        "toolbar.import" => "Import",
        "toolbar.refresh" => "Refresh",
        "toolbar.quit" => "Quit",
        "toolbar.loading" => "loading…",
        "list.empty" => "No contacts yet",
        "list.empty_hint" => "Press i to import contacts from a CSV file",
        "selection.count" => "%{count} selected",
        "selection.trash" => "Delete",
        "selection.clear" => "Clear",
        "selection.deleting" => "Deleting %{count} contacts…",
        "card.title" => "Contact",
        "card.email" => "Email",
        "card.phone" => "Phone",
        "card.company" => "Company",
        "card.birthday" => "Birthday",
        "card.note" => "Note",
        "card.created" => "Created",
        "card.delete" => "Delete",
        "card.close" => "Close",
        "card.confirm_delete" => "Delete %{name}?",
        "create_contact" => "Create a contact",
        "form.given_name" => "First name",
        "form.family_name" => "Last name",
        "form.email" => "Email",
        "form.phone" => "Phone",
        "form.company" => "Company",
        "form.birthday" => "Birthday (YYYY-MM-DD)",
        "form.note" => "Note",
        "form.save" => "Save",
        "form.cancel" => "Cancel",
        "form.error.blank" => "Enter a name, an email or a phone number",
        "form.error.email" => "Invalid email address",
        "form.error.birthday" => "Birthday must look like 1990-01-31",
        "importation.title" => "Import contacts",
        "importation.path" => "CSV file",
        "importation.run" => "Import",
        "importation.success" => "%{count} contacts imported",
        "importation.skipped" => "line %{line}: %{reason}",
        "importation.failed" => "Import failed: %{error}",
        "importation.none" => "No contact imported, %{skipped} rows skipped",
        "delete-confirmation.deleted" => "%{name} has been deleted",
        "delete.failed" => "Could not delete contact: %{error}",
        "bulk-delete.failed" => "Deleting contacts failed: %{error}",
        "bulk-delete.done" => "%{count} contacts deleted",
        "create.failed" => "Could not create contact: %{error}",
        "quit.question" => "Are you sure you want to quit?",
        "quit.yes" => "Yes, quit",
        "quit.no" => "No, cancel",
        _ => return None,
    };
    Some(text)
}

fn french(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.title" => "Contacts",
        "app.error" => "Erreur",
        "toolbar.new" => "Nouveau contact",
        "toolbar.import" => "Importer",
        "toolbar.refresh" => "Actualiser",
        "toolbar.quit" => "Quitter",
        "toolbar.loading" => "chargement…",
        "list.empty" => "Aucun contact pour le moment",
        "list.empty_hint" => "Appuyez sur i pour importer des contacts depuis un fichier CSV",
        "selection.count" => "%{count} sélectionné(s)",
        "selection.trash" => "Supprimer",
        "selection.clear" => "Désélectionner",
        "selection.deleting" => "Suppression de %{count} contacts…",
        "card.title" => "Contact",
        "card.email" => "Email",
        "card.phone" => "Téléphone",
        "card.company" => "Entreprise",
        "card.birthday" => "Anniversaire",
        "card.note" => "Note",
        "card.created" => "Créé le",
        "card.delete" => "Supprimer",
        "card.close" => "Fermer",
        "card.confirm_delete" => "Supprimer %{name} ?",
        "create_contact" => "Créer un contact",
        "form.given_name" => "Prénom",
        "form.family_name" => "Nom",
        "form.email" => "Email",
        "form.phone" => "Téléphone",
        "form.company" => "Entreprise",
        "form.birthday" => "Anniversaire (AAAA-MM-JJ)",
        "form.note" => "Note",
        "form.save" => "Enregistrer",
        "form.cancel" => "Annuler",
        "form.error.blank" => "Saisissez un nom, un email ou un numéro de téléphone",
        "form.error.email" => "Adresse email invalide",
        "form.error.birthday" => "L'anniversaire doit ressembler à 1990-01-31",
        "importation.title" => "Importer des contacts",
        "importation.path" => "Fichier CSV",
        "importation.run" => "Importer",
        "importation.success" => "%{count} contacts importés",
        "importation.skipped" => "ligne %{line} : %{reason}",
        "importation.failed" => "L'import a échoué : %{error}",
        "importation.none" => "Aucun contact importé, %{skipped} lignes ignorées",
        "delete-confirmation.deleted" => "%{name} a été supprimé",
        "delete.failed" => "Impossible de supprimer le contact : %{error}",
        "bulk-delete.failed" => "La suppression des contacts a échoué : %{error}",
        "bulk-delete.done" => "%{count} contacts supprimés",
        "create.failed" => "Impossible de créer le contact : %{error}",
        "quit.question" => "Voulez-vous vraiment quitter ?",
        "quit.yes" => "Oui, quitter",
        "quit.no" => "Non, annuler",
        _ => return None,
    };
    Some(text)
}

/// Looks up UI strings for one locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Localized text for `key`; unknown keys come back unchanged
    pub fn t(&self, key: &str) -> String {
        let text = match self.locale {
            Locale::En => english(key),
            Locale::Fr => french(key).or_else(|| english(key)),
        };
        text.map(str::to_string).unwrap_or_else(|| key.to_string())
    }

    /// Localized text with `%{param}` placeholders filled in
    ///
    /// Placeholders without a matching parameter are left as is.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.t(key);
        PLACEHOLDER_REGEX
            .replace_all(&template, |caps: &Captures| {
                let name = &caps[1];
                params
                    .iter()
                    .find(|(param, _)| *param == name)
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
