//! Data models for contacts

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub Uuid);

impl ContactId {
    /// A fresh random id
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured name of a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactName {
    #[serde(default)]
    pub name_prefix: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub additional_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub name_suffix: String,
}

impl ContactName {
    /// Full display name: every non-empty part, prefix to suffix, space separated
    pub fn full_name(&self) -> String {
        [
            &self.name_prefix,
            &self.given_name,
            &self.additional_name,
            &self.family_name,
            &self.name_suffix,
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.full_name().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

/// A persisted contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(default)]
    pub name: ContactName,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Build a persisted contact from a draft, assigning a fresh id
    pub fn from_new(new: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ContactId::random(),
            name: new.name,
            emails: new.emails,
            phones: new.phones,
            company: new.company,
            birthday: new.birthday,
            note: new.note,
            created_at,
        }
    }

    pub fn primary_email(&self) -> Option<&Email> {
        self.emails
            .iter()
            .find(|e| e.primary)
            .or_else(|| self.emails.first())
    }

    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones
            .iter()
            .find(|p| p.primary)
            .or_else(|| self.phones.first())
    }

    /// Name shown in lists; falls back to email, then phone
    pub fn display_name(&self) -> String {
        let full_name = self.name.full_name();
        if !full_name.is_empty() {
            return full_name;
        }
        if let Some(email) = self.primary_email() {
            return email.address.clone();
        }
        if let Some(phone) = self.primary_phone() {
            return phone.number.clone();
        }
        "?".to_string()
    }

    /// Ordering key: family name, then given name, then display name
    pub fn sort_key(&self) -> String {
        let family = self.name.family_name.trim();
        let given = self.name.given_name.trim();
        let key = match (family.is_empty(), given.is_empty()) {
            (false, false) => format!("{} {}", family, given),
            (false, true) => family.to_string(),
            (true, false) => given.to_string(),
            (true, true) => self.display_name(),
        };
        key.to_lowercase()
    }

    /// Group header for the list: uppercase initial, `#` when not alphabetic
    pub fn group_initial(&self) -> String {
        match self.sort_key().chars().next() {
            Some(c) if c.is_alphabetic() => c.to_uppercase().collect(),
            _ => "#".to_string(),
        }
    }
}

/// A contact that has not been persisted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: ContactName,
    pub emails: Vec<Email>,
    pub phones: Vec<Phone>,
    pub company: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub note: Option<String>,
}

impl NewContact {
    /// True when there is nothing to identify the contact by
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.emails.is_empty() && self.phones.is_empty()
    }

    pub fn with_email(mut self, address: &str) -> Self {
        let primary = self.emails.is_empty();
        self.emails.push(Email {
            address: address.to_string(),
            label: None,
            primary,
        });
        self
    }

    pub fn with_phone(mut self, number: &str) -> Self {
        let primary = self.phones.is_empty();
        self.phones.push(Phone {
            number: number.to_string(),
            label: None,
            primary,
        });
        self
    }
}
