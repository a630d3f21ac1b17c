//! CSV contact importer
//!
//! Reads a CSV file with a header row and turns each record into a
//! `NewContact`. Header names are matched loosely so exports from common
//! address books work without editing.

use crate::model::{ContactName, NewContact};
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("no recognized column in header")]
    NoKnownColumns,
}

/// Contact attribute a CSV column maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Prefix,
    Given,
    Additional,
    Family,
    Suffix,
    FullName,
    Email,
    Phone,
    Company,
    Birthday,
    Note,
}

impl Column {
    fn from_header(header: &str) -> Option<Column> {
        let normalized: String = header
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        let column = match normalized.as_str() {
            "prefix" | "nameprefix" | "title" => Column::Prefix,
            "givenname" | "firstname" => Column::Given,
            "additionalname" | "middlename" => Column::Additional,
            "familyname" | "lastname" | "surname" => Column::Family,
            "suffix" | "namesuffix" => Column::Suffix,
            "name" | "fullname" => Column::FullName,
            "email" | "emailaddress" | "mail" => Column::Email,
            "phone" | "phonenumber" | "mobile" | "tel" => Column::Phone,
            "company" | "organization" | "org" => Column::Company,
            "birthday" | "birthdate" => Column::Birthday,
            "note" | "notes" => Column::Note,
            _ => return None,
        };
        Some(column)
    }
}

/// A row that could not be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    pub reason: String,
}

/// A row that parsed into a contact
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// 1-based line number in the file
    pub line: u64,
    pub contact: NewContact,
}

/// Parsed CSV content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedImport {
    pub contacts: Vec<ParsedRow>,
    pub skipped: Vec<SkippedRow>,
}

/// Result of an importation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Parse a CSV file from disk
pub fn read_csv_file(path: &Path) -> Result<ParsedImport, ImportError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ImportError::Open {
            path: path.display().to_string(),
            source,
        })?;
    parse_records(reader)
}

/// Parse CSV content from any reader
pub fn read_csv<R: Read>(input: R) -> Result<ParsedImport, ImportError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    parse_records(reader)
}

fn parse_records<R: Read>(mut reader: csv::Reader<R>) -> Result<ParsedImport, ImportError> {
    let columns: Vec<Option<Column>> = reader
        .headers()?
        .iter()
        .map(Column::from_header)
        .collect();

    if columns.iter().all(Option::is_none) {
        return Err(ImportError::NoKnownColumns);
    }

    let has_split_name = columns
        .iter()
        .any(|c| matches!(c, Some(Column::Given) | Some(Column::Family)));

    let mut parsed = ParsedImport::default();
    let mut last_line = 1;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(last_line + 1);
                last_line = line;
                tracing::warn!(line, error = %e, "Skipping unreadable CSV row");
                parsed.skipped.push(SkippedRow {
                    line,
                    reason: format!("unreadable row: {}", e),
                });
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(last_line + 1);
        last_line = line;

        match build_contact(&columns, &record, has_split_name) {
            Ok(contact) if contact.is_blank() => parsed.skipped.push(SkippedRow {
                line,
                reason: "no name, email or phone".to_string(),
            }),
            Ok(contact) => parsed.contacts.push(ParsedRow { line, contact }),
            Err(reason) => parsed.skipped.push(SkippedRow { line, reason }),
        }
    }

    tracing::info!(
        contacts = parsed.contacts.len(),
        skipped = parsed.skipped.len(),
        "Parsed CSV import"
    );
    Ok(parsed)
}

fn build_contact(
    columns: &[Option<Column>],
    record: &csv::StringRecord,
    has_split_name: bool,
) -> Result<NewContact, String> {
    let mut contact = NewContact::default();

    for (column, value) in columns.iter().zip(record.iter()) {
        let Some(column) = column else { continue };
        if value.is_empty() {
            continue;
        }

        match column {
            Column::Prefix => contact.name.name_prefix = value.to_string(),
            Column::Given => contact.name.given_name = value.to_string(),
            Column::Additional => contact.name.additional_name = value.to_string(),
            Column::Family => contact.name.family_name = value.to_string(),
            Column::Suffix => contact.name.name_suffix = value.to_string(),
            Column::FullName => {
                if !has_split_name {
                    let split = split_full_name(value);
                    contact.name.given_name = split.given_name;
                    contact.name.family_name = split.family_name;
                }
            }
            Column::Email => contact = contact.with_email(value),
            Column::Phone => contact = contact.with_phone(value),
            Column::Company => contact.company = Some(value.to_string()),
            Column::Birthday => {
                let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| format!("invalid birthday '{}'", value))?;
                contact.birthday = Some(date);
            }
            Column::Note => contact.note = Some(value.to_string()),
        }
    }

    Ok(contact)
}

/// Split "Ada King Lovelace" into given "Ada King" and family "Lovelace"
fn split_full_name(full: &str) -> ContactName {
    match full.trim().rsplit_once(' ') {
        Some((given, family)) => ContactName {
            given_name: given.trim().to_string(),
            family_name: family.trim().to_string(),
            ..Default::default()
        },
        None => ContactName {
            given_name: full.trim().to_string(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_column_from_header_is_loose() {
        assert_eq!(Column::from_header("First Name"), Some(Column::Given));
        assert_eq!(Column::from_header("last_name"), Some(Column::Family));
        assert_eq!(Column::from_header("E-mail"), Some(Column::Email));
        assert_eq!(Column::from_header("Phone Number"), Some(Column::Phone));
        assert_eq!(Column::from_header("favourite colour"), None);
    }

    #[test]
    fn test_read_csv_maps_columns() {
        let input = "\
first name,last name,email,phone,company,birthday,notes
Ada,Lovelace,ada@example.com,+44 20 7946 0000,Analytical Engines,1815-12-10,Poet of science
";
        let parsed = read_csv(input.as_bytes()).unwrap();
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.contacts.len(), 1);

        let ada = &parsed.contacts[0].contact;
        assert_eq!(ada.name.full_name(), "Ada Lovelace");
        assert_eq!(ada.emails[0].address, "ada@example.com");
        assert!(ada.emails[0].primary);
        assert_eq!(ada.phones[0].number, "+44 20 7946 0000");
        assert_eq!(ada.company.as_deref(), Some("Analytical Engines"));
        assert_eq!(ada.birthday, NaiveDate::from_ymd_opt(1815, 12, 10));
        assert_eq!(ada.note.as_deref(), Some("Poet of science"));
    }

    #[test]
    fn test_full_name_column_is_split() {
        let input = "name,email\nGrace Brewster Hopper,grace@example.com\nCher,\n";
        let parsed = read_csv(input.as_bytes()).unwrap();
        assert_eq!(parsed.contacts.len(), 2);
        assert_eq!(parsed.contacts[0].contact.name.given_name, "Grace Brewster");
        assert_eq!(parsed.contacts[0].contact.name.family_name, "Hopper");
        assert_eq!(parsed.contacts[1].contact.name.given_name, "Cher");
        assert!(parsed.contacts[1].contact.emails.is_empty());
    }

    #[test]
    fn test_blank_and_invalid_rows_are_skipped_with_line_numbers() {
        let input = "\
given name,email,birthday
Ada,ada@example.com,
,,
Alan,alan@example.com,not-a-date
";
        let parsed = read_csv(input.as_bytes()).unwrap();
        assert_eq!(parsed.contacts.len(), 1);
        assert_eq!(parsed.contacts[0].line, 2);
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.skipped[0].line, 3);
        assert_eq!(parsed.skipped[0].reason, "no name, email or phone");
        assert_eq!(parsed.skipped[1].line, 4);
        assert!(parsed.skipped[1].reason.contains("not-a-date"));
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped_and_import_continues() {
        let input: &[u8] = b"email\nada@example.com\n\xff\xfe@broken\nalan@example.com\n";
        let parsed = read_csv(input).unwrap();

        assert_eq!(parsed.contacts.len(), 2);
        assert_eq!(parsed.contacts[1].line, 4);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 3);
        assert!(parsed.skipped[0].reason.starts_with("unreadable row"));
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let input = "given name,family name,email\nAda\n";
        let parsed = read_csv(input.as_bytes()).unwrap();
        assert_eq!(parsed.contacts.len(), 1);
        assert_eq!(parsed.contacts[0].contact.name.full_name(), "Ada");
    }

    #[test]
    fn test_unknown_header_is_rejected() {
        let input = "colour,size\nred,big\n";
        assert!(matches!(
            read_csv(input.as_bytes()),
            Err(ImportError::NoKnownColumns)
        ));
    }

    #[test]
    fn test_read_csv_file_missing_path() {
        let result = read_csv_file(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(ImportError::Open { .. })));
    }

    #[test]
    fn test_read_csv_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "email").unwrap();
        writeln!(file, "someone@example.com").unwrap();
        let parsed = read_csv_file(file.path()).unwrap();
        assert_eq!(parsed.contacts.len(), 1);
    }
}
