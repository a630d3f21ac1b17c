//! Contact creation form component
//!
//! A vertical list of single-line text inputs. Tab moves between fields,
//! Enter submits and Esc closes the form.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::{ContactName, NewContact};
use crate::services::Translator;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Input fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    GivenName,
    FamilyName,
    Email,
    Phone,
    Company,
    Birthday,
    Note,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::GivenName,
        FormField::FamilyName,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::Birthday,
        FormField::Note,
    ];

    fn label_key(&self) -> &'static str {
        match self {
            FormField::GivenName => "form.given_name",
            FormField::FamilyName => "form.family_name",
            FormField::Email => "form.email",
            FormField::Phone => "form.phone",
            FormField::Company => "form.company",
            FormField::Birthday => "form.birthday",
            FormField::Note => "form.note",
        }
    }
}

/// Contact creation form
pub struct ContactForm {
    values: [String; 7],
    /// Index into `FormField::ALL`
    pub focus: usize,
    /// Validation or store error shown under the fields
    pub error: Option<String>,
    translator: Translator,
}

impl ContactForm {
    pub fn new(translator: Translator) -> Self {
        Self {
            values: Default::default(),
            focus: 0,
            error: None,
            translator,
        }
    }

    /// Reset the form for a new contact
    pub fn reset(&mut self) {
        self.values = Default::default();
        self.focus = 0;
        self.error = None;
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field as usize]
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        self.values[field as usize] = value.to_string();
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn optional(&self, field: FormField) -> Option<String> {
        let value = self.value(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Build a draft from the inputs, or the message key of the first problem
    pub fn validate(&self) -> Result<NewContact, &'static str> {
        let mut draft = NewContact {
            name: ContactName {
                given_name: self.value(FormField::GivenName).trim().to_string(),
                family_name: self.value(FormField::FamilyName).trim().to_string(),
                ..Default::default()
            },
            company: self.optional(FormField::Company),
            note: self.optional(FormField::Note),
            ..Default::default()
        };

        if let Some(email) = self.optional(FormField::Email) {
            if !EMAIL_REGEX.is_match(&email) {
                return Err("form.error.email");
            }
            draft = draft.with_email(&email);
        }
        if let Some(phone) = self.optional(FormField::Phone) {
            draft = draft.with_phone(&phone);
        }
        if let Some(birthday) = self.optional(FormField::Birthday) {
            let date = NaiveDate::parse_from_str(&birthday, "%Y-%m-%d")
                .map_err(|_| "form.error.birthday")?;
            draft.birthday = Some(date);
        }

        if draft.is_blank() {
            return Err("form.error.blank");
        }
        Ok(draft)
    }

    /// Validate the inputs, recording a translated error on failure
    pub fn submit(&mut self) -> Option<NewContact> {
        match self.validate() {
            Ok(draft) => {
                self.error = None;
                Some(draft)
            }
            Err(key) => {
                self.error = Some(self.translator.t(key));
                None
            }
        }
    }

    fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    fn previous_field(&mut self) {
        self.focus = if self.focus == 0 {
            FormField::ALL.len() - 1
        } else {
            self.focus - 1
        };
    }

    pub fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let t = &self.translator;
        let popup_area = centered_popup(area, 60, 14 + FormField::ALL.len() as u16);
        frame.render_widget(Clear, popup_area);

        let label_width = FormField::ALL
            .iter()
            .map(|f| t.t(f.label_key()).chars().count())
            .max()
            .unwrap_or(0);

        let mut content = vec![Line::from("")];
        for (i, field) in FormField::ALL.iter().enumerate() {
            let focused = i == self.focus;
            let marker = if focused { "▶ " } else { "  " };
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let cursor = if focused { "█" } else { "" };

            content.push(Line::from(vec![
                Span::styled(
                    format!("{}{:<width$}  ", marker, t.t(field.label_key()), width = label_width),
                    label_style,
                ),
                Span::styled(
                    format!("{}{}", self.value(*field), cursor),
                    Style::default().fg(Color::White),
                ),
            ]));
            content.push(Line::from(""));
        }

        if let Some(error) = &self.error {
            content.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
            content.push(Line::from(""));
        }

        content.push(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Cyan)),
            Span::raw("Next  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}  ", t.t("form.save"))),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw(t.t("form.cancel")),
        ]));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", t.t("create_contact")))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
    }
}

impl Component for ContactForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseContactForm),
            KeyCode::Enter => Some(Action::SubmitContactForm),
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                None
            }
            KeyCode::Backspace => {
                self.values[self.focus].pop();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.values[self.focus].push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_form(frame, area);
        Ok(())
    }
}
