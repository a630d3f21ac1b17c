//! Contact card dialog component
//!
//! Shows every field of one contact and offers deletion with a
//! confirmation step.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::Contact;
use crate::services::Translator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Contact card dialog
pub struct ContactCard {
    pub scroll_offset: usize,
    /// Waiting for the user to confirm deletion
    pub confirm_delete: bool,
    translator: Translator,
}

impl ContactCard {
    pub fn new(translator: Translator) -> Self {
        Self {
            scroll_offset: 0,
            confirm_delete: false,
            translator,
        }
    }

    /// Reset dialog state for a newly opened card
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
        self.confirm_delete = false;
    }

    /// Label/value rows for a contact
    fn field_rows(&self, contact: &Contact) -> Vec<(String, String)> {
        let t = &self.translator;
        let mut rows = Vec::new();

        for email in &contact.emails {
            let label = match &email.label {
                Some(kind) => format!("{} ({})", t.t("card.email"), kind),
                None => t.t("card.email"),
            };
            rows.push((label, email.address.clone()));
        }
        for phone in &contact.phones {
            let label = match &phone.label {
                Some(kind) => format!("{} ({})", t.t("card.phone"), kind),
                None => t.t("card.phone"),
            };
            rows.push((label, phone.number.clone()));
        }
        if let Some(company) = &contact.company {
            rows.push((t.t("card.company"), company.clone()));
        }
        if let Some(birthday) = contact.birthday {
            rows.push((t.t("card.birthday"), birthday.format("%Y-%m-%d").to_string()));
        }
        if let Some(note) = &contact.note {
            for (i, line) in note.lines().enumerate() {
                let label = if i == 0 { t.t("card.note") } else { String::new() };
                rows.push((label, line.to_string()));
            }
        }
        rows.push((
            t.t("card.created"),
            contact.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ));
        rows
    }

    /// Card body with labels padded to a common display width
    pub fn build_lines(&self, contact: &Contact) -> Vec<Line<'static>> {
        let rows = self.field_rows(contact);
        let label_width = rows
            .iter()
            .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
            .max()
            .unwrap_or(0);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", contact.display_name()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (label, value) in rows {
            let padding = label_width - UnicodeWidthStr::width(label.as_str());
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}{}  ", label, " ".repeat(padding)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(value, Style::default().fg(Color::White)),
            ]));
        }

        lines
    }

    pub fn draw_with_contact(&mut self, frame: &mut Frame, area: Rect, contact: &Contact) {
        let t = &self.translator;
        let popup_area = centered_popup(area, 64, area.height.saturating_sub(4).min(22));
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(popup_area);

        let lines = self.build_lines(contact);
        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let body = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", t.t("card.title")))
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(body, chunks[0]);

        let help = if self.confirm_delete {
            let name = contact.display_name();
            Line::from(vec![
                Span::styled(
                    t.t_with("card.confirm_delete", &[("name", name.as_str())]),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(" y ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(format!("{}  ", t.t("card.delete"))),
                Span::styled(" n ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(t.t("form.cancel")),
            ])
        } else {
            Line::from(vec![
                Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
                Span::raw("Scroll  "),
                Span::styled(" d ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(format!("{}  ", t.t("card.delete"))),
                Span::styled(" Esc/q ", Style::default().fg(Color::Yellow)),
                Span::raw(t.t("card.close")),
            ])
        };

        let help = Paragraph::new(help)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, chunks[1]);
        frame.render_widget(help, chunks[1]);
    }
}

impl Component for ContactCard {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.confirm_delete {
            let action = match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirm_delete = false;
                    Some(Action::DeleteDisplayedContact)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_delete = false;
                    None
                }
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseContactCard),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.confirm_delete = true;
                None
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Action::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the contact, so we use draw_with_contact
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactName, NewContact};
    use chrono::{NaiveDate, Utc};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ada() -> Contact {
        let mut draft = NewContact {
            name: ContactName {
                given_name: "Ada".to_string(),
                family_name: "Lovelace".to_string(),
                ..Default::default()
            },
            company: Some("Analytical Engines".to_string()),
            birthday: NaiveDate::from_ymd_opt(1815, 12, 10),
            note: Some("First line\nSecond line".to_string()),
            ..Default::default()
        };
        draft = draft.with_email("ada@example.com");
        Contact::from_new(draft, Utc::now())
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut card = ContactCard::new(Translator::default());

        assert_eq!(card.handle_key_event(key(KeyCode::Char('d'))).unwrap(), None);
        assert!(card.confirm_delete);

        assert_eq!(
            card.handle_key_event(key(KeyCode::Char('y'))).unwrap(),
            Some(Action::DeleteDisplayedContact)
        );
        assert!(!card.confirm_delete);
    }

    #[test]
    fn test_cancel_confirmation_keeps_card_open() {
        let mut card = ContactCard::new(Translator::default());
        card.handle_key_event(key(KeyCode::Char('d'))).unwrap();

        assert_eq!(card.handle_key_event(key(KeyCode::Esc)).unwrap(), None);
        assert!(!card.confirm_delete);

        assert_eq!(
            card.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseContactCard)
        );
    }

    #[test]
    fn test_scroll_updates_offset() {
        let mut card = ContactCard::new(Translator::default());
        card.update(Action::ScrollDown).unwrap();
        card.update(Action::ScrollDown).unwrap();
        card.update(Action::ScrollUp).unwrap();
        assert_eq!(card.scroll_offset, 1);

        card.reset();
        assert_eq!(card.scroll_offset, 0);
    }

    #[test]
    fn test_build_lines_lists_every_field() {
        let card = ContactCard::new(Translator::default());
        let text: Vec<String> = card
            .build_lines(&ada())
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(text.iter().any(|l| l.contains("Ada Lovelace")));
        assert!(text.iter().any(|l| l.contains("ada@example.com")));
        assert!(text.iter().any(|l| l.contains("Analytical Engines")));
        assert!(text.iter().any(|l| l.contains("1815-12-10")));
        assert!(text.iter().any(|l| l.contains("Second line")));
    }

    #[test]
    fn test_labels_are_aligned() {
        let card = ContactCard::new(Translator::default());
        let lines = card.build_lines(&ada());
        let label_widths: Vec<usize> = lines
            .iter()
            .skip(3)
            .map(|line| UnicodeWidthStr::width(line.spans[0].content.as_ref()))
            .collect();
        assert!(label_widths.windows(2).all(|w| w[0] == w[1]));
    }
}
