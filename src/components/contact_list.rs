//! Contact list component - the main view of the screen
//!
//! Displays contacts grouped by initial, with selection markers.
//! Owns the focus (highlighted row) and navigation logic.

use crate::action::Action;
use crate::component::Component;
use crate::model::{Contact, ContactId, Selection};
use crate::services::Translator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Display List Item
// ═══════════════════════════════════════════════════════════════════════════════

/// Display list item for grouped contact display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayListItem {
    /// Initial letter header (not selectable)
    Header(String),
    /// Contact reference by index in the contacts slice
    Contact(usize),
}

// ═══════════════════════════════════════════════════════════════════════════════
// Contact List Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Contact list with keyboard navigation
pub struct ContactList {
    /// List selection state (index into the display list)
    pub list_state: ListState,
    translator: Translator,
}

impl ContactList {
    pub fn new(translator: Translator) -> Self {
        Self {
            list_state: ListState::default(),
            translator,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────

    /// Build display items, one header per initial
    ///
    /// Returns the items and the indices of selectable rows. Contacts are
    /// expected in display order.
    pub fn build_display_list(contacts: &[Contact]) -> (Vec<DisplayListItem>, Vec<usize>) {
        let mut items = Vec::new();
        let mut selectable_indices = Vec::new();
        let mut current_group: Option<String> = None;

        for (index, contact) in contacts.iter().enumerate() {
            let initial = contact.group_initial();
            if current_group.as_deref() != Some(initial.as_str()) {
                items.push(DisplayListItem::Header(initial.clone()));
                current_group = Some(initial);
            }
            selectable_indices.push(items.len());
            items.push(DisplayListItem::Contact(index));
        }

        (items, selectable_indices)
    }

    /// Get the focused contact
    pub fn focused_contact<'a>(&self, contacts: &'a [Contact]) -> Option<&'a Contact> {
        let (display_items, _) = Self::build_display_list(contacts);
        let display_idx = self.list_state.selected()?;

        match display_items.get(display_idx)? {
            DisplayListItem::Contact(index) => contacts.get(*index),
            DisplayListItem::Header(_) => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select next contact (skipping headers, wrapping)
    pub fn next(&mut self, contacts: &[Contact]) {
        let (_, selectable_indices) = Self::build_display_list(contacts);
        let Some(&first) = selectable_indices.first() else {
            return;
        };

        let current = self.list_state.selected().unwrap_or(0);
        let next_idx = selectable_indices
            .iter()
            .find(|&&idx| idx > current)
            .copied()
            .unwrap_or(first);

        self.list_state.select(Some(next_idx));
    }

    /// Select previous contact (skipping headers, wrapping)
    pub fn previous(&mut self, contacts: &[Contact]) {
        let (_, selectable_indices) = Self::build_display_list(contacts);
        let Some(&last) = selectable_indices.last() else {
            return;
        };

        let current = self.list_state.selected().unwrap_or(0);
        let prev_idx = selectable_indices
            .iter()
            .rev()
            .find(|&&idx| idx < current)
            .copied()
            .unwrap_or(last);

        self.list_state.select(Some(prev_idx));
    }

    pub fn select_first(&mut self, contacts: &[Contact]) {
        let (_, selectable_indices) = Self::build_display_list(contacts);
        self.list_state.select(selectable_indices.first().copied());
    }

    pub fn select_last(&mut self, contacts: &[Contact]) {
        let (_, selectable_indices) = Self::build_display_list(contacts);
        self.list_state.select(selectable_indices.last().copied());
    }

    /// Keep focus valid after the contacts changed
    ///
    /// Focus follows `focused` when it is still listed, otherwise it stays at
    /// the same row, clamped to the last contact.
    pub fn sync(&mut self, contacts: &[Contact], focused: Option<ContactId>) {
        let (display_items, selectable_indices) = Self::build_display_list(contacts);
        if selectable_indices.is_empty() {
            self.list_state.select(None);
            return;
        }

        if let Some(id) = focused {
            let position = display_items.iter().position(|item| match item {
                DisplayListItem::Contact(index) => contacts[*index].id == id,
                DisplayListItem::Header(_) => false,
            });
            if let Some(position) = position {
                self.list_state.select(Some(position));
                return;
            }
        }

        let current = self.list_state.selected().unwrap_or(0);
        let target = selectable_indices
            .iter()
            .find(|&&idx| idx >= current)
            .or_else(|| selectable_indices.last())
            .copied();
        self.list_state.select(target);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn draw_with_contacts(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        contacts: &[Contact],
        selection: &Selection,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", self.translator.t("app.title"), contacts.len()))
            .border_style(Style::default().fg(Color::DarkGray));

        if contacts.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    self.translator.t("list.empty"),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    self.translator.t("list.empty_hint"),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let (display_items, _) = Self::build_display_list(contacts);
        let items: Vec<ListItem> = display_items
            .iter()
            .map(|item| match item {
                DisplayListItem::Header(initial) => ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("── {} ", initial),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        "──────────────────────",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                DisplayListItem::Contact(index) => {
                    let contact = &contacts[*index];
                    let is_selected = selection.contains(&contact.id);
                    let (marker, marker_style, name_style) = if is_selected {
                        (
                            "[x] ",
                            Style::default().fg(Color::Green),
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        (
                            "[ ] ",
                            Style::default().fg(Color::DarkGray),
                            Style::default().fg(Color::White),
                        )
                    };

                    let mut spans = vec![
                        Span::styled(marker, marker_style),
                        Span::styled(contact.display_name(), name_style),
                    ];
                    if let Some(email) = contact.primary_email() {
                        if contact.display_name() != email.address {
                            spans.push(Span::styled(
                                format!("  {}", email.address),
                                Style::default().fg(Color::DarkGray),
                            ));
                        }
                    }
                    ListItem::new(Line::from(spans))
                }
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for ContactList {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),

            KeyCode::Enter => Some(Action::OpenContactCard),

            // Selection
            KeyCode::Char(' ') => Some(Action::ToggleSelection),
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SelectAll)
            }

            // Toolbar
            KeyCode::Char('n') => Some(Action::OpenContactForm),
            KeyCode::Char('i') => Some(Action::OpenImportation),
            KeyCode::Char('R') => Some(Action::Refresh),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the contacts, so we use draw_with_contacts
        Ok(())
    }
}
