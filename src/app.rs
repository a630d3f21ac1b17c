//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates between the screen controller and the components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_alerts, ContactCard, ContactForm, ContactList, ImportDialog,
    QuitDialog, SelectionBar, Toolbar,
};
use crate::controller::{ContactScreen, ScreenView};
use crate::model::{ContactId, FetchStatus, Overlay};
use crate::services::Translator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::path::Path;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Screen controller (overlays, contacts, selection)
    pub screen: ContactScreen,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub list: ContactList,
    pub selection_bar: SelectionBar,
    pub toolbar: Toolbar,
    pub card: ContactCard,
    pub form: ContactForm,
    pub import_dialog: ImportDialog,
    pub quit_dialog: QuitDialog,

    translator: Translator,
}

impl App {
    pub fn new(screen: ContactScreen, translator: Translator) -> App {
        App {
            screen,
            should_quit: false,
            list: ContactList::new(translator),
            selection_bar: SelectionBar::new(translator),
            toolbar: Toolbar::new(translator),
            card: ContactCard::new(translator),
            form: ContactForm::new(translator),
            import_dialog: ImportDialog::new(translator),
            quit_dialog: QuitDialog::new(translator),
            translator,
        }
    }

    fn focused_id(&self) -> Option<ContactId> {
        self.list
            .focused_contact(self.screen.contacts())
            .map(|contact| contact.id)
    }

    /// Keys accepted while there is no list to interact with
    fn handle_unloaded_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::ForceQuit),
            KeyCode::Char('R') => Some(Action::Refresh),
            _ => None,
        }
    }

    fn draw_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" R ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(format!("{}  ", self.translator.t("toolbar.refresh"))),
                Span::styled(" q ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(self.translator.t("toolbar.quit")),
            ]),
        ];
        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(format!(" {} ", self.translator.t("app.error")))
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        frame.render_widget(paragraph, area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if !matches!(self.screen.view(), ScreenView::Ready { .. }) {
            return Ok(self.handle_unloaded_key_event(key));
        }

        match self.screen.overlay() {
            Overlay::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Overlay::ContactCard(_) => self.card.handle_key_event(key),
            Overlay::CreationForm => self.form.handle_key_event(key),
            Overlay::Importation => self.import_dialog.handle_key_event(key),
            Overlay::None => {
                if !self.screen.selection().is_empty() {
                    if let Some(action) = self.selection_bar.handle_key_event(key)? {
                        return Ok(Some(action));
                    }
                }
                self.list.handle_key_event(key)
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            tracing::debug!(action = %action, "Dispatching action");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                let focused = self.focused_id();
                if self.screen.poll() {
                    self.list.sync(self.screen.contacts(), focused);
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}
            Action::Refresh => self.screen.refresh(),

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to ContactList)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.list.next(self.screen.contacts()),
            Action::PrevItem => self.list.previous(self.screen.contacts()),
            Action::FirstItem => self.list.select_first(self.screen.contacts()),
            Action::LastItem => self.list.select_last(self.screen.contacts()),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to ContactCard)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown => {
                self.card.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Overlays
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.screen.display_quit_confirm(),
            Action::CloseQuitDialog => self.screen.hide_quit_confirm(),
            Action::OpenContactCard => {
                if let Some(contact) = self.list.focused_contact(self.screen.contacts()).cloned() {
                    self.card.reset();
                    self.screen.display_contact_card(contact);
                }
            }
            Action::CloseContactCard => self.screen.hide_contact_card(),
            Action::DeleteDisplayedContact => {
                // Failures already raised an alert
                if let Err(e) = self.screen.delete_displayed_contact() {
                    tracing::debug!(error = %e, "Card deletion did not complete");
                }
            }
            Action::OpenContactForm => {
                self.form.reset();
                self.screen.display_contact_form();
            }
            Action::CloseContactForm => self.screen.hide_contact_form(),
            Action::SubmitContactForm => {
                if let Some(draft) = self.form.submit() {
                    match self.screen.create_contact(draft) {
                        Ok(_) => self.card.reset(),
                        Err(e) => {
                            let error = e.to_string();
                            self.form.set_error(
                                self.translator
                                    .t_with("create.failed", &[("error", error.as_str())]),
                            );
                        }
                    }
                }
            }
            Action::OpenImportation => {
                self.import_dialog.reset();
                self.screen.display_importation();
            }
            Action::CloseImportation => self.screen.hide_importation(),
            Action::RunImport(path) => match self.screen.import_contacts(Path::new(&path)) {
                Ok(report) => self.import_dialog.set_report(report),
                Err(e) => self.import_dialog.set_error(e.to_string()),
            },

            // ─────────────────────────────────────────────────────────────────
            // Selection
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleSelection => {
                if let Some(id) = self.focused_id() {
                    self.screen.toggle_selection(id);
                }
            }
            Action::ClearSelection => self.screen.clear_selection(),
            Action::SelectAll => self.screen.select_all(),
            Action::DeleteSelectedContacts => self.screen.delete_selected_contacts(),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (contacts, show_selection_bar, overlay) = match self.screen.view() {
            ScreenView::Nothing => return Ok(()),
            ScreenView::Error(message) => {
                self.draw_error(frame, area, message);
                return Ok(());
            }
            ScreenView::Ready {
                contacts,
                selection_bar,
                overlay,
            } => (contacts, selection_bar, overlay),
        };

        let notifier = self.screen.notifier();
        let alert_lines = (notifier.len() as u16).min(area.height / 4);
        let layout = calculate_main_layout(area, show_selection_bar, alert_lines);

        if let Some(bar_area) = layout.selection_bar {
            self.selection_bar.draw_with_count(
                frame,
                bar_area,
                self.screen.selection().len(),
                self.screen.deleting_count(),
            );
        }
        let loading = matches!(self.screen.status(), FetchStatus::Loading);
        self.toolbar.draw_with_status(frame, layout.toolbar, loading);
        self.list
            .draw_with_contacts(frame, layout.list, contacts, self.screen.selection());
        if let Some(alerts_area) = layout.alerts {
            draw_alerts(frame, alerts_area, notifier.alerts());
        }

        // At most one overlay, drawn on top
        match overlay {
            Overlay::None => {}
            Overlay::Importation => self.import_dialog.draw(frame, area)?,
            Overlay::ContactCard(contact) => self.card.draw_with_contact(frame, area, contact),
            Overlay::CreationForm => self.form.draw(frame, area)?,
            Overlay::QuitConfirm => self.quit_dialog.draw(frame, area)?,
        }

        Ok(())
    }
}
