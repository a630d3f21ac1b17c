//! Importation dialog component
//!
//! Asks for a CSV path, runs the import and shows what happened.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::services::{ImportReport, Translator};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Skipped rows listed before the rest is summarized
const MAX_SKIPPED_LINES: usize = 6;

/// Outcome of the last import run
#[derive(Debug, Clone, PartialEq)]
pub enum ImportResult {
    Report(ImportReport),
    Failed(String),
}

/// Importation dialog
pub struct ImportDialog {
    pub path: String,
    pub result: Option<ImportResult>,
    translator: Translator,
}

impl ImportDialog {
    pub fn new(translator: Translator) -> Self {
        Self {
            path: String::new(),
            result: None,
            translator,
        }
    }

    pub fn reset(&mut self) {
        self.path.clear();
        self.result = None;
    }

    pub fn set_report(&mut self, report: ImportReport) {
        self.result = Some(ImportResult::Report(report));
    }

    pub fn set_error(&mut self, error: String) {
        self.result = Some(ImportResult::Failed(error));
    }

    fn result_lines(&self) -> Vec<Line<'static>> {
        let t = &self.translator;
        let mut lines = Vec::new();
        match &self.result {
            None => {}
            Some(ImportResult::Failed(error)) => {
                lines.push(Line::from(Span::styled(
                    format!("  {}", t.t_with("importation.failed", &[("error", error.as_str())])),
                    Style::default().fg(Color::Red),
                )));
            }
            Some(ImportResult::Report(report)) => {
                let count = report.imported.to_string();
                lines.push(Line::from(Span::styled(
                    format!("  {}", t.t_with("importation.success", &[("count", count.as_str())])),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                for row in report.skipped.iter().take(MAX_SKIPPED_LINES) {
                    let line = row.line.to_string();
                    lines.push(Line::from(Span::styled(
                        format!(
                            "  {}",
                            t.t_with(
                                "importation.skipped",
                                &[("line", line.as_str()), ("reason", row.reason.as_str())]
                            )
                        ),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                let hidden = report.skipped.len().saturating_sub(MAX_SKIPPED_LINES);
                if hidden > 0 {
                    lines.push(Line::from(Span::styled(
                        format!("  … +{}", hidden),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }
        lines
    }
}

impl Component for ImportDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseImportation),
            KeyCode::Enter => {
                let path = self.path.trim();
                if path.is_empty() {
                    None
                } else {
                    Some(Action::RunImport(path.to_string()))
                }
            }
            KeyCode::Backspace => {
                self.path.pop();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.path.push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let t = &self.translator;
        let popup_area = centered_popup(area, 70, 16);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {}: ", t.t("importation.path")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}█", self.path),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
        ];
        content.extend(self.result_lines());
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}  ", t.t("importation.run"))),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw(t.t("card.close")),
        ]));

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", t.t("importation.title")))
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
