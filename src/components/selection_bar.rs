//! Selection bar shown while contacts are selected

use crate::action::Action;
use crate::component::Component;
use crate::services::Translator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bulk action bar
pub struct SelectionBar {
    translator: Translator,
}

impl SelectionBar {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Draw the bar for `selected` contacts; `deleting` is the size of a
    /// bulk delete in flight
    pub fn draw_with_count(&self, frame: &mut Frame, area: Rect, selected: usize, deleting: usize) {
        let t = &self.translator;
        let count = selected.to_string();

        let mut spans = vec![Span::styled(
            format!(" {} ", t.t_with("selection.count", &[("count", count.as_str())])),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )];

        if deleting > 0 {
            let deleting = deleting.to_string();
            spans.push(Span::styled(
                format!("  {}", t.t_with("selection.deleting", &[("count", deleting.as_str())])),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.extend([
                Span::raw("  "),
                Span::styled(" d ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(t.t("selection.trash")),
                Span::raw("  "),
                Span::styled(" Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(t.t("selection.clear")),
            ]);
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(bar, area);
    }
}

impl Component for SelectionBar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelectedContacts),
            KeyCode::Esc => Some(Action::ClearSelection),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the selection size, so we use draw_with_count
        Ok(())
    }
}
