//! Toolbar with the screen's global actions

use crate::services::Translator;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct Toolbar {
    translator: Translator,
}

impl Toolbar {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    pub fn draw_with_status(&self, frame: &mut Frame, area: Rect, loading: bool) {
        let t = &self.translator;
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", t.t("app.title")),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" n ", key_style),
            Span::raw(t.t("toolbar.new")),
            Span::raw("  "),
            Span::styled(" i ", key_style),
            Span::raw(t.t("toolbar.import")),
            Span::raw("  "),
            Span::styled(" R ", key_style),
            Span::raw(t.t("toolbar.refresh")),
            Span::raw("  "),
            Span::styled(" q ", key_style),
            Span::raw(t.t("toolbar.quit")),
        ];

        if loading {
            spans.push(Span::styled(
                format!("  {}", t.t("toolbar.loading")),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let toolbar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(toolbar, area);
    }
}
