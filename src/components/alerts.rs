//! Alert area rendering the notifier's messages

use crate::services::{Alert, AlertLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the most recent alerts, newest last
pub fn draw_alerts<'a>(frame: &mut Frame, area: Rect, alerts: impl Iterator<Item = &'a Alert>) {
    let lines: Vec<Line> = alerts
        .map(|alert| {
            let (icon, color) = match alert.level {
                AlertLevel::Info => ("✓", Color::Green),
                AlertLevel::Error => ("✗", Color::Red),
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", alert.formatted_time()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(alert.message.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    let skip = lines.len().saturating_sub(area.height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible), area);
}
