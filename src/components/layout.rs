//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub selection_bar: Option<Rect>,
    pub toolbar: Rect,
    pub list: Rect,
    pub alerts: Option<Rect>,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// Top to bottom: optional selection bar, toolbar, contact list, optional
/// alert lines.
pub fn calculate_main_layout(area: Rect, has_selection_bar: bool, alert_lines: u16) -> MainLayout {
    let mut constraints = Vec::with_capacity(4);
    if has_selection_bar {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    if alert_lines > 0 {
        constraints.push(Constraint::Length(alert_lines));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    let selection_bar = if has_selection_bar {
        next += 1;
        Some(chunks[0])
    } else {
        None
    };
    let toolbar = chunks[next];
    let list = chunks[next + 1];
    let alerts = (alert_lines > 0).then(|| chunks[next + 2]);

    MainLayout {
        selection_bar,
        toolbar,
        list,
        alerts,
    }
}
