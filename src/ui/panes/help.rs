//! Help popup: key bindings and the algorithm overview

use super::pane_block;
use crate::algorithms::overview;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub const KEY_BINDINGS: [(&str, &str); 12] = [
    ("Enter", "run the input (an empty line runs a multi-line buffer)"),
    ("Enter", "expand or collapse the selected cell or memory block"),
    ("Tab / Shift+Tab", "switch focus between cells, memory and input"),
    ("↑ / ↓", "select in the focused pane"),
    ("Space / N / →", "next algorithm step"),
    ("P / ←", "previous algorithm step"),
    ("R", "reset the algorithm to its start"),
    ("A", "toggle auto-play"),
    ("Esc", "leave algorithm mode, or clear the input buffer"),
    ("?", "toggle this help (outside the input line)"),
    ("F1", "toggle this help"),
    ("Ctrl+Q", "quit"),
];

pub fn help_lines() -> Vec<Line<'static>> {
    let key_width = KEY_BINDINGS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);
    let heading = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("Keys", heading))];
    for (key, description) in KEY_BINDINGS {
        let pad = key_width - key.chars().count();
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}{}", key, " ".repeat(pad)),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                format!("  {}", description),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Algorithms", heading)));
    lines.extend(overview().lines().map(|line| {
        Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(DEFAULT_THEME.fg),
        ))
    }));
    lines
}

/// Area of `percent_x` by `percent_y` centered in `area`
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 80, 80);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(help_lines()).block(pane_block(" Help (? to close) ", true));
    frame.render_widget(paragraph, popup);
}
