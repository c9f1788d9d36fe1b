//! Algorithm pane: panel text plus the current step's diagram

use super::pane_block;
use crate::algorithms::PendingAlgorithm;
use crate::highlight::{Marker, BOUNDARY_LEFT, BOUNDARY_RIGHT};
use crate::render::algorithm::{algorithm_panel, CONTROLS_HINT};
use crate::render::{render_step, render_step_data};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Style one diagram line: a marker glyph and the digits right after it
/// take the marker's style, boundary brackets take the boundary style
pub fn styled_diagram_line(line: &str) -> Line<'static> {
    let plain = Style::default().fg(DEFAULT_THEME.fg);
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(marker) = Marker::from_glyph(c) {
            if !text.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut text), plain));
            }
            let mut marked = c.to_string();
            if chars.peek() == Some(&'-') {
                marked.push('-');
                chars.next();
            }
            while let Some(&digit) = chars.peek() {
                if !digit.is_ascii_digit() {
                    break;
                }
                marked.push(digit);
                chars.next();
            }
            spans.push(Span::styled(marked, DEFAULT_THEME.marker_style(marker)));
        } else if c == BOUNDARY_LEFT || c == BOUNDARY_RIGHT {
            if !text.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut text), plain));
            }
            spans.push(Span::styled(c.to_string(), DEFAULT_THEME.boundary_style()));
        } else {
            text.push(c);
        }
    }
    if !text.is_empty() {
        spans.push(Span::styled(text, plain));
    }
    Line::from(spans)
}

/// Panel lines with the diagram placed between the action and the controls
fn panel_lines(pending: &PendingAlgorithm) -> Vec<Line<'static>> {
    let runner = &pending.runner;
    let diagram = match runner.current() {
        Some(step) => render_step(step),
        None => render_step_data(&pending.data, None),
    };

    let mut lines = Vec::new();
    for (index, text) in algorithm_panel(runner).lines().enumerate() {
        let style = if index == 0 {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD)
        } else if text == "Status: NOT FOUND" {
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD)
        } else if text.starts_with("Status: ") {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else if text == CONTROLS_HINT {
            lines.extend(diagram.lines().map(styled_diagram_line));
            lines.push(Line::raw(""));
            Style::default().fg(DEFAULT_THEME.comment)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        lines.push(Line::from(Span::styled(text.to_string(), style)));
    }
    lines
}

pub fn render_algorithm_pane(
    frame: &mut Frame,
    area: Rect,
    pending: &PendingAlgorithm,
    is_focused: bool,
) {
    let title = format!(" {} ", pending.runner.name());
    let paragraph = Paragraph::new(panel_lines(pending)).block(pane_block(&title, is_focused));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::start_search;
    use crate::memory::Value;
    use std::rc::Rc;

    fn spans(line: &Line) -> Vec<(String, Style)> {
        line.spans
            .iter()
            .map(|span| (span.content.to_string(), span.style))
            .collect()
    }

    #[test]
    fn test_marker_styles_following_digits() {
        let line = styled_diagram_line("│ →12 │ ✓-3 │");
        let plain = Style::default().fg(DEFAULT_THEME.fg);
        assert_eq!(
            spans(&line),
            vec![
                ("│ ".to_string(), plain),
                ("→12".to_string(), DEFAULT_THEME.marker_style(Marker::Current)),
                (" │ ".to_string(), plain),
                ("✓-3".to_string(), DEFAULT_THEME.marker_style(Marker::Found)),
                (" │".to_string(), plain),
            ]
        );
    }

    #[test]
    fn test_boundaries_are_styled() {
        let line = styled_diagram_line("[───]");
        let styles: Vec<Style> = line.spans.iter().map(|span| span.style).collect();
        assert_eq!(styles[0], DEFAULT_THEME.boundary_style());
        assert_eq!(styles[2], DEFAULT_THEME.boundary_style());
    }

    #[test]
    fn test_diagram_sits_above_controls() {
        let values: Vec<Value> = [2, 4].into_iter().map(Value::Int).collect();
        let mut pending = start_search("linear", Rc::from(values), Value::Int(4)).unwrap();
        pending.runner.advance();
        let lines = panel_lines(&pending);
        let text: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(text[0], "Algorithm: Linear Search  [O(n)]");
        assert_eq!(text.last().map(String::as_str), Some(CONTROLS_HINT));
        assert!(text.iter().any(|line| line.contains("→0")));
    }
}
