//! Status bar rendering with keybindings and playback badges

use crate::algorithms::AlgorithmRunner;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Playback badge shown at the right end of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Playing,
    End,
    Start,
}

impl Badge {
    pub fn for_runner(runner: &AlgorithmRunner, is_playing: bool) -> Option<Badge> {
        if is_playing {
            Some(Badge::Playing)
        } else if runner.is_complete() {
            Some(Badge::End)
        } else if runner.at_start() {
            Some(Badge::Start)
        } else {
            None
        }
    }

    fn label(self) -> &'static str {
        match self {
            Badge::Playing => " ▶ PLAYING ",
            Badge::End => " END ",
            Badge::Start => " START ",
        }
    }

    fn color(self) -> Color {
        match self {
            Badge::Playing => DEFAULT_THEME.secondary,
            Badge::End => DEFAULT_THEME.error,
            Badge::Start => DEFAULT_THEME.success,
        }
    }
}

/// Left badge text: the step counter in algorithm mode, else the cell count
pub fn counter_text(runner: Option<&AlgorithmRunner>, cell_count: usize) -> String {
    match runner {
        Some(runner) => match runner.total_steps() {
            Some(total) => format!(" Step {}/{} ", runner.step_number(), total),
            None => format!(" Step {}/? ", runner.step_number()),
        },
        None => format!(" Cells {} ", cell_count),
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    runner: Option<&AlgorithmRunner>,
    cell_count: usize,
    is_error: bool,
    is_playing: bool,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            counter_text(runner, cell_count),
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else if runner.is_some() {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds for the current mode
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = if runner.is_some() {
        &[
            (" ⎵/N ", " next "),
            (" P ", " prev "),
            (" R ", " reset "),
            (" A ", " play "),
            (" Esc ", " exit "),
        ]
    } else {
        &[
            (" ↵ ", " run "),
            (" Tab ", " focus "),
            (" ↑/↓ ", " scroll "),
            (" ? ", " help "),
            (" ^Q ", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (index, (key, description)) in bindings.iter().enumerate() {
        if index > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*description, desc_style));
    }

    if let Some(badge) = runner.and_then(|runner| Badge::for_runner(runner, is_playing)) {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            badge.label(),
            Style::default()
                .bg(badge.color())
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::start_search;
    use crate::memory::Value;
    use std::rc::Rc;

    fn runner() -> AlgorithmRunner {
        let values: Vec<Value> = [5, 6].into_iter().map(Value::Int).collect();
        start_search("linear", Rc::from(values), Value::Int(6))
            .unwrap()
            .runner
    }

    #[test]
    fn test_badges_follow_runner_position() {
        let mut runner = runner();
        assert_eq!(Badge::for_runner(&runner, false), Some(Badge::Start));
        assert_eq!(Badge::for_runner(&runner, true), Some(Badge::Playing));
        runner.advance();
        assert_eq!(Badge::for_runner(&runner, false), None);
        runner.run_to_end();
        assert_eq!(Badge::for_runner(&runner, false), Some(Badge::End));
    }

    #[test]
    fn test_counter_text() {
        let mut runner = runner();
        assert_eq!(counter_text(None, 3), " Cells 3 ");
        runner.advance();
        assert_eq!(counter_text(Some(&runner), 3), " Step 1/? ");
        runner.run_to_end();
        while runner.advance().is_some() {}
        let total = runner.total_steps().unwrap();
        assert_eq!(counter_text(Some(&runner), 3), format!(" Step {}/{} ", runner.step_number(), total));
    }
}
