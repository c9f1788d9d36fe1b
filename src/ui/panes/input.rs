//! Code entry pane

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const PROMPT: &str = ">>> ";
pub const CONTINUATION_PROMPT: &str = "... ";

/// Rows the pane needs for `buffered` continuation lines plus the entry line
pub fn input_height(buffered: usize) -> u16 {
    u16::try_from(buffered + 3).unwrap_or(u16::MAX)
}

pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &[String],
    input: &str,
    is_focused: bool,
    algorithm_mode: bool,
) {
    let title = if algorithm_mode {
        " Input (Esc leaves algorithm mode) "
    } else if buffer.is_empty() {
        " Input "
    } else {
        " Input (empty line runs) "
    };
    let prompt_style = Style::default().fg(DEFAULT_THEME.comment);
    let text_style = Style::default().fg(if algorithm_mode {
        DEFAULT_THEME.comment
    } else {
        DEFAULT_THEME.fg
    });

    let mut lines: Vec<Line> = buffer
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let prompt = if index == 0 { PROMPT } else { CONTINUATION_PROMPT };
            Line::from(vec![
                Span::styled(prompt, prompt_style),
                Span::styled(line.as_str(), text_style),
            ])
        })
        .collect();
    let prompt = if buffer.is_empty() { PROMPT } else { CONTINUATION_PROMPT };
    lines.push(Line::from(vec![
        Span::styled(prompt, prompt_style),
        Span::styled(input, text_style),
    ]));

    // Keep the entry line in view when the buffer outgrows the pane
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let scroll = lines.len().saturating_sub(visible_height);
    let paragraph = Paragraph::new(lines)
        .block(pane_block(title, is_focused))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);

    if is_focused && !algorithm_mode {
        let column = prompt.chars().count() + input.chars().count();
        let row = buffer.len() - scroll;
        let x = area.x.saturating_add(1).saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
        let y = area.y.saturating_add(1).saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            frame.set_cursor_position((x, y));
        }
    }
}
