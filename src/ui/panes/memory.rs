//! Memory pane: one expandable block per name or shared object

use super::{keep_visible, pane_block};
use crate::render::MemoryBlock;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashSet;

/// Styled lines for one block. A collapsed block shows its summary after
/// the header instead of its content.
pub fn block_lines(block: &MemoryBlock, expanded: bool) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);
    let header: Vec<&str> = block.header.lines().collect();
    let last = header.len().saturating_sub(1);

    let mut lines = Vec::new();
    for (index, text) in header.iter().enumerate() {
        let prefix = match (index, expanded) {
            (0, true) => "▾ ",
            (0, false) => "▸ ",
            _ => "  ",
        };
        let mut spans = vec![
            Span::styled(prefix, Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(text.to_string(), header_style),
        ];
        if index == last && !expanded && !block.summary.is_empty() {
            spans.push(Span::styled(
                format!("  {}", block.summary),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        lines.push(Line::from(spans));
    }
    if expanded {
        lines.extend(block.content.lines().map(|line| {
            Line::from(Span::styled(
                format!("  {}", line),
                Style::default().fg(DEFAULT_THEME.fg),
            ))
        }));
    }
    lines
}

/// Render `blocks`; ids in `collapsed` show only their header and summary
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    blocks: &[MemoryBlock],
    collapsed: &FxHashSet<String>,
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Memory ", is_focused);

    let mut lines = Vec::new();
    let mut selected_rows = (0, 0);
    for (index, memory_block) in blocks.iter().enumerate() {
        let start = lines.len();
        let mut block_lines = block_lines(memory_block, !collapsed.contains(&memory_block.id));
        if is_focused && index == selected {
            for line in &mut block_lines {
                *line = std::mem::take(line)
                    .style(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
        }
        lines.extend(block_lines);
        if index == selected {
            selected_rows = (start, lines.len());
        }
        lines.push(Line::raw(""));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    keep_visible(scroll_offset, selected_rows.0, selected_rows.1, visible_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(*scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    fn aliased() -> MemoryBlock {
        MemoryBlock {
            id: "0x10000000".to_string(),
            header: "a ──┐\nb ──┘\n▶ Array".to_string(),
            summary: "len=2".to_string(),
            content: "[1, 2]".to_string(),
        }
    }

    #[test]
    fn test_expanded_block_shows_content() {
        assert_eq!(
            plain(&block_lines(&aliased(), true)),
            vec!["▾ a ──┐", "  b ──┘", "  ▶ Array", "  [1, 2]"]
        );
    }

    #[test]
    fn test_collapsed_block_shows_summary() {
        assert_eq!(
            plain(&block_lines(&aliased(), false)),
            vec!["▸ a ──┐", "  b ──┘", "  ▶ Array  len=2"]
        );
    }
}
