//! Executed cells pane

use super::{keep_visible, pane_block};
use crate::session::Cell;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashSet;

/// Styled lines for one cell, in the same order as [`Cell::text`]
pub fn cell_lines(cell: &Cell, expanded: bool) -> Vec<Line<'static>> {
    let (glyph, glyph_color) = if cell.ok {
        ("✔", DEFAULT_THEME.success)
    } else {
        ("✖", DEFAULT_THEME.error)
    };
    let code_style = Style::default().fg(DEFAULT_THEME.fg);
    let mut code_lines = cell.code.trim_end().lines();

    let mut first = vec![
        Span::styled(
            format!("{} ", glyph),
            Style::default().fg(glyph_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(code_lines.next().unwrap_or("").to_string(), code_style),
    ];
    if cell.snapshot_text.is_some() {
        first.push(Span::styled(
            if expanded { " ▾" } else { " ▸" },
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let mut lines = vec![Line::from(first)];
    lines.extend(
        code_lines.map(|line| Line::from(Span::styled(format!("  {}", line), code_style))),
    );
    lines.extend(cell.output.iter().map(|line| {
        Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(DEFAULT_THEME.secondary),
        ))
    }));
    lines.extend(cell.error.iter().flat_map(|error| error.lines()).map(|line| {
        Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(DEFAULT_THEME.error),
        ))
    }));
    if let (true, Some(snapshot)) = (expanded, &cell.snapshot_text) {
        lines.extend(snapshot.lines().map(|line| {
            Line::from(Span::styled(
                format!("    {}", line),
                Style::default().fg(DEFAULT_THEME.primary),
            ))
        }));
    }
    lines
}

/// Render every cell, keeping the selected one in view
#[allow(clippy::too_many_arguments)]
pub fn render_cells_pane(
    frame: &mut Frame,
    area: Rect,
    cells: &[Cell],
    expanded: &FxHashSet<usize>,
    selected: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Cells ", is_focused);

    if cells.is_empty() {
        let paragraph = Paragraph::new("(no cells yet: type code below and press Enter)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut lines = Vec::new();
    let mut selected_rows = None;
    for (index, cell) in cells.iter().enumerate() {
        let start = lines.len();
        let mut cell_lines = cell_lines(cell, expanded.contains(&cell.id));
        if selected == Some(index) {
            for line in &mut cell_lines {
                *line = std::mem::take(line)
                    .style(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
        }
        lines.extend(cell_lines);
        if selected == Some(index) {
            selected_rows = Some((start, lines.len()));
        }
        lines.push(Line::raw(""));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    match selected_rows {
        Some((start, end)) => keep_visible(scroll_offset, start, end, visible_height),
        None => *scroll_offset = lines.len().saturating_sub(visible_height),
    }
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(1));

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

    #[test]
    fn test_cell_lines_follow_cell_text_order() {
        let cell = Cell {
            id: 1,
            code: "print(1)\nx".to_string(),
            ok: false,
            error: Some("name 'x' is not defined".to_string()),
            output: vec!["1".to_string()],
            snapshot_text: None,
        };
        assert_eq!(
            plain(&cell_lines(&cell, true)),
            vec!["✖ print(1)", "  x", "  1", "  name 'x' is not defined"]
        );
    }

    #[test]
    fn test_collapsed_cell_hides_diagram() {
        let cell = Cell {
            id: 2,
            code: "x = 1".to_string(),
            ok: true,
            error: None,
            output: Vec::new(),
            snapshot_text: Some("x ──▶ int\n1".to_string()),
        };
        assert_eq!(plain(&cell_lines(&cell, false)), vec!["✔ x = 1 ▸"]);
        assert_eq!(
            plain(&cell_lines(&cell, true)),
            vec!["✔ x = 1 ▾", "    x ──▶ int", "    1"]
        );
    }
}
