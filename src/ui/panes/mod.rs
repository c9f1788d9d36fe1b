//! TUI pane rendering modules
//!
//! Each pane module exports a `render_*` function that draws one region of
//! the screen from borrowed application state. None of them mutate anything
//! except the scroll offset they are handed.
//!
//! # Pane Modules
//!
//! - [`cells`]: executed cells with ✔/✖ status and expandable change diagrams
//! - [`memory`]: one expandable block per name or shared object
//! - [`algorithm`]: the active algorithm's panel and highlighted step diagram
//! - [`input`]: the code entry line and any buffered continuation lines
//! - [`status`]: status bar with step counter and playback badges
//! - [`help`]: key bindings and the algorithm overview, as a popup

pub mod algorithm;
pub mod cells;
pub mod help;
pub mod input;
pub mod memory;
pub mod status;

pub use algorithm::{render_algorithm_pane, styled_diagram_line};
pub use cells::render_cells_pane;
pub use help::render_help_popup;
pub use input::render_input_pane;
pub use memory::render_memory_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border is highlighted when the pane has focus
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Adjust `scroll` so rows `start..end` fit in a window of `height` rows
fn keep_visible(scroll: &mut usize, start: usize, end: usize, height: usize) {
    if start < *scroll {
        *scroll = start;
    } else if end > *scroll + height {
        *scroll = end.saturating_sub(height).min(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_visible_scrolls_both_ways() {
        let mut scroll = 10;
        keep_visible(&mut scroll, 4, 6, 5);
        assert_eq!(scroll, 4);
        keep_visible(&mut scroll, 12, 14, 5);
        assert_eq!(scroll, 9);
        // A selection taller than the window keeps its first row in view
        keep_visible(&mut scroll, 20, 40, 5);
        assert_eq!(scroll, 20);
    }
}
