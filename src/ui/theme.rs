use crate::highlight::Marker;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub marker_current: Color,    // Yellow
    pub marker_found: Color,      // Green
    pub marker_comparing: Color,  // Cyan
    pub marker_eliminated: Color, // Red
    pub boundary: Color,          // Magenta
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for selection
    marker_current: Color::Rgb(249, 226, 175),
    marker_found: Color::Rgb(166, 227, 161),
    marker_comparing: Color::Rgb(148, 226, 213),
    marker_eliminated: Color::Rgb(243, 139, 168),
    boundary: Color::Rgb(203, 166, 247),
};

impl Theme {
    /// Style for a highlight marker and the value it prefixes
    pub fn marker_style(&self, marker: Marker) -> Style {
        let style = Style::default();
        match marker {
            Marker::Current => style.fg(self.marker_current).add_modifier(Modifier::BOLD),
            Marker::Visited => style.fg(self.comment).add_modifier(Modifier::DIM),
            Marker::Found => style.fg(self.marker_found).add_modifier(Modifier::BOLD),
            Marker::Comparing => style.fg(self.marker_comparing).add_modifier(Modifier::BOLD),
            Marker::Eliminated => style.fg(self.marker_eliminated).add_modifier(Modifier::DIM),
        }
    }

    /// Style for the search range brackets spliced into array borders
    pub fn boundary_style(&self) -> Style {
        Style::default()
            .fg(self.boundary)
            .add_modifier(Modifier::BOLD)
    }
}
