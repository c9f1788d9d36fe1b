//! Array renderer
//!
//! ```text
//!         ┌────┬────┬────┐
//! Index → │ 0  │ →1 │ 2  │
//!         ├────┼────┼────┤
//! Array → │ 10 │ 20 │ 30 │
//!         └────┴────┴────┘
//! ```
//!
//! With boundaries `(low, high)` the top and bottom borders carry `[` at the
//! left edge of `low` and `]` at the right edge of `high`.

use super::text::{ljust, rule, width};
use crate::highlight::{HighlightContext, BOUNDARY_LEFT, BOUNDARY_RIGHT};
use crate::memory::Value;

const INDEX_PREFIX: &str = "Index → ";
const ARRAY_PREFIX: &str = "Array → ";

pub fn render_array(values: &[Value], highlights: Option<&HighlightContext>) -> String {
    if values.is_empty() {
        return "(empty)".to_string();
    }

    let index_labels: Vec<String> = (0..values.len())
        .map(|index| match highlights.and_then(|h| h.marker_for(index)) {
            Some(marker) => format!("{}{}", marker, index),
            None => index.to_string(),
        })
        .collect();
    let value_labels: Vec<String> = values.iter().map(Value::to_string).collect();

    let max_len = index_labels
        .iter()
        .chain(&value_labels)
        .map(|label| width(label))
        .max()
        .unwrap_or(1)
        .max(1);
    let cell_width = max_len + 3;
    let spacer = " ".repeat(width(INDEX_PREFIX));

    let cell = |text: &str| ljust(&format!(" {} ", text), cell_width);
    let row = |labels: &[String]| {
        let cells: Vec<String> = labels.iter().map(|label| cell(label)).collect();
        format!("│{}│", cells.join("│"))
    };

    let boundaries = highlights.filter(|h| h.boundaries.is_some());
    let top = border(values.len(), cell_width, ('┌', '┬', '┐'), boundaries);
    let middle = border(values.len(), cell_width, ('├', '┼', '┤'), None);
    let bottom = border(values.len(), cell_width, ('└', '┴', '┘'), boundaries);

    [
        format!("{}{}", spacer, top),
        format!("{}{}", INDEX_PREFIX, row(&index_labels)),
        format!("{}{}", spacer, middle),
        format!("{}{}", ARRAY_PREFIX, row(&value_labels)),
        format!("{}{}", spacer, bottom),
    ]
    .join("\n")
}

/// Horizontal border; separator `p` sits left of cell `p`
fn border(
    count: usize,
    cell_width: usize,
    (left, mid, right): (char, char, char),
    boundaries: Option<&HighlightContext>,
) -> String {
    let mut line = String::new();
    for separator in 0..=count {
        let glyph = match separator {
            0 => left,
            s if s == count => right,
            _ => mid,
        };
        let glyph = match boundaries {
            Some(h) if separator < count && h.is_left_boundary(separator) => BOUNDARY_LEFT,
            Some(h) if separator > 0 && h.is_right_boundary(separator - 1) => BOUNDARY_RIGHT,
            _ => glyph,
        };
        line.push(glyph);
        if separator < count {
            line.push_str(&rule(cell_width));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().map(|v| Value::Int(*v)).collect()
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(render_array(&[], None), "(empty)");
    }

    #[test]
    fn test_single_cell() {
        let expected = [
            "        ┌────┐",
            "Index → │ 0  │",
            "        ├────┤",
            "Array → │ 0  │",
            "        └────┘",
        ]
        .join("\n");
        assert_eq!(render_array(&ints(&[0]), None), expected);
    }

    #[test]
    fn test_marker_widens_cells() {
        let ctx = HighlightContext::new().current([1]);
        let out = render_array(&ints(&[10, 20]), Some(&ctx));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "Index → │ 0   │ →1  │");
        assert_eq!(lines[3], "Array → │ 10  │ 20  │");
    }

    #[test]
    fn test_boundaries_keep_border_width() {
        let ctx = HighlightContext::new().boundaries(1, 1);
        let out = render_array(&ints(&[1, 2, 3]), Some(&ctx));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "        ┌────[────]────┐");
        assert_eq!(lines[4], "        └────[────]────┘");
        assert_eq!(width(lines[0]), width(lines[2]));
    }

    #[test]
    fn test_full_range_boundaries() {
        let ctx = HighlightContext::new().boundaries(0, 2);
        let out = render_array(&ints(&[10, 20, 30]), Some(&ctx));
        let top = out.lines().next().unwrap().trim();
        assert!(top.starts_with('['));
        assert!(top.ends_with(']'));
    }
}
