//! Stack and queue renderers
//!
//! A stack is drawn top-down with the most recently pushed item first; a
//! queue is drawn left to right from front to rear.

use super::text::{center, rule, width};
use crate::memory::Value;

/// Widest item plus one space each side, at least 5
fn inner_width(texts: &[String]) -> usize {
    let widest = texts.iter().map(|t| width(t)).max().unwrap_or(0);
    (widest + 2).max(5)
}

pub fn render_stack(values: &[Value]) -> String {
    let mut lines: Vec<String> = vec!["Top".into(), " │".into(), " ▼".into()];
    if values.is_empty() {
        lines.push("(empty)".into());
        return lines.join("\n");
    }
    let texts: Vec<String> = values.iter().map(Value::to_string).collect();
    let inner = inner_width(&texts);
    for (index, text) in texts.iter().rev().enumerate() {
        lines.push(if index == 0 {
            format!("┌{}┐", rule(inner))
        } else {
            format!("├{}┤", rule(inner))
        });
        lines.push(format!("│{}│", center(text, inner)));
    }
    lines.push(format!("└{}┘", rule(inner)));
    lines.join("\n")
}

pub fn render_queue(values: &[Value]) -> String {
    const PREFIX: &str = "Front ──▶ ";
    if values.is_empty() {
        return format!("{}(empty) ──▶ Rear", PREFIX);
    }
    let texts: Vec<String> = values.iter().map(Value::to_string).collect();
    let cell = inner_width(&texts);
    let rules = vec![rule(cell); texts.len()];
    let cells: Vec<String> = texts.iter().map(|text| center(text, cell)).collect();
    let indent = " ".repeat(width(PREFIX));
    [
        format!("{}┌{}┐ ──▶ Rear", PREFIX, rules.join("┬")),
        format!("{}│{}│", indent, cells.join("│")),
        format!("{}└{}┘", indent, rules.join("┴")),
    ]
    .join("\n")
}
