//! Linked list renderers
//!
//! Both renderers draw the chain as a row of boxes followed by a
//! "Node Structure" panel describing the head node's fields:
//!
//! ```text
//! Head ──▶ ┌────┬─────┐ ──▶ ┌────┬─────┐
//!          │ 1  │  •  │     │ 2  │ NULL│
//!          └────┴─────┘     └────┴─────┘
//! ```
//!
//! Pointer fields in the panel show the target node's address or `NULL`.

use super::text::{center, rule, width};
use crate::memory::ObjId;
use crate::snapshot::ChainNode;

const HEAD_PREFIX: &str = "Head ──▶ ";
const POINTER_WIDTH: usize = 5;
const PANEL_MIN_WIDTH: usize = 8;

pub fn render_linked_list(nodes: &[ChainNode]) -> String {
    let mut lines = render_chain(nodes, " ──▶ ", singly_box);
    lines.push(String::new());
    lines.push("Node Structure".to_string());
    let (data, next) = match nodes.first() {
        Some(head) => (head.value.to_string(), address(head.next)),
        None => (String::new(), address(None)),
    };
    lines.extend(panel(&[("data", data), ("next", next)]));
    lines.join("\n")
}

pub fn render_doubly_linked_list(nodes: &[ChainNode]) -> String {
    let mut lines = render_chain(nodes, " ⇄ ", doubly_box);
    lines.push(String::new());
    lines.push("Node Structure".to_string());
    let (prev, data, next) = match nodes.first() {
        Some(head) => (address(head.prev), head.value.to_string(), address(head.next)),
        None => (address(None), String::new(), address(None)),
    };
    lines.extend(panel(&[("prev", prev), ("data", data), ("next", next)]));
    lines.join("\n")
}

fn address(node: Option<ObjId>) -> String {
    match node {
        Some(id) => id.to_string(),
        None => "NULL".to_string(),
    }
}

type NodeBox = [String; 3];

fn render_chain(
    nodes: &[ChainNode],
    connector: &str,
    draw: fn(&ChainNode, usize) -> NodeBox,
) -> Vec<String> {
    if nodes.is_empty() {
        return vec![format!("{}NULL", HEAD_PREFIX)];
    }
    let data_width = nodes
        .iter()
        .map(|node| width(&node.value.to_string()))
        .max()
        .unwrap_or(0)
        .max(4);
    let boxes: Vec<NodeBox> = nodes.iter().map(|node| draw(node, data_width)).collect();
    let indent = " ".repeat(width(HEAD_PREFIX));
    let gap = " ".repeat(width(connector));
    let row = |index: usize, joiner: &str| {
        boxes
            .iter()
            .map(|b| b[index].as_str())
            .collect::<Vec<_>>()
            .join(joiner)
    };
    vec![
        format!("{}{}", HEAD_PREFIX, row(0, connector)),
        format!("{}{}", indent, row(1, &gap)),
        format!("{}{}", indent, row(2, &gap)),
    ]
}

fn singly_box(node: &ChainNode, data_width: usize) -> NodeBox {
    let pointer = if node.next.is_none() { "NULL" } else { "•" };
    [
        format!("┌{}┬{}┐", rule(data_width), rule(POINTER_WIDTH)),
        format!(
            "│{}│{}│",
            center(&node.value.to_string(), data_width),
            center(pointer, POINTER_WIDTH)
        ),
        format!("└{}┴{}┘", rule(data_width), rule(POINTER_WIDTH)),
    ]
}

fn doubly_box(node: &ChainNode, data_width: usize) -> NodeBox {
    let pointer_cell = |target: Option<ObjId>| if target.is_none() { "NULL " } else { "  •  " };
    [
        format!(
            "┌{}┬{}┬{}┐",
            rule(POINTER_WIDTH),
            rule(data_width),
            rule(POINTER_WIDTH)
        ),
        format!(
            "│{}│{}│{}│",
            pointer_cell(node.prev),
            center(&node.value.to_string(), data_width),
            pointer_cell(node.next)
        ),
        format!(
            "└{}┴{}┴{}┘",
            rule(POINTER_WIDTH),
            rule(data_width),
            rule(POINTER_WIDTH)
        ),
    ]
}

/// Field layout panel: header labels boxed, values centered underneath
pub(crate) fn panel(fields: &[(&str, String)]) -> Vec<String> {
    let widths: Vec<usize> = fields
        .iter()
        .map(|(label, text)| PANEL_MIN_WIDTH.max(width(label)).max(width(text)))
        .collect();
    let rules: Vec<String> = widths.iter().map(|w| rule(*w)).collect();
    let headers: Vec<String> = fields
        .iter()
        .zip(&widths)
        .map(|((label, _), w)| center(label, *w))
        .collect();
    let values: Vec<String> = fields
        .iter()
        .zip(&widths)
        .map(|((_, text), w)| center(text, *w))
        .collect();
    vec![
        format!("┌{}┐", rules.join("┬")),
        format!("│{}│", headers.join("│")),
        format!("└{}┘", rules.join("┴")),
        format!(" {}", values.join(" ")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Value;

    fn chain(values: &[i64]) -> Vec<ChainNode> {
        let ids: Vec<ObjId> = (0..values.len() as u64)
            .map(|i| ObjId(0x1000 + i * 0x10))
            .collect();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ChainNode {
                id: ids[i],
                value: Value::Int(*v),
                next: ids.get(i + 1).copied(),
                prev: i.checked_sub(1).map(|p| ids[p]),
            })
            .collect()
    }

    #[test]
    fn test_empty_linked_list() {
        let expected = [
            "Head ──▶ NULL",
            "",
            "Node Structure",
            "┌────────┬────────┐",
            "│  data  │  next  │",
            "└────────┴────────┘",
            "            NULL  ",
        ]
        .join("\n");
        assert_eq!(render_linked_list(&[]), expected);
    }

    #[test]
    fn test_two_node_chain() {
        let out = render_linked_list(&chain(&[1, 2]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Head ──▶ ┌────┬─────┐ ──▶ ┌────┬─────┐");
        assert_eq!(lines[1], "         │ 1  │  •  │     │ 2  │ NULL│");
        assert_eq!(lines[8], "    1      0x1010 ");
    }

    #[test]
    fn test_doubly_pointer_cells() {
        let out = render_doubly_linked_list(&chain(&[7]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "         │NULL │ 7  │NULL │");
        assert_eq!(lines[6], "│  prev  │  data  │  next  │");
    }
}
