//! Binary tree renderer
//!
//! Lays a tree out level by level. Missing children are padded with empty
//! slots so every level has twice the slots of the one above, and the gap
//! between slots doubles going up (`4` at the leaves, `2 * gap + 2` above):
//!
//! ```text
//!      [1]
//!       ▼
//!    ┌───────┐
//!    ▼       ▼
//!   [2]     [3]
//! ```
//!
//! Each label row is followed by three connector rows (parent arrows, branch
//! line, child arrows) unless it is the last level or has no children.
//!
//! Row width doubles per level, so only the top [`MAX_LEVELS`] levels are
//! drawn. A deeper tree ends with a `… (depth N truncated)` line.
//!
//! The layout works over any [`TreeSource`]: a captured [`TreeSnapshot`] or
//! the implicit tree of a min-heap array.

use super::text::{ljust, width};
use crate::highlight::{Marker, TreeHighlightContext};
use crate::memory::{ObjId, Value};
use crate::snapshot::TreeSnapshot;

const BST_FOOTER: &str = "Left < Node < Right";

/// Levels drawn before truncating; five levels already need 128+ columns
pub const MAX_LEVELS: usize = 5;

/// Navigation over a binary tree for layout
pub trait TreeSource {
    type Node: Copy + Eq;

    fn root(&self) -> Option<Self::Node>;
    fn left(&self, node: Self::Node) -> Option<Self::Node>;
    fn right(&self, node: Self::Node) -> Option<Self::Node>;
    fn label(&self, node: Self::Node) -> String;

    fn has_child(&self, node: Self::Node) -> bool {
        self.left(node).is_some() || self.right(node).is_some()
    }
}

impl TreeSource for TreeSnapshot {
    type Node = ObjId;

    fn root(&self) -> Option<ObjId> {
        self.root
    }

    fn left(&self, node: ObjId) -> Option<ObjId> {
        self.node(node).and_then(|n| n.left)
    }

    fn right(&self, node: ObjId) -> Option<ObjId> {
        self.node(node).and_then(|n| n.right)
    }

    fn label(&self, node: ObjId) -> String {
        self.node(node)
            .map(|n| n.value.to_string())
            .unwrap_or_default()
    }
}

/// Heap-ordered array: children of `i` are `2i + 1` and `2i + 2`
struct HeapArray<'a>(&'a [Value]);

impl TreeSource for HeapArray<'_> {
    type Node = usize;

    fn root(&self) -> Option<usize> {
        (!self.0.is_empty()).then_some(0)
    }

    fn left(&self, node: usize) -> Option<usize> {
        let child = node * 2 + 1;
        (child < self.0.len()).then_some(child)
    }

    fn right(&self, node: usize) -> Option<usize> {
        let child = node * 2 + 2;
        (child < self.0.len()).then_some(child)
    }

    fn label(&self, node: usize) -> String {
        self.0[node].to_string()
    }
}

pub fn render_binary_tree(tree: &TreeSnapshot, highlights: Option<&TreeHighlightContext>) -> String {
    render_tree(tree, |node| highlights.and_then(|h| h.marker_for(node)))
}

pub fn render_binary_search_tree(tree: &TreeSnapshot) -> String {
    format!("{}\n\n{}", render_binary_tree(tree, None), BST_FOOTER)
}

pub fn render_min_heap(values: &[Value]) -> String {
    render_tree(&HeapArray(values), |_| None)
}

/// Lay out any tree source, asking `marker` for each node's highlight
pub fn render_tree<S, F>(source: &S, marker: F) -> String
where
    S: TreeSource,
    F: Fn(S::Node) -> Option<Marker>,
{
    let Some(root) = source.root() else {
        return "(empty)".to_string();
    };
    let levels = build_levels(source, root, MAX_LEVELS);
    let labels = |node: S::Node| match marker(node) {
        Some(m) => format!("{}{}", m, source.label(node)),
        None => source.label(node),
    };

    let max_len = levels
        .iter()
        .flatten()
        .flatten()
        .map(|node| width(&labels(*node)))
        .max()
        .unwrap_or(1)
        .max(1);
    let label_width = (max_len + 2).max(4);
    let center = center_offset(label_width);
    let gaps = level_gaps(levels.len());

    let mut lines: Vec<String> = Vec::new();
    for (depth, level) in levels.iter().enumerate() {
        let slots = positions(level.len(), gaps[depth], label_width);
        let mut row = Row::new(&slots, label_width);
        for (node, pos) in level.iter().zip(&slots) {
            if let Some(node) = node {
                row.write(*pos, &ljust(&format!("[{}]", labels(*node)), label_width));
            }
        }
        lines.push(row.finish());

        if depth + 1 == levels.len() || !level.iter().flatten().any(|n| source.has_child(*n)) {
            break;
        }

        let mut arrows = Row::new(&slots, label_width);
        for (node, pos) in level.iter().zip(&slots) {
            if node.is_some_and(|n| source.has_child(n)) {
                arrows.put(pos + center, '▼');
            }
        }
        lines.push(arrows.finish());

        let children = &levels[depth + 1];
        let child_positions = positions(children.len(), gaps[depth + 1], label_width);
        let mut branch = Row::new(&child_positions, label_width);
        for (index, node) in level.iter().enumerate() {
            let Some(node) = node else { continue };
            let left = source.left(*node).map(|_| child_positions[index * 2] + center);
            let right = source.right(*node).map(|_| child_positions[index * 2 + 1] + center);
            let (left, right) = match (left, right) {
                (None, None) => continue,
                (Some(l), None) => (l, l),
                (None, Some(r)) => (r, r),
                (Some(l), Some(r)) => (l, r),
            };
            if left == right {
                branch.put(left, '│');
                continue;
            }
            branch.put(left, '┌');
            branch.put(right, '┐');
            for pos in left + 1..right {
                branch.put(pos, '─');
            }
        }
        lines.push(branch.finish());

        let mut child_arrows = Row::new(&child_positions, label_width);
        for (node, pos) in children.iter().zip(&child_positions) {
            if node.is_some() {
                child_arrows.put(pos + center, '▼');
            }
        }
        lines.push(child_arrows.finish());
    }

    let depth = tree_depth(source, root);
    if depth > levels.len() {
        lines.push(format!("… (depth {} truncated)", depth));
    }
    lines.join("\n")
}

fn positions(count: usize, gap: usize, label_width: usize) -> Vec<usize> {
    let indent = gap / 2;
    (0..count).map(|index| indent + index * (gap + label_width)).collect()
}

fn center_offset(label_width: usize) -> usize {
    if label_width <= 3 {
        label_width / 2
    } else {
        label_width / 2 - 1
    }
}

/// Leaf gap is 4; each level above doubles its child gap plus 2
fn level_gaps(count: usize) -> Vec<usize> {
    let mut gaps = vec![0; count];
    if let Some(last) = gaps.last_mut() {
        *last = 4;
    }
    for index in (0..count.saturating_sub(1)).rev() {
        gaps[index] = gaps[index + 1] * 2 + 2;
    }
    gaps
}

/// Up to `max_levels` levels from the root, padding absent children with two
/// empty slots
fn build_levels<S: TreeSource>(
    source: &S,
    root: S::Node,
    max_levels: usize,
) -> Vec<Vec<Option<S::Node>>> {
    let mut levels = Vec::new();
    let mut current = vec![Some(root)];
    while levels.len() < max_levels && current.iter().any(Option::is_some) {
        let next = current
            .iter()
            .flat_map(|slot| match slot {
                Some(node) => [source.left(*node), source.right(*node)],
                None => [None, None],
            })
            .collect();
        levels.push(std::mem::replace(&mut current, next));
    }
    levels
}

/// Number of levels, counting only occupied nodes
fn tree_depth<S: TreeSource>(source: &S, root: S::Node) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(root, 1)];
    while let Some((node, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        pending.extend(source.left(node).map(|child| (child, depth + 1)));
        pending.extend(source.right(node).map(|child| (child, depth + 1)));
    }
    deepest
}

/// A character row sized to hold every slot of one level
struct Row {
    cells: Vec<char>,
}

impl Row {
    fn new(positions: &[usize], label_width: usize) -> Self {
        let width = positions.last().map_or(label_width, |last| last + label_width);
        Row {
            cells: vec![' '; width],
        }
    }

    fn put(&mut self, pos: usize, glyph: char) {
        if pos >= self.cells.len() {
            self.cells.resize(pos + 1, ' ');
        }
        self.cells[pos] = glyph;
    }

    fn write(&mut self, pos: usize, text: &str) {
        for (offset, glyph) in text.chars().enumerate() {
            self.put(pos + offset, glyph);
        }
    }

    fn finish(self) -> String {
        let line: String = self.cells.into_iter().collect();
        line.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::tree::fixtures;
    use crate::memory::BuiltinClass;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().map(|v| Value::Int(*v)).collect()
    }

    #[test]
    fn test_level_gaps() {
        assert_eq!(level_gaps(3), vec![22, 10, 4]);
        assert!(level_gaps(0).is_empty());
    }

    #[test]
    fn test_min_heap_three_nodes() {
        let out = render_min_heap(&ints(&[1, 2, 3]));
        let expected = [
            "     [1]",
            "      ▼",
            "   ┌───────┐",
            "   ▼       ▼",
            "  [2]     [3]",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_single_child_draws_vertical_bar() {
        let out = render_min_heap(&ints(&[1, 2]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "   │");
    }

    #[test]
    fn test_deep_chain_is_truncated() {
        let keys: Vec<i64> = (1..=40).collect();
        let tree = fixtures::tree(BuiltinClass::BinarySearchTree, &keys);
        let out = render_binary_search_tree(&tree);
        let lines: Vec<&str> = out.lines().collect();
        let label_rows = lines.iter().filter(|line| line.contains('[')).count();
        assert_eq!(label_rows, MAX_LEVELS);
        assert!(lines[0].contains("[1]"));
        assert!(out.contains("[5]"));
        assert!(!out.contains("[6]"));
        assert!(out.ends_with("… (depth 40 truncated)\n\nLeft < Node < Right"));
    }

    #[test]
    fn test_shallow_tree_has_no_truncation_line() {
        let out = render_min_heap(&ints(&(1..=31).collect::<Vec<_>>()));
        assert!(!out.contains("truncated"));
        assert_eq!(out.lines().filter(|line| line.contains('[')).count(), 5);
        let deeper = render_min_heap(&ints(&(1..=32).collect::<Vec<_>>()));
        assert!(deeper.ends_with("… (depth 6 truncated)"));
    }

    #[test]
    fn test_empty_trees() {
        assert_eq!(render_min_heap(&[]), "(empty)");
        assert_eq!(
            render_binary_search_tree(&TreeSnapshot::default()),
            "(empty)\n\nLeft < Node < Right"
        );
    }
}
