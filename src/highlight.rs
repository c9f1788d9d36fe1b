//! Highlight model
//!
//! Describes which elements of a structure are in which visual state during
//! an algorithm step. Array algorithms use [`HighlightContext`] (index sets);
//! tree algorithms use [`TreeHighlightContext`] (node identities).
//!
//! A single element may sit in several sets at once. [`HighlightContext::marker_for`]
//! and [`TreeHighlightContext::marker_for`] resolve overlaps with a fixed
//! priority and return at most one [`Marker`]:
//!
//! ```text
//! index:  found > current > comparing > visited > eliminated
//! node:   found > current > comparing > path > visited
//! ```

use crate::memory::ObjId;
use std::collections::BTreeSet;
use std::fmt;

/// Left glyph spliced into the array border at the low boundary
pub const BOUNDARY_LEFT: char = '[';
/// Right glyph spliced into the array border at the high boundary
pub const BOUNDARY_RIGHT: char = ']';

/// Single-character marker prefixed to a highlighted element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Current,
    Visited,
    Found,
    Comparing,
    Eliminated,
}

impl Marker {
    pub const ALL: [Marker; 5] = [
        Marker::Current,
        Marker::Visited,
        Marker::Found,
        Marker::Comparing,
        Marker::Eliminated,
    ];

    pub fn glyph(self) -> char {
        match self {
            Marker::Current => '→',
            Marker::Visited => '·',
            Marker::Found => '✓',
            Marker::Comparing => '?',
            Marker::Eliminated => '×',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Marker> {
        Marker::ALL.into_iter().find(|marker| marker.glyph() == glyph)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Index-based highlights for array algorithms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightContext {
    pub current: BTreeSet<usize>,
    pub comparing: BTreeSet<usize>,
    pub visited: BTreeSet<usize>,
    pub found: BTreeSet<usize>,
    pub eliminated: BTreeSet<usize>,
    /// Active search range `(low, high)`
    pub boundaries: Option<(usize, usize)>,
}

impl HighlightContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.current.extend(indices);
        self
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing.extend(indices);
        self
    }

    pub fn visited(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.visited.extend(indices);
        self
    }

    pub fn found(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.found.extend(indices);
        self
    }

    pub fn eliminated(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.eliminated.extend(indices);
        self
    }

    pub fn boundaries(mut self, low: usize, high: usize) -> Self {
        self.boundaries = Some((low, high));
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Marker for an index, resolved by priority
    pub fn marker_for(&self, index: usize) -> Option<Marker> {
        if self.found.contains(&index) {
            Some(Marker::Found)
        } else if self.current.contains(&index) {
            Some(Marker::Current)
        } else if self.comparing.contains(&index) {
            Some(Marker::Comparing)
        } else if self.visited.contains(&index) {
            Some(Marker::Visited)
        } else if self.eliminated.contains(&index) {
            Some(Marker::Eliminated)
        } else {
            None
        }
    }

    pub fn is_left_boundary(&self, index: usize) -> bool {
        matches!(self.boundaries, Some((low, _)) if low == index)
    }

    pub fn is_right_boundary(&self, index: usize) -> bool {
        matches!(self.boundaries, Some((_, high)) if high == index)
    }

    /// Whether `index` lies in the active range (everything does without one)
    pub fn in_range(&self, index: usize) -> bool {
        match self.boundaries {
            Some((low, high)) => low <= index && index <= high,
            None => true,
        }
    }
}

/// Identity-based highlights for tree algorithms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeHighlightContext {
    pub current_node: Option<ObjId>,
    pub visited_nodes: BTreeSet<ObjId>,
    pub found_node: Option<ObjId>,
    /// Root-to-current path, in order
    pub path_nodes: Vec<ObjId>,
    pub comparing_node: Option<ObjId>,
}

impl TreeHighlightContext {
    /// Marker for a node, resolved by priority
    pub fn marker_for(&self, node: ObjId) -> Option<Marker> {
        if self.found_node == Some(node) {
            Some(Marker::Found)
        } else if self.current_node == Some(node) {
            Some(Marker::Current)
        } else if self.comparing_node == Some(node) {
            Some(Marker::Comparing)
        } else if self.path_nodes.contains(&node) || self.visited_nodes.contains(&node) {
            Some(Marker::Visited)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_outranks_every_other_state() {
        let ctx = HighlightContext::new()
            .current([2])
            .comparing([2])
            .visited([2])
            .found([2])
            .eliminated([2]);
        assert_eq!(ctx.marker_for(2), Some(Marker::Found));
        assert_eq!(ctx.marker_for(3), None);
    }

    #[test]
    fn test_index_priority_chain() {
        let ctx = HighlightContext::new()
            .current([0, 1])
            .comparing([1, 2])
            .visited([2, 3])
            .eliminated([3, 4]);
        assert_eq!(ctx.marker_for(1), Some(Marker::Current));
        assert_eq!(ctx.marker_for(2), Some(Marker::Comparing));
        assert_eq!(ctx.marker_for(3), Some(Marker::Visited));
        assert_eq!(ctx.marker_for(4), Some(Marker::Eliminated));
    }

    #[test]
    fn test_boundaries() {
        let ctx = HighlightContext::new().boundaries(2, 5);
        assert!(ctx.is_left_boundary(2));
        assert!(ctx.is_right_boundary(5));
        assert!(!ctx.in_range(6));
        assert!(HighlightContext::new().in_range(100));
    }

    #[test]
    fn test_tree_priority() {
        let a = ObjId(0x10);
        let b = ObjId(0x20);
        let ctx = TreeHighlightContext {
            current_node: Some(a),
            found_node: Some(a),
            path_nodes: vec![b],
            ..Default::default()
        };
        assert_eq!(ctx.marker_for(a), Some(Marker::Found));
        assert_eq!(ctx.marker_for(b), Some(Marker::Visited));
        assert_eq!(Marker::from_glyph('×'), Some(Marker::Eliminated));
    }
}
