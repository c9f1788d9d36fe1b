//! Tree algorithms
//!
//! Trees are searched over a [`TreeSnapshot`] captured when the algorithm
//! starts, so later edits to the live tree do not disturb replay.
//!
//! - [`TreeSearch`]: depth-first (pre-order) or breadth-first search
//! - [`TreeTraversal`]: visits every node in the same two orders
//! - [`BstSearch`]: follows the ordering property, one child per level
//!
//! Depth-first order uses an explicit stack that receives the right child
//! before the left, so the left subtree is explored first. Breadth-first
//! order uses a FIFO queue, left before right.

mod bst;
mod search;
mod traversal;

pub use bst::BstSearch;
pub use search::TreeSearch;
pub use traversal::TreeTraversal;

use super::types::{AlgorithmStep, StepCounter, StepData, StepResult};
use crate::highlight::TreeHighlightContext;
use crate::memory::{ObjId, Value};
use crate::snapshot::{TreeNode, TreeSnapshot};
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

/// Order in which a tree is walked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Pre-order: root, left subtree, right subtree
    DepthFirst,
    /// Level order, left to right
    BreadthFirst,
}

impl Order {
    pub fn short_name(self) -> &'static str {
        match self {
            Order::DepthFirst => "DFS",
            Order::BreadthFirst => "BFS",
        }
    }
}

/// Nodes waiting to be visited, each with its depth
#[derive(Debug)]
struct Frontier {
    order: Order,
    pending: VecDeque<(ObjId, usize)>,
}

impl Frontier {
    fn new(order: Order, root: Option<ObjId>) -> Self {
        Frontier {
            order,
            pending: root.map(|id| (id, 0)).into_iter().collect(),
        }
    }

    fn pop(&mut self) -> Option<(ObjId, usize)> {
        match self.order {
            Order::DepthFirst => self.pending.pop_back(),
            Order::BreadthFirst => self.pending.pop_front(),
        }
    }

    fn push_children(&mut self, node: &TreeNode, depth: usize) {
        let children = match self.order {
            Order::DepthFirst => [node.right, node.left],
            Order::BreadthFirst => [node.left, node.right],
        };
        self.pending
            .extend(children.into_iter().flatten().map(|id| (id, depth + 1)));
    }
}

/// State shared by the tree generators
#[derive(Debug)]
struct TreeState {
    tree: Rc<TreeSnapshot>,
    steps: StepCounter,
    visited: BTreeSet<ObjId>,
}

impl TreeState {
    fn new(tree: Rc<TreeSnapshot>) -> Self {
        TreeState {
            steps: StepCounter::new(StepData::Tree(Rc::clone(&tree))),
            tree,
            visited: BTreeSet::new(),
        }
    }

    fn value(&self, id: ObjId) -> Value {
        self.tree
            .node(id)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    fn visited(&self) -> TreeHighlightContext {
        TreeHighlightContext {
            visited_nodes: self.visited.clone(),
            ..Default::default()
        }
    }

    fn empty_search(&mut self) -> AlgorithmStep {
        self.steps.finish(
            "Tree is empty - nothing to search".to_string(),
            TreeHighlightContext::default(),
            StepResult::NotFound,
        )
    }

    fn not_found(&mut self, target: &Value) -> AlgorithmStep {
        let action = format!("Target {} not found in tree", target);
        let highlights = self.visited();
        self.steps.finish(action, highlights, StepResult::NotFound)
    }
}

/// Python-style list display of visited values
fn list_display(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(Value::repr).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::memory::structures::construct;
    use crate::memory::{BuiltinClass, Heap, ObjId, Value};
    use crate::snapshot::TreeSnapshot;
    use std::rc::Rc;

    /// Snapshot of a builtin tree built by inserting `values` in order
    pub(crate) fn tree(class: BuiltinClass, values: &[i64]) -> Rc<TreeSnapshot> {
        let mut heap = Heap::new();
        let initial = values.iter().map(|v| Value::Int(*v)).collect();
        let id = construct(&mut heap, class, initial, false).unwrap();
        let root = heap
            .instance(id)
            .and_then(|tree| tree.field("root"))
            .and_then(Value::as_obj);
        Rc::new(TreeSnapshot::capture(&heap, root))
    }

    pub(crate) fn values(tree: &TreeSnapshot, ids: impl IntoIterator<Item = ObjId>) -> Vec<i64> {
        ids.into_iter()
            .filter_map(|id| tree.node(id)?.value.as_int())
            .collect()
    }
}
