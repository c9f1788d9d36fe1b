use super::{Frontier, Order, TreeState};
use crate::algorithms::types::{AlgorithmStep, StepResult};
use crate::highlight::TreeHighlightContext;
use crate::memory::{ObjId, Value};
use crate::snapshot::TreeSnapshot;
use std::rc::Rc;

/// Depth-first or breadth-first search for a value
///
/// Each node costs two steps: a visit step that compares it, then either
/// the found step or (silently) queueing its children. Depth-first search
/// also tracks the root-to-current path.
#[derive(Debug)]
pub struct TreeSearch {
    state: TreeState,
    target: Value,
    frontier: Frontier,
    /// Node visited by the previous step, still to be decided
    pending: Option<(ObjId, usize)>,
    path: Vec<ObjId>,
}

impl TreeSearch {
    pub fn new(order: Order, tree: Rc<TreeSnapshot>, target: Value) -> Self {
        let frontier = Frontier::new(order, tree.root);
        TreeSearch {
            state: TreeState::new(tree),
            target,
            frontier,
            pending: None,
            path: Vec::new(),
        }
    }

    pub fn depth_first(tree: Rc<TreeSnapshot>, target: Value) -> Self {
        Self::new(Order::DepthFirst, tree, target)
    }

    pub fn breadth_first(tree: Rc<TreeSnapshot>, target: Value) -> Self {
        Self::new(Order::BreadthFirst, tree, target)
    }

    fn tracks_path(&self) -> bool {
        self.frontier.order == Order::DepthFirst
    }

    fn decide(&mut self, id: ObjId, depth: usize) -> Option<AlgorithmStep> {
        let value = self.state.value(id);
        if value.equals(&self.target) {
            let action = format!("Found target {}!", self.target);
            let highlights = TreeHighlightContext {
                found_node: Some(id),
                path_nodes: self.path.clone(),
                ..self.state.visited()
            };
            let result = StepResult::Node { id, value };
            return Some(self.state.steps.finish(action, highlights, result));
        }
        self.state.visited.insert(id);
        if let Some(node) = self.state.tree.node(id) {
            self.frontier.push_children(node, depth);
        }
        None
    }
}

impl Iterator for TreeSearch {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        if self.state.steps.is_finished() {
            return None;
        }
        if self.state.tree.is_empty() {
            return Some(self.state.empty_search());
        }
        if let Some((id, depth)) = self.pending.take() {
            if let Some(found) = self.decide(id, depth) {
                return Some(found);
            }
        }
        let Some((id, depth)) = self.frontier.pop() else {
            return Some(self.state.not_found(&self.target));
        };
        if self.tracks_path() {
            self.path.truncate(depth);
            self.path.push(id);
        }
        self.pending = Some((id, depth));

        let action = format!(
            "Visit node with value {}, compare with target {}",
            self.state.value(id),
            self.target
        );
        let highlights = TreeHighlightContext {
            current_node: Some(id),
            comparing_node: Some(id),
            path_nodes: self.path.clone(),
            ..self.state.visited()
        };
        Some(self.state.steps.step(action, highlights))
    }
}
