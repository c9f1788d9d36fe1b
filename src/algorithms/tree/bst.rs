use super::TreeState;
use crate::algorithms::types::{AlgorithmStep, StepResult};
use crate::highlight::TreeHighlightContext;
use crate::memory::{ObjId, Value};
use crate::snapshot::TreeSnapshot;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Compare(ObjId),
    /// The previous comparison pointed at a missing child
    DeadEnd(&'static str),
}

/// Walks down a binary search tree, one child per level
///
/// Targets smaller than a node go left, everything else goes right; values
/// that cannot be compared therefore go right.
#[derive(Debug)]
pub struct BstSearch {
    state: TreeState,
    target: Value,
    phase: Option<Phase>,
    path: Vec<ObjId>,
}

impl BstSearch {
    pub fn new(tree: Rc<TreeSnapshot>, target: Value) -> Self {
        let phase = tree.root.map(Phase::Compare);
        BstSearch {
            state: TreeState::new(tree),
            target,
            phase,
            path: Vec::new(),
        }
    }
}

impl Iterator for BstSearch {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        let s = &mut self.state;
        if s.steps.is_finished() {
            return None;
        }
        let id = match self.phase {
            None => return Some(s.empty_search()),
            Some(Phase::DeadEnd(direction)) => {
                let action = format!(
                    "No {} child - target {} not found in tree",
                    direction, self.target
                );
                let highlights = TreeHighlightContext {
                    path_nodes: self.path.clone(),
                    ..s.visited()
                };
                return Some(s.steps.finish(action, highlights, StepResult::NotFound));
            }
            Some(Phase::Compare(id)) => id,
        };

        self.path.push(id);
        let value = s.value(id);
        if value.equals(&self.target) {
            let action = format!(
                "Compare {} with {}: Equal - Found target!",
                self.target, value
            );
            let highlights = TreeHighlightContext {
                found_node: Some(id),
                path_nodes: self.path.clone(),
                ..s.visited()
            };
            return Some(s.steps.finish(action, highlights, StepResult::Node { id, value }));
        }

        s.visited.insert(id);
        let node = s.tree.node(id);
        let (direction, sign, child) = if self.target.less_than(&value) {
            ("left", '<', node.and_then(|n| n.left))
        } else {
            ("right", '>', node.and_then(|n| n.right))
        };
        self.phase = Some(match child {
            Some(child) => Phase::Compare(child),
            None => Phase::DeadEnd(direction),
        });
        let action = format!(
            "Compare {} with {}: {} {} {}, go {}",
            self.target, value, self.target, sign, value, direction
        );
        let highlights = TreeHighlightContext {
            current_node: Some(id),
            comparing_node: Some(id),
            path_nodes: self.path.clone(),
            ..s.visited()
        };
        Some(s.steps.step(action, highlights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::tree::fixtures::{tree, values};
    use crate::memory::BuiltinClass;

    #[test]
    fn test_never_visits_left_subtree_when_going_right() {
        let shape = tree(BuiltinClass::BinarySearchTree, &[10, 5, 15, 3, 7, 12, 20]);
        let steps: Vec<_> = BstSearch::new(Rc::clone(&shape), Value::Int(12)).collect();
        let actions: Vec<&str> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            [
                "Compare 12 with 10: 12 > 10, go right",
                "Compare 12 with 15: 12 < 15, go left",
                "Compare 12 with 12: Equal - Found target!",
            ]
        );
        for step in &steps {
            let highlights = step.highlights.as_tree().unwrap();
            let visited = values(&shape, highlights.visited_nodes.iter().copied());
            assert!(visited.iter().all(|v| ![5, 3, 7].contains(v)));
        }
        let found = steps[2].highlights.as_tree().unwrap();
        assert_eq!(values(&shape, found.path_nodes.iter().copied()), [10, 15, 12]);
    }

    #[test]
    fn test_dead_end_reports_direction() {
        let shape = tree(BuiltinClass::BinarySearchTree, &[10, 5]);
        let steps: Vec<_> = BstSearch::new(shape, Value::Int(4)).collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].action, "Compare 4 with 5: 4 < 5, go left");
        assert_eq!(steps[2].action, "No left child - target 4 not found in tree");
        assert_eq!(steps[2].result, Some(StepResult::NotFound));
    }
}
