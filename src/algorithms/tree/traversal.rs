use super::{list_display, Frontier, Order, TreeState};
use crate::algorithms::types::{AlgorithmStep, StepResult};
use crate::highlight::TreeHighlightContext;
use crate::memory::Value;
use crate::snapshot::TreeSnapshot;
use std::rc::Rc;

/// Visits every node once, then reports the visiting order
#[derive(Debug)]
pub struct TreeTraversal {
    state: TreeState,
    frontier: Frontier,
    order: Vec<Value>,
}

impl TreeTraversal {
    pub fn new(order: Order, tree: Rc<TreeSnapshot>) -> Self {
        let frontier = Frontier::new(order, tree.root);
        TreeTraversal {
            state: TreeState::new(tree),
            frontier,
            order: Vec::new(),
        }
    }
}

impl Iterator for TreeTraversal {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        let s = &mut self.state;
        if s.steps.is_finished() {
            return None;
        }
        if s.tree.is_empty() {
            return Some(s.steps.finish(
                "Tree is empty - nothing to traverse".to_string(),
                TreeHighlightContext::default(),
                StepResult::Traversal(Vec::new()),
            ));
        }
        let Some((id, depth)) = self.frontier.pop() else {
            let action = format!(
                "{} traversal complete. Order: {}",
                self.frontier.order.short_name(),
                list_display(&self.order)
            );
            let highlights = s.visited();
            let result = StepResult::Traversal(std::mem::take(&mut self.order));
            return Some(s.steps.finish(action, highlights, result));
        };

        let value = s.value(id);
        s.visited.insert(id);
        self.order.push(value.clone());
        if let Some(node) = s.tree.node(id) {
            self.frontier.push_children(node, depth);
        }
        let highlights = TreeHighlightContext {
            current_node: Some(id),
            ..s.visited()
        };
        Some(s.steps.step(format!("Visit node with value {}", value), highlights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::tree::fixtures::tree;
    use crate::memory::BuiltinClass;

    fn actions(order: Order, values: &[i64]) -> Vec<String> {
        TreeTraversal::new(order, tree(BuiltinClass::BinaryTree, values))
            .map(|step| step.action)
            .collect()
    }

    #[test]
    fn test_dfs_traversal_order() {
        let actions = actions(Order::DepthFirst, &[10, 5, 15, 3, 7]);
        assert_eq!(
            actions.last().unwrap(),
            "DFS traversal complete. Order: [10, 5, 3, 7, 15]"
        );
        assert_eq!(actions.len(), 6);
    }

    #[test]
    fn test_bfs_traversal_result() {
        let steps: Vec<_> =
            TreeTraversal::new(Order::BreadthFirst, tree(BuiltinClass::BinaryTree, &[1, 2, 3])).collect();
        assert_eq!(steps[0].action, "Visit node with value 1");
        let last = steps.last().unwrap();
        assert_eq!(last.action, "BFS traversal complete. Order: [1, 2, 3]");
        assert_eq!(
            last.result,
            Some(StepResult::Traversal(vec![Value::Int(1), Value::Int(2), Value::Int(3)]))
        );
    }

    #[test]
    fn test_empty_traversal() {
        assert_eq!(actions(Order::DepthFirst, &[]), ["Tree is empty - nothing to traverse"]);
    }
}
