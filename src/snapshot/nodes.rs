//! Node-structure capture
//!
//! Linked lists and trees are stored on the heap as instances pointing at
//! each other. Rendering must not need the heap, so classification copies
//! the reachable nodes into plain data:
//!
//! - [`capture_chain`] follows `next` pointers into a `Vec<ChainNode>`
//! - [`TreeSnapshot::capture`] follows `left`/`right` into a node table
//!
//! Both walks keep a visited set and stop at the first repeated identity, so
//! a cycle such as `A → B → A` yields two nodes instead of looping.

use crate::memory::{Heap, Instance, ObjId, Value};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Copy a value out of the heap for display
///
/// Primitives are kept as-is. References become their `repr` text so that
/// nested containers still print as `[1, 2]` once detached from the heap.
pub fn detach_value(heap: &Heap, value: &Value) -> Value {
    match value {
        Value::Ref(_) => Value::Str(heap.repr(value)),
        other => other.clone(),
    }
}

/// Payload value of a node: its `value` field, else its `data` field
pub fn node_value(instance: &Instance) -> Option<&Value> {
    instance.field("value").or_else(|| instance.field("data"))
}

/// One node of a linked chain
#[derive(Debug, Clone, PartialEq)]
pub struct ChainNode {
    pub id: ObjId,
    pub value: Value,
    pub next: Option<ObjId>,
    pub prev: Option<ObjId>,
}

/// Walk a chain from `head` along `next`, stopping at a repeated node
pub fn capture_chain(heap: &Heap, head: Option<ObjId>) -> Vec<ChainNode> {
    let mut nodes = Vec::new();
    let mut seen = FxHashSet::default();
    let mut current = head;
    while let Some(id) = current {
        if !seen.insert(id) {
            break;
        }
        let Some(instance) = heap.instance(id) else {
            break;
        };
        let pointer = |name: &str| instance.field(name).and_then(Value::as_obj);
        let value = node_value(instance)
            .map(|value| detach_value(heap, value))
            .unwrap_or_default();
        nodes.push(ChainNode {
            id,
            value,
            next: pointer("next"),
            prev: pointer("prev"),
        });
        current = pointer("next");
    }
    nodes
}

/// One node of a captured binary tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: ObjId,
    pub value: Value,
    pub left: Option<ObjId>,
    pub right: Option<ObjId>,
}

/// A binary tree copied out of the heap
///
/// Every child id present on a node is also a key of `nodes`. Edges that
/// would revisit an already captured node are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeSnapshot {
    pub root: Option<ObjId>,
    pub nodes: FxHashMap<ObjId, TreeNode>,
}

impl TreeSnapshot {
    pub fn capture(heap: &Heap, root: Option<ObjId>) -> Self {
        let root = root.filter(|id| heap.instance(*id).is_some());
        let mut nodes = FxHashMap::default();
        let mut seen = FxHashSet::default();
        let mut queue: VecDeque<ObjId> = root.into_iter().collect();
        seen.extend(root);

        while let Some(id) = queue.pop_front() {
            let Some(instance) = heap.instance(id) else {
                continue;
            };
            let mut child = |name: &str| {
                let child = instance.field(name).and_then(Value::as_obj)?;
                heap.instance(child)?;
                if !seen.insert(child) {
                    return None;
                }
                queue.push_back(child);
                Some(child)
            };
            let left = child("left");
            let right = child("right");
            let value = node_value(instance)
                .map(|value| detach_value(heap, value))
                .unwrap_or_default();
            nodes.insert(id, TreeNode { id, value, left, right });
        }
        TreeSnapshot { root, nodes }
    }

    pub fn node(&self, id: ObjId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Node ids in level order
    pub fn level_order(&self) -> Vec<ObjId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue: VecDeque<ObjId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let Some(node) = self.node(id) else {
                continue;
            };
            order.push(id);
            queue.extend(node.left);
            queue.extend(node.right);
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{BuiltinClass, Object};

    fn node(heap: &mut Heap, data: i64) -> ObjId {
        heap.alloc(Object::Instance(Instance::builtin(
            BuiltinClass::LinkedListNode,
            vec![("data", Value::Int(data)), ("next", Value::None)],
        )))
    }

    #[test]
    fn test_chain_stops_at_cycle() {
        let mut heap = Heap::new();
        let a = node(&mut heap, 1);
        let b = node(&mut heap, 2);
        heap.instance_mut(a).unwrap().set_field("next", Value::Ref(b));
        heap.instance_mut(b).unwrap().set_field("next", Value::Ref(a));

        let chain = capture_chain(&heap, Some(a));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1].value, Value::Int(2));
        assert_eq!(chain[1].next, Some(a));
    }

    #[test]
    fn test_tree_capture_cuts_back_edges() {
        let mut heap = Heap::new();
        let root = heap.alloc(Object::Instance(Instance::builtin(
            BuiltinClass::BinaryTreeNode,
            vec![("value", Value::Int(1)), ("left", Value::None), ("right", Value::None)],
        )));
        heap.instance_mut(root).unwrap().set_field("left", Value::Ref(root));

        let tree = TreeSnapshot::capture(&heap, Some(root));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(root).unwrap().left, None);
        assert_eq!(tree.level_order(), vec![root]);
    }

    #[test]
    fn test_detach_nested_list() {
        let mut heap = Heap::new();
        let list = heap.alloc_list(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(detach_value(&heap, &list), Value::str("[1, 2]"));
        assert_eq!(detach_value(&heap, &Value::Int(3)), Value::Int(3));
    }
}
