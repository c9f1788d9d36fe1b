//! Structural classification
//!
//! Decides which container shape an object plays the role of, independent of
//! its nominal class, and extracts a renderer-ready [`Payload`]. User classes
//! that merely imitate a builtin (a class with `push`/`pop`/`peek`, a node
//! with `next` and `data`) are recognised by probing for named members.
//!
//! Rules run in a fixed order and the first match wins:
//!
//! | # | rule                         | kind                    |
//! |---|------------------------------|-------------------------|
//! | 1 | list                         | Array                   |
//! | 2 | dict                         | Hash Table              |
//! | 3 | builtin Stack/Queue/MinHeap/Graph | its own kind       |
//! | 4 | `insert`, `pop_min`, `peek`  | Min Heap                |
//! | 5 | `adjacency()` or adjacency dict | Directed/Undirected Graph |
//! | 6 | `push`, `pop`, `peek`        | Stack                   |
//! | 7 | `enqueue`, `dequeue`, `peek` | Queue                   |
//! | 8 | builtin BinarySearchTree     | Binary Search Tree      |
//! | 9 | tree node, or `root`         | Binary Tree             |
//! | 10| doubly linked node, or `head`| Doubly Linked List      |
//! | 11| linked node, or `head`       | Linked List             |
//! | 12| anything else                | Object ("unrendered")   |
//!
//! Some probes are strict subsets of others (a doubly linked node is also a
//! singly linked node), so the order is significant.

use super::nodes::{capture_chain, detach_value, ChainNode, TreeSnapshot};
use crate::memory::{structures, BuiltinClass, ClassRef, Heap, Instance, ObjId, Object, Value};
use std::fmt;

/// Canonical container shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralKind {
    Array,
    HashTable,
    Stack,
    Queue,
    MinHeap,
    LinkedList,
    DoublyLinkedList,
    BinaryTree,
    BinarySearchTree,
    DirectedGraph,
    UndirectedGraph,
    Object,
}

impl StructuralKind {
    pub fn label(self) -> &'static str {
        match self {
            StructuralKind::Array => "Array",
            StructuralKind::HashTable => "Hash Table",
            StructuralKind::Stack => "Stack",
            StructuralKind::Queue => "Queue",
            StructuralKind::MinHeap => "Min Heap",
            StructuralKind::LinkedList => "Linked List",
            StructuralKind::DoublyLinkedList => "Doubly Linked List",
            StructuralKind::BinaryTree => "Binary Tree",
            StructuralKind::BinarySearchTree => "Binary Search Tree",
            StructuralKind::DirectedGraph => "Directed Graph",
            StructuralKind::UndirectedGraph => "Undirected Graph",
            StructuralKind::Object => "Object",
        }
    }
}

impl fmt::Display for StructuralKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renderer-ready data extracted from a classified object
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Array, Stack, Queue and Min Heap items
    Sequence(Vec<Value>),
    /// Hash table entries in insertion order
    Mapping(Vec<(Value, Value)>),
    /// Linked list nodes from the head
    Chain(Vec<ChainNode>),
    Tree(TreeSnapshot),
    /// Graph nodes with their neighbors
    Adjacency(Vec<(Value, Vec<Value>)>),
    Absent,
}

/// Result of classifying one object
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub kind: StructuralKind,
    pub summary: String,
    pub payload: Payload,
}

impl Classification {
    fn sequence(kind: StructuralKind, items: Vec<Value>, label: &str) -> Self {
        Classification {
            kind,
            summary: format!("{}={}", label, items.len()),
            payload: Payload::Sequence(items),
        }
    }

    fn chain(kind: StructuralKind, nodes: Vec<ChainNode>) -> Self {
        Classification {
            kind,
            summary: format!("len={}", nodes.len()),
            payload: Payload::Chain(nodes),
        }
    }

    fn tree(kind: StructuralKind, tree: TreeSnapshot) -> Self {
        Classification {
            kind,
            summary: "rooted".to_string(),
            payload: Payload::Tree(tree),
        }
    }

    fn graph(adjacency: Vec<(Value, Vec<Value>)>, directed: bool) -> Self {
        let kind = if directed {
            StructuralKind::DirectedGraph
        } else {
            StructuralKind::UndirectedGraph
        };
        Classification {
            kind,
            summary: format!("nodes={}", adjacency.len()),
            payload: Payload::Adjacency(adjacency),
        }
    }
}

/// Classify a value
///
/// Primitives, callables and dangling references are not containers and
/// return `None`. Every live object yields a classification, falling back to
/// [`StructuralKind::Object`].
pub fn classify(heap: &Heap, value: &Value) -> Option<Classification> {
    let id = value.as_obj()?;
    let object = heap.get(id)?;
    let probe = Probe { heap, id, object };
    let classification = RULES
        .iter()
        .find_map(|rule| rule(&probe))
        .unwrap_or_else(|| {
            log::debug!(
                "object {} of type {} matched no structural rule",
                id,
                object.type_name()
            );
            Classification {
                kind: StructuralKind::Object,
                summary: "unrendered".to_string(),
                payload: Payload::Absent,
            }
        });
    Some(classification)
}

/// What every rule gets to look at
struct Probe<'a> {
    heap: &'a Heap,
    id: ObjId,
    object: &'a Object,
}

impl<'a> Probe<'a> {
    fn instance(&self) -> Option<&'a Instance> {
        self.object.as_instance()
    }

    fn is_builtin(&self, class: BuiltinClass) -> bool {
        self.instance()
            .is_some_and(|instance| instance.class.is_builtin(class))
    }
}

type Rule = fn(&Probe) -> Option<Classification>;

const RULES: &[Rule] = &[
    array_rule,
    hash_table_rule,
    builtin_container_rule,
    heap_like_rule,
    graph_like_rule,
    stack_like_rule,
    queue_like_rule,
    builtin_bst_rule,
    binary_tree_rule,
    doubly_linked_rule,
    linked_rule,
];

// ===== Member probing =====

/// A member is callable when it is a declared method or holds a callable value
fn has_callable(instance: &Instance, name: &str) -> bool {
    instance.has_method(name) || instance.field(name).is_some_and(Value::is_callable)
}

fn has_callables(instance: &Instance, names: &[&str]) -> bool {
    names.iter().all(|name| has_callable(instance, name))
}

fn has_attr(instance: &Instance, name: &str) -> bool {
    instance.has_field(name) || instance.has_method(name)
}

fn has_node_value(instance: &Instance) -> bool {
    has_attr(instance, "value") || has_attr(instance, "data")
}

fn resolve<'h>(heap: &'h Heap, value: &Value) -> Option<&'h Instance> {
    heap.deref(value).and_then(Object::as_instance)
}

fn is_node_like(instance: &Instance) -> bool {
    has_attr(instance, "next") && has_node_value(instance)
}

fn is_doubly_node_like(instance: &Instance) -> bool {
    has_attr(instance, "next") && has_attr(instance, "prev") && has_node_value(instance)
}

fn is_tree_node_like(instance: &Instance) -> bool {
    has_attr(instance, "left") && has_attr(instance, "right") && has_node_value(instance)
}

/// Items of a list-valued field, detached from the heap
fn list_field(heap: &Heap, instance: &Instance, name: &str) -> Option<Vec<Value>> {
    let id = instance.field(name)?.as_obj()?;
    heap.list(id)
        .map(|items| items.iter().map(|item| detach_value(heap, item)).collect())
}

/// Probe for sequence contents in priority order
///
/// `items()` is only callable on builtins (user methods have no bodies), then
/// an `items` field, the private-looking fields, and the kind-specific
/// `extra` field. Instances are not iterable, so the final fallback is empty.
fn probe_items(probe: &Probe, instance: &Instance, extra: &str) -> Vec<Value> {
    if matches!(instance.class, ClassRef::Builtin(_)) && instance.has_method("items") {
        if let Some(items) = structures::items(probe.heap, probe.id) {
            return items
                .iter()
                .map(|item| detach_value(probe.heap, item))
                .collect();
        }
    }
    ["items", "_items", "_data", "data", extra]
        .iter()
        .find_map(|name| list_field(probe.heap, instance, name))
        .unwrap_or_default()
}

fn normalize_neighbors(heap: &Heap, neighbors: &Value) -> Vec<Value> {
    match heap.deref(neighbors) {
        Some(Object::List(items)) => items.iter().map(|item| detach_value(heap, item)).collect(),
        Some(Object::Dict(entries)) => entries
            .iter()
            .map(|(key, _)| detach_value(heap, key))
            .collect(),
        Some(Object::Instance(_)) => vec![detach_value(heap, neighbors)],
        None if neighbors.is_none() => Vec::new(),
        None => vec![neighbors.clone()],
    }
}

fn adjacency_field<'h>(heap: &'h Heap, instance: &Instance) -> Option<&'h Vec<(Value, Value)>> {
    ["adjacency", "adj", "graph"].iter().find_map(|name| {
        let id = instance.field(name)?.as_obj()?;
        heap.dict(id)
    })
}

fn builtin_field(probe: &Probe, name: &str) -> Option<ObjId> {
    probe.instance()?.field(name)?.as_obj()
}

// ===== Rules =====

fn array_rule(probe: &Probe) -> Option<Classification> {
    let Object::List(items) = probe.object else {
        return None;
    };
    let items = items
        .iter()
        .map(|item| detach_value(probe.heap, item))
        .collect();
    Some(Classification::sequence(StructuralKind::Array, items, "len"))
}

fn hash_table_rule(probe: &Probe) -> Option<Classification> {
    let Object::Dict(entries) = probe.object else {
        return None;
    };
    let entries: Vec<(Value, Value)> = entries
        .iter()
        .map(|(key, value)| (detach_value(probe.heap, key), detach_value(probe.heap, value)))
        .collect();
    Some(Classification {
        kind: StructuralKind::HashTable,
        summary: format!("size={}", entries.len()),
        payload: Payload::Mapping(entries),
    })
}

fn builtin_container_rule(probe: &Probe) -> Option<Classification> {
    let instance = probe.instance()?;
    let ClassRef::Builtin(class) = instance.class else {
        return None;
    };
    let kind = match class {
        BuiltinClass::Stack => StructuralKind::Stack,
        BuiltinClass::Queue => StructuralKind::Queue,
        BuiltinClass::MinHeap => StructuralKind::MinHeap,
        BuiltinClass::Graph => {
            let directed = instance.field("directed").is_some_and(Value::is_truthy);
            let adjacency = structures::adjacency(probe.heap, probe.id)
                .unwrap_or_default()
                .into_iter()
                .map(|(node, neighbors)| {
                    let neighbors = neighbors
                        .iter()
                        .map(|n| detach_value(probe.heap, n))
                        .collect();
                    (detach_value(probe.heap, &node), neighbors)
                })
                .collect();
            return Some(Classification::graph(adjacency, directed));
        }
        _ => return None,
    };
    let items = structures::items(probe.heap, probe.id)
        .unwrap_or_default()
        .iter()
        .map(|item| detach_value(probe.heap, item))
        .collect();
    Some(Classification::sequence(kind, items, "size"))
}

fn heap_like_rule(probe: &Probe) -> Option<Classification> {
    let instance = probe.instance()?;
    if !has_callables(instance, &["insert", "pop_min", "peek"]) {
        return None;
    }
    let items = probe_items(probe, instance, "heap");
    Some(Classification::sequence(StructuralKind::MinHeap, items, "size"))
}

fn graph_like_rule(probe: &Probe) -> Option<Classification> {
    let instance = probe.instance()?;
    let callable = has_callable(instance, "adjacency");
    let field = adjacency_field(probe.heap, instance);
    if !callable && field.is_none() {
        return None;
    }
    let directed = instance.field("directed").is_some_and(Value::is_truthy);
    let adjacency = field
        .map(|entries| {
            entries
                .iter()
                .map(|(node, neighbors)| {
                    (
                        detach_value(probe.heap, node),
                        normalize_neighbors(probe.heap, neighbors),
                    )
                })
                .collect()
        })
        .unwrap_or_default();
    Some(Classification::graph(adjacency, directed))
}

fn stack_like_rule(probe: &Probe) -> Option<Classification> {
    let instance = probe.instance()?;
    if !has_callables(instance, &["push", "pop", "peek"]) {
        return None;
    }
    let items = probe_items(probe, instance, "stack");
    Some(Classification::sequence(StructuralKind::Stack, items, "size"))
}

fn queue_like_rule(probe: &Probe) -> Option<Classification> {
    let instance = probe.instance()?;
    if !has_callables(instance, &["enqueue", "dequeue", "peek"]) {
        return None;
    }
    let front = instance.field("front").and_then(|front| {
        resolve(probe.heap, front)
            .filter(|node| is_node_like(node))
            .and(front.as_obj())
    });
    let items = match front {
        Some(front) => capture_chain(probe.heap, Some(front))
            .into_iter()
            .map(|node| node.value)
            .collect(),
        None => probe_items(probe, instance, "queue"),
    };
    Some(Classification::sequence(StructuralKind::Queue, items, "size"))
}

fn builtin_bst_rule(probe: &Probe) -> Option<Classification> {
    if !probe.is_builtin(BuiltinClass::BinarySearchTree) {
        return None;
    }
    let tree = TreeSnapshot::capture(probe.heap, builtin_field(probe, "root"));
    Some(Classification::tree(StructuralKind::BinarySearchTree, tree))
}

/// Resolve a node either as the object itself or through a named attribute
///
/// `Some(None)` means the attribute exists and holds `None`.
fn resolve_container(
    probe: &Probe,
    attribute: &str,
    node_like: fn(&Instance) -> bool,
) -> Option<Option<ObjId>> {
    let instance = probe.instance()?;
    if node_like(instance) {
        return Some(Some(probe.id));
    }
    let target = instance.field(attribute)?;
    if target.is_none() {
        return Some(None);
    }
    resolve(probe.heap, target)
        .filter(|node| node_like(node))
        .and(target.as_obj())
        .map(Some)
}

fn binary_tree_rule(probe: &Probe) -> Option<Classification> {
    let root = if probe.is_builtin(BuiltinClass::BinaryTree) {
        builtin_field(probe, "root")
    } else {
        resolve_container(probe, "root", is_tree_node_like)?
    };
    let tree = TreeSnapshot::capture(probe.heap, root);
    Some(Classification::tree(StructuralKind::BinaryTree, tree))
}

fn doubly_linked_rule(probe: &Probe) -> Option<Classification> {
    let head = if probe.is_builtin(BuiltinClass::DoublyLinkedList) {
        builtin_field(probe, "head")
    } else if probe.is_builtin(BuiltinClass::LinkedList) {
        return None;
    } else {
        resolve_container(probe, "head", is_doubly_node_like)?
    };
    let nodes = capture_chain(probe.heap, head);
    Some(Classification::chain(StructuralKind::DoublyLinkedList, nodes))
}

fn linked_rule(probe: &Probe) -> Option<Classification> {
    let head = if probe.is_builtin(BuiltinClass::LinkedList) {
        builtin_field(probe, "head")
    } else {
        resolve_container(probe, "head", is_node_like)?
    };
    let nodes = capture_chain(probe.heap, head);
    Some(Classification::chain(StructuralKind::LinkedList, nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(heap: &mut Heap, class: &str, fields: Vec<(&str, Value)>, methods: &[&str]) -> Value {
        Value::Ref(heap.alloc(Object::Instance(Instance {
            class: ClassRef::User(class.to_string()),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
        })))
    }

    #[test]
    fn test_primitives_are_not_classified() {
        let heap = Heap::new();
        assert!(classify(&heap, &Value::Int(3)).is_none());
        assert!(classify(&heap, &Value::Function("len".into())).is_none());
    }

    #[test]
    fn test_duck_typed_stack_reads_private_items() {
        let mut heap = Heap::new();
        let items = heap.alloc_list(vec![Value::Int(1), Value::Int(2)]);
        let stack = user(&mut heap, "MyStack", vec![("_items", items)], &["push", "pop", "peek"]);
        let result = classify(&heap, &stack).unwrap();
        assert_eq!(result.kind, StructuralKind::Stack);
        assert_eq!(result.summary, "size=2");
    }

    #[test]
    fn test_heap_probe_wins_over_stack_probe() {
        let mut heap = Heap::new();
        let items = heap.alloc_list(vec![Value::Int(1)]);
        let both = user(
            &mut heap,
            "Weird",
            vec![("heap", items)],
            &["insert", "pop_min", "peek", "push", "pop"],
        );
        assert_eq!(classify(&heap, &both).unwrap().kind, StructuralKind::MinHeap);
    }

    #[test]
    fn test_doubly_checked_before_singly() {
        let mut heap = Heap::new();
        let node = user(
            &mut heap,
            "Node",
            vec![("data", Value::Int(1)), ("next", Value::None), ("prev", Value::None)],
            &[],
        );
        let result = classify(&heap, &node).unwrap();
        assert_eq!(result.kind, StructuralKind::DoublyLinkedList);
        assert_eq!(result.summary, "len=1");
    }

    #[test]
    fn test_user_graph_with_adj_dict() {
        let mut heap = Heap::new();
        let neighbors = heap.alloc_list(vec![Value::str("B")]);
        let adj = heap.alloc_dict(vec![(Value::str("A"), neighbors), (Value::str("B"), Value::None)]);
        let graph = user(&mut heap, "G", vec![("adj", adj), ("directed", Value::Bool(true))], &[]);
        let result = classify(&heap, &graph).unwrap();
        assert_eq!(result.kind, StructuralKind::DirectedGraph);
        assert_eq!(
            result.payload,
            Payload::Adjacency(vec![
                (Value::str("A"), vec![Value::str("B")]),
                (Value::str("B"), vec![]),
            ])
        );
    }

    #[test]
    fn test_unmatched_object_is_unrendered() {
        let mut heap = Heap::new();
        let point = user(&mut heap, "Point", vec![("x", Value::Int(1))], &[]);
        let result = classify(&heap, &point).unwrap();
        assert_eq!(result.kind, StructuralKind::Object);
        assert_eq!(result.summary, "unrendered");
        assert_eq!(result.payload, Payload::Absent);
    }

    #[test]
    fn test_builtin_linked_list_stays_singly() {
        let mut heap = Heap::new();
        let id = structures::construct(&mut heap, BuiltinClass::LinkedList, vec![], false).unwrap();
        let result = classify(&heap, &Value::Ref(id)).unwrap();
        assert_eq!(result.kind, StructuralKind::LinkedList);
        assert_eq!(result.summary, "len=0");
    }
}
