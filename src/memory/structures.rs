//! Builtin data structures
//!
//! Each builtin is an [`Instance`] tagged with a [`BuiltinClass`]. Their
//! internal state lives in ordinary fields so that the structural
//! classifier sees them exactly as it would see a user-written equivalent:
//!
//! | class              | fields                          |
//! |--------------------|---------------------------------|
//! | `LinkedList`       | `head`, `tail`, `_length`       |
//! | `DoublyLinkedList` | `head`, `tail`, `_length`       |
//! | `Stack` / `Queue`  | `_items` (list)                 |
//! | `MinHeap`          | `_items` (list, heap ordered)   |
//! | `BinaryTree`       | `root`                          |
//! | `BinarySearchTree` | `root`                          |
//! | `Graph`            | `directed`, `_adjacency` (dict) |
//!
//! Node classes carry `data`/`next` (`prev`) for lists and
//! `value`/`left`/`right` for trees.

use super::heap::Heap;
use super::object::{BuiltinClass, ClassRef, Instance, Object};
use super::value::{ObjId, Value};
use crate::errors::ExecError;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Construct a builtin, inserting `initial` values in order
pub fn construct(
    heap: &mut Heap,
    class: BuiltinClass,
    initial: Vec<Value>,
    directed: bool,
) -> Result<ObjId, ExecError> {
    let fields = match class {
        BuiltinClass::LinkedList | BuiltinClass::DoublyLinkedList => vec![
            ("head", Value::None),
            ("tail", Value::None),
            ("_length", Value::Int(0)),
        ],
        BuiltinClass::Stack | BuiltinClass::Queue | BuiltinClass::MinHeap => {
            vec![("_items", heap.alloc_list(Vec::new()))]
        }
        BuiltinClass::BinaryTree | BuiltinClass::BinarySearchTree => vec![("root", Value::None)],
        BuiltinClass::Graph => vec![
            ("directed", Value::Bool(directed)),
            ("_adjacency", heap.alloc_dict(Vec::new())),
        ],
        BuiltinClass::LinkedListNode
        | BuiltinClass::DoublyLinkedListNode
        | BuiltinClass::BinaryTreeNode
        | BuiltinClass::BstNode => {
            return Err(ExecError::type_error(format!(
                "{} cannot be constructed directly",
                class.name()
            )))
        }
    };
    let id = heap.alloc(Object::Instance(Instance::builtin(class, fields)));

    let insert = match class {
        BuiltinClass::LinkedList | BuiltinClass::DoublyLinkedList => "append",
        BuiltinClass::Stack => "push",
        BuiltinClass::Queue => "enqueue",
        BuiltinClass::Graph => "add_node",
        _ => "insert",
    };
    for value in initial {
        call_method(heap, id, class, insert, vec![value])?;
    }
    Ok(id)
}

/// Dispatch a method call on a builtin instance
pub fn call_method(
    heap: &mut Heap,
    id: ObjId,
    class: BuiltinClass,
    method: &str,
    args: Vec<Value>,
) -> Result<Value, ExecError> {
    match (class, method) {
        (BuiltinClass::LinkedList, "append") => {
            let [value] = take_args(method, args)?;
            linked_list_append(heap, id, value)
        }
        (BuiltinClass::DoublyLinkedList, "append") => {
            let [value] = take_args(method, args)?;
            doubly_linked_list_append(heap, id, value)
        }
        (BuiltinClass::DoublyLinkedList, "delete") => {
            let [value] = take_args(method, args)?;
            doubly_linked_list_delete(heap, id, &value).map(Value::Bool)
        }
        (BuiltinClass::Stack, "push") | (BuiltinClass::Queue, "enqueue") => {
            let [value] = take_args(method, args)?;
            items_mut(heap, id)?.push(value);
            Ok(Value::None)
        }
        (BuiltinClass::Stack, "pop") => {
            let [] = take_args(method, args)?;
            Ok(items_mut(heap, id)?.pop().unwrap_or_default())
        }
        (BuiltinClass::Stack, "peek") => {
            let [] = take_args(method, args)?;
            Ok(items_ref(heap, id)?.last().cloned().unwrap_or_default())
        }
        (BuiltinClass::Queue, "dequeue") => {
            let [] = take_args(method, args)?;
            let items = items_mut(heap, id)?;
            Ok(if items.is_empty() {
                Value::None
            } else {
                items.remove(0)
            })
        }
        (BuiltinClass::Queue, "peek") | (BuiltinClass::MinHeap, "peek") => {
            let [] = take_args(method, args)?;
            Ok(items_ref(heap, id)?.first().cloned().unwrap_or_default())
        }
        (BuiltinClass::Stack | BuiltinClass::Queue | BuiltinClass::MinHeap, "items") => {
            let [] = take_args(method, args)?;
            let copy = items_ref(heap, id)?.clone();
            Ok(heap.alloc_list(copy))
        }
        (BuiltinClass::MinHeap, "insert") => {
            let [value] = take_args(method, args)?;
            min_heap_insert(items_mut(heap, id)?, value);
            Ok(Value::None)
        }
        (BuiltinClass::MinHeap, "pop_min") => {
            let [] = take_args(method, args)?;
            Ok(min_heap_pop(items_mut(heap, id)?))
        }
        (BuiltinClass::BinaryTree, "insert") => {
            let [value] = take_args(method, args)?;
            binary_tree_insert(heap, id, value)
        }
        (BuiltinClass::BinaryTree, "search") => {
            let [value] = take_args(method, args)?;
            Ok(binary_tree_search(heap, id, &value))
        }
        (BuiltinClass::BinaryTree, "delete") => {
            let [value] = take_args(method, args)?;
            binary_tree_delete(heap, id, &value).map(Value::Bool)
        }
        (BuiltinClass::BinarySearchTree, "insert") => {
            let [value] = take_args(method, args)?;
            bst_insert(heap, id, value)
        }
        (BuiltinClass::BinarySearchTree, "search") => {
            let [value] = take_args(method, args)?;
            Ok(bst_search(heap, id, &value))
        }
        (BuiltinClass::BinarySearchTree, "delete") => {
            let [value] = take_args(method, args)?;
            bst_delete(heap, id, &value).map(Value::Bool)
        }
        (BuiltinClass::Graph, "add_node") => {
            let [node] = take_args(method, args)?;
            graph_add_node(heap, id, node)?;
            Ok(Value::None)
        }
        (BuiltinClass::Graph, "add_edge") => {
            let [source, target] = take_args(method, args)?;
            graph_add_edge(heap, id, source, target)?;
            Ok(Value::None)
        }
        (BuiltinClass::Graph, "adjacency") => {
            let [] = take_args(method, args)?;
            let adjacency = adjacency(heap, id).unwrap_or_default();
            let entries = adjacency
                .into_iter()
                .map(|(node, neighbors)| (node, heap.alloc_list(neighbors)))
                .collect();
            Ok(heap.alloc_dict(entries))
        }
        _ => Err(ExecError::NoAttribute {
            type_name: class.name().to_string(),
            attribute: method.to_string(),
        }),
    }
}

/// `len()` of a builtin, when it defines one
pub fn length(heap: &Heap, id: ObjId) -> Option<usize> {
    let instance = heap.instance(id)?;
    match instance.class {
        ClassRef::Builtin(
            BuiltinClass::LinkedList | BuiltinClass::DoublyLinkedList,
        ) => instance
            .field("_length")
            .and_then(Value::as_int)
            .map(|n| n.max(0) as usize),
        ClassRef::Builtin(
            BuiltinClass::Stack | BuiltinClass::Queue | BuiltinClass::MinHeap,
        ) => heap.list_field(id, "_items").map(Vec::len),
        _ => None,
    }
}

/// Items of a builtin Stack, Queue or MinHeap (the `items()` accessor)
pub fn items(heap: &Heap, id: ObjId) -> Option<Vec<Value>> {
    let instance = heap.instance(id)?;
    if !matches!(instance.class, ClassRef::Builtin(_)) || !instance.has_method("items") {
        return None;
    }
    heap.list_field(id, "_items").cloned()
}

/// Adjacency of a builtin Graph (the `adjacency()` accessor)
pub fn adjacency(heap: &Heap, id: ObjId) -> Option<Vec<(Value, Vec<Value>)>> {
    let instance = heap.instance(id)?;
    if !instance.class.is_builtin(BuiltinClass::Graph) {
        return None;
    }
    let dict_id = instance.field("_adjacency")?.as_obj()?;
    let entries = heap.dict(dict_id)?;
    Some(
        entries
            .iter()
            .map(|(node, neighbors)| {
                let list = neighbors
                    .as_obj()
                    .and_then(|list_id| heap.list(list_id))
                    .cloned()
                    .unwrap_or_default();
                (node.clone(), list)
            })
            .collect(),
    )
}

// ===== Argument helpers =====

fn take_args<const N: usize>(method: &str, args: Vec<Value>) -> Result<[Value; N], ExecError> {
    let got = args.len();
    args.try_into().map_err(|_| ExecError::ArgumentCount {
        function: method.to_string(),
        expected: N,
        got,
    })
}

fn items_list_id(heap: &Heap, id: ObjId) -> Result<ObjId, ExecError> {
    heap.instance(id)
        .and_then(|instance| instance.field("_items"))
        .and_then(Value::as_obj)
        .ok_or(ExecError::InvalidReference(id))
}

fn items_ref(heap: &Heap, id: ObjId) -> Result<&Vec<Value>, ExecError> {
    let list_id = items_list_id(heap, id)?;
    heap.list(list_id).ok_or(ExecError::InvalidReference(list_id))
}

fn items_mut(heap: &mut Heap, id: ObjId) -> Result<&mut Vec<Value>, ExecError> {
    let list_id = items_list_id(heap, id)?;
    heap.list_mut(list_id)
        .ok_or(ExecError::InvalidReference(list_id))
}

fn get_field(heap: &Heap, id: ObjId, name: &str) -> Value {
    heap.instance(id)
        .and_then(|instance| instance.field(name))
        .cloned()
        .unwrap_or_default()
}

fn set_field(heap: &mut Heap, id: ObjId, name: &str, value: Value) -> Result<(), ExecError> {
    heap.instance_mut(id)
        .ok_or(ExecError::InvalidReference(id))?
        .set_field(name, value);
    Ok(())
}

fn new_node(heap: &mut Heap, class: BuiltinClass, fields: Vec<(&str, Value)>) -> ObjId {
    heap.alloc(Object::Instance(Instance::builtin(class, fields)))
}

fn bump_length(heap: &mut Heap, id: ObjId, delta: i64) -> Result<(), ExecError> {
    let length = get_field(heap, id, "_length").as_int().unwrap_or(0);
    set_field(heap, id, "_length", Value::Int(length + delta))
}

// ===== Linked lists =====

fn linked_list_append(heap: &mut Heap, id: ObjId, value: Value) -> Result<Value, ExecError> {
    let node = new_node(
        heap,
        BuiltinClass::LinkedListNode,
        vec![("data", value), ("next", Value::None)],
    );
    match get_field(heap, id, "tail").as_obj() {
        Some(tail) => set_field(heap, tail, "next", Value::Ref(node))?,
        None => set_field(heap, id, "head", Value::Ref(node))?,
    }
    set_field(heap, id, "tail", Value::Ref(node))?;
    bump_length(heap, id, 1)?;
    Ok(Value::Ref(node))
}

fn doubly_linked_list_append(
    heap: &mut Heap,
    id: ObjId,
    value: Value,
) -> Result<Value, ExecError> {
    let tail = get_field(heap, id, "tail");
    let node = new_node(
        heap,
        BuiltinClass::DoublyLinkedListNode,
        vec![("data", value), ("prev", tail.clone()), ("next", Value::None)],
    );
    match tail.as_obj() {
        Some(tail) => set_field(heap, tail, "next", Value::Ref(node))?,
        None => set_field(heap, id, "head", Value::Ref(node))?,
    }
    set_field(heap, id, "tail", Value::Ref(node))?;
    bump_length(heap, id, 1)?;
    Ok(Value::Ref(node))
}

fn doubly_linked_list_delete(heap: &mut Heap, id: ObjId, value: &Value) -> Result<bool, ExecError> {
    let mut seen = FxHashSet::default();
    let mut current = get_field(heap, id, "head").as_obj();
    while let Some(node) = current {
        if !seen.insert(node) {
            break;
        }
        let next = get_field(heap, node, "next");
        if get_field(heap, node, "data").equals(value) {
            let prev = get_field(heap, node, "prev");
            match prev.as_obj() {
                Some(prev_id) => set_field(heap, prev_id, "next", next.clone())?,
                None => set_field(heap, id, "head", next.clone())?,
            }
            match next.as_obj() {
                Some(next_id) => set_field(heap, next_id, "prev", prev)?,
                None => set_field(heap, id, "tail", prev)?,
            }
            bump_length(heap, id, -1)?;
            return Ok(true);
        }
        current = next.as_obj();
    }
    Ok(false)
}

// ===== Min heap =====

fn min_heap_insert(items: &mut Vec<Value>, value: Value) {
    items.push(value);
    let mut index = items.len() - 1;
    while index > 0 {
        let parent = (index - 1) / 2;
        if items[index].less_than(&items[parent]) {
            items.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

fn min_heap_pop(items: &mut Vec<Value>) -> Value {
    if items.len() <= 1 {
        return items.pop().unwrap_or_default();
    }
    let root = items.swap_remove(0);
    let size = items.len();
    let mut index = 0;
    loop {
        let left = index * 2 + 1;
        let right = left + 1;
        let mut smallest = index;
        if left < size && items[left].less_than(&items[smallest]) {
            smallest = left;
        }
        if right < size && items[right].less_than(&items[smallest]) {
            smallest = right;
        }
        if smallest == index {
            break;
        }
        items.swap(index, smallest);
        index = smallest;
    }
    root
}

// ===== Binary trees =====

fn tree_node(heap: &mut Heap, class: BuiltinClass, value: Value) -> ObjId {
    new_node(
        heap,
        class,
        vec![("value", value), ("left", Value::None), ("right", Value::None)],
    )
}

fn binary_tree_insert(heap: &mut Heap, id: ObjId, value: Value) -> Result<Value, ExecError> {
    let node = tree_node(heap, BuiltinClass::BinaryTreeNode, value);
    let root = match get_field(heap, id, "root").as_obj() {
        Some(root) => root,
        None => {
            set_field(heap, id, "root", Value::Ref(node))?;
            return Ok(Value::Ref(node));
        }
    };
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        if !seen.insert(current) {
            continue;
        }
        for side in ["left", "right"] {
            match get_field(heap, current, side).as_obj() {
                Some(child) => queue.push_back(child),
                None => {
                    set_field(heap, current, side, Value::Ref(node))?;
                    return Ok(Value::Ref(node));
                }
            }
        }
    }
    Ok(Value::Ref(node))
}

/// Level-order walk returning node ids (cycle safe)
fn level_order(heap: &Heap, root: Option<ObjId>) -> Vec<ObjId> {
    let mut order = Vec::new();
    let mut seen = FxHashSet::default();
    let mut queue: VecDeque<ObjId> = root.into_iter().collect();
    while let Some(current) = queue.pop_front() {
        if !seen.insert(current) {
            continue;
        }
        order.push(current);
        for side in ["left", "right"] {
            if let Some(child) = get_field(heap, current, side).as_obj() {
                queue.push_back(child);
            }
        }
    }
    order
}

fn binary_tree_search(heap: &Heap, id: ObjId, value: &Value) -> Value {
    level_order(heap, get_field(heap, id, "root").as_obj())
        .into_iter()
        .find(|node| get_field(heap, *node, "value").equals(value))
        .map(Value::Ref)
        .unwrap_or_default()
}

fn binary_tree_delete(heap: &mut Heap, id: ObjId, value: &Value) -> Result<bool, ExecError> {
    let order = level_order(heap, get_field(heap, id, "root").as_obj());
    let Some(&last) = order.last() else {
        return Ok(false);
    };
    let Some(target) = order
        .iter()
        .copied()
        .find(|node| get_field(heap, *node, "value").equals(value))
    else {
        return Ok(false);
    };
    if order.len() == 1 {
        set_field(heap, id, "root", Value::None)?;
        return Ok(true);
    }
    let replacement = get_field(heap, last, "value");
    set_field(heap, target, "value", replacement)?;
    for &parent in &order {
        for side in ["left", "right"] {
            if get_field(heap, parent, side).as_obj() == Some(last) {
                set_field(heap, parent, side, Value::None)?;
                return Ok(true);
            }
        }
    }
    Ok(true)
}

fn bst_insert(heap: &mut Heap, id: ObjId, value: Value) -> Result<Value, ExecError> {
    let node = tree_node(heap, BuiltinClass::BstNode, value.clone());
    let mut current = match get_field(heap, id, "root").as_obj() {
        Some(root) => root,
        None => {
            set_field(heap, id, "root", Value::Ref(node))?;
            return Ok(Value::Ref(node));
        }
    };
    let mut seen = FxHashSet::default();
    while seen.insert(current) {
        let side = if value.less_than(&get_field(heap, current, "value")) {
            "left"
        } else {
            "right"
        };
        match get_field(heap, current, side).as_obj() {
            Some(child) => current = child,
            None => {
                set_field(heap, current, side, Value::Ref(node))?;
                break;
            }
        }
    }
    Ok(Value::Ref(node))
}

fn bst_search(heap: &Heap, id: ObjId, value: &Value) -> Value {
    let mut seen = FxHashSet::default();
    let mut current = get_field(heap, id, "root").as_obj();
    while let Some(node) = current {
        if !seen.insert(node) {
            break;
        }
        let node_value = get_field(heap, node, "value");
        if value.equals(&node_value) {
            return Value::Ref(node);
        }
        let side = if value.less_than(&node_value) {
            "left"
        } else {
            "right"
        };
        current = get_field(heap, node, side).as_obj();
    }
    Value::None
}

fn bst_delete(heap: &mut Heap, id: ObjId, value: &Value) -> Result<bool, ExecError> {
    // Find the node and the slot (owner, field) that points at it
    let mut owner = (id, "root");
    let mut current = get_field(heap, id, "root").as_obj();
    let mut seen = FxHashSet::default();
    let target = loop {
        let Some(node) = current else {
            return Ok(false);
        };
        if !seen.insert(node) {
            return Ok(false);
        }
        let node_value = get_field(heap, node, "value");
        if value.equals(&node_value) {
            break node;
        }
        let side = if value.less_than(&node_value) {
            "left"
        } else {
            "right"
        };
        owner = (node, side);
        current = get_field(heap, node, side).as_obj();
    };

    let left = get_field(heap, target, "left");
    let right = get_field(heap, target, "right");
    match (left.as_obj(), right.as_obj()) {
        (None, _) => set_field(heap, owner.0, owner.1, right)?,
        (_, None) => set_field(heap, owner.0, owner.1, left)?,
        (Some(_), Some(right_id)) => {
            let mut successor_parent = target;
            let mut successor = right_id;
            while let Some(next) = get_field(heap, successor, "left").as_obj() {
                if next == successor {
                    break;
                }
                successor_parent = successor;
                successor = next;
            }
            let successor_value = get_field(heap, successor, "value");
            set_field(heap, target, "value", successor_value)?;
            let successor_right = get_field(heap, successor, "right");
            let side = if successor_parent == target { "right" } else { "left" };
            set_field(heap, successor_parent, side, successor_right)?;
        }
    }
    Ok(true)
}

// ===== Graph =====

fn adjacency_dict(heap: &Heap, id: ObjId) -> Result<ObjId, ExecError> {
    heap.instance(id)
        .and_then(|instance| instance.field("_adjacency"))
        .and_then(Value::as_obj)
        .ok_or(ExecError::InvalidReference(id))
}

fn graph_add_node(heap: &mut Heap, id: ObjId, node: Value) -> Result<ObjId, ExecError> {
    let dict_id = adjacency_dict(heap, id)?;
    let existing = heap
        .dict(dict_id)
        .ok_or(ExecError::InvalidReference(dict_id))?
        .iter()
        .find(|(key, _)| key.equals(&node))
        .and_then(|(_, neighbors)| neighbors.as_obj());
    if let Some(list_id) = existing {
        return Ok(list_id);
    }
    let neighbors = heap.alloc_list(Vec::new());
    let list_id = neighbors.as_obj().ok_or(ExecError::InvalidReference(dict_id))?;
    heap.dict_mut(dict_id)
        .ok_or(ExecError::InvalidReference(dict_id))?
        .push((node, neighbors));
    Ok(list_id)
}

fn graph_add_edge(
    heap: &mut Heap,
    id: ObjId,
    source: Value,
    target: Value,
) -> Result<(), ExecError> {
    let directed = get_field(heap, id, "directed").is_truthy();
    let source_list = graph_add_node(heap, id, source.clone())?;
    let target_list = graph_add_node(heap, id, target.clone())?;
    heap.list_mut(source_list)
        .ok_or(ExecError::InvalidReference(source_list))?
        .push(target);
    if !directed {
        heap.list_mut(target_list)
            .ok_or(ExecError::InvalidReference(target_list))?
            .push(source);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(heap: &Heap, list: &Value) -> Vec<Value> {
        heap.list(list.as_obj().unwrap()).unwrap().clone()
    }

    #[test]
    fn test_min_heap_orders_items() {
        let mut heap = Heap::new();
        let id = construct(
            &mut heap,
            BuiltinClass::MinHeap,
            vec![Value::Int(5), Value::Int(3), Value::Int(8), Value::Int(1)],
            false,
        )
        .unwrap();
        assert_eq!(items(&heap, id).unwrap()[0], Value::Int(1));
        let popped = call_method(&mut heap, id, BuiltinClass::MinHeap, "pop_min", vec![]).unwrap();
        assert_eq!(popped, Value::Int(1));
        assert_eq!(items(&heap, id).unwrap()[0], Value::Int(3));
    }

    #[test]
    fn test_binary_tree_level_order_insert() {
        let mut heap = Heap::new();
        let id = construct(
            &mut heap,
            BuiltinClass::BinaryTree,
            vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)],
            false,
        )
        .unwrap();
        let root = get_field(&heap, id, "root").as_obj().unwrap();
        let left = get_field(&heap, root, "left").as_obj().unwrap();
        assert_eq!(get_field(&heap, left, "value"), Value::Int(2));
        let left_left = get_field(&heap, left, "left").as_obj().unwrap();
        assert_eq!(get_field(&heap, left_left, "value"), Value::Int(4));
    }

    #[test]
    fn test_bst_delete_with_two_children() {
        let mut heap = Heap::new();
        let initial = [8, 3, 10, 1, 6].map(Value::Int).to_vec();
        let id = construct(&mut heap, BuiltinClass::BinarySearchTree, initial, false).unwrap();
        assert!(bst_delete(&mut heap, id, &Value::Int(3)).unwrap());
        let root = get_field(&heap, id, "root").as_obj().unwrap();
        let left = get_field(&heap, root, "left").as_obj().unwrap();
        assert_eq!(get_field(&heap, left, "value"), Value::Int(6));
        assert!(bst_search(&heap, id, &Value::Int(3)).is_none());
        assert!(!bst_delete(&mut heap, id, &Value::Int(42)).unwrap());
    }

    #[test]
    fn test_doubly_linked_list_delete_relinks() {
        let mut heap = Heap::new();
        let initial = ["A", "B", "C"].map(Value::from).to_vec();
        let id = construct(&mut heap, BuiltinClass::DoublyLinkedList, initial, false).unwrap();
        assert!(doubly_linked_list_delete(&mut heap, id, &Value::from("B")).unwrap());
        let head = get_field(&heap, id, "head").as_obj().unwrap();
        let next = get_field(&heap, head, "next").as_obj().unwrap();
        assert_eq!(get_field(&heap, next, "data"), Value::from("C"));
        assert_eq!(get_field(&heap, next, "prev"), Value::Ref(head));
        assert_eq!(length(&heap, id), Some(2));
    }

    #[test]
    fn test_undirected_graph_adds_both_directions() {
        let mut heap = Heap::new();
        let id = construct(&mut heap, BuiltinClass::Graph, vec![], false).unwrap();
        graph_add_edge(&mut heap, id, Value::from("A"), Value::from("B")).unwrap();
        let adjacency = adjacency(&heap, id).unwrap();
        assert_eq!(adjacency.len(), 2);
        assert_eq!(adjacency[1].1, vec![Value::from("A")]);

        let copy = call_method(&mut heap, id, BuiltinClass::Graph, "adjacency", vec![]).unwrap();
        let entries = heap.dict(copy.as_obj().unwrap()).unwrap().clone();
        assert_eq!(values(&heap, &entries[0].1), vec![Value::from("B")]);
    }
}
