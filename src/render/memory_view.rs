//! Memory view
//!
//! Turns a [`Snapshot`] into display blocks: one per primitive name, then
//! one per object handle. Names aliasing the same object share a block whose
//! header joins them:
//!
//! ```text
//! a ──┐
//! b ──┘
//! ▶ Array
//! ```

use super::{
    render_array, render_binary_search_tree, render_binary_tree, render_doubly_linked_list,
    render_graph, render_hashmap, render_linked_list, render_min_heap, render_primitive,
    render_queue, render_stack,
};
use crate::memory::Value;
use crate::snapshot::{Binding, Handle, ObjectRecord, Payload, Snapshot, StructuralKind};

/// One displayable block of the memory view
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryBlock {
    pub id: String,
    pub header: String,
    pub summary: String,
    pub content: String,
}

pub fn memory_blocks(snapshot: &Snapshot) -> Vec<MemoryBlock> {
    let mut blocks = Vec::new();
    let mut aliases: Vec<(Handle, Vec<&str>)> = Vec::new();

    for (name, binding) in &snapshot.names {
        match binding {
            Binding::Primitive(value) => blocks.push(primitive_block(name, value)),
            Binding::Object(handle) => match aliases.iter_mut().find(|(h, _)| h == handle) {
                Some((_, names)) => names.push(name.as_str()),
                None => aliases.push((*handle, vec![name.as_str()])),
            },
        }
    }

    for (handle, mut names) in aliases {
        let Some(record) = snapshot.objects.get(&handle) else {
            continue;
        };
        names.sort_unstable();
        blocks.push(MemoryBlock {
            id: handle.to_string(),
            header: names_header(&names, record.kind).join("\n"),
            summary: record.summary.clone(),
            content: object_content(record),
        });
    }
    blocks
}

/// Every block as header followed by content, blank-line separated
pub fn render_memory(snapshot: &Snapshot) -> String {
    memory_blocks(snapshot)
        .iter()
        .map(|block| format!("{}\n{}", block.header, block.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn primitive_block(name: &str, value: &Value) -> MemoryBlock {
    let type_name = match value {
        Value::None => "None",
        other => other.type_name(),
    };
    MemoryBlock {
        id: format!("var_{}", name),
        header: format!("{} ──▶ {}", name, type_name),
        summary: value.repr(),
        content: render_primitive(name, value),
    }
}

fn names_header(names: &[&str], kind: StructuralKind) -> Vec<String> {
    if let [only] = names {
        return vec![format!("{} ──▶ {}", only, kind)];
    }
    let last = names.len().saturating_sub(1);
    let mut lines: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let joint = match index {
                0 => "┐",
                i if i == last => "┘",
                _ => "┤",
            };
            format!("{} ──{}", name, joint)
        })
        .collect();
    lines.push(format!("▶ {}", kind));
    lines
}

/// Diagram for a record; kinds without a diagram show their summary
pub fn object_content(record: &ObjectRecord) -> String {
    use StructuralKind as K;
    match (record.kind, &record.payload) {
        (K::Array, Payload::Sequence(items)) => render_array(items, None),
        (K::HashTable, Payload::Mapping(entries)) => render_hashmap(entries),
        (K::DoublyLinkedList, Payload::Chain(nodes)) => render_doubly_linked_list(nodes),
        (K::LinkedList, Payload::Chain(nodes)) => render_linked_list(nodes),
        (K::Stack, Payload::Sequence(items)) => render_stack(items),
        (K::Queue, Payload::Sequence(items)) => render_queue(items),
        (K::BinarySearchTree, Payload::Tree(tree)) => render_binary_search_tree(tree),
        (K::BinaryTree, Payload::Tree(tree)) => render_binary_tree(tree, None),
        (K::MinHeap, Payload::Sequence(items)) => render_min_heap(items),
        (K::UndirectedGraph, Payload::Adjacency(adjacency)) => render_graph(adjacency, false),
        (K::DirectedGraph, Payload::Adjacency(adjacency)) => render_graph(adjacency, true),
        _ => format!("{} {}", record.kind, record.summary).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(handle: u64, kind: StructuralKind, payload: Payload, summary: &str) -> ObjectRecord {
        ObjectRecord {
            handle: Handle(handle),
            address: "0x10000000".into(),
            runtime_type_name: "list".into(),
            kind,
            summary: summary.into(),
            payload,
        }
    }

    #[test]
    fn test_aliases_share_block() {
        let mut snapshot = Snapshot::default();
        snapshot.names.push(("b".into(), Binding::Object(Handle(1))));
        snapshot.names.push(("x".into(), Binding::Primitive(Value::Int(3))));
        snapshot.names.push(("a".into(), Binding::Object(Handle(1))));
        snapshot.names.push(("c".into(), Binding::Object(Handle(1))));
        snapshot.objects.insert(
            Handle(1),
            record(1, StructuralKind::Array, Payload::Sequence(vec![]), "len=0"),
        );

        let blocks = memory_blocks(&snapshot);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header, "x ──▶ int");
        assert_eq!(blocks[1].header, "a ──┐\nb ──┤\nc ──┘\n▶ Array");
        assert_eq!(blocks[1].content, "(empty)");
    }

    #[test]
    fn test_unrendered_object_shows_summary() {
        let rec = record(2, StructuralKind::Object, Payload::Absent, "unrendered");
        assert_eq!(object_content(&rec), "Object unrendered");
    }
}
