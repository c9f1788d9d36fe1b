//! Workspace snapshots
//!
//! A [`Snapshot`] is what the workspace looked like after one execution:
//! every visible name bound either to a primitive value or to the [`Handle`]
//! of an object, plus one [`ObjectRecord`] per handle.
//!
//! - [`identity`]: stable handles keyed by object identity
//! - [`classify`]: structural kind detection and payload extraction
//! - [`nodes`]: cycle-safe copies of linked chains and trees
//!
//! [`diff`] reduces two successive snapshots to the names that changed, which
//! is what the cell history displays.

pub mod classify;
pub mod identity;
pub mod nodes;

pub use classify::{classify, Classification, Payload, StructuralKind};
pub use identity::{Handle, IdentityTracker};
pub use nodes::{ChainNode, TreeNode, TreeSnapshot};

use crate::memory::{Heap, Value};
use std::collections::BTreeMap;

/// Names injected into every workspace; never shown in snapshots
pub const BUILTIN_NAMES: [&str; 13] = [
    "EXAMPLES",
    "search",
    "tree_search",
    "tree_traverse",
    "algo_help",
    "LinkedList",
    "DoublyLinkedList",
    "Stack",
    "Queue",
    "BinaryTree",
    "BinarySearchTree",
    "MinHeap",
    "Graph",
];

/// What a name is bound to in a snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Primitive(Value),
    Object(Handle),
}

impl Binding {
    pub fn handle(&self) -> Option<Handle> {
        match self {
            Binding::Object(handle) => Some(*handle),
            Binding::Primitive(_) => None,
        }
    }

    /// Whether rebinding from `self` to `other` leaves the name unchanged
    ///
    /// Primitives compare with script equality, so `1` and `1.0` match. NaN
    /// matches NaN.
    pub fn same_as(&self, other: &Binding) -> bool {
        match (self, other) {
            (Binding::Object(a), Binding::Object(b)) => a == b,
            (Binding::Primitive(Value::Float(a)), Binding::Primitive(Value::Float(b)))
                if a.is_nan() && b.is_nan() =>
            {
                true
            }
            (Binding::Primitive(a), Binding::Primitive(b)) => a.equals(b),
            _ => false,
        }
    }
}

/// Classified view of one live object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRecord {
    pub handle: Handle,
    /// Raw identity for display only; equality goes through `handle`
    pub address: String,
    pub runtime_type_name: String,
    pub kind: StructuralKind,
    pub summary: String,
    pub payload: Payload,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Visible names in namespace order
    pub names: Vec<(String, Binding)>,
    pub objects: BTreeMap<Handle, ObjectRecord>,
}

impl Snapshot {
    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.names
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, binding)| binding)
    }

    /// Record for the object a name is bound to
    pub fn record_for(&self, name: &str) -> Option<&ObjectRecord> {
        let handle = self.binding(name)?.handle()?;
        self.objects.get(&handle)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Names that are new in `current` or bound differently than in `previous`
///
/// Records are copied forward only for the handles the kept names reference.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> Snapshot {
    let mut changed = Snapshot::default();
    for (name, binding) in &current.names {
        if previous.binding(name).is_some_and(|old| old.same_as(binding)) {
            continue;
        }
        changed.names.push((name.clone(), binding.clone()));
        if let Some(record) = binding.handle().and_then(|h| current.objects.get(&h)) {
            changed.objects.insert(record.handle, record.clone());
        }
    }
    changed
}

/// Turns namespaces into snapshots, owning the identity tracker
#[derive(Debug, Default)]
pub struct Snapshotter {
    tracker: IdentityTracker,
}

impl Snapshotter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker(&self) -> &IdentityTracker {
        &self.tracker
    }

    /// Capture the visible part of a namespace
    ///
    /// Skips dunder names, injected builtins and callables. Aliased names
    /// share one handle and one record.
    pub fn capture<'a>(
        &mut self,
        heap: &Heap,
        namespace: impl IntoIterator<Item = (&'a String, &'a Value)>,
    ) -> Snapshot {
        let mut snapshot = Snapshot::default();
        for (name, value) in namespace {
            if name.starts_with("__") || BUILTIN_NAMES.contains(&name.as_str()) {
                continue;
            }
            if value.is_primitive() {
                snapshot
                    .names
                    .push((name.clone(), Binding::Primitive(value.clone())));
                continue;
            }
            let Some(id) = value.as_obj() else {
                continue;
            };
            let handle = self.tracker.handle_for(id);
            snapshot.names.push((name.clone(), Binding::Object(handle)));
            if snapshot.objects.contains_key(&handle) {
                continue;
            }
            let Some(classification) = classify(heap, value) else {
                continue;
            };
            snapshot.objects.insert(
                handle,
                ObjectRecord {
                    handle,
                    address: id.to_string(),
                    runtime_type_name: heap.type_name(value),
                    kind: classification.kind,
                    summary: classification.summary,
                    payload: classification.payload,
                },
            );
        }
        // A dangling reference has no record; drop its name to keep handles resolvable
        let objects = &snapshot.objects;
        snapshot.names.retain(|(_, binding)| match binding {
            Binding::Object(handle) => objects.contains_key(handle),
            Binding::Primitive(_) => true,
        });
        log::debug!(
            "captured snapshot: {} names, {} objects",
            snapshot.names.len(),
            snapshot.objects.len()
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace(entries: &[(&str, Value)]) -> Vec<(String, Value)> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    fn capture(snapshotter: &mut Snapshotter, heap: &Heap, ns: &[(String, Value)]) -> Snapshot {
        snapshotter.capture(heap, ns.iter().map(|(n, v)| (n, v)))
    }

    #[test]
    fn test_aliases_share_handle() {
        let mut heap = Heap::new();
        let list = heap.alloc_list(vec![Value::Int(1)]);
        let ns = namespace(&[("a", list.clone()), ("b", list)]);
        let snap = capture(&mut Snapshotter::new(), &heap, &ns);
        assert_eq!(snap.binding("a"), snap.binding("b"));
        assert_eq!(snap.objects.len(), 1);
    }

    #[test]
    fn test_numerically_equal_rebinding_is_unchanged() {
        let heap = Heap::new();
        let mut snapshotter = Snapshotter::new();
        let before = namespace(&[
            ("n", Value::Int(1)),
            ("x", Value::Float(f64::NAN)),
            ("flag", Value::Bool(true)),
        ]);
        let after = namespace(&[
            ("n", Value::Float(1.0)),
            ("x", Value::Float(f64::NAN)),
            ("flag", Value::str("yes")),
        ]);
        let first = capture(&mut snapshotter, &heap, &before);
        let second = capture(&mut snapshotter, &heap, &after);
        let changed = diff(&first, &second);
        let names: Vec<&str> = changed.names.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["flag"]);
        assert!(diff(&second, &second).is_empty());
    }

    #[test]
    fn test_builtins_and_dunders_skipped() {
        let heap = Heap::new();
        let ns = namespace(&[
            ("__name__", Value::str("main")),
            ("search", Value::Function("search".into())),
            ("f", Value::Function("len".into())),
            ("x", Value::Int(5)),
        ]);
        let snap = capture(&mut Snapshotter::new(), &heap, &ns);
        assert_eq!(snap.names, vec![("x".to_string(), Binding::Primitive(Value::Int(5)))]);
    }

    #[test]
    fn test_diff_keeps_only_changes() {
        let mut heap = Heap::new();
        let mut snapshotter = Snapshotter::new();
        let list = heap.alloc_list(vec![]);
        let before = capture(
            &mut snapshotter,
            &heap,
            &namespace(&[("x", Value::Int(1)), ("arr", list.clone())]),
        );
        let after = capture(
            &mut snapshotter,
            &heap,
            &namespace(&[("x", Value::Int(2)), ("arr", list), ("y", Value::None)]),
        );
        let changed = diff(&before, &after);
        let names: Vec<&str> = changed.names.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert!(changed.objects.is_empty());
    }
}
