//! Mutable state a script executes against
//!
//! The [`Workspace`] owns the heap, the namespace of bound names, the user
//! classes declared so far, the cell output produced by `print`, and the
//! algorithm (if any) that the last execution started.

use crate::algorithms::registry::{EXAMPLE_ARRAYS, EXAMPLE_TREES};
use crate::algorithms::PendingAlgorithm;
use crate::memory::{BuiltinClass, Heap, Value};
use rustc_hash::FxHashMap;

/// Functions injected into every namespace
pub const BUILTIN_FUNCTIONS: [&str; 6] = [
    "len",
    "print",
    "search",
    "tree_search",
    "tree_traverse",
    "algo_help",
];

/// A class declared with `class Name(fields): methods`
#[derive(Debug, Clone, PartialEq)]
pub struct UserClass {
    pub name: String,
    /// Field names with their evaluated defaults
    pub fields: Vec<(String, Option<Value>)>,
    pub methods: Vec<String>,
}

/// Names bound in the workspace, in first-binding order
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    entries: Vec<(String, Value)>,
}

impl Namespace {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    /// Bind `name`, keeping its original position when rebinding
    pub fn set(&mut self, name: &str, value: Value) {
        match self.entries.iter_mut().find(|(bound, _)| bound == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(bound, _)| bound == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug)]
pub struct Workspace {
    pub heap: Heap,
    pub namespace: Namespace,
    pub classes: FxHashMap<String, UserClass>,
    pending: Option<PendingAlgorithm>,
    output: Vec<String>,
}

impl Workspace {
    /// A workspace with the builtin functions, classes and `EXAMPLES` bound
    pub fn new() -> Self {
        let mut workspace = Workspace {
            heap: Heap::new(),
            namespace: Namespace::default(),
            classes: FxHashMap::default(),
            pending: None,
            output: Vec::new(),
        };
        for name in BUILTIN_FUNCTIONS {
            workspace
                .namespace
                .set(name, Value::Function(name.to_string()));
        }
        for class in BuiltinClass::CONSTRUCTIBLE {
            workspace
                .namespace
                .set(class.name(), Value::Class(class.name().to_string()));
        }
        let examples = workspace.example_datasets();
        workspace.namespace.set("EXAMPLES", examples);
        workspace
    }

    fn example_datasets(&mut self) -> Value {
        let mut dataset = |table: &[(&str, &[i64])]| {
            let entries = table
                .iter()
                .map(|(name, values)| {
                    let items = values.iter().copied().map(Value::Int).collect();
                    (Value::str(*name), self.heap.alloc_list(items))
                })
                .collect();
            self.heap.alloc_dict(entries)
        };
        let arrays = dataset(&EXAMPLE_ARRAYS);
        let trees = dataset(&EXAMPLE_TREES);
        self.heap.alloc_dict(vec![
            (Value::str("arrays"), arrays),
            (Value::str("trees"), trees),
        ])
    }

    pub fn pending(&self) -> Option<&PendingAlgorithm> {
        self.pending.as_ref()
    }

    pub fn set_pending(&mut self, pending: PendingAlgorithm) {
        self.pending = Some(pending);
    }

    /// Hand the started algorithm over to the presentation layer
    pub fn take_pending(&mut self) -> Option<PendingAlgorithm> {
        self.pending.take()
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Append a line of cell output
    pub fn print(&mut self, line: String) {
        self.output.push(line);
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
