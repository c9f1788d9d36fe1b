//! Heap object shapes
//!
//! Every heap allocation is an [`Object`]: a flat list, an insertion-ordered
//! dictionary, or a class [`Instance`] with named fields. Builtin data
//! structures are ordinary instances tagged with a [`BuiltinClass`], so the
//! structural classifier can probe them exactly the way it probes
//! user-defined classes.

use super::value::Value;

/// Builtin classes known to the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinClass {
    LinkedList,
    LinkedListNode,
    DoublyLinkedList,
    DoublyLinkedListNode,
    Stack,
    Queue,
    BinaryTree,
    BinaryTreeNode,
    BinarySearchTree,
    BstNode,
    MinHeap,
    Graph,
}

impl BuiltinClass {
    /// Classes that scripts can construct by name
    pub const CONSTRUCTIBLE: [BuiltinClass; 8] = [
        BuiltinClass::LinkedList,
        BuiltinClass::DoublyLinkedList,
        BuiltinClass::Stack,
        BuiltinClass::Queue,
        BuiltinClass::BinaryTree,
        BuiltinClass::BinarySearchTree,
        BuiltinClass::MinHeap,
        BuiltinClass::Graph,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinClass::LinkedList => "LinkedList",
            BuiltinClass::LinkedListNode => "LinkedListNode",
            BuiltinClass::DoublyLinkedList => "DoublyLinkedList",
            BuiltinClass::DoublyLinkedListNode => "DoublyLinkedListNode",
            BuiltinClass::Stack => "Stack",
            BuiltinClass::Queue => "Queue",
            BuiltinClass::BinaryTree => "BinaryTree",
            BuiltinClass::BinaryTreeNode => "BinaryTreeNode",
            BuiltinClass::BinarySearchTree => "BinarySearchTree",
            BuiltinClass::BstNode => "BSTNode",
            BuiltinClass::MinHeap => "MinHeap",
            BuiltinClass::Graph => "Graph",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::CONSTRUCTIBLE.into_iter().find(|class| class.name() == name)
    }

    /// Callable members exposed by instances of this class
    pub fn methods(self) -> &'static [&'static str] {
        match self {
            BuiltinClass::LinkedList => &["append"],
            BuiltinClass::DoublyLinkedList => &["append", "delete"],
            BuiltinClass::Stack => &["push", "pop", "peek", "items"],
            BuiltinClass::Queue => &["enqueue", "dequeue", "peek", "items"],
            BuiltinClass::MinHeap => &["insert", "pop_min", "peek", "items"],
            BuiltinClass::BinaryTree | BuiltinClass::BinarySearchTree => {
                &["insert", "search", "delete"]
            }
            BuiltinClass::Graph => &["add_node", "add_edge", "adjacency"],
            BuiltinClass::LinkedListNode
            | BuiltinClass::DoublyLinkedListNode
            | BuiltinClass::BinaryTreeNode
            | BuiltinClass::BstNode => &[],
        }
    }
}

/// The class an instance belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassRef {
    Builtin(BuiltinClass),
    User(String),
}

impl ClassRef {
    pub fn name(&self) -> &str {
        match self {
            ClassRef::Builtin(class) => class.name(),
            ClassRef::User(name) => name,
        }
    }

    pub fn is_builtin(&self, class: BuiltinClass) -> bool {
        matches!(self, ClassRef::Builtin(c) if *c == class)
    }
}

/// A class instance with ordered, named fields
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub class: ClassRef,
    pub fields: Vec<(String, Value)>,
    /// Declared method names (user classes only; builtins use their class table)
    pub methods: Vec<String>,
}

impl Instance {
    pub fn builtin(class: BuiltinClass, fields: Vec<(&str, Value)>) -> Self {
        Instance {
            class: ClassRef::Builtin(class),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            methods: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Set a field, appending it when it does not exist yet
    pub fn set_field(&mut self, name: &str, value: Value) {
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn has_method(&self, name: &str) -> bool {
        match &self.class {
            ClassRef::Builtin(class) => class.methods().contains(&name),
            ClassRef::User(_) => self.methods.iter().any(|method| method == name),
        }
    }
}

/// Heap object variants
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    List(Vec<Value>),
    Dict(Vec<(Value, Value)>), // Insertion ordered
    Instance(Instance),
}

impl Object {
    /// Runtime type name (`list`, `dict`, or the class name)
    pub fn type_name(&self) -> &str {
        match self {
            Object::List(_) => "list",
            Object::Dict(_) => "dict",
            Object::Instance(instance) => instance.class.name(),
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Object::Instance(instance) => Some(instance),
            _ => None,
        }
    }
}
