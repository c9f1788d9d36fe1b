//! Object heap for the workspace
//!
//! This module provides the arena that owns every container and instance
//! created by user code:
//! - Monotonic address allocation (addresses are never reused)
//! - Typed accessors for lists, dictionaries and instances
//! - Cycle-safe `repr` for displaying nested values
//!
//! Objects are never freed while a session runs. An `ObjId` therefore stays
//! a valid, unique identity for as long as the session exists, which is what
//! the identity tracker relies on.

use super::object::{Instance, Object};
use super::value::{Address, ObjId, Value};
use super::{HEAP_ADDRESS_START, OBJECT_ADDRESS_STEP};
use rustc_hash::{FxHashMap, FxHashSet};

/// The heap
#[derive(Debug, Clone)]
pub struct Heap {
    objects: FxHashMap<ObjId, Object>,
    next_address: Address,
}

impl Heap {
    pub fn new() -> Self {
        Heap {
            objects: FxHashMap::default(),
            next_address: HEAP_ADDRESS_START, // Start heap at high address
        }
    }

    /// Allocate a new object and return its identity
    pub fn alloc(&mut self, object: Object) -> ObjId {
        let id = ObjId(self.next_address);
        self.next_address += OBJECT_ADDRESS_STEP;
        self.objects.insert(id, object);
        id
    }

    /// Allocate a list and return a reference to it
    pub fn alloc_list(&mut self, items: Vec<Value>) -> Value {
        Value::Ref(self.alloc(Object::List(items)))
    }

    /// Allocate a dictionary and return a reference to it
    pub fn alloc_dict(&mut self, entries: Vec<(Value, Value)>) -> Value {
        Value::Ref(self.alloc(Object::Dict(entries)))
    }

    pub fn get(&self, id: ObjId) -> Option<&Object> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjId) -> Option<&mut Object> {
        self.objects.get_mut(&id)
    }

    /// Resolve a value to the object it references
    pub fn deref(&self, value: &Value) -> Option<&Object> {
        value.as_obj().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn instance(&self, id: ObjId) -> Option<&Instance> {
        self.get(id).and_then(Object::as_instance)
    }

    pub fn instance_mut(&mut self, id: ObjId) -> Option<&mut Instance> {
        match self.get_mut(id) {
            Some(Object::Instance(instance)) => Some(instance),
            _ => None,
        }
    }

    pub fn list(&self, id: ObjId) -> Option<&Vec<Value>> {
        match self.get(id) {
            Some(Object::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn list_mut(&mut self, id: ObjId) -> Option<&mut Vec<Value>> {
        match self.get_mut(id) {
            Some(Object::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn dict(&self, id: ObjId) -> Option<&Vec<(Value, Value)>> {
        match self.get(id) {
            Some(Object::Dict(entries)) => Some(entries),
            _ => None,
        }
    }

    pub fn dict_mut(&mut self, id: ObjId) -> Option<&mut Vec<(Value, Value)>> {
        match self.get_mut(id) {
            Some(Object::Dict(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Read a field of the instance `value` points to
    pub fn field(&self, value: &Value, name: &str) -> Option<&Value> {
        self.deref(value)
            .and_then(Object::as_instance)
            .and_then(|instance| instance.field(name))
    }

    /// Read a field that holds a list reference and return the list items
    pub fn list_field(&self, id: ObjId, name: &str) -> Option<&Vec<Value>> {
        self.instance(id)
            .and_then(|instance| instance.field(name))
            .and_then(Value::as_obj)
            .and_then(|list_id| self.list(list_id))
    }

    /// Runtime type name of a value, looking through references
    pub fn type_name(&self, value: &Value) -> String {
        match value {
            Value::Ref(id) => self
                .get(*id)
                .map(|object| object.type_name().to_string())
                .unwrap_or_else(|| "object".to_string()),
            other => other.type_name().to_string(),
        }
    }

    /// Quoted representation of a value, expanding lists and dictionaries
    pub fn repr(&self, value: &Value) -> String {
        let mut seen = FxHashSet::default();
        self.repr_inner(value, &mut seen)
    }

    fn repr_inner(&self, value: &Value, seen: &mut FxHashSet<ObjId>) -> String {
        let id = match value {
            Value::Ref(id) => *id,
            other => return other.repr(),
        };
        let object = match self.get(id) {
            Some(object) => object,
            None => return value.to_string(),
        };
        if !seen.insert(id) {
            return match object {
                Object::List(_) => "[...]".to_string(),
                Object::Dict(_) => "{...}".to_string(),
                Object::Instance(instance) => {
                    format!("<{} object at {}>", instance.class.name(), id)
                }
            };
        }
        let text = match object {
            Object::List(items) => {
                let parts: Vec<String> =
                    items.iter().map(|item| self.repr_inner(item, seen)).collect();
                format!("[{}]", parts.join(", "))
            }
            Object::Dict(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| {
                        format!(
                            "{}: {}",
                            self.repr_inner(key, seen),
                            self.repr_inner(value, seen)
                        )
                    })
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            Object::Instance(instance) => {
                format!("<{} object at {}>", instance.class.name(), id)
            }
        };
        seen.remove(&id);
        text
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_are_monotonic() {
        let mut heap = Heap::new();
        let a = heap.alloc(Object::List(vec![]));
        let b = heap.alloc(Object::List(vec![]));
        assert_eq!(a.address(), HEAP_ADDRESS_START);
        assert!(b.address() > a.address());
        assert_ne!(a, b);
    }

    #[test]
    fn test_repr_nested_and_cyclic() {
        let mut heap = Heap::new();
        let inner = heap.alloc_list(vec![Value::Int(1), Value::str("x")]);
        let outer = heap.alloc_list(vec![inner, Value::None]);
        assert_eq!(heap.repr(&outer), "[[1, 'x'], None]");

        let id = outer.as_obj().unwrap();
        heap.list_mut(id).unwrap().push(outer.clone());
        assert_eq!(heap.repr(&outer), "[[1, 'x'], None, [...]]");
    }
}
