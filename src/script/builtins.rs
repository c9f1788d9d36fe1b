//! Builtin functions, constructors and method dispatch
//!
//! # Functions
//!
//! - `len(x)`: length of a string, list, dict or sized builtin structure
//! - `print(*values)`: appends one line to the cell output
//! - `search(algorithm, data, target)`: starts an array search
//! - `tree_search(algorithm, tree, target)`: starts a tree search
//! - `tree_traverse(algorithm, tree)`: starts a full tree traversal
//! - `algo_help()`: the algorithm overview text
//!
//! The three launchers copy their input, register a pending algorithm on the
//! workspace and return a status string such as
//! `Starting Binary Search for target 5...`.

use super::eval::Evaluator;
use crate::algorithms::registry::{self, start_search, start_tree_search, start_tree_traversal};
use crate::errors::ExecError;
use crate::memory::structures;
use crate::memory::{BuiltinClass, ClassRef, Instance, ObjId, Object, Value};
use crate::snapshot::nodes::detach_value;
use crate::snapshot::TreeSnapshot;
use std::rc::Rc;

const LIST_METHODS: [&str; 2] = ["append", "pop"];
const DICT_METHODS: [&str; 2] = ["get", "keys"];

impl Evaluator<'_> {
    /// Call a function or class value
    pub(super) fn call_value(
        &mut self,
        function: Value,
        args: Vec<Value>,
        kwargs: Vec<(String, Value)>,
    ) -> Result<Value, ExecError> {
        match function {
            Value::Function(name) => self.call_builtin(&name, args, kwargs),
            Value::Class(name) => self.instantiate(&name, args, kwargs),
            other => Err(ExecError::NotCallable(self.workspace.heap.type_name(&other))),
        }
    }

    /// Methods lists and dicts answer to
    pub(super) fn container_methods(object: &Object) -> &'static [&'static str] {
        match object {
            Object::List(_) => &LIST_METHODS,
            Object::Dict(_) => &DICT_METHODS,
            Object::Instance(_) => &[],
        }
    }

    fn call_builtin(
        &mut self,
        name: &str,
        args: Vec<Value>,
        kwargs: Vec<(String, Value)>,
    ) -> Result<Value, ExecError> {
        if name.contains('.') {
            return Err(ExecError::type_error(format!(
                "method '{}' must be called on its object",
                name
            )));
        }
        reject_kwargs(name, &kwargs)?;

        match name {
            "len" => {
                let [value] = exact_args(name, args)?;
                self.builtin_len(&value)
            }
            "print" => {
                let parts: Vec<String> = args.iter().map(|value| self.display(value)).collect();
                self.workspace.print(parts.join(" "));
                Ok(Value::None)
            }
            "search" => {
                let [algorithm, data, target] = exact_args(name, args)?;
                let key = algorithm_key(&algorithm)?;
                let values = self.sequence_of(&data)?;
                let target = detach_value(&self.workspace.heap, &target);
                let message = format!("for target {}...", target.repr());
                let pending = start_search(key, Rc::from(values), target)?;
                Ok(self.launch(pending, Some(message)))
            }
            "tree_search" => {
                let [algorithm, tree, target] = exact_args(name, args)?;
                let key = algorithm_key(&algorithm)?;
                let shape = self.tree_of(&tree);
                let target = detach_value(&self.workspace.heap, &target);
                let message = format!("for target {}...", target.repr());
                let pending = start_tree_search(key, shape, target)?;
                Ok(self.launch(pending, Some(message)))
            }
            "tree_traverse" => {
                let [algorithm, tree] = exact_args(name, args)?;
                let key = algorithm_key(&algorithm)?;
                let shape = self.tree_of(&tree);
                let pending = start_tree_traversal(key, shape)?;
                Ok(self.launch(pending, None))
            }
            "algo_help" => {
                let [] = exact_args(name, args)?;
                Ok(Value::Str(registry::overview()))
            }
            other => Err(ExecError::NotCallable(other.to_string())),
        }
    }

    fn launch(&mut self, pending: registry::PendingAlgorithm, detail: Option<String>) -> Value {
        let status = match detail {
            Some(detail) => format!("Starting {} {}", pending.runner.name(), detail),
            None => format!("Starting {}...", pending.runner.name()),
        };
        log::debug!("{}", status);
        self.workspace.set_pending(pending);
        Value::Str(status)
    }

    fn builtin_len(&self, value: &Value) -> Result<Value, ExecError> {
        let heap = &self.workspace.heap;
        let len = match (value, heap.deref(value)) {
            (Value::Str(s), _) => Some(s.chars().count()),
            (_, Some(Object::List(items))) => Some(items.len()),
            (_, Some(Object::Dict(entries))) => Some(entries.len()),
            (Value::Ref(id), Some(Object::Instance(_))) => structures::length(heap, *id),
            _ => None,
        };
        match len {
            Some(len) => Ok(Value::Int(len as i64)),
            None => Err(ExecError::type_error(format!(
                "object of type '{}' has no len()",
                heap.type_name(value)
            ))),
        }
    }

    /// Text `print` shows: strings raw, containers as their repr
    fn display(&self, value: &Value) -> String {
        match value {
            Value::Ref(_) => self.workspace.heap.repr(value),
            other => other.to_string(),
        }
    }

    /// Values of an iterable argument, detached from the heap
    fn sequence_of(&self, value: &Value) -> Result<Vec<Value>, ExecError> {
        let heap = &self.workspace.heap;
        let items = match (value, heap.deref(value)) {
            (_, Some(Object::List(items))) => items.clone(),
            (_, Some(Object::Dict(entries))) => entries.iter().map(|(key, _)| key.clone()).collect(),
            (Value::Ref(id), Some(Object::Instance(_))) => {
                structures::items(heap, *id).ok_or_else(|| not_iterable(heap.type_name(value)))?
            }
            (Value::Str(s), _) => s.chars().map(|ch| Value::Str(ch.to_string())).collect(),
            _ => return Err(not_iterable(heap.type_name(value))),
        };
        Ok(items.iter().map(|item| detach_value(heap, item)).collect())
    }

    /// Capture a tree object (through its `root` field) or a bare node
    fn tree_of(&self, tree: &Value) -> Rc<TreeSnapshot> {
        let heap = &self.workspace.heap;
        let root = heap.field(tree, "root").unwrap_or(tree);
        Rc::new(TreeSnapshot::capture(heap, root.as_obj()))
    }

    // ===== Constructors =====

    fn instantiate(
        &mut self,
        name: &str,
        args: Vec<Value>,
        kwargs: Vec<(String, Value)>,
    ) -> Result<Value, ExecError> {
        if let Some(class) = self.workspace.classes.get(name).cloned() {
            let fields = bind_fields(&class.name, &class.fields, args, kwargs)?;
            let instance = Instance {
                class: ClassRef::User(class.name),
                fields,
                methods: class.methods,
            };
            return Ok(Value::Ref(self.workspace.heap.alloc(Object::Instance(instance))));
        }

        let class = BuiltinClass::from_name(name)
            .ok_or_else(|| ExecError::NotCallable(name.to_string()))?;
        let mut directed = false;
        for (keyword, value) in kwargs {
            if class == BuiltinClass::Graph && keyword == "directed" {
                directed = value.is_truthy();
            } else {
                return Err(ExecError::UnexpectedKeyword {
                    function: name.to_string(),
                    keyword,
                });
            }
        }
        let max_args = if class == BuiltinClass::Graph { 0 } else { 1 };
        if args.len() > max_args {
            return Err(ExecError::ArgumentCount {
                function: name.to_string(),
                expected: max_args,
                got: args.len(),
            });
        }
        let initial = match args.first() {
            Some(values) => self.sequence_of(values)?,
            None => Vec::new(),
        };
        let id = structures::construct(&mut self.workspace.heap, class, initial, directed)?;
        Ok(Value::Ref(id))
    }

    // ===== Methods =====

    /// Dispatch `receiver.method(args)`
    pub(super) fn call_method(
        &mut self,
        receiver: &Value,
        method: &str,
        args: Vec<Value>,
        kwargs: Vec<(String, Value)>,
    ) -> Result<Value, ExecError> {
        let no_attribute = |type_name: String| ExecError::NoAttribute {
            type_name,
            attribute: method.to_string(),
        };
        let Some(id) = receiver.as_obj() else {
            return Err(no_attribute(receiver.type_name().to_string()));
        };
        let object = self
            .workspace
            .heap
            .get(id)
            .ok_or(ExecError::InvalidReference(id))?;

        let instance = match object {
            Object::Instance(instance) => instance,
            container => {
                let type_name = container.type_name().to_string();
                reject_kwargs(method, &kwargs)?;
                return self
                    .container_method(id, method, args)
                    .unwrap_or_else(|| Err(no_attribute(type_name)));
            }
        };

        match &instance.class {
            ClassRef::Builtin(class) => {
                let class = *class;
                reject_kwargs(method, &kwargs)?;
                structures::call_method(&mut self.workspace.heap, id, class, method, args)
            }
            ClassRef::User(class) => {
                if instance.has_method(method) {
                    return Err(ExecError::MethodWithoutBody {
                        class: class.clone(),
                        method: method.to_string(),
                    });
                }
                match instance.field(method) {
                    Some(value) => {
                        let value = value.clone();
                        self.call_value(value, args, kwargs)
                    }
                    None => Err(no_attribute(class.clone())),
                }
            }
        }
    }

    /// List and dict methods; `None` when the method does not exist
    fn container_method(
        &mut self,
        id: ObjId,
        method: &str,
        args: Vec<Value>,
    ) -> Option<Result<Value, ExecError>> {
        let heap = &mut self.workspace.heap;
        let result = match (heap.get_mut(id)?, method) {
            (Object::List(items), "append") => exact_args::<1>(method, args).map(|[value]| {
                items.push(value);
                Value::None
            }),
            (Object::List(items), "pop") => match args.as_slice() {
                [] => items
                    .pop()
                    .ok_or_else(|| ExecError::type_error("pop from empty list")),
                [index] => Evaluator::list_position(index, items.len())
                    .map(|position| items.remove(position)),
                _ => Err(ExecError::ArgumentCount {
                    function: method.to_string(),
                    expected: 1,
                    got: args.len(),
                }),
            },
            (Object::Dict(entries), "get") => {
                let (key, default) = match args.as_slice() {
                    [key] => (key.clone(), Value::None),
                    [key, default] => (key.clone(), default.clone()),
                    _ => {
                        return Some(Err(ExecError::ArgumentCount {
                            function: method.to_string(),
                            expected: 2,
                            got: args.len(),
                        }))
                    }
                };
                Ok(entries
                    .iter()
                    .find(|(existing, _)| existing.equals(&key))
                    .map(|(_, value)| value.clone())
                    .unwrap_or(default))
            }
            (Object::Dict(entries), "keys") => match exact_args::<0>(method, args) {
                Ok([]) => {
                    let keys = entries.iter().map(|(key, _)| key.clone()).collect();
                    Ok(heap.alloc_list(keys))
                }
                Err(err) => Err(err),
            },
            _ => return None,
        };
        Some(result)
    }
}

fn exact_args<const N: usize>(function: &str, args: Vec<Value>) -> Result<[Value; N], ExecError> {
    let got = args.len();
    args.try_into().map_err(|_| ExecError::ArgumentCount {
        function: function.to_string(),
        expected: N,
        got,
    })
}

fn reject_kwargs(function: &str, kwargs: &[(String, Value)]) -> Result<(), ExecError> {
    match kwargs.first() {
        Some((keyword, _)) => Err(ExecError::UnexpectedKeyword {
            function: function.to_string(),
            keyword: keyword.clone(),
        }),
        None => Ok(()),
    }
}

fn algorithm_key(value: &Value) -> Result<&str, ExecError> {
    value.as_str().ok_or_else(|| {
        ExecError::type_error(format!(
            "algorithm name must be a string, not '{}'",
            value.type_name()
        ))
    })
}

fn not_iterable(type_name: String) -> ExecError {
    ExecError::type_error(format!("'{}' object is not iterable", type_name))
}

/// Match constructor arguments to declared fields, filling defaults
fn bind_fields(
    class: &str,
    declared: &[(String, Option<Value>)],
    args: Vec<Value>,
    kwargs: Vec<(String, Value)>,
) -> Result<Vec<(String, Value)>, ExecError> {
    if args.len() > declared.len() {
        return Err(ExecError::ArgumentCount {
            function: class.to_string(),
            expected: declared.len(),
            got: args.len(),
        });
    }
    let mut slots: Vec<Option<Value>> = args.into_iter().map(Some).collect();
    slots.resize(declared.len(), None);

    for (keyword, value) in kwargs {
        let Some(index) = declared.iter().position(|(field, _)| *field == keyword) else {
            return Err(ExecError::UnexpectedKeyword {
                function: class.to_string(),
                keyword,
            });
        };
        if slots[index].is_some() {
            return Err(ExecError::type_error(format!(
                "{}() got multiple values for argument '{}'",
                class, keyword
            )));
        }
        slots[index] = Some(value);
    }

    declared
        .iter()
        .zip(slots)
        .map(|((field, default), slot)| match slot.or_else(|| default.clone()) {
            Some(value) => Ok((field.clone(), value)),
            None => Err(ExecError::type_error(format!(
                "{}() missing required argument: '{}'",
                class, field
            ))),
        })
        .collect()
}
