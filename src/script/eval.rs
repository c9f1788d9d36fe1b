//! Statement and expression evaluation
//!
//! The [`Evaluator`] walks the parsed statements of one cell and applies them
//! to a [`Workspace`]. Builtin functions, constructors and method dispatch
//! live in the sibling `builtins` module as further `impl Evaluator` blocks.
//!
//! # Semantics
//!
//! - Assignment evaluates the right-hand side before the target's object
//! - Integer arithmetic is checked; overflow is a type error, not a wrap
//! - `//` and `%` round toward negative infinity, so `-7 // 2 == -4`
//! - `==` on containers compares identity

use super::ast::*;
use super::workspace::{UserClass, Workspace};
use crate::errors::ExecError;
use crate::memory::{Object, Value};

pub struct Evaluator<'a> {
    pub(super) workspace: &'a mut Workspace,
}

impl<'a> Evaluator<'a> {
    pub fn new(workspace: &'a mut Workspace) -> Self {
        Evaluator { workspace }
    }

    pub fn execute_statement(&mut self, statement: &Stmt) -> Result<(), ExecError> {
        match statement {
            Stmt::Expr(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }

            Stmt::Assign { target, value, .. } => {
                let value = self.evaluate(value)?;
                self.assign(target, value)
            }

            Stmt::Delete { name, .. } => self
                .workspace
                .namespace
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| ExecError::UndefinedName(name.clone())),

            Stmt::ClassDef {
                name,
                fields,
                methods,
                ..
            } => {
                let mut declared = Vec::with_capacity(fields.len());
                for field in fields {
                    let default = match &field.default {
                        Some(expr) => Some(self.evaluate(expr)?),
                        None => None,
                    };
                    declared.push((field.name.clone(), default));
                }
                self.workspace.classes.insert(
                    name.clone(),
                    UserClass {
                        name: name.clone(),
                        fields: declared,
                        methods: methods.clone(),
                    },
                );
                self.workspace
                    .namespace
                    .set(name, Value::Class(name.clone()));
                Ok(())
            }
        }
    }

    fn assign(&mut self, target: &Target, value: Value) -> Result<(), ExecError> {
        match target {
            Target::Name(name) => {
                self.workspace.namespace.set(name, value);
                Ok(())
            }
            Target::Attribute { object, name } => {
                let object = self.evaluate(object)?;
                self.set_attribute(&object, name, value)
            }
            Target::Index { object, index } => {
                let object = self.evaluate(object)?;
                let index = self.evaluate(index)?;
                self.set_item(&object, index, value)
            }
        }
    }

    /// Evaluate an expression and return its value
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, ExecError> {
        match expr {
            Expr::None => Ok(Value::None),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Float(x) => Ok(Value::Float(*x)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),

            Expr::List(items) => {
                let items = self.evaluate_all(items)?;
                Ok(self.workspace.heap.alloc_list(items))
            }

            Expr::Dict(pairs) => {
                let mut entries: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());
                for (key, value) in pairs {
                    let key = self.evaluate(key)?;
                    let value = self.evaluate(value)?;
                    match entries.iter_mut().find(|(existing, _)| existing.equals(&key)) {
                        Some((_, slot)) => *slot = value,
                        None => entries.push((key, value)),
                    }
                }
                Ok(self.workspace.heap.alloc_dict(entries))
            }

            Expr::Name(name, _) => self
                .workspace
                .namespace
                .get(name)
                .cloned()
                .ok_or_else(|| ExecError::UndefinedName(name.clone())),

            Expr::Attribute { object, name, .. } => {
                let object = self.evaluate(object)?;
                self.get_attribute(&object, name)
            }

            Expr::Index { object, index, .. } => {
                let object = self.evaluate(object)?;
                let index = self.evaluate(index)?;
                self.get_item(&object, &index)
            }

            Expr::Call {
                callee,
                args,
                kwargs,
                ..
            } => self.evaluate_call(callee, args, kwargs),

            Expr::Negate(operand) => {
                let operand = self.evaluate(operand)?;
                match operand {
                    Value::Int(n) => n
                        .checked_neg()
                        .map(Value::Int)
                        .ok_or_else(|| ExecError::type_error("integer overflow in negation")),
                    Value::Bool(b) => Ok(Value::Int(-(b as i64))),
                    Value::Float(x) => Ok(Value::Float(-x)),
                    other => Err(ExecError::type_error(format!(
                        "bad operand type for unary -: '{}'",
                        self.workspace.heap.type_name(&other)
                    ))),
                }
            }

            Expr::Binary { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.binary_op(*op, left, right)
            }
        }
    }

    pub(super) fn evaluate_all(&mut self, exprs: &[Expr]) -> Result<Vec<Value>, ExecError> {
        exprs.iter().map(|expr| self.evaluate(expr)).collect()
    }

    fn evaluate_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        kwargs: &[(String, Expr)],
    ) -> Result<Value, ExecError> {
        // `obj.method(..)` dispatches on the receiver instead of a bound method value
        if let Expr::Attribute { object, name, .. } = callee {
            let receiver = self.evaluate(object)?;
            let args = self.evaluate_all(args)?;
            let kwargs = self.evaluate_kwargs(kwargs)?;
            return self.call_method(&receiver, name, args, kwargs);
        }

        let function = self.evaluate(callee)?;
        let args = self.evaluate_all(args)?;
        let kwargs = self.evaluate_kwargs(kwargs)?;
        self.call_value(function, args, kwargs)
    }

    fn evaluate_kwargs(
        &mut self,
        kwargs: &[(String, Expr)],
    ) -> Result<Vec<(String, Value)>, ExecError> {
        kwargs
            .iter()
            .map(|(name, expr)| Ok((name.clone(), self.evaluate(expr)?)))
            .collect()
    }

    // ===== Attributes and items =====

    fn get_attribute(&self, object: &Value, name: &str) -> Result<Value, ExecError> {
        let heap = &self.workspace.heap;
        match heap.deref(object) {
            Some(Object::Instance(instance)) => {
                if let Some(value) = instance.field(name) {
                    return Ok(value.clone());
                }
                if instance.has_method(name) {
                    return Ok(Value::Function(format!("{}.{}", instance.class.name(), name)));
                }
                Err(ExecError::NoAttribute {
                    type_name: instance.class.name().to_string(),
                    attribute: name.to_string(),
                })
            }
            Some(object) if Self::container_methods(object).contains(&name) => {
                Ok(Value::Function(format!("{}.{}", object.type_name(), name)))
            }
            _ => Err(ExecError::NoAttribute {
                type_name: heap.type_name(object),
                attribute: name.to_string(),
            }),
        }
    }

    fn set_attribute(&mut self, object: &Value, name: &str, value: Value) -> Result<(), ExecError> {
        let type_name = self.workspace.heap.type_name(object);
        let instance = object
            .as_obj()
            .and_then(|id| self.workspace.heap.instance_mut(id));
        match instance {
            Some(instance) => {
                instance.set_field(name, value);
                Ok(())
            }
            None => Err(ExecError::NoAttribute {
                type_name,
                attribute: name.to_string(),
            }),
        }
    }

    fn get_item(&self, object: &Value, index: &Value) -> Result<Value, ExecError> {
        let heap = &self.workspace.heap;
        match (heap.deref(object), object) {
            (Some(Object::List(items)), _) => {
                let position = Self::list_position(index, items.len())?;
                Ok(items[position].clone())
            }
            (Some(Object::Dict(entries)), _) => entries
                .iter()
                .find(|(key, _)| key.equals(index))
                .map(|(_, value)| value.clone())
                .ok_or_else(|| ExecError::KeyNotFound(heap.repr(index))),
            (None, Value::Str(text)) => {
                let chars: Vec<char> = text.chars().collect();
                let position = Self::list_position(index, chars.len())?;
                Ok(Value::Str(chars[position].to_string()))
            }
            _ => Err(ExecError::type_error(format!(
                "'{}' object is not subscriptable",
                heap.type_name(object)
            ))),
        }
    }

    fn set_item(&mut self, object: &Value, index: Value, value: Value) -> Result<(), ExecError> {
        let type_name = self.workspace.heap.type_name(object);
        let target = object
            .as_obj()
            .and_then(|id| self.workspace.heap.get_mut(id));
        match target {
            Some(Object::List(items)) => {
                let position = Self::list_position(&index, items.len())?;
                items[position] = value;
                Ok(())
            }
            Some(Object::Dict(entries)) => {
                match entries.iter_mut().find(|(key, _)| key.equals(&index)) {
                    Some((_, slot)) => *slot = value,
                    None => entries.push((index, value)),
                }
                Ok(())
            }
            _ => Err(ExecError::type_error(format!(
                "'{}' object does not support item assignment",
                type_name
            ))),
        }
    }

    /// Resolve a possibly negative index against a sequence of `len` items
    pub(super) fn list_position(index: &Value, len: usize) -> Result<usize, ExecError> {
        let raw = match index {
            Value::Int(n) => *n,
            Value::Bool(b) => *b as i64,
            other => {
                return Err(ExecError::type_error(format!(
                    "indices must be integers, not {}",
                    other.type_name()
                )))
            }
        };
        let resolved = if raw < 0 { raw + len as i64 } else { raw };
        if resolved < 0 || resolved >= len as i64 {
            return Err(ExecError::IndexOutOfRange { index: raw, len });
        }
        Ok(resolved as usize)
    }

    // ===== Operators =====

    fn binary_op(&mut self, op: BinaryOp, left: Value, right: Value) -> Result<Value, ExecError> {
        match op {
            BinaryOp::Eq => return Ok(Value::Bool(left.equals(&right))),
            BinaryOp::Ne => return Ok(Value::Bool(!left.equals(&right))),
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
                let ordering = left.compare(&right).ok_or_else(|| {
                    ExecError::type_error(format!(
                        "'{}' not supported between instances of '{}' and '{}'",
                        op,
                        self.workspace.heap.type_name(&left),
                        self.workspace.heap.type_name(&right)
                    ))
                })?;
                let result = match op {
                    BinaryOp::Lt => ordering.is_lt(),
                    BinaryOp::Le => ordering.is_le(),
                    BinaryOp::Gt => ordering.is_gt(),
                    _ => ordering.is_ge(),
                };
                return Ok(Value::Bool(result));
            }
            _ => {}
        }

        if let (Some(a), Some(b)) = (Self::as_integer(&left), Self::as_integer(&right)) {
            return Self::integer_op(op, a, b);
        }
        if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
            return Self::float_op(op, a, b);
        }

        match (op, &left, &right) {
            (BinaryOp::Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            (BinaryOp::Mul, Value::Str(s), Value::Int(n))
            | (BinaryOp::Mul, Value::Int(n), Value::Str(s)) => {
                Ok(Value::Str(s.repeat((*n).max(0) as usize)))
            }
            _ => self.sequence_op(op, &left, &right),
        }
    }

    /// List concatenation and repetition
    fn sequence_op(&mut self, op: BinaryOp, left: &Value, right: &Value) -> Result<Value, ExecError> {
        let heap = &self.workspace.heap;
        let list = |value: &Value| value.as_obj().and_then(|id| heap.list(id)).cloned();
        let combined = match (op, list(left), list(right), right) {
            (BinaryOp::Add, Some(mut a), Some(b), _) => {
                a.extend(b);
                Some(a)
            }
            (BinaryOp::Mul, Some(items), None, Value::Int(n)) => {
                let count = (*n).max(0) as usize;
                Some(items.iter().cloned().cycle().take(items.len() * count).collect())
            }
            _ => None,
        };
        match combined {
            Some(items) => Ok(self.workspace.heap.alloc_list(items)),
            None => Err(ExecError::type_error(format!(
                "unsupported operand type(s) for {}: '{}' and '{}'",
                op,
                heap.type_name(left),
                heap.type_name(right)
            ))),
        }
    }

    fn as_integer(value: &Value) -> Option<i64> {
        match value {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }

    fn integer_op(op: BinaryOp, a: i64, b: i64) -> Result<Value, ExecError> {
        if b == 0 && matches!(op, BinaryOp::Div | BinaryOp::FloorDiv | BinaryOp::Mod) {
            return Err(ExecError::DivisionByZero);
        }
        let result = match op {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Sub => a.checked_sub(b),
            BinaryOp::Mul => a.checked_mul(b),
            BinaryOp::Div => return Ok(Value::Float(a as f64 / b as f64)),
            BinaryOp::FloorDiv => floor_div(a, b),
            _ => floor_mod(a, b),
        };
        result
            .map(Value::Int)
            .ok_or_else(|| ExecError::type_error(format!("integer overflow in '{}'", op)))
    }

    fn float_op(op: BinaryOp, a: f64, b: f64) -> Result<Value, ExecError> {
        if b == 0.0 && matches!(op, BinaryOp::Div | BinaryOp::FloorDiv | BinaryOp::Mod) {
            return Err(ExecError::DivisionByZero);
        }
        let result = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::FloorDiv => (a / b).floor(),
            _ => {
                let r = a % b;
                if r != 0.0 && (r < 0.0) != (b < 0.0) {
                    r + b
                } else {
                    r
                }
            }
        };
        Ok(Value::Float(result))
    }
}

fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

fn floor_mod(a: i64, b: i64) -> Option<i64> {
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}
