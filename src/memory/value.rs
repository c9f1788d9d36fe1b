//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents every value a
//! workspace name can be bound to. Scalars are stored inline; containers and
//! instances live on the [`Heap`](super::heap::Heap) and are referenced
//! through [`Value::Ref`].
//!
//! # Value Types
//!
//! - [`Value::None`]: absence of a value
//! - [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Str`]: primitives
//! - [`Value::Ref`]: pointer to a heap object, identified by its [`ObjId`]
//! - [`Value::Function`], [`Value::Class`]: callables and type definitions
//!
//! # Display
//!
//! `Display` follows the conventions of the diagrams: strings print raw,
//! floats always carry a fractional part, and references print as the hex
//! address of the object they point to. [`Value::repr`] quotes strings.

use std::cmp::Ordering;
use std::fmt;

/// Memory address type (64-bit)
pub type Address = u64;

/// Stable identity of a heap object.
///
/// Addresses are handed out monotonically and never reused, so two distinct
/// objects can never share an `ObjId` within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjId(pub Address);

impl ObjId {
    pub fn address(self) -> Address {
        self.0
    }
}

impl fmt::Display for ObjId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Runtime values bound to workspace names
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Ref(ObjId),
    Function(String), // Builtin function name
    Class(String),    // Builtin or user class name
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Scalars that are rendered as memory-inspection cards rather than diagrams
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    }

    /// Functions and type definitions
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Class(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Get the referenced object id, returns None if not a Ref
    pub fn as_obj(&self) -> Option<ObjId> {
        match self {
            Value::Ref(id) => Some(*id),
            _ => None,
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view used by comparisons and interpolation
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Truthiness used by the `directed` flag and conditions
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Ref(_) | Value::Function(_) | Value::Class(_) => true,
        }
    }

    /// Type name shown in headers and primitive cards
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Ref(_) => "object",
            Value::Function(_) => "function",
            Value::Class(_) => "type",
        }
    }

    /// Ordering between comparable values.
    ///
    /// Numbers compare numerically across `Int`/`Float`/`Bool`, strings
    /// lexicographically. Every other pairing is incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }

    /// Equality used by searches and dictionary lookups
    pub fn equals(&self, other: &Value) -> bool {
        match self.compare(other) {
            Some(ordering) => ordering == Ordering::Equal,
            None => self == other,
        }
    }

    /// True when `self < other` under [`Value::compare`]
    pub fn less_than(&self, other: &Value) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// Quoted representation, used in action text and list displays
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => quote(s),
            Value::Function(name) => format!("<function {}>", name),
            Value::Class(name) => format!("<class '{}'>", name),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", format_float(*x)),
            Value::Str(s) => write!(f, "{}", s),
            Value::Ref(id) => write!(f, "{}", id),
            Value::Function(name) => write!(f, "<function {}>", name),
            Value::Class(name) => write!(f, "<class '{}'>", name),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

/// Format a float so integral values keep a trailing `.0`
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() {
        let text = if x > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else if x == x.trunc() && x.abs() < 1e16 {
        format!("{:.1}", x)
    } else if x.abs() >= 1e16 {
        format!("{:e}", x)
    } else {
        format!("{}", x)
    }
}

/// Single-quote a string, switching to double quotes when that avoids escapes
fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_repr() {
        assert_eq!(Value::str("a").to_string(), "a");
        assert_eq!(Value::str("a").repr(), "'a'");
        assert_eq!(Value::str("it's").repr(), "\"it's\"");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Ref(ObjId(0x1000_0010)).to_string(), "0x10000010");
    }

    #[test]
    fn test_compare_across_numeric_types() {
        assert!(Value::Int(1).equals(&Value::Float(1.0)));
        assert!(Value::Int(1).less_than(&Value::Float(1.5)));
        assert!(!Value::Int(1).equals(&Value::str("1")));
        assert_eq!(Value::Int(1).compare(&Value::str("1")), None);
        assert!(Value::None.equals(&Value::None));
    }
}
