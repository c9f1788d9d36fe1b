//! Error types for the workspace
//!
//! This module defines the errors that can surface to the user:
//!
//! - [`ExecError`]: failures while executing a script against the workspace
//!   (undefined names, type errors, bad indices, unknown methods)
//! - [`AlgorithmError`]: a request for an algorithm key that is not registered
//! - [`ScriptError`]: everything `execute` can report, parse errors included
//!
//! Classification and rendering never fail, so they have no error type. All
//! errors here are reported to the user as data (the failed cell's message),
//! never as panics.

use crate::memory::value::{ObjId, Value};
use crate::script::parser::ParseError;
use thiserror::Error;

/// Runtime errors raised while executing a script
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecError {
    /// Reference to a name that is not bound in the namespace
    #[error("name '{0}' is not defined")]
    UndefinedName(String),

    /// Attribute lookup on an object that lacks it
    #[error("'{type_name}' object has no attribute '{attribute}'")]
    NoAttribute { type_name: String, attribute: String },

    /// Operation applied to a value of the wrong type
    #[error("{0}")]
    TypeError(String),

    /// List index outside the list bounds
    #[error("list index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// Dictionary lookup of a missing key
    #[error("key {0} not found")]
    KeyNotFound(String),

    /// Division or modulo by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Wrong number of positional arguments
    #[error("{function}() takes {expected} argument(s) but {got} were given")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    /// Keyword argument the callee does not accept
    #[error("{function}() got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword { function: String, keyword: String },

    /// Call on a value that is not a function, class or method
    #[error("'{0}' object is not callable")]
    NotCallable(String),

    /// Call of a method a user class declared without a body
    #[error("method '{method}' of '{class}' is declared but has no implementation")]
    MethodWithoutBody { class: String, method: String },

    /// A reference that does not resolve to a live object
    #[error("invalid reference: address {0} is not allocated")]
    InvalidReference(ObjId),

    /// Invalid algorithm invocation
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

impl ExecError {
    pub fn type_error(message: impl Into<String>) -> Self {
        ExecError::TypeError(message.into())
    }
}

/// Errors reported when starting an algorithm visualization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// The requested key is not in the registry
    #[error("Unknown algorithm: {}. Available: {}", quoted(.requested), .available.join(", "))]
    UnknownAlgorithm {
        requested: String,
        available: Vec<&'static str>,
    },
}

/// Everything a script execution can fail with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}

fn quoted(text: &str) -> String {
    Value::str(text).repr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_message() {
        let err = AlgorithmError::UnknownAlgorithm {
            requested: "quantum".to_string(),
            available: vec!["binary", "linear"],
        };
        assert_eq!(
            err.to_string(),
            "Unknown algorithm: 'quantum'. Available: binary, linear"
        );
    }
}
