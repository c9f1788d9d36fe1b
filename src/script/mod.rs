//! Script front-end and executor
//!
//! The cells of the workspace run a small statement language:
//!
//! ```text
//! Source → Lexer → Parser → Stmt list → Evaluator → Workspace
//! ```
//!
//! - [`lexer`]: tokens carrying their [`SourceLocation`](ast::SourceLocation)
//! - [`parser`]: recursive descent parser producing [`ast::Stmt`]s
//! - [`buffer`]: decides whether multi-line input is ready to run
//! - [`eval`]: statement and expression evaluation
//! - `builtins`: `len`, `print`, constructors and the algorithm launchers
//! - [`workspace`]: heap, namespace, user classes and pending algorithm
//!
//! Failures are returned to the caller as an [`ExecutionResult`] carrying the
//! error message; nothing a script does can abort the session.

pub mod ast;
pub mod buffer;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod workspace;

mod builtins;

pub use buffer::{classify_buffer, BufferStatus};
pub use workspace::{Namespace, UserClass, Workspace};

use crate::errors::ScriptError;
use eval::Evaluator;

/// Outcome of executing one submitted cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub ok: bool,
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn success() -> Self {
        ExecutionResult {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ExecutionResult {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Runs source text against a workspace
pub trait Executor {
    fn execute(&mut self, source: &str, workspace: &mut Workspace) -> ExecutionResult;
}

/// Executor for the builtin statement language
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptExecutor;

impl ScriptExecutor {
    /// Parse and run `source`, stopping at the first failing statement
    pub fn run(source: &str, workspace: &mut Workspace) -> Result<(), ScriptError> {
        let program = parser::parse(source)?;
        let mut evaluator = Evaluator::new(workspace);
        for statement in &program {
            evaluator.execute_statement(statement)?;
        }
        Ok(())
    }
}

impl Executor for ScriptExecutor {
    fn execute(&mut self, source: &str, workspace: &mut Workspace) -> ExecutionResult {
        workspace.clear_pending();
        match Self::run(source, workspace) {
            Ok(()) => ExecutionResult::success(),
            Err(err) => {
                log::info!("script execution failed: {}", err);
                ExecutionResult::failure(err.to_string())
            }
        }
    }
}
