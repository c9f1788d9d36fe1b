//! Notebook session
//!
//! A [`Session`] ties the pieces together for one user: it classifies the
//! submitted buffer, runs it through an [`Executor`], captures a snapshot of
//! the namespace and records a [`Cell`] holding the code, its outcome and the
//! diagram of what changed.

use crate::algorithms::PendingAlgorithm;
use crate::render::render_memory;
use crate::script::{classify_buffer, BufferStatus, Executor, ScriptExecutor, Workspace};
use crate::snapshot::{diff, Snapshot, Snapshotter};

/// Shown instead of a diagram when an execution changed nothing visible
pub const NO_CHANGES: &str = "(no changes)";

/// One executed (or rejected) submission
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// 1-based, in submission order
    pub id: usize,
    pub code: String,
    pub ok: bool,
    pub error: Option<String>,
    /// Lines written by `print`
    pub output: Vec<String>,
    /// Memory view of the names this cell changed
    pub snapshot_text: Option<String>,
}

impl Cell {
    /// Plain-text rendering: status glyph and code, then output, error and
    /// (when expanded) the change diagram
    pub fn text(&self, expanded: bool) -> String {
        let status = if self.ok { "✔" } else { "✖" };
        let mut code_lines = self.code.trim_end().lines();
        let mut first = format!("{} {}", status, code_lines.next().unwrap_or(""));
        if self.snapshot_text.is_some() {
            first.push_str(if expanded { " ▾" } else { " ▸" });
        }

        let mut lines = vec![first];
        lines.extend(code_lines.map(str::to_string));
        lines.extend(self.output.iter().cloned());
        lines.extend(self.error.iter().cloned());
        if let (true, Some(snapshot)) = (expanded, &self.snapshot_text) {
            lines.push(String::new());
            lines.push(snapshot.clone());
        }
        lines.join("\n")
    }
}

/// What happened to a submitted buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The buffer needs more lines; nothing was recorded
    Incomplete,
    /// A cell was recorded at this index of [`Session::cells`]
    Recorded(usize),
}

pub struct Session<E: Executor = ScriptExecutor> {
    workspace: Workspace,
    executor: E,
    snapshotter: Snapshotter,
    last_snapshot: Snapshot,
    cells: Vec<Cell>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_executor(ScriptExecutor)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Executor> Session<E> {
    pub fn with_executor(executor: E) -> Self {
        let workspace = Workspace::new();
        let mut snapshotter = Snapshotter::new();
        let last_snapshot = snapshotter.capture(&workspace.heap, workspace.namespace.iter());
        Session {
            workspace,
            executor,
            snapshotter,
            last_snapshot,
            cells: Vec::new(),
        }
    }

    /// Run `code` if it is complete (or `force_submit` is set)
    pub fn submit(&mut self, code: &str, force_submit: bool) -> Submission {
        match classify_buffer(code, force_submit) {
            BufferStatus::Incomplete => Submission::Incomplete,
            BufferStatus::Error(error) => self.record(code, false, Some(error), Vec::new(), None),
            BufferStatus::Complete => {
                let result = self.executor.execute(code, &mut self.workspace);
                let output = self.workspace.take_output();
                let snapshot_text = result.ok.then(|| self.refresh_snapshot());
                self.record(code, result.ok, result.error, output, snapshot_text)
            }
        }
    }

    /// Capture the namespace and return the diagram of what changed
    fn refresh_snapshot(&mut self) -> String {
        let snapshot = self
            .snapshotter
            .capture(&self.workspace.heap, self.workspace.namespace.iter());
        let changed = diff(&self.last_snapshot, &snapshot);
        self.last_snapshot = snapshot;
        let text = render_memory(&changed);
        if text.is_empty() {
            NO_CHANGES.to_string()
        } else {
            text
        }
    }

    fn record(
        &mut self,
        code: &str,
        ok: bool,
        error: Option<String>,
        output: Vec<String>,
        snapshot_text: Option<String>,
    ) -> Submission {
        let cell = Cell {
            id: self.cells.len() + 1,
            code: code.to_string(),
            ok,
            error,
            output,
            snapshot_text,
        };
        log::debug!("recorded cell {} (ok: {})", cell.id, cell.ok);
        self.cells.push(cell);
        Submission::Recorded(self.cells.len() - 1)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Snapshot taken after the last successful execution
    pub fn snapshot(&self) -> &Snapshot {
        &self.last_snapshot
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Algorithm started by the last execution, if any
    pub fn take_pending(&mut self) -> Option<PendingAlgorithm> {
        self.workspace.take_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_buffer_records_nothing() {
        let mut session = Session::new();
        assert_eq!(session.submit("arr = [1,", false), Submission::Incomplete);
        assert!(session.cells().is_empty());
        assert_eq!(session.submit("arr = [1,", true), Submission::Recorded(0));
        assert_eq!(session.cells()[0].error.as_deref(), Some("Incomplete code"));
    }

    #[test]
    fn test_cells_show_only_changes() {
        let mut session = Session::new();
        session.submit("x = 1", false);
        session.submit("y = 2", false);
        session.submit("y = 2", false);
        let cells = session.cells();
        assert!(cells[1].snapshot_text.as_deref().unwrap().starts_with("y ──▶ int"));
        assert_eq!(cells[2].snapshot_text.as_deref(), Some(NO_CHANGES));
    }

    #[test]
    fn test_failed_cell_keeps_error() {
        let mut session = Session::new();
        session.submit("print('hi'); 1 // 0", false);
        let cell = &session.cells()[0];
        assert!(!cell.ok);
        assert_eq!(cell.output, vec!["hi".to_string()]);
        assert_eq!(cell.snapshot_text, None);
        assert_eq!(cell.text(false), "✖ print('hi'); 1 // 0\nhi\ndivision by zero");
    }

    #[test]
    fn test_cell_text_expands_diagram() {
        let mut session = Session::new();
        session.submit("a = [7]\nb = a", false);
        let cell = &session.cells()[0];
        let collapsed = cell.text(false);
        assert_eq!(collapsed, "✔ a = [7] ▸\nb = a");
        let expanded = cell.text(true);
        assert!(expanded.starts_with("✔ a = [7] ▾\nb = a\n\na ──┐\nb ──┘\n▶ Array"));
    }
}
