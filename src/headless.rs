//! Non-interactive runs (`--print`)
//!
//! Executes a whole script as one cell and returns what the TUI would have
//! shown: the cell with its change diagram, then every step of the algorithm
//! the script started, if any.

use crate::algorithms::AlgorithmRunner;
use crate::render::algorithm::{panel_header, status_line};
use crate::render::render_step;
use crate::session::{Session, Submission};

/// Run `source` in `session` and return the transcript
pub fn run_script(session: &mut Session, source: &str) -> String {
    let mut sections = Vec::new();
    if let Submission::Recorded(index) = session.submit(source, true) {
        sections.push(session.cells()[index].text(true));
    }
    if let Some(pending) = session.take_pending() {
        sections.push(play(pending.runner));
    }
    sections.join("\n\n")
}

/// Every step of `runner`, each followed by its diagram
pub fn play(mut runner: AlgorithmRunner) -> String {
    let mut lines = vec![panel_header(&runner)];
    let mut status = None;
    while let Some(step) = runner.advance() {
        lines.push(String::new());
        lines.push(format!("Step {}: {}", step.step_number, step.action));
        lines.push(render_step(step));
        status = status_line(step).or(status);
    }
    if let Some(status) = status {
        lines.push(String::new());
        lines.push(status);
    }
    lines.join("\n")
}
