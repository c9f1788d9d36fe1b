//! Algorithm panel text
//!
//! ```text
//! Algorithm: Binary Search  [O(log n)]
//! Step 3 of 4
//!
//! Check middle index 2: arr[2]=5
//!
//! Controls: Space/N=Next  P=Prev  R=Reset  Esc=Exit
//! ```
//!
//! A `Status:` line follows the step counter once the terminal step is shown.

use super::{render_array, render_binary_tree};
use crate::algorithms::{complexity_of, AlgorithmRunner, AlgorithmStep, Highlights, StepData};

pub const CONTROLS_HINT: &str = "Controls: Space/N=Next  P=Prev  R=Reset  Esc=Exit";

/// `Algorithm: name  [complexity]`
pub fn panel_header(runner: &AlgorithmRunner) -> String {
    match complexity_of(runner.name()) {
        Some(complexity) => format!("Algorithm: {}  [{}]", runner.name(), complexity),
        None => format!("Algorithm: {}", runner.name()),
    }
}

/// `Step N of T`, or `Step N` while the total is unknown
pub fn step_counter(runner: &AlgorithmRunner) -> String {
    match runner.total_steps() {
        Some(total) => format!("Step {} of {}", runner.step_number(), total),
        None => format!("Step {}", runner.step_number()),
    }
}

/// `Status: ...` for a terminal step
pub fn status_line(step: &AlgorithmStep) -> Option<String> {
    if !step.is_complete {
        return None;
    }
    Some(match &step.result {
        Some(result) => format!("Status: {}", result),
        None => "Status: NOT FOUND".to_string(),
    })
}

/// Full panel for the runner's current step
pub fn algorithm_panel(runner: &AlgorithmRunner) -> String {
    let step = runner.current();
    let mut lines = vec![panel_header(runner), step_counter(runner)];
    if let Some(status) = step.and_then(status_line) {
        lines.push(status);
    }
    if let Some(step) = step {
        lines.push(String::new());
        lines.push(step.action.clone());
    }
    lines.push(String::new());
    lines.push(CONTROLS_HINT.to_string());
    lines.join("\n")
}

/// Diagram of the data an algorithm runs over, with the step's highlights
pub fn render_step_data(data: &StepData, highlights: Option<&Highlights>) -> String {
    match data {
        StepData::Array(values) => render_array(values, highlights.and_then(Highlights::as_array)),
        StepData::Tree(tree) => render_binary_tree(tree, highlights.and_then(Highlights::as_tree)),
    }
}

pub fn render_step(step: &AlgorithmStep) -> String {
    render_step_data(&step.data, Some(&step.highlights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::start_search;
    use crate::memory::Value;
    use std::rc::Rc;

    fn runner() -> AlgorithmRunner {
        let values: Vec<Value> = [1, 3, 5].into_iter().map(Value::Int).collect();
        start_search("linear", Rc::from(values), Value::Int(3))
            .unwrap()
            .runner
    }

    #[test]
    fn test_panel_before_start() {
        let runner = runner();
        assert_eq!(
            algorithm_panel(&runner),
            "Algorithm: Linear Search  [O(n)]\nStep 0\n\n\
             Controls: Space/N=Next  P=Prev  R=Reset  Esc=Exit"
        );
    }

    #[test]
    fn test_panel_shows_status_when_complete() {
        let mut runner = runner();
        runner.run_to_end();
        let panel = algorithm_panel(&runner);
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines[0], "Algorithm: Linear Search  [O(n)]");
        assert!(lines[1].starts_with("Step "));
        assert_eq!(lines[2], "Status: FOUND at index 1");
        assert_eq!(lines[4], runner.current().unwrap().action);
    }

    #[test]
    fn test_step_diagram_carries_markers() {
        let mut runner = runner();
        let step = runner.advance().unwrap().clone();
        let diagram = render_step(&step);
        assert!(diagram.contains("→0"));
    }
}
