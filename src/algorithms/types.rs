//! Step model shared by every algorithm
//!
//! An [`AlgorithmStep`] is one independently renderable frame: the action
//! text, the highlights describing the algorithm state *at* that step, the
//! data being searched, and (on the final step only) the result.

use crate::highlight::{HighlightContext, TreeHighlightContext};
use crate::memory::{ObjId, Value};
use crate::snapshot::TreeSnapshot;
use std::fmt;
use std::rc::Rc;

/// Highlights of one step, by the shape of data it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlights {
    Array(HighlightContext),
    Tree(TreeHighlightContext),
}

impl Highlights {
    pub fn is_empty(&self) -> bool {
        match self {
            Highlights::Array(ctx) => ctx.is_empty(),
            Highlights::Tree(ctx) => ctx.is_empty(),
        }
    }

    pub fn as_array(&self) -> Option<&HighlightContext> {
        match self {
            Highlights::Array(ctx) => Some(ctx),
            Highlights::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TreeHighlightContext> {
        match self {
            Highlights::Tree(ctx) => Some(ctx),
            Highlights::Array(_) => None,
        }
    }
}

impl From<HighlightContext> for Highlights {
    fn from(ctx: HighlightContext) -> Self {
        Highlights::Array(ctx)
    }
}

impl From<TreeHighlightContext> for Highlights {
    fn from(ctx: TreeHighlightContext) -> Self {
        Highlights::Tree(ctx)
    }
}

/// The structure an algorithm runs over, shared by all of its steps
#[derive(Debug, Clone, PartialEq)]
pub enum StepData {
    Array(Rc<[Value]>),
    Tree(Rc<TreeSnapshot>),
}

/// Outcome carried by the terminal step
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// Array search hit, lowest index found
    Index(usize),
    /// Tree search hit
    Node { id: ObjId, value: Value },
    /// Values in visiting order
    Traversal(Vec<Value>),
    NotFound,
}

impl StepResult {
    pub fn is_found(&self) -> bool {
        matches!(self, StepResult::Index(_) | StepResult::Node { .. })
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepResult::Index(index) => write!(f, "FOUND at index {}", index),
            StepResult::Node { value, .. } => write!(f, "FOUND node {}", value),
            StepResult::Traversal(_) => write!(f, "COMPLETE"),
            StepResult::NotFound => write!(f, "NOT FOUND"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmStep {
    /// 1-based position in the sequence
    pub step_number: usize,
    pub action: String,
    pub highlights: Highlights,
    pub data: StepData,
    pub is_complete: bool,
    pub result: Option<StepResult>,
}

/// Step numbering and the shared data handle of one generator
///
/// Every generator owns one; it hands out consecutive step numbers and
/// remembers once the terminal step has been produced.
#[derive(Debug)]
pub(crate) struct StepCounter {
    data: StepData,
    produced: usize,
    finished: bool,
}

impl StepCounter {
    pub(crate) fn new(data: StepData) -> Self {
        StepCounter {
            data,
            produced: 0,
            finished: false,
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    /// A non-terminal step
    pub(crate) fn step(
        &mut self,
        action: String,
        highlights: impl Into<Highlights>,
    ) -> AlgorithmStep {
        self.produced += 1;
        AlgorithmStep {
            step_number: self.produced,
            action,
            highlights: highlights.into(),
            data: self.data.clone(),
            is_complete: false,
            result: None,
        }
    }

    /// The terminal step; nothing may follow it
    pub(crate) fn finish(
        &mut self,
        action: String,
        highlights: impl Into<Highlights>,
        result: StepResult,
    ) -> AlgorithmStep {
        let mut step = self.step(action, highlights);
        step.is_complete = true;
        step.result = Some(result);
        self.finished = true;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_numbers_from_one() {
        let mut counter = StepCounter::new(StepData::Array(Rc::from(vec![Value::Int(1)])));
        let first = counter.step("a".into(), HighlightContext::new());
        let last = counter.finish("b".into(), HighlightContext::new(), StepResult::NotFound);
        assert_eq!(first.step_number, 1);
        assert!(!first.is_complete);
        assert_eq!(last.step_number, 2);
        assert!(last.is_complete);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_result_status_text() {
        assert_eq!(StepResult::Index(3).to_string(), "FOUND at index 3");
        assert_eq!(StepResult::NotFound.to_string(), "NOT FOUND");
        assert!(!StepResult::Traversal(vec![]).is_found());
    }
}
