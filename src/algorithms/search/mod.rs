//! Array search algorithms
//!
//! | Key             | Generator                                   | Requires sorted |
//! |-----------------|---------------------------------------------|-----------------|
//! | `linear`        | [`LinearSearch`]                            | no              |
//! | `binary`        | [`BinarySearch`]                            | yes             |
//! | `jump`          | [`JumpSearch`]                              | yes             |
//! | `interpolation` | [`InterpolationSearch`]                     | yes, numeric    |
//! | `exponential`   | [`ExponentialSearch`]                       | yes             |
//!
//! Each generator is an iterator over [`AlgorithmStep`]s that does its work
//! lazily, one step per `next()`. All of them share the same edge policies:
//! an empty array yields a single terminal step with no highlights, and an
//! exhausted search ends with `'{target}' not found in array`.

mod binary;
mod exponential;
mod interpolation;
mod jump;
mod linear;

pub use binary::BinarySearch;
pub use exponential::ExponentialSearch;
pub use interpolation::InterpolationSearch;
pub use jump::JumpSearch;
pub use linear::LinearSearch;

use super::types::{AlgorithmStep, StepCounter, StepData, StepResult};
use crate::highlight::HighlightContext;
use crate::memory::Value;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Inputs shared by every array search
#[derive(Debug)]
struct SearchState {
    arr: Rc<[Value]>,
    target: Value,
    steps: StepCounter,
    visited: BTreeSet<usize>,
}

impl SearchState {
    fn new(arr: Rc<[Value]>, target: Value) -> Self {
        SearchState {
            steps: StepCounter::new(StepData::Array(Rc::clone(&arr))),
            arr,
            target,
            visited: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.arr.len()
    }

    fn target_repr(&self) -> String {
        self.target.repr()
    }

    fn value_repr(&self, index: usize) -> String {
        self.arr[index].repr()
    }

    fn matches(&self, index: usize) -> bool {
        self.arr[index].equals(&self.target)
    }

    fn below_target(&self, index: usize) -> bool {
        self.arr[index].less_than(&self.target)
    }

    fn visited(&self) -> HighlightContext {
        HighlightContext::new().visited(self.visited.iter().copied())
    }

    fn empty(&mut self) -> AlgorithmStep {
        let action = format!("Array is empty, {} not found", self.target_repr());
        self.steps
            .finish(action, HighlightContext::new(), StepResult::NotFound)
    }

    fn found(&mut self, index: usize, boundaries: Option<(usize, usize)>) -> AlgorithmStep {
        let action = format!("Found {} at index {}!", self.target_repr(), index);
        let mut highlights = self.visited().found([index]);
        highlights.boundaries = boundaries;
        self.steps
            .finish(action, highlights, StepResult::Index(index))
    }

    fn not_found(&mut self) -> AlgorithmStep {
        let action = format!("{} not found in array", self.target_repr());
        let highlights = self.visited();
        self.steps.finish(action, highlights, StepResult::NotFound)
    }
}

/// Shorthand used by the per-algorithm tests
#[cfg(test)]
pub(crate) fn ints(values: &[i64]) -> Rc<[Value]> {
    values.iter().map(|v| Value::Int(*v)).collect()
}
