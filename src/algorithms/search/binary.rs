use super::SearchState;
use crate::algorithms::types::AlgorithmStep;
use crate::memory::Value;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Start,
    /// Pick the midpoint of the active range, if any remains
    Probe(Option<(usize, usize)>),
    /// Compare the midpoint of `(low, high)` against the target
    Decide { low: usize, high: usize, mid: usize },
}

/// Halves a sorted range each round
///
/// A match that is not at the low end of the range becomes a candidate and
/// the search continues left, so duplicates report their first index.
#[derive(Debug)]
pub struct BinarySearch {
    state: SearchState,
    phase: Phase,
    leftmost: Option<usize>,
}

impl BinarySearch {
    pub fn new(arr: Rc<[Value]>, target: Value) -> Self {
        BinarySearch {
            state: SearchState::new(arr, target),
            phase: Phase::Start,
            leftmost: None,
        }
    }
}

impl Iterator for BinarySearch {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        let s = &mut self.state;
        if s.steps.is_finished() {
            return None;
        }
        let range = match self.phase {
            Phase::Start if s.len() == 0 => return Some(s.empty()),
            Phase::Start => Some((0, s.len() - 1)),
            Phase::Probe(range) => range,
            Phase::Decide { low, high, mid } => {
                s.visited.insert(mid);
                // Everything left of `low` is below the target
                if s.matches(mid) && mid == low {
                    return Some(s.found(mid, Some((low, high))));
                }
                let comparing = s.visited().current([mid]).comparing([mid]).boundaries(low, high);
                let step = if s.matches(mid) {
                    self.leftmost = Some(mid);
                    self.phase = Phase::Probe(Some((low, mid - 1)));
                    let action = format!(
                        "arr[{}]={} == {}, look left for an earlier match",
                        mid,
                        s.value_repr(mid),
                        s.target_repr()
                    );
                    s.steps.step(action, comparing.eliminated(mid + 1..=high))
                } else if s.below_target(mid) {
                    self.phase = Phase::Probe((mid < high).then_some((mid + 1, high)));
                    let action = format!(
                        "arr[{}]={} < {}, search right half",
                        mid,
                        s.value_repr(mid),
                        s.target_repr()
                    );
                    s.steps.step(action, comparing.eliminated(low..=mid))
                } else {
                    self.phase = Phase::Probe((mid > low).then(|| (low, mid - 1)));
                    let action = format!(
                        "arr[{}]={} > {}, search left half",
                        mid,
                        s.value_repr(mid),
                        s.target_repr()
                    );
                    s.steps.step(action, comparing.eliminated(mid..=high))
                };
                return Some(step);
            }
        };

        let Some((low, high)) = range else {
            return Some(match self.leftmost {
                Some(index) => s.found(index, None),
                None => s.not_found(),
            });
        };
        let mid = (low + high) / 2;
        self.phase = Phase::Decide { low, high, mid };
        let action = format!("Search range: [{}..{}], mid = {}", low, high, mid);
        let highlights = s.visited().current([mid]).boundaries(low, high);
        Some(s.steps.step(action, highlights))
    }
}
