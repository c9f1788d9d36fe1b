use super::SearchState;
use crate::algorithms::types::AlgorithmStep;
use crate::memory::Value;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Start,
    Head,
    Expand(usize),
    Probe(Option<(usize, usize)>),
    Decide { low: usize, high: usize, mid: usize },
}

/// Doubles a bound until it passes the target, then binary searches
/// `[bound / 2, min(bound, n - 1)]`
#[derive(Debug)]
pub struct ExponentialSearch {
    state: SearchState,
    phase: Phase,
    /// Match waiting on the rest of the range to its left
    leftmost: Option<usize>,
}

impl ExponentialSearch {
    pub fn new(arr: Rc<[Value]>, target: Value) -> Self {
        ExponentialSearch {
            state: SearchState::new(arr, target),
            phase: Phase::Start,
            leftmost: None,
        }
    }
}

impl Iterator for ExponentialSearch {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        let s = &mut self.state;
        if s.steps.is_finished() {
            return None;
        }
        let n = s.len();
        let step = match self.phase {
            Phase::Start if n == 0 => s.empty(),
            Phase::Start => {
                s.visited.insert(0);
                self.phase = Phase::Head;
                let action = format!("Check index 0: arr[0]={}", s.value_repr(0));
                let highlights = s.visited().current([0]);
                s.steps.step(action, highlights)
            }
            Phase::Head if s.matches(0) => s.found(0, None),
            Phase::Head => {
                self.phase = Phase::Expand(1);
                let highlights = s.visited();
                s.steps
                    .step("Starting exponential range expansion".to_string(), highlights)
            }
            Phase::Expand(bound) if bound < n && s.below_target(bound) => {
                s.visited.insert(bound);
                self.phase = Phase::Expand(bound * 2);
                let action = format!(
                    "Expand: bound={}, arr[{}]={} < {}",
                    bound,
                    bound,
                    s.value_repr(bound),
                    s.target_repr()
                );
                let highlights = s
                    .visited()
                    .current([bound])
                    .boundaries(bound / 2, bound.min(n - 1));
                s.steps.step(action, highlights)
            }
            Phase::Expand(bound) => {
                let (low, high) = (bound / 2, bound.min(n - 1));
                self.phase = Phase::Probe((low <= high).then_some((low, high)));
                let action = format!("Binary search in range [{}..{}]", low, high);
                let highlights = s.visited().boundaries(low, high);
                s.steps.step(action, highlights)
            }
            Phase::Probe(None) => match self.leftmost {
                Some(index) => s.found(index, None),
                None => s.not_found(),
            },
            Phase::Probe(Some((low, high))) => {
                let mid = (low + high) / 2;
                s.visited.insert(mid);
                self.phase = Phase::Decide { low, high, mid };
                let action = format!("Binary: range [{}..{}], mid={}", low, high, mid);
                let highlights = s.visited().current([mid]).boundaries(low, high);
                s.steps.step(action, highlights)
            }
            // Below `low` every value is smaller than the target
            Phase::Decide { low, high, mid } if s.matches(mid) && mid == low => {
                s.found(mid, Some((low, high)))
            }
            Phase::Decide { low, high, mid } => {
                let highlights = s
                    .visited()
                    .current([mid])
                    .comparing([mid])
                    .boundaries(low, high);
                let (direction, sign) = if s.matches(mid) {
                    self.leftmost = Some(mid);
                    self.phase = Phase::Probe(Some((low, mid - 1)));
                    ("left for an earlier match", "==")
                } else if s.below_target(mid) {
                    self.phase = Phase::Probe((mid < high).then_some((mid + 1, high)));
                    ("right", "<")
                } else {
                    self.phase = Phase::Probe((mid > low).then(|| (low, mid - 1)));
                    ("left", ">")
                };
                let action = format!(
                    "arr[{}]={} {} {}, search {}",
                    mid,
                    s.value_repr(mid),
                    sign,
                    s.target_repr(),
                    direction
                );
                s.steps.step(action, highlights)
            }
        };
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::search::ints;
    use crate::algorithms::types::StepResult;

    #[test]
    fn test_expand_then_binary() {
        let steps: Vec<_> =
            ExponentialSearch::new(ints(&[2, 4, 8, 16, 32, 64, 128, 256]), Value::Int(32)).collect();
        let actions: Vec<&str> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            [
                "Check index 0: arr[0]=2",
                "Starting exponential range expansion",
                "Expand: bound=1, arr[1]=4 < 32",
                "Expand: bound=2, arr[2]=8 < 32",
                "Binary search in range [2..4]",
                "Binary: range [2..4], mid=3",
                "arr[3]=16 < 32, search right",
                "Binary: range [4..4], mid=4",
                "Found 32 at index 4!",
            ]
        );
        assert_eq!(steps.last().unwrap().result, Some(StepResult::Index(4)));
    }

    #[test]
    fn test_head_hit_is_two_steps() {
        let steps: Vec<_> = ExponentialSearch::new(ints(&[3, 4]), Value::Int(3)).collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].action, "Found 3 at index 0!");
    }

    #[test]
    fn test_duplicates_inside_final_range() {
        let arr = ints(&[0, 0, 0, 0, 1, 2, 2, 2, 2]);
        let steps: Vec<_> = ExponentialSearch::new(arr, Value::Int(2)).collect();
        let actions: Vec<&str> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            &actions[5..],
            [
                "Binary search in range [4..8]",
                "Binary: range [4..8], mid=6",
                "arr[6]=2 == 2, search left for an earlier match",
                "Binary: range [4..5], mid=4",
                "arr[4]=1 < 2, search right",
                "Binary: range [5..5], mid=5",
                "Found 2 at index 5!",
            ]
        );
        assert_eq!(steps.last().unwrap().result, Some(StepResult::Index(5)));
    }
}
