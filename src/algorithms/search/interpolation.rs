use super::SearchState;
use crate::algorithms::types::AlgorithmStep;
use crate::memory::Value;
use std::cmp::Ordering;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Start,
    Probe(Option<(usize, usize)>),
    Decide { low: usize, high: usize, pos: usize },
    /// `pos` matches; walk left over equal values
    Scan { low: usize, high: usize, pos: usize },
}

/// Estimates the target position from the values at the range ends
///
/// The loop only continues while `arr[low] <= target <= arr[high]`. Values
/// that are not numbers estimate `low`. A hit scans left over duplicates so
/// the first index is reported.
#[derive(Debug)]
pub struct InterpolationSearch {
    state: SearchState,
    phase: Phase,
}

impl InterpolationSearch {
    pub fn new(arr: Rc<[Value]>, target: Value) -> Self {
        InterpolationSearch {
            state: SearchState::new(arr, target),
            phase: Phase::Start,
        }
    }
}

fn at_most(a: &Value, b: &Value) -> bool {
    matches!(a.compare(b), Some(Ordering::Less | Ordering::Equal))
}

/// Interpolated probe position, clamped into `[low, high]`
fn estimate(arr: &[Value], target: &Value, low: usize, high: usize) -> usize {
    if arr[high].equals(&arr[low]) {
        return low;
    }
    let numbers = (
        target.as_number(),
        arr[low].as_number(),
        arr[high].as_number(),
    );
    let (Some(t), Some(lo), Some(hi)) = numbers else {
        return low;
    };
    let offset = ((t - lo) * (high - low) as f64 / (hi - lo)).trunc();
    if !offset.is_finite() || offset <= 0.0 {
        return low;
    }
    (low + offset as usize).min(high)
}

impl Iterator for InterpolationSearch {
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
            Phase::Decide { low, high, pos } | Phase::Scan { low, high, pos }
                if s.matches(pos) =>
            {
                // Values left of `low` are all below the target
                if pos == low || !s.matches(pos - 1) {
                    return Some(s.found(pos, Some((low, high))));
                }
                s.visited.insert(pos - 1);
                self.phase = Phase::Scan { low, high, pos: pos - 1 };
                let action = format!(
                    "arr[{}]={} also equals {}, scan left",
                    pos - 1,
                    s.value_repr(pos - 1),
                    s.target_repr()
                );
                let highlights = s
                    .visited()
                    .current([pos - 1])
                    .comparing([pos])
                    .boundaries(low, high);
                return Some(s.steps.step(action, highlights));
            }
            Phase::Decide { low, high, pos } | Phase::Scan { low, high, pos } => {
                let highlights = s
                    .visited()
                    .current([pos])
                    .comparing([pos])
                    .boundaries(low, high);
                let (direction, sign) = if s.below_target(pos) {
                    self.phase = Phase::Probe((pos < high).then_some((pos + 1, high)));
                    ("right", '<')
                } else {
                    self.phase = Phase::Probe((pos > low).then(|| (low, pos - 1)));
                    ("left", '>')
                };
                let action = format!(
                    "arr[{}]={} {} {}, search {}",
                    pos,
                    s.value_repr(pos),
                    sign,
                    s.target_repr(),
                    direction
                );
                return Some(s.steps.step(action, highlights));
            }
        };

        let bounded = range.filter(|&(low, high)| {
            at_most(&s.arr[low], &s.target) && at_most(&s.target, &s.arr[high])
        });
        let Some((low, high)) = bounded else {
            return Some(s.not_found());
        };
        let pos = estimate(&s.arr, &s.target, low, high);
        let action = format!("Range [{}..{}], interpolated pos = {}", low, high, pos);
        let highlights = s.visited().current([pos]).boundaries(low, high);
        s.visited.insert(pos);
        self.phase = Phase::Decide { low, high, pos };
        Some(s.steps.step(action, highlights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::search::ints;
    use crate::algorithms::types::StepResult;

    #[test]
    fn test_uniform_data_hits_first_probe() {
        let steps: Vec<_> =
            InterpolationSearch::new(ints(&[10, 20, 30, 40, 50]), Value::Int(40)).collect();
        let actions: Vec<&str> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            ["Range [0..4], interpolated pos = 3", "Found 40 at index 3!"]
        );
        assert_eq!(steps[1].result, Some(StepResult::Index(3)));
    }

    #[test]
    fn test_out_of_range_target_ends_immediately() {
        let steps: Vec<_> = InterpolationSearch::new(ints(&[1, 2, 3]), Value::Int(9)).collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].action, "9 not found in array");
    }

    #[test]
    fn test_equal_ends_do_not_divide_by_zero() {
        assert_eq!(estimate(&ints(&[4, 4, 4]), &Value::Int(4), 0, 2), 0);
        let steps: Vec<_> = InterpolationSearch::new(ints(&[4, 4, 4]), Value::Int(4)).collect();
        assert_eq!(steps.last().unwrap().result, Some(StepResult::Index(0)));
    }

    #[test]
    fn test_skewed_data_searches_right() {
        let steps: Vec<_> =
            InterpolationSearch::new(ints(&[1, 2, 3, 4, 100]), Value::Int(4)).collect();
        assert_eq!(steps[0].action, "Range [0..4], interpolated pos = 0");
        assert_eq!(steps[1].action, "arr[0]=1 < 4, search right");
        assert_eq!(steps.last().unwrap().result, Some(StepResult::Index(3)));
    }

    #[test]
    fn test_duplicates_scan_back_to_first_index() {
        let arr = ints(&[1, 2, 2, 3, 3, 3, 4, 4, 4, 4]);
        let steps: Vec<_> = InterpolationSearch::new(arr, Value::Int(3)).collect();
        let actions: Vec<&str> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            [
                "Range [0..9], interpolated pos = 6",
                "arr[6]=4 > 3, search left",
                "Range [0..5], interpolated pos = 5",
                "arr[4]=3 also equals 3, scan left",
                "arr[3]=3 also equals 3, scan left",
                "Found 3 at index 3!",
            ]
        );

        let steps: Vec<_> =
            InterpolationSearch::new(ints(&[1, 2, 2, 2, 3]), Value::Int(2)).collect();
        let actions: Vec<&str> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            [
                "Range [0..4], interpolated pos = 2",
                "arr[1]=2 also equals 2, scan left",
                "Found 2 at index 1!",
            ]
        );
        assert_eq!(steps[2].result, Some(StepResult::Index(1)));
    }
}
