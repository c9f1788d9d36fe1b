use super::SearchState;
use crate::algorithms::types::AlgorithmStep;
use crate::highlight::HighlightContext;
use crate::memory::Value;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Start,
    Examine(usize),
    Compare(usize),
}

/// Scans left to right, one examine step and one compare step per index
#[derive(Debug)]
pub struct LinearSearch {
    state: SearchState,
    phase: Phase,
}

impl LinearSearch {
    pub fn new(arr: Rc<[Value]>, target: Value) -> Self {
        LinearSearch {
            state: SearchState::new(arr, target),
            phase: Phase::Start,
        }
    }
}

impl Iterator for LinearSearch {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        let s = &mut self.state;
        if s.steps.is_finished() {
            return None;
        }
        match self.phase {
            Phase::Start if s.len() == 0 => Some(s.empty()),
            Phase::Start | Phase::Examine(_) => {
                let i = match self.phase {
                    Phase::Examine(i) => i,
                    _ => 0,
                };
                if i >= s.len() {
                    return Some(s.not_found());
                }
                let action = format!("Examine index {}: arr[{}] = {}", i, i, s.value_repr(i));
                let highlights = s.visited().current([i]);
                self.phase = Phase::Compare(i);
                Some(s.steps.step(action, highlights))
            }
            Phase::Compare(i) => {
                s.visited.insert(i);
                if s.matches(i) {
                    return Some(s.found(i, None));
                }
                let action = format!(
                    "Compare: {} != {}, continue",
                    s.value_repr(i),
                    s.target_repr()
                );
                let highlights = s.visited().current([i]).comparing([i]);
                self.phase = Phase::Examine(i + 1);
                Some(s.steps.step(action, highlights))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::search::ints;
    use crate::algorithms::types::StepResult;

    #[test]
    fn test_finds_first_occurrence() {
        let steps: Vec<_> = LinearSearch::new(ints(&[10, 20, 30, 20, 40]), Value::Int(20)).collect();
        let actions: Vec<&str> = steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            [
                "Examine index 0: arr[0] = 10",
                "Compare: 10 != 20, continue",
                "Examine index 1: arr[1] = 20",
                "Found 20 at index 1!",
            ]
        );
        let last = steps.last().unwrap();
        assert!(last.is_complete);
        assert_eq!(last.result, Some(StepResult::Index(1)));
        let highlights = last.highlights.as_array().unwrap();
        assert_eq!(highlights.found.iter().copied().collect::<Vec<_>>(), [1]);
        assert_eq!(highlights.visited.iter().copied().collect::<Vec<_>>(), [0, 1]);
    }

    #[test]
    fn test_examine_step_shows_state_before_comparison() {
        let mut search = LinearSearch::new(ints(&[5, 6]), Value::Int(9));
        search.next();
        search.next();
        let examine = search.next().unwrap();
        let highlights = examine.highlights.as_array().unwrap();
        assert!(highlights.current.contains(&1));
        assert!(!highlights.visited.contains(&1));
        assert!(highlights.visited.contains(&0));
    }

    #[test]
    fn test_miss_and_empty() {
        let steps: Vec<_> = LinearSearch::new(ints(&[1, 2]), Value::str("x")).collect();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[4].action, "'x' not found in array");
        assert_eq!(steps[4].result, Some(StepResult::NotFound));

        let steps: Vec<_> = LinearSearch::new(ints(&[]), Value::Int(1)).collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].action, "Array is empty, 1 not found");
        assert!(steps[0].highlights.is_empty());
    }
}
