use super::SearchState;
use crate::algorithms::types::AlgorithmStep;
use crate::highlight::HighlightContext;
use crate::memory::Value;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Start,
    Jump { prev: usize, curr: usize },
    Scan { index: usize, start: usize, end: usize },
    Verdict { index: usize, start: usize, end: usize },
}

/// Jumps ahead by `⌊√n⌋` until passing the target, then scans the block
///
/// The block scanned after the jumps includes the index the last jump
/// stopped on, so a target sitting exactly on a jump point is found.
#[derive(Debug)]
pub struct JumpSearch {
    state: SearchState,
    jump: usize,
    phase: Phase,
}

impl JumpSearch {
    pub fn new(arr: Rc<[Value]>, target: Value) -> Self {
        let jump = (arr.len() as f64).sqrt() as usize;
        JumpSearch {
            state: SearchState::new(arr, target),
            jump,
            phase: Phase::Start,
        }
    }
}

impl Iterator for JumpSearch {
    type Item = AlgorithmStep;

    fn next(&mut self) -> Option<AlgorithmStep> {
        let s = &mut self.state;
        if s.steps.is_finished() {
            return None;
        }
        let n = s.len();
        let jump = self.jump;
        loop {
            match self.phase {
                Phase::Start if n == 0 => return Some(s.empty()),
                Phase::Start => {
                    self.phase = Phase::Jump { prev: 0, curr: 0 };
                    let action = format!("Array size: {}, jump size: √{} = {}", n, n, jump);
                    return Some(s.steps.step(action, HighlightContext::new()));
                }
                Phase::Jump { prev, curr } if curr < n && s.below_target(curr) => {
                    s.visited.insert(curr);
                    let action = format!(
                        "Jump to index {}: arr[{}]={} < {}",
                        curr,
                        curr,
                        s.value_repr(curr),
                        s.target_repr()
                    );
                    let highlights = s
                        .visited()
                        .current([curr])
                        .boundaries(prev, (curr + jump - 1).min(n - 1));
                    self.phase = Phase::Jump {
                        prev: curr,
                        curr: (curr + jump).min(n),
                    };
                    return Some(s.steps.step(action, highlights));
                }
                Phase::Jump { prev, curr } => {
                    let (start, end) = if prev == curr {
                        (0, jump.min(n) - 1)
                    } else {
                        (prev, curr.min(n - 1))
                    };
                    self.phase = Phase::Scan { index: start, start, end };
                    let action =
                        format!("Target may be in block [{}..{}], linear search", start, end);
                    let highlights = s.visited().boundaries(start, end);
                    return Some(s.steps.step(action, highlights));
                }
                Phase::Scan { index, end, .. } if index > end => return Some(s.not_found()),
                Phase::Scan { index, start, end } => {
                    s.visited.insert(index);
                    let action = format!("Check index {}: arr[{}]={}", index, index, s.value_repr(index));
                    let highlights = s
                        .visited()
                        .current([index])
                        .comparing([index])
                        .boundaries(start, end);
                    self.phase = Phase::Verdict { index, start, end };
                    return Some(s.steps.step(action, highlights));
                }
                Phase::Verdict { index, .. } if s.matches(index) => {
                    return Some(s.found(index, None));
                }
                Phase::Verdict { index, .. } if s.target.less_than(&s.arr[index]) => {
                    return Some(s.not_found());
                }
                Phase::Verdict { index, start, end } => {
                    self.phase = Phase::Scan {
                        index: index + 1,
                        start,
                        end,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::search::ints;
    use crate::algorithms::types::StepResult;

    fn actions(arr: &[i64], target: i64) -> Vec<String> {
        JumpSearch::new(ints(arr), Value::Int(target))
            .map(|step| step.action)
            .collect()
    }

    #[test]
    fn test_jumps_then_scans_block() {
        assert_eq!(
            actions(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 13),
            [
                "Array size: 9, jump size: √9 = 3",
                "Jump to index 0: arr[0]=1 < 13",
                "Jump to index 3: arr[3]=7 < 13",
                "Target may be in block [3..6], linear search",
                "Check index 3: arr[3]=7",
                "Check index 4: arr[4]=9",
                "Check index 5: arr[5]=11",
                "Check index 6: arr[6]=13",
                "Found 13 at index 6!",
            ]
        );
    }

    #[test]
    fn test_target_on_jump_point_is_found() {
        let steps: Vec<_> = JumpSearch::new(ints(&[1, 2, 3, 4]), Value::Int(3)).collect();
        let last = steps.last().unwrap();
        assert_eq!(last.result, Some(StepResult::Index(2)));
    }

    #[test]
    fn test_no_jump_uses_first_block() {
        let found = actions(&[5, 6, 7, 8], 5);
        assert_eq!(found[1], "Target may be in block [0..1], linear search");
        assert_eq!(found.last().unwrap(), "Found 5 at index 0!");

        let missed = actions(&[5, 6, 7, 8], 1);
        assert_eq!(missed.len(), 4);
        assert_eq!(missed[3], "1 not found in array");
    }

    #[test]
    fn test_past_the_end_clamps_block() {
        let missed = actions(&[1, 2, 3, 4], 10);
        assert!(missed.contains(&"Target may be in block [2..3], linear search".to_string()));
        assert_eq!(missed.last().unwrap(), "10 not found in array");
    }
}
