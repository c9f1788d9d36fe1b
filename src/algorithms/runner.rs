//! Step navigation
//!
//! [`AlgorithmRunner`] wraps a step generator with a cursor. Steps are pulled
//! from the generator only when the cursor moves past everything collected
//! so far; rewinding and resetting replay collected steps without touching
//! the generator again.
//!
//! ```text
//! collected:  [s1] [s2] [s3]  | generator (open or exhausted)
//! cursor:  ^None   ^0   ^1   ^2
//! ```

use super::types::AlgorithmStep;
use std::fmt;

pub type StepGenerator = Box<dyn Iterator<Item = AlgorithmStep>>;

pub struct AlgorithmRunner {
    name: String,
    steps: Vec<AlgorithmStep>,
    /// Index of the current step; `None` before the first step
    cursor: Option<usize>,
    generator: Option<StepGenerator>,
}

impl AlgorithmRunner {
    /// Runner that collects steps lazily from `generator`
    pub fn from_generator(name: impl Into<String>, generator: StepGenerator) -> Self {
        AlgorithmRunner {
            name: name.into(),
            steps: Vec::new(),
            cursor: None,
            generator: Some(generator),
        }
    }

    /// Runner over an already computed sequence
    pub fn from_steps(name: impl Into<String>, steps: Vec<AlgorithmStep>) -> Self {
        AlgorithmRunner {
            name: name.into(),
            steps,
            cursor: None,
            generator: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Move forward one step, pulling from the generator when needed
    pub fn advance(&mut self) -> Option<&AlgorithmStep> {
        let next = self.cursor.map_or(0, |index| index + 1);
        if next >= self.steps.len() {
            let generator = self.generator.as_mut()?;
            match generator.next() {
                Some(step) => self.steps.push(step),
                None => {
                    log::debug!(
                        "{} exhausted after {} steps",
                        self.name,
                        self.steps.len()
                    );
                    self.generator = None;
                    return None;
                }
            }
        }
        self.cursor = Some(next);
        self.steps.get(next)
    }

    /// Move back one step; moving back to the start returns `None`
    pub fn rewind(&mut self) -> Option<&AlgorithmStep> {
        let index = self.cursor?;
        self.cursor = index.checked_sub(1);
        self.current()
    }

    /// Return to the not-started position, keeping collected steps
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn current(&self) -> Option<&AlgorithmStep> {
        self.steps.get(self.cursor?)
    }

    pub fn is_complete(&self) -> bool {
        if self.current().is_some_and(|step| step.is_complete) {
            return true;
        }
        self.generator.is_none()
            && !self.steps.is_empty()
            && self.cursor == Some(self.steps.len() - 1)
    }

    /// Number of steps, known once the generator is exhausted
    pub fn total_steps(&self) -> Option<usize> {
        match self.generator {
            Some(_) => None,
            None => Some(self.steps.len()),
        }
    }

    /// 1-based number of the current step, 0 before the first
    pub fn step_number(&self) -> usize {
        self.cursor.map_or(0, |index| index + 1)
    }

    /// Whether the cursor is at the not-started position
    pub fn at_start(&self) -> bool {
        self.cursor.is_none()
    }

    /// Advance until a complete step or exhaustion, returning how many
    /// steps were taken
    pub fn run_to_end(&mut self) -> usize {
        let mut taken = 0;
        while !self.is_complete() && self.advance().is_some() {
            taken += 1;
        }
        taken
    }
}

impl fmt::Debug for AlgorithmRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRunner")
            .field("name", &self.name)
            .field("collected", &self.steps.len())
            .field("cursor", &self.cursor)
            .field("generator_open", &self.generator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::search::{ints, LinearSearch};
    use crate::memory::Value;

    fn three_steps() -> AlgorithmRunner {
        // [7] miss: examine, compare, not found
        let search = LinearSearch::new(ints(&[7]), Value::Int(1));
        AlgorithmRunner::from_generator("Linear Search", Box::new(search))
    }

    #[test]
    fn test_total_unknown_until_exhausted() {
        let mut runner = three_steps();
        assert_eq!(runner.total_steps(), None);
        assert_eq!(runner.step_number(), 0);
        for expected in 1..=3 {
            assert_eq!(runner.advance().map(|s| s.step_number), Some(expected));
        }
        assert!(runner.is_complete());
        assert_eq!(runner.total_steps(), None);
        assert!(runner.advance().is_none());
        assert_eq!(runner.total_steps(), Some(3));
        assert!(runner.advance().is_none());
        assert_eq!(runner.step_number(), 3);
    }

    #[test]
    fn test_rewind_to_start_returns_none() {
        let mut runner = three_steps();
        runner.advance();
        runner.advance();
        assert_eq!(runner.rewind().map(|s| s.step_number), Some(1));
        assert!(runner.rewind().is_none());
        assert!(runner.at_start());
        assert!(runner.rewind().is_none());
        assert_eq!(runner.advance().map(|s| s.step_number), Some(1));
    }

    #[test]
    fn test_reset_replays_collected_steps() {
        let mut runner = three_steps();
        let first = runner.advance().cloned();
        runner.advance();
        runner.reset();
        assert!(runner.current().is_none());
        assert_eq!(runner.advance().cloned(), first);
    }

    #[test]
    fn test_from_steps_knows_total() {
        let steps: Vec<_> = LinearSearch::new(ints(&[]), Value::Int(1)).collect();
        let mut runner = AlgorithmRunner::from_steps("Linear Search", steps);
        assert_eq!(runner.total_steps(), Some(1));
        assert!(!runner.is_complete());
        runner.advance();
        assert!(runner.is_complete());
        assert_eq!(runner.run_to_end(), 0);
    }
}
