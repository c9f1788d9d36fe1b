// Integration tests for step navigation

use std::rc::Rc;

use dsaviz::algorithms::{AlgorithmRunner, AlgorithmStep, Highlights, StepData, StepResult};
use dsaviz::highlight::HighlightContext;
use dsaviz::memory::Value;

fn steps(count: usize) -> Vec<AlgorithmStep> {
    let data = StepData::Array(Rc::from(vec![Value::Int(7)]));
    (1..=count)
        .map(|number| AlgorithmStep {
            step_number: number,
            action: format!("step {}", number),
            highlights: Highlights::Array(HighlightContext::new().current([0])),
            data: data.clone(),
            is_complete: number == count,
            result: (number == count).then_some(StepResult::Index(0)),
        })
        .collect()
}

fn lazy_runner(count: usize) -> AlgorithmRunner {
    AlgorithmRunner::from_generator("Test", Box::new(steps(count).into_iter()))
}

fn action(step: Option<&AlgorithmStep>) -> Option<&str> {
    step.map(|step| step.action.as_str())
}

#[test]
fn test_rewind_after_three_advances() {
    let mut runner = lazy_runner(3);
    for _ in 0..3 {
        runner.advance();
    }
    assert_eq!(action(runner.current()), Some("step 3"));
    assert_eq!(action(runner.rewind()), Some("step 2"));
    assert_eq!(action(runner.rewind()), Some("step 1"));
    assert_eq!(action(runner.rewind()), None);
    assert!(runner.at_start());
    assert_eq!(action(runner.rewind()), None);
}

#[test]
fn test_reset_replays_first_step() {
    let mut runner = lazy_runner(4);
    let first = runner.advance().cloned();
    runner.advance();
    runner.reset();
    assert_eq!(runner.step_number(), 0);
    assert_eq!(runner.advance().cloned(), first);
}

#[test]
fn test_advance_past_end_is_repeatable() {
    let mut runner = lazy_runner(2);
    runner.advance();
    runner.advance();
    assert!(runner.is_complete());
    assert_eq!(runner.total_steps(), None);
    for _ in 0..3 {
        assert!(runner.advance().is_none());
        assert_eq!(action(runner.current()), Some("step 2"));
    }
    assert_eq!(runner.total_steps(), Some(2));
}

#[test]
fn test_current_is_idempotent() {
    let mut runner = lazy_runner(3);
    runner.advance();
    runner.advance();
    let first = runner.current().cloned();
    for _ in 0..5 {
        assert_eq!(runner.current().cloned(), first);
    }
    assert_eq!(runner.step_number(), 2);
}

#[test]
fn test_precomputed_steps() {
    let mut runner = AlgorithmRunner::from_steps("Eager", steps(2));
    assert_eq!(runner.total_steps(), Some(2));
    assert_eq!(runner.run_to_end(), 2);
    assert_eq!(runner.current().and_then(|step| step.result.clone()), Some(StepResult::Index(0)));
    assert!(runner.advance().is_none());
}

#[test]
fn test_run_to_end_stops_at_terminal_step() {
    let mut runner = lazy_runner(5);
    assert_eq!(runner.run_to_end(), 5);
    assert_eq!(runner.step_number(), 5);
    assert!(runner.is_complete());
}
