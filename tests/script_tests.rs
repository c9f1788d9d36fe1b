// End-to-end tests: scripts submitted to a session

use dsaviz::algorithms::{overview, StepResult};
use dsaviz::headless;
use dsaviz::script::{classify_buffer, BufferStatus};
use dsaviz::session::{Session, Submission, NO_CHANGES};

#[test]
fn test_examples_feed_a_search() {
    let mut session = Session::new();
    session.submit("data = EXAMPLES['arrays']['medium']", false);
    session.submit("msg = search('exponential', data, 64)", false);
    let cell = &session.cells()[1];
    assert!(cell.ok, "{:?}", cell.error);

    let mut pending = session.take_pending().expect("search registers an algorithm");
    assert_eq!(pending.runner.name(), "Exponential Search");
    pending.runner.run_to_end();
    let last = pending.runner.current().unwrap();
    assert_eq!(last.result, Some(StepResult::Index(5)));
    assert!(session.take_pending().is_none());
}

#[test]
fn test_tree_search_accepts_tree_or_node() {
    let mut session = Session::new();
    session.submit("t = BinaryTree(EXAMPLES['trees']['balanced'])", false);
    session.submit("tree_search('bfs', t, 37)", false);
    let mut pending = session.take_pending().unwrap();
    pending.runner.run_to_end();
    assert_eq!(
        pending.runner.current().unwrap().result.as_ref().map(ToString::to_string),
        Some("FOUND node 37".to_string())
    );

    session.submit("tree_traverse('dfs', t.root)", false);
    let mut pending = session.take_pending().unwrap();
    pending.runner.run_to_end();
    assert_eq!(
        pending.runner.current().unwrap().action,
        "DFS traversal complete. Order: [50, 25, 12, 37, 75, 62, 87]"
    );
}

#[test]
fn test_failed_cell_starts_nothing() {
    let mut session = Session::new();
    let submission = session.submit("search('nope', [1], 1)", false);
    assert_eq!(submission, Submission::Recorded(0));
    let cell = &session.cells()[0];
    assert!(!cell.ok);
    assert_eq!(
        cell.error.as_deref(),
        Some("Unknown algorithm: 'nope'. Available: binary, exponential, interpolation, jump, linear")
    );
    assert!(session.take_pending().is_none());
}

#[test]
fn test_print_shows_in_cell_without_diagram_change() {
    let mut session = Session::new();
    session.submit("print(algo_help())", false);
    let cell = &session.cells()[0];
    assert_eq!(cell.output, vec![overview()]);
    assert_eq!(cell.snapshot_text.as_deref(), Some(NO_CHANGES));
}

#[test]
fn test_user_class_method_without_body() {
    let mut session = Session::new();
    session.submit("class Box(item): open\nb = Box(1)", false);
    session.submit("b.open()", false);
    let cell = &session.cells()[1];
    assert!(!cell.ok);
    assert!(cell.error.as_deref().unwrap().contains("open"));
}

#[test]
fn test_buffer_classification() {
    assert_eq!(classify_buffer("x = [1,", false), BufferStatus::Incomplete);
    assert_eq!(classify_buffer("class A(x):", false), BufferStatus::Incomplete);
    assert_eq!(classify_buffer("x = 1 \\", false), BufferStatus::Incomplete);
    assert_eq!(classify_buffer("x = [1]", false), BufferStatus::Complete);
    assert_eq!(
        classify_buffer("x = [1,", true),
        BufferStatus::Error("Incomplete code".to_string())
    );
    assert!(matches!(classify_buffer("x = 'open", false), BufferStatus::Error(_)));
}

#[test]
fn test_headless_transcript_for_tree_traversal() {
    let mut session = Session::new();
    let text = headless::run_script(
        &mut session,
        "t = BinarySearchTree(EXAMPLES['trees']['small'])\ntree_traverse('bfs', t)",
    );
    assert!(text.contains("Algorithm: Breadth-First Search Traversal  [O(V + E)]"));
    assert!(text.contains("Step 1: Visit node with value 10"));
    assert!(text.contains("Step 4: BFS traversal complete. Order: [10, 5, 15]"));
    assert!(text.ends_with("Status: COMPLETE"));
}
