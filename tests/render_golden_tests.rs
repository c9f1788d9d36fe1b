// Golden-output tests for the diagram renderers and the memory view

use dsaviz::memory::Value;
use dsaviz::render::{
    render_array, render_graph, render_hashmap, render_queue, render_stack, render_step,
};
use dsaviz::algorithms::start_search;
use dsaviz::session::Session;

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().map(|v| Value::Int(*v)).collect()
}

fn strs(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| Value::str(*v)).collect()
}

#[test]
fn test_array_goldens() {
    assert_eq!(render_array(&[], None), "(empty)");
    let expected = [
        "        ┌────┐",
        "Index → │ 0  │",
        "        ├────┤",
        "Array → │ 0  │",
        "        └────┘",
    ]
    .join("\n");
    assert_eq!(render_array(&ints(&[0]), None), expected);
}

#[test]
fn test_stack_and_queue_goldens() {
    assert_eq!(
        render_stack(&ints(&[1, 2])),
        "Top\n │\n ▼\n┌─────┐\n│  2  │\n├─────┤\n│  1  │\n└─────┘"
    );
    assert_eq!(
        render_queue(&ints(&[1, 2])),
        "Front ──▶ ┌─────┬─────┐ ──▶ Rear\n          │  1  │  2  │\n          └─────┴─────┘"
    );
}

#[test]
fn test_graph_golden() {
    let adjacency = vec![
        (Value::str("A"), strs(&["B", "C"])),
        (Value::str("B"), strs(&["A"])),
        (Value::str("C"), strs(&["A"])),
    ];
    assert_eq!(
        render_graph(&adjacency, false),
        "Edges: AB, AC\n\nAdjacency list:\n\nA ──▶ B, C\nB ──▶ A\nC ──▶ A"
    );
    let directed = vec![(Value::str("A"), strs(&["B"])), (Value::str("B"), Vec::new())];
    assert_eq!(
        render_graph(&directed, true),
        "Directed Edges: A→B\n\nAdjacency list:\n\nA ──▶ B\nB ──▶ (none)"
    );
}

#[test]
fn test_renderers_are_deterministic() {
    let entries: Vec<(Value, Value)> = (0..7)
        .map(|i| (Value::str(format!("k{}", i)), Value::Int(i)))
        .collect();
    assert_eq!(render_hashmap(&entries), render_hashmap(&entries.clone()));
    let values = ints(&[9, 4, 7]);
    assert_eq!(render_array(&values, None), render_array(&values.clone(), None));
    assert_eq!(render_stack(&values), render_stack(&values.clone()));
    assert_eq!(render_queue(&values), render_queue(&values.clone()));
}

#[test]
fn test_hashmap_lists_every_bucket() {
    let out = render_hashmap(&[(Value::str("a"), Value::Int(1))]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Index");
    assert_eq!(out.matches("──▶ NULL").count(), 5);
    assert!(out.contains("│ a   │ 1     │"));
    assert!(out.contains("Node Structure"));
}

#[test]
fn test_memory_view_of_a_cell() {
    let mut session = Session::new();
    session.submit("s = Stack([1, 2])", false);
    assert_eq!(
        session.cells()[0].snapshot_text.as_deref(),
        Some("s ──▶ Stack\nTop\n │\n ▼\n┌─────┐\n│  2  │\n├─────┤\n│  1  │\n└─────┘")
    );
}

#[test]
fn test_step_diagram_marks_current_index() {
    let mut pending = start_search("linear", ints(&[10, 20]).into(), Value::Int(20)).unwrap();
    let step = pending.runner.advance().unwrap().clone();
    let lines: Vec<String> = render_step(&step).lines().map(String::from).collect();
    assert_eq!(lines[1], "Index → │ →0  │ 1   │");
}
