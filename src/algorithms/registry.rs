//! Algorithm registry
//!
//! Maps the keys scripts pass to `search`, `tree_search` and `tree_traverse`
//! onto generators. Keys are matched case-insensitively; an unknown key is
//! reported with every valid key of that family, sorted.

use super::runner::{AlgorithmRunner, StepGenerator};
use super::search::{
    BinarySearch, ExponentialSearch, InterpolationSearch, JumpSearch, LinearSearch,
};
use super::tree::{BstSearch, Order, TreeSearch, TreeTraversal};
use super::types::StepData;
use crate::errors::AlgorithmError;
use crate::memory::Value;
use crate::snapshot::TreeSnapshot;
use std::rc::Rc;

/// Registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub complexity: &'static str,
}

const fn info(key: &'static str, name: &'static str, complexity: &'static str) -> AlgorithmInfo {
    AlgorithmInfo {
        key,
        name,
        complexity,
    }
}

pub const SEARCH_ALGORITHMS: [AlgorithmInfo; 5] = [
    info("linear", "Linear Search", "O(n)"),
    info("binary", "Binary Search", "O(log n)"),
    info("jump", "Jump Search", "O(√n)"),
    info("interpolation", "Interpolation Search", "O(log log n) avg"),
    info("exponential", "Exponential Search", "O(log n)"),
];

pub const TREE_SEARCH_ALGORITHMS: [AlgorithmInfo; 3] = [
    info("dfs", "Depth-First Search", "O(V + E)"),
    info("bfs", "Breadth-First Search", "O(V + E)"),
    info("bst", "BST Search", "O(log n) avg"),
];

pub const TREE_TRAVERSAL_ALGORITHMS: [AlgorithmInfo; 2] = [
    info("dfs", "Depth-First Search Traversal", "O(V + E)"),
    info("bfs", "Breadth-First Search Traversal", "O(V + E)"),
];

/// Datasets exposed to scripts as `EXAMPLES["arrays"]`
pub const EXAMPLE_ARRAYS: [(&str, &[i64]); 5] = [
    ("small", &[1, 3, 5, 7, 9]),
    ("medium", &[2, 4, 8, 16, 32, 64, 128, 256]),
    (
        "large",
        &[1, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80],
    ),
    ("unsorted", &[42, 17, 8, 91, 33, 56, 24]),
    ("duplicates", &[1, 2, 2, 3, 3, 3, 4, 4, 4, 4]),
];

/// Datasets exposed to scripts as `EXAMPLES["trees"]`
pub const EXAMPLE_TREES: [(&str, &[i64]); 4] = [
    ("balanced", &[50, 25, 75, 12, 37, 62, 87]),
    ("small", &[10, 5, 15]),
    ("left_heavy", &[50, 40, 30, 20, 10]),
    ("right_heavy", &[10, 20, 30, 40, 50]),
];

/// An algorithm started by a script, waiting for the presentation layer
#[derive(Debug)]
pub struct PendingAlgorithm {
    pub runner: AlgorithmRunner,
    pub data: StepData,
}

/// Complexity label for a runner's display name
pub fn complexity_of(name: &str) -> Option<&'static str> {
    SEARCH_ALGORITHMS
        .iter()
        .chain(&TREE_SEARCH_ALGORITHMS)
        .chain(&TREE_TRAVERSAL_ALGORITHMS)
        .find(|entry| entry.name == name)
        .map(|entry| entry.complexity)
}

fn lookup(table: &[AlgorithmInfo], requested: &str) -> Result<AlgorithmInfo, AlgorithmError> {
    let key = requested.to_lowercase();
    if let Some(entry) = table.iter().find(|entry| entry.key == key) {
        return Ok(*entry);
    }
    let mut available: Vec<&'static str> = table.iter().map(|entry| entry.key).collect();
    available.sort_unstable();
    log::warn!("unknown algorithm {:?}", requested);
    Err(AlgorithmError::UnknownAlgorithm {
        requested: requested.to_string(),
        available,
    })
}

fn pending(entry: AlgorithmInfo, generator: StepGenerator, data: StepData) -> PendingAlgorithm {
    PendingAlgorithm {
        runner: AlgorithmRunner::from_generator(entry.name, generator),
        data,
    }
}

/// Start an array search over a copy of `data`
pub fn start_search(
    key: &str,
    data: Rc<[Value]>,
    target: Value,
) -> Result<PendingAlgorithm, AlgorithmError> {
    let entry = lookup(&SEARCH_ALGORITHMS, key)?;
    let arr = Rc::clone(&data);
    let generator: StepGenerator = match entry.key {
        "linear" => Box::new(LinearSearch::new(arr, target)),
        "binary" => Box::new(BinarySearch::new(arr, target)),
        "jump" => Box::new(JumpSearch::new(arr, target)),
        "interpolation" => Box::new(InterpolationSearch::new(arr, target)),
        _ => Box::new(ExponentialSearch::new(arr, target)),
    };
    Ok(pending(entry, generator, StepData::Array(data)))
}

/// Start a search over a captured tree
pub fn start_tree_search(
    key: &str,
    tree: Rc<TreeSnapshot>,
    target: Value,
) -> Result<PendingAlgorithm, AlgorithmError> {
    let entry = lookup(&TREE_SEARCH_ALGORITHMS, key)?;
    let shape = Rc::clone(&tree);
    let generator: StepGenerator = match entry.key {
        "dfs" => Box::new(TreeSearch::new(Order::DepthFirst, shape, target)),
        "bfs" => Box::new(TreeSearch::new(Order::BreadthFirst, shape, target)),
        _ => Box::new(BstSearch::new(shape, target)),
    };
    Ok(pending(entry, generator, StepData::Tree(tree)))
}

/// Start a full traversal of a captured tree
pub fn start_tree_traversal(
    key: &str,
    tree: Rc<TreeSnapshot>,
) -> Result<PendingAlgorithm, AlgorithmError> {
    let entry = lookup(&TREE_TRAVERSAL_ALGORITHMS, key)?;
    let order = match entry.key {
        "dfs" => Order::DepthFirst,
        _ => Order::BreadthFirst,
    };
    let generator = Box::new(TreeTraversal::new(order, Rc::clone(&tree)));
    Ok(pending(entry, generator, StepData::Tree(tree)))
}

/// Overview of every algorithm family, as shown by `algo_help()`
pub fn overview() -> String {
    let families: [(&str, &str, &[AlgorithmInfo]); 3] = [
        ("Array Search", "search('binary', [1,3,5,7], 5)", &SEARCH_ALGORITHMS),
        ("Tree Search", "tree_search('dfs', tree, 10)", &TREE_SEARCH_ALGORITHMS),
        ("Tree Traversal", "tree_traverse('dfs', tree)", &TREE_TRAVERSAL_ALGORITHMS),
    ];
    let mut rows: Vec<(String, String)> = Vec::new();
    for (family_index, (title, usage, entries)) in families.iter().enumerate() {
        let last_family = family_index + 1 == families.len();
        let (branch, trunk) = if last_family { ("└", " ") } else { ("├", "│") };
        rows.push((format!("{}──▶ {}", branch, title), usage.to_string()));
        for (index, entry) in entries.iter().enumerate() {
            let joint = if index + 1 == entries.len() { "└" } else { "├" };
            rows.push((
                format!("{}     {}──▶ {}", trunk, joint, entry.key),
                format!("{} ({})", entry.complexity, entry.name),
            ));
        }
    }
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|(label, detail)| {
            let pad = width - label.chars().count();
            format!("{}{} │ {}", label, " ".repeat(pad), detail)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_lists_sorted_keys() {
        let err = start_search("Quantum", Rc::from(Vec::new()), Value::Int(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown algorithm: 'Quantum'. Available: binary, exponential, interpolation, jump, linear"
        );
        let err = start_tree_traversal("bst", Rc::new(TreeSnapshot::default())).unwrap_err();
        assert!(err.to_string().ends_with("Available: bfs, dfs"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let pending = start_search("BINARY", Rc::from(vec![Value::Int(1)]), Value::Int(1)).unwrap();
        assert_eq!(pending.runner.name(), "Binary Search");
        let pending = start_tree_traversal("Dfs", Rc::new(TreeSnapshot::default())).unwrap();
        assert_eq!(pending.runner.name(), "Depth-First Search Traversal");
    }

    #[test]
    fn test_complexity_lookup() {
        assert_eq!(complexity_of("Jump Search"), Some("O(√n)"));
        assert_eq!(complexity_of("BST Search"), Some("O(log n) avg"));
        assert_eq!(complexity_of("Mystery"), None);
    }

    #[test]
    fn test_overview_lists_every_key() {
        let text = overview();
        assert!(text.starts_with("├──▶ Array Search"));
        assert!(text.contains("│     └──▶ exponential"));
        assert!(text.contains("      └──▶ bfs"));
        assert_eq!(text.lines().count(), 3 + 5 + 3 + 2);
    }
}
