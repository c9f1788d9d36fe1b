//! Graph renderer
//!
//! ```text
//! Edges: AB, AC
//!
//! Adjacency list:
//!
//! A ──▶ B, C
//! B ──▶ A
//! ```
//!
//! Undirected edges are listed once with their endpoints sorted; directed
//! edges keep their direction (`A→B`).

use crate::memory::Value;
use rustc_hash::FxHashSet;

pub fn render_graph(adjacency: &[(Value, Vec<Value>)], directed: bool) -> String {
    let edges = collect_edges(adjacency, directed);
    let label = if directed { "Directed Edges" } else { "Edges" };
    let edge_text = if edges.is_empty() {
        "(none)".to_string()
    } else {
        edges.join(", ")
    };

    let mut lines = vec![
        format!("{}: {}", label, edge_text),
        String::new(),
        "Adjacency list:".to_string(),
        String::new(),
    ];
    let mut nodes: Vec<&(Value, Vec<Value>)> = adjacency.iter().collect();
    nodes.sort_by_cached_key(|(node, _)| node.to_string());
    for (node, neighbors) in nodes {
        let text = if neighbors.is_empty() {
            "(none)".to_string()
        } else {
            neighbors
                .iter()
                .map(Value::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        lines.push(format!("{} ──▶ {}", node, text));
    }
    lines.join("\n")
}

fn collect_edges(adjacency: &[(Value, Vec<Value>)], directed: bool) -> Vec<String> {
    let mut edges = Vec::new();
    let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
    for (node, neighbors) in adjacency {
        for neighbor in neighbors {
            let (from, to) = (node.to_string(), neighbor.to_string());
            if directed {
                edges.push(format!("{}→{}", from, to));
                continue;
            }
            let key = if from <= to { (from, to) } else { (to, from) };
            if seen.insert(key.clone()) {
                edges.push(format!("{}{}", key.0, key.1));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(entries: &[(&str, &[&str])]) -> Vec<(Value, Vec<Value>)> {
        entries
            .iter()
            .map(|(node, neighbors)| {
                (
                    Value::str(*node),
                    neighbors.iter().map(|n| Value::str(*n)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_undirected_dedupes_edges() {
        let graph = adjacency(&[("B", &["A"]), ("A", &["B", "C"]), ("C", &["A"])]);
        let expected = [
            "Edges: AB, AC",
            "",
            "Adjacency list:",
            "",
            "A ──▶ B, C",
            "B ──▶ A",
            "C ──▶ A",
        ]
        .join("\n");
        assert_eq!(render_graph(&graph, false), expected);
    }

    #[test]
    fn test_directed_and_isolated() {
        let graph = adjacency(&[("A", &["B"]), ("B", &[])]);
        let out = render_graph(&graph, true);
        assert!(out.starts_with("Directed Edges: A→B\n"));
        assert!(out.ends_with("B ──▶ (none)"));
        assert!(render_graph(&[], false).starts_with("Edges: (none)"));
    }
}
