//! Hash table renderer
//!
//! Entries are distributed over `max(5, len)` buckets by a content hash of
//! the key's `repr`, so the layout is the same every time the same mapping
//! is drawn. Each bucket is a chain of key/value boxes ending in `NULL`.
//! The node panel shows the most recently inserted entry, with `next`
//! pointing at the following entry of the same bucket.

use super::linked_list::panel;
use super::text::{ljust, rule, width};
use crate::memory::Value;
use rustc_hash::FxHasher;
use std::hash::Hasher;

const MIN_BUCKETS: usize = 5;

/// Deterministic content hash of a key
pub fn stable_hash(key: &Value) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(key.repr().as_bytes());
    hasher.finish()
}

/// Bucket a key falls in among `bucket_count` buckets
pub fn bucket_index(key: &Value, bucket_count: usize) -> usize {
    (stable_hash(key) % bucket_count.max(1) as u64) as usize
}

/// Synthetic address of the node holding `key`
fn node_address(key: &Value) -> String {
    format!("0x{:04x}", stable_hash(key) & 0xFFFF)
}

pub fn render_hashmap(entries: &[(Value, Value)]) -> String {
    let bucket_count = MIN_BUCKETS.max(entries.len());
    let mut buckets: Vec<Vec<&(Value, Value)>> = vec![Vec::new(); bucket_count];
    for entry in entries {
        buckets[bucket_index(&entry.0, bucket_count)].push(entry);
    }

    let mut lines = vec!["Index".to_string()];
    for (index, bucket) in buckets.iter().enumerate() {
        lines.extend(render_bucket(index, bucket));
    }

    lines.push(String::new());
    lines.push("Node Structure".to_string());
    let (key, value, next) = match entries.last() {
        Some((key, value)) => (key.to_string(), value.to_string(), next_address(key, &buckets)),
        None => (String::new(), String::new(), "NULL".to_string()),
    };
    lines.extend(panel(&[("key", key), ("value", value), ("next", next)]));
    lines.join("\n")
}

fn render_bucket(index: usize, bucket: &[&(Value, Value)]) -> Vec<String> {
    let prefix = format!(" {} ──▶ ", index);
    if bucket.is_empty() {
        return vec![format!("{}NULL", prefix)];
    }
    let boxes: Vec<[String; 3]> = bucket.iter().map(|(k, v)| entry_box(k, v)).collect();
    let indent = " ".repeat(width(&prefix));
    (0..3)
        .map(|row| {
            let joined = boxes
                .iter()
                .map(|b| b[row].as_str())
                .collect::<Vec<_>>()
                .join(" ──▶ ");
            if row == 0 {
                format!("{}{} ──▶ NULL", prefix, joined)
            } else {
                format!("{}{}", indent, joined)
            }
        })
        .collect()
}

fn entry_box(key: &Value, value: &Value) -> [String; 3] {
    let key_text = key.to_string();
    let value_text = value.to_string();
    let key_width = width("key").max(width(&key_text));
    let value_width = width("value").max(width(&value_text));
    [
        format!("┌{}┬{}┐", rule(key_width + 2), rule(value_width + 2)),
        format!(
            "│ {} │ {} │",
            ljust(&key_text, key_width),
            ljust(&value_text, value_width)
        ),
        format!("└{}┴{}┘", rule(key_width + 2), rule(value_width + 2)),
    ]
}

fn next_address(key: &Value, buckets: &[Vec<&(Value, Value)>]) -> String {
    for bucket in buckets {
        if let Some(position) = bucket.iter().position(|(k, _)| k == key) {
            return match bucket.get(position + 1) {
                Some((next_key, _)) => node_address(next_key),
                None => "NULL".to_string(),
            };
        }
    }
    "NULL".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hashmap() {
        let expected = [
            "Index",
            " 0 ──▶ NULL",
            " 1 ──▶ NULL",
            " 2 ──▶ NULL",
            " 3 ──▶ NULL",
            " 4 ──▶ NULL",
            "",
            "Node Structure",
            "┌────────┬────────┬────────┐",
            "│  key   │ value  │  next  │",
            "└────────┴────────┴────────┘",
            "                     NULL  ",
        ]
        .join("\n");
        assert_eq!(render_hashmap(&[]), expected);
    }

    #[test]
    fn test_single_entry_bucket() {
        let key = Value::str("a");
        let out = render_hashmap(&[(key.clone(), Value::Int(1))]);
        let bucket = bucket_index(&key, 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1 + bucket], format!(" {} ──▶ ┌─────┬───────┐ ──▶ NULL", bucket));
        assert_eq!(lines[2 + bucket], "       │ a   │ 1     │");
        assert!(out.ends_with("\n    a        1       NULL  "));
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(stable_hash(&Value::Int(42)), stable_hash(&Value::Int(42)));
        assert_ne!(stable_hash(&Value::Int(42)), stable_hash(&Value::str("42")));
    }
}
