//! Diagram renderers
//!
//! Pure functions from a classified payload to multi-line box-drawing text.
//! They never fail and never log: an empty payload renders a fixed
//! placeholder, and equal payloads always render identically.
//!
//! - [`array`]: index/value table, with optional algorithm highlights
//! - [`tree`]: binary trees, search trees and min-heaps
//! - [`linked_list`]: singly and doubly linked chains
//! - [`hashmap`]: bucket chains
//! - [`graph`]: edge list and adjacency list
//! - [`containers`]: stacks and queues
//! - [`primitive`]: scalar memory cards
//! - [`memory_view`]: a whole snapshot as display blocks
//! - [`algorithm`]: algorithm panel text and step diagrams

pub mod algorithm;
pub mod array;
pub mod containers;
pub mod graph;
pub mod hashmap;
pub mod linked_list;
pub mod memory_view;
pub mod primitive;
pub mod text;
pub mod tree;

pub use algorithm::{algorithm_panel, render_step, render_step_data};
pub use array::render_array;
pub use containers::{render_queue, render_stack};
pub use graph::render_graph;
pub use hashmap::render_hashmap;
pub use linked_list::{render_doubly_linked_list, render_linked_list};
pub use memory_view::{memory_blocks, render_memory, MemoryBlock};
pub use primitive::render_primitive;
pub use tree::{render_binary_search_tree, render_binary_tree, render_min_heap};
