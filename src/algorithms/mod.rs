//! Step-by-step algorithm visualization
//!
//! Every algorithm is a lazy iterator of [`AlgorithmStep`]s: it does the
//! work for one step per `next()` call and ends with exactly one step whose
//! `is_complete` flag is set. [`AlgorithmRunner`] adds replay on top.
//!
//! - [`types`]: steps, highlights and results
//! - [`search`]: linear, binary, jump, interpolation and exponential search
//! - [`tree`]: DFS/BFS search and traversal, BST lookup
//! - [`runner`]: forward/backward navigation over collected steps
//! - [`registry`]: key lookup, display names and example datasets

pub mod registry;
pub mod runner;
pub mod search;
pub mod tree;
pub mod types;

pub use registry::{
    complexity_of, overview, start_search, start_tree_search, start_tree_traversal,
    AlgorithmInfo, PendingAlgorithm,
};
pub use runner::{AlgorithmRunner, StepGenerator};
pub use types::{AlgorithmStep, Highlights, StepData, StepResult};
