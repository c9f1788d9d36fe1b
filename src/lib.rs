//! # Introduction
//!
//! dsaviz runs small scripts against a workspace of data structures and draws
//! every live structure as a box-drawing diagram. Search and traversal
//! algorithms started from a script are replayed step by step, forward and
//! backward, with the elements they touch highlighted.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Script executor → Workspace → Snapshot → Diagrams → TUI
//!                                 │
//!                                 └→ Pending algorithm → Runner → Steps
//! ```
//!
//! 1. [`script`]: lexer, parser and evaluator for the cell language.
//! 2. [`memory`]: the heap arena, [`memory::Value`]s and the builtin
//!    structures (`Stack`, `Queue`, `MinHeap`, trees, lists, `Graph`).
//! 3. [`snapshot`]: stable handles, structural classification of live
//!    objects, and the diff between two snapshots.
//! 4. [`render`]: pure renderers from classified payloads to text.
//! 5. [`algorithms`]: lazy step generators, the replay runner and the
//!    algorithm registry.
//! 6. [`session`]: one notebook session of submitted cells.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported structures
//!
//! Arrays, hash tables, stacks, queues, min-heaps, singly and doubly linked
//! lists, binary trees, binary search trees, directed and undirected graphs.
//! User classes that look like one of these (a node with `value` and `next`,
//! an object with `push`/`pop`/`peek`, ...) are drawn the same way.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod headless;
pub mod highlight;
pub mod memory;
pub mod render;
pub mod script;
pub mod session;
pub mod snapshot;
pub mod ui;
