//! Memory model for the workspace
//!
//! This module provides the core memory abstractions:
//! - [`value`]: Runtime value representation (primitives, references, callables)
//! - [`object`]: Heap object shapes (list, dict, class instance)
//! - [`heap`]: Arena of objects addressed by stable [`ObjId`]s
//! - [`structures`]: Builtin data structures and their operations
//!
//! # Addresses
//!
//! Objects are placed at synthetic addresses starting at
//! [`HEAP_ADDRESS_START`] and advancing by [`OBJECT_ADDRESS_STEP`]:
//! ```text
//! 0x10000000, 0x10000010, 0x10000020, ...
//! ```
//! The address doubles as the object's identity and is what pointer fields
//! display in the diagrams.

pub mod heap;
pub mod object;
pub mod structures;
pub mod value;

pub use heap::Heap;
pub use object::{BuiltinClass, ClassRef, Instance, Object};
pub use value::{Address, ObjId, Value};

/// Starting address for heap objects
/// Heap addresses start at 0x10000000 so they read as pointers in diagrams
pub const HEAP_ADDRESS_START: Address = 0x1000_0000;

/// Distance between consecutive object addresses
pub const OBJECT_ADDRESS_STEP: Address = 0x10;
