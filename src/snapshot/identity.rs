//! Identity tracking
//!
//! Assigns each live object a stable display [`Handle`] the first time it is
//! seen. Identity is the object's [`ObjId`], never its value: two equal but
//! distinct lists get two handles, and one list inspected any number of times
//! always gets the same one. Handles are numbered from 1 and never reused.

use crate::memory::ObjId;
use rustc_hash::FxHashMap;
use std::fmt;

/// Stable, session-scoped display id (`obj#N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u64);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityTracker {
    handles: FxHashMap<ObjId, Handle>,
    counter: u64,
}

impl IdentityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for an object, allocating the next one on first sight
    pub fn handle_for(&mut self, id: ObjId) -> Handle {
        if let Some(handle) = self.handles.get(&id) {
            return *handle;
        }
        self.counter += 1;
        let handle = Handle(self.counter);
        log::debug!("assigned {} to object at {}", handle, id);
        self.handles.insert(id, handle);
        handle
    }

    /// Handle previously assigned to an object, if any
    pub fn lookup(&self, id: ObjId) -> Option<Handle> {
        self.handles.get(&id).copied()
    }

    /// Number of handles handed out so far
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_object_same_handle() {
        let mut tracker = IdentityTracker::new();
        let first = tracker.handle_for(ObjId(0x1000_0000));
        let again = tracker.handle_for(ObjId(0x1000_0000));
        assert_eq!(first, again);
        assert_eq!(first.to_string(), "obj#1");
    }

    #[test]
    fn test_distinct_objects_distinct_handles() {
        let mut tracker = IdentityTracker::new();
        let a = tracker.handle_for(ObjId(0x1000_0000));
        let b = tracker.handle_for(ObjId(0x1000_0010));
        assert_ne!(a, b);
        assert_eq!(b, Handle(2));
        assert_eq!(tracker.lookup(ObjId(0x1000_0020)), None);
    }
}
