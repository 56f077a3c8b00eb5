//! Element handles and their allocator.

use serde::{Deserialize, Serialize};

/// Opaque handle for a document element registered with a controller.
/// The host decides which element a handle refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ElementId(pub u32);

/// Monotonic allocator for element handles.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Number of handles handed out so far.
    #[inline]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
