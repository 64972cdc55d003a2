use crate::Variant;
use core::{fmt::Debug, marker::PhantomData};

/// Position of a node in the arena of its collection.
///
/// The position stays valid until the node is closed or the collection
/// reclaims its closed nodes.
pub struct NodePtr<V: Variant> {
    pos: usize,
    phantom: PhantomData<fn() -> V>,
}

// Only the position is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodePtr<V> {}

impl<V: Variant> Clone for NodePtr<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> PartialEq for NodePtr<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<V: Variant> Eq for NodePtr<V> {}

impl<V: Variant> Debug for NodePtr<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePtr").field("pos", &self.pos).finish()
    }
}

impl<V: Variant> NodePtr<V> {
    /// Creates a pointer to the node at the given `pos` of the arena.
    #[inline(always)]
    pub fn new(pos: usize) -> Self {
        Self {
            pos,
            phantom: PhantomData,
        }
    }

    /// Returns the position of the node in the arena.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }
}
