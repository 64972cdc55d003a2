use super::{NodePtr, RefsSingle, refs::Refs};
use crate::variant::Variant;
use core::fmt::Debug;

/// Head and tail references of a chain of nodes.
///
/// Either both ends are set or both are empty.
pub struct RefsEnds<V>
where
    V: Variant,
{
    head: RefsSingle<V>,
    tail: RefsSingle<V>,
}

impl<V: Variant> Clone for RefsEnds<V> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<V: Variant> Debug for RefsEnds<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefsEnds")
            .field("head", &self.head.get())
            .field("tail", &self.tail.get())
            .finish()
    }
}

impl<V: Variant> Refs for RefsEnds<V> {
    fn empty() -> Self {
        Self {
            head: RefsSingle::empty(),
            tail: RefsSingle::empty(),
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_empty()
    }

    fn clear(&mut self) {
        self.head.clear();
        self.tail.clear();
    }
}

impl<V: Variant> RefsEnds<V> {
    /// Returns the pointer to the first node of the chain.
    #[inline(always)]
    pub fn head(&self) -> Option<NodePtr<V>> {
        self.head.get()
    }

    /// Returns the pointer to the last node of the chain.
    #[inline(always)]
    pub fn tail(&self) -> Option<NodePtr<V>> {
        self.tail.get()
    }

    /// Sets the first node of the chain.
    pub fn set_head(&mut self, node_ptr: Option<NodePtr<V>>) {
        self.head.set(node_ptr)
    }

    /// Sets the last node of the chain.
    pub fn set_tail(&mut self, node_ptr: Option<NodePtr<V>>) {
        self.tail.set(node_ptr)
    }

    /// Makes the node at `node_ptr` both the head and the tail.
    pub fn set_sole(&mut self, node_ptr: NodePtr<V>) {
        self.head.set_some(node_ptr);
        self.tail.set_some(node_ptr);
    }
}
