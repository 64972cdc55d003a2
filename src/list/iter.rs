use super::{Singly, Storage};
use crate::NodePtr;
use core::iter::FusedIterator;

/// Iterator over the elements of a [`LinkedList`] from head to tail.
///
/// [`LinkedList`]: crate::LinkedList
pub struct Iter<'a, T> {
    nodes: &'a Storage<T>,
    current: Option<NodePtr<Singly<T>>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(
        nodes: &'a Storage<T>,
        head: Option<NodePtr<Singly<T>>>,
        len: usize,
    ) -> Self {
        Self {
            nodes,
            current: head,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current?.position()];
        self.current = node.next().get();
        self.remaining = self.remaining.saturating_sub(1);
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
