mod iter;
mod mutate;
mod query;
mod reclaimer;
mod render;

pub use iter::Iter;
pub use reclaimer::SinglyReclaimer;

use crate::{
    ListError, MemoryPolicy, MemoryReclaimNever, MemoryReclaimOnThreshold, Node, RefsEnds,
    RefsSingle, SelfRefCol, Utilization, Variant,
};
use core::marker::PhantomData;
use orx_split_vec::SplitVec;

/// Variant of a singly linked chain of `T` values with cached head and tail.
pub struct Singly<T>(PhantomData<T>);

impl<T> Variant for Singly<T> {
    type Item = T;

    type Next = RefsSingle<Self>;

    type Ends = RefsEnds<Self>;
}

/// Storage of the nodes of a [`LinkedList`].
pub type Storage<T> = SplitVec<Node<Singly<T>>>;

/// Default memory policy of a [`LinkedList`]: closed slots are reclaimed once
/// utilization drops below 75%.
pub type DefaultMemory<T> = MemoryReclaimOnThreshold<2, Singly<T>, SinglyReclaimer>;

/// A [`LinkedList`] which never reclaims the slots of removed elements automatically.
pub type LinkedListLazy<T> = LinkedList<T, MemoryReclaimNever>;

/// A singly linked list with a cached tail.
///
/// * `append`, `prepend`, `len` are O(1),
/// * index based operations, `pop` and lookups are O(n).
///
/// Nodes are kept in an arena and link to their successor by position. The memory
/// policy `M` decides when the slots of removed nodes are reclaimed; this never
/// changes the elements or their order.
///
/// # Examples
///
/// ```
/// use singly_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append("dog");
/// list.append("cat");
/// list.append("parrot");
/// assert_eq!(list.render(), "(head) => (dog) => (cat) => (parrot) => (null)");
///
/// assert_eq!(list.remove_at(1), Ok("cat"));
/// assert_eq!(list.render(), "(head) => (dog) => (parrot) => (null)");
/// assert_eq!(list.len(), 2);
/// ```
pub struct LinkedList<T, M = DefaultMemory<T>>
where
    M: MemoryPolicy<Singly<T>>,
{
    col: SelfRefCol<Singly<T>, M, Storage<T>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list with the default memory policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, M> Default for LinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn default() -> Self {
        Self {
            col: SelfRefCol::with_storage(SplitVec::new()),
        }
    }
}

impl<T, M> LinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    /// Returns the number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.col.len()
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.col.is_empty()
    }

    /// Returns a reference to the first element; None if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.col
            .ends()
            .head()
            .and_then(|head| self.col.node(head).data())
    }

    /// Returns a reference to the last element; None if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.col
            .ends()
            .tail()
            .and_then(|tail| self.col.node(tail).data())
    }

    /// Returns an iterator over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.col.nodes(), self.col.ends().head(), self.len())
    }

    /// Returns how the node arena of the list is currently used.
    pub fn utilization(&self) -> Utilization {
        self.col.utilization()
    }

    /// Moves all elements to the front of the node arena and releases the slots
    /// left behind by removed elements, regardless of the memory policy.
    ///
    /// Returns whether or not any node has been moved.
    pub fn reclaim_closed_nodes(&mut self) -> bool {
        self.col.reclaim_closed_nodes::<SinglyReclaimer>()
    }
}

impl<'a, T, M> IntoIterator for &'a LinkedList<T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn out_of_range(operation: &'static str, index: usize, len: usize) -> ListError {
    tracing::debug!(operation, index, len, "index out of range");
    ListError::IndexOutOfRange { index, len }
}
