use crate::Refs;

/// Variant defining the shape of a node arena.
pub trait Variant: Sized {
    /// Elements of the collection.
    type Item;

    /// The way the next node reference of each node is stored.
    /// * `RefsSingle` if there is zero or one successor.
    type Next: Refs;

    /// The way the ends of the collection are stored,
    /// such as the head and tail of a linked list.
    /// * `RefsSingle` if only one end is tracked.
    /// * `RefsEnds` if both the head and the tail are tracked.
    type Ends: Refs;
}
