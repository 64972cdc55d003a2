use crate::{NodePtr, Refs, Utilization, Variant, node::Node};
use orx_pinned_vec::PinnedVec;

/// Core collection of the node arena.
///
/// Nodes are stored in a pinned vector and address each other by position.
/// Closed nodes leave holes which are filled only when a memory policy
/// reclaims them.
pub struct CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes: P,
    ends: V::Ends,
    len: usize,
}

impl<V, P> CoreCol<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection on top of the given empty `nodes` storage.
    pub fn with_storage(nodes: P) -> Self {
        debug_assert!(nodes.is_empty(), "node storage must be empty");
        Self {
            nodes,
            ends: Refs::empty(),
            len: 0,
        }
    }

    // get

    /// Returns current node utilization of the collection.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns the number of active nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns a reference to the node at the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the pointer is out of bounds of the storage.
    #[inline(always)]
    pub fn node(&self, node_ptr: NodePtr<V>) -> &Node<V> {
        &self.nodes[node_ptr.position()]
    }

    /// Returns a reference to the ends of the collection.
    #[inline(always)]
    pub fn ends(&self) -> &V::Ends {
        &self.ends
    }

    // mut

    /// Returns a mutable reference to the node at the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the pointer is out of bounds of the storage.
    #[inline(always)]
    pub fn node_mut(&mut self, node_ptr: NodePtr<V>) -> &mut Node<V> {
        &mut self.nodes[node_ptr.position()]
    }

    /// Returns a mutable reference to the ends of the collection.
    pub fn ends_mut(&mut self) -> &mut V::Ends {
        &mut self.ends
    }

    /// Pushes a free node with the given `data` and returns its pointer.
    pub fn push(&mut self, data: V::Item) -> NodePtr<V> {
        let pos = self.nodes.len();
        self.nodes.push(Node::new_free_node(data));
        self.len += 1;
        NodePtr::new(pos)
    }

    /// Closes the node at the given `node_ptr` and returns its data.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub fn close(&mut self, node_ptr: NodePtr<V>) -> V::Item {
        let data = self.node_mut(node_ptr).close();
        self.len -= 1;
        data
    }

    /// Swaps the closed node at the `closed_position` with the active node
    /// at the `active_position`.
    pub fn move_node(&mut self, closed_position: usize, active_position: usize) {
        debug_assert!(self.nodes[closed_position].is_closed());
        debug_assert!(self.nodes[active_position].is_active());

        self.nodes.swap(active_position, closed_position);
    }

    /// Drops the trailing slots of the storage so that only the first
    /// `len()` positions remain.
    ///
    /// Must only be called once every active node has been moved to the front.
    pub fn truncate_closed(&mut self) {
        debug_assert!(
            (self.len..self.nodes.len()).all(|pos| self.nodes[pos].is_closed()),
            "active nodes must precede closed nodes"
        );
        self.nodes.truncate(self.len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RefsSingle;
    use core::marker::PhantomData;
    use orx_split_vec::SplitVec;

    struct Stack<T>(PhantomData<T>);

    impl<T> Variant for Stack<T> {
        type Item = T;
        type Next = RefsSingle<Self>;
        type Ends = RefsSingle<Self>;
    }

    type Col = CoreCol<Stack<char>, SplitVec<Node<Stack<char>>>>;

    #[test]
    fn push_and_close_track_len() {
        let mut col = Col::with_storage(SplitVec::new());
        assert!(col.is_empty());

        let a = col.push('a');
        let b = col.push('b');
        assert_eq!(col.len(), 2);
        assert_eq!(col.node(a).data(), Some(&'a'));
        assert_eq!(col.node(b).data(), Some(&'b'));

        assert_eq!(col.close(a), 'a');
        assert_eq!(col.len(), 1);
        assert!(col.node(a).is_closed());

        let utilization = col.utilization();
        assert_eq!(utilization.num_active_nodes, 1);
        assert_eq!(utilization.num_closed_nodes, 1);
        assert!(utilization.capacity >= 2);
    }

    #[test]
    fn move_node_then_truncate() {
        let mut col = Col::with_storage(SplitVec::new());

        let a = col.push('a');
        let b = col.push('b');
        col.close(a);

        col.move_node(a.position(), b.position());
        assert_eq!(col.node(a).data(), Some(&'b'));

        col.truncate_closed();
        assert_eq!(col.nodes().len(), 1);
        assert_eq!(col.utilization().num_closed_nodes, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "node storage must be empty")]
    fn with_storage_rejects_used_storage_in_debug() {
        let mut nodes = SplitVec::new();
        nodes.push(Node::new_free_node('a'));
        let _ = Col::with_storage(nodes);
    }
}
