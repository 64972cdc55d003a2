use crate::{CoreCol, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// Reorganizes the nodes of a collection so that all active nodes occupy
/// the front of the storage.
///
/// Implementations must keep every link valid: whenever a node moves,
/// whatever referenced its old position must reference the new one.
pub trait MemoryReclaimer<V>: Clone + Default
where
    V: Variant,
{
    /// Moves active nodes into the holes left by closed nodes.
    ///
    /// Returns whether or not any node has been moved.
    fn reclaim_nodes<P>(col: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>;
}
