use crate::{CoreCol, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// Policy which determines when the slots of closed nodes are reclaimed.
///
/// Two implementors are provided:
/// * [`MemoryReclaimOnThreshold::<D>`] compacts the storage whenever the share of closed
///   slots exceeds a constant threshold determined by `D`.
/// * [`MemoryReclaimNever`] never compacts automatically; closed slots stay as holes until
///   a manual reclaim is requested.
///
/// [`MemoryReclaimOnThreshold::<D>`]: crate::MemoryReclaimOnThreshold
/// [`MemoryReclaimNever`]: crate::MemoryReclaimNever
pub trait MemoryPolicy<V: Variant>: Clone + Default {
    /// Reclaims closed nodes, called right after a node is closed.
    ///
    /// Assume that **A** below stands for active nodes and **x** designates a closed node.
    /// If the underlying storage has the following layout at a certain stage:
    /// * `[ x, x, A, x, A, A, A, x, A, x ]`
    ///
    /// the reclaimer first moves the active nodes into the holes so that we have:
    /// * `[ A, A, A, A, A, x, x, x, x, x ]`
    ///
    /// and next trims the storage:
    /// * `[ A, A, A, A, A ]`
    ///
    /// The order of the **A**s in storage is irrelevant; the order of the
    /// collection is defined by the links among nodes.
    ///
    /// Returns whether or not any node has been moved.
    fn reclaim_closed_nodes<P>(col: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>;
}
