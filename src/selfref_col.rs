use crate::{CoreCol, MemoryPolicy, MemoryReclaimer, Node, NodePtr, Variant};
use core::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};
use orx_pinned_vec::PinnedVec;

/// `SelfRefCol` is the node arena behind the linked list: nodes live in a pinned vector
/// and refer to each other by position.
///
/// The collection is defined by the following generic arguments:
/// * `V`: the [`Variant`] defining the element type and how links and ends are stored.
/// * `M`: the [`MemoryPolicy`] deciding when the slots of closed nodes are reclaimed.
/// * `P`: the pinned vector storing the nodes.
///
/// It dereferences to [`CoreCol`] for read and link mutations; closing nodes goes
/// through [`SelfRefCol::close_and_reclaim`] so that the memory policy is applied.
pub struct SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    core: CoreCol<V, P>,
    policy: PhantomData<fn() -> M>,
}

impl<V, M, P> Deref for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    type Target = CoreCol<V, P>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<V, M, P> DerefMut for SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<V, M, P> SelfRefCol<V, M, P>
where
    V: Variant,
    M: MemoryPolicy<V>,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty collection on top of the given empty `nodes` storage.
    pub fn with_storage(nodes: P) -> Self {
        Self {
            core: CoreCol::with_storage(nodes),
            policy: PhantomData,
        }
    }

    /// Closes the node at the given `node_ptr`, returns its data and lets the memory
    /// policy reclaim closed slots.
    ///
    /// Every `NodePtr` held by the caller must be considered invalid afterwards,
    /// since the policy might have moved nodes.
    ///
    /// # Panics
    ///
    /// Panics if the node was already closed.
    pub fn close_and_reclaim(&mut self, node_ptr: NodePtr<V>) -> V::Item {
        let data = self.core.close(node_ptr);
        M::reclaim_closed_nodes(&mut self.core);
        data
    }

    /// Reclaims all closed slots regardless of the memory policy, using the reclaimer `R`.
    ///
    /// Returns whether or not any node has been moved.
    pub fn reclaim_closed_nodes<R>(&mut self) -> bool
    where
        R: MemoryReclaimer<V>,
    {
        let nodes_moved = R::reclaim_nodes(&mut self.core);
        self.core.truncate_closed();
        nodes_moved
    }
}
