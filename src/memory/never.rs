use super::policy::MemoryPolicy;
use crate::{CoreCol, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// A do-nothing `MemoryPolicy` which never reclaims the slots of closed nodes,
/// leaving them as holes in the underlying storage.
///
/// Holes can still be removed by an explicit call to `reclaim_closed_nodes`.
#[derive(Default, Clone, Copy, Debug)]
pub struct MemoryReclaimNever;

impl<V: Variant> MemoryPolicy<V> for MemoryReclaimNever {
    #[inline(always)]
    fn reclaim_closed_nodes<P>(_col: &mut CoreCol<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>,
    {
        false
    }
}
