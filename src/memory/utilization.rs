/// Snapshot of how the node arena of a list is used.
///
/// `num_active_nodes + num_closed_nodes` is the length of the underlying storage,
/// which never exceeds `capacity`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Utilization {
    /// Number of slots already allocated.
    pub capacity: usize,
    /// Number of nodes holding a list element.
    pub num_active_nodes: usize,
    /// Number of slots left behind by removed elements and not yet reclaimed.
    pub num_closed_nodes: usize,
}

impl Utilization {
    /// Number of slots in use, active or closed.
    pub fn storage_len(&self) -> usize {
        self.num_active_nodes + self.num_closed_nodes
    }
}
