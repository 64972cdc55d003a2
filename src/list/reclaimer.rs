use super::Singly;
use crate::{CoreCol, MemoryReclaimer, Node, NodePtr};
use orx_pinned_vec::PinnedVec;

/// Reclaimer of singly linked chains.
///
/// Walks the chain from the head and moves every node found behind the lowest
/// closed slot into that slot, relinking its predecessor (or the head) and the
/// tail when the moved node is the last one.
#[derive(Clone, Copy, Default, Debug)]
pub struct SinglyReclaimer;

impl<T> MemoryReclaimer<Singly<T>> for SinglyReclaimer {
    fn reclaim_nodes<P>(col: &mut CoreCol<Singly<T>, P>) -> bool
    where
        P: PinnedVec<Node<Singly<T>>>,
    {
        let mut nodes_moved = false;
        let mut vacant = 0;
        let mut prev: Option<NodePtr<Singly<T>>> = None;
        let mut current = col.ends().head();

        while let Some(mut ptr) = current {
            vacant = next_vacant(col, vacant);

            if vacant < ptr.position() {
                col.move_node(vacant, ptr.position());
                let moved = NodePtr::new(vacant);

                match prev {
                    Some(prev) => col.node_mut(prev).next_mut().set_some(moved),
                    None => col.ends_mut().set_head(Some(moved)),
                }
                if col.ends().tail() == Some(ptr) {
                    col.ends_mut().set_tail(Some(moved));
                }

                ptr = moved;
                nodes_moved = true;
            }

            current = col.node(ptr).next().get();
            prev = Some(ptr);
        }

        nodes_moved
    }
}

/// Position of the first closed slot at or after `from`; storage length if there is none.
fn next_vacant<T, P>(col: &CoreCol<Singly<T>, P>, from: usize) -> usize
where
    P: PinnedVec<Node<Singly<T>>>,
{
    let nodes = col.nodes();
    (from..nodes.len())
        .find(|&pos| nodes[pos].is_closed())
        .unwrap_or(nodes.len())
}
