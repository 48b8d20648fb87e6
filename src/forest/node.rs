use core::{
    fmt::{self, Formatter, Display},
    num::NonZeroIsize,
};
use granite::{ListStorage, MoveFix};

/// The handle of a node inside a [`Forest`].
///
/// Handles are plain indices into the forest's storage. They stay valid for as long as the node is not freed, regardless of how it gets relinked; once a node is freed, its handle may be handed out again for a newly added node.
///
/// [`Forest`]: struct.Forest.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(super) usize);
impl NodeId {
    /// Returns the raw storage key of the node.
    #[inline(always)]
    pub const fn raw_key(self) -> usize {
        self.0
    }
}
impl Display for NodeId {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of a forest.
///
/// Created by the forest internally and only publicly exposed so that the storage type could be named. The links are only ever changed through [`NodeRefMut`].
///
/// [`NodeRefMut`]: struct.NodeRefMut.html " "
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<P> {
    pub(super) data: P,
    pub(super) parent: Option<NodeId>,
    pub(super) first_child: Option<NodeId>,
    pub(super) last_child: Option<NodeId>,
    pub(super) prev_sibling: Option<NodeId>,
    pub(super) next_sibling: Option<NodeId>,
}
impl<P> Node<P> {
    /// Creates a node without any relations.
    #[inline(always)]
    pub(super) const fn standalone(data: P) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
    #[inline(always)]
    pub(super) fn clear_links(&mut self) {
        self.parent = None;
        self.first_child = None;
        self.last_child = None;
        self.prev_sibling = None;
        self.next_sibling = None;
    }
    #[inline(always)]
    pub(super) fn clear_position(&mut self) {
        self.parent = None;
        self.prev_sibling = None;
        self.next_sibling = None;
    }
}

fn node_at<P, S>(storage: &mut S, index: NodeId) -> &mut Node<P>
where
    S: ListStorage<Element = Node<P>>,
{
    storage
        .get_mut(index.0)
        .unwrap_or_else(|| panic!("dangling link to {} while fixing moved nodes", index))
}

impl<P> MoveFix for Node<P> {
    unsafe fn fix_shift<S>(storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where
        S: ListStorage<Element = Self>,
    {
        let fix_starting_from = if shifted_by.get() > 0 {
            shifted_from + 1 // If an insertion happened, ignore the new element
        } else {
            shifted_from
        };
        if fix_starting_from >= storage.len() {
            return;
        };
        for i in fix_starting_from..storage.len() {
            let old_index = (i as isize - shifted_by.get()) as usize; // undo shift to figure out old index
            Self::fix_move(storage, old_index, i);
        }
    }

    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where
        S: ListStorage<Element = Self>,
    {
        let (previous, current) = (NodeId(previous_index), NodeId(current_index));
        let moved = match storage.get(current_index) {
            Some(node) => (
                node.parent,
                node.first_child,
                node.prev_sibling,
                node.next_sibling,
            ),
            None => return,
        };
        let (parent, first_child, prev_sibling, next_sibling) = moved;

        let mut child = first_child;
        while let Some(key) = child {
            let node = node_at(storage, key);
            node.parent = Some(current);
            child = node.next_sibling;
        }
        if let Some(key) = parent {
            let parent = node_at(storage, key);
            if parent.first_child == Some(previous) {
                parent.first_child = Some(current);
            }
            if parent.last_child == Some(previous) {
                parent.last_child = Some(current);
            }
        }
        if let Some(key) = prev_sibling {
            node_at(storage, key).next_sibling = Some(current);
        }
        if let Some(key) = next_sibling {
            node_at(storage, key).prev_sibling = Some(current);
        }
    }
}
