//! The arena which owns the nodes of any number of trees.
//!
//! Every node lives in a [`Forest`] and is addressed by a [`NodeId`]. Links between nodes (parent, first and last child, previous and next sibling) are stored as handles rather than pointers, so a node which gets detached from its tree simply becomes a standalone root inside the same forest and can be reused, relinked or freed.
//!
//! # Example
//! ```rust
//! use bough::forest::Forest;
//!
//! let mut forest = Forest::new();
//! let root = forest.add(1);
//!
//! // Nodes are created standalone and only gain relations through the linkage primitives.
//! let two = forest.add(2);
//! let three = forest.add(3);
//! forest.node_mut(root).add_children([Some(two), None, Some(three)].iter().copied());
//!
//! let root_ref = forest.node(root);
//! assert!(root_ref.is_root());
//! assert_eq!(root_ref.children().map(|x| *x.value()).collect::<Vec<_>>(), [2, 3]);
//! assert!(forest.node(two).is_leaf());
//! ```
//!
//! [`Forest`]: struct.Forest.html " "
//! [`NodeId`]: struct.NodeId.html " "

use core::fmt::{self, Formatter, Debug};
use granite::{Storage, SparseVec};
use hashbrown::HashSet;
use crate::util::Stack;

mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;
#[cfg(test)]
mod tests;

pub use node::{Node, NodeId};
pub use node_ref::{NodeRef, NodeChildrenIter};
pub use node_ref_mut::NodeRefMut;

/// An arena of tree nodes.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct Forest<P> {
    storage: SparseVec<Node<P>>,
    // Keys of freed nodes which the storage hasn't handed out again yet
    holes: HashSet<usize>,
    len: usize,
}
impl<P> Forest<P> {
    /// Creates an empty forest.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: <SparseVec<Node<P>> as Storage>::new(),
            holes: HashSet::new(),
            len: 0,
        }
    }
    /// Creates an empty forest with preallocated space for the specified number of nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: <SparseVec<Node<P>> as Storage>::with_capacity(capacity),
            holes: HashSet::new(),
            len: 0,
        }
    }
    /// Adds a standalone node, i.e. one without a parent, siblings or children, returning its handle.
    #[inline]
    pub fn add(&mut self, data: P) -> NodeId {
        self.len += 1;
        let key = self.storage.add(Node::standalone(data));
        self.holes.remove(&key);
        NodeId(key)
    }
    /// Returns the number of nodes currently stored in the forest, attached or not.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if the forest does not store any nodes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the handle points to a live node of this forest.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        !self.holes.contains(&id.0) && self.storage.get(&id.0).is_some()
    }
    /// Returns a reference to the specified node, or `None` if the handle was never issued by this forest or the node has been freed.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, P>> {
        if self.contains(id) {
            Some(NodeRef::new(self, id))
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified node, or `None` if the handle was never issued by this forest or the node has been freed.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<NodeRefMut<'_, P>> {
        if self.contains(id) {
            Some(NodeRefMut::new(self, id))
        } else {
            None
        }
    }
    /// Returns a reference to the specified node.
    ///
    /// # Panics
    /// Panics if the handle does not point to a live node of this forest.
    #[inline]
    #[track_caller]
    pub fn node(&self, id: NodeId) -> NodeRef<'_, P> {
        self.get(id)
            .unwrap_or_else(|| panic!("invalid node handle: {}", id))
    }
    /// Returns a *mutable* reference to the specified node.
    ///
    /// # Panics
    /// Panics if the handle does not point to a live node of this forest.
    #[inline]
    #[track_caller]
    pub fn node_mut(&mut self, id: NodeId) -> NodeRefMut<'_, P> {
        self.get_mut(id)
            .unwrap_or_else(|| panic!("invalid node handle: {}", id))
    }
    /// Returns a reference to the payload of the specified node.
    ///
    /// # Panics
    /// Same as [`node`](#method.node).
    #[inline]
    #[track_caller]
    pub fn value(&self, id: NodeId) -> &P {
        &self.raw(id).data
    }
    /// Returns a *mutable* reference to the payload of the specified node.
    ///
    /// # Panics
    /// Same as [`node`](#method.node).
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self, id: NodeId) -> &mut P {
        &mut self.raw_mut(id).data
    }

    /// Detaches the subtree rooted at the specified node and frees all of its nodes, returning their payloads in depth-first order.
    ///
    /// The handles of the freed nodes become invalid and may be reused by nodes added afterwards.
    #[track_caller]
    pub fn remove_subtree(&mut self, id: NodeId) -> Vec<P> {
        self.unlink(id);
        let mut doomed = Vec::new();
        let mut stack = Stack::new();
        stack.push(id);
        while let Some(current) = stack.pop() {
            doomed.push(current);
            self.push_children_reversed(current, &mut stack);
        }
        self.len -= doomed.len();
        self.holes.extend(doomed.iter().map(|key| key.0));
        doomed
            .into_iter()
            .map(|key| self.storage.remove(&key.0).data)
            .collect()
    }
    /// Copies the subtree rooted at the specified node, returning the root of the copy. The copy is a standalone tree inside the same forest.
    #[track_caller]
    pub fn deep_copy(&mut self, id: NodeId) -> NodeId
    where
        P: Clone,
    {
        let copy_root = self.add(self.value(id).clone());
        let mut stack = Stack::new();
        stack.push((id, copy_root));
        while let Some((original, copy)) = stack.pop() {
            let mut children = Stack::new();
            self.push_children_reversed(original, &mut children);
            let mut pending = Stack::<(NodeId, NodeId)>::new();
            // Children come out of the stack in their natural order
            while let Some(child) = children.pop() {
                let child_copy = self.add(self.value(child).clone());
                self.append(copy, child_copy);
                pending.push((child, child_copy));
            }
            stack.extend(pending.into_iter().rev());
        }
        copy_root
    }

    #[inline]
    #[track_caller]
    pub(crate) fn raw(&self, id: NodeId) -> &Node<P> {
        if self.holes.contains(&id.0) {
            panic!("node {} has been freed", id);
        }
        self.storage
            .get(&id.0)
            .unwrap_or_else(|| panic!("invalid node handle: {}", id))
    }
    #[inline]
    #[track_caller]
    pub(crate) fn raw_mut(&mut self, id: NodeId) -> &mut Node<P> {
        if self.holes.contains(&id.0) {
            panic!("node {} has been freed", id);
        }
        self.storage
            .get_mut(&id.0)
            .unwrap_or_else(|| panic!("invalid node handle: {}", id))
    }
    /// Pushes the children of the node onto the stack so that the first child is popped first.
    pub(crate) fn push_children_reversed(&self, id: NodeId, stack: &mut Stack<NodeId>) {
        let mut child = self.raw(id).last_child;
        while let Some(key) = child {
            stack.push(key);
            child = self.raw(key).prev_sibling;
        }
    }
    /// Collects the children of the node in order.
    pub(crate) fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut children = Vec::new();
        let mut child = self.raw(id).first_child;
        while let Some(key) = child {
            children.push(key);
            child = self.raw(key).next_sibling;
        }
        children
    }
    /// Returns `true` if `candidate` is `id` itself or one of its ancestors. Walks every ancestor of `id`.
    pub(crate) fn is_self_or_ancestor(&self, candidate: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(key) = current {
            if key == candidate {
                return true;
            }
            current = self.raw(key).parent;
        }
        false
    }
    /// Removes the node from its parent's child list, keeping its own children. Does nothing for roots.
    pub(crate) fn unlink(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = self.raw(id);
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        match prev {
            Some(prev) => self.raw_mut(prev).next_sibling = next,
            None => {
                if let Some(parent) = parent {
                    self.raw_mut(parent).first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.raw_mut(next).prev_sibling = prev,
            None => {
                if let Some(parent) = parent {
                    self.raw_mut(parent).last_child = prev;
                }
            }
        }
        self.raw_mut(id).clear_position();
    }
    /// Links an already unlinked node as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, child: NodeId) {
        let last = self.raw(parent).last_child;
        {
            let child = self.raw_mut(child);
            child.parent = Some(parent);
            child.prev_sibling = last;
            child.next_sibling = None;
        }
        match last {
            Some(last) => self.raw_mut(last).next_sibling = Some(child),
            None => self.raw_mut(parent).first_child = Some(child),
        }
        self.raw_mut(parent).last_child = Some(child);
    }
}
impl<P> Default for Forest<P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<P> Debug for Forest<P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forest")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
