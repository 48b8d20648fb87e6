use core::iter::FusedIterator;
use crate::traversal::{algorithms, ChildCursor, DepthFirst, BreadthFirst};
use super::{Forest, NodeId};

/// A reference to a node in a forest.
///
/// Since this type does not point to the node directly, but rather the forest the node is in and the handle of the node, it can be used to walk the tree the node belongs to.
#[derive(Debug)]
pub struct NodeRef<'a, P> {
    pub(super) forest: &'a Forest<P>,
    pub(super) id: NodeId,
}
impl<'a, P> NodeRef<'a, P> {
    #[inline(always)]
    pub(super) fn new(forest: &'a Forest<P>, id: NodeId) -> Self {
        Self { forest, id }
    }
    /// Returns the handle of the node.
    #[inline(always)]
    pub fn id(&self) -> NodeId {
        self.id
    }
    /// Returns the forest the node is stored in.
    #[inline(always)]
    pub fn forest(&self) -> &'a Forest<P> {
        self.forest
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's a root node.
    pub fn parent(&self) -> Option<Self> {
        self.link(self.forest.raw(self.id).parent)
    }
    /// Returns a reference to the first child of the node, or `None` if it's a leaf node.
    pub fn first_child(&self) -> Option<Self> {
        self.link(self.forest.raw(self.id).first_child)
    }
    /// Returns a reference to the last child of the node, or `None` if it's a leaf node.
    pub fn last_child(&self) -> Option<Self> {
        self.link(self.forest.raw(self.id).last_child)
    }
    /// Returns a reference to the sibling of the pointee which comes before it in order, or `None` if it's the first child of its parent.
    pub fn prev_sibling(&self) -> Option<Self> {
        self.link(self.forest.raw(self.id).prev_sibling)
    }
    /// Returns a reference to the sibling of the pointee which comes after it in order, or `None` if it's the last child of its parent.
    pub fn next_sibling(&self) -> Option<Self> {
        self.link(self.forest.raw(self.id).next_sibling)
    }
    /// Returns `true` if the node does not have a parent, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.forest.raw(self.id).parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.forest.raw(self.id).first_child.is_none()
    }
    /// Returns `true` if the node has exactly one child, `false` otherwise.
    pub fn is_singleton(&self) -> bool {
        let node = self.forest.raw(self.id);
        node.first_child.is_some() && node.first_child == node.last_child
    }
    /// Returns a reference to the data stored in the node.
    pub fn value(&self) -> &'a P {
        &self.forest.raw(self.id).data
    }

    /// Returns an iterator over references to the children of the node. Yields nothing for leaf nodes.
    pub fn children(&self) -> NodeChildrenIter<'a, P> {
        NodeChildrenIter(self.child_cursor())
    }
    /// Returns an iterator over references to the other children of the node's parent, in order. Yields nothing for root nodes.
    pub fn siblings(&self) -> impl Iterator<Item = NodeRef<'a, P>> + 'a
    where
        P: 'a,
    {
        let id = self.id;
        self.parent()
            .into_iter()
            .flat_map(|parent| parent.children())
            .filter(move |sibling| sibling.id != id)
    }
    /// Returns a pull-style cursor over the handles of the children of the node.
    pub fn child_cursor(&self) -> ChildCursor<'a, Forest<P>> {
        ChildCursor::new(self.forest, self.id)
    }
    /// Returns a depth-first iterator over the subtree rooted at the node, with depths relative to it.
    pub fn depth_first(&self) -> DepthFirst<'a, Forest<P>> {
        DepthFirst::new(self.forest, self.id)
    }
    /// Returns a breadth-first iterator over the subtree rooted at the node, with depths relative to it.
    pub fn breadth_first(&self) -> BreadthFirst<'a, Forest<P>> {
        BreadthFirst::new(self.forest, self.id)
    }

    /// Returns the handles of the ancestors of the node, starting from the root. Does not include the node itself.
    ///
    /// This walks the entire path to the root, so the result should be cached by the caller if it's needed more than once.
    pub fn ancestors(&self) -> Vec<NodeId> {
        algorithms::ancestors(self.forest, &self.id)
    }
    /// Returns the leaves of the subtree rooted at the node, in depth-first order.
    ///
    /// This visits the entire subtree.
    pub fn leaves(&self) -> Vec<NodeId> {
        algorithms::leaves(self.forest, &self.id)
    }
    /// Returns the number of nodes in the subtree rooted at the node, including itself.
    ///
    /// This visits the entire subtree.
    pub fn size(&self) -> usize {
        algorithms::size(self.forest, &self.id)
    }
    /// Returns the number of ancestors of the node.
    pub fn depth(&self) -> usize {
        algorithms::depth(self.forest, &self.id)
    }
    /// Returns `true` if `target` is a strict ancestor of the node.
    pub fn is_child_of(&self, target: NodeId) -> bool {
        algorithms::is_child_of(self.forest, &self.id, &target)
    }

    fn link(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.forest, id))
    }
}
impl<P> Copy for NodeRef<'_, P> {}
impl<P> Clone for NodeRef<'_, P> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<P> PartialEq for NodeRef<'_, P> {
    /// Node references are equal if they point to the same node of the same forest.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.forest, other.forest) && self.id == other.id
    }
}
impl<P> Eq for NodeRef<'_, P> {}

/// An iterator over references to the children of a node.
#[derive(Debug)]
pub struct NodeChildrenIter<'a, P>(ChildCursor<'a, Forest<P>>);
impl<'a, P> Iterator for NodeChildrenIter<'a, P> {
    type Item = NodeRef<'a, P>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let forest = self.0.traversable();
        self.0.consume().map(|id| NodeRef::new(forest, id))
    }
}
impl<P> FusedIterator for NodeChildrenIter<'_, P> {}
