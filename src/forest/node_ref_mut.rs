use crate::util::Stack;
use super::{Forest, NodeId, NodeRef};

/// A *mutable* reference to a node in a forest.
///
/// This is the only way to change the links between nodes. All linkage primitives keep the child lists of every involved node consistent; misuse, such as passing a node which would create a cycle, results in a no-op rather than an error.
#[derive(Debug)]
pub struct NodeRefMut<'a, P> {
    forest: &'a mut Forest<P>,
    id: NodeId,
}
impl<'a, P> NodeRefMut<'a, P> {
    #[inline(always)]
    pub(super) fn new(forest: &'a mut Forest<P>, id: NodeId) -> Self {
        Self { forest, id }
    }
    /// Returns the handle of the node.
    #[inline(always)]
    pub fn id(&self) -> NodeId {
        self.id
    }
    /// Returns a reference to the data stored in the node.
    pub fn value(&self) -> &P {
        &self.forest.raw(self.id).data
    }
    /// Returns a *mutable* reference to the data stored in the node.
    pub fn value_mut(&mut self) -> &mut P {
        &mut self.forest.raw_mut(self.id).data
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's a root node.
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, P>> {
        let parent = self.forest.raw(self.id).parent;
        parent.map(move |id| NodeRefMut::new(self.forest, id))
    }
    /// Consumes the reference, returning a reference to the whole forest.
    #[inline(always)]
    pub fn into_forest(self) -> &'a mut Forest<P> {
        self.forest
    }

    /// Appends the specified node as the new last child.
    ///
    /// The child is unlinked from its previous position first, so moving a node from one parent to another is always safe. Nothing happens if the child is the node itself or one of its ancestors.
    pub fn add_child(&mut self, child: NodeId) {
        self.add_children(Some(Some(child)));
    }
    /// Creates a new node with the specified payload and appends it as the new last child, returning its handle.
    pub fn push_child(&mut self, data: P) -> NodeId {
        let child = self.forest.add(data);
        self.forest.append(self.id, child);
        child
    }
    /// Appends the specified nodes as the last children, in order.
    ///
    /// `None` entries are skipped, as are the node itself and its ancestors. Leaf children cost a constant number of link updates; children with children of their own are also checked against the ancestors of this node.
    pub fn add_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = Option<NodeId>>,
    {
        for child in children.into_iter().flatten() {
            // A leaf can only be an ancestor of this node by being this node
            let would_cycle = if self.forest.raw(child).first_child.is_none() {
                child == self.id
            } else {
                self.forest.is_self_or_ancestor(child, self.id)
            };
            if would_cycle {
                continue;
            }
            self.forest.unlink(child);
            self.forest.append(self.id, child);
        }
    }
    /// Replaces the entire child list with the specified nodes, in order.
    ///
    /// The previous children are detached and become standalone roots. `None` entries and invalid children are skipped like with [`add_children`].
    ///
    /// [`add_children`]: #method.add_children " "
    pub fn link_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = Option<NodeId>>,
    {
        self.orphan_children();
        self.add_children(children);
    }
    /// Removes the specified child from the child list, returning *its* children, which are detached from it and become standalone roots.
    ///
    /// Returns an empty list if the target is `None` or not a child of this node.
    pub fn delete_child(&mut self, target: Option<NodeId>) -> Vec<NodeId> {
        let target = match target {
            Some(target) if self.forest.raw(target).parent == Some(self.id) => target,
            _ => return Vec::new(),
        };
        self.forest.unlink(target);
        NodeRefMut::new(self.forest, target).orphan_children()
    }
    /// Removes the node from its tree, putting its children in its place.
    ///
    /// If the node has a parent, its children are spliced into the parent's child list where the node used to be and an empty list is returned. If the node is a root, its children are returned as the roots of a new forest of trees. Either way, the node ends up without any relations.
    pub fn remove_node(self) -> Vec<NodeId> {
        let (parent, prev, next, first, last) = {
            let node = self.forest.raw(self.id);
            (
                node.parent,
                node.prev_sibling,
                node.next_sibling,
                node.first_child,
                node.last_child,
            )
        };
        let parent = match parent {
            Some(parent) => parent,
            None => return NodeRefMut::new(self.forest, self.id).orphan_children(),
        };
        let (first, last) = match (first, last) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                self.forest.unlink(self.id);
                return Vec::new();
            }
        };
        let mut child = Some(first);
        while let Some(key) = child {
            let node = self.forest.raw_mut(key);
            node.parent = Some(parent);
            child = node.next_sibling;
        }
        self.forest.raw_mut(first).prev_sibling = prev;
        self.forest.raw_mut(last).next_sibling = next;
        match prev {
            Some(prev) => self.forest.raw_mut(prev).next_sibling = Some(first),
            None => self.forest.raw_mut(parent).first_child = Some(first),
        }
        match next {
            Some(next) => self.forest.raw_mut(next).prev_sibling = Some(last),
            None => self.forest.raw_mut(parent).last_child = Some(last),
        }
        self.forest.raw_mut(self.id).clear_links();
        Vec::new()
    }
    /// Unlinks the node from its parent and siblings, keeping its own subtree intact. The node becomes the root of a standalone tree.
    pub fn detach(&mut self) {
        self.forest.unlink(self.id);
    }
    /// Dismantles the subtree rooted at the node: every node in it loses all of its relations, and the node itself is unlinked from its parent and siblings.
    ///
    /// Calling this on a node without relations does nothing.
    pub fn cleanup(&mut self) {
        self.forest.unlink(self.id);
        let mut stack = Stack::new();
        stack.push(self.id);
        while let Some(current) = stack.pop() {
            self.forest.push_children_reversed(current, &mut stack);
            self.forest.raw_mut(current).clear_links();
        }
    }

    /// Detaches all children, returning them in order.
    fn orphan_children(&mut self) -> Vec<NodeId> {
        let children = self.forest.child_ids(self.id);
        for &child in &children {
            self.forest.raw_mut(child).clear_position();
        }
        let node = self.forest.raw_mut(self.id);
        node.first_child = None;
        node.last_child = None;
        children
    }
}
impl<'a, P> From<&'a NodeRefMut<'_, P>> for NodeRef<'a, P> {
    #[inline(always)]
    fn from(op: &'a NodeRefMut<'_, P>) -> Self {
        NodeRef::new(&*op.forest, op.id)
    }
}
impl<'a, P> From<NodeRefMut<'a, P>> for NodeRef<'a, P> {
    #[inline(always)]
    fn from(op: NodeRefMut<'a, P>) -> Self {
        NodeRef::new(op.forest, op.id)
    }
}
