use core::slice;
use crate::forest::{Forest, NodeId};

/// A path from the root of a tree down to one of its nodes.
///
/// The path is captured when the branch is created and stored explicitly, so it stays meaningful even after the nodes on it have been moved around or detached. This is what allows a branch taken out of a tree with [`Tree::extract_branch`] to be put back with [`Tree::insert_branch`].
///
/// [`Tree::extract_branch`]: struct.Tree.html#method.extract_branch " "
/// [`Tree::insert_branch`]: struct.Tree.html#method.insert_branch " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Branch {
    path: Vec<NodeId>,
}
#[allow(clippy::len_without_is_empty)] // a branch always contains at least one node
impl Branch {
    /// Creates a branch which ends at the specified node, starting at the absolute root above it.
    #[track_caller]
    pub fn new<P>(forest: &Forest<P>, node: NodeId) -> Self {
        let mut path = forest.node(node).ancestors();
        path.push(node);
        Self { path }
    }
    /// Creates a branch which ends at `node` and starts at `top`, which should be one of its ancestors.
    ///
    /// This is how branches of trees rooted at inner nodes are taken. If `top` is not above the node, the branch starts at the absolute root like with [`new`].
    ///
    /// [`new`]: #method.new " "
    #[track_caller]
    pub fn between<P>(forest: &Forest<P>, top: NodeId, node: NodeId) -> Self {
        let mut path = vec![node];
        let mut current = forest.node(node);
        while current.id() != top {
            match current.parent() {
                Some(parent) => {
                    path.push(parent.id());
                    current = parent;
                }
                None => break,
            }
        }
        path.reverse();
        Self { path }
    }
    /// Returns the node the branch starts at.
    #[inline]
    pub fn from_node(&self) -> NodeId {
        self.path[0]
    }
    /// Returns the node the branch was created for.
    #[inline]
    pub fn to_node(&self) -> NodeId {
        self.path[self.path.len() - 1]
    }
    /// Returns the nodes on the path, starting from the root.
    #[inline(always)]
    pub fn nodes(&self) -> &[NodeId] {
        &self.path
    }
    /// Returns an iterator over the nodes on the path, starting from the root.
    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, NodeId> {
        self.path.iter()
    }
    /// Returns the number of nodes on the path, including both ends.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.path.len()
    }
    /// Consumes the branch, returning the nodes on the path.
    #[inline(always)]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.path
    }

    /// Returns `true` if every node on the path is still the parent of the next one in the specified forest.
    pub fn is_contiguous<P>(&self, forest: &Forest<P>) -> bool {
        self.path
            .windows(2)
            .all(|pair| forest.node(pair[1]).parent().map(|x| x.id()) == Some(pair[0]))
    }
    /// Descends from the root of the branch by always taking the first child, stopping at the end node or at a leaf.
    ///
    /// This only reproduces the stored path if every node above the end node is the first child of its parent, which is always the case for a chain of only children. For any other shape the walk may leave the path, which is why [`nodes`] should be preferred.
    ///
    /// [`nodes`]: #method.nodes " "
    pub fn first_child_walk<P>(&self, forest: &Forest<P>) -> Vec<NodeId> {
        let target = self.to_node();
        let mut walk = vec![self.from_node()];
        let mut current = forest.node(self.from_node());
        while current.id() != target {
            match current.first_child() {
                Some(child) => {
                    walk.push(child.id());
                    current = child;
                }
                None => break,
            }
        }
        walk
    }
}
impl<'a> IntoIterator for &'a Branch {
    type Item = &'a NodeId;
    type IntoIter = slice::Iter<'a, NodeId>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
