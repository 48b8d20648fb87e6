//! Trees as handles into a forest, with cached leaves and size.
//!
//! A [`Tree`] doesn't own any nodes: those live in a [`Forest`], and the tree only remembers which of them is its root. On top of that, it caches the leaves of the tree in depth-first order and the total number of nodes, and provides structural operations which keep that cache up to date, mostly without rescanning the whole tree.
//!
//! # Example
//! ```rust
//! use bough::{forest::Forest, tree::Tree};
//!
//! let mut forest = Forest::new();
//! let root = forest.add(1);
//! let two = forest.node_mut(root).push_child(2);
//! let three = forest.node_mut(root).push_child(3);
//! forest.node_mut(three).push_child(4);
//!
//! let mut tree = Tree::new(&forest, root);
//! assert_eq!(tree.size(), 4);
//!
//! // Removes 3 together with everything below it
//! let freed = tree.prune(&mut forest, |node| *node.value() == 3);
//! assert_eq!(freed, 2);
//! assert_eq!(tree.leaves(), [two]);
//! ```
//!
//! [`Tree`]: struct.Tree.html " "
//! [`Forest`]: ../forest/struct.Forest.html " "

mod branch;

pub use branch::Branch;

use core::mem;
use hashbrown::{HashMap, HashSet};
use crate::{
    forest::{Forest, NodeId, NodeRef},
    traversal::algorithms,
    util::{Stack, invariant_violation},
    TreeError,
    TreeResult,
};

/// A tree inside a [`Forest`], identified by its root, with cached leaves and size.
///
/// The cache is maintained by every method of this type. Edits made directly through [`NodeRefMut`] bypass it, so [`regenerate_leaves`] has to be called afterwards.
///
/// [`Forest`]: ../forest/struct.Forest.html " "
/// [`NodeRefMut`]: ../forest/struct.NodeRefMut.html " "
/// [`regenerate_leaves`]: #method.regenerate_leaves " "
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<NodeId>,
    leaves: Vec<NodeId>,
    size: usize,
}
impl Tree {
    /// Creates a tree rooted at the specified node and scans it to fill the cache.
    ///
    /// The node is expected to be a root. If it has a parent, the tree only covers its subtree.
    #[track_caller]
    pub fn new<P>(forest: &Forest<P>, root: NodeId) -> Self {
        let mut tree = Self {
            root: Some(root),
            leaves: Vec::new(),
            size: 0,
        };
        tree.regenerate_leaves(forest);
        tree
    }
    /// Creates a tree without any nodes.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            root: None,
            leaves: Vec::new(),
            size: 0,
        }
    }
    /// Returns the root of the tree, or `None` if the tree is empty.
    #[inline(always)]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }
    /// Returns the cached leaves of the tree, in depth-first order.
    #[inline(always)]
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }
    /// Returns the cached number of nodes in the tree.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }
    /// Returns `true` if the tree does not have a root, `false` otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Rebuilds the leaf and size cache by walking the entire tree.
    pub fn regenerate_leaves<P>(&mut self, forest: &Forest<P>) {
        self.leaves.clear();
        self.size = 0;
        let root = match self.root {
            Some(root) => root,
            None => return,
        };
        for visit in forest.node(root).depth_first() {
            self.size += 1;
            if forest.node(visit.node).is_leaf() {
                self.leaves.push(visit.node);
            }
        }
    }
    /// Returns the children of the root, in order. Empty trees have no children.
    pub fn direct_children<P>(&self, forest: &Forest<P>) -> Vec<NodeId> {
        match self.root {
            Some(root) => forest.child_ids(root),
            None => Vec::new(),
        }
    }
    /// Replaces the children of the root with the roots of the specified trees.
    ///
    /// The previous children are detached from the tree but not freed. Empty trees among the arguments are skipped.
    ///
    /// # Errors
    /// Fails with [`MissingRoot`] if this tree is empty.
    ///
    /// [`MissingRoot`]: ../enum.TreeError.html#variant.MissingRoot " "
    pub fn set_children<P, I>(&mut self, forest: &mut Forest<P>, trees: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = Tree>,
    {
        let root = self.root.ok_or(TreeError::MissingRoot)?;
        forest
            .node_mut(root)
            .link_children(trees.into_iter().map(|tree| tree.root));
        self.regenerate_leaves(forest);
        Ok(())
    }

    /// Frees every node except the root which matches the predicate, together with all of its descendants, returning the number of freed nodes.
    ///
    /// Descendants of a matching node are freed without being tested. Only the part of the tree below the lowest common ancestor of all affected nodes is rescanned to update the cache.
    #[tracing::instrument(level = "debug", skip(self, forest, pred), fields(root = ?self.root))]
    pub fn prune<P, F>(&mut self, forest: &mut Forest<P>, mut pred: F) -> usize
    where
        F: FnMut(NodeRef<'_, P>) -> bool,
    {
        let root = match self.root {
            Some(root) => root,
            None => return 0,
        };
        let mut doomed = Vec::new();
        let mut stack = Stack::new();
        forest.push_children_reversed(root, &mut stack);
        while let Some(current) = stack.pop() {
            if pred(forest.node(current)) {
                doomed.push(current);
            } else {
                forest.push_children_reversed(current, &mut stack);
            }
        }
        if doomed.is_empty() {
            return 0;
        }

        let mut dirty = parent_of_non_root(forest, doomed[0]);
        for &node in &doomed[1..] {
            let parent = parent_of_non_root(forest, node);
            dirty = algorithms::find_common_ancestor(forest, &dirty, &parent).unwrap_or_else(|| {
                invariant_violation("pruned nodes of the same tree have no common ancestor")
            });
        }
        let stale_leaves = algorithms::leaves(forest, &dirty);
        let freed: usize = doomed
            .into_iter()
            .map(|node| forest.remove_subtree(node).len())
            .sum();
        let fresh_leaves = algorithms::leaves(forest, &dirty);
        if self.replace_leaf_run(&stale_leaves, fresh_leaves) {
            self.size -= freed;
        } else {
            self.regenerate_leaves(forest);
        }
        tracing::event!(tracing::Level::TRACE, operation = "prune", dirty = %dirty, freed = freed as u64);
        freed
    }
    /// Deletes the branch containing every leaf which matches the predicate, returning `true` if this left the tree empty.
    ///
    /// See [`delete_branch_containing`] for what exactly gets deleted.
    ///
    /// # Errors
    /// Fails with [`MissingRoot`] if the tree is empty.
    ///
    /// [`delete_branch_containing`]: #method.delete_branch_containing " "
    /// [`MissingRoot`]: ../enum.TreeError.html#variant.MissingRoot " "
    pub fn prune_branches<P, F>(&mut self, forest: &mut Forest<P>, mut pred: F) -> TreeResult<bool>
    where
        F: FnMut(NodeRef<'_, P>) -> bool,
    {
        if self.root.is_none() {
            return Err(TreeError::MissingRoot);
        }
        let matching = self
            .leaves
            .iter()
            .copied()
            .filter(|&leaf| pred(forest.node(leaf)))
            .collect::<Vec<_>>();
        for leaf in matching {
            self.delete_branch_containing(forest, leaf)?;
            if self.root.is_none() {
                break;
            }
        }
        Ok(self.root.is_none())
    }
    /// Removes every node which matches the predicate while keeping its descendants, which take its place in the child list of its parent.
    ///
    /// If the root is removed, its children become the roots of separate trees, and all of them are returned. Otherwise, the result is this tree alone. An empty tree produces no trees at all. Removed nodes are freed.
    #[tracing::instrument(level = "debug", skip(self, forest, pred), fields(root = ?self.root))]
    pub fn skip_filter<P, F>(mut self, forest: &mut Forest<P>, mut pred: F) -> Vec<Tree>
    where
        F: FnMut(NodeRef<'_, P>) -> bool,
    {
        let root = match self.root {
            Some(root) => root,
            None => return Vec::new(),
        };
        let mut visited = HashSet::new();
        let mut frontier = self.leaves.clone();
        // Removed leaves leave a hole in their slot, or hand it to a parent which became a leaf
        let mut slots = self.leaves.iter().copied().map(Some).collect::<Vec<_>>();
        let mut slot_of = self
            .leaves
            .iter()
            .enumerate()
            .map(|(index, &leaf)| (leaf, index))
            .collect::<HashMap<_, _>>();
        let mut skip_root = false;
        let mut stale = false;
        while let Some(node) = frontier.pop() {
            if !visited.insert(node) {
                continue;
            }
            if node == root {
                skip_root = pred(forest.node(root));
                continue;
            }
            let parent = parent_of_non_root(forest, node);
            frontier.push(parent);
            if !pred(forest.node(node)) {
                continue;
            }
            let was_leaf = forest.node(node).is_leaf();
            forest.node_mut(node).remove_node();
            forest.remove_subtree(node);
            self.size -= 1;
            tracing::event!(tracing::Level::TRACE, operation = "skip", node = %node);
            if !was_leaf {
                continue;
            }
            match slot_of.remove(&node) {
                Some(index) if forest.node(parent).is_leaf() => {
                    slots[index] = Some(parent);
                    slot_of.insert(parent, index);
                }
                Some(index) => slots[index] = None,
                None => stale = true,
            }
        }
        if stale {
            self.regenerate_leaves(forest);
        } else {
            self.leaves = slots.into_iter().flatten().collect();
        }
        if !skip_root {
            return vec![self];
        }
        // Only the root leaves a larger tree it may be part of
        let orphans = forest.child_ids(root);
        for &orphan in &orphans {
            forest.node_mut(orphan).detach();
        }
        forest.remove_subtree(root);
        tracing::event!(tracing::Level::TRACE, operation = "skip_root", trees = orphans.len() as u64);
        orphans
            .into_iter()
            .map(|orphan| Tree::new(forest, orphan))
            .collect()
    }

    /// Creates a branch from the root of the tree to the specified leaf, optionally cutting it out of the tree.
    ///
    /// With `delete`, the part of the branch below its [branching point] is detached from the tree, without being freed, so that the branch could later be put back with [`insert_branch`]. If the whole tree is a single chain, the tree becomes empty.
    ///
    /// # Errors
    /// Fails with [`MissingRoot`] if the tree is empty, and with [`LeafNotFound`] if the node is not one of the cached leaves.
    ///
    /// [branching point]: ../traversal/algorithms/fn.find_branching_point.html " "
    /// [`insert_branch`]: #method.insert_branch " "
    /// [`MissingRoot`]: ../enum.TreeError.html#variant.MissingRoot " "
    /// [`LeafNotFound`]: ../enum.TreeError.html#variant.LeafNotFound " "
    #[tracing::instrument(level = "debug", skip(self, forest), fields(root = ?self.root))]
    pub fn extract_branch<P>(
        &mut self,
        forest: &mut Forest<P>,
        leaf: NodeId,
        delete: bool,
    ) -> TreeResult<Branch> {
        let root = self.root.ok_or(TreeError::MissingRoot)?;
        if !self.leaves.contains(&leaf) {
            return Err(TreeError::LeafNotFound { node: leaf });
        }
        let branch = Branch::between(forest, root, leaf);
        if delete {
            self.detach_branch(forest, leaf)?;
        }
        Ok(branch)
    }
    /// Puts a branch back into the tree, returning `true` if anything had to be linked.
    ///
    /// The path of the branch is followed from the root for as long as it matches the tree. The first node which diverges is attached to the last matching one, and the rest of the path is relinked below it. Nodes are compared by identity, so a branch only fits the tree it was taken from.
    ///
    /// Returns `false` without changing anything if the branch doesn't start at the root of this tree or is already fully present in it.
    ///
    /// # Errors
    /// Fails with [`MissingRoot`] if the tree is empty.
    ///
    /// # Panics
    /// Panics if any of the nodes on the branch have been freed.
    ///
    /// [`MissingRoot`]: ../enum.TreeError.html#variant.MissingRoot " "
    #[tracing::instrument(level = "debug", skip(self, forest, branch), fields(root = ?self.root, len = branch.len() as u64))]
    pub fn insert_branch<P>(&mut self, forest: &mut Forest<P>, branch: &Branch) -> TreeResult<bool> {
        let root = self.root.ok_or(TreeError::MissingRoot)?;
        let path = branch.nodes();
        if path[0] != root {
            return Ok(false);
        }
        let is_linked = |forest: &Forest<P>, parent: NodeId, child: NodeId| {
            forest.node(child).parent().map(|x| x.id()) == Some(parent)
        };
        let diverging = match (1..path.len()).find(|&i| !is_linked(forest, path[i - 1], path[i])) {
            Some(index) => index,
            None => return Ok(false),
        };
        for i in diverging..path.len() {
            if !is_linked(forest, path[i - 1], path[i]) {
                forest.node_mut(path[i - 1]).add_child(path[i]);
            }
        }
        tracing::event!(tracing::Level::TRACE, operation = "graft", at = %path[diverging - 1], node = %path[diverging]);
        self.regenerate_leaves(forest);
        Ok(true)
    }
    /// Deletes the branch which contains the specified node, freeing its nodes.
    ///
    /// The branch is the node's chain of only-child ancestors, cut off at the closest ancestor with more than one child. If there is no such ancestor, the entire tree is freed and the tree becomes empty.
    ///
    /// # Errors
    /// Fails with [`MissingRoot`] if the tree is empty, and with [`NodeNotPartOfTree`] if the node does not belong to the tree.
    ///
    /// [`MissingRoot`]: ../enum.TreeError.html#variant.MissingRoot " "
    /// [`NodeNotPartOfTree`]: ../enum.TreeError.html#variant.NodeNotPartOfTree " "
    #[tracing::instrument(level = "debug", skip(self, forest), fields(root = ?self.root))]
    pub fn delete_branch_containing<P>(&mut self, forest: &mut Forest<P>, node: NodeId) -> TreeResult<()> {
        let top = self.detach_branch(forest, node)?;
        let freed = forest.remove_subtree(top).len();
        tracing::event!(tracing::Level::TRACE, operation = "delete_branch", top = %top, freed = freed as u64);
        Ok(())
    }

    /// Calls the closure on every cached leaf, in order, and attaches the payloads it returns as new children of that leaf.
    ///
    /// Leaves which receive children are replaced by them in the cache, so newly added nodes are not processed during the same call.
    ///
    /// # Errors
    /// Stops at the first error returned by the closure and returns it. Children added to earlier leaves are kept, and the cache stays consistent.
    pub fn process_leaves<P, E, F>(&mut self, forest: &mut Forest<P>, mut f: F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'_, P>) -> Result<Vec<P>, E>,
    {
        let old = mem::take(&mut self.leaves);
        let mut leaves = Vec::with_capacity(old.len());
        let mut pending = old.into_iter();
        while let Some(leaf) = pending.next() {
            let children = match f(forest.node(leaf)) {
                Ok(children) => children,
                Err(error) => {
                    leaves.push(leaf);
                    leaves.extend(pending);
                    self.leaves = leaves;
                    return Err(error);
                }
            };
            if children.is_empty() {
                leaves.push(leaf);
                continue;
            }
            let mut node = forest.node_mut(leaf);
            for child in children {
                leaves.push(node.push_child(child));
                self.size += 1;
            }
        }
        self.leaves = leaves;
        Ok(())
    }

    /// Returns every path from the root of the tree to a leaf, in the order of the cached leaves.
    pub fn snake_traversal<P>(&self, forest: &Forest<P>) -> Vec<Branch> {
        let root = match self.root {
            Some(root) => root,
            None => return Vec::new(),
        };
        self.leaves
            .iter()
            .map(|&leaf| Branch::between(forest, root, leaf))
            .collect()
    }
    /// Returns the first node in depth-first order which matches the predicate.
    pub fn find<P, F>(&self, forest: &Forest<P>, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(NodeRef<'_, P>) -> bool,
    {
        let root = self.root?;
        forest
            .node(root)
            .depth_first()
            .map(|visit| visit.node)
            .find(|&node| pred(forest.node(node)))
    }
    /// Copies every node of the tree, returning the copy as a new standalone tree in the same forest.
    pub fn deep_copy<P: Clone>(&self, forest: &mut Forest<P>) -> Tree {
        match self.root {
            Some(root) => {
                let copy = forest.deep_copy(root);
                Tree::new(forest, copy)
            }
            None => Tree::empty(),
        }
    }
    /// Returns the largest depth of any node, i.e. `0` for a lone root and for empty trees.
    pub fn height<P>(&self, forest: &Forest<P>) -> usize {
        match self.root {
            Some(root) => forest
                .node(root)
                .depth_first()
                .map(|visit| visit.depth)
                .max()
                .unwrap_or(0),
            None => 0,
        }
    }

    /// Detaches the branch containing the node at its branching point and returns the topmost detached node.
    fn detach_branch<P>(&mut self, forest: &mut Forest<P>, node: NodeId) -> TreeResult<NodeId> {
        let root = self.root.ok_or(TreeError::MissingRoot)?;
        if !forest.is_self_or_ancestor(root, node) {
            return Err(TreeError::NodeNotPartOfTree { node });
        }
        let below = algorithms::find_branching_point(forest, &node).detachable();
        if forest.is_self_or_ancestor(below, root) {
            // No branching below the root, the whole tree goes
            forest.node_mut(root).detach();
            *self = Tree::empty();
            return Ok(root);
        }
        let stale_leaves = algorithms::leaves(forest, &below);
        let removed = algorithms::size(forest, &below);
        forest.node_mut(below).detach();
        if self.replace_leaf_run(&stale_leaves, Vec::new()) {
            self.size -= removed;
        } else {
            self.regenerate_leaves(forest);
        }
        Ok(below)
    }
    /// Replaces a contiguous run of cached leaves with another sequence. Returns `false` if the run isn't in the cache.
    fn replace_leaf_run(&mut self, stale: &[NodeId], fresh: Vec<NodeId>) -> bool {
        let first = match stale.first() {
            Some(first) => first,
            None => return false,
        };
        let start = match self.leaves.iter().position(|leaf| leaf == first) {
            Some(start) => start,
            None => return false,
        };
        let end = start + stale.len();
        if self.leaves.get(start..end) != Some(stale) {
            return false;
        }
        self.leaves.splice(start..end, fresh).for_each(drop);
        true
    }
}

#[track_caller]
fn parent_of_non_root<P>(forest: &Forest<P>, node: NodeId) -> NodeId {
    forest
        .node(node)
        .parent()
        .map_or_else(|| invariant_violation("non-root node without a parent"), |x| x.id())
}
