//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`], the *capability trait for types which describe tree-like structures* in terms of parent, child and sibling links
//! - Pull-style iteration: [`ChildCursor`] for the children of a single node, [`DepthFirst`] and [`BreadthFirst`] for whole subtrees
//! - [`Traverser`], which drives a pair of user closures over a subtree while threading a separate accumulator down every path
//! - Implementations of ubiquitous algorithms for trees (see the [`algorithms`] module for more)
//!
//! None of the walks here use recursion, so arbitrarily deep trees are fine.
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`ChildCursor`]: struct.ChildCursor.html " "
//! [`DepthFirst`]: struct.DepthFirst.html " "
//! [`BreadthFirst`]: struct.BreadthFirst.html " "
//! [`Traverser`]: struct.Traverser.html " "

pub mod algorithms;
#[cfg(test)]
mod tests;

use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug, Display},
};
use std::collections::VecDeque;
use crate::util::Stack;

/// Data structures which can be walked through parent, child and sibling links.
pub trait Traversable {
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`.
    type Cursor: Clone + Debug + Eq;

    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is a root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the first child of the node at the specified cursor, or `None` if it's a leaf node.
    fn first_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the last child of the node at the specified cursor, or `None` if it's a leaf node.
    fn last_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the sibling which comes after the node at the specified cursor, or `None` if it's the last child of its parent.
    fn next_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the sibling which comes before the node at the specified cursor, or `None` if it's the first child of its parent.
    fn prev_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;

    /// Returns `true` if the node at the specified cursor does not have children, `false` otherwise.
    #[inline]
    fn is_leaf(&self, cursor: &Self::Cursor) -> bool {
        self.first_child_of(cursor).is_none()
    }
    /// Returns `true` if the node at the specified cursor has exactly one child, `false` otherwise.
    #[inline]
    fn is_singleton(&self, cursor: &Self::Cursor) -> bool {
        match self.first_child_of(cursor) {
            Some(first) => Some(first) == self.last_child_of(cursor),
            None => false,
        }
    }
    /// Returns the number of children of the node at the specified cursor. Walks the entire child list.
    #[inline]
    fn num_children_of(&self, cursor: &Self::Cursor) -> usize {
        ChildCursor::new(self, cursor.clone()).count()
    }
    /// Returns a cursor to the *`n`*th child of the node at the specified cursor, or `None` if the child at that index does not exist.
    #[inline]
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor> {
        ChildCursor::new(self, cursor.clone()).nth(child_num)
    }
}

/// A pull-style cursor over the children of a node.
///
/// Besides being an iterator, the cursor can be restarted from the first child at any point.
pub struct ChildCursor<'a, T: Traversable + ?Sized> {
    traversable: &'a T,
    parent: T::Cursor,
    next: Option<T::Cursor>,
}
impl<'a, T: Traversable + ?Sized> ChildCursor<'a, T> {
    /// Creates a cursor over the children of the specified node, positioned before the first child.
    #[inline]
    pub fn new(traversable: &'a T, parent: T::Cursor) -> Self {
        let next = traversable.first_child_of(&parent);
        Self {
            traversable,
            parent,
            next,
        }
    }
    /// Returns the next child and advances past it, or `None` if there are no more children.
    #[inline]
    pub fn consume(&mut self) -> Option<T::Cursor> {
        let current = self.next.take()?;
        self.next = self.traversable.next_sibling_of(&current);
        Some(current)
    }
    /// Rewinds the cursor back to the first child.
    #[inline]
    pub fn restart(&mut self) {
        self.next = self.traversable.first_child_of(&self.parent);
    }
    /// Returns the node whose children are being iterated over.
    #[inline(always)]
    pub fn parent(&self) -> &T::Cursor {
        &self.parent
    }
    /// Returns the traversable the cursor is walking.
    #[inline(always)]
    pub fn traversable(&self) -> &'a T {
        self.traversable
    }
}
impl<T: Traversable + ?Sized> Iterator for ChildCursor<'_, T> {
    type Item = T::Cursor;
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.consume()
    }
}
impl<T: Traversable + ?Sized> FusedIterator for ChildCursor<'_, T> {}
impl<T: Traversable + ?Sized> Clone for ChildCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            parent: self.parent.clone(),
            next: self.next.clone(),
        }
    }
}
impl<T: Traversable + ?Sized> Debug for ChildCursor<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildCursor")
            .field("parent", &self.parent)
            .field("next", &self.next)
            .finish()
    }
}

/// A node yielded by [`DepthFirst`] or [`BreadthFirst`], together with its depth relative to the node the walk started at.
///
/// [`DepthFirst`]: struct.DepthFirst.html " "
/// [`BreadthFirst`]: struct.BreadthFirst.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Visit<C> {
    /// The visited node.
    pub node: C,
    /// The number of edges between the starting node and the visited node.
    pub depth: usize,
}

/// A pre-order depth-first iterator over a subtree.
///
/// Every call to `next` pops one node off the stack and pushes all of its children, last child first, so that children come out in their natural order.
pub struct DepthFirst<'a, T: Traversable + ?Sized> {
    traversable: &'a T,
    stack: Stack<(T::Cursor, usize)>,
}
impl<'a, T: Traversable + ?Sized> DepthFirst<'a, T> {
    /// Creates an iterator over the subtree rooted at the specified node.
    #[inline]
    pub fn new(traversable: &'a T, root: T::Cursor) -> Self {
        let mut stack = Stack::new();
        stack.push((root, 0));
        Self { traversable, stack }
    }
}
impl<T: Traversable + ?Sized> Iterator for DepthFirst<'_, T> {
    type Item = Visit<T::Cursor>;
    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        let mut child = self.traversable.last_child_of(&node);
        while let Some(current) = child {
            child = self.traversable.prev_sibling_of(&current);
            self.stack.push((current, depth + 1));
        }
        Some(Visit { node, depth })
    }
}
impl<T: Traversable + ?Sized> FusedIterator for DepthFirst<'_, T> {}
impl<T: Traversable + ?Sized> Debug for DepthFirst<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirst")
            .field("stack", &self.stack)
            .finish()
    }
}

/// A level-order breadth-first iterator over a subtree.
pub struct BreadthFirst<'a, T: Traversable + ?Sized> {
    traversable: &'a T,
    queue: VecDeque<(T::Cursor, usize)>,
}
impl<'a, T: Traversable + ?Sized> BreadthFirst<'a, T> {
    /// Creates an iterator over the subtree rooted at the specified node.
    #[inline]
    pub fn new(traversable: &'a T, root: T::Cursor) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((root, 0));
        Self { traversable, queue }
    }
}
impl<T: Traversable + ?Sized> Iterator for BreadthFirst<'_, T> {
    type Item = Visit<T::Cursor>;
    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.queue.pop_front()?;
        let children = ChildCursor::new(self.traversable, node.clone());
        self.queue.extend(children.map(|child| (child, depth + 1)));
        Some(Visit { node, depth })
    }
}
impl<T: Traversable + ?Sized> FusedIterator for BreadthFirst<'_, T> {}
impl<T: Traversable + ?Sized> Debug for BreadthFirst<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirst")
            .field("queue", &self.queue)
            .finish()
    }
}

/// Drives a pair of closures over a subtree, in either depth-first or breadth-first order.
///
/// The `init` closure receives the starting node and creates the accumulator for it. The `visit` closure is then called once per visited node with that node's accumulator, and returns the children which should be visited next, each with *its own* accumulator. This lets sibling subtrees carry independent context, like an indentation level, while still allowing the visitor to skip a subtree by not returning it.
///
/// # Example
/// ```rust
/// use bough::{forest::{Forest, NodeId}, traversal::Traverser};
///
/// let mut forest = Forest::new();
/// let root = forest.add("root");
/// let child = forest.node_mut(root).push_child("child");
/// forest.node_mut(child).push_child("grandchild");
///
/// let mut lines = Vec::new();
/// let mut traverser = Traverser::new(
///     |_: &NodeId| 0_usize,
///     |forest: &Forest<&str>, node: &NodeId, indent: &mut usize| {
///         lines.push(format!("{:width$}{}", "", forest.value(*node), width = *indent));
///         let children = forest.node(*node).child_cursor();
///         Ok::<_, ()>(children.map(|child| (child, *indent + 2)).collect())
///     },
/// );
/// traverser.apply_dfs(&forest, root).unwrap();
/// drop(traverser);
/// assert_eq!(lines, ["root", "  child", "    grandchild"]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Traverser<I, V> {
    init: I,
    visit: V,
}
impl<I, V> Traverser<I, V> {
    /// Creates a traverser from the initialization closure and the visiting closure.
    #[inline(always)]
    pub const fn new(init: I, visit: V) -> Self {
        Self { init, visit }
    }
    /// Visits the subtree rooted at `root` in depth-first order.
    ///
    /// # Errors
    /// Stops at the first error returned by the visiting closure, handing it back together with the accumulator that closure was working with.
    pub fn apply_dfs<T, A, E>(&mut self, traversable: &T, root: T::Cursor) -> Result<(), Halted<A, E>>
    where
        T: Traversable + ?Sized,
        I: FnMut(&T::Cursor) -> A,
        V: FnMut(&T, &T::Cursor, &mut A) -> Result<Vec<(T::Cursor, A)>, E>,
    {
        self.apply(traversable, root, Order::DepthFirst)
    }
    /// Visits the subtree rooted at `root` in breadth-first order.
    ///
    /// # Errors
    /// Same as [`apply_dfs`](#method.apply_dfs).
    pub fn apply_bfs<T, A, E>(&mut self, traversable: &T, root: T::Cursor) -> Result<(), Halted<A, E>>
    where
        T: Traversable + ?Sized,
        I: FnMut(&T::Cursor) -> A,
        V: FnMut(&T, &T::Cursor, &mut A) -> Result<Vec<(T::Cursor, A)>, E>,
    {
        self.apply(traversable, root, Order::BreadthFirst)
    }

    fn apply<T, A, E>(
        &mut self,
        traversable: &T,
        root: T::Cursor,
        order: Order,
    ) -> Result<(), Halted<A, E>>
    where
        T: Traversable + ?Sized,
        I: FnMut(&T::Cursor) -> A,
        V: FnMut(&T, &T::Cursor, &mut A) -> Result<Vec<(T::Cursor, A)>, E>,
    {
        let info = (self.init)(&root);
        let mut frontier = VecDeque::new();
        frontier.push_back((root, info));
        while let Some((node, mut info)) = frontier.pop_front() {
            let next = match (self.visit)(traversable, &node, &mut info) {
                Ok(next) => next,
                Err(error) => return Err(Halted { info, error }),
            };
            match order {
                Order::DepthFirst => {
                    for entry in next.into_iter().rev() {
                        frontier.push_front(entry);
                    }
                }
                Order::BreadthFirst => frontier.extend(next),
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Order {
    DepthFirst,
    BreadthFirst,
}

/// The error produced by [`Traverser`] when the visiting closure fails.
///
/// [`Traverser`]: struct.Traverser.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Halted<A, E> {
    /// The accumulator as it was left by the failing call.
    pub info: A,
    /// The error returned by the visiting closure.
    pub error: E,
}
impl<A, E> Halted<A, E> {
    /// Discards the accumulator, returning only the error.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // can't be const because of destructors
    pub fn into_error(self) -> E {
        self.error
    }
}
impl<A, E: Display> Display for Halted<A, E> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "traversal halted: {}", self.error)
    }
}
impl<A: Debug, E: std::error::Error + 'static> std::error::Error for Halted<A, E> {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
