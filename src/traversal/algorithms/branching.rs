use super::Traversable;

/// The place where a path from a node up to the root of its tree stops being a chain of only children.
///
/// Returned by [`find_branching_point`].
///
/// [`find_branching_point`]: fn.find_branching_point.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BranchingPoint<C> {
    /// The path reaches a node with more than one child.
    Found {
        /// The child of `at` which lies on the path.
        below: C,
        /// The closest ancestor with at least two children.
        at: C,
    },
    /// Every ancestor on the path has exactly one child, so the path makes up the entire tree from the root down to the node.
    Root {
        /// The root of the tree.
        top: C,
    },
}
impl<C> BranchingPoint<C> {
    /// Returns the topmost node which can be cut off without affecting any other path: `below` if a branching point was found, the root otherwise.
    #[inline]
    #[allow(clippy::missing_const_for_fn)] // can't be const because of destructors
    pub fn detachable(self) -> C {
        match self {
            Self::Found { below, .. } => below,
            Self::Root { top } => top,
        }
    }
    /// Returns `true` if a node with more than one child was found, `false` if the path reached the root.
    #[inline]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Walks up from the node through ancestors which have exactly one child, stopping at the first one which has more.
///
/// The node itself may have any number of children; only its ancestors are inspected.
pub fn find_branching_point<T>(traversable: &T, node: &T::Cursor) -> BranchingPoint<T::Cursor>
where
    T: Traversable + ?Sized,
{
    let mut below = node.clone();
    loop {
        match traversable.parent_of(&below) {
            Some(parent) if traversable.is_singleton(&parent) => below = parent,
            Some(at) => return BranchingPoint::Found { below, at },
            None => return BranchingPoint::Root { top: below },
        }
    }
}
