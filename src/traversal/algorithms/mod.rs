//! Ubiquitous algorithms for trees.
//!
//! Every algorithm here is a free function over a [`Traversable`] and a cursor into it, so it works for any tree-like structure and not just [`Forest`]. All of them walk the tree with explicit stacks or by following parent links, never by recursion.
//!
//! This includes:
//! - Ancestry: [`ancestors`], [`depth`], [`is_child_of`] and [`find_common_ancestor`]
//! - Subtree statistics: [`leaves`] and [`size`]
//! - Locating the point where a path joins the rest of the tree: [`find_branching_point`]
//!
//! [`Traversable`]: ../trait.Traversable.html " "
//! [`Forest`]: ../../forest/struct.Forest.html " "
//! [`ancestors`]: fn.ancestors.html " "
//! [`depth`]: fn.depth.html " "
//! [`is_child_of`]: fn.is_child_of.html " "
//! [`find_common_ancestor`]: fn.find_common_ancestor.html " "
//! [`leaves`]: fn.leaves.html " "
//! [`size`]: fn.size.html " "
//! [`find_branching_point`]: fn.find_branching_point.html " "

mod ancestors;
mod branching;
mod leaves;
pub use ancestors::*;
pub use branching::*;
pub use leaves::*;

use super::Traversable;
