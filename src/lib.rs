//! Implements arena-allocated first-child/next-sibling trees and the structural algorithms to work with them.
//!
//! # Overview
//! Nodes live in a [`Forest`], an arena backed by sparse storage, and link to each other through [`NodeId`] handles instead of pointers: every node knows its parent, its first and last child and its previous and next sibling. This gives constant-time appends, sibling walks and parent lookups without keeping a separate child collection in every node, and makes detaching a subtree a matter of clearing a few handles.
//!
//! On top of the forest:
//! - [`NodeRefMut`] provides the linkage primitives, which are the only way to change the links between nodes and keep them consistent
//! - The [`traversal`] module provides the [`Traversable`] capability trait, child cursors, depth-first and breadth-first iterators, a closure-driven [`Traverser`] and generic [algorithms] like finding common ancestors or branching points
//! - [`Tree`] is a handle to a tree inside a forest which caches its leaves and size, and offers pruning, skip-filtering and extracting or inserting [`Branch`]es
//! - [`Builder`] grows a tree from a seed payload and a closure producing children
//! - [`Forest::pretty_print`] renders a subtree as indented text
//!
//! None of the algorithms use recursion, so degenerate trees which are millions of nodes deep are handled without overflowing the stack.
//!
//! # Example
//! ```rust
//! use bough::prelude::*;
//!
//! let mut forest = Forest::new();
//! let tree = Builder::new(|value: &u32, _: &mut ()| {
//!     Ok::<_, ()>(match value {
//!         1 => vec![2, 3],
//!         3 => vec![4, 5],
//!         _ => Vec::new(),
//!     })
//! })
//! .build(&mut forest, 1, ())
//! .unwrap();
//!
//! // Remove 3, moving its children up
//! let trees = tree.skip_filter(&mut forest, |node| *node.value() == 3);
//! assert_eq!(trees.len(), 1);
//! let children = trees[0].direct_children(&forest);
//! assert_eq!(children.iter().map(|&x| *forest.value(x)).collect::<Vec<_>>(), [2, 4, 5]);
//! ```
//!
//! # Feature flags
//! - `unwind_safety` (**enabled by default**): aborts the process if an internal invariant of a tree is found to be broken, instead of unwinding with the forest in a corrupted state.
//! - `union_optimizations`: forwarded to `granite`, where it decreases the memory usage of sparse storage by using untagged unions. **Requires a nightly compiler** (see [tracking issue for RFC 2514]) and thus is disabled by default.
//!
//! # Logging
//! Structural operations on [`Tree`] and [`Builder`] emit [`tracing`] spans at the `debug` level and events at the `trace` level. Nothing is logged unless a subscriber is installed.
//!
//! [`Forest`]: forest/struct.Forest.html " "
//! [`Forest::pretty_print`]: forest/struct.Forest.html#method.pretty_print " "
//! [`NodeId`]: forest/struct.NodeId.html " "
//! [`NodeRefMut`]: forest/struct.NodeRefMut.html " "
//! [`traversal`]: traversal/index.html " "
//! [`Traversable`]: traversal/trait.Traversable.html " "
//! [`Traverser`]: traversal/struct.Traverser.html " "
//! [algorithms]: traversal/algorithms/index.html " "
//! [`Tree`]: tree/struct.Tree.html " "
//! [`Branch`]: tree/struct.Branch.html " "
//! [`Builder`]: builder/struct.Builder.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [tracking issue for RFC 2514]: https://github.com/rust-lang/rust/issues/55149 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used,
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
)]
#![allow(clippy::use_self)]

pub mod builder;
pub mod forest;
pub mod printer;
pub mod traversal;
pub mod tree;

pub use builder::Builder;
pub use forest::{Forest, NodeId, NodeRef, NodeRefMut};
pub use printer::{PrettyPrint, Style};
pub use traversal::Traversable;
pub use tree::{Branch, Tree};

/// A prelude for using Bough, containing the most used types for glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        builder::Builder,
        forest::{Forest, NodeId, NodeRef, NodeRefMut},
        traversal::{Traversable, Traverser, Visit},
        tree::{Branch, Tree},
        TreeError,
        TreeResult,
    };
}

pub(crate) mod util;

/// The error type returned by structural operations on [`Tree`]s.
///
/// [`Tree`]: tree/struct.Tree.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TreeError {
    /// The tree is empty, and the operation needs a root node.
    #[error("the tree does not have a root node")]
    MissingRoot,
    /// The node does not belong to the tree the operation was called on.
    #[error("node {node} is not part of the tree")]
    NodeNotPartOfTree {
        /// The offending node.
        node: NodeId,
    },
    /// The node is not one of the cached leaves of the tree.
    #[error("node {node} is not a leaf of the tree")]
    LeafNotFound {
        /// The offending node.
        node: NodeId,
    },
}
/// A result type for structural operations on trees.
pub type TreeResult<T> = Result<T, TreeError>;
