//! Building trees from a seed and a function which produces the children of each node.

use crate::{
    forest::{Forest, NodeId},
    tree::Tree,
    util::Stack,
};

/// Builds trees top-down from a seed payload.
///
/// The `next` closure receives the payload of a node and the context of that node, and returns the payloads of its children. The context starts out as the value passed to [`build`] and is cloned once for every child, so sibling subtrees never see each other's changes to it.
///
/// # Example
/// ```rust
/// use bough::{builder::Builder, forest::Forest};
///
/// let mut forest = Forest::new();
/// // Every node gets children until the depth limit, carried in the context, runs out
/// let mut builder = Builder::new(|value: &u32, budget: &mut u32| {
///     if *budget == 0 {
///         return Ok::<_, ()>(Vec::new());
///     }
///     *budget -= 1;
///     Ok(vec![value * 2, value * 2 + 1])
/// });
/// let tree = builder.build(&mut forest, 1, 2).unwrap();
/// assert_eq!(tree.size(), 7);
/// assert_eq!(tree.leaves().iter().map(|&x| *forest.value(x)).collect::<Vec<_>>(), [4, 5, 6, 7]);
/// ```
///
/// [`build`]: #method.build " "
#[derive(Copy, Clone, Debug)]
pub struct Builder<F> {
    next: F,
}
impl<F> Builder<F> {
    /// Creates a builder which uses the specified closure to produce children.
    #[inline(always)]
    pub const fn new(next: F) -> Self {
        Self { next }
    }
    /// Builds a tree in the specified forest, starting from a root with the `seed` payload.
    ///
    /// A node is only linked to its parent once its own children have been produced. Nodes are created in depth-first order, without recursion.
    ///
    /// # Errors
    /// Stops at the first error returned by the closure and returns it. Every node created by the failed build is freed, so the forest is left as it was before the call.
    #[tracing::instrument(level = "debug", skip(self, forest, seed, info))]
    pub fn build<P, I, E>(&mut self, forest: &mut Forest<P>, seed: P, info: I) -> Result<Tree, E>
    where
        F: FnMut(&P, &mut I) -> Result<Vec<P>, E>,
        I: Clone,
    {
        let root = forest.add(seed);
        let mut stack = Stack::<(NodeId, Option<NodeId>, I)>::new();
        stack.push((root, None, info));
        while let Some((node, parent, mut info)) = stack.pop() {
            let children = match (self.next)(forest.value(node), &mut info) {
                Ok(children) => children,
                Err(error) => {
                    // Everything which made it into the tree hangs off the root; the rest is standalone
                    let mut freed = forest.remove_subtree(root).len();
                    if node != root {
                        freed += forest.remove_subtree(node).len();
                    }
                    for (pending, ..) in stack {
                        freed += forest.remove_subtree(pending).len();
                    }
                    tracing::event!(tracing::Level::DEBUG, operation = "build", freed = freed as u64, "build failed");
                    return Err(error);
                }
            };
            // Fresh nodes are never linked anywhere yet
            if let Some(parent) = parent {
                forest.append(parent, node);
            }
            let first_pending = stack.len();
            for child in children {
                let child = forest.add(child);
                stack.push((child, Some(node), info.clone()));
            }
            // First child on top
            stack[first_pending..].reverse();
        }
        Ok(Tree::new(forest, root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(forest: &Forest<u32>, nodes: &[NodeId]) -> Vec<u32> {
        nodes.iter().map(|&x| *forest.value(x)).collect()
    }

    #[test]
    fn builds_in_order() {
        let mut forest = Forest::new();
        let mut builder = Builder::new(|value: &u32, _: &mut ()| {
            Ok::<_, ()>(match value {
                1 => vec![2, 3],
                3 => vec![4, 5],
                _ => Vec::new(),
            })
        });
        let tree = builder.build(&mut forest, 1, ()).unwrap();
        assert_eq!(tree.size(), 5);
        assert_eq!(values(&forest, tree.leaves()), [2, 4, 5]);
        assert_eq!(values(&forest, &tree.direct_children(&forest)), [2, 3]);
        assert_eq!(forest.len(), 5);
    }

    #[test]
    fn context_is_copied_per_child() {
        let mut forest = Forest::new();
        let mut builder = Builder::new(|value: &u32, path: &mut Vec<u32>| {
            path.push(*value);
            if path.len() == 3 {
                return Ok::<_, ()>(Vec::new());
            }
            Ok(vec![value * 10 + 1, value * 10 + 2])
        });
        let tree = builder.build(&mut forest, 1, Vec::new()).unwrap();
        assert_eq!(values(&forest, tree.leaves()), [111, 112, 121, 122]);
        assert_eq!(tree.size(), 7);
    }

    #[test]
    fn failure_frees_everything() {
        let mut forest = Forest::new();
        let unrelated = forest.add(0);
        let mut builder = Builder::new(|value: &u32, _: &mut ()| match value {
            1 => Ok(vec![2, 3, 4]),
            2 => Ok(vec![5]),
            5 => Err("no fives"),
            _ => Ok(Vec::new()),
        });
        assert_eq!(builder.build(&mut forest, 1, ()), Err("no fives"));
        assert_eq!(forest.len(), 1);
        assert!(forest.node(unrelated).is_leaf());
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        const DEPTH: u32 = 200_000;
        let mut forest = Forest::with_capacity(DEPTH as usize);
        let mut builder = Builder::new(|value: &u32, _: &mut ()| {
            Ok::<_, ()>(if *value < DEPTH { vec![value + 1] } else { Vec::new() })
        });
        let tree = builder.build(&mut forest, 1, ()).unwrap();
        assert_eq!(tree.size(), DEPTH as usize);
        assert_eq!(tree.height(&forest), DEPTH as usize - 1);
        assert_eq!(values(&forest, tree.leaves()), [DEPTH]);
    }
}
