use super::Traversable;

/// Returns the strict ancestors of the node, starting from the root of its tree.
pub fn ancestors<T>(traversable: &T, node: &T::Cursor) -> Vec<T::Cursor>
where
    T: Traversable + ?Sized,
{
    let mut result = Vec::new();
    let mut current = traversable.parent_of(node);
    while let Some(parent) = current {
        current = traversable.parent_of(&parent);
        result.push(parent);
    }
    result.reverse();
    result
}

/// Returns the number of strict ancestors of the node, i.e. `0` for root nodes.
pub fn depth<T>(traversable: &T, node: &T::Cursor) -> usize
where
    T: Traversable + ?Sized,
{
    let mut depth = 0;
    let mut current = traversable.parent_of(node);
    while let Some(parent) = current {
        current = traversable.parent_of(&parent);
        depth += 1;
    }
    depth
}

/// Returns `true` if `target` is a strict ancestor of `node`, `false` otherwise. A node is never a child of itself.
pub fn is_child_of<T>(traversable: &T, node: &T::Cursor, target: &T::Cursor) -> bool
where
    T: Traversable + ?Sized,
{
    let mut current = traversable.parent_of(node);
    while let Some(parent) = current {
        if &parent == target {
            return true;
        }
        current = traversable.parent_of(&parent);
    }
    false
}

/// Returns the lowest common ancestor of two nodes, counting every node as its own ancestor, or `None` if they belong to different trees.
///
/// Passing the same node twice returns that node. If one node is an ancestor of the other, that node is returned.
pub fn find_common_ancestor<T>(
    traversable: &T,
    first: &T::Cursor,
    second: &T::Cursor,
) -> Option<T::Cursor>
where
    T: Traversable + ?Sized,
{
    if first == second {
        return Some(first.clone());
    }
    let mut first_chain = ancestors(traversable, first);
    first_chain.push(first.clone());
    let mut second_chain = ancestors(traversable, second);
    second_chain.push(second.clone());
    first_chain
        .into_iter()
        .zip(second_chain)
        .take_while(|(a, b)| a == b)
        .last()
        .map(|(common, _)| common)
}
