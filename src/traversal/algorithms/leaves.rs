use crate::util::Stack;
use super::Traversable;

/// Returns the leaves of the subtree rooted at the node, in depth-first order. A leaf node is its own only leaf.
pub fn leaves<T>(traversable: &T, node: &T::Cursor) -> Vec<T::Cursor>
where
    T: Traversable + ?Sized,
{
    let mut result = Vec::new();
    let mut stack = Stack::new();
    stack.push(node.clone());
    while let Some(current) = stack.pop() {
        if traversable.is_leaf(&current) {
            result.push(current);
            continue;
        }
        push_children_reversed(traversable, &current, &mut stack);
    }
    result
}

/// Returns the number of nodes in the subtree rooted at the node, including the node itself.
pub fn size<T>(traversable: &T, node: &T::Cursor) -> usize
where
    T: Traversable + ?Sized,
{
    let mut size = 0;
    let mut stack = Stack::new();
    stack.push(node.clone());
    while let Some(current) = stack.pop() {
        size += 1;
        push_children_reversed(traversable, &current, &mut stack);
    }
    size
}

fn push_children_reversed<T>(traversable: &T, node: &T::Cursor, stack: &mut Stack<T::Cursor>)
where
    T: Traversable + ?Sized,
{
    let mut child = traversable.last_child_of(node);
    while let Some(current) = child {
        child = traversable.prev_sibling_of(&current);
        stack.push(current);
    }
}
