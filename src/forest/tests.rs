use super::*;
use pretty_assertions::assert_eq;

fn values(forest: &Forest<u32>, nodes: &[NodeId]) -> Vec<u32> {
    nodes.iter().map(|&x| *forest.value(x)).collect()
}
fn children(forest: &Forest<u32>, node: NodeId) -> Vec<u32> {
    forest.node(node).children().map(|x| *x.value()).collect()
}
/// Checks the links of every node in the subtree against each other.
fn assert_consistent(forest: &Forest<u32>, root: NodeId) {
    for visit in forest.node(root).depth_first() {
        let node = forest.node(visit.node);
        let forward = node.children().map(|x| x.id()).collect::<Vec<_>>();
        let mut backward = Vec::new();
        let mut child = node.last_child();
        while let Some(current) = child {
            backward.push(current.id());
            child = current.prev_sibling();
        }
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(node.first_child().is_none(), node.last_child().is_none());
        for child in node.children() {
            assert_eq!(child.parent(), Some(node));
        }
    }
}

#[test]
fn add_children_round_trip() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let kids = (1..=4).map(|x| forest.add(x)).collect::<Vec<_>>();
    forest
        .node_mut(root)
        .add_children(vec![Some(kids[0]), None, Some(kids[1]), None, Some(kids[2]), Some(kids[3])]);
    assert_eq!(children(&forest, root), [1, 2, 3, 4]);
    for &kid in &kids {
        assert_eq!(forest.node(kid).parent().map(|x| x.id()), Some(root));
    }
    assert!(!forest.node(root).is_singleton());
    assert_consistent(&forest, root);
}

#[test]
fn add_child_moves_nodes() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let a = forest.node_mut(root).push_child(1);
    let b = forest.node_mut(root).push_child(2);
    let c = forest.node_mut(a).push_child(3);
    forest.node_mut(b).add_child(c);
    assert!(forest.node(a).is_leaf());
    assert_eq!(children(&forest, b), [3]);
    assert!(forest.node(b).is_singleton());
    // Reordering among siblings
    forest.node_mut(root).add_child(a);
    assert_eq!(children(&forest, root), [2, 1]);
    assert_consistent(&forest, root);
}

#[test]
fn refuses_cycles() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let child = forest.node_mut(root).push_child(1);
    let grandchild = forest.node_mut(child).push_child(2);
    forest.node_mut(grandchild).add_child(root);
    forest.node_mut(child).add_child(child);
    assert!(forest.node(root).is_root());
    assert!(forest.node(grandchild).is_leaf());
    assert_eq!(forest.node(grandchild).depth(), 2);
    assert_consistent(&forest, root);
}

#[test]
fn link_children_replaces() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let old = forest.node_mut(root).push_child(1);
    let new = [forest.add(2), forest.add(3)];
    forest
        .node_mut(root)
        .link_children(new.iter().copied().map(Some));
    assert_eq!(children(&forest, root), [2, 3]);
    assert!(forest.node(old).is_root());
    assert_consistent(&forest, root);
}

#[test]
fn delete_child_returns_grandchildren() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let a = forest.node_mut(root).push_child(1);
    let b = forest.node_mut(root).push_child(2);
    let c = forest.node_mut(root).push_child(3);
    let x = forest.node_mut(b).push_child(4);
    let y = forest.node_mut(b).push_child(5);

    let orphans = forest.node_mut(root).delete_child(Some(b));
    assert_eq!(orphans, [x, y]);
    assert_eq!(children(&forest, root), [1, 3]);
    for &orphan in &orphans {
        let orphan = forest.node(orphan);
        assert!(orphan.is_root());
        assert!(orphan.prev_sibling().is_none() && orphan.next_sibling().is_none());
    }
    let b = forest.node(b);
    assert!(b.is_root() && b.is_leaf());

    assert!(forest.node_mut(root).delete_child(None).is_empty());
    assert!(forest.node_mut(a).delete_child(Some(c)).is_empty());
    assert_eq!(children(&forest, root), [1, 3]);
    assert_consistent(&forest, root);
}

#[test]
fn remove_node_splices_children() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    forest.node_mut(root).push_child(1);
    let middle = forest.node_mut(root).push_child(2);
    forest.node_mut(root).push_child(3);
    forest.node_mut(middle).push_child(4);
    forest.node_mut(middle).push_child(5);

    assert!(forest.node_mut(middle).remove_node().is_empty());
    assert_eq!(children(&forest, root), [1, 4, 5, 3]);
    let middle = forest.node(middle);
    assert!(middle.is_root() && middle.is_leaf());
    assert_consistent(&forest, root);
}

#[test]
fn remove_node_at_the_edges() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let first = forest.node_mut(root).push_child(1);
    forest.node_mut(first).push_child(2);
    let last = forest.node_mut(root).push_child(3);
    forest.node_mut(last).push_child(4);
    let leaf = forest.node_mut(root).push_child(5);

    forest.node_mut(first).remove_node();
    forest.node_mut(leaf).remove_node();
    assert_eq!(children(&forest, root), [2, 3]);
    forest.node_mut(last).remove_node();
    assert_eq!(children(&forest, root), [2, 4]);
    assert_consistent(&forest, root);
}

#[test]
fn remove_root_returns_forest() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    forest.node_mut(root).push_child(1);
    forest.node_mut(root).push_child(2);
    let roots = forest.node_mut(root).remove_node();
    assert_eq!(values(&forest, &roots), [1, 2]);
    for &new_root in &roots {
        assert!(forest.node(new_root).is_root());
    }
    assert!(forest.node(root).is_leaf());
}

#[test]
fn cleanup_is_idempotent() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let a = forest.node_mut(root).push_child(1);
    let b = forest.node_mut(a).push_child(2);
    let sibling = forest.node_mut(root).push_child(3);

    forest.node_mut(a).cleanup();
    assert_eq!(children(&forest, root), [3]);
    assert!(forest.node(a).is_root() && forest.node(a).is_leaf());
    assert!(forest.node(b).is_root());

    forest.node_mut(a).cleanup();
    assert_eq!(children(&forest, root), [3]);
    assert!(forest.node(sibling).prev_sibling().is_none());
    assert_eq!(forest.len(), 4);
    assert_consistent(&forest, root);
}

#[test]
fn remove_subtree_frees() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let a = forest.node_mut(root).push_child(1);
    forest.node_mut(a).push_child(2);
    forest.node_mut(a).push_child(3);
    forest.node_mut(root).push_child(4);

    assert_eq!(forest.remove_subtree(a), [1, 2, 3]);
    assert_eq!(forest.len(), 2);
    assert_eq!(children(&forest, root), [4]);
    assert_consistent(&forest, root);
}

#[test]
fn deep_copy_is_standalone() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let a = forest.node_mut(root).push_child(1);
    forest.node_mut(a).push_child(2);
    forest.node_mut(root).push_child(3);

    let copy = forest.deep_copy(root);
    assert_eq!(forest.len(), 8);
    let original = forest
        .node(root)
        .depth_first()
        .map(|x| (*forest.value(x.node), x.depth))
        .collect::<Vec<_>>();
    let copied = forest
        .node(copy)
        .depth_first()
        .map(|x| (*forest.value(x.node), x.depth))
        .collect::<Vec<_>>();
    assert_eq!(original, copied);
    assert!(forest.node(copy).is_root());
    assert_consistent(&forest, copy);
}

#[test]
fn node_queries() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let a = forest.node_mut(root).push_child(1);
    let b = forest.node_mut(root).push_child(2);
    let c = forest.node_mut(root).push_child(3);
    let leaf = forest.node_mut(b).push_child(4);

    let node = forest.node(leaf);
    assert_eq!(node.ancestors(), [root, b]);
    assert!(node.is_child_of(root));
    assert!(!node.is_child_of(a));
    assert_eq!(forest.node(root).size(), 5);
    assert_eq!(forest.node(root).leaves(), [a, leaf, c]);
    assert_eq!(
        forest.node(b).siblings().map(|x| x.id()).collect::<Vec<_>>(),
        [a, c],
    );
    assert_eq!(forest.node(root).siblings().count(), 0);
    assert_eq!(forest.get(NodeId(100)), None);
}

#[test]
fn deep_trees_do_not_overflow() {
    const DEPTH: u32 = 200_000;
    let mut forest = Forest::with_capacity(DEPTH as usize);
    let root = forest.add(0);
    let mut current = root;
    for i in 1..DEPTH {
        current = forest.node_mut(current).push_child(i);
    }
    assert_eq!(forest.node(root).size(), DEPTH as usize);
    assert_eq!(forest.node(current).depth(), DEPTH as usize - 1);
    forest.node_mut(root).cleanup();
    assert!(forest.node(current).is_root());
    assert_eq!(forest.remove_subtree(root).len(), 1);
}

#[test]
fn appending_leaves_along_a_chain() {
    const DEPTH: u32 = 200_000;
    let mut forest = Forest::with_capacity(DEPTH as usize);
    let root = forest.add(0);
    let mut current = root;
    for i in 1..DEPTH {
        let next = forest.add(i);
        forest.node_mut(current).add_child(next);
        current = next;
    }
    assert_eq!(forest.node(current).depth(), DEPTH as usize - 1);
    // A leaf refuses only itself
    forest.node_mut(current).add_child(current);
    assert!(forest.node(current).is_leaf());
    // Subtrees are still checked against every ancestor
    forest.node_mut(current).add_child(root);
    assert!(forest.node(root).is_root());
    assert_eq!(forest.node(root).size(), DEPTH as usize);
}

#[test]
fn freed_handles_are_not_found() {
    let mut forest = Forest::new();
    let root = forest.add(0);
    let child = forest.node_mut(root).push_child(1);
    let grandchild = forest.node_mut(child).push_child(2);
    assert!(forest.contains(grandchild));

    forest.remove_subtree(child);
    assert!(!forest.contains(child));
    assert!(forest.get(child).is_none());
    assert!(forest.get_mut(grandchild).is_none());
    assert!(forest.get(root).is_some());

    let fresh = (3..6).map(|x| forest.add(x)).collect::<Vec<_>>();
    for &node in &fresh {
        assert!(forest.contains(node));
        assert!(forest.node(node).is_root());
    }
    assert_eq!(forest.len(), 4);
}
