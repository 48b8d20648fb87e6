use super::*;
use super::algorithms::*;
use crate::forest::{Forest, NodeId};
use pretty_assertions::assert_eq;

/// ```text
/// 1
/// |-- 2
/// |   |-- 4
/// |   `-- 5
/// `-- 3
///     `-- 6
/// ```
fn sample() -> (Forest<u32>, [NodeId; 6]) {
    let mut forest = Forest::new();
    let one = forest.add(1);
    let two = forest.node_mut(one).push_child(2);
    let three = forest.node_mut(one).push_child(3);
    let four = forest.node_mut(two).push_child(4);
    let five = forest.node_mut(two).push_child(5);
    let six = forest.node_mut(three).push_child(6);
    (forest, [one, two, three, four, five, six])
}

fn values(forest: &Forest<u32>, visits: impl Iterator<Item = Visit<NodeId>>) -> Vec<(u32, usize)> {
    visits.map(|x| (*forest.value(x.node), x.depth)).collect()
}

#[test]
fn depth_first_order() {
    let (forest, [one, ..]) = sample();
    assert_eq!(
        values(&forest, DepthFirst::new(&forest, one)),
        [(1, 0), (2, 1), (4, 2), (5, 2), (3, 1), (6, 2)],
    );
}

#[test]
fn breadth_first_order() {
    let (forest, [one, ..]) = sample();
    assert_eq!(
        values(&forest, BreadthFirst::new(&forest, one)),
        [(1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 2)],
    );
}

#[test]
fn walks_start_at_depth_zero_from_inner_nodes() {
    let (forest, [_, two, ..]) = sample();
    let mut walk = forest.node(two).depth_first();
    assert_eq!(walk.next(), Some(Visit { node: two, depth: 0 }));
    assert_eq!(walk.count(), 2);
}

#[test]
fn child_cursor() {
    let (forest, [one, two, three, ..]) = sample();
    let mut cursor = ChildCursor::new(&forest, one);
    assert_eq!(cursor.consume(), Some(two));
    assert_eq!(cursor.consume(), Some(three));
    assert_eq!(cursor.consume(), None);
    assert_eq!(cursor.consume(), None);
    cursor.restart();
    assert_eq!(cursor.collect::<Vec<_>>(), [two, three]);
    assert_eq!(forest.num_children_of(&one), 2);
    assert_eq!(forest.nth_child_of(&one, 1), Some(three));
    assert_eq!(forest.nth_child_of(&one, 2), None);
}

#[test]
fn ancestry() {
    let (forest, [one, two, three, four, five, six]) = sample();
    assert_eq!(ancestors(&forest, &six), [one, three]);
    assert!(ancestors(&forest, &one).is_empty());
    assert_eq!(depth(&forest, &four), 2);
    assert!(is_child_of(&forest, &four, &one));
    assert!(is_child_of(&forest, &four, &two));
    assert!(!is_child_of(&forest, &four, &four));
    assert!(!is_child_of(&forest, &five, &three));
}

#[test]
fn lowest_common_ancestor() {
    let (mut forest, [one, two, _, four, five, six]) = sample();
    assert_eq!(find_common_ancestor(&forest, &four, &five), Some(two));
    assert_eq!(find_common_ancestor(&forest, &four, &six), Some(one));
    assert_eq!(find_common_ancestor(&forest, &four, &two), Some(two));
    assert_eq!(find_common_ancestor(&forest, &six, &six), Some(six));
    let stray = forest.add(7);
    assert_eq!(find_common_ancestor(&forest, &four, &stray), None);
}

#[test]
fn subtree_statistics() {
    let (forest, [one, two, three, four, five, six]) = sample();
    assert_eq!(leaves(&forest, &one), [four, five, six]);
    assert_eq!(leaves(&forest, &three), [six]);
    assert_eq!(leaves(&forest, &four), [four]);
    assert_eq!(size(&forest, &one), 6);
    assert_eq!(size(&forest, &two), 3);
}

#[test]
fn branching_points() {
    let (mut forest, [one, two, three, four, _, six]) = sample();
    assert_eq!(
        find_branching_point(&forest, &six),
        BranchingPoint::Found { below: three, at: one },
    );
    assert_eq!(
        find_branching_point(&forest, &four),
        BranchingPoint::Found { below: four, at: two },
    );
    assert_eq!(find_branching_point(&forest, &one), BranchingPoint::Root { top: one });

    let top = forest.add(0);
    let middle = forest.node_mut(top).push_child(0);
    let bottom = forest.node_mut(middle).push_child(0);
    let point = find_branching_point(&forest, &bottom);
    assert!(!point.is_found());
    assert_eq!(point.detachable(), top);
}

#[test]
fn traverser_threads_accumulators() {
    let (forest, [one, ..]) = sample();
    let mut seen = Vec::new();
    let mut traverser = Traverser::new(
        |_: &NodeId| 0_usize,
        |forest: &Forest<u32>, node: &NodeId, level: &mut usize| {
            seen.push((*forest.value(*node), *level));
            let children = forest.node(*node).child_cursor();
            Ok::<_, ()>(children.map(|child| (child, *level + 1)).collect())
        },
    );
    traverser.apply_bfs(&forest, one).unwrap();
    drop(traverser);
    assert_eq!(seen, [(1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 2)]);
}

#[test]
fn traverser_depth_first_and_pruning() {
    let (forest, [one, ..]) = sample();
    let mut seen = Vec::new();
    let mut traverser = Traverser::new(
        |_: &NodeId| (),
        |forest: &Forest<u32>, node: &NodeId, _: &mut ()| {
            seen.push(*forest.value(*node));
            // Don't descend into 2
            let children = forest
                .node(*node)
                .children()
                .filter(|child| *child.value() != 2)
                .map(|child| (child.id(), ()));
            Ok::<_, ()>(children.collect())
        },
    );
    traverser.apply_dfs(&forest, one).unwrap();
    drop(traverser);
    assert_eq!(seen, [1, 3, 6]);
}

#[test]
fn traverser_halts_on_first_error() {
    let (forest, [one, ..]) = sample();
    let mut calls = 0;
    let mut traverser = Traverser::new(
        |_: &NodeId| String::from("root"),
        |forest: &Forest<u32>, node: &NodeId, path: &mut String| {
            calls += 1;
            let value = *forest.value(*node);
            path.push_str(&format!("/{}", value));
            if value == 4 {
                return Err("hit 4");
            }
            let children = forest.node(*node).child_cursor();
            Ok(children.map(|child| (child, path.clone())).collect())
        },
    );
    let halted = traverser.apply_dfs(&forest, one).unwrap_err();
    drop(traverser);
    assert_eq!(calls, 3);
    assert_eq!(halted.info, "root/1/2/4");
    assert_eq!(halted.error, "hit 4");
    assert_eq!(halted.to_string(), "traversal halted: hit 4");
}
