use pretty_assertions::assert_eq;
use proptest::prelude::*;
use router_ir::{ModuleId, Selector};

use super::*;

fn selectors(n: usize) -> Vec<FunctionSelector> {
    (0..n)
        .map(|i| {
            let value = u32::try_from(i).unwrap_or(u32::MAX) * 0x0100_0000 / 64 + 1;
            FunctionSelector {
                module: ModuleId::new(0),
                module_name: "Module".to_string(),
                function: format!("f{i}"),
                selector: Selector::new(value),
            }
        })
        .collect()
}

fn leaf_sizes(root: &DispatchNode) -> Vec<usize> {
    root.leaves().iter().map(|l| l.len()).collect()
}

#[test]
fn test_single_selector_is_one_leaf() {
    let root = build_dispatch_tree(selectors(1));
    assert!(matches!(root, DispatchNode::Leaf(_)));
    assert_eq!(leaf_sizes(&root), vec![1]);
}

#[test]
fn test_max_leaf_size_is_one_leaf() {
    let root = build_dispatch_tree(selectors(MAX_LEAF_SIZE));
    assert!(matches!(root, DispatchNode::Leaf(_)));
    assert_eq!(leaf_sizes(&root), vec![9]);
}

#[test]
fn test_one_over_max_splits_once() {
    let root = build_dispatch_tree(selectors(MAX_LEAF_SIZE + 1));
    assert_eq!(root.depth(), 1);
    assert_eq!(leaf_sizes(&root), vec![5, 5]);
}

#[test]
fn test_odd_split_favours_left() {
    let root = build_dispatch_tree(selectors(11));
    assert_eq!(leaf_sizes(&root), vec![6, 5]);
}

#[test]
fn test_twenty_selectors() {
    let root = build_dispatch_tree(selectors(20));
    assert_eq!(root.depth(), 2);
    assert_eq!(leaf_sizes(&root), vec![5, 5, 5, 5]);
    assert_eq!(
        TreeStats::of(&root),
        TreeStats {
            leaves: 4,
            depth: 2,
            largest_leaf: 5
        }
    );
}

#[test]
fn test_uneven_recursion() {
    // 37 -> 19 + 18 -> (10 + 9) + (9 + 9) -> ((5 + 5) + 9) + (9 + 9)
    let root = build_dispatch_tree(selectors(37));
    assert_eq!(leaf_sizes(&root), vec![5, 5, 9, 9, 9]);
    assert_eq!(root.depth(), 3);
}

#[test]
fn test_custom_bound() {
    let root = build_dispatch_tree_with(selectors(5), 2);
    assert_eq!(leaf_sizes(&root), vec![2, 1, 2]);

    let zero = build_dispatch_tree_with(selectors(3), 0);
    assert_eq!(leaf_sizes(&zero), vec![1, 1, 1]);
}

#[test]
fn test_branch_children_are_ordered() {
    fn check(node: &DispatchNode) {
        if let DispatchNode::Branch(left, right) = node {
            let left_max = left.leaves().last().and_then(|l| l.last()).map(|s| s.selector);
            assert!(left_max < right.min_selector());
            check(left);
            check(right);
        }
    }
    check(&build_dispatch_tree(selectors(50)));
}

proptest! {
    #[test]
    fn leaves_preserve_input_exactly(n in 1usize..200, bound in 1usize..16) {
        let input = selectors(n);
        let root = build_dispatch_tree_with(input.clone(), bound);

        let flat: Vec<FunctionSelector> = root.leaves().into_iter().flatten().cloned().collect();
        prop_assert_eq!(flat, input);
        prop_assert!(root.leaves().iter().all(|l| !l.is_empty() && l.len() <= bound));
    }
}
