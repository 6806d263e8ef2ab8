//! Recursive ceiling-biased binary split.

use router_ir::{DispatchNode, FunctionSelector};
use tracing::debug;

use crate::MAX_LEAF_SIZE;

/// Build the dispatch tree for an ascending, duplicate-free selector list
/// with the default leaf bound of [`MAX_LEAF_SIZE`].
pub fn build_dispatch_tree(selectors: Vec<FunctionSelector>) -> DispatchNode {
    build_dispatch_tree_with(selectors, MAX_LEAF_SIZE)
}

/// Build the dispatch tree with an explicit leaf bound.
///
/// A list longer than `max_leaf_size` is split so that the left child takes
/// the first `ceil(n / 2)` selectors and the right child the rest; both halves
/// are split again by the same rule. Leaves keep the input order, so the
/// left-to-right concatenation of leaves is exactly `selectors`.
///
/// A bound of 0 is treated as 1.
pub fn build_dispatch_tree_with(selectors: Vec<FunctionSelector>, max_leaf_size: usize) -> DispatchNode {
    debug_assert!(
        selectors.windows(2).all(|w| w[0].selector < w[1].selector),
        "dispatch tree input must be strictly ascending"
    );

    let root = split(selectors, max_leaf_size.max(1));

    let stats = TreeStats::of(&root);
    debug!(
        leaves = stats.leaves,
        depth = stats.depth,
        largest_leaf = stats.largest_leaf,
        "built dispatch tree"
    );

    root
}

fn split(mut selectors: Vec<FunctionSelector>, max_leaf_size: usize) -> DispatchNode {
    if selectors.len() <= max_leaf_size {
        return DispatchNode::Leaf(selectors);
    }

    let mid = selectors.len().div_ceil(2);
    let right = selectors.split_off(mid);

    DispatchNode::Branch(
        Box::new(split(selectors, max_leaf_size)),
        Box::new(split(right, max_leaf_size)),
    )
}

/// Shape summary of a dispatch tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub leaves: usize,
    pub depth: usize,
    pub largest_leaf: usize,
}

impl TreeStats {
    pub fn of(root: &DispatchNode) -> Self {
        let leaves = root.leaves();
        TreeStats {
            leaves: leaves.len(),
            depth: root.depth(),
            largest_leaf: leaves.iter().map(|l| l.len()).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests;
