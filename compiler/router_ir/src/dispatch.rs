//! Binary-search dispatch tree.

use crate::{FunctionSelector, Selector};

/// A node of the dispatch tree.
///
/// # Invariants
/// - A `Leaf` holds at least one selector, in ascending order.
/// - A `Branch` holds no selectors of its own and exactly two children.
/// - Every selector under `left` is numerically less than every selector
///   under `right`.
///
/// These hold by construction in the tree builder; nothing here re-sorts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchNode {
    Leaf(Vec<FunctionSelector>),
    Branch(Box<DispatchNode>, Box<DispatchNode>),
}

impl DispatchNode {
    /// Smallest selector reachable from this node.
    ///
    /// Follows first children down to the leftmost leaf. Returns `None` only
    /// for an empty leaf, which the builder never produces.
    pub fn min_selector(&self) -> Option<Selector> {
        let mut node = self;
        loop {
            match node {
                DispatchNode::Leaf(selectors) => return selectors.first().map(|s| s.selector),
                DispatchNode::Branch(left, _) => node = left,
            }
        }
    }

    /// Leaves in left-to-right order.
    pub fn leaves(&self) -> Vec<&[FunctionSelector]> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                DispatchNode::Leaf(selectors) => out.push(selectors.as_slice()),
                DispatchNode::Branch(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            DispatchNode::Leaf(_) => 0,
            DispatchNode::Branch(left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}
