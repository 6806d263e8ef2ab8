//! Dispatch tree construction.
//!
//! Partitions a sorted selector list into a binary tree whose leaves hold at
//! most `MAX_LEAF_SIZE` selectors. Each internal node becomes one `lt` guard
//! in the emitted dispatcher and each leaf one `switch`, so a lookup costs
//! `O(log n)` comparisons plus a short linear scan.
//!
//! ```text
//!            [s0 .. s19]
//!             /       \
//!      [s0 .. s9]   [s10 .. s19]
//!       /     \       /      \
//!   [s0..s4][s5..s9][s10..s14][s15..s19]
//! ```

mod build;

pub use build::{build_dispatch_tree, build_dispatch_tree_with, TreeStats};

/// Maximum selectors per `switch` in the emitted dispatcher.
pub const MAX_LEAF_SIZE: usize = 9;
