//! Collision detection.

use router_ir::{FunctionSelector, Selector};
use rustc_hash::FxHashMap;

use crate::SelectorError;

/// Reject any selector value that occurs more than once.
///
/// Every occurrence of every shared value is reported, in the order of
/// `selectors`, so callers see all the functions they need to rename.
pub fn validate_selectors(selectors: &[FunctionSelector]) -> Result<(), SelectorError> {
    let mut counts: FxHashMap<Selector, usize> = FxHashMap::default();
    for s in selectors {
        *counts.entry(s.selector).or_default() += 1;
    }

    let collisions: Vec<FunctionSelector> = selectors
        .iter()
        .filter(|s| counts.get(&s.selector).is_some_and(|&n| n > 1))
        .cloned()
        .collect();

    if collisions.is_empty() {
        Ok(())
    } else {
        Err(SelectorError::Collision { collisions })
    }
}
