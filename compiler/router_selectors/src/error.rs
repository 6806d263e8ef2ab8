//! Selector pipeline errors.

use std::fmt::Write as _;

use router_ir::FunctionSelector;

/// Why a module list cannot be turned into a dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The module list was empty.
    #[error("No contracts found to render during \"{router_name}\" generation")]
    NoModules { router_name: String },

    /// Modules were supplied but none exposes a function after filtering.
    #[error("No functions found to route during \"{router_name}\" generation")]
    NoSelectors { router_name: String },

    /// Two or more functions share a selector value.
    ///
    /// `collisions` holds every function whose selector value occurs more than
    /// once, in ascending selector order.
    #[error("{}", collision_report(.collisions))]
    Collision { collisions: Vec<FunctionSelector> },
}

impl SelectorError {
    /// `true` for the empty-input variants.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            SelectorError::NoModules { .. } | SelectorError::NoSelectors { .. }
        )
    }
}

fn collision_report(collisions: &[FunctionSelector]) -> String {
    let mut out =
        String::from("The following contracts have repeated function selectors behind the same Router:\n");
    for selector in collisions {
        let _ = writeln!(out, "  {selector}");
    }
    out
}
