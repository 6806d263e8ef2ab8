//! Function inclusion predicates.

use rustc_hash::FxHashSet;

/// Decides which functions are routed.
///
/// Excluded functions take no part in dispatch, validation, or the facet
/// registry. Any `Fn(&str) -> bool` closure is a filter.
pub trait FunctionFilter {
    fn include(&self, function: &str) -> bool;
}

impl<F> FunctionFilter for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn include(&self, function: &str) -> bool {
        self(function)
    }
}

/// Routes every function.
#[derive(Copy, Clone, Debug, Default)]
pub struct IncludeAll;

impl FunctionFilter for IncludeAll {
    #[inline]
    fn include(&self, _function: &str) -> bool {
        true
    }
}

/// Drops the `c_0x…` hooks that coverage instrumentation injects into
/// instrumented contracts.
#[derive(Copy, Clone, Debug, Default)]
pub struct SkipCoverageHooks;

impl FunctionFilter for SkipCoverageHooks {
    fn include(&self, function: &str) -> bool {
        !function.starts_with("c_0x")
    }
}

/// Drops an explicit set of function names.
#[derive(Clone, Debug, Default)]
pub struct ExcludeNames {
    names: FxHashSet<String>,
}

impl ExcludeNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExcludeNames {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl FunctionFilter for ExcludeNames {
    fn include(&self, function: &str) -> bool {
        !self.names.contains(function)
    }
}
