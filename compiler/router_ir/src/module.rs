//! Modules behind the router and the selectors they contribute.

use std::fmt;

use crate::{AbiFragment, Address, Selector};

/// A deployed module the router dispatches to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub address: Address,
    /// Raw ABI of the module; only named functions are routed.
    pub fragments: Vec<AbiFragment>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, address: Address, fragments: Vec<AbiFragment>) -> Self {
        ModuleDescriptor {
            name: name.into(),
            address,
            fragments,
        }
    }
}

/// Position of a module in the caller's ordered module list.
///
/// Selectors refer to their owner by position so that constant lookup never
/// depends on module names being unique.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ModuleId(usize);

impl ModuleId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        ModuleId(index)
    }

    /// Index into the module list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A function exposed through the router: owner, name, and selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionSelector {
    pub module: ModuleId,
    pub module_name: String,
    pub function: String,
    pub selector: Selector,
}

/// Renders as `0x12345678 // Module.function()`, the form used in collision
/// reports and in emitted case comments.
impl fmt::Display for FunctionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} // {}.{}()",
            self.selector, self.module_name, self.function
        )
    }
}
