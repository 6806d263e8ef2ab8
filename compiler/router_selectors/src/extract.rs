//! Selector extraction and ordering.

use router_ir::{FunctionSelector, ModuleDescriptor, ModuleId, Selector};
use tracing::{debug, trace};

use crate::{validate_selectors, FunctionFilter, SelectorError};

/// Selectors of one module's routed functions, in ABI order.
///
/// Non-function fragments and unnamed fragments are skipped, then `filter`
/// is applied to the function name.
pub fn module_selectors(
    id: ModuleId,
    module: &ModuleDescriptor,
    filter: &dyn FunctionFilter,
) -> Vec<FunctionSelector> {
    module
        .fragments
        .iter()
        .filter_map(|fragment| {
            let name = fragment.function_name()?;
            if !filter.include(name) {
                trace!(module = %module.name, function = name, "function excluded by filter");
                return None;
            }
            let signature = fragment.signature()?;
            Some(FunctionSelector {
                module: id,
                module_name: module.name.clone(),
                function: name.to_string(),
                selector: Selector::of_signature(&signature),
            })
        })
        .collect()
}

/// Every routed selector across `modules`, ascending by value.
///
/// The sort is stable, so selectors of equal value stay in module order; such
/// duplicates are always rejected by validation before the list is returned.
///
/// # Errors
///
/// - [`SelectorError::NoModules`] if `modules` is empty.
/// - [`SelectorError::NoSelectors`] if no function survives filtering.
/// - [`SelectorError::Collision`] if any selector value occurs more than once.
pub fn collect_selectors(
    router_name: &str,
    modules: &[ModuleDescriptor],
    filter: &dyn FunctionFilter,
) -> Result<Vec<FunctionSelector>, SelectorError> {
    if modules.is_empty() {
        return Err(SelectorError::NoModules {
            router_name: router_name.to_string(),
        });
    }

    let mut selectors: Vec<FunctionSelector> = modules
        .iter()
        .enumerate()
        .flat_map(|(index, module)| module_selectors(ModuleId::new(index), module, filter))
        .collect();

    if selectors.is_empty() {
        return Err(SelectorError::NoSelectors {
            router_name: router_name.to_string(),
        });
    }

    selectors.sort_by_key(|s| s.selector);
    validate_selectors(&selectors)?;

    debug!(
        router = router_name,
        modules = modules.len(),
        selectors = selectors.len(),
        "collected selectors"
    );

    Ok(selectors)
}
