//! The `selectors` command: list every routed selector in dispatch order.

use std::fmt::Write as _;
use std::path::Path;

use router_ir::{FunctionSelector, ModuleDescriptor, ModuleId};
use router_selectors::{module_selectors, FunctionFilter};

use super::{CliError, CliOptions};
use crate::manifest::load_manifest;

/// One line per routed function, ascending by selector.
///
/// Unlike generation this never fails on collisions: functions whose selector
/// value is shared are listed and marked so they can be found.
pub fn render_selector_table(modules: &[ModuleDescriptor], filter: &dyn FunctionFilter) -> String {
    let mut selectors: Vec<FunctionSelector> = modules
        .iter()
        .enumerate()
        .flat_map(|(index, module)| module_selectors(ModuleId::new(index), module, filter))
        .collect();
    selectors.sort_by_key(|s| s.selector);

    let mut out = String::new();
    for (i, entry) in selectors.iter().enumerate() {
        let shared = (i > 0 && selectors[i - 1].selector == entry.selector)
            || selectors
                .get(i + 1)
                .is_some_and(|next| next.selector == entry.selector);
        if shared {
            let _ = writeln!(out, "{entry}  [collision]");
        } else {
            let _ = writeln!(out, "{entry}");
        }
    }
    out
}

/// Print the selector table for `manifest` to stdout.
pub fn run_selectors(manifest: &Path, options: &CliOptions) -> Result<(), CliError> {
    let modules = load_manifest(manifest)?;
    let filter = options.function_filter();
    print!("{}", render_selector_table(&modules, &filter));
    Ok(())
}
