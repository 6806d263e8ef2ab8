//! Router generation entry point.

use router_codegen::{
    emit_diamond_compat, emit_diamond_constructor, emit_modules, emit_receive, emit_selectors,
    ConstantNames, FacetRegistry,
};
use router_dispatch::build_dispatch_tree;
use router_ir::ModuleDescriptor;
use router_selectors::{collect_selectors, FunctionFilter};
use router_template::{Slots, Template};
use tracing::debug;

use crate::{GenerateError, GenerateOptions};

/// Generate router source for `modules`.
///
/// # Errors
///
/// - Empty input: `modules` is empty, or no function survives the filter.
/// - Selector collision: two routed functions share a selector. The error
///   lists every function involved.
/// - Template: a custom template does not compile, or rendering fails.
pub fn generate_router(
    modules: &[ModuleDescriptor],
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    for module in modules {
        debug!(module = %module.name, address = %module.address, "router module");
    }

    let filter: &dyn FunctionFilter = options.function_filter.as_ref();

    let selectors = collect_selectors(&options.router_name, modules, filter)?;
    let tree = build_dispatch_tree(selectors);

    let template = match options.template.as_deref() {
        Some(source) => Template::parse(source)?,
        None => Template::router()?,
    };

    let names = ConstantNames::new(modules);

    let mut slots = Slots::new();
    slots
        .set("moduleName", options.router_name.as_str())
        .set("modules", emit_modules(modules, &names))
        .set("selectors", emit_selectors(&tree, &names))
        .set("receive", emit_receive(options.can_receive_plain_eth));

    if options.has_diamond_compat {
        let registry = FacetRegistry::from_modules(modules, filter);
        slots
            .set(
                "diamondConstructor",
                emit_diamond_constructor(&registry, &names),
            )
            .set(
                "diamondCompat",
                emit_diamond_compat(&options.router_name, &registry, &names),
            );
    }

    let source = template.render(&slots)?;
    debug!(router = %options.router_name, bytes = source.len(), "rendered router");
    Ok(source)
}
