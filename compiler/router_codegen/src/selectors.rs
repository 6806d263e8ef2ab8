//! Binary-search dispatcher emission.
//!
//! Walks the dispatch tree depth-first and emits inline assembly for the body
//! of `findImplementation(sig) -> result`:
//!
//! ```text
//! if lt(sig,0x70a08231) {
//!     switch sig
//!     case 0x095ea7b3 { result := _TOKEN_MODULE } // TokenModule.approve()
//!     case 0x18160ddd { result := _TOKEN_MODULE } // TokenModule.totalSupply()
//!     leave
//! }
//! switch sig
//! case 0x70a08231 { result := _TOKEN_MODULE } // TokenModule.balanceOf()
//! leave
//! ```
//!
//! The right half of every guard is emitted at the guard's own depth as the
//! fall-through, so the output is a left-leaning chain of guards rather than
//! nested `else` blocks.

use router_ir::DispatchNode;

use crate::{ConstantNames, EmitContext};

/// Indentation depth of the `findImplementation` body in the router template.
pub const SELECTOR_BASE_DEPTH: usize = 4;

/// Emit the dispatcher for `root`.
pub fn emit_selectors(root: &DispatchNode, names: &ConstantNames) -> String {
    let mut ctx = EmitContext::new(SELECTOR_BASE_DEPTH);
    emit_node(&mut ctx, root, names);
    ctx.into_fragment()
}

fn emit_node(ctx: &mut EmitContext, node: &DispatchNode, names: &ConstantNames) {
    match node {
        DispatchNode::Branch(left, right) => {
            match right.min_selector() {
                Some(pivot) => {
                    ctx.writeln(&format!("if lt(sig,{pivot}) {{"));
                    ctx.indent();
                    emit_node(ctx, left, names);
                    ctx.dedent();
                    ctx.writeln("}");
                }
                // An empty right half routes nothing; the left half needs no guard.
                None => emit_node(ctx, left, names),
            }
            emit_node(ctx, right, names);
        }
        DispatchNode::Leaf(selectors) => {
            if !selectors.is_empty() {
                ctx.writeln("switch sig");
                for s in selectors {
                    ctx.writeln(&format!(
                        "case {} {{ result := {} }} // {}.{}()",
                        s.selector,
                        names.get(s.module),
                        s.module_name,
                        s.function
                    ));
                }
            }
            ctx.writeln("leave");
        }
    }
}
