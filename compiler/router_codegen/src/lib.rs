//! Source emission for the router contract.
//!
//! Each function here produces one text fragment destined for a named
//! template slot. Fragments are trimmed: the template supplies the indentation
//! of their first line, and every later line carries its own.
//!
//! # Fragments
//!
//! ```text
//! ConstantNames ─┬─► emit_modules()            → `modules`
//!                ├─► emit_selectors(tree)      → `selectors`
//!                ├─► emit_diamond_constructor  → `diamondConstructor`
//!                └─► emit_diamond_compat       → `diamondCompat`
//!                    emit_receive(flag)        → `receive`
//! ```

mod context;
mod diamond;
mod modules;
mod naming;
mod selectors;

pub use context::EmitContext;
pub use diamond::{emit_diamond_compat, emit_diamond_constructor, Facet, FacetRegistry};
pub use modules::{emit_modules, emit_receive};
pub use naming::{to_private_constant_case, ConstantNames};
pub use selectors::{emit_selectors, SELECTOR_BASE_DEPTH};
