//! Selector extraction and validation.
//!
//! Turns the ABI fragments of every module behind a router into one flat list
//! of `FunctionSelector`s, sorted ascending by selector value, and refuses
//! inputs the dispatcher could not route unambiguously.
//!
//! # Pipeline
//!
//! ```text
//! ModuleDescriptor[]
//!     │  module_selectors()   (per module, ABI order, filter applied)
//!     ▼
//! concatenate + stable sort
//!     │  validate_selectors() (every shared value is a collision)
//!     ▼
//! FunctionSelector[] (ascending, unique)
//! ```

mod error;
mod extract;
mod filter;
mod validate;

pub use error::SelectorError;
pub use extract::{collect_selectors, module_selectors};
pub use filter::{ExcludeNames, FunctionFilter, IncludeAll, SkipCoverageHooks};
pub use validate::validate_selectors;
