//! Router generator.
//!
//! Generates the source of a router contract that forwards every call to the
//! module implementing its 4-byte selector, using a binary search over sorted
//! selectors instead of a linear `if`/`else` chain.
//!
//! # Architecture
//!
//! ```text
//! ModuleDescriptor[]
//!        ↓
//!   collect_selectors   (router_selectors: extract, sort, reject collisions)
//!        ↓
//!   build_dispatch_tree (router_dispatch: leaves of at most 9 selectors)
//!        ↓
//!   emit_*              (router_codegen: dispatcher, constants, diamond)
//!        ↓
//!   Template::render    (router_template: fill named slots)
//! ```
//!
//! Generation is a pure function of its inputs: no state survives a call and
//! identical inputs produce byte-identical output.

pub mod commands;
mod error;
mod generate;
pub mod manifest;
mod options;

use std::sync::Once;

pub use error::{ErrorKind, GenerateError};
pub use generate::generate_router;
pub use options::GenerateOptions;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=routerc=debug` or `RUST_LOG=debug` for every stage.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
