//! The `generate` command: render a router for a manifest.

use std::io::Write as _;
use std::path::Path;

use tracing::debug;

use super::{CliError, CliOptions};
use crate::generate_router;
use crate::manifest::load_manifest;

/// Load `manifest` and generate the router source.
pub fn generate_from_manifest(manifest: &Path, options: &CliOptions) -> Result<String, CliError> {
    let modules = load_manifest(manifest)?;
    let generate_options = options.to_generate_options()?;
    Ok(generate_router(&modules, &generate_options)?)
}

/// Generate and write to `--output`, or to stdout when no output is given.
pub fn run_generate(manifest: &Path, options: &CliOptions) -> Result<(), CliError> {
    let source = generate_from_manifest(manifest, options)?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, &source).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "wrote router");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }
    Ok(())
}
