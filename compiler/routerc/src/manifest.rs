//! Deployment manifest loading.
//!
//! A manifest is a JSON array with one entry per deployed module:
//!
//! ```json
//! [
//!   {
//!     "contractName": "TokenModule",
//!     "deployedAddress": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
//!     "abi": "artifacts/TokenModule.json"
//!   }
//! ]
//! ```
//!
//! `abi` is either the ABI array itself or a path, relative to the manifest,
//! to a file holding a bare ABI array or a compiler artifact with an `abi`
//! key. Keys other than these three are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use router_ir::{AbiFragment, Address, ModuleDescriptor};
use serde::Deserialize;
use tracing::{debug, trace};

/// Why a manifest or one of its ABI files could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry {
    contract_name: String,
    deployed_address: Address,
    abi: AbiSource,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AbiSource {
    Inline(Vec<AbiFragment>),
    Path(PathBuf),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AbiFile {
    Bare(Vec<AbiFragment>),
    Artifact { abi: Vec<AbiFragment> },
}

/// Load the modules listed in the manifest at `path`, in manifest order.
pub fn load_manifest(path: &Path) -> Result<Vec<ModuleDescriptor>, ManifestError> {
    let text = read(path)?;
    parse_manifest(&text, path)
}

/// Parse manifest `text` read from `path`.
///
/// `path` resolves relative ABI paths and names the manifest in errors; it is
/// not read.
pub fn parse_manifest(text: &str, path: &Path) -> Result<Vec<ModuleDescriptor>, ManifestError> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(text).map_err(|source| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    let mut modules = Vec::with_capacity(entries.len());
    for entry in entries {
        let fragments = match entry.abi {
            AbiSource::Inline(fragments) => fragments,
            AbiSource::Path(abi_path) => load_abi(&base.join(abi_path))?,
        };
        trace!(
            module = %entry.contract_name,
            fragments = fragments.len(),
            "manifest entry"
        );
        modules.push(ModuleDescriptor::new(
            entry.contract_name,
            entry.deployed_address,
            fragments,
        ));
    }

    debug!(path = %path.display(), modules = modules.len(), "loaded manifest");
    Ok(modules)
}

fn load_abi(path: &Path) -> Result<Vec<AbiFragment>, ManifestError> {
    let text = read(path)?;
    let file: AbiFile = serde_json::from_str(&text).map_err(|source| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match file {
        AbiFile::Bare(fragments) | AbiFile::Artifact { abi: fragments } => fragments,
    })
}

fn read(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
