//! Command handlers for the `routergen` CLI.
//!
//! Each submodule implements one command. Flag parsing and the error type
//! shared by every command live here in the module root. Handlers return
//! errors instead of exiting so that `main` owns the exit status.

use std::path::PathBuf;

use router_selectors::{ExcludeNames, FunctionFilter, SkipCoverageHooks};

use crate::manifest::ManifestError;
use crate::{GenerateError, GenerateOptions};

mod generate;
mod selectors;

pub use generate::{generate_from_manifest, run_generate};
pub use selectors::{render_selector_table, run_selectors};

/// Options shared by the `generate` and `selectors` commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub router_name: String,
    pub template: Option<PathBuf>,
    pub receive: bool,
    pub diamond: bool,
    pub skip_coverage: bool,
    pub exclude: Vec<String>,
    pub output: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            router_name: "Router".to_string(),
            template: None,
            receive: false,
            diamond: false,
            skip_coverage: false,
            exclude: Vec::new(),
            output: None,
        }
    }
}

impl CliOptions {
    /// Function filter for `--skip-coverage` and `--exclude`.
    pub fn function_filter(&self) -> impl FunctionFilter + Send + Sync + 'static {
        let skip_coverage = self.skip_coverage;
        let exclude = ExcludeNames::new(self.exclude.iter().cloned());
        move |function: &str| {
            (!skip_coverage || SkipCoverageHooks.include(function)) && exclude.include(function)
        }
    }

    /// Library options, with the template file (if any) read from disk.
    pub fn to_generate_options(&self) -> Result<GenerateOptions, CliError> {
        let mut options = GenerateOptions::new()
            .with_router_name(self.router_name.as_str())
            .with_receive(self.receive)
            .with_diamond_compat(self.diamond)
            .with_filter(self.function_filter());
        if let Some(path) = &self.template {
            let source = std::fs::read_to_string(path).map_err(|source| CliError::Template {
                path: path.clone(),
                source,
            })?;
            options = options.with_template(source);
        }
        Ok(options)
    }
}

/// Parse the flags that follow the manifest path.
///
/// `-o` takes the next argument as its value; every other flag is a single
/// argument.
pub fn parse_cli_options(args: &[String]) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" {
            let path = args
                .get(i + 1)
                .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if let Some(output) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(output));
        } else if let Some(name) = arg.strip_prefix("--name=") {
            if name.is_empty() {
                return Err(CliError::MissingValue("--name".to_string()));
            }
            options.router_name = name.to_string();
        } else if let Some(template) = arg.strip_prefix("--template=") {
            options.template = Some(PathBuf::from(template));
        } else if arg == "--receive" {
            options.receive = true;
        } else if arg == "--diamond" {
            options.diamond = true;
        } else if arg == "--skip-coverage" {
            options.skip_coverage = true;
        } else if let Some(names) = arg.strip_prefix("--exclude=") {
            options.exclude.extend(
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            );
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
        i += 1;
    }
    Ok(options)
}

/// Why a command failed. `main` prints it as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("missing value for '{0}'")]
    MissingValue(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("cannot read template '{}': {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
