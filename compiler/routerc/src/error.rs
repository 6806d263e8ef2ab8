//! Generation errors.

use router_ir::FunctionSelector;
use router_selectors::SelectorError;
use router_template::{RenderError, TemplateError};

/// Category of a [`GenerateError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No modules, or no routable functions after filtering.
    EmptyInput,
    /// Two or more functions share a selector.
    SelectorCollision,
    /// The template could not be compiled or rendered.
    Template,
}

/// Why router generation failed. No output is produced on failure.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Selectors(#[from] SelectorError),

    #[error("invalid router template: {0}")]
    Template(#[from] TemplateError),

    #[error("cannot render router template: {0}")]
    Render(#[from] RenderError),
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Selectors(e) if e.is_empty_input() => ErrorKind::EmptyInput,
            GenerateError::Selectors(_) => ErrorKind::SelectorCollision,
            GenerateError::Template(_) | GenerateError::Render(_) => ErrorKind::Template,
        }
    }

    /// Every function involved in a selector collision, if that is the cause.
    pub fn collisions(&self) -> Option<&[FunctionSelector]> {
        match self {
            GenerateError::Selectors(SelectorError::Collision { collisions }) => Some(collisions),
            _ => None,
        }
    }
}
