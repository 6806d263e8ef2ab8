//! Compiled templates.

use handlebars::{no_escape, Handlebars, RenderError, TemplateError};
use tracing::trace;

use crate::{Slots, ROUTER_TEMPLATE};

const TEMPLATE_NAME: &str = "router";

/// A compiled router template.
///
/// Owns a private Handlebars registry holding exactly one template, with
/// HTML escaping disabled.
pub struct Template {
    registry: Handlebars<'static>,
}

impl Template {
    /// Compile template source.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_template_string(TEMPLATE_NAME, source)?;
        trace!(bytes = source.len(), "compiled template");
        Ok(Template { registry })
    }

    /// The built-in [`ROUTER_TEMPLATE`].
    pub fn router() -> Result<Self, TemplateError> {
        Self::parse(ROUTER_TEMPLATE)
    }

    /// Render with `slots`.
    pub fn render(&self, slots: &Slots) -> Result<String, RenderError> {
        self.registry.render(TEMPLATE_NAME, slots)
    }
}

#[cfg(test)]
mod tests;
