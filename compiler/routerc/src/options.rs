//! Generation options.

use std::fmt;
use std::sync::Arc;

use router_selectors::{FunctionFilter, IncludeAll};

/// Inputs to [`crate::generate_router`] besides the module list.
#[derive(Clone)]
pub struct GenerateOptions {
    /// Name of the generated contract. Also namespaces the facet registry's
    /// storage slot.
    pub router_name: String,
    /// Custom template source; `None` uses the built-in router template.
    pub template: Option<String>,
    /// Emit `receive() external payable {}`.
    pub can_receive_plain_eth: bool,
    /// Emit diamond-compatibility scaffolding.
    pub has_diamond_compat: bool,
    /// Which functions are routed.
    pub function_filter: Arc<dyn FunctionFilter + Send + Sync>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            router_name: "Router".to_string(),
            template: None,
            can_receive_plain_eth: false,
            has_diamond_compat: false,
            function_filter: Arc::new(IncludeAll),
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_router_name(mut self, name: impl Into<String>) -> Self {
        self.router_name = name.into();
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_receive(mut self, enabled: bool) -> Self {
        self.can_receive_plain_eth = enabled;
        self
    }

    #[must_use]
    pub fn with_diamond_compat(mut self, enabled: bool) -> Self {
        self.has_diamond_compat = enabled;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl FunctionFilter + Send + Sync + 'static) -> Self {
        self.function_filter = Arc::new(filter);
        self
    }
}

impl fmt::Debug for GenerateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateOptions")
            .field("router_name", &self.router_name)
            .field("template", &self.template.as_ref().map(|_| "<custom>"))
            .field("can_receive_plain_eth", &self.can_receive_plain_eth)
            .field("has_diamond_compat", &self.has_diamond_compat)
            .finish_non_exhaustive()
    }
}
