//! Named slot values.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Named slot values for rendering.
///
/// Serialized as a flat JSON object, which is the render context the
/// template sees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Slots {
    values: FxHashMap<String, String>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Builder form of [`Slots::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }
}
