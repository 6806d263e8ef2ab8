//! ABI fragments as they appear in compiler artifacts.
//!
//! Only the parts needed to compute function selectors are modelled: the
//! fragment kind, its name, and its input parameter types. Everything else in
//! the JSON (outputs, state mutability, parameter names) is ignored on
//! deserialization.

use serde::Deserialize;

use crate::Selector;

/// Kind tag of an ABI fragment (`"type"` in ABI JSON).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Function,
    Event,
    Constructor,
    Fallback,
    Receive,
    Error,
    /// Anything else, including a missing `type` key.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single ABI parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct AbiParam {
    /// Declared type, e.g. `uint256`, `address[]`, `tuple[2]`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Tuple components, in declaration order. Empty for non-tuple types.
    #[serde(default)]
    pub components: Vec<AbiParam>,
}

impl AbiParam {
    /// Create a non-tuple parameter.
    pub fn new(ty: impl Into<String>) -> Self {
        AbiParam {
            ty: ty.into(),
            components: Vec::new(),
        }
    }

    /// Create a tuple parameter. `suffix` carries array dimensions, e.g. `"[]"`.
    pub fn tuple(components: Vec<AbiParam>, suffix: &str) -> Self {
        AbiParam {
            ty: format!("tuple{suffix}"),
            components,
        }
    }

    /// Canonical type string used in signatures.
    ///
    /// Tuples expand to `(t1,t2,...)` followed by their array suffix, and the
    /// `uint`/`int` aliases widen to their 256-bit forms.
    pub fn canonical_type(&self) -> String {
        let ty = self.ty.trim();
        if let Some(suffix) = ty.strip_prefix("tuple") {
            let inner: Vec<String> = self.components.iter().map(AbiParam::canonical_type).collect();
            return format!("({}){suffix}", inner.join(","));
        }
        widen_alias(ty)
    }
}

fn widen_alias(ty: &str) -> String {
    for (alias, full) in [("uint", "uint256"), ("int", "int256")] {
        if let Some(rest) = ty.strip_prefix(alias) {
            if rest.is_empty() || rest.starts_with('[') {
                return format!("{full}{rest}");
            }
        }
    }
    ty.to_string()
}

/// A raw ABI fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct AbiFragment {
    #[serde(rename = "type", default)]
    pub kind: FragmentKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
}

impl AbiFragment {
    /// Create a function fragment with the given input types.
    pub fn function(name: impl Into<String>, inputs: Vec<AbiParam>) -> Self {
        AbiFragment {
            kind: FragmentKind::Function,
            name: Some(name.into()),
            inputs,
        }
    }

    /// Name of the function, if this fragment is a named function.
    ///
    /// Only these fragments take part in dispatch.
    pub fn function_name(&self) -> Option<&str> {
        match self.kind {
            FragmentKind::Function => self.name.as_deref(),
            _ => None,
        }
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`.
    ///
    /// Returns `None` for fragments without a name.
    pub fn signature(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let params: Vec<String> = self.inputs.iter().map(AbiParam::canonical_type).collect();
        Some(format!("{name}({})", params.join(",")))
    }

    /// Selector of this fragment's canonical signature.
    pub fn selector(&self) -> Option<Selector> {
        self.signature().map(|sig| Selector::of_signature(&sig))
    }
}
