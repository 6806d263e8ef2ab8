//! Module constant naming.
//!
//! Every module is referenced in the emitted source through a private address
//! constant. The name is derived once per module list by [`ConstantNames`]
//! and looked up by [`ModuleId`] wherever the module is referenced, so the
//! declaration and every use always agree.

use router_ir::{ModuleDescriptor, ModuleId};
use rustc_hash::FxHashSet;

/// Private constant form of a module name: `SampleModule` → `_SAMPLE_MODULE`.
///
/// - A word boundary is inserted before an uppercase letter that follows a
///   lowercase letter or digit (`V2Router` → `_V2_ROUTER`), and before the
///   last capital of an acronym that starts a new word (`ERCModule` →
///   `_ERC_MODULE`).
/// - Literal underscores are doubled (`Sample_Module` → `_SAMPLE__MODULE`) so
///   they never read as an inserted boundary.
/// - Characters outside `[A-Za-z0-9_$]` become `_`.
///
/// Names that differ only in case map to the same form; [`ConstantNames`]
/// resolves those.
pub fn to_private_constant_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);
    out.push('_');

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            out.push_str("__");
            continue;
        }
        if !(c.is_ascii_alphanumeric() || c == '$') {
            out.push('_');
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_uppercase());
    }

    out
}

/// Constant names for an ordered module list, indexed by [`ModuleId`].
///
/// The first module to produce a given form keeps it. Later modules with the
/// same form get the smallest suffix `_2`, `_3`, ... that no other module's
/// natural form uses, so every module maps to a distinct identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantNames {
    names: Vec<String>,
}

impl ConstantNames {
    pub fn new(modules: &[ModuleDescriptor]) -> Self {
        let natural: Vec<String> = modules
            .iter()
            .map(|m| to_private_constant_case(&m.name))
            .collect();

        let mut taken: FxHashSet<String> = natural.iter().cloned().collect();
        let mut claimed: FxHashSet<&str> = FxHashSet::default();
        let mut names = Vec::with_capacity(natural.len());

        for base in &natural {
            if claimed.insert(base.as_str()) {
                names.push(base.clone());
                continue;
            }

            let mut n = 2usize;
            let unique = loop {
                let candidate = format!("{base}_{n}");
                if !taken.contains(&candidate) {
                    break candidate;
                }
                n += 1;
            };
            tracing::debug!(base = %base, unique = %unique, "disambiguated module constant");
            taken.insert(unique.clone());
            names.push(unique);
        }

        ConstantNames { names }
    }

    /// Constant name of a module.
    ///
    /// `id` must come from the module list this mapping was built from; an id
    /// past the end of that list has no name and yields `""`.
    #[inline]
    pub fn get(&self, id: ModuleId) -> &str {
        self.names.get(id.index()).map_or("", String::as_str)
    }

    /// Names in module order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests;
