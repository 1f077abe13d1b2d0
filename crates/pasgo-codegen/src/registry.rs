//! Named type definitions.
//!
//! Pascal `type` sections introduce names that later declarations and
//! expressions refer back to. The registry stores one spec per name,
//! keyed by [`NameId`] so lookups ignore identifier case.

use pasgo_ast::TypeSpec;
use pasgo_core::NameId;
use rustc_hash::FxHashMap;

/// Flat table of named types for the file being translated.
///
/// Pascal units share a single global type namespace here; there is no
/// per-unit qualification. A redefinition silently replaces the earlier
/// entry, matching the last-write-wins behavior of sequential binding.
#[derive(Debug, Default)]
pub struct TypeRegistry<'ast> {
    types: FxHashMap<NameId, TypeSpec<'ast>>,
}

impl<'ast> TypeRegistry<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `spec` under `name`, replacing any earlier definition.
    pub fn define(&mut self, name: &str, spec: TypeSpec<'ast>) {
        self.types.insert(NameId::of(name), spec);
    }

    /// Look up a type by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<TypeSpec<'ast>> {
        self.lookup_id(NameId::of(name))
    }

    /// Look up a type by its precomputed [`NameId`].
    pub fn lookup_id(&self, id: NameId) -> Option<TypeSpec<'ast>> {
        self.types.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasgo_ast::{Builtin, StringSpec, TypeIdent};
    use pasgo_core::Span;

    #[test]
    fn lookup_ignores_case() {
        let ident = TypeIdent::builtin(Builtin::Integer, Span::default());
        let mut registry = TypeRegistry::new();
        registry.define("TCoord", TypeSpec::Ident(&ident));

        assert!(registry.lookup("tcoord").is_some());
        assert!(registry.lookup("TCOORD").is_some());
        assert!(registry.lookup("TCoords").is_none());
    }

    #[test]
    fn redefinition_replaces() {
        let ident = TypeIdent::builtin(Builtin::Integer, Span::default());
        let mut registry = TypeRegistry::new();
        registry.define("TLine", TypeSpec::Ident(&ident));
        registry.define("tline", TypeSpec::String(StringSpec { max_len: 80 }));

        assert_eq!(registry.len(), 1);
        match registry.lookup("TLine") {
            Some(TypeSpec::String(spec)) => assert_eq!(spec.max_len, 80),
            other => panic!("expected the later string spec, got {other:?}"),
        }
    }
}
