//! Type resolution.
//!
//! Two related questions come up during emission: what concrete type a
//! spec denotes once aliases are followed, and what type a variable
//! access chain lands on. Both are answered softly; an unregistered
//! name yields `None` rather than an error, because much of the host
//! environment (standard units, runtime helpers) has no source here and
//! emission usually has a reasonable fallback.

use std::fmt;

use pasgo_ast::{RecordSpec, TypeSpec, VarExpr, VarSuffix};
use pasgo_core::{NameId, Span, TranslateError};

use crate::Result;
use crate::translator::Translator;

impl<'ast, W: fmt::Write> Translator<'ast, W> {
    /// Follow named references until a concrete spec, a builtin, or an
    /// unregistered name. `Ok(None)` means the chain left the known
    /// world; a cycle among registered names is an error.
    pub(crate) fn resolve(&self, spec: TypeSpec<'ast>) -> Result<Option<TypeSpec<'ast>>> {
        let mut spec = spec;
        let mut seen: Vec<NameId> = Vec::new();
        loop {
            let TypeSpec::Ident(ident) = spec else {
                return Ok(Some(spec));
            };
            if ident.builtin.is_some() {
                return Ok(Some(spec));
            }
            let id = NameId::of(ident.name);
            if seen.contains(&id) {
                return Err(TranslateError::UnresolvedType {
                    name: ident.name.to_string(),
                    span: ident.span,
                });
            }
            seen.push(id);
            match self.types.lookup_id(id) {
                Some(next) => spec = next,
                None => return Ok(None),
            }
        }
    }

    /// Resolve the type a whole variable access lands on.
    pub(crate) fn resolve_access(
        &self,
        var: &VarExpr<'ast>,
    ) -> Result<Option<(TypeSpec<'ast>, &'ast str)>> {
        self.resolve_access_parts(var.name, var.suffixes, var.span)
    }

    /// Resolve the type of `name` followed by a prefix of its suffix
    /// chain. Returns the resolved spec together with the last field
    /// name crossed (the base name when no field was). `Ok(None)` when
    /// the base name is unbound or an alias leaves the known world;
    /// field and shape mismatches on known types are hard errors.
    pub(crate) fn resolve_access_parts(
        &self,
        name: &'ast str,
        suffixes: &[VarSuffix<'ast>],
        span: Span,
    ) -> Result<Option<(TypeSpec<'ast>, &'ast str)>> {
        let Some(binding) = self.scopes.lookup(name) else {
            return Ok(None);
        };
        let Some(mut spec) = self.resolve(binding.spec)? else {
            return Ok(None);
        };
        let mut field_name = name;
        for suffix in suffixes {
            match *suffix {
                VarSuffix::Field(field) => {
                    let TypeSpec::Record(record) = spec else {
                        return Err(TranslateError::Internal {
                            message: format!("field '{field}' accessed on a non-record type"),
                        });
                    };
                    let Some(field_spec) = find_field(record, field) else {
                        return Err(TranslateError::FieldNotFound {
                            field: field.to_string(),
                            span,
                        });
                    };
                    field_name = field;
                    spec = field_spec;
                }
                VarSuffix::Index(_) => {
                    spec = match spec {
                        TypeSpec::Array(array) => array.of,
                        // Indexing a string (or a builtin acting as one)
                        // keeps the string type; cells read as chars either way.
                        TypeSpec::String(_) | TypeSpec::Ident(_) => spec,
                        other => {
                            return Err(TranslateError::Internal {
                                message: format!("index applied to non-array type {other:?}"),
                            });
                        }
                    };
                }
                VarSuffix::Deref => {
                    let TypeSpec::Pointer(pointer) = spec else {
                        return Err(TranslateError::Internal {
                            message: "dereference of a non-pointer type".to_string(),
                        });
                    };
                    spec = pointer.to;
                }
            }
            match self.resolve(spec)? {
                Some(resolved) => spec = resolved,
                None => return Ok(None),
            }
        }
        Ok(Some((spec, field_name)))
    }
}

/// Case-insensitive field lookup in a record.
fn find_field<'ast>(record: &RecordSpec<'ast>, field: &str) -> Option<TypeSpec<'ast>> {
    let id = NameId::of(field);
    for section in record.sections {
        for name in section.names {
            if NameId::of(name) == id {
                return Some(section.ty);
            }
        }
    }
    None
}
