//! Declaration binding.
//!
//! Before a declaration section is emitted, every name it introduces is
//! bound so that later initializers, bodies, and sibling declarations
//! resolve regardless of source order. Binding records types in the
//! registry and variables, constants, and routines in the current scope;
//! it never writes output.

use std::fmt;

use pasgo_ast::{DeclPart, FuncSpec, ParamGroup, ProcSpec, TypeSpec};
use pasgo_core::NameId;

use crate::translator::Translator;

impl<'ast, W: fmt::Write> Translator<'ast, W> {
    /// Bind every name introduced by `decls` in the current scope.
    pub(crate) fn bind_decls(&mut self, decls: &'ast [DeclPart<'ast>]) {
        for decl in decls {
            match *decl {
                DeclPart::Types(defs) => {
                    for def in defs.defs {
                        self.types.define(def.name, def.ty);
                    }
                }
                DeclPart::Vars(vars) => {
                    for decl in vars.decls {
                        for name in decl.names {
                            self.scopes.define_var(name, decl.ty);
                        }
                    }
                }
                DeclPart::Consts(consts) => {
                    // Only typed constants participate in resolution;
                    // untyped ones never need their spec looked up.
                    for decl in consts.decls {
                        if let Some(ty) = decl.ty {
                            self.scopes.define_var(decl.name, ty);
                        }
                    }
                }
                DeclPart::Proc(proc) => {
                    let spec = self.arena.alloc(ProcSpec {
                        params: proc.params,
                        span: proc.span,
                    });
                    self.scopes.define_var(proc.name, TypeSpec::Proc(spec));
                }
                DeclPart::Func(func) => {
                    let spec = self.arena.alloc(FuncSpec {
                        params: func.params,
                        result: func.result,
                        span: func.span,
                    });
                    self.scopes.define_var(func.name, TypeSpec::Func(spec));
                }
                DeclPart::Labels(_) => {}
            }
        }
    }

    /// Bind routine parameters into the scope just pushed for its body.
    pub(crate) fn bind_params(&mut self, params: &'ast [ParamGroup<'ast>]) {
        for group in params {
            for name in group.names {
                self.scopes
                    .define_param(name, TypeSpec::Ident(&group.ty), group.by_ref);
            }
        }
    }

    /// Bind the interface section of a used unit, if that unit was
    /// supplied to the translator. Unknown unit names are skipped; the
    /// standard units have no source here.
    pub(crate) fn bind_unit_interface(&mut self, name: &str) {
        let Some(unit) = self.units.get(&NameId::of(name)).copied() else {
            return;
        };
        self.bind_decls(unit.interface);
    }
}
