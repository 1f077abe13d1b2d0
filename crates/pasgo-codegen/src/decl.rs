//! Declaration emission.
//!
//! Scalar constants emit as Go consts; structured constants cannot be
//! Go consts and emit as typed vars instead. Enumerations become a
//! byte-sized named type plus a 1-based iota block. Top-level routines
//! become named funcs; nested routines become function values bound to
//! a local, since Go has no nested named funcs.

use std::fmt;

use pasgo_ast::{
    ConstDecl, ConstDecls, DeclPart, EnumSpec, Expr, FuncDecl, ProcDecl, TypeDefs, TypeSpec,
    VarDecls,
};
use pasgo_core::TranslateError;

use crate::Result;
use crate::scope::ScopeKind;
use crate::translator::Translator;

impl<'ast, W: fmt::Write> Translator<'ast, W> {
    pub(crate) fn decls(&mut self, parts: &'ast [DeclPart<'ast>], top_level: bool) -> Result<()> {
        for part in parts {
            self.decl(*part, top_level)?;
        }
        Ok(())
    }

    fn decl(&mut self, part: DeclPart<'ast>, top_level: bool) -> Result<()> {
        match part {
            DeclPart::Consts(group) => self.const_decls(group),
            DeclPart::Types(group) => self.type_defs(group),
            DeclPart::Vars(group) => self.var_decls(group),
            // Labels carry no declaration; the labeled statements print
            // them.
            DeclPart::Labels(_) => Ok(()),
            DeclPart::Proc(decl) => self.proc_decl(decl, top_level),
            DeclPart::Func(decl) => self.func_decl(decl, top_level),
        }
    }

    fn const_decls(&mut self, group: &'ast ConstDecls<'ast>) -> Result<()> {
        let mut scalars = Vec::new();
        let mut structured = Vec::new();
        for decl in group.decls {
            match decl.value {
                Expr::ConstArray(_) | Expr::ConstRecord(_) => structured.push(decl),
                _ => scalars.push(decl),
            }
        }
        if !scalars.is_empty() {
            if scalars.len() == 1 {
                self.print("const ")?;
            } else {
                self.print("const (\n")?;
            }
            for decl in &scalars {
                self.print(decl.name)?;
                if let Some(ty) = decl.ty {
                    self.print(" ")?;
                    self.type_spec(ty)?;
                }
                self.print(" = ")?;
                self.expr(decl.value)?;
                self.print("\n")?;
            }
            if scalars.len() != 1 {
                self.print(")\n")?;
            }
        }
        if !structured.is_empty() {
            if structured.len() == 1 {
                self.print("var ")?;
            } else {
                self.print("var (\n")?;
            }
            for decl in &structured {
                self.structured_const(decl)?;
            }
            if structured.len() != 1 {
                self.print(")\n")?;
            }
        }
        Ok(())
    }

    /// One structured constant as a typed var entry. The composite
    /// literal needs its type spelled out: the declared type for a
    /// record, `[...]Elem` with the element type for an array.
    fn structured_const(&mut self, decl: &ConstDecl<'ast>) -> Result<()> {
        let Some(ty) = decl.ty else {
            return Err(TranslateError::Internal {
                message: format!("structured constant '{}' without a declared type", decl.name),
            });
        };
        write!(self.out, "{} ", decl.name)?;
        self.type_spec(ty)?;
        self.print(" = ")?;
        match decl.value {
            Expr::ConstArray(_) => {
                let element = match self.resolve(ty)? {
                    Some(TypeSpec::Array(array)) => array.of,
                    Some(_) => {
                        return Err(TranslateError::Internal {
                            message: format!(
                                "array constant '{}' declared with a non-array type",
                                decl.name
                            ),
                        });
                    }
                    None => {
                        let name = match ty {
                            TypeSpec::Ident(ident) => ident.name.to_string(),
                            _ => decl.name.to_string(),
                        };
                        return Err(TranslateError::UnresolvedType {
                            name,
                            span: decl.span,
                        });
                    }
                };
                self.print("[...]")?;
                self.type_spec(element)?;
            }
            Expr::ConstRecord(_) => self.type_spec(ty)?,
            _ => {}
        }
        self.expr(decl.value)?;
        self.print("\n")
    }

    fn type_defs(&mut self, group: &'ast TypeDefs<'ast>) -> Result<()> {
        if group.defs.len() == 1 {
            self.print("type ")?;
        } else {
            self.print("type (\n")?;
        }
        for def in group.defs {
            write!(self.out, "{} ", def.name)?;
            self.type_spec(def.ty)?;
            self.print("\n")?;
        }
        if group.defs.len() != 1 {
            self.print(")\n")?;
        }
        for def in group.defs {
            if let TypeSpec::Enum(spec) = def.ty {
                self.enum_consts(def.name, spec)?;
            }
        }
        Ok(())
    }

    /// The value constants for one enumeration, numbered from 1 so the
    /// zero value stays distinguishable as "unset".
    fn enum_consts(&mut self, type_name: &str, spec: &EnumSpec<'ast>) -> Result<()> {
        self.print("const (\n")?;
        for (i, name) in spec.names.iter().enumerate() {
            self.print(name)?;
            if i == 0 {
                write!(self.out, " {type_name} = iota + 1")?;
            }
            self.print("\n")?;
        }
        self.print(")\n\n")
    }

    fn var_decls(&mut self, group: &'ast VarDecls<'ast>) -> Result<()> {
        if group.decls.len() == 1 {
            self.print("var ")?;
        } else {
            self.print("var (\n")?;
        }
        for decl in group.decls {
            write!(self.out, "{} ", decl.names.join(", "))?;
            self.type_spec(decl.ty)?;
            self.print("\n")?;
        }
        if group.decls.len() != 1 {
            self.print(")\n")?;
        }
        Ok(())
    }

    fn func_decl(&mut self, decl: &'ast FuncDecl<'ast>, top_level: bool) -> Result<()> {
        // Bodyless declarations are forwards; the body arrives later.
        let Some(body) = decl.body else {
            return Ok(());
        };
        if top_level {
            write!(self.out, "func {}(", decl.name)?;
        } else {
            write!(self.out, "{} := func(", decl.name)?;
        }
        self.params(decl.params)?;
        // The function's own name doubles as the named result, so
        // Pascal's assign-to-function-name bodies port unchanged.
        write!(self.out, ") ({} ", decl.name)?;
        self.type_ident(&decl.result)?;
        self.print(") {\n")?;

        self.scopes.push(ScopeKind::Routine, None);
        self.bind_params(decl.params);
        self.bind_decls(decl.decls);
        self.decls(decl.decls, false)?;
        self.stmts(body.stmts)?;
        self.scopes.pop()?;

        self.print("return\n}\n\n")
    }

    fn proc_decl(&mut self, decl: &'ast ProcDecl<'ast>, top_level: bool) -> Result<()> {
        let Some(body) = decl.body else {
            return Ok(());
        };
        if top_level {
            write!(self.out, "func {}(", decl.name)?;
        } else {
            write!(self.out, "{} := func(", decl.name)?;
        }
        self.params(decl.params)?;
        self.print(") {\n")?;

        self.scopes.push(ScopeKind::Routine, None);
        self.bind_params(decl.params);
        self.bind_decls(decl.decls);
        self.decls(decl.decls, false)?;
        self.stmts(body.stmts)?;
        self.scopes.pop()?;

        self.print("}\n\n")
    }
}
