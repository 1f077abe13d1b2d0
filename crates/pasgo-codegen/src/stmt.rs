//! Statement emission.
//!
//! Every statement is newline-terminated except the empty statement,
//! which emits nothing at all. A compound body directly under a
//! control construct sheds its braces; the construct provides them.
//! `with` blocks emit no syntax of their own beyond the optional alias
//! line: their effect is the scope pushed over the body.

use std::fmt;

use pasgo_ast::{
    CallStmt, ConstValue, Expr, PointerSpec, RangeExpr, Stmt, TypeSpec, WithStmt,
};
use pasgo_core::TranslateError;

use crate::Result;
use crate::names::make_with_name;
use crate::scope::ScopeKind;
use crate::translator::Translator;

impl<'ast, W: fmt::Write> Translator<'ast, W> {
    pub(crate) fn stmts(&mut self, stmts: &[Stmt<'ast>]) -> Result<()> {
        for stmt in stmts {
            self.stmt(*stmt)?;
        }
        Ok(())
    }

    /// Emit a statement that already sits inside braces.
    fn stmt_no_braces(&mut self, stmt: Stmt<'ast>) -> Result<()> {
        match stmt {
            Stmt::Compound(compound) => self.stmts(compound.stmts),
            other => self.stmt(other),
        }
    }

    pub(crate) fn stmt(&mut self, stmt: Stmt<'ast>) -> Result<()> {
        match stmt {
            Stmt::Assign(assign) => {
                self.var_expr(assign.target, false)?;
                self.print(" = ")?;
                self.expr(assign.value)?;
            }
            Stmt::Case(case) => {
                self.print("switch ")?;
                self.expr(case.selector)?;
                self.print(" {\n")?;
                for arm in case.arms {
                    self.print("case ")?;
                    for (i, value) in arm.matches.iter().enumerate() {
                        if i > 0 {
                            self.print(", ")?;
                        }
                        match *value {
                            Expr::Range(range) => self.char_range_match(range)?,
                            other => self.expr(other)?,
                        }
                    }
                    self.print(":\n")?;
                    self.stmt_no_braces(arm.body)?;
                }
                if let Some(else_body) = case.else_body {
                    self.print("default:\n")?;
                    self.stmts(else_body)?;
                }
                self.print("}")?;
            }
            Stmt::Compound(compound) => {
                self.print("{\n")?;
                self.stmts(compound.stmts)?;
                self.print("}")?;
            }
            Stmt::Empty(_) => return Ok(()),
            Stmt::For(for_stmt) => {
                write!(self.out, "for {} = ", for_stmt.var_name)?;
                self.expr(for_stmt.initial)?;
                if for_stmt.down {
                    write!(self.out, "; {} >= ", for_stmt.var_name)?;
                    self.expr(for_stmt.limit)?;
                    write!(self.out, "; {}-- {{\n", for_stmt.var_name)?;
                } else {
                    write!(self.out, "; {} <= ", for_stmt.var_name)?;
                    self.expr(for_stmt.limit)?;
                    write!(self.out, "; {}++ {{\n", for_stmt.var_name)?;
                }
                self.stmt_no_braces(for_stmt.body)?;
                self.print("}")?;
            }
            Stmt::Goto(goto) => write!(self.out, "goto {}", goto.label)?,
            Stmt::If(if_stmt) => {
                self.print("if ")?;
                self.expr(if_stmt.cond)?;
                self.print(" {\n")?;
                self.stmt_no_braces(if_stmt.then_body)?;
                self.print("}")?;
                if let Some(else_body) = if_stmt.else_body {
                    if let Stmt::If(_) = else_body {
                        // else-if chains flat instead of nesting.
                        self.print(" else ")?;
                        self.stmt_no_braces(else_body)?;
                    } else {
                        self.print(" else {\n")?;
                        self.stmt_no_braces(else_body)?;
                        self.print("}")?;
                    }
                }
            }
            Stmt::Labeled(labeled) => {
                write!(self.out, "{}:\n", labeled.label)?;
                self.stmt(labeled.stmt)?;
            }
            Stmt::Call(call) => self.call_stmt(call)?,
            Stmt::Repeat(repeat) => {
                self.print("for {\n")?;
                self.stmts(repeat.body)?;
                self.print("if ")?;
                self.expr(repeat.cond)?;
                self.print(" {\nbreak\n}\n}")?;
            }
            Stmt::While(while_stmt) => {
                self.print("for ")?;
                self.expr(while_stmt.cond)?;
                self.print(" {\n")?;
                self.stmt_no_braces(while_stmt.body)?;
                self.print("}")?;
            }
            Stmt::With(with) => self.with_stmt(with)?,
        }
        self.print("\n")
    }

    /// A single-character constant range expands to its ascending
    /// member characters. Other ranges have no Go case syntax.
    fn char_range_match(&mut self, range: &'ast RangeExpr<'ast>) -> Result<()> {
        let (min, max) = match (range.min, range.max) {
            (Expr::Const(lo), Expr::Const(hi)) => match (lo.value, hi.value) {
                (ConstValue::Str(lo), ConstValue::Str(hi)) => (char_bound(lo), char_bound(hi)),
                _ => (None, None),
            },
            _ => (None, None),
        };
        let (Some(min), Some(max)) = (min, max) else {
            return Err(TranslateError::UnsupportedConstruct {
                construct: "case range without single-byte character bounds".to_string(),
                span: range.span,
            });
        };
        if min > max {
            return Err(TranslateError::UnsupportedConstruct {
                construct: "descending case range".to_string(),
                span: range.span,
            });
        }
        for (i, b) in (min..=max).enumerate() {
            if i > 0 {
                self.print(", ")?;
            }
            self.char_literal(b as char)?;
        }
        Ok(())
    }

    fn call_stmt(&mut self, call: &'ast CallStmt<'ast>) -> Result<()> {
        if call.proc.suffixes.is_empty() {
            if call.proc.name.eq_ignore_ascii_case("exit") {
                return self.print("return");
            }
            if call.proc.name.eq_ignore_ascii_case("str") {
                return self.str_call(call);
            }
            if call.proc.name.eq_ignore_ascii_case("delete") {
                // Pascal's Delete mutates its first argument in place;
                // the runtime helper returns the shortened string.
                let Some(Expr::Var(target)) = call.args.first().copied() else {
                    return Err(TranslateError::UnsupportedConstruct {
                        construct: "Delete without a variable first argument".to_string(),
                        span: call.span,
                    });
                };
                self.var_expr(target, false)?;
                self.print(" = ")?;
            }
        }
        self.var_expr(call.proc, false)?;
        let params = self.callee_params(call.proc)?;
        self.print("(")?;
        self.proc_args(params, call.args)?;
        self.print(")")
    }

    /// `Str(x, s)` formats a value into a string; a width specifier on
    /// the value selects the width-taking helper, with the width
    /// hoisted into an argument of its own.
    fn str_call(&mut self, call: &'ast CallStmt<'ast>) -> Result<()> {
        let &[value, dest] = call.args else {
            return Err(TranslateError::UnsupportedConstruct {
                construct: "Str with other than two arguments".to_string(),
                span: call.span,
            });
        };
        if let Expr::Width(width) = value {
            let literal = match width.width {
                Expr::Const(constant) => match constant.value {
                    ConstValue::Int(value) => Some(value),
                    _ => None,
                },
                _ => None,
            };
            let Some(literal) = literal else {
                return Err(TranslateError::UnsupportedConstruct {
                    construct: "Str width that is not an integer literal".to_string(),
                    span: width.span,
                });
            };
            self.print("StrWidth(")?;
            self.proc_arg(false, value)?;
            write!(self.out, ", {literal}")?;
            self.print(", ")?;
        } else {
            self.print("Str(")?;
            self.proc_arg(false, value)?;
            self.print(", ")?;
        }
        self.expr(dest)?;
        self.print(")")
    }

    fn with_stmt(&mut self, with: &'ast WithStmt<'ast>) -> Result<()> {
        let resolved = self.resolve_access(with.target)?;
        let Some((spec, field_name)) = resolved else {
            return Err(TranslateError::UnresolvedSymbol {
                name: with.target.name.to_string(),
                span: with.target.span,
            });
        };
        let TypeSpec::Record(record) = spec else {
            return Err(TranslateError::Internal {
                message: format!("'with' over non-record '{}'", with.target.name),
            });
        };
        let base = if with.target.suffixes.is_empty()
            && field_name.eq_ignore_ascii_case(with.target.name)
        {
            // The record variable itself works as the implicit base.
            with.target.name
        } else {
            let name = make_with_name(&self.scopes, field_name, with.span)?;
            let name: &'ast str = self.arena.alloc_str(&name);
            write!(self.out, "{name} := &")?;
            self.var_expr(with.target, false)?;
            self.print("\n")?;
            let pointee = self.arena.alloc(PointerSpec {
                to: TypeSpec::Record(record),
                span: with.span,
            });
            self.scopes.define_above_with(name, TypeSpec::Pointer(pointee));
            name
        };
        self.scopes.push(ScopeKind::With, Some(base));
        for section in record.sections {
            for field in section.names {
                self.scopes.define_var(field, section.ty);
            }
        }
        self.stmt_no_braces(with.body)?;
        self.scopes.pop()
    }
}

fn char_bound(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Some(ch as u8),
        _ => None,
    }
}
