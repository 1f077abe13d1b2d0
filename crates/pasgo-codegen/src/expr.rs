//! Expression emission.
//!
//! Expressions emit in source order with one adjustment pass baked in:
//! variable accesses deref/address-adjust reference parameters, bare
//! names inside `with` blocks gain their record prefix, array indexes
//! re-base to zero, and `and`/`or`/`xor` pick their boolean or bitwise
//! Go operator from operand types.

use std::fmt;

use pasgo_ast::{
    BinaryExpr, BinaryOp, Builtin, ConstExpr, ConstValue, Expr, ParamGroup, TypeIdent, TypeSpec,
    VarExpr, VarSuffix,
};
use pasgo_core::TranslateError;

use crate::Result;
use crate::scope::ScopeKind;
use crate::translator::Translator;

/// How `and`/`or`/`xor` should emit, when operand types decide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogicKind {
    Boolean,
    Bitwise,
}

impl<'ast, W: fmt::Write> Translator<'ast, W> {
    pub(crate) fn exprs(&mut self, exprs: &[Expr<'ast>]) -> Result<()> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.print(", ")?;
            }
            self.expr(*expr)?;
        }
        Ok(())
    }

    pub(crate) fn expr(&mut self, expr: Expr<'ast>) -> Result<()> {
        match expr {
            Expr::Binary(binary) => self.binary_expr(binary),
            Expr::Unary(unary) => {
                self.print(unary.op.go_str())?;
                self.expr(unary.operand)
            }
            Expr::Const(constant) => self.const_expr(constant),
            Expr::ConstArray(array) => {
                // Nested position: the enclosing literal supplies the
                // element type, so a bare composite works.
                self.print("{")?;
                self.exprs(array.values)?;
                self.print("}")
            }
            Expr::ConstRecord(record) => {
                self.print("{")?;
                for (i, field) in record.fields.iter().enumerate() {
                    if i > 0 {
                        self.print(", ")?;
                    }
                    write!(self.out, "{}: ", field.name)?;
                    self.expr(field.value)?;
                }
                self.print("}")
            }
            Expr::Call(call) => {
                self.var_expr(call.callee, false)?;
                let params = self.callee_params(call.callee)?;
                self.print("(")?;
                self.proc_args(params, call.args)?;
                self.print(")")
            }
            Expr::Paren(paren) => {
                self.print("(")?;
                self.expr(paren.inner)?;
                self.print(")")
            }
            Expr::Deref(deref) => self.expr(deref.inner),
            Expr::Range(range) => Err(TranslateError::UnsupportedConstruct {
                construct: "range outside a case branch or membership test".to_string(),
                span: range.span,
            }),
            Expr::Set(set) => Err(TranslateError::UnsupportedConstruct {
                construct: "set literal outside a membership test".to_string(),
                span: set.span,
            }),
            Expr::TypeConv(conv) => {
                let target = TypeIdent::builtin(conv.to, conv.span);
                self.type_ident(&target)?;
                self.print("(")?;
                self.expr(conv.inner)?;
                self.print(")")
            }
            Expr::Var(var) => {
                self.var_expr(var, false)?;
                // Pascal calls a parameterless function bare; Go needs
                // the parens back.
                if let Some((TypeSpec::Func(_), _)) = self.resolve_access(var)? {
                    self.print("()")?;
                }
                Ok(())
            }
            // The width only matters inside Str; elsewhere the value
            // passes through.
            Expr::Width(width) => self.expr(width.inner),
        }
    }

    fn binary_expr(&mut self, binary: &'ast BinaryExpr<'ast>) -> Result<()> {
        if binary.op == BinaryOp::In {
            return self.in_expr(binary);
        }
        let op_str = match binary.op.bitwise_go_str() {
            Some(bitwise) => {
                let kind = match self.logic_kind(binary.left)? {
                    Some(kind) => Some(kind),
                    None => self.logic_kind(binary.right)?,
                };
                let is_bitwise = match kind {
                    Some(LogicKind::Bitwise) => true,
                    Some(LogicKind::Boolean) => false,
                    // Neither operand types out; a literal operand is a
                    // strong hint the source means bit masking.
                    None => matches!(binary.right, Expr::Const(_)),
                };
                if is_bitwise { bitwise } else { binary.op.go_str() }
            }
            None => binary.op.go_str(),
        };
        self.expr(binary.left)?;
        write!(self.out, " {} ", op_str)?;
        self.expr(binary.right)
    }

    /// `x in [a, b..c]` becomes a flat comparison chain.
    fn in_expr(&mut self, binary: &'ast BinaryExpr<'ast>) -> Result<()> {
        let Expr::Set(set) = binary.right else {
            return Err(TranslateError::UnsupportedConstruct {
                construct: "membership test without a set literal".to_string(),
                span: binary.span,
            });
        };
        self.print("(")?;
        for (i, value) in set.values.iter().enumerate() {
            if i > 0 {
                self.print(" || ")?;
            }
            match *value {
                Expr::Range(range) => {
                    self.expr(binary.left)?;
                    self.print(">=")?;
                    self.expr(range.min)?;
                    self.print(" && ")?;
                    self.expr(binary.left)?;
                    self.print("<=")?;
                    self.expr(range.max)?;
                }
                other => {
                    self.expr(binary.left)?;
                    self.print("==")?;
                    self.expr(other)?;
                }
            }
        }
        self.print(")")
    }

    // ================================================================
    // Literals
    // ================================================================

    fn const_expr(&mut self, constant: &ConstExpr<'ast>) -> Result<()> {
        match constant.value {
            ConstValue::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    // Single-character strings are Pascal's char literals.
                    (Some(ch), None) => self.char_literal(ch),
                    _ => self.string_literal(s),
                }
            }
            ConstValue::Int(value) => {
                if constant.is_hex {
                    write!(self.out, "0x{value:02X}")?;
                } else {
                    write!(self.out, "{value}")?;
                }
                Ok(())
            }
            ConstValue::Real(value) => {
                let mut repr = value.to_string();
                if !repr.contains('.') {
                    repr.push_str(".0");
                }
                self.print(&repr)
            }
            ConstValue::Bool(value) => {
                write!(self.out, "{value}")?;
                Ok(())
            }
            ConstValue::Nil => self.print("nil"),
        }
    }

    pub(crate) fn char_literal(&mut self, ch: char) -> Result<()> {
        match ch {
            '\'' => self.print("'\\''"),
            '\\' => self.print("'\\\\'"),
            _ => {
                self.print("'")?;
                self.escaped_char(ch)?;
                self.print("'")
            }
        }
    }

    fn string_literal(&mut self, s: &str) -> Result<()> {
        self.print("\"")?;
        for ch in s.chars() {
            match ch {
                '"' => self.print("\\\"")?,
                '\\' => self.print("\\\\")?,
                _ => self.escaped_char(ch)?,
            }
        }
        self.print("\"")
    }

    /// Go-style escape for one character, quotes excluded.
    fn escaped_char(&mut self, ch: char) -> Result<()> {
        match ch {
            '\u{07}' => self.print("\\a"),
            '\u{08}' => self.print("\\b"),
            '\t' => self.print("\\t"),
            '\n' => self.print("\\n"),
            '\u{0b}' => self.print("\\v"),
            '\u{0c}' => self.print("\\f"),
            '\r' => self.print("\\r"),
            ch if (ch as u32) < 0x20 || ch as u32 == 0x7f => {
                write!(self.out, "\\x{:02x}", ch as u32)?;
                Ok(())
            }
            ch if ch.is_control() => {
                write!(self.out, "\\u{:04x}", ch as u32)?;
                Ok(())
            }
            ch => {
                write!(self.out, "{ch}")?;
                Ok(())
            }
        }
    }

    // ================================================================
    // Variable accesses
    // ================================================================

    /// Emit a variable access. Bare reference parameters deref with `*`
    /// unless `suppress_deref` (argument positions manage the pointer
    /// themselves); `@` emits `&`.
    pub(crate) fn var_expr(&mut self, var: &'ast VarExpr<'ast>, suppress_deref: bool) -> Result<()> {
        let is_ref = var.suffixes.is_empty() && self.scopes.is_ref_param(var.name);
        if var.has_at && is_ref {
            return Err(TranslateError::UnsupportedConstruct {
                construct: format!("'@' applied to reference parameter '{}'", var.name),
                span: var.span,
            });
        }
        if is_ref && !suppress_deref {
            self.print("*")?;
        } else if var.has_at {
            self.print("&")?;
        }
        if var.suffixes.is_empty() {
            self.with_prefix(var.name)?;
        }
        self.print(var.name)?;
        for (i, suffix) in var.suffixes.iter().enumerate() {
            match *suffix {
                VarSuffix::Field(field) => {
                    self.print(".")?;
                    self.print(field)?;
                }
                VarSuffix::Index(index) => self.index_suffix(var, i, index)?,
                // Go field access auto-derefs; the explicit hat drops.
                VarSuffix::Deref => {}
            }
        }
        Ok(())
    }

    /// If `name` is a record field exposed by a `with` block, print the
    /// block's base followed by a dot. Bases resolve recursively, so
    /// nested blocks chain their prefixes.
    fn with_prefix(&mut self, name: &str) -> Result<()> {
        let Some(binding) = self.scopes.lookup(name) else {
            return Ok(());
        };
        if binding.kind != ScopeKind::With {
            return Ok(());
        }
        let Some(base) = binding.with_base else {
            return Ok(());
        };
        self.with_prefix(base)?;
        self.print(base)?;
        self.print(".")
    }

    /// Emit one `[index]`, re-based to the container's lower bound.
    fn index_suffix(&mut self, var: &'ast VarExpr<'ast>, i: usize, index: Expr<'ast>) -> Result<()> {
        let resolved = self.resolve_access_parts(var.name, &var.suffixes[..i], var.span)?;
        let Some((spec, _)) = resolved else {
            return Err(TranslateError::UnresolvedSymbol {
                name: var.name.to_string(),
                span: var.span,
            });
        };
        let min: i64 = match spec {
            TypeSpec::Array(array) => i64::from(array.min),
            TypeSpec::String(_) => 1,
            _ => 0,
        };
        self.print("[")?;
        if min == 0 {
            self.expr(index)?;
        } else {
            match index {
                // A literal index folds into one number.
                Expr::Const(constant) => match constant.value {
                    ConstValue::Int(value) => write!(self.out, "{}", value - min)?,
                    _ => {
                        self.expr(index)?;
                        write!(self.out, " - {min}")?;
                    }
                },
                // Forms binding tighter than subtraction skip the parens.
                Expr::Call(_)
                | Expr::Paren(_)
                | Expr::Deref(_)
                | Expr::TypeConv(_)
                | Expr::Unary(_)
                | Expr::Var(_) => {
                    self.expr(index)?;
                    write!(self.out, " - {min}")?;
                }
                other => {
                    self.print("(")?;
                    self.expr(other)?;
                    write!(self.out, ") - {min}")?;
                }
            }
        }
        self.print("]")
    }

    // ================================================================
    // Call arguments
    // ================================================================

    /// Parameter groups of the routine a callee resolves to, if known.
    pub(crate) fn callee_params(
        &self,
        callee: &VarExpr<'ast>,
    ) -> Result<Option<&'ast [ParamGroup<'ast>]>> {
        match self.resolve_access(callee)? {
            Some((TypeSpec::Proc(spec), _)) => Ok(Some(spec.params)),
            Some((TypeSpec::Func(spec), _)) => Ok(Some(spec.params)),
            _ => Ok(None),
        }
    }

    pub(crate) fn proc_args(
        &mut self,
        params: Option<&'ast [ParamGroup<'ast>]>,
        args: &[Expr<'ast>],
    ) -> Result<()> {
        let mut by_ref = Vec::new();
        if let Some(params) = params {
            for group in params {
                for _ in group.names {
                    by_ref.push(group.by_ref);
                }
            }
        }
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.print(", ")?;
            }
            self.proc_arg(by_ref.get(i).copied().unwrap_or(false), *arg)?;
        }
        Ok(())
    }

    /// Emit one argument, adjusting bare names for the reference
    /// calling convention:
    ///
    /// | actual is ref | formal is ref | emitted |
    /// |---------------|---------------|---------|
    /// | yes           | yes           | `name`  |
    /// | yes           | no            | `*name` |
    /// | no            | yes           | `&name` |
    /// | no            | no            | `name`  |
    ///
    /// Only bare names adjust; suffixed accesses pass through as
    /// expressions.
    pub(crate) fn proc_arg(&mut self, formal_is_ref: bool, arg: Expr<'ast>) -> Result<()> {
        match arg {
            Expr::Var(var) if var.suffixes.is_empty() => {
                if var.has_at {
                    return Err(TranslateError::UnsupportedConstruct {
                        construct: format!("'@' on call argument '{}'", var.name),
                        span: var.span,
                    });
                }
                let actual_is_ref = self.scopes.is_ref_param(var.name);
                if actual_is_ref && !formal_is_ref {
                    self.print("*")?;
                } else if !actual_is_ref && formal_is_ref {
                    self.print("&")?;
                }
                self.var_expr(var, true)
            }
            other => self.expr(other),
        }
    }

    // ================================================================
    // Operand typing for and/or/xor
    // ================================================================

    /// Classify an operand as boolean or integral, when its type can be
    /// seen without evaluating anything.
    fn logic_kind(&self, expr: Expr<'ast>) -> Result<Option<LogicKind>> {
        match expr {
            Expr::Const(constant) => Ok(match constant.value {
                ConstValue::Bool(_) => Some(LogicKind::Boolean),
                ConstValue::Int(_) => Some(LogicKind::Bitwise),
                _ => None,
            }),
            Expr::Binary(binary) => {
                if binary.op == BinaryOp::In || binary.op.is_comparison() {
                    Ok(Some(LogicKind::Boolean))
                } else if binary.op.is_arithmetic() {
                    Ok(Some(LogicKind::Bitwise))
                } else {
                    // Nested and/or/xor stays undecided; its own operands
                    // settle it when that operator emits.
                    Ok(None)
                }
            }
            Expr::Unary(unary) => self.logic_kind(unary.operand),
            Expr::Paren(paren) => self.logic_kind(paren.inner),
            Expr::TypeConv(conv) => Ok(builtin_logic_kind(conv.to)),
            Expr::Var(var) => {
                if let Some((spec, _)) = self.resolve_access(var)? {
                    return Ok(spec_logic_kind(spec));
                }
                // Host integer types never reach the registry but still
                // type their operands.
                if var.suffixes.is_empty() {
                    if let Some(binding) = self.scopes.lookup(var.name) {
                        if let TypeSpec::Ident(ident) = binding.spec {
                            return Ok(ident_logic_kind(ident));
                        }
                    }
                }
                Ok(None)
            }
            Expr::Call(call) => match self.resolve_access(call.callee)? {
                Some((TypeSpec::Func(func), _)) => Ok(ident_logic_kind(&func.result)),
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    }
}

fn spec_logic_kind(spec: TypeSpec<'_>) -> Option<LogicKind> {
    match spec {
        TypeSpec::Ident(ident) => ident_logic_kind(ident),
        _ => None,
    }
}

fn ident_logic_kind(ident: &TypeIdent<'_>) -> Option<LogicKind> {
    match ident.builtin {
        Some(Builtin::Boolean) => Some(LogicKind::Boolean),
        Some(Builtin::Integer) => Some(LogicKind::Bitwise),
        Some(_) => None,
        None => {
            if ident.name.eq_ignore_ascii_case("word")
                || ident.name.eq_ignore_ascii_case("longint")
            {
                Some(LogicKind::Bitwise)
            } else {
                None
            }
        }
    }
}

fn builtin_logic_kind(builtin: Builtin) -> Option<LogicKind> {
    match builtin {
        Builtin::Boolean => Some(LogicKind::Boolean),
        Builtin::Integer => Some(LogicKind::Bitwise),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use pasgo_ast::{
        ArraySpec, CallExpr, ConstArrayExpr, ConstField, ConstRecordExpr, FuncSpec, ParenExpr,
        RangeExpr, SetExpr, StringSpec, TypeConvExpr, UnaryExpr, UnaryOp, WidthExpr,
    };
    use pasgo_core::Span;

    use super::*;
    use crate::scope::ScopeKind;
    use crate::translator::Translator;

    fn int_const(arena: &Bump, value: i64) -> Expr<'_> {
        Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Int(value),
            is_hex: false,
            span: Span::default(),
        }))
    }

    fn str_const<'a>(arena: &'a Bump, s: &'a str) -> Expr<'a> {
        Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Str(s),
            is_hex: false,
            span: Span::default(),
        }))
    }

    fn bare_var<'a>(arena: &'a Bump, name: &'a str) -> &'a VarExpr<'a> {
        arena.alloc(VarExpr {
            has_at: false,
            name,
            suffixes: &[],
            span: Span::default(),
        })
    }

    fn indexed_var<'a>(arena: &'a Bump, name: &'a str, index: Expr<'a>) -> &'a VarExpr<'a> {
        arena.alloc(VarExpr {
            has_at: false,
            name,
            suffixes: arena.alloc_slice_copy(&[VarSuffix::Index(index)]),
            span: Span::default(),
        })
    }

    fn binary<'a>(arena: &'a Bump, left: Expr<'a>, op: BinaryOp, right: Expr<'a>) -> Expr<'a> {
        Expr::Binary(arena.alloc(BinaryExpr {
            left,
            op,
            right,
            span: Span::default(),
        }))
    }

    fn int_ident(arena: &Bump) -> &TypeIdent<'_> {
        arena.alloc(TypeIdent::builtin(Builtin::Integer, Span::default()))
    }

    /// Emit one expression with the given variables bound at file level.
    fn emit_with<'a>(arena: &'a Bump, vars: &[(&'a str, TypeSpec<'a>)], expr: Expr<'a>) -> String {
        let mut out = String::new();
        let mut translator = Translator::new(arena, &[], &mut out);
        for &(name, spec) in vars {
            translator.scopes.define_var(name, spec);
        }
        translator.expr(expr).unwrap();
        drop(translator);
        out
    }

    fn emit(arena: &Bump, expr: Expr<'_>) -> String {
        emit_with(arena, &[], expr)
    }

    #[test]
    fn binary_operators_space_out() {
        let arena = Bump::new();
        let expr = binary(&arena, int_const(&arena, 2), BinaryOp::Add, int_const(&arena, 3));
        assert_eq!(emit(&arena, expr), "2 + 3");

        let expr = binary(&arena, int_const(&arena, 2), BinaryOp::NotEq, int_const(&arena, 3));
        assert_eq!(emit(&arena, expr), "2 != 3");

        let expr = binary(&arena, int_const(&arena, 7), BinaryOp::Div, int_const(&arena, 2));
        assert_eq!(emit(&arena, expr), "7 / 2");

        let expr = binary(&arena, int_const(&arena, 7), BinaryOp::Mod, int_const(&arena, 2));
        assert_eq!(emit(&arena, expr), "7 % 2");
    }

    #[test]
    fn boolean_operands_pick_logical_operators() {
        let arena = Bump::new();
        let flag = TypeSpec::Ident(arena.alloc(TypeIdent::builtin(Builtin::Boolean, Span::default())));
        let vars = [("A", flag), ("B", flag)];
        let a = Expr::Var(bare_var(&arena, "A"));
        let b = Expr::Var(bare_var(&arena, "B"));

        assert_eq!(emit_with(&arena, &vars, binary(&arena, a, BinaryOp::And, b)), "A && B");
        assert_eq!(emit_with(&arena, &vars, binary(&arena, a, BinaryOp::Or, b)), "A || B");
        assert_eq!(emit_with(&arena, &vars, binary(&arena, a, BinaryOp::Xor, b)), "A != B");
    }

    #[test]
    fn integer_operands_pick_bitwise_operators() {
        let arena = Bump::new();
        let int = TypeSpec::Ident(int_ident(&arena));
        let vars = [("Mask", int), ("Bits", int)];
        let mask = Expr::Var(bare_var(&arena, "Mask"));
        let bits = Expr::Var(bare_var(&arena, "Bits"));

        assert_eq!(
            emit_with(&arena, &vars, binary(&arena, mask, BinaryOp::And, bits)),
            "Mask & Bits"
        );
        assert_eq!(
            emit_with(&arena, &vars, binary(&arena, mask, BinaryOp::Or, bits)),
            "Mask | Bits"
        );
        assert_eq!(
            emit_with(&arena, &vars, binary(&arena, mask, BinaryOp::Xor, bits)),
            "Mask ^ Bits"
        );
    }

    #[test]
    fn host_integer_names_type_as_bitwise() {
        let arena = Bump::new();
        let word = TypeSpec::Ident(arena.alloc(TypeIdent::named("Word", Span::default())));
        let vars = [("Flags", word)];
        let flags = Expr::Var(bare_var(&arena, "Flags"));
        let other = Expr::Var(bare_var(&arena, "Other"));
        assert_eq!(
            emit_with(&arena, &vars, binary(&arena, flags, BinaryOp::And, other)),
            "Flags & Other"
        );
    }

    #[test]
    fn comparisons_type_as_boolean_even_against_literals() {
        let arena = Bump::new();
        let cmp = binary(
            &arena,
            Expr::Var(bare_var(&arena, "X")),
            BinaryOp::Less,
            int_const(&arena, 4),
        );
        // Right operand is a literal, but the left comparison decides.
        let expr = binary(&arena, cmp, BinaryOp::And, int_const(&arena, 1));
        assert_eq!(emit(&arena, expr), "X < 4 && 1");
    }

    #[test]
    fn untyped_operands_fall_back_to_literal_hint() {
        let arena = Bump::new();
        let unknown = Expr::Var(bare_var(&arena, "Mystery"));
        let with_const = binary(&arena, unknown, BinaryOp::And, int_const(&arena, 128));
        assert_eq!(emit(&arena, with_const), "Mystery & 128");

        let other = Expr::Var(bare_var(&arena, "Other"));
        let no_const = binary(&arena, unknown, BinaryOp::And, other);
        assert_eq!(emit(&arena, no_const), "Mystery && Other");
    }

    #[test]
    fn not_emits_bang() {
        let arena = Bump::new();
        let expr = Expr::Unary(arena.alloc(UnaryExpr {
            op: UnaryOp::Not,
            operand: Expr::Var(bare_var(&arena, "Done")),
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, expr), "!Done");
    }

    #[test]
    fn membership_becomes_comparison_chain() {
        let arena = Bump::new();
        let range = Expr::Range(arena.alloc(RangeExpr {
            min: int_const(&arena, 1),
            max: int_const(&arena, 5),
            span: Span::default(),
        }));
        let set = Expr::Set(arena.alloc(SetExpr {
            values: arena.alloc_slice_copy(&[range, int_const(&arena, 9)]),
            span: Span::default(),
        }));
        let expr = binary(&arena, Expr::Var(bare_var(&arena, "X")), BinaryOp::In, set);
        assert_eq!(emit(&arena, expr), "(X>=1 && X<=5 || X==9)");
    }

    #[test]
    fn char_and_string_literals() {
        let arena = Bump::new();
        assert_eq!(emit(&arena, str_const(&arena, "a")), "'a'");
        assert_eq!(emit(&arena, str_const(&arena, "'")), "'\\''");
        assert_eq!(emit(&arena, str_const(&arena, "\r")), "'\\r'");
        assert_eq!(emit(&arena, str_const(&arena, "\u{1b}")), "'\\x1b'");
        assert_eq!(emit(&arena, str_const(&arena, "hello")), "\"hello\"");
        assert_eq!(
            emit(&arena, str_const(&arena, "say \"hi\"")),
            "\"say \\\"hi\\\"\""
        );
        assert_eq!(emit(&arena, str_const(&arena, "")), "\"\"");
    }

    #[test]
    fn numeric_literals() {
        let arena = Bump::new();
        assert_eq!(emit(&arena, int_const(&arena, 42)), "42");

        let hex = Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Int(0x1F),
            is_hex: true,
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, hex), "0x1F");

        let small_hex = Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Int(0x5),
            is_hex: true,
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, small_hex), "0x05");

        let whole = Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Real(4.0),
            is_hex: false,
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, whole), "4.0");

        let fractional = Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Real(0.5),
            is_hex: false,
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, fractional), "0.5");

        let nil = Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Nil,
            is_hex: false,
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, nil), "nil");

        let truth = Expr::Const(arena.alloc(ConstExpr {
            value: ConstValue::Bool(true),
            is_hex: false,
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, truth), "true");
    }

    #[test]
    fn index_rebases_to_lower_bound() {
        let arena = Bump::new();
        let max = arena.alloc(ConstExpr {
            value: ConstValue::Int(10),
            is_hex: false,
            span: Span::default(),
        });
        let array = TypeSpec::Array(arena.alloc(ArraySpec {
            min: 1,
            max: Expr::Const(max),
            of: TypeSpec::Ident(int_ident(&arena)),
            span: Span::default(),
        }));
        let int = TypeSpec::Ident(int_ident(&arena));
        let vars = [("Cells", array), ("I", int)];

        // Literal index folds
        let access = indexed_var(&arena, "Cells", int_const(&arena, 3));
        assert_eq!(emit_with(&arena, &vars, Expr::Var(access)), "Cells[2]");

        // Simple index subtracts inline
        let access = indexed_var(&arena, "Cells", Expr::Var(bare_var(&arena, "I")));
        assert_eq!(emit_with(&arena, &vars, Expr::Var(access)), "Cells[I - 1]");

        // Compound index gets parenthesized
        let sum = binary(
            &arena,
            Expr::Var(bare_var(&arena, "I")),
            BinaryOp::Add,
            int_const(&arena, 1),
        );
        let access = indexed_var(&arena, "Cells", sum);
        assert_eq!(emit_with(&arena, &vars, Expr::Var(access)), "Cells[(I + 1) - 1]");
    }

    #[test]
    fn zero_based_array_indexes_directly() {
        let arena = Bump::new();
        let max = arena.alloc(ConstExpr {
            value: ConstValue::Int(7),
            is_hex: false,
            span: Span::default(),
        });
        let array = TypeSpec::Array(arena.alloc(ArraySpec {
            min: 0,
            max: Expr::Const(max),
            of: TypeSpec::Ident(int_ident(&arena)),
            span: Span::default(),
        }));
        let int = TypeSpec::Ident(int_ident(&arena));
        let vars = [("Counts", array), ("I", int)];

        let access = indexed_var(&arena, "Counts", Expr::Var(bare_var(&arena, "I")));
        assert_eq!(emit_with(&arena, &vars, Expr::Var(access)), "Counts[I]");
    }

    #[test]
    fn bounded_string_index_rebases_by_one() {
        let arena = Bump::new();
        let vars = [("Line", TypeSpec::String(StringSpec { max_len: 80 }))];
        let access = indexed_var(&arena, "Line", int_const(&arena, 1));
        assert_eq!(emit_with(&arena, &vars, Expr::Var(access)), "Line[0]");
    }

    #[test]
    fn deref_suffix_drops_silently() {
        let arena = Bump::new();
        let access = arena.alloc(VarExpr {
            has_at: false,
            name: "P",
            suffixes: arena.alloc_slice_copy(&[VarSuffix::Deref, VarSuffix::Field("X")]),
            span: Span::default(),
        });
        assert_eq!(emit(&arena, Expr::Var(access)), "P.X");
    }

    #[test]
    fn address_of_emits_ampersand() {
        let arena = Bump::new();
        let var = arena.alloc(VarExpr {
            has_at: true,
            name: "Buffer",
            suffixes: &[],
            span: Span::default(),
        });
        assert_eq!(emit(&arena, Expr::Var(var)), "&Buffer");
    }

    #[test]
    fn ref_param_derefs_in_expression_position() {
        let arena = Bump::new();
        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.scopes.push(ScopeKind::Routine, None);
        translator
            .scopes
            .define_param("Dest", TypeSpec::Ident(int_ident(&arena)), true);
        translator.expr(Expr::Var(bare_var(&arena, "Dest"))).unwrap();
        drop(translator);
        assert_eq!(out, "*Dest");
    }

    #[test]
    fn bare_field_gains_with_prefix() {
        let arena = Bump::new();
        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.scopes.push(ScopeKind::With, Some("stat"));
        translator
            .scopes
            .define_var("StepX", TypeSpec::Ident(int_ident(&arena)));
        translator.expr(Expr::Var(bare_var(&arena, "StepX"))).unwrap();
        drop(translator);
        assert_eq!(out, "stat.StepX");
    }

    #[test]
    fn nested_with_prefixes_chain() {
        let arena = Bump::new();
        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.scopes.push(ScopeKind::With, Some("Board"));
        translator
            .scopes
            .define_var("Stats", TypeSpec::Ident(int_ident(&arena)));
        translator.scopes.push(ScopeKind::With, Some("Stats"));
        translator
            .scopes
            .define_var("Count", TypeSpec::Ident(int_ident(&arena)));
        translator.expr(Expr::Var(bare_var(&arena, "Count"))).unwrap();
        drop(translator);
        assert_eq!(out, "Board.Stats.Count");
    }

    #[test]
    fn parameterless_function_reference_gets_parens() {
        let arena = Bump::new();
        let func = TypeSpec::Func(arena.alloc(FuncSpec {
            params: &[],
            result: TypeIdent::builtin(Builtin::Integer, Span::default()),
            span: Span::default(),
        }));
        let vars = [("NextId", func)];
        let var = Expr::Var(bare_var(&arena, "NextId"));
        assert_eq!(emit_with(&arena, &vars, var), "NextId()");
    }

    #[test]
    fn call_with_ref_argument_matrix() {
        let arena = Bump::new();
        let params = arena.alloc_slice_copy(&[
            ParamGroup {
                names: arena.alloc_slice_copy(&["A"]),
                ty: *int_ident(&arena),
                by_ref: true,
                span: Span::default(),
            },
            ParamGroup {
                names: arena.alloc_slice_copy(&["B"]),
                ty: *int_ident(&arena),
                by_ref: false,
                span: Span::default(),
            },
        ]);
        let func = TypeSpec::Func(arena.alloc(FuncSpec {
            params,
            result: TypeIdent::builtin(Builtin::Integer, Span::default()),
            span: Span::default(),
        }));

        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.scopes.define_var("Calc", func);
        translator.scopes.push(ScopeKind::Routine, None);
        translator
            .scopes
            .define_param("R", TypeSpec::Ident(int_ident(&arena)), true);
        translator
            .scopes
            .define_var("V", TypeSpec::Ident(int_ident(&arena)));

        // Ref actual: passes through into a ref formal, derefs into a
        // value formal.
        let call = Expr::Call(arena.alloc(CallExpr {
            callee: bare_var(&arena, "Calc"),
            args: arena.alloc_slice_copy(&[
                Expr::Var(bare_var(&arena, "R")),
                Expr::Var(bare_var(&arena, "R")),
            ]),
            span: Span::default(),
        }));
        translator.expr(call).unwrap();
        translator.print(" / ").unwrap();

        // Plain actual: address into a ref formal, plain into a value
        // formal.
        let call = Expr::Call(arena.alloc(CallExpr {
            callee: bare_var(&arena, "Calc"),
            args: arena.alloc_slice_copy(&[
                Expr::Var(bare_var(&arena, "V")),
                Expr::Var(bare_var(&arena, "V")),
            ]),
            span: Span::default(),
        }));
        translator.expr(call).unwrap();
        drop(translator);

        assert_eq!(out, "Calc(R, *R) / Calc(&V, V)");
    }

    #[test]
    fn unknown_callee_arguments_pass_plain() {
        let arena = Bump::new();
        let call = Expr::Call(arena.alloc(CallExpr {
            callee: bare_var(&arena, "Sqr"),
            args: arena.alloc_slice_copy(&[Expr::Var(bare_var(&arena, "X"))]),
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, call), "Sqr(X)");
    }

    #[test]
    fn type_conversion_uses_go_type_name() {
        let arena = Bump::new();
        let conv = Expr::TypeConv(arena.alloc(TypeConvExpr {
            to: Builtin::Integer,
            inner: Expr::Var(bare_var(&arena, "Ch")),
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, conv), "int16(Ch)");
    }

    #[test]
    fn paren_deref_and_width_wrappers() {
        let arena = Bump::new();
        let paren = Expr::Paren(arena.alloc(ParenExpr {
            inner: int_const(&arena, 3),
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, paren), "(3)");

        let width = Expr::Width(arena.alloc(WidthExpr {
            inner: Expr::Var(bare_var(&arena, "Score")),
            width: int_const(&arena, 5),
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, width), "Score");
    }

    #[test]
    fn nested_structured_constants_stay_bare() {
        let arena = Bump::new();
        let record = Expr::ConstRecord(arena.alloc(ConstRecordExpr {
            fields: arena.alloc_slice_copy(&[
                ConstField {
                    name: "X",
                    value: int_const(&arena, 1),
                    span: Span::default(),
                },
                ConstField {
                    name: "Y",
                    value: int_const(&arena, 2),
                    span: Span::default(),
                },
            ]),
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, record), "{X: 1, Y: 2}");

        let array = Expr::ConstArray(arena.alloc(ConstArrayExpr {
            values: arena.alloc_slice_copy(&[record, record]),
            span: Span::default(),
        }));
        assert_eq!(emit(&arena, array), "{{X: 1, Y: 2}, {X: 1, Y: 2}}");
    }

    #[test]
    fn stray_range_or_set_is_rejected() {
        let arena = Bump::new();
        let range = Expr::Range(arena.alloc(RangeExpr {
            min: int_const(&arena, 1),
            max: int_const(&arena, 2),
            span: Span::default(),
        }));
        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        assert!(matches!(
            translator.expr(range),
            Err(TranslateError::UnsupportedConstruct { .. })
        ));
    }
}
