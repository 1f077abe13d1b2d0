//! Type expression AST nodes.
//!
//! A [`TypeSpec`] is the parsed right-hand side of a Pascal type
//! definition, variable declaration, or parameter group. `Copy` all the
//! way down: structured variants hold `&'ast` references into the
//! arena, so specs can be freely stored in symbol tables and returned
//! from lookups.

use pasgo_core::Span;

use crate::expr::Expr;

/// The builtin primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `Char`
    Char,
    /// `Boolean`
    Boolean,
    /// `Integer` (16-bit signed)
    Integer,
    /// `Real`
    Real,
    /// `String` (unbounded)
    String,
}

/// A type name: either a builtin or a reference to a named type.
///
/// Exactly one of the two is meaningful: builtins carry an empty name,
/// named references carry `builtin: None`. Named references resolve
/// through the type registry, possibly to a type declared later or in
/// another unit, so resolution is deferred to the translator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeIdent<'ast> {
    /// The type name (empty for builtins).
    pub name: &'ast str,
    /// The builtin, when this is a primitive.
    pub builtin: Option<Builtin>,
    /// Source location.
    pub span: Span,
}

impl<'ast> TypeIdent<'ast> {
    /// A builtin type reference.
    pub fn builtin(builtin: Builtin, span: Span) -> Self {
        Self {
            name: "",
            builtin: Some(builtin),
            span,
        }
    }

    /// A named type reference.
    pub fn named(name: &'ast str, span: Span) -> Self {
        Self {
            name,
            builtin: None,
            span,
        }
    }
}

/// A type expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeSpec<'ast> {
    /// A builtin or named type reference
    Ident(&'ast TypeIdent<'ast>),
    /// `array[Min..Max] of T`
    Array(&'ast ArraySpec<'ast>),
    /// `record ... end`
    Record(&'ast RecordSpec<'ast>),
    /// `string[N]`
    String(StringSpec),
    /// `^T`
    Pointer(&'ast PointerSpec<'ast>),
    /// `file` / `file of T`
    File(&'ast FileSpec<'ast>),
    /// `procedure(...)`
    Proc(&'ast ProcSpec<'ast>),
    /// `function(...): T`
    Func(&'ast FuncSpec<'ast>),
    /// `(A, B, C)` enumeration
    Enum(&'ast EnumSpec<'ast>),
}

/// A bounded array type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArraySpec<'ast> {
    /// Lower index bound (always a literal in the source).
    pub min: i32,
    /// Upper index bound; commonly a named constant, so kept as an expression.
    pub max: Expr<'ast>,
    /// Element type.
    pub of: TypeSpec<'ast>,
    /// Source location.
    pub span: Span,
}

/// A record type: ordered groups of named fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordSpec<'ast> {
    /// Field groups in declaration order.
    pub sections: &'ast [FieldGroup<'ast>],
    /// Source location.
    pub span: Span,
}

/// One `a, b, c: T` group inside a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGroup<'ast> {
    /// Field names in declaration order.
    pub names: &'ast [&'ast str],
    /// The shared field type.
    pub ty: TypeSpec<'ast>,
    /// Source location.
    pub span: Span,
}

/// A bounded string type (`string[N]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringSpec {
    /// Maximum length.
    pub max_len: u32,
}

/// A pointer type.
///
/// Source-level pointers always point at a named or builtin ident; the
/// full [`TypeSpec`] pointee also lets the translator synthesize
/// pointer-to-record bindings for `with` aliases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSpec<'ast> {
    /// Pointee type.
    pub to: TypeSpec<'ast>,
    /// Source location.
    pub span: Span,
}

/// A file type, optionally typed (`file of T`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileSpec<'ast> {
    /// Element type for `file of T`; `None` for untyped `file`.
    pub of: Option<TypeIdent<'ast>>,
    /// Source location.
    pub span: Span,
}

/// A procedure type or signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcSpec<'ast> {
    /// Parameter groups.
    pub params: &'ast [ParamGroup<'ast>],
    /// Source location.
    pub span: Span,
}

/// A function type or signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuncSpec<'ast> {
    /// Parameter groups.
    pub params: &'ast [ParamGroup<'ast>],
    /// Result type.
    pub result: TypeIdent<'ast>,
    /// Source location.
    pub span: Span,
}

/// An enumerated type: an ordered list of value names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumSpec<'ast> {
    /// Value names in declaration order.
    pub names: &'ast [&'ast str],
    /// Source location.
    pub span: Span,
}

/// One `a, b: T` or `var a, b: T` parameter group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamGroup<'ast> {
    /// Parameter names in declaration order.
    pub names: &'ast [&'ast str],
    /// The shared parameter type.
    pub ty: TypeIdent<'ast>,
    /// Whether this is a `var` (by-reference) group.
    pub by_ref: bool,
    /// Source location.
    pub span: Span,
}
