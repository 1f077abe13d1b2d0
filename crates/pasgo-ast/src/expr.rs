//! Expression AST nodes.
//!
//! Provides nodes for all Pascal expression forms:
//! - Literals (integers, reals, strings, booleans, `nil`)
//! - Binary and unary operations
//! - Variable accesses with field/index/dereference suffix chains
//! - Function calls, grouping, type conversions
//! - Range/set expressions (only legal inside `case` arms and `in` tests)
//! - Width-specified expressions (`x:4`, only legal inside `Str` calls)
//! - Structured constant values (array/record literals)

use pasgo_core::Span;

use crate::ops::{BinaryOp, UnaryOp};
use crate::types::Builtin;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Literal constant
    Const(&'ast ConstExpr<'ast>),
    /// Structured array constant `(a, b, c)`
    ConstArray(&'ast ConstArrayExpr<'ast>),
    /// Structured record constant `(F: v; ...)`
    ConstRecord(&'ast ConstRecordExpr<'ast>),
    /// Function call
    Call(&'ast CallExpr<'ast>),
    /// Parenthesized expression
    Paren(&'ast ParenExpr<'ast>),
    /// Pointer value expression (`p^` in value position)
    Deref(&'ast DerefExpr<'ast>),
    /// Inclusive range `a..b`
    Range(&'ast RangeExpr<'ast>),
    /// Set literal `[a, b..c]`
    Set(&'ast SetExpr<'ast>),
    /// Builtin type conversion `Integer(x)`
    TypeConv(&'ast TypeConvExpr<'ast>),
    /// Variable access
    Var(&'ast VarExpr<'ast>),
    /// Width-specified expression `x:4`
    Width(&'ast WidthExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Binary(e) => e.span,
            Self::Unary(e) => e.span,
            Self::Const(e) => e.span,
            Self::ConstArray(e) => e.span,
            Self::ConstRecord(e) => e.span,
            Self::Call(e) => e.span,
            Self::Paren(e) => e.span,
            Self::Deref(e) => e.span,
            Self::Range(e) => e.span,
            Self::Set(e) => e.span,
            Self::TypeConv(e) => e.span,
            Self::Var(e) => e.span,
            Self::Width(e) => e.span,
        }
    }
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: Expr<'ast>,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A unary prefix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A literal constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstExpr<'ast> {
    /// The value
    pub value: ConstValue<'ast>,
    /// Whether an integer literal was written in hex (`$1F`)
    pub is_hex: bool,
    /// Source location
    pub span: Span,
}

/// The value of a literal constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue<'ast> {
    /// Integer literal
    Int(i64),
    /// Real literal
    Real(f64),
    /// String literal (single-character strings double as char literals)
    Str(&'ast str),
    /// Boolean literal
    Bool(bool),
    /// `nil`
    Nil,
}

/// A structured array constant (the value of a typed array constant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstArrayExpr<'ast> {
    /// Element values in order
    pub values: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A structured record constant (the value of a typed record constant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstRecordExpr<'ast> {
    /// Field initializers in declaration order
    pub fields: &'ast [ConstField<'ast>],
    /// Source location
    pub span: Span,
}

/// One `Name: value` entry in a record constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstField<'ast> {
    /// Field name
    pub name: &'ast str,
    /// Field value
    pub value: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A function call in expression position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// The function being called
    pub callee: &'ast VarExpr<'ast>,
    /// Arguments
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A parenthesized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParenExpr<'ast> {
    /// The grouped expression
    pub inner: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A pointer value expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerefExpr<'ast> {
    /// The pointer expression
    pub inner: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An inclusive range `a..b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeExpr<'ast> {
    /// Lower bound
    pub min: Expr<'ast>,
    /// Upper bound
    pub max: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A set literal `[a, b..c]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetExpr<'ast> {
    /// Members: singletons and ranges
    pub values: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A builtin type conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeConvExpr<'ast> {
    /// The target builtin
    pub to: Builtin,
    /// The converted expression
    pub inner: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A variable access: base name plus a chain of suffixes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarExpr<'ast> {
    /// Whether the access is prefixed with `@` (address-of)
    pub has_at: bool,
    /// Base identifier
    pub name: &'ast str,
    /// Suffix chain, outermost last
    pub suffixes: &'ast [VarSuffix<'ast>],
    /// Source location
    pub span: Span,
}

/// One step in a variable access chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VarSuffix<'ast> {
    /// `.Field`
    Field(&'ast str),
    /// `[index]`
    Index(Expr<'ast>),
    /// `^`
    Deref,
}

/// A width-specified expression (`x:4`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthExpr<'ast> {
    /// The formatted expression
    pub inner: Expr<'ast>,
    /// The width
    pub width: Expr<'ast>,
    /// Source location
    pub span: Span,
}
