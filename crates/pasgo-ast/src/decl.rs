//! Declaration AST nodes.
//!
//! A Pascal declaration section is a flat list of [`DeclPart`]s:
//! `const`/`type`/`var`/`label` groups and procedure/function
//! declarations. Routine declarations without a body are forward
//! declarations; the body arrives in a later part with the same name.

use pasgo_core::Span;

use crate::expr::Expr;
use crate::stmt::CompoundStmt;
use crate::types::{ParamGroup, TypeIdent, TypeSpec};

/// One part of a declaration section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeclPart<'ast> {
    /// A `const` group
    Consts(&'ast ConstDecls<'ast>),
    /// A `type` group
    Types(&'ast TypeDefs<'ast>),
    /// A `var` group
    Vars(&'ast VarDecls<'ast>),
    /// A `label` group
    Labels(&'ast LabelDecls<'ast>),
    /// A procedure declaration
    Proc(&'ast ProcDecl<'ast>),
    /// A function declaration
    Func(&'ast FuncDecl<'ast>),
}

/// A `const` group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstDecls<'ast> {
    /// The constants in declaration order
    pub decls: &'ast [ConstDecl<'ast>],
    /// Source location
    pub span: Span,
}

/// One constant declaration.
///
/// Typed constants (`Name: T = value`) carry their declared type;
/// plain constants (`Name = value`) don't.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstDecl<'ast> {
    /// Constant name
    pub name: &'ast str,
    /// Declared type, when present
    pub ty: Option<TypeSpec<'ast>>,
    /// The value
    pub value: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A `type` group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeDefs<'ast> {
    /// The definitions in declaration order
    pub defs: &'ast [TypeDef<'ast>],
    /// Source location
    pub span: Span,
}

/// One type definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeDef<'ast> {
    /// Type name
    pub name: &'ast str,
    /// The defined type
    pub ty: TypeSpec<'ast>,
    /// Source location
    pub span: Span,
}

/// A `var` group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDecls<'ast> {
    /// The declarations in order
    pub decls: &'ast [VarDecl<'ast>],
    /// Source location
    pub span: Span,
}

/// One `a, b, c: T` variable declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDecl<'ast> {
    /// Variable names in declaration order
    pub names: &'ast [&'ast str],
    /// The shared type
    pub ty: TypeSpec<'ast>,
    /// Source location
    pub span: Span,
}

/// A `label` group. Labels carry no binding; referencing statements
/// name them directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelDecls<'ast> {
    /// The declared labels
    pub labels: &'ast [&'ast str],
    /// Source location
    pub span: Span,
}

/// A procedure declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcDecl<'ast> {
    /// Procedure name
    pub name: &'ast str,
    /// Parameter groups
    pub params: &'ast [ParamGroup<'ast>],
    /// Nested declaration section
    pub decls: &'ast [DeclPart<'ast>],
    /// The body; `None` for a forward declaration
    pub body: Option<&'ast CompoundStmt<'ast>>,
    /// Source location
    pub span: Span,
}

/// A function declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuncDecl<'ast> {
    /// Function name
    pub name: &'ast str,
    /// Parameter groups
    pub params: &'ast [ParamGroup<'ast>],
    /// Result type
    pub result: TypeIdent<'ast>,
    /// Nested declaration section
    pub decls: &'ast [DeclPart<'ast>],
    /// The body; `None` for a forward declaration
    pub body: Option<&'ast CompoundStmt<'ast>>,
    /// Source location
    pub span: Span,
}
