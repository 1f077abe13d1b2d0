//! Statement AST nodes.
//!
//! Provides nodes for all Pascal statement forms: assignment, the
//! control-flow set (`if`/`while`/`repeat`/`for`/`case`), `goto` and
//! labeled statements, procedure calls, `with` blocks, and compound
//! statements. [`Stmt`] is `Copy`, so statement bodies can be embedded
//! inline in their parent nodes.

use pasgo_core::Span;

use crate::expr::{Expr, VarExpr};

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// `target := value`
    Assign(&'ast AssignStmt<'ast>),
    /// `case ... of ... end`
    Case(&'ast CaseStmt<'ast>),
    /// `begin ... end`
    Compound(&'ast CompoundStmt<'ast>),
    /// The empty statement
    Empty(EmptyStmt),
    /// `for i := a to b do ...`
    For(&'ast ForStmt<'ast>),
    /// `goto label`
    Goto(&'ast GotoStmt<'ast>),
    /// `if ... then ... else ...`
    If(&'ast IfStmt<'ast>),
    /// `label: stmt`
    Labeled(&'ast LabeledStmt<'ast>),
    /// Procedure call
    Call(&'ast CallStmt<'ast>),
    /// `repeat ... until cond`
    Repeat(&'ast RepeatStmt<'ast>),
    /// `while cond do ...`
    While(&'ast WhileStmt<'ast>),
    /// `with var do ...`
    With(&'ast WithStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Assign(s) => s.span,
            Self::Case(s) => s.span,
            Self::Compound(s) => s.span,
            Self::Empty(s) => s.span,
            Self::For(s) => s.span,
            Self::Goto(s) => s.span,
            Self::If(s) => s.span,
            Self::Labeled(s) => s.span,
            Self::Call(s) => s.span,
            Self::Repeat(s) => s.span,
            Self::While(s) => s.span,
            Self::With(s) => s.span,
        }
    }
}

/// An assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    /// Assignment target
    pub target: &'ast VarExpr<'ast>,
    /// Assigned value
    pub value: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A `case` statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseStmt<'ast> {
    /// The selector expression
    pub selector: Expr<'ast>,
    /// The branches in order
    pub arms: &'ast [CaseArm<'ast>],
    /// The optional `else` branch
    pub else_body: Option<&'ast [Stmt<'ast>]>,
    /// Source location
    pub span: Span,
}

/// One branch of a `case` statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseArm<'ast> {
    /// Match values: constants and ranges
    pub matches: &'ast [Expr<'ast>],
    /// The branch body
    pub body: Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A `begin ... end` block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundStmt<'ast> {
    /// Member statements
    pub stmts: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// The empty statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyStmt {
    /// Source location
    pub span: Span,
}

/// A counted `for` loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStmt<'ast> {
    /// Loop variable name
    pub var_name: &'ast str,
    /// Initial value
    pub initial: Expr<'ast>,
    /// `true` for `downto`
    pub down: bool,
    /// Final value
    pub limit: Expr<'ast>,
    /// Loop body
    pub body: Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A `goto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GotoStmt<'ast> {
    /// Target label
    pub label: &'ast str,
    /// Source location
    pub span: Span,
}

/// An `if` statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    /// Condition
    pub cond: Expr<'ast>,
    /// Then branch
    pub then_body: Stmt<'ast>,
    /// Optional else branch
    pub else_body: Option<Stmt<'ast>>,
    /// Source location
    pub span: Span,
}

/// A labeled statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledStmt<'ast> {
    /// The label
    pub label: &'ast str,
    /// The labeled statement
    pub stmt: Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A procedure call in statement position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallStmt<'ast> {
    /// The procedure being called
    pub proc: &'ast VarExpr<'ast>,
    /// Arguments
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A `repeat ... until` loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatStmt<'ast> {
    /// Body statements
    pub body: &'ast [Stmt<'ast>],
    /// Exit condition (loop ends when it becomes true)
    pub cond: Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A `while` loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    /// Continuation condition
    pub cond: Expr<'ast>,
    /// Loop body
    pub body: Stmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A `with` block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithStmt<'ast> {
    /// The record variable the block scopes over
    pub target: &'ast VarExpr<'ast>,
    /// The block body
    pub body: Stmt<'ast>,
    /// Source location
    pub span: Span,
}
