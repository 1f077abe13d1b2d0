//! File root nodes: programs and units.

use pasgo_core::Span;

use crate::decl::DeclPart;
use crate::stmt::CompoundStmt;

/// A parsed source file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum File<'ast> {
    /// A standalone program
    Program(&'ast Program<'ast>),
    /// A unit
    Unit(&'ast Unit<'ast>),
}

/// A `program` file: declarations plus one statement body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'ast> {
    /// Program name
    pub name: &'ast str,
    /// Units named by the `uses` clause (empty when absent)
    pub uses: &'ast [&'ast str],
    /// Top-level declarations
    pub decls: &'ast [DeclPart<'ast>],
    /// The program body
    pub body: &'ast CompoundStmt<'ast>,
    /// Source location
    pub span: Span,
}

/// A `unit` file: public interface, private implementation, and an
/// initialization body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit<'ast> {
    /// Unit name
    pub name: &'ast str,
    /// Units named by the interface `uses` clause (empty when absent)
    pub interface_uses: &'ast [&'ast str],
    /// Interface declarations
    pub interface: &'ast [DeclPart<'ast>],
    /// Units named by the implementation `uses` clause (empty when absent)
    pub implementation_uses: &'ast [&'ast str],
    /// Implementation declarations
    pub implementation: &'ast [DeclPart<'ast>],
    /// The initialization body
    pub init: &'ast CompoundStmt<'ast>,
    /// Source location
    pub span: Span,
}
