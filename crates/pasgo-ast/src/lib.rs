//! Abstract syntax tree for Turbo Pascal programs and units.
//!
//! This crate defines the node types the translator consumes:
//! - Type expressions ([`TypeSpec`] and friends)
//! - Expressions ([`Expr`])
//! - Statements ([`Stmt`])
//! - Declarations ([`DeclPart`])
//! - File roots ([`File`], [`Program`], [`Unit`])
//!
//! All nodes are allocated in a caller-owned `bumpalo::Bump` arena and
//! borrow from it with the `'ast` lifetime; the tree is immutable once
//! built. Every statement and expression node carries a [`Span`]
//! pointing back at the Pascal source.
//!
//! The parser producing these nodes lives outside this workspace; tests
//! construct trees by hand with `arena.alloc` / `alloc_slice_copy`.
//!
//! [`Span`]: pasgo_core::Span

pub mod decl;
pub mod expr;
pub mod file;
pub mod ops;
pub mod stmt;
pub mod types;

pub use decl::*;
pub use expr::*;
pub use file::*;
pub use ops::*;
pub use stmt::*;
pub use types::*;
