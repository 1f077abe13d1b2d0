//! Pascal-to-Go code generation
//!
//! A single-pass, scope-resolving emitter that walks a parsed Pascal file
//! and writes equivalent Go source text. Output is deliberately unindented;
//! `gofmt` owns layout.
//!
//! ## Modules
//!
//! - [`translator`]: The [`Translator`] driver and the [`translate`] entry point
//! - [`registry`]: Named type definitions, keyed case-insensitively
//! - [`scope`]: Lexical scope stack with `with`-block and reference-parameter tracking
//! - [`resolver`]: Type resolution through aliases and access paths
//! - [`binder`]: Declaration and parameter binding into scopes
//! - [`types`]: Type denotation emission (Pascal type specs to Go types)
//! - [`decl`]: Declaration emission (const, type, var, procedures, functions)
//! - [`stmt`]: Statement emission
//! - [`expr`]: Expression emission
//! - [`names`]: Identifier splitting and synthetic name generation

pub mod binder;
pub mod decl;
pub mod expr;
pub mod names;
pub mod registry;
pub mod resolver;
pub mod scope;
pub mod stmt;
pub mod translator;
pub mod types;

pub use registry::TypeRegistry;
pub use scope::{ScopeKind, ScopeStack, VarBinding};
pub use translator::{Translator, translate};

// Re-export the error type from core for convenience
pub use pasgo_core::TranslateError;

/// Result alias used throughout the emitter.
pub type Result<T> = std::result::Result<T, TranslateError>;
