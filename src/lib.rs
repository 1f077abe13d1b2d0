//! Turbo Pascal to Go source-to-source translation.
//!
//! The workspace splits into three crates, re-exported here:
//! - [`core`]: source spans, case-insensitive name identity, and the
//!   error taxonomy
//! - [`ast`]: arena-allocated syntax tree nodes for programs and units
//! - [`codegen`]: the scope-resolving Go text emitter
//!
//! Translation is one depth-first pass over a parsed [`File`]:
//! [`translate`] binds declarations as it walks, tracks scopes and
//! types to resolve names, and writes unindented Go text to any
//! [`std::fmt::Write`] sink. Layout is left to gofmt.

pub use pasgo_ast as ast;
pub use pasgo_codegen as codegen;
pub use pasgo_core as core;

pub use pasgo_ast::File;
pub use pasgo_codegen::{Result, Translator, translate};
pub use pasgo_core::{Span, TranslateError};

/// Everything needed to build a tree and drive a translation.
pub mod prelude {
    pub use pasgo_ast::*;
    pub use pasgo_codegen::{ScopeKind, ScopeStack, Translator, TypeRegistry, translate};
    pub use pasgo_core::{NameId, Span, TranslateError};
}
