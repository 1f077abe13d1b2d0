//! Error types for translation.
//!
//! One enum covers the whole pipeline: a translation either produces
//! output or fails fast with a [`TranslateError`] carrying the source
//! location of the offending node. There is no recovery path; the
//! caller decides whether to skip the file or halt a batch.

use thiserror::Error;

use crate::Span;

/// Errors that occur while translating a Pascal AST to Go source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// A name could not be resolved in any active scope.
    #[error("at {span}: unresolved symbol '{name}'")]
    UnresolvedSymbol {
        /// The name that wasn't found.
        name: String,
        /// Where the name was referenced.
        span: Span,
    },

    /// A type name could not be resolved to a concrete type.
    ///
    /// Also raised when named-type indirection revisits a name (a cycle).
    #[error("at {span}: unresolved type '{name}'")]
    UnresolvedType {
        /// The type name that wasn't found.
        name: String,
        /// Where the type was required.
        span: Span,
    },

    /// A field access named a field the record does not declare.
    #[error("at {span}: no field '{field}' in record")]
    FieldNotFound {
        /// The field name that wasn't found.
        field: String,
        /// Where the field was accessed.
        span: Span,
    },

    /// A recognized construct the translator does not handle.
    ///
    /// A coverage gap rather than a data error: the input is legal
    /// Pascal, the translation rule just doesn't exist yet.
    #[error("at {span}: unsupported construct: {construct}")]
    UnsupportedConstruct {
        /// What was encountered.
        construct: String,
        /// Where it occurred.
        span: Span,
    },

    /// Synthetic-name generation ran out of candidate suffixes.
    #[error("at {span}: no unused name available for '{base}'")]
    NamingCollision {
        /// The seed name every candidate was derived from.
        base: String,
        /// Where the name was needed.
        span: Span,
    },

    /// An internal invariant was violated (scope imbalance, impossible
    /// type variant). Indicates a translator bug, not bad input.
    #[error("internal error: {message}")]
    Internal {
        /// The error message.
        message: String,
    },

    /// The output sink rejected a write.
    #[error("output sink failed")]
    Sink(#[from] std::fmt::Error),
}

impl TranslateError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            TranslateError::UnresolvedSymbol { span, .. } => *span,
            TranslateError::UnresolvedType { span, .. } => *span,
            TranslateError::FieldNotFound { span, .. } => *span,
            TranslateError::UnsupportedConstruct { span, .. } => *span,
            TranslateError::NamingCollision { span, .. } => *span,
            TranslateError::Internal { .. } => Span::default(),
            TranslateError::Sink(_) => Span::default(),
        }
    }
}
