//! Core types shared across the pasgo workspace.
//!
//! This crate provides:
//! - [`Span`] - source location tracking for error reporting
//! - [`NameId`] - deterministic case-insensitive symbol identity
//! - [`TranslateError`] - the error taxonomy for translation

pub mod error;
pub mod name_id;
pub mod span;

pub use error::TranslateError;
pub use name_id::NameId;
pub use span::Span;
