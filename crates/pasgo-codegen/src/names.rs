//! Synthetic identifier generation.
//!
//! Suffixed `with` targets need a fresh local name for the alias that
//! holds a pointer to the record. The name is derived from the last
//! camel-case segment of the accessed field, singularized and lowered,
//! with a numeric suffix when the plain form is already taken.

use pasgo_core::{Span, TranslateError};

use crate::Result;
use crate::scope::ScopeStack;

/// Split a camel-case identifier into its segments.
///
/// A segment break lands before each uppercase letter that is followed
/// by a lowercase one, except within the first two bytes of the name.
/// Runs of capitals stay glued to the preceding segment: `DrawXYChar`
/// splits into `DrawXY`, `Char`.
pub fn split_camel(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut had_cap = false;
    for (i, &b) in bytes.iter().enumerate() {
        if had_cap && b.is_ascii_lowercase() && i > 1 {
            parts.push(&name[start..i - 1]);
            start = i - 1;
        }
        had_cap = b.is_ascii_uppercase();
    }
    parts.push(&name[start..]);
    parts
}

/// Derive a fresh alias name for a `with` block from the accessed field.
///
/// Takes the last camel segment of `seed`, drops one trailing `s`, and
/// lowercases it. If that name is already bound, numeric suffixes `2`
/// through `9` are tried in order; running out reports a collision.
pub fn make_with_name(scopes: &ScopeStack<'_>, seed: &str, span: Span) -> Result<String> {
    let parts = split_camel(seed);
    let last = parts[parts.len() - 1];
    let trimmed = last.strip_suffix('s').unwrap_or(last);
    let base = trimmed.to_ascii_lowercase();
    if scopes.lookup(&base).is_none() {
        return Ok(base);
    }
    for i in 2..10 {
        let candidate = format!("{base}{i}");
        if scopes.lookup(&candidate).is_none() {
            return Ok(candidate);
        }
    }
    Err(TranslateError::NamingCollision { base, span })
}
