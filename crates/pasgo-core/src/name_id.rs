//! Deterministic case-insensitive symbol identity.
//!
//! Pascal identifiers compare without regard to case: `CurrentLevel`,
//! `currentlevel` and `CURRENTLEVEL` are the same symbol. Rather than
//! lower-casing strings at every registry and scope access, the key
//! type itself canonicalizes: [`NameId::of`] hashes the ASCII-lowercased
//! bytes of a name with XXHash64, so two spellings of one identifier
//! always collapse to the same 64-bit key and no call site can forget
//! the folding step.

use std::fmt;
use xxhash_rust::xxh64::Xxh64;

/// Domain-mixing constants for hash computation.
pub mod hash_constants {
    /// Domain marker for symbol name hashes.
    pub const SYMBOL: u64 = 0x6c1e8a45d92b3f07;
}

/// A deterministic 64-bit key identifying a symbol name, case-insensitively.
///
/// The same name in any ASCII casing always produces the same id, so
/// these are safe to compute eagerly (before registration) and to use
/// as map keys throughout the translator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NameId(pub u64);

impl NameId {
    /// Empty/invalid id constant.
    pub const EMPTY: NameId = NameId(0);

    /// Create a symbol id from a name, folding ASCII case while hashing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pasgo_core::NameId;
    ///
    /// assert_eq!(NameId::of("ClearKeybuf"), NameId::of("CLEARKEYBUF"));
    /// assert_ne!(NameId::of("x"), NameId::of("y"));
    /// ```
    #[inline]
    pub fn of(name: &str) -> Self {
        let mut hasher = Xxh64::new(0);
        for b in name.bytes() {
            hasher.update(&[b.to_ascii_lowercase()]);
        }
        NameId(hash_constants::SYMBOL ^ hasher.digest())
    }

    /// Check if this is the empty/invalid id.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameId({:#018x})", self.0)
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_id_determinism() {
        assert_eq!(NameId::of("Player"), NameId::of("Player"));
        assert_eq!(NameId::of("TVideoLine"), NameId::of("TVideoLine"));
    }

    #[test]
    fn name_id_case_insensitive() {
        assert_eq!(NameId::of("StatusWord"), NameId::of("statusword"));
        assert_eq!(NameId::of("PORT"), NameId::of("Port"));
        assert_eq!(NameId::of("mIxEdCaSe"), NameId::of("MiXeDcAsE"));
    }

    #[test]
    fn name_id_uniqueness() {
        assert_ne!(NameId::of("x"), NameId::of("y"));
        assert_ne!(NameId::of("Level"), NameId::of("Levels"));
        assert_ne!(NameId::of(""), NameId::of("a"));
    }

    #[test]
    fn name_id_display() {
        let id = NameId::of("integer");
        assert!(format!("{}", id).starts_with("0x"));
        assert!(format!("{:?}", id).starts_with("NameId(0x"));
    }
}
