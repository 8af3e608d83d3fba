//! Textual state fingerprints for display and cycle detection.
//!
//! A fingerprint is the row-major encoding of every cell, one character per
//! cell: `*` alive, `.` dead, no separators. Two states are equal for cycle
//! detection iff their fingerprints are identical text.
//!
//! Each [`Fingerprint`] also carries an FNV-1a digest of its text. Digests
//! are compared first so that mismatched states are rejected without a full
//! string comparison; the text comparison still decides equality, so digest
//! collisions cannot produce false matches.

use std::fmt;

/// Character for a live cell.
pub const ALIVE: char = '*';
/// Character for a dead cell.
pub const DEAD: char = '.';

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Encode a row-major state buffer as text.
pub fn encode(cells: &[bool]) -> String {
    cells
        .iter()
        .map(|&alive| if alive { ALIVE } else { DEAD })
        .collect()
}

/// FNV-1a over a byte slice.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| {
        (hash ^ b as u64).wrapping_mul(FNV_PRIME)
    })
}

/// An encoded grid state plus its digest.
#[derive(Clone, Debug)]
pub struct Fingerprint {
    digest: u64,
    text: String,
}

impl Fingerprint {
    /// Fingerprint a row-major state buffer.
    pub fn of(cells: &[bool]) -> Self {
        Self::from_text(encode(cells))
    }

    /// Wrap already-encoded text.
    pub fn from_text(text: String) -> Self {
        Self {
            digest: fnv1a(text.as_bytes()),
            text,
        }
    }

    /// The encoded text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// FNV-1a digest of the text.
    pub fn digest(&self) -> u64 {
        self.digest
    }

    /// Consume and return the encoded text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest && self.text == other.text
    }
}

impl Eq for Fingerprint {}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_uses_star_and_dot() {
        assert_eq!(encode(&[true, false, false, true]), "*..*");
    }

    #[test]
    fn empty_state_encodes_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(Fingerprint::of(&[]).digest(), FNV_OFFSET);
    }

    #[test]
    fn same_state_same_fingerprint() {
        let a = Fingerprint::of(&[true, false, true]);
        let b = Fingerprint::of(&[true, false, true]);
        assert_eq!(a, b);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn different_state_different_fingerprint() {
        let a = Fingerprint::of(&[true, false, true]);
        let b = Fingerprint::of(&[true, true, true]);
        assert_ne!(a, b);
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn cell_order_matters() {
        let a = Fingerprint::of(&[true, false]);
        let b = Fingerprint::of(&[false, true]);
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_the_text() {
        let fp = Fingerprint::of(&[false, true]);
        assert_eq!(fp.to_string(), ".*");
        assert_eq!(fp.into_string(), ".*");
    }
}
