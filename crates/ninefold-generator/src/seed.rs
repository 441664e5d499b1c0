//! Reproducible puzzle seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Seeds render as 64 lowercase hex characters and parse back from the
/// same notation, so a puzzle can be reproduced from its logged seed.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///         .parse()
///         .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Creates a fresh random seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed, which is handy for
    /// shareable "daily puzzle" style keys.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            bytes: Sha256::digest(phrase.as_bytes()).into(),
        }
    }

    /// The raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Creates the deterministic RNG driven by this seed.
    #[must_use]
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.bytes)
    }
}

/// Errors from parsing the 64-character hex seed notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleSeedError {
    /// The input does not contain exactly 64 characters.
    #[display("seed must be 64 hex characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contains a non-hex character.
    #[display("invalid character in seed: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParsePuzzleSeedError::InvalidLength(len));
        }
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let mut nibbles = [0; 2];
            for nibble in &mut nibbles {
                let c = chars.next().expect("length checked above");
                let value = c
                    .to_digit(16)
                    .ok_or(ParsePuzzleSeedError::InvalidCharacter(c))?;
                *nibble = u8::try_from(value).expect("hex digit fits in u8");
            }
            *byte = nibbles[0] << 4 | nibbles[1];
        }
        Ok(Self { bytes })
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidLength(3))
        );
        let with_bad_char = format!("g{}", &HEX[1..]);
        assert_eq!(
            with_bad_char.parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidCharacter('g'))
        );
    }

    #[test]
    fn test_from_phrase_is_deterministic() {
        let a = PuzzleSeed::from_phrase("daily-2024-01-01");
        let b = PuzzleSeed::from_phrase("daily-2024-01-01");
        let c = PuzzleSeed::from_phrase("daily-2024-01-02");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
