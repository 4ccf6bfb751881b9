//! Password generation.
//!
//! Builds a character pool from the selected classes, drops excluded and
//! (optionally) ambiguous characters, then draws each character independently
//! and uniformly from the pool. Characters may repeat.
//!
//! Draws come from the operating system CSPRNG.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use tracing::debug;

use crate::error::{GeneratorError, Result};

/// Shortest accepted password.
pub const MIN_LENGTH: usize = 6;

/// Longest accepted password.
pub const MAX_LENGTH: usize = 50;

/// Default password length.
pub const DEFAULT_LENGTH: usize = 12;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters that are easy to confuse when read aloud or in some fonts.
pub const AMBIGUOUS: &str = "lI1Oo0";

/// Options for [`PasswordPolicy::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Characters removed from the pool.
    pub exclude_chars: String,
    /// Remove `l`, `I`, `1`, `O`, `o` and `0`.
    pub avoid_ambiguous: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_chars: String::new(),
            avoid_ambiguous: false,
        }
    }
}

impl PasswordPolicy {
    /// Policy with the given length and every class enabled.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Final character pool, in class order (upper, lower, digits, symbols).
    pub fn pool(&self) -> Vec<char> {
        let classes = [
            (self.include_uppercase, UPPERCASE),
            (self.include_lowercase, LOWERCASE),
            (self.include_digits, DIGITS),
            (self.include_symbols, SYMBOLS),
        ];

        classes
            .iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, chars)| chars.chars())
            .filter(|c| !(self.avoid_ambiguous && AMBIGUOUS.contains(*c)))
            .filter(|c| !self.exclude_chars.contains(*c))
            .collect()
    }

    /// Generate a password using the OS random source.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidLength` if the length is outside
    /// 6..=50, or `GeneratorError::EmptyPool` if no characters remain.
    pub fn generate(&self) -> Result<String> {
        self.generate_with(&mut OsRng)
    }

    /// Generate a password from a caller-supplied cryptographic RNG.
    pub fn generate_with<R: Rng + CryptoRng>(&self, rng: &mut R) -> Result<String> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidLength {
                length: self.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            }
            .into());
        }

        let pool = self.pool();
        if pool.is_empty() {
            return Err(GeneratorError::EmptyPool.into());
        }

        debug!(length = self.length, pool = pool.len(), "generating password");

        let password = (0..self.length)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();
        Ok(password)
    }
}
