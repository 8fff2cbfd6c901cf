//! Password generation from a fixed character-class configuration.

use rand::Rng;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generation configuration, fixed for the lifetime of a widget.
///
/// Letters are always in the pool; digits and symbols join it when the
/// corresponding flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordSpec {
    pub length: usize,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            length: 20,
            numbers: true,
            symbols: true,
        }
    }
}

impl PasswordSpec {
    /// Candidate pool assembled from the enabled character classes.
    fn charset(&self) -> Vec<char> {
        let mut pool = String::with_capacity(LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len());
        pool.push_str(LOWERCASE);
        pool.push_str(UPPERCASE);
        if self.numbers {
            pool.push_str(DIGITS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }
        pool.chars().collect()
    }

    /// Generate a fresh secret of `length` uniform draws from the pool.
    ///
    /// Infallible for any spec that config validation admits: letters are
    /// always present, so the pool is never empty.
    pub fn generate(&self) -> String {
        let pool = self.charset();
        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect()
    }
}
