//! The gram value type and the generator contract.

use std::fmt::{Display, Write};

/// Delimiter joining the tokens of a gram into its canonical key
pub const KEY_DELIMITER: char = '_';

/// An ordered, fixed-length sequence of tokens treated as one feature.
///
/// Immutable once built. Two grams over identical token sequences produce
/// identical [keys](Gram::key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gram<T> {
    tokens: Vec<T>,
}

impl<T> Gram<T> {
    pub fn new(tokens: Vec<T>) -> Self {
        Gram { tokens }
    }

    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<T: Display> Gram<T> {
    /// Canonical key for this gram, joining its tokens with
    /// [`KEY_DELIMITER`]
    pub fn key(&self) -> String {
        let mut key = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                key.push(KEY_DELIMITER);
            }
            // writing into a String cannot fail
            let _ = write!(key, "{}", token);
        }
        key
    }
}

/// Turns an ordered token sequence into grams.
///
/// Implementations are pure functions over the input slice and hold no
/// state besides their own configuration.
pub trait GramGenerator<T> {
    fn generate(&self, tokens: &[T]) -> Vec<Gram<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_tokens_with_delimiter() {
        let gram = Gram::new(vec!["i", "really", "love"]);
        assert_eq!(gram.key(), "i_really_love");
    }

    #[test]
    fn identical_token_sequences_share_a_key() {
        let a = Gram::new(vec![1, 2, 3]);
        let b = Gram::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn single_token_key_has_no_delimiter() {
        let gram = Gram::new(vec!["kotlin"]);
        assert_eq!(gram.key(), "kotlin");
        assert_eq!(gram.len(), 1);
    }
}
