//! Contiguous n-gram generator.

use crate::error::{BayesError, Result};
use crate::gram::{Gram, GramGenerator};

/// Generates one gram per window of `n` consecutive tokens.
///
/// For an input of length `L` the output holds exactly `max(0, L - n + 1)`
/// grams of length `n`, in left-to-right window order.
///
/// # Example
///
/// ```rust
/// use sentiment_bayes::{GramGenerator, NGram, Result};
///
/// let bigram = NGram::new(2)?;
/// let grams = bigram.generate(&["i", "really", "love", "kotlin"]);
/// assert_eq!(grams.len(), 3);
/// assert_eq!(grams[0].key(), "i_really");
/// # Result::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGram {
    n: usize,
}

impl NGram {
    /// Create a generator for windows of `n` consecutive tokens.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGramSize`](BayesError::InvalidGramSize) if `n < 1`.
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(BayesError::InvalidGramSize(n));
        }
        Ok(NGram { n })
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl<T: Clone> GramGenerator<T> for NGram {
    fn generate(&self, tokens: &[T]) -> Vec<Gram<T>> {
        if tokens.len() < self.n {
            return Vec::new();
        }
        tokens
            .windows(self.n)
            .map(|window| Gram::new(window.to_vec()))
            .collect()
    }
}
