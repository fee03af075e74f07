//! Combinatorial skip-gram generator.

use crate::error::Result;
use crate::gram::{Gram, GramGenerator};
use crate::ngram::NGram;

/// Generates grams of `n` tokens allowing up to `k` skipped tokens spread
/// across the gaps of each window.
///
/// With `k == 0` or `n < 2` there are no gaps to distribute and the
/// generator behaves exactly like [`NGram`] of the same `n`. Otherwise a
/// window is enumerated at every start index: the window's first token is
/// fixed and the remaining `n - 1` tokens are chosen recursively from the
/// suffix, each gap of width `j` consuming `j` of the remaining skip
/// budget.
///
/// ```text
/// [1,2,3,4,5]
/// n = 3, k = 2                        n = 3, k = 1
/// 123 124 125 134 135 145            123 124 134
/// 234 235 245                        234 235 245
/// 345                                345
/// ```
///
/// A window covering the whole input (`n == tokens.len()`) yields its
/// single zero-skip gram; the historical behavior of producing nothing for
/// that case was a defect and is not preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipGram {
    n: usize,
    k: usize,
    contiguous: NGram,
}

impl SkipGram {
    /// Create a generator for grams of `n` tokens with a total skip budget
    /// of `k` per window.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGramSize`](crate::BayesError::InvalidGramSize) if
    /// `n < 1`.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        let contiguous = NGram::new(n)?;
        Ok(SkipGram { n, k, contiguous })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl<T: Clone> GramGenerator<T> for SkipGram {
    fn generate(&self, tokens: &[T]) -> Vec<Gram<T>> {
        if self.k == 0 || self.n < 2 {
            return self.contiguous.generate(tokens);
        }
        if tokens.len() < self.n {
            return Vec::new();
        }
        let mut grams = Vec::new();
        for start in 0..=tokens.len() - self.n {
            for combination in combine(&tokens[start..], self.n, self.k) {
                grams.push(Gram::new(combination));
            }
        }
        grams
    }
}

/// Enumerate every `n`-token selection from `tokens` that keeps the first
/// token and spends at most `k` skips across the gaps, in gap order.
fn combine<T: Clone>(tokens: &[T], n: usize, k: usize) -> Vec<Vec<T>> {
    if n == 1 {
        return vec![vec![tokens[0].clone()]];
    }
    let mut combinations = Vec::new();
    let max_gap = (k + 1).min(tokens.len() - 1);
    for gap in 0..max_gap {
        for mut tail in combine(&tokens[gap + 1..], n - 1, k - gap) {
            let mut combination = Vec::with_capacity(n);
            combination.push(tokens[0].clone());
            combination.append(&mut tail);
            combinations.push(combination);
        }
    }
    combinations
}
