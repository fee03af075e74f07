//! Merges the output of multiple gram generators.

use crate::error::{BayesError, Result};
use crate::gram::{Gram, GramGenerator};

/// Concatenates the output of several generators in generator order.
///
/// Valuable when training on bigrams and trigrams at once: grams from the
/// same member stay contiguous and keep that member's order.
pub struct Composite<T> {
    generators: Vec<Box<dyn GramGenerator<T>>>,
}

impl<T> Composite<T> {
    /// # Errors
    ///
    /// Returns [`EmptyComposite`](BayesError::EmptyComposite) if no member
    /// generators are given.
    pub fn new(generators: Vec<Box<dyn GramGenerator<T>>>) -> Result<Self> {
        if generators.is_empty() {
            return Err(BayesError::EmptyComposite);
        }
        Ok(Composite { generators })
    }
}

impl<T: Clone> GramGenerator<T> for Composite<T> {
    fn generate(&self, tokens: &[T]) -> Vec<Gram<T>> {
        let mut grams = Vec::new();
        for generator in &self.generators {
            grams.extend(generator.generate(tokens));
        }
        grams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::NGram;

    #[test]
    fn zero_members_are_rejected() {
        assert!(matches!(
            Composite::<&str>::new(Vec::new()),
            Err(BayesError::EmptyComposite)
        ));
    }

    #[test]
    fn bigrams_then_trigrams() -> Result<()> {
        let composite: Composite<&str> = Composite::new(vec![
            Box::new(NGram::new(2)?),
            Box::new(NGram::new(3)?),
        ])?;

        let grams = composite.generate(&["i", "really", "love", "kotlin"]);
        let keys: Vec<String> = grams.iter().map(Gram::key).collect();
        assert_eq!(
            keys,
            [
                "i_really",
                "really_love",
                "love_kotlin",
                "i_really_love",
                "really_love_kotlin",
            ]
        );
        Ok(())
    }

    #[test]
    fn single_member_passes_through() -> Result<()> {
        let composite: Composite<&str> = Composite::new(vec![Box::new(NGram::new(1)?)])?;
        let grams = composite.generate(&["a", "b"]);
        assert_eq!(grams.len(), 2);
        Ok(())
    }
}
