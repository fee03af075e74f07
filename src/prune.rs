//! Shrinks a trained model without materially changing its predictions.

use crate::naive_bayes::NaiveBayes;
use crate::stochastic::Stochastic;

/// Removes subjects too rare or too neutral to be predictive from a
/// finalized classifier.
///
/// A subject is dropped when its total occurrence falls below
/// `min_frequency` or its positive probability deviates from `0.5` by less
/// than `prune_threshold`. Removal is permanent and idempotent: a second
/// pass with the same thresholds removes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Pruner {
    prune_threshold: f64,
    min_frequency: usize,
}

impl Pruner {
    pub fn new(prune_threshold: f64, min_frequency: usize) -> Self {
        Pruner {
            prune_threshold,
            min_frequency,
        }
    }

    pub fn prune_threshold(&self) -> f64 {
        self.prune_threshold
    }

    pub fn min_frequency(&self) -> usize {
        self.min_frequency
    }

    /// Strip uninformative subjects from the classifier's store in place
    pub fn prune(&self, classifier: &mut NaiveBayes) {
        let threshold = self.prune_threshold;
        let min_frequency = self.min_frequency;
        classifier.subjects_mut().retain(|_, subject| {
            subject.occurrences() >= min_frequency
                && (subject.positive_probability() - 0.5).abs() >= threshold
        });
    }

    /// Apply [`prune`](Self::prune) independently to every member of an
    /// ensemble
    pub fn prune_ensemble(&self, ensemble: &mut Stochastic) {
        for member in ensemble.members_mut() {
            self.prune(member);
        }
    }
}

impl Default for Pruner {
    fn default() -> Self {
        Pruner {
            prune_threshold: 0.05,
            min_frequency: 2,
        }
    }
}
