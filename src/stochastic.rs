//! Bagging ensemble of naive Bayesian classifiers.

use std::fmt::Display;

use rand::Rng;

use crate::error::{BayesError, Result};
use crate::gram::Gram;
use crate::hyperparams::{NaiveBayesParams, StochasticParams, StochasticValidParams};
use crate::naive_bayes::{NaiveBayes, Polarity};
use crate::traits::Classify;

/// What random forest is to decision tree, this ensemble is to
/// [`NaiveBayes`]: a fixed count of members with identical configuration
/// but independent subject stores, each trained on its own
/// without-replacement sample of the corpus. Classification is the
/// arithmetic mean of the member scores, pulling the aggregate towards a
/// more stable decision boundary without changing the decision rule.
///
/// Training draws fresh samples from the process RNG; the `_with_rng`
/// variants accept a caller-owned [`Rng`] for deterministic draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Stochastic {
    members: Vec<NaiveBayes>,
    sampling_percent: f64,
}

impl Stochastic {
    /// Construct a new set of hyper-parameters around a member
    /// configuration
    pub fn params(classifier: NaiveBayesParams) -> StochasticParams {
        StochasticParams::new(classifier)
    }

    /// Create an ensemble of fresh members sharing the configured
    /// parameters, each with its own empty subject store
    pub fn new(params: StochasticValidParams) -> Self {
        let members = (0..params.classifier_count())
            .map(|_| NaiveBayes::new(params.classifier().clone()))
            .collect();
        Stochastic {
            members,
            sampling_percent: params.sampling_percent(),
        }
    }

    /// Rebuild an ensemble around pre-built members, e.g. reloaded from a
    /// persisted model record.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyModel`](BayesError::EmptyModel) if `members` is
    /// empty.
    pub fn from_members(members: Vec<NaiveBayes>, sampling_percent: f64) -> Result<Self> {
        if members.is_empty() {
            return Err(BayesError::EmptyModel);
        }
        Ok(Stochastic {
            members,
            sampling_percent,
        })
    }

    pub fn members(&self) -> &[NaiveBayes] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [NaiveBayes] {
        &mut self.members
    }

    pub fn sampling_percent(&self) -> f64 {
        self.sampling_percent
    }

    /// Train every member on an independent sample of the positive corpus
    pub fn train_positive<T: Display>(&mut self, corpus: &[Vec<Gram<T>>]) -> Result<()> {
        self.train(corpus, Polarity::Positive, &mut rand::thread_rng())
    }

    /// Train every member on an independent sample of the negative corpus
    pub fn train_negative<T: Display>(&mut self, corpus: &[Vec<Gram<T>>]) -> Result<()> {
        self.train(corpus, Polarity::Negative, &mut rand::thread_rng())
    }

    /// [`train_positive`](Self::train_positive) with a caller-owned RNG
    pub fn train_positive_with_rng<T: Display, R: Rng>(
        &mut self,
        corpus: &[Vec<Gram<T>>],
        rng: &mut R,
    ) -> Result<()> {
        self.train(corpus, Polarity::Positive, rng)
    }

    /// [`train_negative`](Self::train_negative) with a caller-owned RNG
    pub fn train_negative_with_rng<T: Display, R: Rng>(
        &mut self,
        corpus: &[Vec<Gram<T>>],
        rng: &mut R,
    ) -> Result<()> {
        self.train(corpus, Polarity::Negative, rng)
    }

    fn train<T: Display, R: Rng>(
        &mut self,
        corpus: &[Vec<Gram<T>>],
        polarity: Polarity,
        rng: &mut R,
    ) -> Result<()> {
        let sample_size = (self.sampling_percent * corpus.len() as f64).floor() as usize;
        if sample_size > corpus.len() {
            return Err(BayesError::SampleSize {
                sample: sample_size,
                corpus: corpus.len(),
            });
        }
        for member in &mut self.members {
            // independent without-replacement draw per member
            for index in rand::seq::index::sample(rng, corpus.len(), sample_size) {
                member.train(&corpus[index], polarity);
            }
        }
        Ok(())
    }

    /// Finalize every member's training
    pub fn finalize(&mut self) {
        for member in &mut self.members {
            member.finalize();
        }
    }
}

impl Classify for Stochastic {
    fn classify<T: Display>(&self, grams: &[Gram<T>]) -> f64 {
        let sum: f64 = self
            .members
            .iter()
            .map(|member| member.classify(grams))
            .sum();
        sum / self.members.len() as f64
    }
}
