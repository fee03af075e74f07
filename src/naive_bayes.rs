//! Single-store naive Bayesian classifier.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;

use crate::gram::Gram;
use crate::hyperparams::{NaiveBayesParams, NaiveBayesValidParams};
use crate::traits::Classify;

/// Clamp bounds keeping finalized probabilities away from the degenerate
/// zero/one values that would dominate the Bayes products
const PROBABILITY_FLOOR: f64 = 0.01;
const PROBABILITY_CEILING: f64 = 0.99;

/// The learned statistic for one gram key: raw class tallies plus the
/// ratios and posterior probabilities derived from them at finalize time.
///
/// Ratios and probabilities stay at zero until
/// [`NaiveBayes::finalize`] runs; afterwards the probabilities lie in
/// `[0.01, 0.99]` and sum to one whenever the subject was observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    token: String,
    negative_count: usize,
    positive_count: usize,
    negative_ratio: f64,
    positive_ratio: f64,
    positive_probability: f64,
    negative_probability: f64,
}

impl Subject {
    fn new(token: String) -> Self {
        Subject {
            token,
            negative_count: 0,
            positive_count: 0,
            negative_ratio: 0.0,
            positive_ratio: 0.0,
            positive_probability: 0.0,
            negative_probability: 0.0,
        }
    }

    /// Stand-in for a gram never seen during training; used for scoring
    /// only and never inserted into the store.
    fn with_priori(token: String, priori: f64) -> Self {
        Subject {
            negative_probability: priori,
            ..Subject::new(token)
        }
    }

    pub(crate) fn from_parts(
        token: String,
        negative_count: usize,
        positive_count: usize,
        negative_ratio: f64,
        positive_ratio: f64,
        positive_probability: f64,
        negative_probability: f64,
    ) -> Self {
        Subject {
            token,
            negative_count,
            positive_count,
            negative_ratio,
            positive_ratio,
            positive_probability,
            negative_probability,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn negative_count(&self) -> usize {
        self.negative_count
    }

    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    /// Total occurrence across both classes
    pub fn occurrences(&self) -> usize {
        self.positive_count + self.negative_count
    }

    pub fn negative_ratio(&self) -> f64 {
        self.negative_ratio
    }

    pub fn positive_ratio(&self) -> f64 {
        self.positive_ratio
    }

    pub fn positive_probability(&self) -> f64 {
        self.positive_probability
    }

    pub fn negative_probability(&self) -> f64 {
        self.negative_probability
    }

    /// How far the learned probability deviates from total ambiguity
    pub fn interestingness(&self) -> f64 {
        (0.5 - self.negative_probability).abs()
    }

    fn finalize(&mut self, total_positive: usize, total_negative: usize) {
        if total_negative > 0 {
            self.negative_ratio = self.negative_count as f64 / total_negative as f64;
        }
        if total_positive > 0 {
            self.positive_ratio = self.positive_count as f64 / total_positive as f64;
        }
        let ratio_sum = self.positive_ratio + self.negative_ratio;
        if ratio_sum > 0.0 {
            self.negative_probability =
                (self.negative_ratio / ratio_sum).clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING);
            self.positive_probability =
                (self.positive_ratio / ratio_sum).clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    Positive,
    Negative,
}

/// Fixed-capacity list of scoring candidates, kept sorted descending by
/// interestingness. A second occurrence of an already held key is a no-op.
struct InterestingSet<'a> {
    bound: usize,
    entries: Vec<Cow<'a, Subject>>,
}

impl<'a> InterestingSet<'a> {
    fn new(bound: usize) -> Self {
        InterestingSet {
            bound,
            entries: Vec::with_capacity(bound + 1),
        }
    }

    fn insert(&mut self, candidate: Cow<'a, Subject>) {
        let mut position = self.entries.len();
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.token() == candidate.token() {
                return;
            }
            if candidate.interestingness() > entry.interestingness() {
                position = i;
                break;
            }
        }
        self.entries.insert(position, candidate);
        self.entries.truncate(self.bound);
    }

    fn into_entries(self) -> Vec<Cow<'a, Subject>> {
        self.entries
    }
}

/// Naive Bayesian classifier over gram keys.
///
/// Owns its subject store exclusively. The caller contract is
/// train-finalize-classify: [`finalize`](Self::finalize) is called once
/// after all training and before any classification; classifying earlier
/// yields all-zero-probability subjects and a meaningless score.
///
/// # Example
///
/// ```rust
/// use sentiment_bayes::{Classify, GramGenerator, NGram, NaiveBayes, ParamGuard, Result};
///
/// let bigram = NGram::new(2)?;
/// let mut classifier = NaiveBayes::new(NaiveBayes::params().check()?);
///
/// classifier.train_positive(&bigram.generate(&["what", "a", "great", "movie"]));
/// classifier.train_negative(&bigram.generate(&["utterly", "boring", "waste"]));
/// classifier.finalize();
///
/// let score = classifier.classify(&bigram.generate(&["a", "great", "movie"]));
/// assert!(score > 0.5);
/// # Result::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayes {
    params: NaiveBayesValidParams,
    subjects: HashMap<String, Subject>,
}

impl NaiveBayes {
    /// Construct a new set of hyper-parameters
    pub fn params() -> NaiveBayesParams {
        NaiveBayesParams::new()
    }

    /// Create a classifier with an empty subject store
    pub fn new(params: NaiveBayesValidParams) -> Self {
        NaiveBayes {
            params,
            subjects: HashMap::new(),
        }
    }

    pub(crate) fn from_parts(
        params: NaiveBayesValidParams,
        subjects: HashMap<String, Subject>,
    ) -> Self {
        NaiveBayes { params, subjects }
    }

    /// The verified configuration backing this classifier
    pub fn hyperparams(&self) -> &NaiveBayesValidParams {
        &self.params
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn subject(&self, key: &str) -> Option<&Subject> {
        self.subjects.get(key)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.values()
    }

    pub(crate) fn subjects_mut(&mut self) -> &mut HashMap<String, Subject> {
        &mut self.subjects
    }

    /// Count every gram towards the positive class
    pub fn train_positive<T: Display>(&mut self, grams: &[Gram<T>]) {
        self.train(grams, Polarity::Positive);
    }

    /// Count every gram towards the negative class
    pub fn train_negative<T: Display>(&mut self, grams: &[Gram<T>]) {
        self.train(grams, Polarity::Negative);
    }

    pub(crate) fn train<T: Display>(&mut self, grams: &[Gram<T>], polarity: Polarity) {
        for gram in grams {
            let subject = self
                .subjects
                .entry(gram.key())
                .or_insert_with_key(|key| Subject::new(key.clone()));
            match polarity {
                Polarity::Positive => subject.positive_count += 1,
                Polarity::Negative => subject.negative_count += 1,
            }
        }
    }

    /// Derive ratios and posterior probabilities from the accumulated
    /// counts. Called once after all training calls.
    pub fn finalize(&mut self) {
        let total_positive: usize = self.subjects.values().map(|s| s.positive_count).sum();
        let total_negative: usize = self.subjects.values().map(|s| s.negative_count).sum();
        for subject in self.subjects.values_mut() {
            subject.finalize(total_positive, total_negative);
        }
    }

    /// Resolve each gram to a scoring candidate and keep the bounded
    /// most-discriminative set, preserving per-gram O(bound) cost.
    fn interesting_subjects<'a, T: Display>(&'a self, grams: &[Gram<T>]) -> Vec<Cow<'a, Subject>> {
        let mut interesting = InterestingSet::new(self.params.interesting_grams_count());
        for gram in grams {
            let key = gram.key();
            if self.params.exclusions().contains(&key) {
                continue;
            }
            let candidate = match self.subjects.get(&key) {
                Some(subject) => Cow::Borrowed(subject),
                None => {
                    if !self.params.assume_priori_when_subject_absent() {
                        continue;
                    }
                    Cow::Owned(Subject::with_priori(
                        key,
                        self.params.negative_probability_priori(),
                    ))
                }
            };
            interesting.insert(candidate);
        }
        interesting.into_entries()
    }
}

impl Classify for NaiveBayes {
    // apply Bayes rule over the interesting subjects
    fn classify<T: Display>(&self, grams: &[Gram<T>]) -> f64 {
        let interesting = self.interesting_subjects(grams);
        if interesting.is_empty() {
            // priori neutral: nothing known about any gram of the message
            return 0.5;
        }
        let mut positive_product = 1.0;
        let mut negative_product = 1.0;
        for subject in &interesting {
            positive_product *= subject.negative_probability();
            negative_product *= 1.0 - subject.negative_probability();
        }
        let denominator = positive_product + negative_product;
        if denominator == 0.0 {
            return self.params.negative_probability_priori();
        }
        negative_product / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::gram::GramGenerator;
    use crate::ngram::NGram;
    use crate::traits::ParamGuard;
    use approx::assert_abs_diff_eq;

    fn classifier() -> NaiveBayes {
        NaiveBayes::new(NaiveBayes::params().check_unwrap())
    }

    fn bigrams(text: &str) -> Vec<Gram<&str>> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        NGram::new(2).unwrap().generate(&tokens)
    }

    #[test]
    fn disjoint_vocabularies_separate_cleanly() {
        let mut classifier = classifier();
        for _ in 0..3 {
            classifier.train_positive(&bigrams("what a great wonderful lovely movie"));
            classifier.train_negative(&bigrams("utterly boring dreadful waste of time"));
        }
        classifier.finalize();

        let positive = classifier.classify(&bigrams("a great wonderful lovely movie"));
        assert!(positive > 0.99, "positive sample scored {}", positive);

        let negative = classifier.classify(&bigrams("boring dreadful waste of time"));
        assert!(negative < 0.01, "negative sample scored {}", negative);
    }

    #[test]
    fn finalized_probabilities_are_clamped_and_normalized() {
        let mut classifier = classifier();
        classifier.train_positive(&bigrams("pretty decent movie overall"));
        classifier.train_negative(&bigrams("pretty decent snooze fest"));
        classifier.finalize();

        for subject in classifier.subjects() {
            assert!(subject.positive_probability() >= PROBABILITY_FLOOR);
            assert!(subject.positive_probability() <= PROBABILITY_CEILING);
            assert!(subject.negative_probability() >= PROBABILITY_FLOOR);
            assert!(subject.negative_probability() <= PROBABILITY_CEILING);
            assert_abs_diff_eq!(
                subject.positive_probability() + subject.negative_probability(),
                1.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn counts_accumulate_across_training_calls() {
        let mut classifier = classifier();
        classifier.train_positive(&bigrams("i like programming"));
        classifier.train_positive(&bigrams("i like programming"));
        classifier.train_negative(&bigrams("i like programming"));

        let subject = classifier.subject("i_like").unwrap();
        assert_eq!(subject.positive_count(), 2);
        assert_eq!(subject.negative_count(), 1);
        assert_eq!(subject.occurrences(), 3);
    }

    #[test]
    fn statistics_stay_zero_until_finalize() {
        let mut classifier = classifier();
        classifier.train_positive(&bigrams("i like programming"));

        let subject = classifier.subject("i_like").unwrap();
        assert_eq!(subject.positive_ratio(), 0.0);
        assert_eq!(subject.negative_ratio(), 0.0);
        assert_eq!(subject.positive_probability(), 0.0);
        assert_eq!(subject.negative_probability(), 0.0);
    }

    #[test]
    fn unseen_grams_are_skipped_by_default() {
        let mut classifier = classifier();
        classifier.train_positive(&bigrams("i like programming"));
        classifier.finalize();

        let score = classifier.classify(&bigrams("never seen before"));
        assert_abs_diff_eq!(score, 0.5);
    }

    #[test]
    fn unseen_grams_score_with_priori_when_assumed() -> Result<()> {
        let params = NaiveBayes::params()
            .assume_priori_when_subject_absent(true)
            .negative_probability_priori(0.4)
            .check()?;
        let mut classifier = NaiveBayes::new(params);
        classifier.train_positive(&bigrams("i like programming"));
        classifier.finalize();

        // one synthesized subject: 0.6 / (0.4 + 0.6)
        let score = classifier.classify(&[Gram::new(vec!["never", "seen"])]);
        assert_abs_diff_eq!(score, 0.6, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn excluded_keys_are_ignored_during_scoring() -> Result<()> {
        let exclusions = vec!["i_like".to_owned()].into_iter().collect();
        let params = NaiveBayes::params().exclusions(exclusions).check()?;
        let mut classifier = NaiveBayes::new(params);
        classifier.train_positive(&bigrams("i like programming"));
        classifier.train_negative(&bigrams("you hate gardening"));
        classifier.finalize();

        let score = classifier.classify(&bigrams("i like"));
        assert_abs_diff_eq!(score, 0.5);
        Ok(())
    }

    #[test]
    fn duplicate_grams_are_counted_once_per_classification() {
        let mut classifier = classifier();
        classifier.train_positive(&bigrams("i like programming"));
        classifier.train_negative(&bigrams("you hate gardening"));
        classifier.finalize();

        let single = classifier.classify(&bigrams("i like"));
        let doubled = classifier.classify(&bigrams("i like i like"));
        // "i_like" twice plus the unseen joints; the duplicate is a no-op
        assert_abs_diff_eq!(single, doubled, epsilon = 1e-9);
    }

    #[test]
    fn selection_is_bounded_by_interesting_grams_count() -> Result<()> {
        let params = NaiveBayes::params().interesting_grams_count(1).check()?;
        let mut classifier = NaiveBayes::new(params);
        // "strongly_positive" is pure positive; "mildly_mixed" appears in both
        for _ in 0..3 {
            classifier.train_positive(&[Gram::new(vec!["strongly", "positive"])]);
        }
        classifier.train_positive(&[Gram::new(vec!["mildly", "mixed"])]);
        classifier.train_negative(&[Gram::new(vec!["mildly", "mixed"])]);
        classifier.finalize();

        let bounded = classifier.classify(&[
            Gram::new(vec!["strongly", "positive"]),
            Gram::new(vec!["mildly", "mixed"]),
        ]);
        let alone = classifier.classify(&[Gram::new(vec!["strongly", "positive"])]);
        // with a bound of one only the most discriminative subject scores
        assert_abs_diff_eq!(bounded, alone, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn empty_message_is_priori_neutral() {
        let mut classifier = classifier();
        classifier.train_positive(&bigrams("i like programming"));
        classifier.finalize();

        let score = classifier.classify::<&str>(&[]);
        assert_abs_diff_eq!(score, 0.5);
    }
}
