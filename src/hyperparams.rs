//! Hyper-parameter sets of the single-store and ensemble classifiers.

use std::collections::HashSet;

use crate::error::{BayesError, Result};
use crate::traits::ParamGuard;

/// A verified hyper-parameter set ready to back a
/// [`NaiveBayes`](crate::NaiveBayes) classifier
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesValidParams {
    exclusions: HashSet<String>,
    interesting_grams_count: usize,
    assume_priori_when_subject_absent: bool,
    negative_probability_priori: f64,
}

impl NaiveBayesValidParams {
    /// Gram keys ignored during scoring
    pub fn exclusions(&self) -> &HashSet<String> {
        &self.exclusions
    }

    /// Bound on how many grams influence one classification
    pub fn interesting_grams_count(&self) -> usize {
        self.interesting_grams_count
    }

    /// Whether an unseen gram is scored with the priori default instead of
    /// being skipped
    pub fn assume_priori_when_subject_absent(&self) -> bool {
        self.assume_priori_when_subject_absent
    }

    /// Default probability assigned to a gram never seen during training
    pub fn negative_probability_priori(&self) -> f64 {
        self.negative_probability_priori
    }

    fn validate(&self) -> Result<()> {
        if self.interesting_grams_count < 1 {
            return Err(BayesError::Parameters(format!(
                "interesting grams count must be at least one, but was {}",
                self.interesting_grams_count
            )));
        }
        if !(0.0..=1.0).contains(&self.negative_probability_priori) {
            return Err(BayesError::Parameters(format!(
                "negative probability priori must lie in [0, 1], but was {}",
                self.negative_probability_priori
            )));
        }
        Ok(())
    }
}

/// A hyper-parameter set during construction
///
/// # Parameters
///
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [exclusions](Self::exclusions) | empty | Gram keys ignored during scoring | - |
/// | [interesting_grams_count](Self::interesting_grams_count) | `15` | Bound on grams influencing one classification | `[1, inf)` |
/// | [assume_priori_when_subject_absent](Self::assume_priori_when_subject_absent) | `false` | Score unseen grams with the priori instead of skipping them | - |
/// | [negative_probability_priori](Self::negative_probability_priori) | `0.4` | Probability assumed for grams never seen during training | `[0, 1]` |
///
/// # Errors
///
/// Checking returns [`Parameters`](BayesError::Parameters) if the
/// interesting-grams bound is zero or the priori lies outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesParams(NaiveBayesValidParams);

impl NaiveBayesParams {
    pub fn new() -> Self {
        NaiveBayesParams(NaiveBayesValidParams {
            exclusions: HashSet::new(),
            interesting_grams_count: 15,
            assume_priori_when_subject_absent: false,
            negative_probability_priori: 0.4,
        })
    }

    /// Set the gram keys ignored during scoring
    pub fn exclusions(mut self, exclusions: HashSet<String>) -> Self {
        self.0.exclusions = exclusions;
        self
    }

    /// Set the bound on how many grams influence one classification
    pub fn interesting_grams_count(mut self, count: usize) -> Self {
        self.0.interesting_grams_count = count;
        self
    }

    /// Score unseen grams with the priori default instead of skipping them
    pub fn assume_priori_when_subject_absent(mut self, assume: bool) -> Self {
        self.0.assume_priori_when_subject_absent = assume;
        self
    }

    /// Set the probability assumed for grams never seen during training
    pub fn negative_probability_priori(mut self, priori: f64) -> Self {
        self.0.negative_probability_priori = priori;
        self
    }
}

impl Default for NaiveBayesParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamGuard for NaiveBayesParams {
    type Checked = NaiveBayesValidParams;
    type Error = BayesError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        self.0.validate()?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyper-parameter set ready to back a
/// [`Stochastic`](crate::Stochastic) ensemble
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticValidParams {
    classifier: NaiveBayesValidParams,
    sampling_percent: f64,
    classifier_count: usize,
}

impl StochasticValidParams {
    /// Configuration shared by every member classifier
    pub fn classifier(&self) -> &NaiveBayesValidParams {
        &self.classifier
    }

    /// Fraction of the corpus independently sampled for each member
    pub fn sampling_percent(&self) -> f64 {
        self.sampling_percent
    }

    /// Number of member classifiers
    pub fn classifier_count(&self) -> usize {
        self.classifier_count
    }
}

/// Hyper-parameters of the bagging ensemble during construction
///
/// Members share the classifier configuration but never a subject store.
///
/// # Parameters
///
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :--- | :--- |
/// | [sampling_percent](Self::sampling_percent) | `0.2` | Fraction of the corpus sampled per member, without replacement | `(0, 1]` |
/// | [classifier_count](Self::classifier_count) | `5` | Number of independently trained members | `[1, inf)` |
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticParams(StochasticValidParams);

impl StochasticParams {
    /// Create an ensemble parameter set around a member configuration
    pub fn new(classifier: NaiveBayesParams) -> Self {
        StochasticParams(StochasticValidParams {
            classifier: classifier.0,
            sampling_percent: 0.2,
            classifier_count: 5,
        })
    }

    /// Set the fraction of the corpus sampled for each member
    pub fn sampling_percent(mut self, percent: f64) -> Self {
        self.0.sampling_percent = percent;
        self
    }

    /// Set the number of member classifiers
    pub fn classifier_count(mut self, count: usize) -> Self {
        self.0.classifier_count = count;
        self
    }
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self::new(NaiveBayesParams::new())
    }
}

impl ParamGuard for StochasticParams {
    type Checked = StochasticValidParams;
    type Error = BayesError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        self.0.classifier.validate()?;
        if !(self.0.sampling_percent > 0.0 && self.0.sampling_percent <= 1.0) {
            return Err(BayesError::Parameters(format!(
                "sampling percent must lie in (0, 1], but was {}",
                self.0.sampling_percent
            )));
        }
        if self.0.classifier_count < 1 {
            return Err(BayesError::Parameters(format!(
                "classifier count must be at least one, but was {}",
                self.0.classifier_count
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_checking() {
        assert!(NaiveBayesParams::new().check_ref().is_ok());
        assert!(StochasticParams::default().check_ref().is_ok());
    }

    #[test]
    fn zero_interesting_grams_bound_is_rejected() {
        let result = NaiveBayesParams::new().interesting_grams_count(0).check();
        assert!(matches!(result, Err(BayesError::Parameters(_))));
    }

    #[test]
    fn priori_outside_unit_interval_is_rejected() {
        let result = NaiveBayesParams::new()
            .negative_probability_priori(1.5)
            .check();
        assert!(matches!(result, Err(BayesError::Parameters(_))));
    }

    #[test]
    fn sampling_percent_bounds() {
        assert!(StochasticParams::default().sampling_percent(0.0).check().is_err());
        assert!(StochasticParams::default().sampling_percent(1.1).check().is_err());
        assert!(StochasticParams::default().sampling_percent(1.0).check().is_ok());
    }

    #[test]
    fn zero_members_are_rejected() {
        let result = StochasticParams::default().classifier_count(0).check();
        assert!(matches!(result, Err(BayesError::Parameters(_))));
    }

    #[test]
    fn member_configuration_is_checked_through_the_ensemble() {
        let result =
            StochasticParams::new(NaiveBayesParams::new().interesting_grams_count(0)).check();
        assert!(matches!(result, Err(BayesError::Parameters(_))));
    }
}
