//! Capability traits shared by the classifier variants.

use std::error::Error;
use std::fmt::Display;

use crate::gram::Gram;

/// A set of hyper-parameters whose values have not been checked for validity.
/// A reference to the checked hyper-parameters can only be obtained after
/// checking has completed.
///
/// The validation done in `check_ref()` and `check()` is identical.
pub trait ParamGuard {
    /// The checked hyper-parameters
    type Checked;
    /// Error type resulting from failed hyper-parameter checking
    type Error: Error;

    /// Checks the hyper-parameters and returns a reference to the checked
    /// hyper-parameters if successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the hyper-parameters and returns the checked hyper-parameters
    /// if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Scores a gram sequence with a positive-class probability in `[0, 1]`.
///
/// Higher values mean more positive. Implemented by the single-store
/// [`NaiveBayes`](crate::NaiveBayes) classifier, the bagging
/// [`Stochastic`](crate::Stochastic) ensemble and the
/// [`Model`](crate::Model) reload product; the ensemble composes the
/// single-store capability rather than extending it.
pub trait Classify {
    /// Probability that the message represented by `grams` is positive
    fn classify<T: Display>(&self, grams: &[Gram<T>]) -> f64;
}
