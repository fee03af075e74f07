//! Scoring helpers for batches of known-label data.

use std::fmt::Display;

use crate::gram::Gram;
use crate::traits::Classify;

/// Outcome of scoring a batch against its known label.
///
/// A sample counts as correct when its score lands within the error delta
/// of the expected value, as wrong when it lands within the delta of the
/// opposite pole, and as undecided otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub wrong: usize,
    pub total: usize,
}

impl Evaluation {
    /// Samples that produced a decisive score either way
    pub fn total_rated(&self) -> usize {
        self.correct + self.wrong
    }

    /// Share of rated samples scored correctly, in percent
    pub fn percent_correct(&self) -> f64 {
        if self.total_rated() == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total_rated() as f64 * 100.0
    }

    /// Share of samples rated at all, in percent
    pub fn percent_rated(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.total_rated() as f64 / self.total as f64 * 100.0
    }
}

/// Scores batches of known-label samples against a classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    error_delta: f64,
}

impl Evaluator {
    pub fn new(error_delta: f64) -> Self {
        Evaluator { error_delta }
    }

    /// Classify every sample and compare against `expected` (`1.0` for a
    /// positive batch, `0.0` for a negative one)
    pub fn evaluate<C: Classify, T: Display>(
        &self,
        classifier: &C,
        samples: &[Vec<Gram<T>>],
        expected: f64,
    ) -> Evaluation {
        let mut evaluation = Evaluation {
            correct: 0,
            wrong: 0,
            total: samples.len(),
        };
        for sample in samples {
            let probability = classifier.classify(sample);
            if (probability - expected).abs() <= self.error_delta {
                evaluation.correct += 1;
            } else if (probability - expected).abs() >= 1.0 - self.error_delta {
                evaluation.wrong += 1;
            }
        }
        evaluation
    }
}

/// Tally of decisive classifications over a mixed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation {
    pub positive_actual: usize,
    pub negative_actual: usize,
    pub positive_classified: usize,
    pub negative_classified: usize,
}

impl Simulation {
    pub fn actual_total(&self) -> usize {
        self.positive_actual + self.negative_actual
    }

    pub fn classified_total(&self) -> usize {
        self.positive_classified + self.negative_classified
    }

    /// Positive share of the labeled input
    pub fn positive_rate_actual(&self) -> f64 {
        if self.actual_total() == 0 {
            return 0.0;
        }
        self.positive_actual as f64 / self.actual_total() as f64
    }

    /// Positive share of the decisive classifications
    pub fn positive_rate_classified(&self) -> f64 {
        if self.classified_total() == 0 {
            return 0.0;
        }
        self.positive_classified as f64 / self.classified_total() as f64
    }
}

/// Runs a classifier over mixed positive/negative batches and tallies the
/// decisive calls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    error_delta: f64,
}

impl Simulator {
    pub fn new(error_delta: f64) -> Self {
        Simulator { error_delta }
    }

    pub fn run<C: Classify, T: Display>(
        &self,
        classifier: &C,
        positives: &[Vec<Gram<T>>],
        negatives: &[Vec<Gram<T>>],
    ) -> Simulation {
        let mut simulation = Simulation {
            positive_actual: positives.len(),
            negative_actual: negatives.len(),
            positive_classified: 0,
            negative_classified: 0,
        };
        for sample in positives.iter().chain(negatives) {
            let probability = classifier.classify(sample);
            if probability >= 1.0 - self.error_delta {
                simulation.positive_classified += 1;
            } else if probability <= self.error_delta {
                simulation.negative_classified += 1;
            }
        }
        simulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Scores samples from a fixed list, by sample length
    struct FixedScores(Vec<f64>);

    impl Classify for FixedScores {
        fn classify<T: Display>(&self, grams: &[Gram<T>]) -> f64 {
            self.0[grams.len()]
        }
    }

    fn sample(len: usize) -> Vec<Gram<&'static str>> {
        (0..len).map(|_| Gram::new(vec!["x"])).collect()
    }

    #[test]
    fn evaluation_counts_correct_wrong_and_undecided() {
        let classifier = FixedScores(vec![0.98, 0.03, 0.5]);
        let samples = vec![sample(0), sample(1), sample(2)];

        let evaluation = Evaluator::new(0.05).evaluate(&classifier, &samples, 1.0);
        assert_eq!(evaluation.correct, 1);
        assert_eq!(evaluation.wrong, 1);
        assert_eq!(evaluation.total, 3);
        assert_eq!(evaluation.total_rated(), 2);
        assert_abs_diff_eq!(evaluation.percent_correct(), 50.0);
        assert_abs_diff_eq!(evaluation.percent_rated(), 2.0 / 3.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_batch_rates_nothing() {
        let classifier = FixedScores(vec![0.5]);
        let evaluation =
            Evaluator::new(0.05).evaluate(&classifier, &Vec::<Vec<Gram<&str>>>::new(), 1.0);
        assert_eq!(evaluation.total, 0);
        assert_abs_diff_eq!(evaluation.percent_correct(), 0.0);
        assert_abs_diff_eq!(evaluation.percent_rated(), 0.0);
    }

    #[test]
    fn simulation_tallies_decisive_calls_only() {
        let classifier = FixedScores(vec![0.99, 0.01, 0.6]);
        let positives = vec![sample(0), sample(2)];
        let negatives = vec![sample(1)];

        let simulation = Simulator::new(0.05).run(&classifier, &positives, &negatives);
        assert_eq!(simulation.positive_actual, 2);
        assert_eq!(simulation.negative_actual, 1);
        assert_eq!(simulation.positive_classified, 1);
        assert_eq!(simulation.negative_classified, 1);
        assert_abs_diff_eq!(simulation.positive_rate_actual(), 2.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(simulation.positive_rate_classified(), 0.5);
    }
}
