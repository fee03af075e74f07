//! Statistical text-sentiment classification over token grams.
//!
//! Raw text is split into word tokens by any external tokenizer; this
//! crate turns those tokens into overlapping gram features, accumulates
//! per-gram statistics for two labeled classes and derives the posterior
//! probability that unseen text is positive.
//!
//! - [`NGram`], [`SkipGram`] and [`Composite`] generate gram features
//!   from an ordered token sequence
//! - [`NaiveBayes`] trains on positive/negative gram lists and scores
//!   messages with a bounded set of their most discriminative grams
//! - [`Stochastic`] bags several independently sampled [`NaiveBayes`]
//!   members and averages their scores
//! - [`Pruner`] strips uninformative subjects from a trained model
//! - [`ModelRecord`] is the serializable boundary for persisting and
//!   reloading trained models
//!
//! ```rust
//! use sentiment_bayes::{Classify, GramGenerator, NGram, NaiveBayes, ParamGuard, Result};
//!
//! let bigram = NGram::new(2)?;
//! let mut classifier = NaiveBayes::new(NaiveBayes::params().check()?);
//!
//! classifier.train_positive(&bigram.generate(&["loved", "every", "minute"]));
//! classifier.train_negative(&bigram.generate(&["fell", "asleep", "twice"]));
//! classifier.finalize();
//!
//! let score = classifier.classify(&bigram.generate(&["loved", "every", "minute"]));
//! assert!(score > 0.5);
//! # Result::Ok(())
//! ```

mod composite;
mod error;
mod evaluate;
mod gram;
mod hyperparams;
mod naive_bayes;
mod ngram;
mod persist;
mod prune;
mod skip_gram;
mod stochastic;
mod traits;

pub use composite::Composite;
pub use error::{BayesError, Result};
pub use evaluate::{Evaluation, Evaluator, Simulation, Simulator};
pub use gram::{Gram, GramGenerator, KEY_DELIMITER};
pub use hyperparams::{
    NaiveBayesParams, NaiveBayesValidParams, StochasticParams, StochasticValidParams,
};
pub use naive_bayes::{NaiveBayes, Subject};
pub use ngram::NGram;
pub use persist::{Meta, Model, ModelKind, ModelRecord, SubjectRecord};
pub use prune::Pruner;
pub use skip_gram::SkipGram;
pub use stochastic::Stochastic;
pub use traits::{Classify, ParamGuard};
