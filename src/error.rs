//! Error types for gram generation, classification and model records.

use thiserror::Error;

/// Simplified `Result` using [`BayesError`](crate::BayesError) as error type
pub type Result<T> = std::result::Result<T, BayesError>;

/// Error variants from generator construction, hyper-parameter checking,
/// ensemble training or model-record reconstruction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BayesError {
    /// Gram generators require a window of at least one token
    #[error("invalid gram size {0}, must be at least 1")]
    InvalidGramSize(usize),
    /// A composite generator without members produces nothing
    #[error("composite generator requires at least one member generator")]
    EmptyComposite,
    /// Invalid hyper-parameter value
    #[error("invalid parameter {0}")]
    Parameters(String),
    /// Requested bootstrap sample exceeds the corpus
    #[error("sample size {sample} exceeds corpus size {corpus}")]
    SampleSize { sample: usize, corpus: usize },
    /// A model record must carry at least one member model
    #[error("model record contains no member models")]
    EmptyModel,
    /// The member-model count contradicts the record kind
    #[error("model record of kind {kind:?} cannot hold {models} member models")]
    ModelCount { kind: &'static str, models: usize },
}
