//! Serializable model records: the boundary contract for persisting and
//! reloading trained classifiers.
//!
//! The crate never performs file or stream I/O itself. It exposes the
//! record types below with stable camelCase field names; encoding them
//! (e.g. as JSON) is the caller's concern. Reloading a record reproduces
//! the original classification results within floating tolerance.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{BayesError, Result};
use crate::gram::Gram;
use crate::hyperparams::NaiveBayesValidParams;
use crate::naive_bayes::{NaiveBayes, Subject};
use crate::stochastic::Stochastic;
use crate::traits::{Classify, ParamGuard};

/// Discriminates single-store records from ensemble records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Single,
    Ensemble,
}

/// Classifier configuration carried alongside the subject lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub kind: ModelKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling_percent: Option<f64>,
    pub exclusions: Vec<String>,
    pub interesting_grams_count: usize,
    pub assume_priori_when_subject_absent: bool,
    pub negative_probability_priori: f64,
}

/// Snapshot of one learned [`Subject`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    pub token: String,
    pub negative_count: usize,
    pub positive_count: usize,
    pub negative_ratio: f64,
    pub positive_ratio: f64,
    pub positive_probability: f64,
    pub negative_probability: f64,
}

impl From<&Subject> for SubjectRecord {
    fn from(subject: &Subject) -> Self {
        SubjectRecord {
            token: subject.token().to_owned(),
            negative_count: subject.negative_count(),
            positive_count: subject.positive_count(),
            negative_ratio: subject.negative_ratio(),
            positive_ratio: subject.positive_ratio(),
            positive_probability: subject.positive_probability(),
            negative_probability: subject.negative_probability(),
        }
    }
}

impl SubjectRecord {
    fn into_subject(self) -> Subject {
        Subject::from_parts(
            self.token,
            self.negative_count,
            self.positive_count,
            self.negative_ratio,
            self.positive_ratio,
            self.positive_probability,
            self.negative_probability,
        )
    }
}

/// A persisted classifier: configuration plus one subject list per member
/// model. Single classifiers carry exactly one member list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub meta: Meta,
    pub models: Vec<Vec<SubjectRecord>>,
}

impl ModelRecord {
    /// Snapshot a single-store classifier.
    ///
    /// Subjects are listed in token order so equal models serialize
    /// identically.
    pub fn from_single(classifier: &NaiveBayes) -> Self {
        ModelRecord {
            meta: build_meta(ModelKind::Single, None, classifier.hyperparams()),
            models: vec![snapshot_subjects(classifier)],
        }
    }

    /// Snapshot an ensemble, one subject list per member
    pub fn from_ensemble(ensemble: &Stochastic) -> Self {
        let shared = ensemble.members()[0].hyperparams();
        ModelRecord {
            meta: build_meta(
                ModelKind::Ensemble,
                Some(ensemble.sampling_percent()),
                shared,
            ),
            models: ensemble.members().iter().map(snapshot_subjects).collect(),
        }
    }

    /// Reconstruct a classifier from this record.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyModel`](BayesError::EmptyModel) for a record without
    /// member models, [`ModelCount`](BayesError::ModelCount) for a
    /// `single` record with more than one member, and
    /// [`Parameters`](BayesError::Parameters) if the carried
    /// configuration fails checking.
    pub fn into_model(self) -> Result<Model> {
        if self.models.is_empty() {
            return Err(BayesError::EmptyModel);
        }
        let params = check_meta(&self.meta)?;
        match self.meta.kind {
            ModelKind::Single => {
                if self.models.len() != 1 {
                    return Err(BayesError::ModelCount {
                        kind: "single",
                        models: self.models.len(),
                    });
                }
                let subjects = self.models.into_iter().next().unwrap_or_default();
                Ok(Model::Single(rebuild_classifier(params, subjects)))
            }
            ModelKind::Ensemble => {
                let members = self
                    .models
                    .into_iter()
                    .map(|subjects| rebuild_classifier(params.clone(), subjects))
                    .collect();
                let sampling_percent = self.meta.sampling_percent.unwrap_or(0.2);
                Ok(Model::Ensemble(Stochastic::from_members(
                    members,
                    sampling_percent,
                )?))
            }
        }
    }
}

fn build_meta(kind: ModelKind, sampling_percent: Option<f64>, params: &NaiveBayesValidParams) -> Meta {
    let mut exclusions: Vec<String> = params.exclusions().iter().cloned().collect();
    exclusions.sort();
    Meta {
        kind,
        sampling_percent,
        exclusions,
        interesting_grams_count: params.interesting_grams_count(),
        assume_priori_when_subject_absent: params.assume_priori_when_subject_absent(),
        negative_probability_priori: params.negative_probability_priori(),
    }
}

fn check_meta(meta: &Meta) -> Result<NaiveBayesValidParams> {
    NaiveBayes::params()
        .exclusions(meta.exclusions.iter().cloned().collect())
        .interesting_grams_count(meta.interesting_grams_count)
        .assume_priori_when_subject_absent(meta.assume_priori_when_subject_absent)
        .negative_probability_priori(meta.negative_probability_priori)
        .check()
}

fn snapshot_subjects(classifier: &NaiveBayes) -> Vec<SubjectRecord> {
    let mut subjects: Vec<SubjectRecord> =
        classifier.subjects().map(SubjectRecord::from).collect();
    subjects.sort_by(|a, b| a.token.cmp(&b.token));
    subjects
}

fn rebuild_classifier(params: NaiveBayesValidParams, subjects: Vec<SubjectRecord>) -> NaiveBayes {
    let subjects: HashMap<String, Subject> = subjects
        .into_iter()
        .map(|record| (record.token.clone(), record.into_subject()))
        .collect();
    NaiveBayes::from_parts(params, subjects)
}

/// A classifier reconstructed from a [`ModelRecord`]: either a single
/// store or a bagging ensemble, both exposing the scoring capability
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Single(NaiveBayes),
    Ensemble(Stochastic),
}

impl Classify for Model {
    fn classify<T: Display>(&self, grams: &[Gram<T>]) -> f64 {
        match self {
            Model::Single(classifier) => classifier.classify(grams),
            Model::Ensemble(ensemble) => ensemble.classify(grams),
        }
    }
}
