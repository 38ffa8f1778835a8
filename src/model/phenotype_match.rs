use std::cmp::Ordering;

use crate::matches::PhenotypeMatch;
use crate::model::Model;

/// The result of scoring a [`Model`] against the query phenotypes
///
/// Contains the normalized score in the range `0.0..=1.0` and the best
/// match of each query term to the model's phenotypes as evidence.
///
/// `ModelPhenotypeMatch`es are ordered by descending score, then by the
/// model ID, so that sorting a list of results ranks the best model first.
#[derive(Debug, Clone)]
pub struct ModelPhenotypeMatch<'m> {
    model: &'m Model,
    score: f64,
    best_model_phenotype_matches: Vec<PhenotypeMatch>,
}

impl<'m> ModelPhenotypeMatch<'m> {
    /// Constructs a new `ModelPhenotypeMatch`
    pub fn new(
        model: &'m Model,
        score: f64,
        best_model_phenotype_matches: Vec<PhenotypeMatch>,
    ) -> Self {
        Self {
            model,
            score,
            best_model_phenotype_matches,
        }
    }

    /// The scored model
    pub fn model(&self) -> &'m Model {
        self.model
    }

    /// The normalized score, between `0.0` and `1.0`
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The best match of each query term to the phenotypes of the model
    pub fn best_model_phenotype_matches(&self) -> &[PhenotypeMatch] {
        &self.best_model_phenotype_matches
    }
}

impl PartialEq for ModelPhenotypeMatch<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
            && self.model == other.model
            && self.best_model_phenotype_matches == other.best_model_phenotype_matches
    }
}

impl Eq for ModelPhenotypeMatch<'_> {}

impl PartialOrd for ModelPhenotypeMatch<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModelPhenotypeMatch<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.model.id().cmp(other.model.id()))
    }
}
