//! Matching the query phenotypes of a patient to the phenotypes of an organism
//!
//! An [`OrganismPhenotypeMatcher`] holds all known [`PhenotypeMatch`]es of a
//! set of query terms against the ontology of one [`Organism`]. It is built
//! once per ranking session by [`crate::PhenotypeMatchService`] and is immutable
//! afterwards.

use std::collections::HashMap;

use crate::matches::PhenotypeMatch;
use crate::term::{Organism, PhenotypeTerm, TermId};

/// All [`PhenotypeMatch`]es of a set of query terms against one organism
///
/// The query terms keep their original order, all derived results
/// (best matches, evidence lists) follow that order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganismPhenotypeMatcher {
    organism: Organism,
    query_terms: Vec<PhenotypeTerm>,
    matches: HashMap<TermId, HashMap<TermId, PhenotypeMatch>>,
}

impl OrganismPhenotypeMatcher {
    /// Constructs a new matcher
    ///
    /// `matches` are grouped by their query term. Matches of terms that are
    /// not part of `query_terms` are ignored. If the same pair of query and
    /// matched term occurs more than once, the match with the highest score
    /// is kept. Duplicate query terms are removed, keeping the first position.
    pub fn new(
        organism: Organism,
        query_terms: Vec<PhenotypeTerm>,
        matches: Vec<PhenotypeMatch>,
    ) -> Self {
        let mut unique_terms: Vec<PhenotypeTerm> = Vec::with_capacity(query_terms.len());
        for term in query_terms {
            if !unique_terms.contains(&term) {
                unique_terms.push(term);
            }
        }

        let mut index: HashMap<TermId, HashMap<TermId, PhenotypeMatch>> = unique_terms
            .iter()
            .map(|term| (*term.id(), HashMap::new()))
            .collect();

        for phenotype_match in matches {
            let Some(term_matches) = index.get_mut(phenotype_match.query_id()) else {
                continue;
            };
            match term_matches.get(phenotype_match.match_id()) {
                Some(existing) if existing.score() >= phenotype_match.score() => {}
                _ => {
                    term_matches.insert(*phenotype_match.match_id(), phenotype_match);
                }
            }
        }

        Self {
            organism,
            query_terms: unique_terms,
            matches: index,
        }
    }

    /// The organism whose phenotypes are matched
    pub fn organism(&self) -> Organism {
        self.organism
    }

    /// The query terms, in their original order
    pub fn query_terms(&self) -> &[PhenotypeTerm] {
        &self.query_terms
    }

    /// Returns the match of `query` to `target`, if one exists
    pub fn get(&self, query: &TermId, target: &TermId) -> Option<&PhenotypeMatch> {
        self.matches.get(query).and_then(|matches| matches.get(target))
    }

    /// Returns all matches of a single query term, in no particular order
    pub fn matches_for(&self, query: &TermId) -> impl Iterator<Item = &PhenotypeMatch> {
        self.matches.get(query).into_iter().flat_map(HashMap::values)
    }

    /// Returns the total number of matches of all query terms
    pub fn len(&self) -> usize {
        self.matches.values().map(HashMap::len).sum()
    }

    /// Returns `true` if none of the query terms has a match
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the best match of every query term that has at least one match
    ///
    /// The best match has the highest score. Matches with identical scores
    /// are ordered by the [`TermId`] of the matched term, the smallest one wins.
    pub fn best_phenotype_matches(&self) -> Vec<&PhenotypeMatch> {
        self.query_terms
            .iter()
            .filter_map(|term| {
                self.matches_for(term.id())
                    .fold(None, |best, candidate| Some(better_match(best, candidate)))
            })
            .collect()
    }

    /// Returns the [`TheoreticalModel`] of the query terms
    ///
    /// The theoretical model consists of the matched terms of
    /// [`OrganismPhenotypeMatcher::best_phenotype_matches`] and is the best
    /// possible model for this organism.
    pub fn best_theoretical_model(&self) -> TheoreticalModel {
        let best_matches = self.best_phenotype_matches();

        let mut phenotype_ids: Vec<TermId> = Vec::with_capacity(best_matches.len());
        for phenotype_match in &best_matches {
            if !phenotype_ids.contains(phenotype_match.match_id()) {
                phenotype_ids.push(*phenotype_match.match_id());
            }
        }

        let raw_score = self.raw_score(&phenotype_ids);
        TheoreticalModel {
            organism: self.organism,
            num_query_phenotypes: best_matches.len(),
            best_phenotype_matches: best_matches.into_iter().cloned().collect(),
            phenotype_ids,
            raw_score,
        }
    }

    /// Calculates the raw Phenodigm score of a list of phenotypes
    ///
    /// - For every query term, the best match to any of the phenotypes
    ///   is selected (forward direction).
    /// - For every phenotype, the best score to any of the query terms
    ///   is selected (reverse direction).
    ///
    /// Query terms or phenotypes without any match, or whose best match
    /// scores `0`, do not contribute.
    pub fn raw_score(&self, phenotype_ids: &[TermId]) -> PhenodigmRawScore {
        let mut max_match_score = 0.0f64;
        let mut sum_best_match_scores = 0.0f64;
        let mut best_phenotype_matches = Vec::new();

        for query in &self.query_terms {
            let Some(term_matches) = self.matches.get(query.id()) else {
                continue;
            };
            let mut best: Option<&PhenotypeMatch> = None;
            for id in phenotype_ids {
                if let Some(candidate) = term_matches.get(id) {
                    max_match_score = max_match_score.max(candidate.score());
                    best = Some(better_match(best, candidate));
                }
            }
            if let Some(best) = best.filter(|best| best.score() > 0.0) {
                sum_best_match_scores += best.score();
                best_phenotype_matches.push(best.clone());
            }
        }

        let mut matched_phenotype_ids = Vec::new();
        for id in phenotype_ids {
            let best_score = self
                .query_terms
                .iter()
                .filter_map(|query| self.get(query.id(), id))
                .fold(0.0f64, |best, candidate| best.max(candidate.score()));
            if best_score > 0.0 {
                sum_best_match_scores += best_score;
                matched_phenotype_ids.push(*id);
            }
        }

        PhenodigmRawScore {
            max_match_score,
            sum_best_match_scores,
            matched_phenotype_ids,
            best_phenotype_matches,
        }
    }
}

/// Returns the better of two matches: higher score first, then smaller matched ID
fn better_match<'a>(
    current: Option<&'a PhenotypeMatch>,
    candidate: &'a PhenotypeMatch,
) -> &'a PhenotypeMatch {
    match current {
        None => candidate,
        Some(current) => {
            if candidate.score() > current.score()
                || (candidate.score() == current.score()
                    && candidate.match_id() < current.match_id())
            {
                candidate
            } else {
                current
            }
        }
    }
}

/// The unnormalized Phenodigm score of a list of phenotypes
#[derive(Debug, Clone, PartialEq)]
pub struct PhenodigmRawScore {
    max_match_score: f64,
    sum_best_match_scores: f64,
    matched_phenotype_ids: Vec<TermId>,
    best_phenotype_matches: Vec<PhenotypeMatch>,
}

impl PhenodigmRawScore {
    /// The highest score of any query term to any phenotype
    pub fn max_match_score(&self) -> f64 {
        self.max_match_score
    }

    /// The sum of the best forward and reverse match scores
    pub fn sum_best_match_scores(&self) -> f64 {
        self.sum_best_match_scores
    }

    /// The phenotypes that match at least one query term with a positive score
    pub fn matched_phenotype_ids(&self) -> &[TermId] {
        &self.matched_phenotype_ids
    }

    /// The best match of every query term to the phenotypes
    pub fn best_phenotype_matches(&self) -> &[PhenotypeMatch] {
        &self.best_phenotype_matches
    }

    /// The average of the best match scores
    ///
    /// `num_query_phenotypes` is the number of query terms that
    /// the score is normalized by.
    pub fn average_score(&self, num_query_phenotypes: usize) -> f64 {
        let total = num_query_phenotypes + self.matched_phenotype_ids.len();
        if total == 0 {
            return 0.0;
        }
        self.sum_best_match_scores / count_to_f64(total)
    }

    pub(crate) fn into_best_phenotype_matches(self) -> Vec<PhenotypeMatch> {
        self.best_phenotype_matches
    }
}

/// The best possible model for a set of query terms and an organism
///
/// It is used as the ceiling to normalize the raw scores of real models.
#[derive(Debug, Clone, PartialEq)]
pub struct TheoreticalModel {
    organism: Organism,
    num_query_phenotypes: usize,
    phenotype_ids: Vec<TermId>,
    best_phenotype_matches: Vec<PhenotypeMatch>,
    raw_score: PhenodigmRawScore,
}

impl TheoreticalModel {
    /// The organism of the model
    pub fn organism(&self) -> Organism {
        self.organism
    }

    /// The distinct matched terms of the best matches of all query terms
    pub fn phenotype_ids(&self) -> &[TermId] {
        &self.phenotype_ids
    }

    /// The best match of every query term that has any match
    pub fn best_phenotype_matches(&self) -> &[PhenotypeMatch] {
        &self.best_phenotype_matches
    }

    /// The number of query terms that have at least one match
    pub fn num_query_phenotypes(&self) -> usize {
        self.num_query_phenotypes
    }

    /// The raw score of the model against its own matcher
    pub fn raw_score(&self) -> &PhenodigmRawScore {
        &self.raw_score
    }

    /// The highest possible score of a single match
    pub fn max_match_score(&self) -> f64 {
        self.raw_score.max_match_score()
    }

    /// The highest possible average of best match scores
    pub fn best_avg_score(&self) -> f64 {
        self.raw_score.average_score(self.num_query_phenotypes)
    }
}

/// Converts a count to `f64`
///
/// # Panics
///
/// If the count does not fit into a `u32`. Phenotype lists are
/// many orders of magnitude smaller.
fn count_to_f64(n: usize) -> f64 {
    <usize as TryInto<u32>>::try_into(n)
        .expect("too many phenotypes")
        .into()
}
