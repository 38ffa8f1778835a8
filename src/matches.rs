//! The precomputed similarity between two phenotype terms

use crate::term::{PhenotypeTerm, TermId};

/// The similarity of a query term to a matched term of the same or another ontology
///
/// `PhenotypeMatch`es are produced by an offline OWLSim run and contain
/// the Jaccard similarity (`simJ`) of the ancestor sets of both terms
/// and the information content (`IC`) of their most informative common
/// ancestor (the lowest common subsumer, `lcs`).
///
/// The combined Phenodigm `score` is always `sqrt(simJ * IC)`. It is
/// calculated once during construction.
///
/// # Examples
///
/// ```
/// use phenodigm::{PhenotypeMatch, PhenotypeTerm, TermId};
///
/// let term = PhenotypeTerm::new(TermId::hp(1166), "Arachnodactyly");
/// let m = PhenotypeMatch::new(term.clone(), term, 1.0, 8.829843768215113);
///
/// assert_eq!(m.score(), 2.9715053034135934);
/// ```
#[derive(Debug, Clone)]
pub struct PhenotypeMatch {
    query: PhenotypeTerm,
    matched: PhenotypeTerm,
    lcs: Option<PhenotypeTerm>,
    simj: f64,
    ic: f64,
    score: f64,
}

impl PhenotypeMatch {
    /// Constructs a new `PhenotypeMatch` without a lowest common subsumer
    pub fn new(query: PhenotypeTerm, matched: PhenotypeTerm, simj: f64, ic: f64) -> Self {
        Self {
            query,
            matched,
            lcs: None,
            simj,
            ic,
            score: (simj * ic).sqrt(),
        }
    }

    /// Sets the lowest common subsumer of the query and matched term
    #[must_use]
    pub fn with_lcs(mut self, lcs: PhenotypeTerm) -> Self {
        self.lcs = Some(lcs);
        self
    }

    /// The query term, usually an HPO term of the patient
    pub fn query(&self) -> &PhenotypeTerm {
        &self.query
    }

    /// Shortcut for the [`TermId`] of the query term
    pub fn query_id(&self) -> &TermId {
        self.query.id()
    }

    /// The matched term, e.g. a term from the mouse or fish ontology
    pub fn matched(&self) -> &PhenotypeTerm {
        &self.matched
    }

    /// Shortcut for the [`TermId`] of the matched term
    pub fn match_id(&self) -> &TermId {
        self.matched.id()
    }

    /// The most informative common ancestor of both terms, if known
    pub fn lcs(&self) -> Option<&PhenotypeTerm> {
        self.lcs.as_ref()
    }

    /// The Jaccard similarity of both terms
    pub fn simj(&self) -> f64 {
        self.simj
    }

    /// The information content of the lowest common subsumer
    pub fn ic(&self) -> f64 {
        self.ic
    }

    /// The combined Phenodigm score: `sqrt(simJ * IC)`
    pub fn score(&self) -> f64 {
        self.score
    }
}

impl PartialEq for PhenotypeMatch {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query
            && self.matched == other.matched
            && self.lcs == other.lcs
            && self.simj.to_bits() == other.simj.to_bits()
            && self.ic.to_bits() == other.ic.to_bits()
    }
}
