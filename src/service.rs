//! Creating [`OrganismPhenotypeMatcher`]s for the query phenotypes of a patient

use std::collections::HashMap;

use tracing::debug;

use crate::matcher::OrganismPhenotypeMatcher;
use crate::ontology::OntologyService;
use crate::term::{Organism, PhenotypeTerm, TermId};
use crate::PhenodigmResult;

/// Creates [`OrganismPhenotypeMatcher`]s using an [`OntologyService`]
///
/// This is the only part of the scoring engine that accesses the ontology
/// data. Creating a matcher should happen once per ranking session, before
/// any models are scored.
///
/// # Examples
///
/// ```
/// use phenodigm::{Organism, PhenotypeMatchService, TermId};
///
/// let ontology = phenodigm::ontology::from_folder("tests/data", "test").unwrap();
/// let service = PhenotypeMatchService::new(&ontology);
///
/// let query = service
///     .make_phenotype_terms(&[TermId::hp(1166), TermId::hp(1519)])
///     .unwrap();
/// assert_eq!(query[0].label(), "Arachnodactyly");
///
/// let matcher = service.matcher_for_terms(Organism::Mouse, &query).unwrap();
/// assert_eq!(matcher.best_phenotype_matches().len(), 2);
/// ```
#[derive(Debug)]
pub struct PhenotypeMatchService<S> {
    ontology: S,
}

impl<S: OntologyService> PhenotypeMatchService<S> {
    /// Constructs a new `PhenotypeMatchService`
    pub fn new(ontology: S) -> Self {
        Self { ontology }
    }

    /// Returns the underlying [`OntologyService`]
    pub fn ontology(&self) -> &S {
        &self.ontology
    }

    /// Builds the [`OrganismPhenotypeMatcher`] of `query_terms` against `organism`
    ///
    /// Query terms without any match are kept in the matcher but do not
    /// contribute to any score. An empty list of query terms results in an
    /// empty matcher.
    ///
    /// # Errors
    ///
    /// Errors of the [`OntologyService`] are returned unchanged
    pub fn matcher_for_terms(
        &self,
        organism: Organism,
        query_terms: &[PhenotypeTerm],
    ) -> PhenodigmResult<OrganismPhenotypeMatcher> {
        let mut matches = Vec::new();
        for term in query_terms {
            let term_matches = self.ontology.matches_for(organism, term.id())?;
            if term_matches.is_empty() {
                debug!("No {} matches for {}", organism, term.id());
            }
            matches.extend(term_matches);
        }
        debug!(
            "Found {} {} matches for {} query terms",
            matches.len(),
            organism,
            query_terms.len()
        );
        Ok(OrganismPhenotypeMatcher::new(
            organism,
            query_terms.to_vec(),
            matches,
        ))
    }

    /// Attaches the HPO label to every [`TermId`]
    ///
    /// IDs that are not part of the HPO terms of the ontology service are
    /// kept with an empty label.
    ///
    /// # Errors
    ///
    /// Errors of the [`OntologyService`] are returned unchanged
    pub fn make_phenotype_terms(&self, ids: &[TermId]) -> PhenodigmResult<Vec<PhenotypeTerm>> {
        let terms: HashMap<TermId, PhenotypeTerm> = self
            .ontology
            .terms(Organism::Human)?
            .into_iter()
            .map(|term| (*term.id(), term))
            .collect();

        Ok(ids
            .iter()
            .map(|id| {
                terms.get(id).cloned().unwrap_or_else(|| {
                    debug!("Unknown HPO term {}", id);
                    PhenotypeTerm::from(*id)
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ontology::InMemoryOntologyService;

    fn ontology() -> InMemoryOntologyService {
        crate::ontology::from_folder("tests/data", "test").unwrap()
    }

    #[test]
    fn matcher_for_human() {
        let ontology = ontology();
        let service = PhenotypeMatchService::new(&ontology);
        let query = service
            .make_phenotype_terms(&[TermId::hp(1166), TermId::hp(1519), TermId::hp(31797)])
            .unwrap();
        let matcher = service.matcher_for_terms(Organism::Human, &query).unwrap();

        assert_eq!(matcher.organism(), Organism::Human);
        assert_eq!(matcher.query_terms().len(), 3);
        // 3 for Arachnodactyly, 2 for tall stature after removing the duplicate pair
        assert_eq!(matcher.len(), 5);

        let best = matcher.best_phenotype_matches();
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].score(), 2.9715053034135934);
        assert_eq!(best[0].matched().label(), "Arachnodactyly");

        let tall_stature = matcher.get(&TermId::hp(1519), &TermId::hp(98)).unwrap();
        assert_eq!(tall_stature.simj(), 0.6);
    }

    #[test]
    fn empty_query() {
        let ontology = ontology();
        let service = PhenotypeMatchService::new(&ontology);
        let matcher = service.matcher_for_terms(Organism::Fish, &[]).unwrap();
        assert!(matcher.is_empty());
        assert!(matcher.query_terms().is_empty());
    }

    #[test]
    fn unknown_terms_keep_their_id() {
        let ontology = ontology();
        let service = PhenotypeMatchService::new(&ontology);
        let terms = service
            .make_phenotype_terms(&[TermId::hp(9_999_999), TermId::hp(545)])
            .unwrap();
        assert_eq!(terms[0].id(), &TermId::hp(9_999_999));
        assert_eq!(terms[0].label(), "");
        assert_eq!(terms[1].label(), "Myopia");
    }

    #[test]
    fn matchers_are_structurally_equal() {
        let ontology = ontology();
        let service = PhenotypeMatchService::new(&ontology);
        let query = service
            .make_phenotype_terms(&[TermId::hp(1166), TermId::hp(545)])
            .unwrap();
        let first = service.matcher_for_terms(Organism::Mouse, &query).unwrap();
        let second = service.matcher_for_terms(Organism::Mouse, &query).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.best_theoretical_model(), second.best_theoretical_model());
    }
}
