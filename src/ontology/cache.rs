use core::fmt::Debug;

use dashmap::DashMap;
use tracing::trace;

use crate::matches::PhenotypeMatch;
use crate::ontology::OntologyService;
use crate::term::{Organism, PhenotypeTerm, TermId};
use crate::PhenodigmResult;

/// A read-through cache around another [`OntologyService`]
///
/// The first request for a term (or the term list of an organism) is
/// forwarded to the inner service; the result is stored and all later
/// requests are answered from memory. The cache belongs to exactly one
/// data version, the one reported by the inner service when the cache is
/// created. Entries are never evicted or invalidated.
///
/// Errors of the inner service are passed on and not cached.
///
/// The cache can be shared across threads. Concurrent requests for the
/// same entry wait for each other, so the inner service is asked only once.
///
/// # Examples
///
/// ```
/// use phenodigm::{CachedOntologyService, Organism, OntologyService, TermId};
///
/// let ontology = phenodigm::ontology::from_folder("tests/data", "test").unwrap();
/// let cached = CachedOntologyService::new(ontology);
///
/// let first = cached.matches_for(Organism::Mouse, &TermId::hp(1166)).unwrap();
/// let second = cached.matches_for(Organism::Mouse, &TermId::hp(1166)).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cached.len(), 1);
/// ```
pub struct CachedOntologyService<S> {
    inner: S,
    data_version: String,
    terms: DashMap<Organism, Vec<PhenotypeTerm>>,
    matches: DashMap<(Organism, TermId), Vec<PhenotypeMatch>>,
}

impl<S: OntologyService> CachedOntologyService<S> {
    /// Wraps `inner` into a cache for its current data version
    pub fn new(inner: S) -> Self {
        let data_version = inner.data_version().to_string();
        Self {
            inner,
            data_version,
            terms: DashMap::new(),
            matches: DashMap::new(),
        }
    }

    /// Returns the number of cached `(organism, term)` match lists
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns `true` if no match list is cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the wrapped service
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S> Debug for CachedOntologyService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CachedOntologyService {}", self.data_version)
    }
}

impl<S: OntologyService> OntologyService for CachedOntologyService<S> {
    fn data_version(&self) -> &str {
        &self.data_version
    }

    fn terms(&self, organism: Organism) -> PhenodigmResult<Vec<PhenotypeTerm>> {
        let terms = self
            .terms
            .entry(organism)
            .or_try_insert_with(|| self.inner.terms(organism))?;
        Ok(terms.value().clone())
    }

    fn matches_for(
        &self,
        organism: Organism,
        query: &TermId,
    ) -> PhenodigmResult<Vec<PhenotypeMatch>> {
        if let Some(matches) = self.matches.get(&(organism, *query)) {
            return Ok(matches.value().clone());
        }
        let matches = self.matches.entry((organism, *query)).or_try_insert_with(|| {
            trace!("Loading matches for {} - {}", query, organism);
            self.inner.matches_for(organism, query)
        })?;
        Ok(matches.value().clone())
    }
}
