use core::fmt::Debug;
use std::collections::HashMap;

use crate::matches::PhenotypeMatch;
use crate::ontology::{Builder, OntologyService};
use crate::term::{Organism, PhenotypeTerm, TermId};
use crate::PhenodigmResult;

/// An [`OntologyService`] that keeps all data in memory
///
/// Use [`InMemoryOntologyService::builder`] or [`crate::ontology::from_folder`]
/// to create it.
#[derive(Default)]
pub struct InMemoryOntologyService {
    data_version: String,
    terms: HashMap<Organism, Vec<PhenotypeTerm>>,
    matches: HashMap<(Organism, TermId), Vec<PhenotypeMatch>>,
}

impl InMemoryOntologyService {
    /// Returns a [`Builder`] for a service of the given data version
    pub fn builder(data_version: &str) -> Builder {
        Builder::new(data_version)
    }

    pub(crate) fn new(
        data_version: String,
        terms: HashMap<Organism, Vec<PhenotypeTerm>>,
        matches: HashMap<(Organism, TermId), Vec<PhenotypeMatch>>,
    ) -> Self {
        Self {
            data_version,
            terms,
            matches,
        }
    }
}

impl Debug for InMemoryOntologyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InMemoryOntologyService {} with {} query terms",
            self.data_version,
            self.matches.len()
        )
    }
}

impl OntologyService for InMemoryOntologyService {
    fn data_version(&self) -> &str {
        &self.data_version
    }

    fn terms(&self, organism: Organism) -> PhenodigmResult<Vec<PhenotypeTerm>> {
        Ok(self.terms.get(&organism).cloned().unwrap_or_default())
    }

    fn matches_for(
        &self,
        organism: Organism,
        query: &TermId,
    ) -> PhenodigmResult<Vec<PhenotypeMatch>> {
        Ok(self
            .matches
            .get(&(organism, *query))
            .cloned()
            .unwrap_or_default())
    }
}
