use std::collections::HashMap;

use tracing::{debug, warn};

use crate::matches::PhenotypeMatch;
use crate::ontology::InMemoryOntologyService;
use crate::parser::owlsim::CacheRecord;
use crate::term::{Organism, PhenotypeTerm, TermId};

/// Collects terms and similarity records to build an [`InMemoryOntologyService`]
///
/// Terms and records can be added in any order. Labels are attached to the
/// matches when [`Builder::build`] is called.
///
/// # Examples
///
/// ```
/// use phenodigm::ontology::Builder;
/// use phenodigm::{Organism, OntologyService, PhenotypeMatch, PhenotypeTerm, TermId};
///
/// let arachnodactyly = PhenotypeTerm::new(TermId::hp(1166), "Arachnodactyly");
///
/// let mut builder = Builder::new("custom");
/// builder.add_terms(Organism::Human, vec![arachnodactyly.clone()]);
/// builder.add_match(
///     Organism::Human,
///     PhenotypeMatch::new(arachnodactyly.clone(), arachnodactyly, 1.0, 8.829843768215113),
/// );
/// let ontology = builder.build();
///
/// assert_eq!(ontology.terms(Organism::Human).unwrap().len(), 1);
/// assert_eq!(ontology.matches_for(Organism::Human, &TermId::hp(1166)).unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    data_version: String,
    terms: HashMap<Organism, Vec<PhenotypeTerm>>,
    records: Vec<(Organism, CacheRecord)>,
    matches: Vec<(Organism, PhenotypeMatch)>,
}

impl Builder {
    /// Constructs a new, empty `Builder` for the given data version
    pub fn new(data_version: &str) -> Self {
        Self {
            data_version: data_version.to_string(),
            ..Default::default()
        }
    }

    /// Adds the phenotype terms of an organism
    pub fn add_terms(&mut self, organism: Organism, terms: Vec<PhenotypeTerm>) -> &mut Self {
        self.terms.entry(organism).or_default().extend(terms);
        self
    }

    /// Adds parsed OWLSim records of HPO terms matched to the terms of `organism`
    pub fn add_cache_records(
        &mut self,
        organism: Organism,
        records: Vec<CacheRecord>,
    ) -> &mut Self {
        self.records.extend(records.into_iter().map(|record| (organism, record)));
        self
    }

    /// Adds a single, fully defined [`PhenotypeMatch`]
    pub fn add_match(&mut self, organism: Organism, phenotype_match: PhenotypeMatch) -> &mut Self {
        self.matches.push((organism, phenotype_match));
        self
    }

    /// Creates the [`InMemoryOntologyService`]
    ///
    /// Records whose query is not an HPO term or whose target does
    /// not belong to the ontology of the organism are skipped. So are
    /// matches with a `simJ` outside of `[0, 1]` or a negative or
    /// non-finite `IC`.
    pub fn build(self) -> InMemoryOntologyService {
        let labels: HashMap<TermId, &str> = self
            .terms
            .values()
            .flatten()
            .map(|term| (*term.id(), term.label()))
            .collect();
        let term =
            |id: &TermId| PhenotypeTerm::new(*id, labels.get(id).copied().unwrap_or_default());

        let mut matches: HashMap<(Organism, TermId), Vec<PhenotypeMatch>> = HashMap::new();

        for (organism, record) in &self.records {
            if !is_valid_pair(*organism, record.source(), record.target()) {
                warn!("Skipping {} - {} for {}", record.source(), record.target(), organism);
                continue;
            }
            let mut phenotype_match = PhenotypeMatch::new(
                term(record.source()),
                term(record.target()),
                record.simj(),
                record.ic(),
            );
            if let Some(lcs) = record.ancestors().first() {
                phenotype_match = phenotype_match.with_lcs(term(lcs));
            }
            matches
                .entry((*organism, *record.source()))
                .or_insert_with(|| Vec::with_capacity(crate::DEFAULT_NUM_MATCHES))
                .push(phenotype_match);
        }

        for (organism, phenotype_match) in self.matches {
            if !is_valid_pair(organism, phenotype_match.query_id(), phenotype_match.match_id()) {
                warn!(
                    "Skipping {} - {} for {}",
                    phenotype_match.query_id(),
                    phenotype_match.match_id(),
                    organism
                );
                continue;
            }
            if !has_valid_values(&phenotype_match) {
                warn!(
                    "Skipping {} - {}: simJ {} IC {}",
                    phenotype_match.query_id(),
                    phenotype_match.match_id(),
                    phenotype_match.simj(),
                    phenotype_match.ic()
                );
                continue;
            }
            matches
                .entry((organism, *phenotype_match.query_id()))
                .or_default()
                .push(phenotype_match);
        }

        debug!(
            "Built ontology service {} with {} query terms",
            self.data_version,
            matches.len()
        );
        InMemoryOntologyService::new(self.data_version, self.terms, matches)
    }
}

fn is_valid_pair(organism: Organism, query: &TermId, target: &TermId) -> bool {
    query.ontology() == Organism::Human.ontology() && target.ontology() == organism.ontology()
}

fn has_valid_values(phenotype_match: &PhenotypeMatch) -> bool {
    (0.0..=1.0).contains(&phenotype_match.simj())
        && phenotype_match.ic().is_finite()
        && phenotype_match.ic() >= 0.0
}
