//! Access to phenotype terms and precomputed term-pair similarities
//!
//! The [`OntologyService`] trait is the only point where phenotype data
//! enters the scoring engine. The crate provides an in-memory implementation,
//! [`InMemoryOntologyService`], that is built from OWLSim cache files,
//! and [`CachedOntologyService`], a read-through cache that can be
//! wrapped around any other implementation.

use std::path::Path;

use crate::matches::PhenotypeMatch;
use crate::term::{Organism, PhenotypeTerm, TermId};
use crate::PhenodigmResult;

mod builder;
mod cache;
mod memory;

pub use builder::Builder;
pub use cache::CachedOntologyService;
pub use memory::InMemoryOntologyService;

/// Provides terms and precomputed similarities of HPO terms to the
/// phenotype terms of an organism
///
/// Implementors must return the same data for the same arguments, as long
/// as the [`OntologyService::data_version`] does not change.
pub trait OntologyService {
    /// An identifier of the underlying data release, e.g. `2402`
    fn data_version(&self) -> &str;

    /// Returns all phenotype terms of the organism's ontology
    ///
    /// # Errors
    ///
    /// If the underlying data is not available
    fn terms(&self, organism: Organism) -> PhenodigmResult<Vec<PhenotypeTerm>>;

    /// Returns all [`PhenotypeMatch`]es of an HPO term to the
    /// phenotype terms of the organism
    ///
    /// An HPO term without any matches returns an empty `Vec`.
    ///
    /// # Errors
    ///
    /// If the underlying data is not available
    fn matches_for(
        &self,
        organism: Organism,
        query: &TermId,
    ) -> PhenodigmResult<Vec<PhenotypeMatch>>;
}

impl<T: OntologyService + ?Sized> OntologyService for &T {
    fn data_version(&self) -> &str {
        (**self).data_version()
    }

    fn terms(&self, organism: Organism) -> PhenodigmResult<Vec<PhenotypeTerm>> {
        (**self).terms(organism)
    }

    fn matches_for(
        &self,
        organism: Organism,
        query: &TermId,
    ) -> PhenodigmResult<Vec<PhenotypeMatch>> {
        (**self).matches_for(organism, query)
    }
}

/// Builds an [`InMemoryOntologyService`] from all files inside `folder`
///
/// The folder must contain the term tables `hp-terms.tsv`, `mp-terms.tsv`
/// and `zp-terms.tsv` and the OWLSim caches `hp-hp.tsv`, `hp-mp.tsv` and
/// `hp-zp.tsv`.
///
/// # Errors
///
/// If any of the files is missing or malformed
///
/// # Examples
///
/// ```
/// use phenodigm::{Organism, OntologyService, TermId};
///
/// let ontology = phenodigm::ontology::from_folder("tests/data", "test").unwrap();
/// assert_eq!(ontology.data_version(), "test");
///
/// let matches = ontology.matches_for(Organism::Mouse, &TermId::hp(1166)).unwrap();
/// assert_eq!(matches.len(), 2);
/// ```
pub fn from_folder<P: AsRef<Path>>(
    folder: P,
    data_version: &str,
) -> PhenodigmResult<InMemoryOntologyService> {
    use crate::parser::{owlsim, terms};

    let path = folder.as_ref();
    let mut builder = Builder::new(data_version);
    builder.add_terms(Organism::Human, terms::parse_file(path.join(crate::HP_TERMS_FILENAME))?);
    builder.add_terms(Organism::Mouse, terms::parse_file(path.join(crate::MP_TERMS_FILENAME))?);
    builder.add_terms(Organism::Fish, terms::parse_file(path.join(crate::ZP_TERMS_FILENAME))?);
    builder.add_cache_records(
        Organism::Human,
        owlsim::parse_file(path.join(crate::HP_HP_FILENAME))?,
    );
    builder.add_cache_records(
        Organism::Mouse,
        owlsim::parse_file(path.join(crate::HP_MP_FILENAME))?,
    );
    builder.add_cache_records(
        Organism::Fish,
        owlsim::parse_file(path.join(crate::HP_ZP_FILENAME))?,
    );
    Ok(builder.build())
}
