#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub mod matcher;
pub mod matches;
pub mod model;
pub mod ontology;
pub mod parser;
pub mod scorer;
pub mod service;
pub mod term;

pub use matcher::{OrganismPhenotypeMatcher, PhenodigmRawScore, TheoreticalModel};
pub use matches::PhenotypeMatch;
pub use model::{DiseaseModel, GeneModel, GeneOrthologModel, Model, ModelPhenotypeMatch};
pub use ontology::{CachedOntologyService, InMemoryOntologyService, OntologyService};
pub use scorer::{ModelScorer, PhenodigmModelScorer};
pub use service::PhenotypeMatchService;
pub use term::{Organism, PhenotypeOntology, PhenotypeTerm, TermId};

const HP_TERMS_FILENAME: &str = "hp-terms.tsv";
const MP_TERMS_FILENAME: &str = "mp-terms.tsv";
const ZP_TERMS_FILENAME: &str = "zp-terms.tsv";
const HP_HP_FILENAME: &str = "hp-hp.tsv";
const HP_MP_FILENAME: &str = "hp-mp.tsv";
const HP_ZP_FILENAME: &str = "hp-zp.tsv";

const DEFAULT_NUM_MATCHES: usize = 16;
const DEFAULT_NUM_ANCESTORS: usize = 2;

/// Main Error type for this crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PhenodigmError {
    /// The term ID does not follow the `PREFIX:0000000` format
    #[error("invalid term id: {0}")]
    InvalidTermId(String),
    /// Failed to parse an Integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// Failed to parse a Float
    #[error("unable to parse Float")]
    ParseFloatError,
    /// A file could not be opened or read
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// Input data is malformed
    #[error("invalid input data: {0}")]
    InvalidInput(String),
    /// No organism is known for the NCBI taxon id
    #[error("unknown NCBI taxon id {0}")]
    UnknownTaxon(u32),
}

impl From<ParseIntError> for PhenodigmError {
    fn from(_: ParseIntError) -> Self {
        PhenodigmError::ParseIntError
    }
}

impl From<ParseFloatError> for PhenodigmError {
    fn from(_: ParseFloatError) -> Self {
        PhenodigmError::ParseFloatError
    }
}

/// Shortcut for `Result<T, PhenodigmError>`
pub type PhenodigmResult<T> = Result<T, PhenodigmError>;
