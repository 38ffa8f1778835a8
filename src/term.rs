//! Phenotype ontology terms, their IDs and the organisms they describe
//!
//! Every phenotype that takes part in a comparison is identified by a
//! [`TermId`], e.g. `HP:0001166` for a human phenotype, `MP:0000572` for a
//! mouse phenotype or `ZP:0000103` for a zebrafish phenotype.
//!
//! The [`Organism`] defines which [`PhenotypeOntology`] is used to describe
//! its phenotypes.

mod organism;
mod phenotype_term;
mod termid;

pub use organism::{Organism, PhenotypeOntology};
pub use phenotype_term::PhenotypeTerm;
pub use termid::TermId;
