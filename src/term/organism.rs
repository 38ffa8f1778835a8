use std::fmt::Display;

use crate::{PhenodigmError, PhenodigmResult};

/// The phenotype ontologies that can be compared to each other
///
/// The variants are declared in alphabetical order of their prefix,
/// so that the derived ordering matches the string ordering.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PhenotypeOntology {
    /// Human Phenotype Ontology, `HP`
    Hp,
    /// Mammalian Phenotype Ontology, `MP`
    Mp,
    /// Zebrafish Phenotype Ontology, `ZP`
    Zp,
}

impl PhenotypeOntology {
    /// The CURIE prefix of the ontology, e.g. `HP`
    pub fn prefix(&self) -> &'static str {
        match self {
            PhenotypeOntology::Hp => "HP",
            PhenotypeOntology::Mp => "MP",
            PhenotypeOntology::Zp => "ZP",
        }
    }

    /// Returns the ontology for a CURIE prefix
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "HP" => Some(PhenotypeOntology::Hp),
            "MP" => Some(PhenotypeOntology::Mp),
            "ZP" => Some(PhenotypeOntology::Zp),
            _ => None,
        }
    }
}

/// The organism that a model or a set of phenotypes belongs to
///
/// # Examples
///
/// ```
/// use phenodigm::{Organism, PhenotypeOntology};
///
/// let mouse = Organism::from_taxon_id(10090).unwrap();
/// assert_eq!(mouse, Organism::Mouse);
/// assert_eq!(mouse.species_name(), "Mus musculus");
/// assert_eq!(mouse.ontology(), PhenotypeOntology::Mp);
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Organism {
    /// Homo sapiens
    Human,
    /// Mus musculus
    Mouse,
    /// Danio rerio
    Fish,
}

// (organism, NCBI taxon id, species name, ontology)
static ORGANISMS: [(Organism, u32, &str, PhenotypeOntology); 3] = [
    (Organism::Human, 9606, "Homo sapiens", PhenotypeOntology::Hp),
    (Organism::Mouse, 10090, "Mus musculus", PhenotypeOntology::Mp),
    (Organism::Fish, 7955, "Danio rerio", PhenotypeOntology::Zp),
];

impl Organism {
    /// All supported organisms
    pub fn all() -> [Organism; 3] {
        [Organism::Human, Organism::Mouse, Organism::Fish]
    }

    fn row(&self) -> &'static (Organism, u32, &'static str, PhenotypeOntology) {
        match self {
            Organism::Human => &ORGANISMS[0],
            Organism::Mouse => &ORGANISMS[1],
            Organism::Fish => &ORGANISMS[2],
        }
    }

    /// The NCBI taxon id, e.g. `9606` for human
    pub fn taxon_id(&self) -> u32 {
        self.row().1
    }

    /// The scientific name of the species
    pub fn species_name(&self) -> &'static str {
        self.row().2
    }

    /// The ontology used to describe the organism's phenotypes
    pub fn ontology(&self) -> PhenotypeOntology {
        self.row().3
    }

    /// Returns the organism for an NCBI taxon id
    ///
    /// # Errors
    ///
    /// [`PhenodigmError::UnknownTaxon`] if the taxon is not supported
    pub fn from_taxon_id(taxon_id: u32) -> PhenodigmResult<Self> {
        ORGANISMS
            .iter()
            .find(|row| row.1 == taxon_id)
            .map(|row| row.0)
            .ok_or(PhenodigmError::UnknownTaxon(taxon_id))
    }
}

impl Display for Organism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Organism::Human => "HUMAN",
            Organism::Mouse => "MOUSE",
            Organism::Fish => "FISH",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn taxon_roundtrip() {
        for organism in Organism::all() {
            assert_eq!(
                Organism::from_taxon_id(organism.taxon_id()).unwrap(),
                organism
            );
        }
        assert!(matches!(
            Organism::from_taxon_id(7227),
            Err(PhenodigmError::UnknownTaxon(7227))
        ));
    }

    #[test]
    fn ontologies() {
        assert_eq!(Organism::Human.ontology().prefix(), "HP");
        assert_eq!(Organism::Fish.ontology().prefix(), "ZP");
        assert_eq!(PhenotypeOntology::from_prefix("MP"), Some(PhenotypeOntology::Mp));
        assert_eq!(PhenotypeOntology::from_prefix("UBERON"), None);
    }
}
