use core::fmt::Debug;
use std::fmt::Display;

use crate::term::PhenotypeOntology;
use crate::{PhenodigmError, PhenodigmResult};

/// The unique identifier of a phenotype term, e.g. `HP:0001166`
///
/// A `TermId` consists of the [`PhenotypeOntology`] prefix and the
/// numerical part of the identifier. It is `Copy` and cheap to compare.
///
/// The ordering of `TermId`s is identical to the lexicographical
/// ordering of their string representation.
///
/// # Examples
///
/// ```
/// use phenodigm::{PhenotypeOntology, TermId};
///
/// let id = TermId::try_from("HP:0001166").unwrap();
/// assert_eq!(id.ontology(), PhenotypeOntology::Hp);
/// assert_eq!(id.as_u32(), 1166);
/// assert_eq!(id.to_string(), "HP:0001166");
///
/// assert!(id < TermId::try_from("MP:0000001").unwrap());
/// ```
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TermId {
    ontology: PhenotypeOntology,
    inner: u32,
}

impl TermId {
    /// Constructs a new `TermId` from its parts
    pub fn new(ontology: PhenotypeOntology, inner: u32) -> Self {
        Self { ontology, inner }
    }

    /// Shortcut for a `TermId` of the Human Phenotype Ontology
    pub fn hp(inner: u32) -> Self {
        Self::new(PhenotypeOntology::Hp, inner)
    }

    /// Shortcut for a `TermId` of the Mammalian Phenotype Ontology
    pub fn mp(inner: u32) -> Self {
        Self::new(PhenotypeOntology::Mp, inner)
    }

    /// Shortcut for a `TermId` of the Zebrafish Phenotype Ontology
    pub fn zp(inner: u32) -> Self {
        Self::new(PhenotypeOntology::Zp, inner)
    }

    /// The ontology the term belongs to
    pub fn ontology(&self) -> PhenotypeOntology {
        self.ontology
    }

    /// The numerical part of the ID
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for TermId {
    type Error = PhenodigmError;
    fn try_from(s: &str) -> PhenodigmResult<Self> {
        let Some((prefix, number)) = s.trim().split_once(':') else {
            return Err(PhenodigmError::InvalidTermId(s.to_string()));
        };
        let ontology = PhenotypeOntology::from_prefix(prefix)
            .ok_or_else(|| PhenodigmError::InvalidTermId(s.to_string()))?;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhenodigmError::InvalidTermId(s.to_string()));
        }
        Ok(TermId {
            ontology,
            inner: number.parse::<u32>()?,
        })
    }
}

impl Debug for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermId({self})")
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:07}", self.ontology.prefix(), self.inner)
    }
}

impl PartialEq<str> for TermId {
    fn eq(&self, other: &str) -> bool {
        TermId::try_from(other).map_or(false, |other| self == &other)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id = TermId::try_from("MP:0000572").unwrap();
        assert_eq!(id, TermId::mp(572));
        assert_eq!(id.to_string(), "MP:0000572");
        assert_eq!(format!("{id:?}"), "TermId(MP:0000572)");
        assert!(id == *"MP:0000572");
    }

    #[test]
    fn invalid_ids() {
        assert!(TermId::try_from("HP0000118").is_err());
        assert!(TermId::try_from("UBERON:0000001").is_err());
        assert!(TermId::try_from("HP:").is_err());
        assert!(TermId::try_from("HP:12a4").is_err());
        assert!(TermId::try_from("HP:-12").is_err());
    }

    #[test]
    fn ordering_follows_string_form() {
        let mut ids = vec![
            TermId::zp(1),
            TermId::hp(1166),
            TermId::mp(5508),
            TermId::hp(545),
            TermId::mp(572),
        ];
        ids.sort();
        let mut strings: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let sorted = strings.clone();
        strings.sort();
        assert_eq!(strings, sorted);
        assert_eq!(ids[0], TermId::hp(545));
    }
}
