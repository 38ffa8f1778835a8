use std::hash::Hash;

use crate::term::TermId;

/// A single phenotype term with its label
///
/// Two terms are considered equal if their [`TermId`]s are equal,
/// regardless of the label.
#[derive(Debug, Clone)]
pub struct PhenotypeTerm {
    id: TermId,
    label: String,
}

impl PhenotypeTerm {
    /// Constructs a new `PhenotypeTerm`
    pub fn new(id: TermId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
        }
    }

    /// The [`TermId`] of the term
    pub fn id(&self) -> &TermId {
        &self.id
    }

    /// The label of the term, e.g. `Arachnodactyly`
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for PhenotypeTerm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PhenotypeTerm {}

impl Hash for PhenotypeTerm {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<TermId> for PhenotypeTerm {
    fn from(id: TermId) -> Self {
        Self {
            id,
            label: String::new(),
        }
    }
}
