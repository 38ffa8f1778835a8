//! Models are the candidates that are ranked against the query phenotypes
//!
//! A model is the phenotype profile of a disease, of a gene or of the
//! ortholog of a gene in another organism. All model types share the same
//! identity fields, accessible through the [`Model`] enum:
//!
//! - a unique model ID
//! - the [`Organism`]
//! - the NCBI (Entrez) gene ID and the human gene symbol
//! - a label
//! - the list of phenotypes, as [`TermId`]s of the organism's ontology
//!
//! Models are immutable after construction and can be shared across threads.

use std::fmt::Display;

use crate::term::{Organism, TermId};

mod disease;
mod gene;
mod ortholog;
mod phenotype_match;

pub use disease::DiseaseModel;
pub use gene::GeneModel;
pub use ortholog::GeneOrthologModel;
pub use phenotype_match::ModelPhenotypeMatch;

/// A candidate model that can be scored against the query phenotypes
///
/// # Examples
///
/// ```
/// use phenodigm::{DiseaseModel, Model, Organism, TermId};
///
/// let model = Model::from(DiseaseModel::new(
///     "OMIM:154700",
///     "Marfan syndrome",
///     2200,
///     "FBN1",
///     vec![TermId::hp(1166), TermId::hp(1519)],
/// ));
///
/// assert_eq!(model.id(), "OMIM:154700_2200");
/// assert_eq!(model.organism(), Organism::Human);
/// assert_eq!(model.phenotype_ids().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// A human disease associated with a gene
    Disease(DiseaseModel),
    /// An animal model of the ortholog of a human gene
    GeneOrtholog(GeneOrthologModel),
    /// The phenotypes associated with a human gene
    Gene(GeneModel),
}

impl Model {
    /// The unique ID of the model
    pub fn id(&self) -> &str {
        match self {
            Model::Disease(model) => model.id(),
            Model::GeneOrtholog(model) => model.id(),
            Model::Gene(model) => model.id(),
        }
    }

    /// The organism the phenotypes were observed in
    pub fn organism(&self) -> Organism {
        match self {
            Model::Disease(model) => model.organism(),
            Model::GeneOrtholog(model) => model.organism(),
            Model::Gene(model) => model.organism(),
        }
    }

    /// The NCBI (Entrez) gene ID of the human gene
    pub fn entrez_gene_id(&self) -> u32 {
        match self {
            Model::Disease(model) => model.entrez_gene_id(),
            Model::GeneOrtholog(model) => model.entrez_gene_id(),
            Model::Gene(model) => model.entrez_gene_id(),
        }
    }

    /// The symbol of the human gene
    pub fn human_gene_symbol(&self) -> &str {
        match self {
            Model::Disease(model) => model.human_gene_symbol(),
            Model::GeneOrtholog(model) => model.human_gene_symbol(),
            Model::Gene(model) => model.human_gene_symbol(),
        }
    }

    /// A human readable label, e.g. the disease name or the model gene symbol
    pub fn label(&self) -> &str {
        match self {
            Model::Disease(model) => model.disease_term(),
            Model::GeneOrtholog(model) => model.model_gene_symbol(),
            Model::Gene(model) => model.human_gene_symbol(),
        }
    }

    /// The phenotypes of the model
    pub fn phenotype_ids(&self) -> &[TermId] {
        match self {
            Model::Disease(model) => model.phenotype_ids(),
            Model::GeneOrtholog(model) => model.phenotype_ids(),
            Model::Gene(model) => model.phenotype_ids(),
        }
    }
}

impl From<DiseaseModel> for Model {
    fn from(model: DiseaseModel) -> Self {
        Model::Disease(model)
    }
}

impl From<GeneOrthologModel> for Model {
    fn from(model: GeneOrthologModel) -> Self {
        Model::GeneOrtholog(model)
    }
}

impl From<GeneModel> for Model {
    fn from(model: GeneModel) -> Self {
        Model::Gene(model)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.organism(), self.id(), self.label())
    }
}

/// Removes duplicate phenotypes while keeping the order of their first occurrence
fn unique_phenotypes(phenotype_ids: Vec<TermId>) -> Vec<TermId> {
    let mut unique = Vec::with_capacity(phenotype_ids.len());
    for id in phenotype_ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
