use crate::model::unique_phenotypes;
use crate::term::{Organism, TermId};

/// A human gene and the union of phenotypes of all its associated diseases
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneModel {
    id: String,
    entrez_gene_id: u32,
    human_gene_symbol: String,
    phenotype_ids: Vec<TermId>,
}

impl GeneModel {
    /// Constructs a new `GeneModel`
    ///
    /// Duplicate phenotypes are removed.
    pub fn new(
        model_id: &str,
        entrez_gene_id: u32,
        human_gene_symbol: &str,
        phenotype_ids: Vec<TermId>,
    ) -> Self {
        Self {
            id: model_id.to_string(),
            entrez_gene_id,
            human_gene_symbol: human_gene_symbol.to_string(),
            phenotype_ids: unique_phenotypes(phenotype_ids),
        }
    }

    /// The unique ID of the model
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gene models are human
    pub fn organism(&self) -> Organism {
        Organism::Human
    }

    /// The NCBI gene ID
    pub fn entrez_gene_id(&self) -> u32 {
        self.entrez_gene_id
    }

    /// The gene symbol
    pub fn human_gene_symbol(&self) -> &str {
        &self.human_gene_symbol
    }

    /// The HPO terms associated with the gene
    pub fn phenotype_ids(&self) -> &[TermId] {
        &self.phenotype_ids
    }
}
