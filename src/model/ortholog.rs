use crate::model::unique_phenotypes;
use crate::term::{Organism, TermId};

/// The phenotypes of an animal model with a mutation in the ortholog of a human gene
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneOrthologModel {
    id: String,
    organism: Organism,
    entrez_gene_id: u32,
    human_gene_symbol: String,
    model_gene_id: String,
    model_gene_symbol: String,
    phenotype_ids: Vec<TermId>,
}

impl GeneOrthologModel {
    /// Constructs a new `GeneOrthologModel`
    ///
    /// Duplicate phenotypes are removed.
    pub fn new(
        model_id: &str,
        organism: Organism,
        entrez_gene_id: u32,
        human_gene_symbol: &str,
        model_gene_id: &str,
        model_gene_symbol: &str,
        phenotype_ids: Vec<TermId>,
    ) -> Self {
        Self {
            id: model_id.to_string(),
            organism,
            entrez_gene_id,
            human_gene_symbol: human_gene_symbol.to_string(),
            model_gene_id: model_gene_id.to_string(),
            model_gene_symbol: model_gene_symbol.to_string(),
            phenotype_ids: unique_phenotypes(phenotype_ids),
        }
    }

    /// The unique ID of the model
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The organism of the model, e.g. mouse
    pub fn organism(&self) -> Organism {
        self.organism
    }

    /// The NCBI gene ID of the human ortholog
    pub fn entrez_gene_id(&self) -> u32 {
        self.entrez_gene_id
    }

    /// The symbol of the human ortholog
    pub fn human_gene_symbol(&self) -> &str {
        &self.human_gene_symbol
    }

    /// The ID of the gene in the model organism, e.g. `MGI:95489`
    pub fn model_gene_id(&self) -> &str {
        &self.model_gene_id
    }

    /// The symbol of the gene in the model organism, e.g. `Fbn1`
    pub fn model_gene_symbol(&self) -> &str {
        &self.model_gene_symbol
    }

    /// The phenotypes of the model, from the organism's ontology
    pub fn phenotype_ids(&self) -> &[TermId] {
        &self.phenotype_ids
    }
}
