use crate::model::unique_phenotypes;
use crate::term::{Organism, TermId};

/// A human disease, caused by variants in a gene, and its phenotypes
///
/// The model ID is a combination of the disease ID and the gene ID,
/// because the same disease can be associated with several genes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiseaseModel {
    id: String,
    disease_id: String,
    disease_term: String,
    entrez_gene_id: u32,
    human_gene_symbol: String,
    phenotype_ids: Vec<TermId>,
}

impl DiseaseModel {
    /// Constructs a new `DiseaseModel`
    ///
    /// Duplicate phenotypes are removed.
    pub fn new(
        disease_id: &str,
        disease_term: &str,
        entrez_gene_id: u32,
        human_gene_symbol: &str,
        phenotype_ids: Vec<TermId>,
    ) -> Self {
        Self {
            id: format!("{disease_id}_{entrez_gene_id}"),
            disease_id: disease_id.to_string(),
            disease_term: disease_term.to_string(),
            entrez_gene_id,
            human_gene_symbol: human_gene_symbol.to_string(),
            phenotype_ids: unique_phenotypes(phenotype_ids),
        }
    }

    /// The model ID, `{disease_id}_{entrez_gene_id}`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Diseases are always human
    pub fn organism(&self) -> Organism {
        Organism::Human
    }

    /// The disease ID, e.g. `OMIM:154700`
    pub fn disease_id(&self) -> &str {
        &self.disease_id
    }

    /// The name of the disease
    pub fn disease_term(&self) -> &str {
        &self.disease_term
    }

    /// The NCBI gene ID of the associated gene
    pub fn entrez_gene_id(&self) -> u32 {
        self.entrez_gene_id
    }

    /// The symbol of the associated gene
    pub fn human_gene_symbol(&self) -> &str {
        &self.human_gene_symbol
    }

    /// The HPO terms of the disease
    pub fn phenotype_ids(&self) -> &[TermId] {
        &self.phenotype_ids
    }
}
