//! Scoring models against the query phenotypes of a patient

use tracing::debug;

use crate::matcher::{OrganismPhenotypeMatcher, PhenodigmRawScore, TheoreticalModel};
use crate::model::{Model, ModelPhenotypeMatch};

/// Trait for scoring a [`Model`] against the query phenotypes
///
/// Implementors must be pure: scoring the same model twice returns
/// identical results, and scoring does not modify any shared state.
pub trait ModelScorer {
    /// Calculates the [`ModelPhenotypeMatch`] of a single model
    fn score_model<'m>(&self, model: &'m Model) -> ModelPhenotypeMatch<'m>;

    /// Scores all models, in the given order
    fn score_models<'m>(&self, models: &'m [Model]) -> Vec<ModelPhenotypeMatch<'m>> {
        models.iter().map(|model| self.score_model(model)).collect()
    }
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Phenodigm based scoring of models, normalized by a theoretical best model
///
/// The raw score of a model combines the best match of each query term
/// to the model phenotypes and the best match of each model phenotype to
/// the query terms (see [`OrganismPhenotypeMatcher::raw_score`]). It is
/// normalized by the raw score of a [`TheoreticalModel`]:
///
/// ```text
/// avg   = sum_best_match_scores / (num_query_phenotypes + matched_model_phenotypes)
/// score = min(50 * (max / best_max + avg / best_avg), 100) / 100
/// ```
///
/// The scorer is selected once per ranking session:
///
/// - [`PhenodigmModelScorer::for_same_species`]: the models are described
///   in the same ontology as the query, e.g. human diseases.
/// - [`PhenodigmModelScorer::for_single_cross_species`]: the models belong
///   to a single other organism, e.g. only mouse models are ranked.
/// - [`PhenodigmModelScorer::for_multi_cross_species`]: models of several
///   organisms are ranked together. All scores are normalized by the same
///   theoretical model, usually the human one.
///
/// ```mermaid
/// graph LR
///     Q[Query HPO terms] --> S[PhenotypeMatchService]
///     S --> H[Human matcher]
///     S --> M[Mouse matcher]
///     S --> F[Fish matcher]
///     H --> T[TheoreticalModel]
///     T --> HS[Human scorer]
///     T --> MS[Mouse scorer]
///     T --> FS[Fish scorer]
///     H --> HS
///     M --> MS
///     F --> FS
/// ```
///
/// # Examples
///
/// ```
/// use phenodigm::{
///     DiseaseModel, Model, ModelScorer, Organism, PhenodigmModelScorer, PhenotypeMatchService,
///     TermId,
/// };
///
/// let ontology = phenodigm::ontology::from_folder("tests/data", "test").unwrap();
/// let service = PhenotypeMatchService::new(&ontology);
/// let query = service
///     .make_phenotype_terms(&[
///         TermId::hp(1166),
///         TermId::hp(1382),
///         TermId::hp(1519),
///         TermId::hp(545),
///     ])
///     .unwrap();
/// let matcher = service.matcher_for_terms(Organism::Human, &query).unwrap();
/// let scorer = PhenodigmModelScorer::for_same_species(&matcher);
///
/// let model = Model::from(DiseaseModel::new(
///     "OMIM:154700",
///     "Marfan syndrome",
///     2200,
///     "FBN1",
///     vec![TermId::hp(1166), TermId::hp(1382), TermId::hp(1519), TermId::hp(545)],
/// ));
/// let result = scorer.score_model(&model);
/// assert_eq!(result.score(), 1.0);
/// assert_eq!(result.best_model_phenotype_matches().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PhenodigmModelScorer<'a> {
    matcher: &'a OrganismPhenotypeMatcher,
    theoretical_max_match_score: f64,
    theoretical_best_avg_score: f64,
    num_query_phenotypes: usize,
}

impl<'a> PhenodigmModelScorer<'a> {
    fn new(theoretical_model: &TheoreticalModel, matcher: &'a OrganismPhenotypeMatcher) -> Self {
        let scorer = Self {
            matcher,
            theoretical_max_match_score: theoretical_model.max_match_score(),
            theoretical_best_avg_score: theoretical_model.best_avg_score(),
            num_query_phenotypes: theoretical_model.num_query_phenotypes(),
        };
        debug!(
            "{} scorer with ceiling {} {}: max {}, avg {}",
            matcher.organism(),
            theoretical_model.organism(),
            scorer.num_query_phenotypes,
            scorer.theoretical_max_match_score,
            scorer.theoretical_best_avg_score
        );
        scorer
    }

    /// Creates a scorer for models of the same organism as the query terms
    ///
    /// A model that consists of exactly the best matches of all query
    /// terms scores `1.0`.
    pub fn for_same_species(matcher: &'a OrganismPhenotypeMatcher) -> Self {
        Self::new(&matcher.best_theoretical_model(), matcher)
    }

    /// Creates a scorer for models of a single organism that differs
    /// from the organism of the query terms
    ///
    /// Normalization uses the best theoretical model of that organism, so
    /// the best possible model of the organism scores `1.0` as well.
    pub fn for_single_cross_species(matcher: &'a OrganismPhenotypeMatcher) -> Self {
        Self::new(&matcher.best_theoretical_model(), matcher)
    }

    /// Creates a scorer for models of one of several organisms that are
    /// ranked together
    ///
    /// All organisms must use the same `theoretical_model`, usually the
    /// one of the query organism. Scores of other organisms are then lower
    /// according to how well their ontology aligns to the query ontology.
    pub fn for_multi_cross_species(
        theoretical_model: &TheoreticalModel,
        matcher: &'a OrganismPhenotypeMatcher,
    ) -> Self {
        Self::new(theoretical_model, matcher)
    }

    /// The matcher that is used to score models
    pub fn matcher(&self) -> &'a OrganismPhenotypeMatcher {
        self.matcher
    }

    fn normalized_score(&self, raw_score: &PhenodigmRawScore) -> f64 {
        if raw_score.sum_best_match_scores() <= 0.0
            || self.theoretical_max_match_score <= 0.0
            || self.theoretical_best_avg_score <= 0.0
        {
            return 0.0;
        }
        let avg_score = raw_score.average_score(self.num_query_phenotypes);
        let combined = 50.0
            * (raw_score.max_match_score() / self.theoretical_max_match_score
                + avg_score / self.theoretical_best_avg_score);
        combined.min(100.0) / 100.0
    }
}

impl ModelScorer for PhenodigmModelScorer<'_> {
    fn score_model<'m>(&self, model: &'m Model) -> ModelPhenotypeMatch<'m> {
        let raw_score = self.matcher.raw_score(model.phenotype_ids());
        let score = self.normalized_score(&raw_score);
        ModelPhenotypeMatch::new(model, score, raw_score.into_best_phenotype_matches())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{DiseaseModel, GeneModel, GeneOrthologModel};
    use crate::ontology::InMemoryOntologyService;
    use crate::service::PhenotypeMatchService;
    use crate::term::{Organism, TermId};
    use rayon::prelude::*;

    fn ontology() -> InMemoryOntologyService {
        crate::ontology::from_folder("tests/data", "test").unwrap()
    }

    fn query_ids() -> Vec<TermId> {
        vec![TermId::hp(1166), TermId::hp(1382), TermId::hp(1519), TermId::hp(545)]
    }

    fn build_matcher(
        ontology: &InMemoryOntologyService,
        organism: Organism,
        ids: &[TermId],
    ) -> OrganismPhenotypeMatcher {
        let service = PhenotypeMatchService::new(ontology);
        let query = service.make_phenotype_terms(ids).unwrap();
        service.matcher_for_terms(organism, &query).unwrap()
    }

    fn disease(phenotypes: Vec<TermId>) -> Model {
        Model::from(DiseaseModel::new("OMIM:154700", "Marfan syndrome", 2200, "FBN1", phenotypes))
    }

    fn mouse(phenotypes: Vec<TermId>) -> Model {
        Model::from(GeneOrthologModel::new(
            "MGI:95489_1",
            Organism::Mouse,
            2200,
            "FBN1",
            "MGI:95489",
            "Fbn1",
            phenotypes,
        ))
    }

    fn fish(phenotypes: Vec<TermId>) -> Model {
        Model::from(GeneOrthologModel::new(
            "ZDB-GENE-1_1",
            Organism::Fish,
            2200,
            "FBN1",
            "ZDB-GENE-1",
            "fbn1",
            phenotypes,
        ))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn perfect_same_species_model() {
        let ontology = ontology();
        let matcher = build_matcher(&ontology, Organism::Human, &query_ids());
        let scorer = PhenodigmModelScorer::for_same_species(&matcher);

        let model = disease(matcher.best_theoretical_model().phenotype_ids().to_vec());
        let result = scorer.score_model(&model);
        assert_eq!(result.score(), 1.0);
        assert_eq!(result.best_model_phenotype_matches().len(), 4);
    }

    #[test]
    fn partial_same_species_models() {
        let ontology = ontology();
        let matcher = build_matcher(&ontology, Organism::Human, &query_ids());
        let scorer = PhenodigmModelScorer::for_same_species(&matcher);

        let model = disease(vec![TermId::hp(1166), TermId::hp(1519), TermId::hp(478)]);
        let result = scorer.score_model(&model);
        assert_close(result.score(), 0.8696420711469292);

        let evidence: Vec<String> = result
            .best_model_phenotype_matches()
            .iter()
            .map(|m| format!("{}-{}", m.query_id(), m.match_id()))
            .collect();
        assert_eq!(
            evidence,
            vec![
                "HP:0001166-HP:0001166",
                "HP:0001382-HP:0001166",
                "HP:0001519-HP:0001519",
                "HP:0000545-HP:0000478"
            ]
        );

        // the first two query terms
        let model = disease(query_ids()[..2].to_vec());
        assert_close(scorer.score_model(&model).score(), 0.8461466142762741);
    }

    #[test]
    fn unmatched_query_term_does_not_change_perfect_score() {
        let ontology = ontology();
        let mut ids = query_ids();
        ids.push(TermId::hp(31797));
        let matcher = build_matcher(&ontology, Organism::Human, &ids);
        assert_eq!(matcher.query_terms().len(), 5);

        for scorer in [
            PhenodigmModelScorer::for_same_species(&matcher),
            PhenodigmModelScorer::for_single_cross_species(&matcher),
        ] {
            let model = disease(matcher.best_theoretical_model().phenotype_ids().to_vec());
            assert_eq!(scorer.score_model(&model).score(), 1.0);
        }
    }

    #[test]
    fn perfect_single_cross_species_model() {
        let ontology = ontology();
        let matcher = build_matcher(&ontology, Organism::Mouse, &query_ids());
        let scorer = PhenodigmModelScorer::for_single_cross_species(&matcher);

        let model = mouse(matcher.best_theoretical_model().phenotype_ids().to_vec());
        assert_eq!(scorer.score_model(&model).score(), 1.0);

        let model = mouse(vec![
            TermId::mp(572),
            TermId::mp(1264),
            TermId::mp(2092),
            TermId::mp(5508),
        ]);
        assert_eq!(scorer.score_model(&model).score(), 1.0);
    }

    #[test]
    fn multi_cross_species() {
        let ontology = ontology();
        let human_matcher = build_matcher(&ontology, Organism::Human, &query_ids());
        let mouse_matcher = build_matcher(&ontology, Organism::Mouse, &query_ids());
        let fish_matcher = build_matcher(&ontology, Organism::Fish, &query_ids());
        let theoretical_model = human_matcher.best_theoretical_model();

        let human_scorer =
            PhenodigmModelScorer::for_multi_cross_species(&theoretical_model, &human_matcher);
        let mouse_scorer =
            PhenodigmModelScorer::for_multi_cross_species(&theoretical_model, &mouse_matcher);
        let fish_scorer =
            PhenodigmModelScorer::for_multi_cross_species(&theoretical_model, &fish_matcher);

        let human_model = disease(theoretical_model.phenotype_ids().to_vec());
        let mouse_model = mouse(vec![
            TermId::mp(572),
            TermId::mp(1264),
            TermId::mp(2092),
            TermId::mp(5508),
        ]);
        let fish_model = fish(vec![TermId::zp(103), TermId::zp(960), TermId::zp(407)]);

        let human_score = human_scorer.score_model(&human_model).score();
        let mouse_score = mouse_scorer.score_model(&mouse_model).score();
        let fish_score = fish_scorer.score_model(&fish_model).score();

        assert_eq!(human_score, 1.0);
        assert_close(mouse_score, 0.46009583486839534);
        assert_close(fish_score, 0.30093080861841404);
        assert!(human_score > mouse_score && mouse_score > fish_score);

        let partial = mouse(vec![TermId::mp(1264)]);
        assert_close(mouse_scorer.score_model(&partial).score(), 0.34436144752236253);
    }

    #[test]
    fn empty_model() {
        let ontology = ontology();
        let matcher = build_matcher(&ontology, Organism::Human, &query_ids());
        let scorer = PhenodigmModelScorer::for_same_species(&matcher);

        let model = Model::from(GeneModel::new("2200", 2200, "FBN1", vec![]));
        let result = scorer.score_model(&model);
        assert_eq!(result.score(), 0.0);
        assert!(result.best_model_phenotype_matches().is_empty());
    }

    #[test]
    fn query_without_coverage() {
        let ontology = ontology();
        let matcher = build_matcher(&ontology, Organism::Human, &[TermId::hp(31797)]);
        let scorer = PhenodigmModelScorer::for_same_species(&matcher);

        let model = disease(query_ids());
        let result = scorer.score_model(&model);
        assert_eq!(result.score(), 0.0);
        assert!(result.best_model_phenotype_matches().is_empty());

        let empty_matcher = build_matcher(&ontology, Organism::Fish, &[]);
        let scorer = PhenodigmModelScorer::for_same_species(&empty_matcher);
        assert_eq!(scorer.score_model(&fish(vec![TermId::zp(103)])).score(), 0.0);
    }

    #[test]
    fn zero_scoring_matches_only() {
        let ontology = ontology();
        // HP:0000545 - HP:0001166 only share the root term, the match scores 0
        let matcher = build_matcher(&ontology, Organism::Human, &[TermId::hp(545)]);
        let scorer = PhenodigmModelScorer::for_same_species(&matcher);

        let model = disease(vec![TermId::hp(1166)]);
        let result = scorer.score_model(&model);
        assert_eq!(result.score(), 0.0);
        assert!(result.best_model_phenotype_matches().is_empty());
    }

    #[test]
    fn scores_are_bounded() {
        let ontology = ontology();
        let matcher = build_matcher(&ontology, Organism::Human, &query_ids());
        let scorer = PhenodigmModelScorer::for_same_species(&matcher);
        let candidates = [
            TermId::hp(1),
            TermId::hp(98),
            TermId::hp(478),
            TermId::hp(545),
            TermId::hp(1166),
            TermId::hp(1238),
            TermId::hp(1382),
            TermId::hp(1519),
        ];
        for n in 0..candidates.len() {
            for skip in 0..candidates.len() {
                let phenotypes = candidates.iter().cycle().skip(skip).take(n).copied().collect();
                let score = scorer.score_model(&disease(phenotypes)).score();
                assert!((0.0..=1.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn parallel_scoring_is_deterministic() {
        let ontology = ontology();
        let matcher = build_matcher(&ontology, Organism::Mouse, &query_ids());
        let scorer = PhenodigmModelScorer::for_single_cross_species(&matcher);

        let models: Vec<Model> = (0..200)
            .map(|i| {
                let phenotypes = [
                    TermId::mp(572),
                    TermId::mp(1264),
                    TermId::mp(2092),
                    TermId::mp(5508),
                ]
                .into_iter()
                .skip(i % 4)
                .collect();
                mouse(phenotypes)
            })
            .collect();

        let sequential = scorer.score_models(&models);
        let parallel: Vec<ModelPhenotypeMatch> = models
            .par_iter()
            .map(|model| scorer.score_model(model))
            .collect();

        assert_eq!(sequential.len(), parallel.len());
        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.score().to_bits(), b.score().to_bits());
            assert_eq!(a.best_model_phenotype_matches(), b.best_model_phenotype_matches());
        }
    }
}
