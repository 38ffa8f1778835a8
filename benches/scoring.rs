use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rayon::prelude::*;

use phenodigm::ontology::InMemoryOntologyService;
use phenodigm::{
    GeneOrthologModel, Model, ModelScorer, Organism, PhenodigmModelScorer, PhenotypeMatchService,
    TermId,
};

const MOUSE_PHENOTYPES: [u32; 4] = [572, 1264, 2092, 5508];

fn models(n: usize) -> Vec<Model> {
    (0..n)
        .map(|i| {
            let phenotypes = MOUSE_PHENOTYPES
                .iter()
                .cycle()
                .skip(i % 4)
                .take(1 + i % 4)
                .map(|id| TermId::mp(*id))
                .collect();
            Model::from(GeneOrthologModel::new(
                &format!("MGI:{i}_1"),
                Organism::Mouse,
                2200,
                "FBN1",
                &format!("MGI:{i}"),
                "Fbn1",
                phenotypes,
            ))
        })
        .collect()
}

fn score_sequential(scorer: &PhenodigmModelScorer, models: &[Model]) -> f64 {
    scorer
        .score_models(models)
        .iter()
        .map(|result| result.score())
        .sum()
}

fn score_parallel(scorer: &PhenodigmModelScorer, models: &[Model]) -> f64 {
    models
        .par_iter()
        .map(|model| scorer.score_model(model).score())
        .sum()
}

fn scoring_benchmark(c: &mut Criterion) {
    let ontology: InMemoryOntologyService =
        phenodigm::ontology::from_folder("tests/data", "bench").unwrap();
    let service = PhenotypeMatchService::new(&ontology);
    let query = service
        .make_phenotype_terms(&[
            TermId::hp(1166),
            TermId::hp(1382),
            TermId::hp(1519),
            TermId::hp(545),
        ])
        .unwrap();
    let human = service.matcher_for_terms(Organism::Human, &query).unwrap();
    let mouse = service.matcher_for_terms(Organism::Mouse, &query).unwrap();
    let theoretical_model = human.best_theoretical_model();
    let scorer = PhenodigmModelScorer::for_multi_cross_species(&theoretical_model, &mouse);
    let models = models(10_000);

    c.bench_function("score 10000 models", |b| {
        b.iter(|| score_sequential(black_box(&scorer), black_box(&models)))
    });

    c.bench_function("score-parallel 10000 models", |b| {
        b.iter(|| score_parallel(black_box(&scorer), black_box(&models)))
    });
}

criterion_group!(scoring, scoring_benchmark);
criterion_main!(scoring);
