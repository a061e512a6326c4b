use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use confidence_interval::{
    ConfidenceLevel, IntervalEngine, SampleSummary, TwoPopulationSummary,
};

fn bench_single_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("SinglePopulation");
    let engine = IntervalEngine::new();

    for level in ConfidenceLevel::ALL {
        let summary = SampleSummary::new(780.0, 40.0, 30);
        group.bench_with_input(
            BenchmarkId::new("compute_interval", level.percent()),
            &summary,
            |b, summary| b.iter(|| engine.compute_interval(black_box(summary), level)),
        );
    }

    group.finish();
}

fn bench_two_population(c: &mut Criterion) {
    let engine = IntervalEngine::new();
    let summary = TwoPopulationSummary::new(
        SampleSummary::new(50.2838, 9.8309, 30),
        SampleSummary::new(48.5, 10.0, 25),
        ConfidenceLevel::NinetyFive,
    );

    c.bench_function("TwoPopulation/compute", |b| {
        b.iter(|| engine.compute_two_population_interval(black_box(&summary)))
    });
}

fn bench_sample_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("SampleSize");
    let engine = IntervalEngine::new();

    for margin in [0.5, 5.0, 50.0] {
        group.bench_with_input(
            BenchmarkId::new("determine_sample_size", margin),
            &margin,
            |b, &margin| {
                b.iter(|| engine.determine_sample_size(black_box(margin), 40.0, 95.0))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_population,
    bench_two_population,
    bench_sample_size
);
criterion_main!(benches);
