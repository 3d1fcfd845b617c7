//! Classification throughput
//!
//! A dashboard refresh classifies every metric of every domain, so the hot
//! paths are the plain band lookup, the NH3 path and the composite rules.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use farmguard_core::{
    classify, uia_from_tan, Classifier, Domain, Extras, Metric, RuleSet, ThresholdRegistry,
};

fn bench_classify(c: &mut Criterion) {
    let registry = ThresholdRegistry::standard();
    let rules = RuleSet::standard();
    let classifier = Classifier::new(&registry, &rules);
    let none = Extras::new();
    let pond = Extras::new().with_ph(8.2).with_suhu(28.0);
    let pen = Extras::new().with_kelembaban(80.0);

    let mut group = c.benchmark_group("classify");

    group.bench_function("band_level", |b| {
        b.iter(|| classifier.klass(Domain::Kandang, Metric::Suhu, black_box(25.0), &none))
    });

    group.bench_function("band_result", |b| {
        b.iter(|| classifier.classify(Domain::Hidroponik, Metric::Ph, black_box(7.0), &none))
    });

    group.bench_function("nh3_path", |b| {
        b.iter(|| classifier.classify(Domain::Kolam, Metric::AmoniaTotal, black_box(1.2), &pond))
    });

    group.bench_function("heat_stress", |b| {
        b.iter(|| classifier.klass(Domain::Kandang, Metric::Suhu, black_box(31.0), &pen))
    });

    group.bench_function("string_keys", |b| {
        b.iter(|| classify(black_box("kandang"), black_box("suhu"), 25.0, &none))
    });

    group.finish();
}

fn bench_chemistry(c: &mut Criterion) {
    c.bench_function("uia_from_tan", |b| {
        b.iter(|| uia_from_tan(black_box(1.2), black_box(8.2), black_box(28.0), 0.0))
    });
}

fn bench_summary(c: &mut Criterion) {
    let classifier = Classifier::standard();
    let readings = [
        (Metric::Suhu, 28.0),
        (Metric::Ph, 8.2),
        (Metric::Oksigen, 6.4),
        (Metric::AmoniaTotal, 1.2),
    ];

    c.bench_function("summarize_pond", |b| {
        b.iter(|| classifier.summarize(Domain::Kolam, black_box(&readings)))
    });
}

criterion_group!(benches, bench_classify, bench_chemistry, bench_summary);
criterion_main!(benches);
