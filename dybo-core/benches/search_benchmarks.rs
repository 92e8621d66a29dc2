//! Benchmarks for segmentation, stress prediction and the hypothesis search

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dybo_core::{
    dybo_rule, split_elements, Accent, AccentHypotheses, FormSlot, HypothesisSearch, Preparation, VerbEntry,
};
use std::hint::black_box;

/// Verb with an unstressed root of `len` elements, so no hypothesis is complete
fn unpredictable_verb(len: usize) -> VerbEntry {
    let root = "Ca".repeat(len);
    let forms = [
        (format!("a-{root}-Ca"), "DEF-R-INF"),
        (format!("C-{root}-Ca-Cg"), "C1-R-DYN-DYN.FIN"),
        (format!("C-{root}-Ca-C"), "C1-R-DYN-NEG"),
        (format!("C-{root}"), "C1-R"),
        (format!("C-Cy-{root}-Cy"), "C1-NEG-R-DYN.IMP"),
        (format!("C-{root}-Ca"), "C1-R-ABS"),
        (format!("C-Cy-{root}-Ca"), "C1-NEG-R-NEG.ABS"),
    ];

    VerbEntry {
        forms: forms.map(|(phon, gloss)| FormSlot::new("", phon, gloss)),
        template: "C1-R".to_string(),
        causative: false,
        label: format!("bench-{len}"),
    }
}

fn bench_split_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_elements");

    for span in ["Ca", "CCaCA", "CaaCCyCA", "CYCaCaCCaaC"] {
        group.bench_with_input(BenchmarkId::from_parameter(span), span, |b, span| {
            b.iter(|| black_box(split_elements(black_box(span))));
        });
    }

    group.finish();
}

fn bench_dybo_rule(c: &mut Criterion) {
    let accents = [
        Accent::Unaccented,
        Accent::Unaccented,
        Accent::Accented,
        Accent::Accented,
        Accent::Unaccented,
        Accent::Accented,
    ];
    let tags = ["C1", "NEG", "R0", "R1", "DYN", "DYN.FIN"];

    c.bench_function("dybo_rule", |b| {
        b.iter(|| black_box(dybo_rule(black_box(&accents), black_box(&tags))));
    });
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");

    for elements in [2, 4, 8, 12] {
        group.throughput(Throughput::Elements(1 << elements));
        group.bench_with_input(BenchmarkId::from_parameter(elements), &elements, |b, &elements| {
            b.iter(|| {
                let count = AccentHypotheses::new(elements, 0, false)
                    .expect("within limits")
                    .count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_search");
    let search = HypothesisSearch::default();

    for len in [1, 2, 4, 6] {
        let entry = unpredictable_verb(len);
        let Ok(Preparation::Ready(verb)) = entry.prepare(Default::default()) else {
            panic!("benchmark verb should prepare cleanly");
        };

        group.throughput(Throughput::Elements(1 << len));
        group.bench_with_input(BenchmarkId::new("root_elements", len), &verb, |b, verb| {
            b.iter(|| {
                let outcome = search.search(black_box(verb)).expect("Search should not fail");
                black_box(outcome)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_split_elements,
    bench_dybo_rule,
    bench_enumeration,
    bench_full_search
);
criterion_main!(benches);
