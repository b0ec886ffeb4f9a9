use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shingle_dice::{DiceSimilarity, StringSimilarity};

fn benchmark_similarity_short(c: &mut Criterion) {
    let dice = DiceSimilarity::default();

    c.bench_function("similarity_short", |b| {
        b.iter(|| dice.similarity(black_box("Jonathan Smith"), black_box("Smith, Jonathan")))
    });
}

fn benchmark_similarity_long(c: &mut Criterion) {
    let dice = DiceSimilarity::default();

    let s1 = "E-commerce giant Amazon.com Inc. joined the blue-chip index, Dow Jones Industrial \
        Average, replacing drugstore operator Walgreens Boots Alliance on Feb 26. The reshuffle \
        reflects the ongoing shift in economic power from traditional brick-and-mortar retail \
        to e-commerce and technology-driven companies.";
    let s2 = "Amazon.com Inc. replaced Walgreens Boots Alliance in the Dow Jones Industrial \
        Average on Feb 26, a reshuffle reflecting the shift in economic power from \
        brick-and-mortar retail to technology-driven e-commerce companies.";

    c.bench_function("similarity_long", |b| {
        b.iter(|| dice.similarity(black_box(s1), black_box(s2)))
    });
}

criterion_group!(benches, benchmark_similarity_short, benchmark_similarity_long);
criterion_main!(benches);
