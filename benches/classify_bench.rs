use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use ethnos::Classifier;

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::standard();

    let mut group = c.benchmark_group("classify");

    group.bench_function("given_name_hit", |b| {
        b.iter(|| classifier.classify(black_box("Александр Иванов")))
    });

    group.bench_function("flag_short_circuit", |b| {
        b.iter(|| classifier.classify(black_box("Иван 🇺🇦")))
    });

    group.bench_function("suffix_vote_fallback", |b| {
        b.iter(|| classifier.classify(black_box("Джабраилов Ковальчук Церетели")))
    });

    group.bench_function("undetermined_worst_case", |b| {
        b.iter(|| classifier.classify(black_box("qwertyuiop asdfghjkl zxcvbnm")))
    });

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
