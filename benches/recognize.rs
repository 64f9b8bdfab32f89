use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nazvoslovi::recognize;

const OXIDE: &str = "Li2O";
const SALT: &str = "Ca3(PO4)2";
const HYDROGEN_SALT_NAME: &str = "trihydrogenjodistan sodný";
const HYDRATE_NAME: &str = "dihydrát fosforečnanu vápenatého";

fn bench_recognize(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognize");

    group.bench_function("oxide", |b| {
        b.iter(|| black_box(recognize(black_box(OXIDE)).unwrap()))
    });
    group.bench_function("salt", |b| {
        b.iter(|| black_box(recognize(black_box(SALT)).unwrap()))
    });
    group.bench_function("hydrogen_salt_name", |b| {
        b.iter(|| black_box(recognize(black_box(HYDROGEN_SALT_NAME)).unwrap()))
    });
    group.bench_function("hydrate_name", |b| {
        b.iter(|| black_box(recognize(black_box(HYDRATE_NAME)).unwrap()))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let salt = recognize(SALT).unwrap().unwrap();
    let hydrate = recognize(HYDRATE_NAME).unwrap().unwrap();

    let mut group = c.benchmark_group("render");

    group.bench_function("salt_name", |b| b.iter(|| black_box(black_box(&salt).name())));
    group.bench_function("salt_oxidation_formula", |b| {
        b.iter(|| black_box(black_box(&salt).formula(true)))
    });
    group.bench_function("hydrate_name", |b| {
        b.iter(|| black_box(black_box(&hydrate).name()))
    });
    group.bench_function("hydrate_formula", |b| {
        b.iter(|| black_box(black_box(&hydrate).formula(false)))
    });

    group.finish();
}

criterion_group!(benches, bench_recognize, bench_render);
criterion_main!(benches);
