//! Benchmarks for localization sums and the elliptic genus pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elliptic_genus::jacobi::basis_half_integral;
use elliptic_genus::{
    elliptic_genus, elliptic_genus_chernnum, ChernNumbers, CompleteIntersection,
    HomogeneousSpace, IrreducibleEquivariantVectorBundle, ParabolicSubgroup,
};

fn space(group: &str, levi: &str, crossed: &[usize]) -> HomogeneousSpace {
    let p = ParabolicSubgroup::new(
        group.parse().expect("valid group"),
        levi.parse().expect("valid levi"),
        crossed,
    )
    .expect("valid parabolic");
    HomogeneousSpace::new(p)
}

fn bench_fixed_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_points");

    group.bench_function("gr_2_5", |b| {
        b.iter(|| black_box(space(black_box("A4"), "A1xA2", &[2])));
    });

    group.bench_function("full_flag_a3", |b| {
        b.iter(|| black_box(space(black_box("A3"), "", &[1, 2, 3])));
    });

    group.finish();
}

fn bench_chern_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("chern_numbers");
    group.sample_size(20);

    let gr25 = space("A4", "A1xA2", &[2]);
    group.bench_function("gr_2_5", |b| {
        b.iter(|| black_box(ChernNumbers::compute(black_box(&gr25))));
    });

    let g2 = space("G2", "A1", &[2]);
    group.bench_function("g2_p2", |b| {
        b.iter(|| black_box(ChernNumbers::compute(black_box(&g2))));
    });

    group.finish();
}

fn bench_genus(c: &mut Criterion) {
    let mut group = c.benchmark_group("elliptic_genus");
    group.sample_size(10);

    group.bench_function("chernnum_dim3_q2", |b| {
        b.iter(|| black_box(elliptic_genus_chernnum(black_box(3), black_box(2))));
    });

    let p4 = space("A4", "A3", &[1]);
    let o5 = IrreducibleEquivariantVectorBundle::new(p4.clone(), &[5, 0, 0, 0]).expect("O(5)");
    let quintic = CompleteIntersection::new(p4, o5).expect("quintic");
    group.bench_function("quintic_q3", |b| {
        b.iter(|| black_box(elliptic_genus(black_box(&quintic), 3)));
    });

    group.bench_function("jacobi_basis_d8", |b| {
        b.iter(|| black_box(basis_half_integral(black_box(8), 5)));
    });

    group.finish();
}

criterion_group!(benches, bench_fixed_points, bench_chern_numbers, bench_genus);
criterion_main!(benches);
