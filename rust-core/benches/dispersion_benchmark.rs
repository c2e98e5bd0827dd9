use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;
use std::hint::black_box;
use jj_supercurrent::current::current_from_dispersion;
use jj_supercurrent::dispersion::{linspace, solve};
use jj_supercurrent::hamiltonian::PhysicalParameters;
use jj_supercurrent::interfaces::ModelVariant;
use jj_supercurrent::junction::make_infinite_junction_with;

/// Sweep benchmarks over junction width for both model variants.
/// The parallel backend can be compared against the sequential one with:
/// - cargo bench (rayon, default features)
/// - cargo bench --no-default-features (sequential sweep)
fn bench_dispersion_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispersion_sweep");
    group.sample_size(10);

    let params = PhysicalParameters::new(0.4, 0.2, 1.0)
        .with_rashba(0.5)
        .with_zeeman(0.0, 0.0, 0.1);
    let phases = linspace(0.0, 2.0 * PI, 9);
    let momenta = linspace(-PI, PI, 31);

    for variant in [ModelVariant::ParticleHole, ModelVariant::Spinful] {
        for width in [10, 20, 40] {
            let model = make_infinite_junction_with(width, variant).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", variant), width),
                &model,
                |b, model| {
                    b.iter(|| solve(black_box(model), &phases, &momenta, black_box(&params)))
                },
            );
        }
    }

    group.finish();
}

fn bench_current_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("current_extraction");

    let phases = linspace(0.0, 2.0 * PI, 61);
    let dispersions: Vec<Vec<Vec<f64>>> = phases
        .iter()
        .map(|p| {
            (0..121)
                .map(|k| {
                    let e = 0.2 * (p / 2.0).cos() + 0.01 * k as f64;
                    (0..40).map(|band| if band < 20 { -e } else { e }).collect()
                })
                .collect()
        })
        .collect();

    group.bench_function("reference_sweep_61x121x40", |b| {
        b.iter(|| current_from_dispersion(black_box(&phases), black_box(&dispersions)))
    });

    group.finish();
}

criterion_group!(benches, bench_dispersion_sweep, bench_current_extraction);
criterion_main!(benches);
