use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lyapunov_explorer::{
    FractalSettings, LogisticMap, LyapunovAlgorithm, RenderSettings, Sector,
    compute_sector_exponents,
};

fn engine_settings(max_iter: usize) -> RenderSettings {
    RenderSettings {
        max_iter,
        transient_iter: 200,
        ..RenderSettings::default()
    }
}

fn bench_single_pixel(c: &mut Criterion) {
    let algorithm = LyapunovAlgorithm::new(
        LogisticMap,
        &FractalSettings::default(),
        &engine_settings(2000),
        256,
        256,
    )
    .unwrap();

    c.bench_function("exponent_single_pixel_2000_iter", |b| {
        b.iter(|| algorithm.compute(black_box(128), black_box(64)))
    });
}

fn bench_sector(c: &mut Criterion) {
    let algorithm = LyapunovAlgorithm::new(
        LogisticMap,
        &FractalSettings::default(),
        &engine_settings(500),
        256,
        256,
    )
    .unwrap();
    let sector = Sector::new(64, 64, 96, 96).unwrap();

    c.bench_function("exponent_sector_32x32_500_iter", |b| {
        b.iter(|| compute_sector_exponents(&algorithm, black_box(sector)))
    });
}

criterion_group!(benches, bench_single_pixel, bench_sector);
criterion_main!(benches);
