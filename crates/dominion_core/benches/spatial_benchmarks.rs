use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dominion_core::spatial::SpatialGrid;
use dominion_data::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn scatter(count: usize, size: f32) -> Vec<(u32, Vec3)> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..count as u32)
        .map(|i| {
            (
                i,
                Vec3::new(rng.gen_range(0.0..size), rng.gen_range(0.0..size), 0.0),
            )
        })
        .collect()
}

fn bench_grid_rebuild(c: &mut Criterion) {
    let items = scatter(1000, 500.0);
    let mut grid = SpatialGrid::new(25.0, 500.0);

    c.bench_function("grid_rebuild_1000", |b| {
        b.iter(|| grid.rebuild(black_box(&items)))
    });
}

fn bench_grid_query(c: &mut Criterion) {
    let items = scatter(1000, 500.0);
    let mut grid = SpatialGrid::new(25.0, 500.0);
    grid.rebuild(&items);
    let mut out = Vec::new();

    c.bench_function("grid_query_r50", |b| {
        b.iter(|| {
            grid.query_into(
                black_box(250.0),
                black_box(250.0),
                black_box(50.0),
                &mut out,
            );
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_grid_rebuild, bench_grid_query);
criterion_main!(benches);
