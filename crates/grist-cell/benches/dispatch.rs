//! Criterion micro-benchmarks for the dispatch hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grist_cell::{BehaviorRegistry, BehaviorRegistryBuilder, CellState};
use grist_core::{BuiltinIds, CellTypeId, Direction, Interner, TypeRegistry};
use grist_test_utils::{MockGrid, StaticBehavior};

/// A registry with `n` registered custom types, ids returned alongside.
fn registry_with_types(n: usize) -> (BehaviorRegistry, Vec<CellTypeId>) {
    let mut types = TypeRegistry::new();
    let mut strings = Interner::new();
    let builtins = BuiltinIds::register(&mut types, &mut strings);
    let mut builder = BehaviorRegistryBuilder::new(builtins);
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let id = types.register(&format!("custom{i}"), "Custom", "bench type");
        builder
            .register(id, Box::new(StaticBehavior::default()))
            .unwrap();
        ids.push(id);
    }
    (builder.freeze(), ids)
}

/// Benchmark: 10K dispatches on one cell with a warm table cache.
fn bench_can_move_cached(c: &mut Criterion) {
    let (registry, ids) = registry_with_types(64);
    let grid = MockGrid::new(4, 4);
    let cell = CellState::new(ids[63], 0);
    // Prime the cache so every measured dispatch is a hit.
    registry.can_move(&grid, &cell, 0, 0, Direction::Right, "push", 1.0);

    c.bench_function("can_move_cached_10k", |b| {
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(registry.can_move(&grid, &cell, 0, 0, Direction::Right, "push", 1.0));
            }
        });
    });
}

/// Benchmark: first dispatch per cell instance, paying the registry lookup.
fn bench_can_move_first_dispatch(c: &mut Criterion) {
    let (registry, ids) = registry_with_types(64);
    let grid = MockGrid::new(4, 4);
    let id = ids[63];

    c.bench_function("can_move_first_dispatch", |b| {
        b.iter(|| {
            let cell = CellState::new(id, 0);
            black_box(registry.can_move(&grid, &cell, 0, 0, Direction::Right, "push", 1.0));
        });
    });
}

/// Benchmark: builtin special case, no table resolution at all.
fn bench_can_move_builtin_wall(c: &mut Criterion) {
    let (registry, _ids) = registry_with_types(64);
    let grid = MockGrid::new(4, 4);
    let wall = CellState::new(registry.builtins().wall, 0);

    c.bench_function("can_move_builtin_wall_10k", |b| {
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(registry.can_move(&grid, &wall, 0, 0, Direction::Right, "push", 1.0));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_can_move_cached,
    bench_can_move_first_dispatch,
    bench_can_move_builtin_wall
);
criterion_main!(benches);
