//! Criterion micro-benchmarks for the pursuit planner.

use std::hint::black_box;

use cellchase_bench::random_board;
use cellchase_core::{Position, Turn};
use cellchase_engine::SessionConfig;
use cellchase_planner::{plan_pursuit, PlannerMemory, PursuitPlanner};
use cellchase_test_utils::{caged, dead_board};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: plan on an open 10x10 board (straight-line success).
fn bench_plan_open_board(c: &mut Criterion) {
    let board = dead_board(10, 10);

    c.bench_function("plan_open_10x10", |b| {
        b.iter(|| {
            black_box(plan_pursuit(
                Position::new(0, 0),
                PlannerMemory::new(),
                &board,
                Position::new(8, 8),
                Turn(0),
            ))
        });
    });
}

/// Benchmark: plan on the classic starting board.
fn bench_plan_classic_board(c: &mut Criterion) {
    let config = SessionConfig::default();
    let board = config.initial_board().expect("classic board is valid");

    c.bench_function("plan_classic_10x10", |b| {
        b.iter(|| {
            black_box(plan_pursuit(
                config.player_start,
                PlannerMemory::new(),
                &board,
                config.actor_start,
                Turn(0),
            ))
        });
    });
}

/// Benchmark: plan on a dense 32x32 board, where many branches fail.
fn bench_plan_dense_board(c: &mut Criterion) {
    let board = random_board(32, 32, 0.35, 11);

    c.bench_function("plan_dense_32x32", |b| {
        b.iter(|| {
            black_box(plan_pursuit(
                Position::new(0, 0),
                PlannerMemory::new(),
                &board,
                Position::new(16, 16),
                Turn(0),
            ))
        });
    });
}

/// Benchmark: the same dense plan with a warm memory from a previous call.
fn bench_plan_dense_board_warm_memory(c: &mut Criterion) {
    let board = random_board(32, 32, 0.35, 11);
    let warm = plan_pursuit(
        Position::new(0, 0),
        PlannerMemory::new(),
        &board,
        Position::new(16, 16),
        Turn(0),
    )
    .memory;

    c.bench_function("plan_dense_32x32_warm", |b| {
        b.iter(|| {
            black_box(plan_pursuit(
                Position::new(0, 0),
                warm.clone(),
                &board,
                Position::new(16, 16),
                Turn(0),
            ))
        });
    });
}

/// Benchmark: immediate failure from a caged cell.
fn bench_plan_caged(c: &mut Criterion) {
    let board = caged(10, 10, Position::new(5, 5));
    let planner = PursuitPlanner::default();

    c.bench_function("plan_caged", |b| {
        b.iter(|| {
            black_box(planner.plan(
                Position::new(0, 0),
                PlannerMemory::new(),
                &board,
                Position::new(5, 5),
                Turn(0),
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_plan_open_board,
    bench_plan_classic_board,
    bench_plan_dense_board,
    bench_plan_dense_board_warm_memory,
    bench_plan_caged
);
criterion_main!(benches);
