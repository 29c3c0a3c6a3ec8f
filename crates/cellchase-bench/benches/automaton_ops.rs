//! Criterion micro-benchmarks for board evolution and movement.

use std::hint::black_box;

use cellchase_automaton::{attempt_move, next_generation, next_generation_with, Rule};
use cellchase_bench::random_board;
use cellchase_core::{Direction, Position};
use cellchase_test_utils::striped;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: one generation of a 100x100 board at 30% density.
fn bench_next_generation_10k(c: &mut Criterion) {
    let board = random_board(100, 100, 0.3, 42);

    c.bench_function("next_generation_10k", |b| {
        b.iter(|| black_box(next_generation(black_box(&board))));
    });
}

/// Benchmark: one generation of a striped 100x100 board under Conway's rule.
fn bench_next_generation_conway_10k(c: &mut Criterion) {
    let board = striped(100, 100);

    c.bench_function("next_generation_conway_10k", |b| {
        b.iter(|| black_box(next_generation_with(black_box(&board), Rule::CONWAY)));
    });
}

/// Benchmark: 50 consecutive generations of the classic-sized 10x10 board.
fn bench_generations_10x10(c: &mut Criterion) {
    let board = random_board(10, 10, 0.1, 7);

    c.bench_function("generations_10x10_x50", |b| {
        b.iter(|| {
            let mut state = board.clone();
            for _ in 0..50 {
                state = next_generation(&state);
            }
            black_box(state)
        });
    });
}

/// Benchmark: Call neighbours() on all 10K cells of a 100x100 board.
fn bench_neighbours_10k(c: &mut Criterion) {
    let board = random_board(100, 100, 0.3, 1);

    c.bench_function("neighbours_10k", |b| {
        b.iter(|| {
            for r in 0..100i32 {
                for col in 0..100i32 {
                    let n = board.neighbours(Position::new(r, col));
                    black_box(n.living_count());
                }
            }
        });
    });
}

/// Benchmark: attempt_move() in every direction from every cell of a 100x100 board.
fn bench_attempt_move_10k(c: &mut Criterion) {
    let board = random_board(100, 100, 0.3, 2);

    c.bench_function("attempt_move_10k", |b| {
        b.iter(|| {
            for r in 0..100i32 {
                for col in 0..100i32 {
                    for d in Direction::ALL {
                        black_box(attempt_move(&board, Position::new(r, col), d));
                    }
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_next_generation_10k,
    bench_next_generation_conway_10k,
    bench_generations_10x10,
    bench_neighbours_10k,
    bench_attempt_move_10k
);
criterion_main!(benches);
