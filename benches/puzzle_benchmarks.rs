use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blob_slide::{
    direction::Direction,
    grid::{Grid, Size},
    level::Level,
    puzzle::Puzzle,
    union_find::UnionFind,
};

// Fixed seed for deterministic benchmarks
const BENCHMARK_SEED: u64 = 12345;

fn create_test_puzzle(size: usize) -> Puzzle {
    Level::random(Size::new(size, size), BENCHMARK_SEED).puzzle()
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("move");

    for size in [8, 32, 128].iter() {
        group.bench_with_input(format!("size_{}", size), size, |b, &size| {
            b.iter_batched(
                || create_test_puzzle(size),
                |mut puzzle| {
                    for direction in Direction::MOVES {
                        black_box(puzzle.move_to(direction));
                    }
                    puzzle
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");

    for size in [8, 32, 128].iter() {
        let puzzle = create_test_puzzle(*size);

        group.bench_with_input(format!("size_{}", size), size, |b, _| {
            b.iter(|| black_box(puzzle.check()));
        });
    }

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let grid = Grid::new(128, 96, &mut |x, y| x * y);

    c.bench_function("rotate_128x96", |b| {
        b.iter(|| black_box(grid.rotate(black_box(1))));
    });
}

fn bench_union_find(c: &mut Criterion) {
    c.bench_function("union_find_chain_10000", |b| {
        b.iter(|| {
            let mut sets = UnionFind::new(10_000);

            for i in 1..10_000 {
                sets.union(i - 1, i);
            }

            black_box(sets.find(0))
        });
    });
}

criterion_group!(benches, bench_move, bench_check, bench_rotate, bench_union_find);
criterion_main!(benches);
