//! Benchmarks for move generation and minimax search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use splendid::ai::{MinimaxConfig, MinimaxPlayer, ValueFunction};
use splendid::cards::GameComponents;
use splendid::core::GameRng;
use splendid::rules::Game;

fn opening() -> Game {
    GameComponents::standard()
        .expect("standard catalog")
        .start_game(&mut GameRng::new(42))
}

fn bench_move_generation(c: &mut Criterion) {
    let game = opening();
    c.bench_function("moves_opening", |b| b.iter(|| black_box(&game).moves()));
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_search");
    let game = opening();

    for ops in [1_000u64, 10_000, 50_000] {
        for pruning in [true, false] {
            let label = if pruning { "alpha_beta" } else { "plain" };
            group.bench_with_input(BenchmarkId::new(label, ops), &ops, |b, &ops| {
                let config = MinimaxConfig::default().with_ops(ops).with_pruning(pruning);
                let search = MinimaxPlayer::new(ValueFunction::default(), config)
                    .expect("valid config");
                b.iter(|| black_box(search.search(black_box(&game))))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_search);
criterion_main!(benches);
