use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use connect_grid::board::Board;
use connect_grid::core::{BoardConfig, GameRng, PlayerId};
use connect_grid::tokens::TokenRegistry;

/// Fill a board with random moves from `players` players, stopping before
/// anyone wins so every scan covers the whole board.
fn crowded_board(registry: &TokenRegistry, size: usize, seed: u64) -> Board<'_> {
    let config = BoardConfig::new(size, size).expect("valid size");
    let tokens: Vec<_> = registry.players().map(|e| e.token).collect();
    let mut board = Board::new(config, registry);
    let mut rng = GameRng::new(seed);

    for turn in 0..size * size {
        let legal = board.legal_columns();
        let Some(&col) = rng.choose(&legal) else { break };
        let mut probe = board.clone();
        probe.apply_move(col, tokens[turn % tokens.len()]).expect("legal column");
        if probe.detect_win().is_complete() {
            break;
        }
        board = probe;
    }
    board
}

fn bench_detect_win(c: &mut Criterion) {
    let mut registry = TokenRegistry::new();
    for i in 0..4 {
        registry.register(PlayerId::new(i), format!("p{i}")).expect("fresh id");
    }

    let mut group = c.benchmark_group("detect_win");
    for size in [4usize, 8, 16, 32] {
        let board = crowded_board(&registry, size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| black_box(board.clone()).detect_win());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect_win);
criterion_main!(benches);
