//! Rules Engine Benchmarks
//!
//! Performance benchmarks for legal move generation and move application
//! using Criterion.

use chess_rules::{Color, Game, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn all_legal_count(game: &Game, color: Color) -> usize {
    game.board()
        .pieces_of(color)
        .map(|piece| game.legal_moves(piece.square).len())
        .sum()
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(Game::new())));
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(all_legal_count(&game, Color::White)))
    });
}

fn bench_legal_moves_open_position(c: &mut Criterion) {
    let mut game = Game::new();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4")] {
        game.apply_move(sq(from), sq(to)).unwrap();
    }

    c.bench_function("legal_moves_italian_opening", |b| {
        b.iter(|| black_box(all_legal_count(&game, Color::Black)))
    });
}

fn bench_status(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("status_starting_position", |b| b.iter(|| black_box(game.status())));
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("apply_move_e2e4", |b| {
        b.iter(|| {
            let mut game = Game::new();
            black_box(game.apply_move(sq("e2"), sq("e4")).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves_starting,
    bench_legal_moves_open_position,
    bench_status,
    bench_apply_move,
);
criterion_main!(benches);
